pub mod auth;
pub mod business;
pub mod user;
