pub mod business;
pub mod user;

pub use business::PostgresBusinessRepository;
pub use user::PostgresUserRepository;
