pub mod errors;
pub mod hasher;

pub use errors::PasswordError;
pub use hasher::PasswordHasher;
pub use hasher::PasswordScheme;
