//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure for services:
//! - Password hashing (Argon2, scheme chosen by configuration)
//! - Signed, expiring tokens (HMAC JWT) with identity claims
//! - Issuance and kind-checked validation of access/refresh token pairs
//!
//! Roles are a type parameter of the claims; each service brings its own role enum.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::{PasswordHasher, PasswordScheme};
//!
//! let hasher = PasswordHasher::new(PasswordScheme::Argon2id);
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! ```
//!
//! ## Token Pair
//! ```
//! use auth::{Claims, TokenCodec, TokenIssuer, TokenType};
//! use chrono::FixedOffset;
//! use jsonwebtoken::Algorithm;
//!
//! let codec = TokenCodec::new(
//!     b"secret_key_at_least_32_bytes_long!",
//!     Algorithm::HS256,
//!     FixedOffset::east_opt(0).unwrap(),
//! )
//! .unwrap();
//! let issuer = TokenIssuer::new(codec, 7, 30);
//!
//! let pair = issuer.issue_pair("alice@example.com", &"admin".to_string()).unwrap();
//! let claims: Claims<String> = issuer.validate(&pair.access_token, TokenType::Access).unwrap();
//! assert_eq!(claims.email, "alice@example.com");
//! ```

pub mod issuer;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use issuer::TokenIssuer;
pub use issuer::TokenPair;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::TokenCodec;
pub use jwt::TokenType;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use password::PasswordScheme;
