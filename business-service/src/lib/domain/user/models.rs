use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::user::errors::EmailError;
use crate::user::errors::FullNameError;
use crate::user::errors::RoleError;
use crate::user::errors::UserIdError;

/// User aggregate entity.
///
/// Represents an invited user. `password_hash` always holds a PHC hash, never plaintext.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub full_name: FullName,
    pub email: EmailAddress,
    pub role: UserRole,
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    ///
    /// # Returns
    /// UserId with random UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Closed set of roles used for access control.
///
/// The same type is stored in the database, embedded in token claims and compared
/// by the role gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Supervisor,
    #[serde(alias = "cleaner")]
    Operator,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::Admin, UserRole::Supervisor, UserRole::Operator];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Supervisor => "supervisor",
            UserRole::Operator => "operator",
        }
    }
}

impl FromStr for UserRole {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(UserRole::Admin),
            "supervisor" => Ok(UserRole::Supervisor),
            "operator" | "cleaner" => Ok(UserRole::Operator),
            other => Err(RoleError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display name of a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullName(String);

impl FullName {
    const MAX_LENGTH: usize = 255;

    /// Create a new full name, trimmed of surrounding whitespace.
    ///
    /// # Errors
    /// * `Empty` - Name is blank
    /// * `TooLong` - Name longer than 255 characters
    pub fn new(full_name: String) -> Result<Self, FullNameError> {
        let trimmed = full_name.trim();
        let length = trimmed.chars().count();

        if length == 0 {
            Err(FullNameError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(FullNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser. Case is preserved and
/// comparisons are case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to invite a new user. The password is assigned by the service.
#[derive(Debug)]
pub struct InviteUserCommand {
    pub full_name: FullName,
    pub email: EmailAddress,
    pub role: UserRole,
}

impl InviteUserCommand {
    pub fn new(full_name: FullName, email: EmailAddress, role: UserRole) -> Self {
        Self {
            full_name,
            email,
            role,
        }
    }
}

/// Command to seed the administrator account at startup.
#[derive(Debug)]
pub struct BootstrapAdminCommand {
    pub full_name: FullName,
    pub email: EmailAddress,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_names() {
        for role in UserRole::ALL {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
            assert_eq!(role.as_str().parse::<UserRole>().unwrap(), role);
        }
    }

    #[test]
    fn test_legacy_cleaner_role_maps_to_operator() {
        let role: UserRole = serde_json::from_str("\"cleaner\"").unwrap();
        assert_eq!(role, UserRole::Operator);
        assert_eq!("cleaner".parse::<UserRole>().unwrap(), UserRole::Operator);
    }

    #[test]
    fn test_unknown_role() {
        assert!(serde_json::from_str::<UserRole>("\"owner\"").is_err());
        assert!(matches!(
            "Admin".parse::<UserRole>(),
            Err(RoleError::Unknown(_))
        ));
    }

    #[test]
    fn test_full_name_validation() {
        assert_eq!(
            FullName::new("  Alice Doe ".to_string()).unwrap().as_str(),
            "Alice Doe"
        );
        assert_eq!(FullName::new("   ".to_string()), Err(FullNameError::Empty));
        assert!(matches!(
            FullName::new("a".repeat(256)),
            Err(FullNameError::TooLong { max: 255, actual: 256 })
        ));
    }

    #[test]
    fn test_email_is_case_preserving() {
        let email = EmailAddress::new("Alice@Example.com".to_string()).unwrap();
        assert_eq!(email.as_str(), "Alice@Example.com");
        assert_ne!(
            email,
            EmailAddress::new("alice@example.com".to_string()).unwrap()
        );
        assert!(EmailAddress::new("not-an-email".to_string()).is_err());
    }
}
