use std::collections::HashSet;
use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::business::errors::BusinessIdError;
use crate::business::errors::BusinessNameError;
use crate::business::errors::LocationError;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Business aggregate entity.
///
/// `owner_id` is the administrator who created it; it becomes `None` if that user row
/// is ever removed. `members` is the roster of assigned users.
#[derive(Debug, Clone, PartialEq)]
pub struct Business {
    pub id: BusinessId,
    pub name: BusinessName,
    pub location: Location,
    pub owner_id: Option<UserId>,
    pub members: Vec<UserId>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub display_picture: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Business {
    /// Only the owner may mutate or delete a business.
    pub fn is_owned_by(&self, user: &User) -> bool {
        self.owner_id == Some(user.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BusinessId(pub Uuid);

impl BusinessId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a business ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, BusinessIdError> {
        Uuid::parse_str(s)
            .map(BusinessId)
            .map_err(|e| BusinessIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for BusinessId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BusinessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Globally unique business name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessName(String);

impl BusinessName {
    const MAX_LENGTH: usize = 255;

    pub fn new(name: String) -> Result<Self, BusinessNameError> {
        let trimmed = name.trim();
        let length = trimmed.chars().count();

        if length == 0 {
            Err(BusinessNameError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(BusinessNameError::TooLong {
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

impl fmt::Display for BusinessName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Geographic coordinates in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    latitude: f64,
    longitude: f64,
}

impl Location {
    /// # Errors
    /// * `LatitudeOutOfRange` - Latitude outside [-90, 90] or not finite
    /// * `LongitudeOutOfRange` - Longitude outside [-180, 180] or not finite
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, LocationError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(LocationError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(LocationError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Editable fields of a business, used for both creation and full replacement.
#[derive(Debug, Clone)]
pub struct BusinessDetails {
    pub name: BusinessName,
    pub location: Location,
    pub members: Vec<UserId>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub display_picture: Option<String>,
}

/// Collapse repeated member ids, keeping the first occurrence of each.
pub fn distinct_members(members: Vec<UserId>) -> Vec<UserId> {
    let mut seen = HashSet::with_capacity(members.len());
    members.into_iter().filter(|id| seen.insert(*id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_bounds() {
        assert!(Location::new(27.7172, 85.3240).is_ok());
        assert!(Location::new(-90.0, 180.0).is_ok());
        assert_eq!(
            Location::new(90.5, 0.0),
            Err(LocationError::LatitudeOutOfRange(90.5))
        );
        assert_eq!(
            Location::new(0.0, -180.5),
            Err(LocationError::LongitudeOutOfRange(-180.5))
        );
        assert!(Location::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_business_name_validation() {
        assert_eq!(
            BusinessName::new(" Clean Co ".to_string()).unwrap().as_str(),
            "Clean Co"
        );
        assert_eq!(BusinessName::new("".to_string()), Err(BusinessNameError::Empty));
    }

    #[test]
    fn test_distinct_members_keeps_first_occurrence() {
        let a = UserId::new();
        let b = UserId::new();

        assert_eq!(distinct_members(vec![a, b, a, a, b]), vec![a, b]);
        assert!(distinct_members(vec![]).is_empty());
    }

    #[test]
    fn test_business_id_parsing() {
        let id = BusinessId::new();
        assert_eq!(BusinessId::from_string(&id.to_string()).unwrap(), id);
        assert!(BusinessId::from_string("not-a-uuid").is_err());
    }
}
