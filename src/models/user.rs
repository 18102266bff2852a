use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Neutral,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender: Option<Gender>,
    pub rating: f64,
    pub verified: bool,
    pub profile_picture: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// The signed-in account. Without authentication every published ride belongs to it.
    pub fn demo_driver() -> Self {
        Self {
            id: Uuid::from_u128(1),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            gender: Some(Gender::Male),
            rating: 4.9,
            verified: true,
            profile_picture: None,
            // 2021-01-01
            created_at: DateTime::from_timestamp(1_609_459_200, 0).unwrap_or_default(),
        }
    }

    /// Name as shown on a ride card: first name plus last initial.
    pub fn display_name(&self) -> String {
        match self.last_name.chars().next() {
            Some(initial) => format!("{} {}", self.first_name, initial),
            None => self.first_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver(first: &str, last: &str) -> User {
        User {
            id: Uuid::nil(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!("{}@example.com", first.to_lowercase()),
            gender: None,
            rating: 4.8,
            verified: true,
            profile_picture: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_display_name_uses_last_initial() {
        assert_eq!(driver("Priya", "Sharma").display_name(), "Priya S");
        assert_eq!(driver("Arjun", "").display_name(), "Arjun");
    }
}
