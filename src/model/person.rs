use serde::{Deserialize, Serialize};

use super::ids::Id;

/// A person whose employment history and contact book are searched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: Id<Person>,
    pub first_name: String,
    pub last_name: String,
    /// Canonical digits-only phone number.
    pub phone: Option<String>,
}

impl Person {
    pub fn new(id: i64, first_name: &str, last_name: &str, phone: Option<&str>) -> Self {
        Self {
            id: Id::new(id),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            phone: phone.map(|p| p.to_string()),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether `number` is this person's own canonical phone.
    pub fn owns_phone(&self, number: &str) -> bool {
        self.phone.as_deref() == Some(number)
    }
}
