use serde::{Deserialize, Serialize};

use super::ids::Id;
use super::person::Person;

/// An entry in a person's contact book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: Id<Contact>,
    pub owner_id: Id<Person>,
    pub nickname: String,
}

/// A phone number recorded on a contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    pub id: Id<Phone>,
    pub contact_id: Id<Contact>,
    #[serde(rename = "type")]
    pub phone_type: String,
    /// Digits-only number.
    pub number: String,
}

/// A contact together with the phones recorded on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactWithPhones {
    pub contact: Contact,
    pub phones: Vec<Phone>,
}
