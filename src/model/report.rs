use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::contact::{Contact, Phone};
use super::experience::Experience;
use super::ids::Id;
use super::person::Person;

pub const DEFAULT_MIN_PERMANENCE_DAYS: i64 = 90;

/// Tunables accepted by the relationship entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelationshipOptions {
    /// Minimum overlap, in days, for an experience-based relationship.
    pub min_permanence_days: i64,
    /// Only list contacts whose phone matched another person.
    pub require_contact_match: bool,
}

impl Default for RelationshipOptions {
    fn default() -> Self {
        Self {
            min_permanence_days: DEFAULT_MIN_PERMANENCE_DAYS,
            require_contact_match: true,
        }
    }
}

/// A person whose stint at a matching company overlapped the subject's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedByExperience {
    pub related_person_id: Id<Person>,
    pub company: String,
    pub title: String,
    pub overlap_days: i64,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    #[serde(skip)]
    pub experience_id: Id<Experience>,
}

impl RelatedByExperience {
    pub fn from_candidate(candidate: &Experience, overlap_days: i64) -> Self {
        Self {
            related_person_id: candidate.person_id,
            company: candidate.company.clone(),
            title: candidate.title.clone(),
            overlap_days,
            start_date: candidate.start_date,
            end_date: candidate.end_date,
            experience_id: candidate.id,
        }
    }
}

/// One phone from the subject's contact book, with the person it resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedByContact {
    pub phone_id: Id<Phone>,
    pub contact_owner_name: String,
    pub nickname: String,
    pub phone_type: String,
    pub phone_number: String,
    pub contact_id: Id<Contact>,
    pub matched_person_id: Option<Id<Person>>,
    pub matched_person_name: Option<String>,
}

impl RelatedByContact {
    pub fn new(owner: &Person, contact: &Contact, phone: &Phone, matched: Option<&Person>) -> Self {
        Self {
            phone_id: phone.id,
            contact_owner_name: owner.full_name(),
            nickname: contact.nickname.clone(),
            phone_type: phone.phone_type.clone(),
            phone_number: phone.number.clone(),
            contact_id: contact.id,
            matched_person_id: matched.map(|p| p.id),
            matched_person_name: matched.map(|p| p.full_name()),
        }
    }
}

/// The subject's profile as it appears at the top of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonProfile {
    pub id: Id<Person>,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
}

impl From<&Person> for PersonProfile {
    fn from(p: &Person) -> Self {
        Self {
            id: p.id,
            first_name: p.first_name.clone(),
            last_name: p.last_name.clone(),
            phone: p.phone.clone(),
        }
    }
}

/// Everything discovered about one person in a single call. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationshipReport {
    pub person: PersonProfile,
    pub by_experience: Vec<RelatedByExperience>,
    pub by_contact: Vec<RelatedByContact>,
}

impl RelationshipReport {
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_default_to_ninety_days_and_matches_only() {
        let opts = RelationshipOptions::default();
        assert_eq!(opts.min_permanence_days, 90);
        assert!(opts.require_contact_match);
    }

    #[test]
    fn options_fill_missing_fields_from_defaults() {
        let opts: RelationshipOptions =
            serde_json::from_str(r#"{"min_permanence_days": 30}"#).unwrap();
        assert_eq!(opts.min_permanence_days, 30);
        assert!(opts.require_contact_match);
    }

    #[test]
    fn experience_entry_hides_experience_id() {
        let entry = RelatedByExperience {
            related_person_id: Id::new(2),
            company: "Acme Corp".into(),
            title: "Engineer".into(),
            overlap_days: 213,
            start_date: NaiveDate::from_ymd_opt(2020, 6, 1).unwrap(),
            end_date: None,
            experience_id: Id::new(9),
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["related_person_id"], 2);
        assert_eq!(value["start_date"], "2020-06-01");
        assert!(value["end_date"].is_null());
        assert!(value.get("experience_id").is_none());
    }

    #[test]
    fn unmatched_contact_serializes_nulls() {
        let owner = Person::new(1, "Ada", "Lovelace", None);
        let contact = Contact { id: Id::new(4), owner_id: owner.id, nickname: "C1".into() };
        let phone = Phone {
            id: Id::new(8),
            contact_id: contact.id,
            phone_type: "mobile".into(),
            number: "5559999999".into(),
        };
        let value = serde_json::to_value(RelatedByContact::new(&owner, &contact, &phone, None)).unwrap();
        assert_eq!(value["contact_owner_name"], "Ada Lovelace");
        assert!(value["matched_person_id"].is_null());
        assert!(value["matched_person_name"].is_null());
    }
}
