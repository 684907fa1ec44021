//! Event document models.
//!
//! The `events` collection is owned by the main web application. These types
//! mirror only the fields the admin scripts touch; everything else is carried
//! through untouched in [`Event::extra`].

use std::collections::HashSet;

use mongodb::bson::oid::ObjectId;
use mongodb::bson::Document;
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::{Error, Result};

/// Name of the collection holding events.
pub const EVENTS_COLLECTION: &str = "events";

/// A competition or activity entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub department: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub registration_fee: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub registration_categories: Vec<RegistrationCategory>,
    /// Fields written by the main application that we don't model.
    #[serde(flatten)]
    pub extra: Document,
}

/// A named registration option with its own fee and prize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationCategory {
    #[validate(length(min = 1, message = "category name must not be empty"))]
    pub category_name: String,
    #[validate(range(min = 0.0, message = "fee must not be negative"))]
    pub fee: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub prize: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

impl RegistrationCategory {
    pub fn new(
        category_name: impl Into<String>,
        fee: f64,
        prize: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            category_name: category_name.into(),
            fee,
            prize: prize.into(),
            description: description.into(),
        }
    }
}

impl Event {
    /// Replace the category list, zeroing the base fee when categories exist.
    pub fn set_registration_categories(&mut self, categories: Vec<RegistrationCategory>) {
        if !categories.is_empty() {
            self.registration_fee = 0.0;
        }
        self.registration_categories = categories;
    }

    /// Per-category pricing supersedes the base fee.
    pub fn fee_invariant_holds(&self) -> bool {
        self.registration_categories.is_empty() || self.registration_fee == 0.0
    }
}

/// Read an explicit `null` the same way as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Check a category list before it is written.
pub fn validate_categories(categories: &[RegistrationCategory]) -> Result<()> {
    let mut seen = HashSet::new();
    for category in categories {
        category.validate()?;
        if !seen.insert(category.category_name.as_str()) {
            return Err(Error::Validation(format!(
                "duplicate category name: {}",
                category.category_name
            )));
        }
    }
    Ok(())
}

/// Listing projection of an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub department: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
    #[serde(default)]
    pub image: Option<String>,
}

impl From<&Event> for EventSummary {
    fn from(event: &Event) -> Self {
        Self {
            name: event.name.clone(),
            department: event.department.clone(),
            is_active: event.is_active,
            image: event.image.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc, Bson};

    fn stored_event() -> Document {
        doc! {
            "_id": ObjectId::new(),
            "name": "Photography",
            "department": "Fine Arts",
            "image": "https://res.cloudinary.com/demo/image/upload/photo.jpg",
            "isActive": true,
            "registrationFee": 100,
            "registrationCategories": [],
            "venue": "Hall B",
            "coordinators": ["A", "B"],
        }
    }

    #[test]
    fn test_unmodelled_fields_survive_round_trip() {
        let original = stored_event();
        let event: Event = bson::from_document(original.clone()).unwrap();
        assert_eq!(event.registration_fee, 100.0);
        assert_eq!(event.extra.get_str("venue").unwrap(), "Hall B");

        let written = bson::to_document(&event).unwrap();
        assert_eq!(written.get("venue"), original.get("venue"));
        assert_eq!(written.get("coordinators"), original.get("coordinators"));
        assert_eq!(written.get("_id"), original.get("_id"));
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let event: Event = bson::from_document(doc! { "name": "Quiz" }).unwrap();
        assert!(!event.is_active);
        assert_eq!(event.image, None);
        assert!(event.registration_categories.is_empty());
    }

    #[test]
    fn test_null_fields_read_as_defaults() {
        let summary: EventSummary = bson::from_document(doc! {
            "name": "Quiz",
            "department": Bson::Null,
            "isActive": Bson::Null,
            "image": Bson::Null,
        })
        .unwrap();
        assert_eq!(summary.department, "");
        assert!(!summary.is_active);
        assert_eq!(summary.image, None);

        let event: Event = bson::from_document(doc! {
            "_id": ObjectId::new(),
            "name": "Photography",
            "department": Bson::Null,
            "registrationFee": Bson::Null,
            "registrationCategories": [
                { "categoryName": "DSLR", "fee": 150, "prize": Bson::Null, "description": Bson::Null },
            ],
        })
        .unwrap();
        assert_eq!(event.department, "");
        assert_eq!(event.registration_fee, 0.0);
        assert_eq!(event.registration_categories[0].prize, "");
        assert_eq!(event.registration_categories[0].description, "");
        assert!(event.extra.is_empty());
    }

    #[test]
    fn test_setting_categories_zeroes_fee() {
        let mut event: Event = bson::from_document(stored_event()).unwrap();
        event.set_registration_categories(vec![RegistrationCategory::new("DSLR", 150.0, "₹3000", "")]);
        assert_eq!(event.registration_fee, 0.0);
        assert!(event.fee_invariant_holds());
    }

    #[test]
    fn test_validate_categories() {
        let ok = vec![
            RegistrationCategory::new("DSLR", 100.0, "", ""),
            RegistrationCategory::new("Mobile", 50.0, "", ""),
        ];
        assert!(validate_categories(&ok).is_ok());

        let negative = vec![RegistrationCategory::new("DSLR", -1.0, "", "")];
        assert!(matches!(validate_categories(&negative), Err(Error::Validation(_))));

        let unnamed = vec![RegistrationCategory::new("", 10.0, "", "")];
        assert!(matches!(validate_categories(&unnamed), Err(Error::Validation(_))));

        let duplicate = vec![
            RegistrationCategory::new("DSLR", 100.0, "", ""),
            RegistrationCategory::new("DSLR", 120.0, "", ""),
        ];
        assert!(matches!(validate_categories(&duplicate), Err(Error::Validation(_))));
    }
}
