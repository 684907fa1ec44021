//! Hard-coded registration category lists and the update that applies them.
//!
//! The photography event has been re-priced a few times by hand; each revision
//! lives here as a [`PhotographyPricing`] preset and has its own script.

use tracing::{info, warn};

use crate::models::{validate_categories, Event, RegistrationCategory};
use crate::repository::EventRepository;
use crate::{Error, Result};

/// Event the photography scripts target unless told otherwise.
pub const PHOTOGRAPHY_EVENT: &str = "Photography";

/// Fee and prize for one category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier {
    pub fee: f64,
    pub prize: &'static str,
}

/// Pricing for the two photography categories.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhotographyPricing {
    pub dslr: Tier,
    pub mobile: Tier,
}

/// Initial pricing.
pub const SEED_PRICING: PhotographyPricing = PhotographyPricing {
    dslr: Tier { fee: 100.0, prize: "₹3000" },
    mobile: Tier { fee: 50.0, prize: "₹2000" },
};

/// Fee revision.
pub const REVISED_FEES: PhotographyPricing = PhotographyPricing {
    dslr: Tier { fee: 150.0, prize: "₹3000" },
    mobile: Tier { fee: 80.0, prize: "₹2000" },
};

/// Prize correction on top of the revised fees.
pub const CORRECTED_PRIZES: PhotographyPricing = PhotographyPricing {
    dslr: Tier { fee: 150.0, prize: "₹5000 + Certificate" },
    mobile: Tier { fee: 80.0, prize: "₹3000 + Certificate" },
};

impl PhotographyPricing {
    /// The full category list for this pricing, in display order.
    pub fn categories(&self) -> Vec<RegistrationCategory> {
        vec![
            RegistrationCategory::new(
                "DSLR",
                self.dslr.fee,
                self.dslr.prize,
                "Shoot with a DSLR or mirrorless camera. Submit up to 3 unedited photographs on the given theme.",
            ),
            RegistrationCategory::new(
                "Mobile",
                self.mobile.fee,
                self.mobile.prize,
                "Shoot with a smartphone camera. Submit up to 3 photographs; basic exposure and crop edits allowed.",
            ),
        ]
    }
}

/// Overwrite an event's categories and persist it.
///
/// The event is looked up by exact name. Nothing is written when it is
/// missing or when the categories fail validation. The base fee is zeroed
/// whenever categories are set.
pub async fn apply_categories<R>(
    repo: &R,
    event_name: &str,
    categories: Vec<RegistrationCategory>,
) -> Result<Event>
where
    R: EventRepository + ?Sized,
{
    validate_categories(&categories)?;

    let Some(mut event) = repo.find_by_name(event_name).await? else {
        warn!(event = event_name, "Event not found, nothing written");
        return Err(Error::NotFound(format!("event '{}'", event_name)));
    };

    let previous = event.registration_categories.len();
    event.set_registration_categories(categories);
    repo.save(&event).await?;

    info!(
        event = %event.name,
        previous_categories = previous,
        categories = event.registration_categories.len(),
        "Registration categories updated"
    );

    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryEventRepository;
    use mongodb::bson::oid::ObjectId;
    use mongodb::bson::Document;

    fn photography() -> Event {
        Event {
            id: Some(ObjectId::new()),
            name: PHOTOGRAPHY_EVENT.to_string(),
            department: "Fine Arts".to_string(),
            image: None,
            is_active: true,
            registration_fee: 120.0,
            registration_categories: vec![RegistrationCategory::new("Open", 120.0, "₹1000", "")],
            extra: Document::new(),
        }
    }

    #[tokio::test]
    async fn test_apply_sets_categories_and_zeroes_fee() {
        let repo = InMemoryEventRepository::with_events(vec![photography()]);

        let updated = apply_categories(&repo, PHOTOGRAPHY_EVENT, SEED_PRICING.categories())
            .await
            .unwrap();

        assert_eq!(updated.registration_fee, 0.0);
        let stored = repo.snapshot().remove(0);
        assert_eq!(stored.registration_fee, 0.0);
        assert_eq!(stored.registration_categories, SEED_PRICING.categories());
        assert_eq!(repo.write_count(), 1);
    }

    #[tokio::test]
    async fn test_apply_is_idempotent_in_effect() {
        let repo = InMemoryEventRepository::with_events(vec![photography()]);

        for _ in 0..3 {
            apply_categories(&repo, PHOTOGRAPHY_EVENT, REVISED_FEES.categories())
                .await
                .unwrap();
        }

        let stored = repo.snapshot();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].registration_categories, REVISED_FEES.categories());
        assert_eq!(stored[0].registration_fee, 0.0);
        assert_eq!(repo.write_count(), 3);
    }

    #[tokio::test]
    async fn test_missing_event_is_not_found_without_write() {
        let repo = InMemoryEventRepository::with_events(vec![photography()]);

        let err = apply_categories(&repo, "Photo Walk", CORRECTED_PRIZES.categories())
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(repo.write_count(), 0);
        assert_eq!(repo.snapshot()[0], photography_with_id(&repo));
    }

    #[tokio::test]
    async fn test_invalid_categories_are_rejected_before_lookup() {
        let repo = InMemoryEventRepository::with_events(vec![photography()]);
        let mut categories = SEED_PRICING.categories();
        categories[1].fee = -10.0;

        let err = apply_categories(&repo, PHOTOGRAPHY_EVENT, categories).await.unwrap_err();

        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(repo.write_count(), 0);
    }

    #[test]
    fn test_variants_differ_only_in_pricing() {
        let variants = [SEED_PRICING, REVISED_FEES, CORRECTED_PRIZES];
        for pricing in variants {
            let categories = pricing.categories();
            let names: Vec<_> = categories.iter().map(|c| c.category_name.as_str()).collect();
            assert_eq!(names, ["DSLR", "Mobile"]);
            assert_eq!(categories[0].description, SEED_PRICING.categories()[0].description);
        }
        assert_ne!(SEED_PRICING, REVISED_FEES);
        assert_ne!(REVISED_FEES, CORRECTED_PRIZES);
    }

    /// The seeded photography event, with the id the repository assigned.
    fn photography_with_id(repo: &InMemoryEventRepository) -> Event {
        Event {
            id: repo.snapshot()[0].id,
            ..photography()
        }
    }
}
