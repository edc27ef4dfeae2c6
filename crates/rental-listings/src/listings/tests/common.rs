use axum::body::to_bytes;
use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::listings::domain::{ListingOwner, ListingStatus, PropertyId, PropertyRecord};

pub(super) fn listing(id: u64, location: &str, rent: u32, bedrooms: u8) -> PropertyRecord {
    PropertyRecord {
        id: PropertyId::from(id),
        title: format!("Listing {id}"),
        description: String::new(),
        location: location.to_string(),
        rent,
        bedrooms,
        bathrooms: 1,
        furnished: false,
        pet_friendly: false,
        features: Vec::new(),
        images: Vec::new(),
        lister: ListingOwner {
            id: None,
            name: "Test Lister".to_string(),
            phone: "+61 400 000 000".to_string(),
            email: "lister@example.com".to_string(),
        },
        available_from: NaiveDate::from_ymd_opt(2024, 2, 1).expect("valid date"),
        status: ListingStatus::Available,
    }
}

/// Surry Hills, Melbourne CBD, and Bondi listings with the browse page flags.
pub(super) fn three_listings() -> Vec<PropertyRecord> {
    let mut surry_hills = listing(1, "Surry Hills", 2800, 2);
    surry_hills.bathrooms = 2;
    surry_hills.furnished = true;

    let mut melbourne = listing(2, "Melbourne CBD", 2200, 1);
    melbourne.pet_friendly = true;

    let mut bondi = listing(3, "Bondi, NSW", 4200, 3);
    bondi.bathrooms = 2;
    bondi.furnished = true;
    bondi.pet_friendly = true;

    vec![surry_hills, melbourne, bondi]
}

pub(super) fn ids(records: &[PropertyRecord]) -> Vec<&str> {
    records.iter().map(|record| record.id.as_str()).collect()
}

pub(super) async fn json_body(response: Response) -> Value {
    let body = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
