use chrono::NaiveDate;

use crate::listings::domain::{ListingOwner, ListingStatus, PropertyId, PropertyRecord};

const IMAGE_QUERY: &str = "?auto=compress&cs=tinysrgb&w=800";

fn image(photo: u32) -> String {
    format!("https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg{IMAGE_QUERY}")
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub(super) fn sample_listings() -> Vec<PropertyRecord> {
    vec![
        PropertyRecord {
            id: PropertyId::from(1),
            title: "Modern 2BR Apartment in Surry Hills".to_string(),
            description: "Beautiful modern apartment with city views, walk to Central Station"
                .to_string(),
            location: "Surry Hills, NSW".to_string(),
            rent: 2800,
            bedrooms: 2,
            bathrooms: 2,
            furnished: true,
            pet_friendly: false,
            features: tags(&["Gym", "Pool", "Parking", "Balcony"]),
            images: vec![image(1571460), image(1571467)],
            lister: ListingOwner {
                id: Some(1),
                name: "Sarah Johnson".to_string(),
                phone: "+61 400 123 456".to_string(),
                email: "sarah@example.com".to_string(),
            },
            available_from: date(2024, 2, 1),
            status: ListingStatus::Available,
        },
        PropertyRecord {
            id: PropertyId::from(2),
            title: "Cozy 1BR Studio in Melbourne CBD".to_string(),
            description: "Perfect for young professionals, close to transport and amenities"
                .to_string(),
            location: "Melbourne CBD, VIC".to_string(),
            rent: 2200,
            bedrooms: 1,
            bathrooms: 1,
            furnished: false,
            pet_friendly: true,
            features: tags(&["Concierge", "Rooftop Terrace", "Storage"]),
            images: vec![image(1571468)],
            lister: ListingOwner {
                id: Some(2),
                name: "Michael Chen".to_string(),
                phone: "+61 400 789 123".to_string(),
                email: "michael@example.com".to_string(),
            },
            available_from: date(2024, 1, 15),
            status: ListingStatus::Available,
        },
        PropertyRecord {
            id: PropertyId::from(3),
            title: "Spacious 3BR House in Bondi".to_string(),
            description: "Minutes from Bondi Beach, perfect for families or sharing".to_string(),
            location: "Bondi, NSW".to_string(),
            rent: 4200,
            bedrooms: 3,
            bathrooms: 2,
            furnished: true,
            pet_friendly: true,
            features: tags(&["Garden", "Garage", "BBQ Area", "Ocean Views"]),
            images: vec![image(1571463)],
            lister: ListingOwner {
                id: Some(3),
                name: "Emma Wilson".to_string(),
                phone: "+61 400 456 789".to_string(),
                email: "emma@example.com".to_string(),
            },
            available_from: date(2024, 3, 1),
            status: ListingStatus::Available,
        },
    ]
}
