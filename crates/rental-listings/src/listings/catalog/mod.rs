mod parser;
mod sample;

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use tracing::info;

use super::criteria::FilterCriteria;
use super::domain::{PropertyId, PropertyRecord};
use super::matcher::PropertyMatcher;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read listing catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid listing CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid listing JSON data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid listing on line {line}: {reason}")]
    InvalidRow { line: usize, reason: String },
    #[error("listing id '{0}' appears more than once")]
    DuplicateId(PropertyId),
    #[error("unsupported catalog format '{0}', expected .json or .csv")]
    UnsupportedFormat(String),
}

/// Immutable, ordered collection of listings with id lookup.
#[derive(Debug, Clone, Default)]
pub struct ListingCatalog {
    listings: Vec<PropertyRecord>,
    index: HashMap<PropertyId, usize>,
}

impl ListingCatalog {
    pub fn new(listings: Vec<PropertyRecord>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(listings.len());
        for (position, listing) in listings.iter().enumerate() {
            if index.insert(listing.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(listing.id.clone()));
            }
        }

        Ok(Self { listings, index })
    }

    /// The platform's built-in demo listings.
    pub fn sample() -> Self {
        let listings = sample::sample_listings();
        let index = listings
            .iter()
            .enumerate()
            .map(|(position, listing)| (listing.id.clone(), position))
            .collect();
        Self { listings, index }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let catalog = match extension.as_str() {
            "json" => Self::from_json_reader(std::fs::File::open(path)?)?,
            "csv" => Self::from_csv_reader(std::fs::File::open(path)?)?,
            _ => return Err(CatalogError::UnsupportedFormat(path.display().to_string())),
        };

        info!(path = %path.display(), listings = catalog.len(), "loaded listing catalog");
        Ok(catalog)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let listings: Vec<PropertyRecord> = serde_json::from_reader(reader)?;
        Self::new(listings)
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        Self::new(parser::parse_csv(reader)?)
    }

    pub fn listings(&self) -> &[PropertyRecord] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn get(&self, id: &PropertyId) -> Option<&PropertyRecord> {
        self.index
            .get(id)
            .and_then(|position| self.listings.get(*position))
    }

    pub fn search(&self, criteria: &FilterCriteria) -> Vec<&PropertyRecord> {
        PropertyMatcher::new(criteria.clone()).filter_refs(&self.listings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::domain::ListingStatus;
    use std::io::Cursor;

    const CSV_HEADER: &str = "id,title,description,location,rent,bedrooms,bathrooms,furnished,pet_friendly,features,images,lister_name,lister_phone,lister_email,available_from,status\n";

    #[test]
    fn sample_catalog_indexes_every_listing() {
        let catalog = ListingCatalog::sample();

        assert_eq!(catalog.len(), 3);
        for listing in catalog.listings() {
            assert_eq!(catalog.get(&listing.id), Some(listing));
        }
        assert!(catalog.get(&PropertyId::from(99)).is_none());
    }

    #[test]
    fn new_rejects_duplicate_ids() {
        let mut listings = ListingCatalog::sample().listings().to_vec();
        let mut duplicate = listings[0].clone();
        duplicate.title = "Copy".to_string();
        listings.push(duplicate);

        match ListingCatalog::new(listings) {
            Err(CatalogError::DuplicateId(id)) => assert_eq!(id, PropertyId::from(1)),
            other => panic!("expected duplicate id error, got {other:?}"),
        }
    }

    #[test]
    fn json_import_accepts_numeric_ids_and_available_alias() {
        let json = r#"[{
            "id": 7,
            "title": "Terrace in Paddington",
            "location": "Paddington, NSW",
            "rent": 3100,
            "bedrooms": 2,
            "bathrooms": 1,
            "furnished": false,
            "petFriendly": true,
            "lister": {"id": 4, "name": "Ava Lee", "phone": "+61 400 000 000", "email": "ava@example.com"},
            "available": "2024-04-01",
            "status": "pending_review"
        }]"#;

        let catalog = ListingCatalog::from_json_reader(Cursor::new(json)).expect("json imports");
        let listing = catalog.get(&PropertyId::from(7)).expect("listing present");

        assert_eq!(listing.location, "Paddington, NSW");
        assert!(listing.pet_friendly);
        assert!(listing.features.is_empty());
        assert_eq!(listing.status.label(), "pending_review");
    }

    #[test]
    fn json_export_round_trips_the_sample() {
        let sample = ListingCatalog::sample();
        let json = serde_json::to_string(sample.listings()).expect("serializes");
        let reloaded = ListingCatalog::from_json_reader(Cursor::new(json)).expect("reloads");

        assert_eq!(reloaded.listings(), sample.listings());
    }

    #[test]
    fn csv_import_splits_lists_and_parses_status() {
        let csv = format!(
            "{CSV_HEADER}12,Loft,Warehouse conversion,\"Fitzroy, VIC\",2600,1,1,true,false,Lift | Bike Storage,,Noah Park,+61 400 111 222,noah@example.com,2024-05-01,rented\n"
        );

        let catalog = ListingCatalog::from_csv_reader(Cursor::new(csv)).expect("csv imports");
        let listing = catalog.get(&PropertyId::new("12")).expect("listing present");

        assert_eq!(listing.features, vec!["Lift", "Bike Storage"]);
        assert!(listing.images.is_empty());
        assert_eq!(listing.lister.name, "Noah Park");
        assert_eq!(listing.status, ListingStatus::Rented);
    }

    #[test]
    fn csv_import_reports_unknown_status_with_line() {
        let csv = format!(
            "{CSV_HEADER}12,Loft,,Fitzroy,2600,1,1,true,false,,,Noah Park,+61,noah@example.com,2024-05-01,archived\n"
        );

        match ListingCatalog::from_csv_reader(Cursor::new(csv)) {
            Err(CatalogError::InvalidRow { line, reason }) => {
                assert_eq!(line, 2);
                assert!(reason.contains("archived"));
            }
            other => panic!("expected invalid row error, got {other:?}"),
        }
    }

    fn sample_image(photo: u32) -> String {
        format!("https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg?auto=compress&cs=tinysrgb&w=800")
    }

    #[test]
    fn csv_import_reproduces_the_sample_catalog() {
        let header = "id,title,description,location,rent,bedrooms,bathrooms,furnished,pet_friendly,features,images,lister_id,lister_name,lister_phone,lister_email,available_from,status\n";
        let csv = format!(
            "{header}\
1,Modern 2BR Apartment in Surry Hills,\"Beautiful modern apartment with city views, walk to Central Station\",\"Surry Hills, NSW\",2800,2,2,true,false,Gym|Pool|Parking|Balcony,{}|{},1,Sarah Johnson,+61 400 123 456,sarah@example.com,2024-02-01,available\n\
2,Cozy 1BR Studio in Melbourne CBD,\"Perfect for young professionals, close to transport and amenities\",\"Melbourne CBD, VIC\",2200,1,1,false,true,Concierge|Rooftop Terrace|Storage,{},2,Michael Chen,+61 400 789 123,michael@example.com,2024-01-15,available\n\
3,Spacious 3BR House in Bondi,\"Minutes from Bondi Beach, perfect for families or sharing\",\"Bondi, NSW\",4200,3,2,true,true,Garden|Garage|BBQ Area|Ocean Views,{},3,Emma Wilson,+61 400 456 789,emma@example.com,2024-03-01,available\n",
            sample_image(1571460),
            sample_image(1571467),
            sample_image(1571468),
            sample_image(1571463),
        );

        let catalog = ListingCatalog::from_csv_reader(Cursor::new(csv)).expect("csv imports");

        assert_eq!(catalog.listings(), ListingCatalog::sample().listings());
    }

    #[test]
    fn csv_import_blank_lister_id_is_none() {
        let csv = "id,location,rent,bedrooms,bathrooms,furnished,pet_friendly,lister_id,lister_name,lister_phone,lister_email,available_from,status\n\
5,Perth,1900,1,1,false,false,,Kai Tan,+61,kai@example.com,2024-06-01,available\n";

        let catalog = ListingCatalog::from_csv_reader(Cursor::new(csv)).expect("csv imports");

        assert_eq!(catalog.listings()[0].lister.id, None);
    }

    #[test]
    fn csv_import_reports_physical_line_after_multiline_field() {
        let csv = format!(
            "{CSV_HEADER}\
11,Flat,\"Two line\ndescription\",Fitzroy,2600,1,1,true,false,,,Noah Park,+61,noah@example.com,2024-05-01,available\n\
12,Loft,,Fitzroy,2600,1,1,true,false,,,Noah Park,+61,noah@example.com,2024-05-01,archived\n"
        );

        match ListingCatalog::from_csv_reader(Cursor::new(csv)) {
            Err(CatalogError::InvalidRow { line, .. }) => assert_eq!(line, 4),
            other => panic!("expected invalid row error, got {other:?}"),
        }
    }

    #[test]
    fn split_list_drops_blank_items() {
        assert_eq!(parser::split_list_for_tests(" Gym || Pool "), vec!["Gym", "Pool"]);
        assert!(parser::split_list_for_tests("").is_empty());
    }

    #[test]
    fn from_path_rejects_unknown_extensions() {
        match ListingCatalog::from_path("./listings.xml") {
            Err(CatalogError::UnsupportedFormat(path)) => assert!(path.ends_with("listings.xml")),
            other => panic!("expected unsupported format, got {other:?}"),
        }
    }

    #[test]
    fn from_path_propagates_io_errors() {
        match ListingCatalog::from_path("./does-not-exist.json") {
            Err(CatalogError::Io(_)) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
