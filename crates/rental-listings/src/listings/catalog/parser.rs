use chrono::NaiveDate;
use serde::Deserialize;
use std::io::Read;

use super::CatalogError;
use crate::listings::domain::{ListingOwner, ListingStatus, PropertyId, PropertyRecord};

const LIST_SEPARATOR: char = '|';

pub(crate) fn parse_csv<R: Read>(reader: R) -> Result<Vec<PropertyRecord>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut records = Vec::new();

    for result in csv_reader.records() {
        let record = result?;
        // quoted fields may span several lines
        let line = record
            .position()
            .map_or(0, |position| position.line() as usize);
        let row: ListingRow = record.deserialize(Some(&headers))?;
        records.push(row.into_record(line)?);
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct ListingRow {
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    location: String,
    rent: u32,
    bedrooms: u8,
    bathrooms: u8,
    furnished: bool,
    pet_friendly: bool,
    #[serde(default)]
    features: String,
    #[serde(default)]
    images: String,
    #[serde(default)]
    lister_id: Option<u32>,
    lister_name: String,
    lister_phone: String,
    lister_email: String,
    available_from: NaiveDate,
    status: String,
}

impl ListingRow {
    fn into_record(self, line: usize) -> Result<PropertyRecord, CatalogError> {
        if self.id.is_empty() {
            return Err(CatalogError::InvalidRow {
                line,
                reason: "id is empty".to_string(),
            });
        }

        let status = ListingStatus::parse(&self.status).ok_or_else(|| CatalogError::InvalidRow {
            line,
            reason: format!("unknown status '{}'", self.status),
        })?;

        Ok(PropertyRecord {
            id: PropertyId(self.id),
            title: self.title,
            description: self.description,
            location: self.location,
            rent: self.rent,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            furnished: self.furnished,
            pet_friendly: self.pet_friendly,
            features: split_list(&self.features),
            images: split_list(&self.images),
            lister: ListingOwner {
                id: self.lister_id,
                name: self.lister_name,
                phone: self.lister_phone,
                email: self.lister_email,
            },
            available_from: self.available_from,
            status,
        })
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
pub(crate) fn split_list_for_tests(value: &str) -> Vec<String> {
    split_list(value)
}
