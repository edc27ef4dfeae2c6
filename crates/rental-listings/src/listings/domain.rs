use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Identifier wrapper for a listing. Numeric ids are kept as their decimal text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PropertyId(pub String);

impl PropertyId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for PropertyId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for PropertyId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for PropertyId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(u64),
            Text(String),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Number(value) => Ok(Self::from(value)),
            RawId::Text(value) => Ok(Self(value)),
        }
    }
}

/// Lifecycle label carried by a listing. No transitions are enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    Available,
    PendingReview,
    Rented,
}

impl ListingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ListingStatus::Available => "available",
            ListingStatus::PendingReview => "pending_review",
            ListingStatus::Rented => "rented",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "available" => Some(Self::Available),
            "pending_review" | "pending" => Some(Self::PendingReview),
            "rented" => Some(Self::Rented),
            _ => None,
        }
    }
}

/// Contact details of whoever listed the property, copied onto each record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingOwner {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// One rental listing as shown on the browse and detail pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    pub id: PropertyId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub location: String,
    pub rent: u32,
    pub bedrooms: u8,
    pub bathrooms: u8,
    pub furnished: bool,
    pub pet_friendly: bool,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub lister: ListingOwner,
    #[serde(alias = "available")]
    pub available_from: NaiveDate,
    pub status: ListingStatus,
}

impl PropertyRecord {
    /// One-line summary used by the CLI listing output.
    pub fn headline(&self) -> String {
        format!(
            "#{} {} | {} | ${}/wk | {} bed / {} bath",
            self.id, self.title, self.location, self.rent, self.bedrooms, self.bathrooms
        )
    }
}
