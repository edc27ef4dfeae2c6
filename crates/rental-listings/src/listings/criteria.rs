use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Optional constraints narrowing a listing collection. Absent fields impose nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_rent: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_rent: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_bedrooms: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_bathrooms: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub furnished: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pet_friendly: Option<bool>,
}

impl FilterCriteria {
    pub fn is_unconstrained(&self) -> bool {
        self.location.as_deref().map_or(true, str::is_empty)
            && self.min_rent.is_none()
            && self.max_rent.is_none()
            && self.min_bedrooms.is_none()
            && self.min_bathrooms.is_none()
            && self.furnished.is_none()
            && self.pet_friendly.is_none()
    }
}

/// Browse form state as submitted: every value is text and `""` means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawFilterCriteria {
    pub location: String,
    pub min_rent: String,
    pub max_rent: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub furnished: String,
    pub pet_friendly: String,
}

impl RawFilterCriteria {
    pub fn normalize(&self) -> Result<FilterCriteria, CriteriaError> {
        let location = non_empty(&self.location).map(str::to_string);

        Ok(FilterCriteria {
            location,
            min_rent: parse_number("minRent", &self.min_rent)?,
            max_rent: parse_number("maxRent", &self.max_rent)?,
            min_bedrooms: parse_number("bedrooms", &self.bedrooms)?,
            min_bathrooms: parse_number("bathrooms", &self.bathrooms)?,
            furnished: parse_flag("furnished", &self.furnished)?,
            pet_friendly: parse_flag("petFriendly", &self.pet_friendly)?,
        })
    }
}

impl TryFrom<RawFilterCriteria> for FilterCriteria {
    type Error = CriteriaError;

    fn try_from(raw: RawFilterCriteria) -> Result<Self, Self::Error> {
        raw.normalize()
    }
}

/// Rejections raised while normalizing form input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CriteriaError {
    #[error("{field} must be a non-negative whole number, got '{value}'")]
    InvalidNumber { field: &'static str, value: String },
    #[error("{field} must be a whole number between 0 and {max}, got '{value}'")]
    OutOfRange {
        field: &'static str,
        value: String,
        max: u64,
    },
    #[error("{field} must be 'true', 'false', or empty, got '{value}'")]
    InvalidFlag { field: &'static str, value: String },
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Unsigned bound types accepted from the browse form.
trait FormNumber: FromStr<Err = ParseIntError> {
    const MAX: u64;
}

impl FormNumber for u8 {
    const MAX: u64 = u8::MAX as u64;
}

impl FormNumber for u32 {
    const MAX: u64 = u32::MAX as u64;
}

fn parse_number<T: FormNumber>(
    field: &'static str,
    value: &str,
) -> Result<Option<T>, CriteriaError> {
    non_empty(value)
        .map(|raw| {
            raw.parse::<T>().map_err(|err| match err.kind() {
                IntErrorKind::PosOverflow => CriteriaError::OutOfRange {
                    field,
                    value: raw.to_string(),
                    max: T::MAX,
                },
                _ => CriteriaError::InvalidNumber {
                    field,
                    value: raw.to_string(),
                },
            })
        })
        .transpose()
}

fn parse_flag(field: &'static str, value: &str) -> Result<Option<bool>, CriteriaError> {
    match non_empty(value) {
        None => Ok(None),
        Some(raw) if raw.eq_ignore_ascii_case("true") => Ok(Some(true)),
        Some(raw) if raw.eq_ignore_ascii_case("false") => Ok(Some(false)),
        Some(raw) => Err(CriteriaError::InvalidFlag {
            field,
            value: raw.to_string(),
        }),
    }
}
