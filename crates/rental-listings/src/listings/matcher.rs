use tracing::debug;

use super::criteria::FilterCriteria;
use super::domain::PropertyRecord;

/// Stateless predicate applying every present criterion with logical AND.
///
/// Filtering is stable: survivors keep their relative input order, and the
/// input slice is never modified.
#[derive(Debug, Clone)]
pub struct PropertyMatcher {
    criteria: FilterCriteria,
    location_needle: Option<String>,
}

impl PropertyMatcher {
    pub fn new(criteria: FilterCriteria) -> Self {
        let location_needle = criteria
            .location
            .as_deref()
            .filter(|value| !value.is_empty())
            .map(str::to_lowercase);

        Self {
            criteria,
            location_needle,
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn matches(&self, record: &PropertyRecord) -> bool {
        let criteria = &self.criteria;

        if let Some(needle) = &self.location_needle {
            if !record.location.to_lowercase().contains(needle.as_str()) {
                return false;
            }
        }

        at_least(record.rent, criteria.min_rent)
            && at_most(record.rent, criteria.max_rent)
            && at_least(record.bedrooms, criteria.min_bedrooms)
            && at_least(record.bathrooms, criteria.min_bathrooms)
            && flag_matches(record.furnished, criteria.furnished)
            && flag_matches(record.pet_friendly, criteria.pet_friendly)
    }

    pub fn filter_refs<'a>(&self, properties: &'a [PropertyRecord]) -> Vec<&'a PropertyRecord> {
        let matched: Vec<&PropertyRecord> = properties
            .iter()
            .filter(|record| self.matches(record))
            .collect();

        debug!(
            candidates = properties.len(),
            matched = matched.len(),
            "applied listing filter"
        );
        matched
    }

    pub fn filter(&self, properties: &[PropertyRecord]) -> Vec<PropertyRecord> {
        self.filter_refs(properties).into_iter().cloned().collect()
    }
}

/// Convenience wrapper for one-off filtering.
pub fn filter_properties(
    properties: &[PropertyRecord],
    criteria: &FilterCriteria,
) -> Vec<PropertyRecord> {
    PropertyMatcher::new(criteria.clone()).filter(properties)
}

fn at_least<T: PartialOrd>(value: T, bound: Option<T>) -> bool {
    bound.map_or(true, |bound| value >= bound)
}

fn at_most<T: PartialOrd>(value: T, bound: Option<T>) -> bool {
    bound.map_or(true, |bound| value <= bound)
}

fn flag_matches(value: bool, expected: Option<bool>) -> bool {
    expected.map_or(true, |expected| value == expected)
}
