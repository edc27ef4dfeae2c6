//! Listing catalog, browse criteria, and the property matcher behind search.

pub mod catalog;
pub mod criteria;
pub mod domain;
pub mod matcher;
pub mod router;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, ListingCatalog};
pub use criteria::{CriteriaError, FilterCriteria, RawFilterCriteria};
pub use domain::{ListingOwner, ListingStatus, PropertyId, PropertyRecord};
pub use matcher::{filter_properties, PropertyMatcher};
pub use router::{listing_router, SearchResultsView};
