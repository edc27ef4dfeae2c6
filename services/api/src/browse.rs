use crate::infra::load_catalog;
use clap::Args;
use rental_listings::error::AppError;
use rental_listings::listings::{PropertyId, PropertyRecord, RawFilterCriteria, SearchResultsView};
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct BrowseArgs {
    /// JSON or CSV listing catalog (defaults to the built-in sample listings)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Case-insensitive location fragment, e.g. "Bondi"
    #[arg(long)]
    pub(crate) location: Option<String>,
    /// Minimum weekly rent (inclusive)
    #[arg(long)]
    pub(crate) min_rent: Option<String>,
    /// Maximum weekly rent (inclusive)
    #[arg(long)]
    pub(crate) max_rent: Option<String>,
    /// Minimum number of bedrooms
    #[arg(long)]
    pub(crate) bedrooms: Option<String>,
    /// Minimum number of bathrooms
    #[arg(long)]
    pub(crate) bathrooms: Option<String>,
    /// Only furnished (true) or unfurnished (false) listings
    #[arg(long)]
    pub(crate) furnished: Option<String>,
    /// Only pet friendly (true) or no-pet (false) listings
    #[arg(long)]
    pub(crate) pet_friendly: Option<String>,
    /// Emit the results as JSON instead of a text listing
    #[arg(long)]
    pub(crate) json: bool,
}

impl BrowseArgs {
    fn form(&self) -> RawFilterCriteria {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        RawFilterCriteria {
            location: text(&self.location),
            min_rent: text(&self.min_rent),
            max_rent: text(&self.max_rent),
            bedrooms: text(&self.bedrooms),
            bathrooms: text(&self.bathrooms),
            furnished: text(&self.furnished),
            pet_friendly: text(&self.pet_friendly),
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct ShowArgs {
    /// Listing id
    pub(crate) id: String,
    /// JSON or CSV listing catalog (defaults to the built-in sample listings)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) fn run_browse(args: BrowseArgs) -> Result<(), AppError> {
    let criteria = args.form().normalize()?;
    let catalog = load_catalog(args.catalog.as_deref())?;
    let properties = catalog.search(&criteria);

    if args.json {
        let view = SearchResultsView {
            count: properties.len(),
            properties,
        };
        match serde_json::to_string_pretty(&view) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Results unavailable as JSON: {err}"),
        }
    } else {
        print!("{}", render_results(&properties));
    }

    Ok(())
}

pub(crate) fn run_show(args: ShowArgs) -> Result<(), AppError> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let id = PropertyId(args.id);
    let listing = catalog
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("property {id}")))?;

    print!("{}", render_details(listing));
    Ok(())
}

pub(crate) fn render_results(properties: &[&PropertyRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} properties found", properties.len());

    if properties.is_empty() {
        let _ = writeln!(out, "Try adjusting your filters to see more results.");
        return out;
    }

    for listing in properties {
        let _ = writeln!(out, "- {}", listing.headline());
    }
    out
}

pub(crate) fn render_details(listing: &PropertyRecord) -> String {
    let yes_no = |flag: bool| if flag { "yes" } else { "no" };
    let mut out = String::new();

    let _ = writeln!(out, "{} (#{})", listing.title, listing.id);
    let _ = writeln!(out, "Location: {}", listing.location);
    let _ = writeln!(out, "Rent: ${} per week", listing.rent);
    let _ = writeln!(
        out,
        "Bedrooms: {} | Bathrooms: {}",
        listing.bedrooms, listing.bathrooms
    );
    let _ = writeln!(
        out,
        "Furnished: {} | Pet friendly: {}",
        yes_no(listing.furnished),
        yes_no(listing.pet_friendly)
    );
    let _ = writeln!(out, "Available from: {}", listing.available_from);
    let _ = writeln!(out, "Status: {}", listing.status.label());

    if !listing.description.is_empty() {
        let _ = writeln!(out, "\n{}", listing.description);
    }
    if !listing.features.is_empty() {
        let _ = writeln!(out, "\nFeatures: {}", listing.features.join(", "));
    }

    let _ = writeln!(
        out,
        "\nContact {} | {} | {}",
        listing.lister.name, listing.lister.phone, listing.lister.email
    );
    out
}
