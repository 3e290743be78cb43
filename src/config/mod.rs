pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::config::toml_config::QueryDefaults;
#[cfg(feature = "cli")]
use crate::domain::model::{PriceRange, SortOption, StallQuery};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, validate_required_field, Validate};
#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "lagoon-eats")]
#[command(about = "Search, filter and sort the Lagoon Eats stall directory")]
pub struct CliConfig {
    /// CSV export of the stall sheet
    #[arg(long)]
    pub data: String,

    /// CSV export of the menu item sheet
    #[arg(long)]
    pub menu: Option<String>,

    /// Show the menu of this stall instead of the listing
    #[arg(long)]
    pub stall: Option<String>,

    /// Stall name to search for
    #[arg(long)]
    pub search: Option<String>,

    /// Print stall names matching this text, for autocomplete
    #[arg(long)]
    pub suggest: Option<String>,

    #[arg(long, default_value = "10")]
    pub suggest_limit: usize,

    /// a-z, z-a, low-to-high or high-to-low
    #[arg(long)]
    pub sort: Option<SortOption>,

    #[arg(long)]
    pub min_price: Option<f64>,

    #[arg(long)]
    pub max_price: Option<f64>,

    #[arg(long)]
    pub min_rating: Option<f64>,

    #[arg(long, value_delimiter = ',')]
    pub cuisine: Vec<String>,

    /// TOML preset with column names and default options
    #[arg(long)]
    pub preset: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Preset defaults with any flags given on the command line laid on top.
    pub fn to_query(&self, defaults: &QueryDefaults) -> StallQuery {
        let mut query = defaults.to_query();
        query.search = self.search.clone();

        if let Some(sort) = self.sort {
            query.sort = sort;
        }

        if self.min_price.is_some() || self.max_price.is_some() {
            let base = query
                .price_range
                .unwrap_or(PriceRange::new(PriceRange::SLIDER_MIN, PriceRange::SLIDER_MAX));
            query.price_range = Some(PriceRange::new(
                self.min_price.unwrap_or(base.min),
                self.max_price.unwrap_or(base.max),
            ));
        }

        if self.min_rating.is_some() {
            query.min_rating = self.min_rating;
        }

        if !self.cuisine.is_empty() {
            query.cuisines = self.cuisine.clone();
        }

        query
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data", &self.data)?;
        if let Some(preset) = &self.preset {
            validate_path("preset", preset)?;
        }
        if self.stall.is_some() {
            let menu = validate_required_field("menu", &self.menu)?;
            validate_path("menu", menu)?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliConfig {
        let mut argv = vec!["lagoon-eats", "--data", "stalls.csv"];
        argv.extend_from_slice(args);
        CliConfig::parse_from(argv)
    }

    #[test]
    fn test_flags_override_preset_defaults() {
        let defaults = QueryDefaults {
            sort: Some(SortOption::ZToA),
            price_range: Some(PriceRange::new(30.0, 100.0)),
            min_rating: Some(3.0),
            cuisines: vec!["Coffee".to_string()],
        };
        let config = parse(&[
            "--sort",
            "low-to-high",
            "--max-price",
            "150",
            "--cuisine",
            "Burgers,Fries",
            "--search",
            "hub",
        ]);
        let query = config.to_query(&defaults);
        assert_eq!(query.sort, SortOption::LowToHigh);
        assert_eq!(query.price_range, Some(PriceRange::new(30.0, 150.0)));
        assert_eq!(query.min_rating, Some(3.0));
        assert_eq!(query.cuisines, vec!["Burgers", "Fries"]);
        assert_eq!(query.search.as_deref(), Some("hub"));
    }

    #[test]
    fn test_single_price_bound_uses_slider_limits() {
        let query = parse(&["--min-price", "50"]).to_query(&QueryDefaults::default());
        assert_eq!(query.price_range, Some(PriceRange::new(50.0, 300.0)));
    }

    #[test]
    fn test_stall_requires_menu() {
        assert!(parse(&["--stall", "3"]).validate().is_err());
        assert!(parse(&["--stall", "3", "--menu", "items.csv"]).validate().is_ok());
        assert!(parse(&[]).validate().is_ok());
    }
}
