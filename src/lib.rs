pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{cli::CsvFileSource, toml_config::BrowsePreset, toml_config::FieldNames};
pub use crate::core::{
    browse::BrowseEngine,
    menu::menu_for_stall,
    search::{contains, filter_by_substring, suggest},
    sort::{sort, sort_records},
};
pub use crate::domain::model::{Collection, PriceRange, Record, SortDirection, SortOption, StallQuery};
pub use crate::utils::error::{BrowseError, Result};
