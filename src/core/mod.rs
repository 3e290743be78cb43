pub mod browse;
pub mod filter;
pub mod menu;
pub mod search;
pub mod sort;

pub use crate::domain::model::{Collection, Record};
pub use crate::domain::ports::{BrowseSettings, RecordSource};
pub use crate::utils::error::Result;
