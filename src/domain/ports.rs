use crate::domain::model::Collection;
use crate::utils::error::Result;

/// Where raw stall or menu records come from. The remote spreadsheet lives
/// behind this seam; the core never talks to it directly.
pub trait RecordSource {
    fn load(&self) -> Result<Collection>;
}

/// Column names the browse stages read from each record.
pub trait BrowseSettings {
    fn name_field(&self) -> &str;
    fn lowest_price_field(&self) -> &str;
    fn highest_price_field(&self) -> &str;
    fn rating_field(&self) -> &str;
    fn tags_field(&self) -> &str;
}
