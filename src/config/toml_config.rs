use crate::core::BrowseSettings;
use crate::domain::model::{PriceRange, SortOption, StallQuery};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_ordered, validate_range, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional preset file: column names of the exported sheets plus default
/// listing options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowsePreset {
    pub fields: FieldNames,
    pub defaults: QueryDefaults,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldNames {
    pub stall_id: String,
    pub name: String,
    pub lowest_price: String,
    pub highest_price: String,
    pub rating: String,
    pub tags: String,
    pub item_price: String,
}

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            stall_id: "stall_id".to_string(),
            name: "stall_name".to_string(),
            lowest_price: "lowest_price".to_string(),
            highest_price: "highest_price".to_string(),
            rating: "rating".to_string(),
            tags: "tags".to_string(),
            item_price: "price".to_string(),
        }
    }
}

impl BrowseSettings for FieldNames {
    fn name_field(&self) -> &str {
        &self.name
    }

    fn lowest_price_field(&self) -> &str {
        &self.lowest_price
    }

    fn highest_price_field(&self) -> &str {
        &self.highest_price
    }

    fn rating_field(&self) -> &str {
        &self.rating
    }

    fn tags_field(&self) -> &str {
        &self.tags
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryDefaults {
    pub sort: Option<SortOption>,
    pub price_range: Option<PriceRange>,
    pub min_rating: Option<f64>,
    pub cuisines: Vec<String>,
}

impl QueryDefaults {
    pub fn to_query(&self) -> StallQuery {
        StallQuery {
            search: None,
            price_range: self.price_range,
            min_rating: self.min_rating,
            cuisines: self.cuisines.clone(),
            sort: self.sort.unwrap_or_default(),
        }
    }
}

impl BrowsePreset {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let preset = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded browse preset from {}", path.as_ref().display());
        Ok(preset)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

impl Validate for FieldNames {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("fields.stall_id", &self.stall_id)?;
        validate_non_empty_string("fields.name", &self.name)?;
        validate_non_empty_string("fields.lowest_price", &self.lowest_price)?;
        validate_non_empty_string("fields.highest_price", &self.highest_price)?;
        validate_non_empty_string("fields.rating", &self.rating)?;
        validate_non_empty_string("fields.tags", &self.tags)?;
        validate_non_empty_string("fields.item_price", &self.item_price)?;
        Ok(())
    }
}

impl Validate for StallQuery {
    fn validate(&self) -> Result<()> {
        if let Some(range) = self.price_range {
            validate_ordered("price_range", range.min, range.max)?;
        }
        if let Some(min_rating) = self.min_rating {
            validate_range("min_rating", min_rating, 0.0, 5.0)?;
        }
        Ok(())
    }
}

impl Validate for BrowsePreset {
    fn validate(&self) -> Result<()> {
        self.fields.validate()?;
        self.defaults.to_query().validate()
    }
}
