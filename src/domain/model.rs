use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// One stall or menu item: field name to value, in column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    pub data: Map<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.data.get(field)
    }

    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.data.get(field).and_then(Value::as_str)
    }

    pub fn get_f64(&self, field: &str) -> Option<f64> {
        self.data.get(field).and_then(Value::as_f64)
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(field.into(), value.into());
        self
    }
}

impl From<Map<String, Value>> for Record {
    fn from(data: Map<String, Value>) -> Self {
        Self { data }
    }
}

pub type Collection = Vec<Record>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            Self::Ascending
        } else {
            Self::Descending
        }
    }

    pub fn is_ascending(self) -> bool {
        matches!(self, Self::Ascending)
    }
}

/// The four orderings offered in the stall listing sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOption {
    #[default]
    #[serde(rename = "a-z")]
    AToZ,
    #[serde(rename = "z-a")]
    ZToA,
    #[serde(rename = "low-to-high")]
    LowToHigh,
    #[serde(rename = "high-to-low")]
    HighToLow,
}

impl SortOption {
    pub fn direction(self) -> SortDirection {
        match self {
            Self::AToZ | Self::LowToHigh => SortDirection::Ascending,
            Self::ZToA | Self::HighToLow => SortDirection::Descending,
        }
    }

    pub fn sorts_by_price(self) -> bool {
        matches!(self, Self::LowToHigh | Self::HighToLow)
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::AToZ => "a-z",
            Self::ZToA => "z-a",
            Self::LowToHigh => "low-to-high",
            Self::HighToLow => "high-to-low",
        };
        f.write_str(label)
    }
}

impl FromStr for SortOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace([' ', '_'], "-").as_str() {
            "a-z" => Ok(Self::AToZ),
            "z-a" => Ok(Self::ZToA),
            "low-to-high" => Ok(Self::LowToHigh),
            "high-to-low" => Ok(Self::HighToLow),
            other => Err(format!(
                "unknown sort option '{}', expected one of a-z, z-a, low-to-high, high-to-low",
                other
            )),
        }
    }
}

/// Inclusive bounds checked against a stall's lowest and highest price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub const SLIDER_MIN: f64 = 5.0;
    pub const SLIDER_MAX: f64 = 300.0;

    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::new(30.0, 100.0)
    }
}

pub const CUISINES: &[&str] = &[
    "Asian",
    "Beverages",
    "Bread",
    "Burgers",
    "Chicken",
    "Coffee",
    "Desserts",
    "Filipino",
    "Fries",
    "Healthy",
    "Ice Cream",
    "Noodles",
    "Rice Bowl",
    "Rice Dishes",
    "Sandwiches",
    "Shawarma",
    "Silog",
    "Siomai",
    "Snacks",
    "Soups",
    "Student Meal",
];

/// Everything the listing needs to narrow and order the stall collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StallQuery {
    pub search: Option<String>,
    pub price_range: Option<PriceRange>,
    pub min_rating: Option<f64>,
    #[serde(default)]
    pub cuisines: Vec<String>,
    #[serde(default)]
    pub sort: SortOption,
}

/// Splits a comma separated tags cell into trimmed, non-empty tags.
pub fn parse_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
