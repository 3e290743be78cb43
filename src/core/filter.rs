use crate::domain::model::{Collection, PriceRange, Record};
use crate::utils::error::Result;
use regex::{Regex, RegexBuilder};

/// Keeps stalls whose whole price span fits inside `range`. Stalls without
/// numeric prices are dropped.
pub fn filter_by_price(
    records: &[Record],
    lowest_field: &str,
    highest_field: &str,
    range: PriceRange,
) -> Collection {
    records
        .iter()
        .filter(|record| {
            match (record.get_f64(lowest_field), record.get_f64(highest_field)) {
                (Some(lowest), Some(highest)) => lowest >= range.min && highest <= range.max,
                _ => false,
            }
        })
        .cloned()
        .collect()
}

pub fn filter_by_min_rating(records: &[Record], rating_field: &str, min_rating: f64) -> Collection {
    records
        .iter()
        .filter(|record| {
            record
                .get_f64(rating_field)
                .is_some_and(|rating| rating >= min_rating)
        })
        .cloned()
        .collect()
}

/// One case-insensitive alternation over the selected cuisines, or `None`
/// when nothing is selected.
pub fn cuisine_pattern(cuisines: &[String]) -> Result<Option<Regex>> {
    let alternatives: Vec<String> = cuisines
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .map(regex::escape)
        .collect();

    if alternatives.is_empty() {
        return Ok(None);
    }

    let regex = RegexBuilder::new(&alternatives.join("|"))
        .case_insensitive(true)
        .build()?;
    Ok(Some(regex))
}

/// Keeps records whose tags mention any of `cuisines`.
pub fn filter_by_cuisines(records: &[Record], tags_field: &str, cuisines: &[String]) -> Result<Collection> {
    let Some(pattern) = cuisine_pattern(cuisines)? else {
        return Ok(records.to_vec());
    };

    Ok(records
        .iter()
        .filter(|record| {
            record
                .get_str(tags_field)
                .is_some_and(|tags| pattern.is_match(tags))
        })
        .cloned()
        .collect())
}
