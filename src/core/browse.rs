use crate::core::filter::{filter_by_cuisines, filter_by_min_rating, filter_by_price};
use crate::core::search::filter_by_substring;
use crate::core::sort::sort_records;
use crate::domain::model::{Collection, Record, StallQuery};
use crate::domain::ports::{BrowseSettings, RecordSource};
use crate::utils::error::Result;

/// Narrows and orders the stall listing for one query. Holds only column
/// names; every call works on the records it is handed.
pub struct BrowseEngine<S: BrowseSettings> {
    settings: S,
}

impl<S: BrowseSettings> BrowseEngine<S> {
    pub fn new(settings: S) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &S {
        &self.settings
    }

    pub fn sort_field(&self, query: &StallQuery) -> &str {
        if query.sort.sorts_by_price() {
            self.settings.lowest_price_field()
        } else {
            self.settings.name_field()
        }
    }

    pub fn browse(&self, records: &[Record], query: &StallQuery) -> Result<Collection> {
        tracing::debug!("Browsing {} stalls with {:?}", records.len(), query);
        let mut stalls = records.to_vec();

        // Blank search box means no search filter, not "match nothing".
        if let Some(search) = query.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            stalls = filter_by_substring(&stalls, self.settings.name_field(), search);
        }

        if let Some(range) = query.price_range {
            stalls = filter_by_price(
                &stalls,
                self.settings.lowest_price_field(),
                self.settings.highest_price_field(),
                range,
            );
            tracing::debug!("Price filter {:?} left {} stalls", range, stalls.len());
        }

        if let Some(min_rating) = query.min_rating {
            stalls = filter_by_min_rating(&stalls, self.settings.rating_field(), min_rating);
            tracing::debug!("Rating filter >= {} left {} stalls", min_rating, stalls.len());
        }

        if !query.cuisines.is_empty() {
            stalls = filter_by_cuisines(&stalls, self.settings.tags_field(), &query.cuisines)?;
            tracing::debug!("Cuisine filter {:?} left {} stalls", query.cuisines, stalls.len());
        }

        let sorted = sort_records(&stalls, self.sort_field(query), query.sort.direction())?;
        tracing::info!("Showing {} of {} stalls ({})", sorted.len(), records.len(), query.sort);
        Ok(sorted)
    }

    pub fn browse_source<R: RecordSource>(&self, source: &R, query: &StallQuery) -> Result<Collection> {
        let records = source.load()?;
        self.browse(&records, query)
    }
}
