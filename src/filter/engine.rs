//! Predicate evaluation over a view

use super::state::FilterState;
use crate::observability::{Event, Logger};
use crate::record::Record;

/// Applies a [`FilterState`] to a view
pub struct FilterEngine;

impl FilterEngine {
    /// Retains the records of `view` matching every predicate, in order.
    ///
    /// Records whose price did not parse are skipped and logged.
    pub fn apply(view: &[Record], filter: &FilterState) -> Vec<Record> {
        view.iter()
            .filter(|record| Self::matches(record, filter))
            .cloned()
            .collect()
    }

    /// Checks a single record against all predicates
    pub fn matches(record: &Record, filter: &FilterState) -> bool {
        let price = match record.price.amount() {
            Ok(price) => price,
            Err(err) => {
                Logger::warn(
                    Event::PriceUnparseable,
                    &[
                        ("id", &record.id.to_string()),
                        ("raw", record.price.raw()),
                        ("reason", &err.to_string()),
                    ],
                );
                return false;
            }
        };

        price >= filter.min_price
            && price <= filter.max_price
            && record.ratings >= filter.min_ratings
            && Self::category_matches(record, filter)
    }

    /// Number of records in `view` a filter would skip for an unparseable price
    pub fn unparseable_count(view: &[Record]) -> usize {
        view.iter().filter(|r| !r.price.is_parsed()).count()
    }

    fn category_matches(record: &Record, filter: &FilterState) -> bool {
        !filter.has_category() || record.category.contains(filter.category.as_str())
    }
}
