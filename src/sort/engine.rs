//! Key-specific stable ordering

use std::cmp::Ordering;

use super::key::SortKey;
use crate::record::Record;

/// Orders views by a [`SortKey`]
pub struct SortEngine;

impl SortEngine {
    /// Returns `view` reordered by `key`. All records are retained.
    pub fn sort(view: &[Record], key: SortKey) -> Vec<Record> {
        let mut sorted = view.to_vec();
        Self::sort_in_place(&mut sorted, key);
        sorted
    }

    /// Reorders `records` by `key` in place.
    ///
    /// `sort_by` is stable; ties keep their input order.
    pub fn sort_in_place(records: &mut [Record], key: SortKey) {
        match key {
            SortKey::None => {}
            SortKey::Price => records.sort_by(Self::compare_price),
            SortKey::Popularity => {
                records.sort_by(|a, b| Self::compare_amount(b.popularity, a.popularity))
            }
            SortKey::Ratings => records.sort_by(|a, b| Self::compare_amount(b.ratings, a.ratings)),
        }
    }

    /// Ascending by amount. Records without a parsed amount sit out the
    /// numeric comparison and collect at the end in input order.
    fn compare_price(a: &Record, b: &Record) -> Ordering {
        match (a.price.value(), b.price.value()) {
            (Some(x), Some(y)) => Self::compare_amount(x, y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }

    /// Numeric order where `-0.0 == 0.0`, so signed zeros stay tied.
    /// NaN compares greater than every number.
    fn compare_amount(x: f64, y: f64) -> Ordering {
        match (x.is_nan(), y.is_nan()) {
            (false, false) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            (false, true) => Ordering::Less,
            (true, false) => Ordering::Greater,
            (true, true) => Ordering::Equal,
        }
    }
}
