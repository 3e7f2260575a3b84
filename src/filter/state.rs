//! Pending filter settings

use serde::{Deserialize, Serialize};

use super::errors::{FilterError, FilterResult};

/// Filter settings as edited in the form.
///
/// Editing only changes this value; the working view is narrowed when the
/// filters are applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub min_price: f64,
    pub max_price: f64,
    pub min_ratings: f64,
    /// Empty means no category constraint
    pub category: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            min_price: 0.0,
            max_price: 100.0,
            min_ratings: 0.0,
            category: String::new(),
        }
    }
}

impl FilterState {
    /// Categories offered by the category picker; "All" is the empty category
    pub const CATEGORY_PRESETS: [&'static str; 2] = ["Electronics", "Fashion"];

    /// Builds filter settings from form input text.
    ///
    /// Blank numeric inputs fall back to their defaults.
    pub fn from_form(
        min_price: &str,
        max_price: &str,
        min_ratings: &str,
        category: &str,
    ) -> FilterResult<Self> {
        let defaults = Self::default();
        Ok(Self {
            min_price: parse_field("min_price", min_price, defaults.min_price)?,
            max_price: parse_field("max_price", max_price, defaults.max_price)?,
            min_ratings: parse_field("min_ratings", min_ratings, defaults.min_ratings)?,
            category: category.trim().to_string(),
        })
    }

    /// Same settings with a different category ("" for all)
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_price_range(mut self, min_price: f64, max_price: f64) -> Self {
        self.min_price = min_price;
        self.max_price = max_price;
        self
    }

    pub fn with_min_ratings(mut self, min_ratings: f64) -> Self {
        self.min_ratings = min_ratings;
        self
    }

    pub fn has_category(&self) -> bool {
        !self.category.is_empty()
    }
}

fn parse_field(field: &'static str, text: &str, default: f64) -> FilterResult<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(default);
    }
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(FilterError::InvalidNumber {
            field,
            value: text.to_string(),
        }),
    }
}
