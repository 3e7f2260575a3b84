//! Catalog records
//!
//! Records are immutable once fetched and only ever replaced wholesale by a
//! fresh fetch. The `$`-prefixed price string is parsed once, at
//! deserialization, so downstream stages never re-parse it.

mod errors;
mod model;
mod price;

pub use errors::{PriceParseError, PriceResult};
pub use model::{Record, RecordId};
pub use price::{parse_amount, Price};
