//! Paginator subsystem
//!
//! Slices an ordered view into fixed-size pages. Pages are 1-based; a
//! request outside the view yields an empty page rather than an error.

mod paginator;

pub use paginator::{PageLink, PaginationState, Paginator};
