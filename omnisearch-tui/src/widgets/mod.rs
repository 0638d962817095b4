//! Reusable widget components.

pub mod filter;
pub mod highlight;

pub use filter::{FilterBar, FilterOption};
pub use highlight::highlighted_spans;
