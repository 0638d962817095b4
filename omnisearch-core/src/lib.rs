//! OMNISEARCH Core
//!
//! Data types and pure rules of the admin global search: the five entity
//! kinds and their routes, backend records, filters, the categorized result
//! bundle, history, highlighting, result display and redirect resolution.
//! No I/O lives here.

pub mod display;
pub mod entity;
pub mod filters;
pub mod highlight;
pub mod history;
pub mod navigation;
pub mod records;
pub mod results;

pub use display::{result_sections, ItemDisplay, ResultSection, StockBadge, DEFAULT_PREVIEW_LIMIT};
pub use entity::EntityKind;
pub use filters::{EntityFilter, PriceRange, SearchFilters};
pub use highlight::{highlight, Segment};
pub use history::{SearchHistory, DEFAULT_HISTORY_LIMIT};
pub use navigation::{resolve_submit_target, Location, SEARCH_PARAM};
pub use records::{Category, Order, Product, RecordId, Supplier, User};
pub use results::SearchResults;
