//! Client-side list state shared by every table page.
//!
//! Everything here is pure: the same snapshot and the same query always
//! produce the same visible page, so the frontend can memoize on those two
//! values alone.

pub mod facets;
pub mod filter;
pub mod pagination;
pub mod query;
pub mod selection;
pub mod snapshot;
pub mod sort;

pub use facets::{distinct_values, facets, Facets};
pub use filter::{apply_filters, matches_filters, FilterField, Filterable, ListFilters};
pub use pagination::{paginate, total_pages, Page, PageCursor};
pub use query::ListQuery;
pub use selection::{HeaderCheckState, RowSelection};
pub use snapshot::{remove_by_id, replace_by_id, Identifiable};
pub use sort::{sort_page, SortState, Sortable};
