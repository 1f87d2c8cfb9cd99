//! animkit-catalog-core: the read-only AnimKit animation catalog.
//!
//! Records are loaded once (the built-in set is embedded as JSON) and answer
//! category, id and free-text queries without any write API.

pub mod category;
pub mod error;
pub mod filter;
pub mod record;
pub mod store;

pub use category::{Category, PreviewType};
pub use error::CatalogError;
pub use filter::{result_count_label, CatalogFilter, CategoryFilter};
pub use record::{AnimationRecord, PropDoc};
pub use store::Catalog;

pub type Result<T> = core::result::Result<T, CatalogError>;
