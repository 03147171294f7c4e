//! Product listing core: joins a catalogue and filters and sorts it.
//!
//! Users own categories and categories group products. This crate resolves
//! each product's category and owner, then narrows the list by owner,
//! selected categories, and a name search before ordering it by one column.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Loading a dataset of users, categories, and products from JSON
//! - Joining products with their category and owner, tolerating dangling
//!   references
//! - Composable owner, category, and search filters
//! - A tri-state column sort (ascending, descending, unsorted)
//! - A controller holding the current selections, plus view-model helpers
//!   and a plain-text table renderer
//!
//! # Example
//!
//! ```
//! use product_listing::{Catalogue, Dataset, ListingController, SortKey};
//!
//! let json = r#"{
//!     "version": 1,
//!     "users": [{"id": 1, "name": "Anna", "sex": "f"}],
//!     "categories": [{"id": 1, "title": "Fruits", "icon": "🍏", "ownerId": 1}],
//!     "products": [
//!         {"id": 1, "name": "Cherry", "categoryId": 1},
//!         {"id": 2, "name": "Banana", "categoryId": 1}
//!     ]
//! }"#;
//!
//! let dataset = Dataset::from_json(json).expect("valid dataset");
//! let mut controller = ListingController::new(Catalogue::from_dataset(&dataset));
//! controller.set_owner_filter("Anna");
//! controller.set_sort(SortKey::Name);
//!
//! assert_eq!(controller.listing().ids(), vec![2, 1]);
//! ```

pub mod cli;
mod config;
mod controller;
mod dataset;
mod enrich;
mod error;
mod filter;
mod pipeline;
mod sort;
mod view;

pub use config::{ConfigError, ListingSettings};
pub use controller::ListingController;
pub use dataset::{Category, Dataset, Product, Sex, User};
pub use enrich::{Catalogue, EnrichedProduct, enrich_products};
pub use error::{DatasetError, RecordKind};
pub use filter::{ALL_OWNERS, FilterState, OwnerFilter, SearchText, apply_filters};
pub use pipeline::{Listing, run_pipeline};
pub use sort::{ParseSortKeyError, SortKey, SortState, compare_by, compare_text, sort_products};
pub use view::{
    CategoryChip, ColumnHeader, NO_MATCHES_MESSAGE, OwnerTab, OwnerTone, ProductRow,
    SortIndicator, category_chips, column_headers, owner_tabs, render_table,
};
