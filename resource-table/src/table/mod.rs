//! Resource table controller - filtering, tri-state sorting, pagination,
//! column visibility and CRUD-dialog orchestration over a remote collection.
//!
//! One generic [`ResourceTable`] serves every resource screen; the resource
//! type and its API are supplied through a [`ResourceApi`](crate::api::ResourceApi)
//! implementation.
//!
//! # Example
//!
//! ```ignore
//! use resource_table::api::HttpClient;
//! use resource_table::config::HttpConfig;
//! use resource_table::notify::LogNotifier;
//! use resource_table::resources::Item;
//! use resource_table::ResourceTable;
//!
//! let client = HttpClient::new(HttpConfig::from_env())?;
//! let table = ResourceTable::builder(client.resource::<Item>())
//!     .notifier(LogNotifier)
//!     .build();
//!
//! table.load(4).await?;
//! table.set_filter("milk");
//! table.sort("price");
//! let view = table.view();
//! ```

mod columns;
mod controller;
mod dialog;
mod pagination;
mod sort;
mod view;

pub use columns::ColumnVisibility;
pub use controller::{LoadStatus, ResourceTable, ResourceTableBuilder};
pub use dialog::DialogState;
pub use pagination::Pagination;
pub use sort::{Direction, SortState};
pub use view::{Predicate, TableView, filter_rows, matches_text, paginate, sort_rows};
