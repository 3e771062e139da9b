//! Resource table controller library
//!
//! A generic engine that turns a remote resource collection (users, items,
//! categories, locations, employees, orders, expenses) into a filtered,
//! sorted, paginated and editable table view, and mediates every write back
//! to the server.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod model;
pub mod notify;
pub mod resources;
pub mod table;

pub use config::TableConfig;
pub use table::ResourceTable;
pub use table::TableView;
