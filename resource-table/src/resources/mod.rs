//! Adapters for the console backend's resources.
//!
//! Each adapter pairs a record type with its form type, table schema and
//! collection endpoint, so [`HttpClient::resource`](crate::api::HttpClient::resource)
//! can build a [`ResourceApi`](crate::api::ResourceApi) for it.

mod category;
mod employee;
mod expense;
mod item;
mod location;
mod order;
mod user;

pub use category::{Category, CategoryForm};
pub use employee::{Employee, EmployeeForm};
pub use expense::{Expense, ExpenseFilters, ExpenseForm, PAYMENT_METHODS, RECURRING_FREQUENCIES};
pub use item::{Item, ItemForm, ItemTab};
pub use location::{Location, LocationForm};
pub use order::{Order, OrderForm, OrderLine, PaymentStatus};
pub use user::{Role, User, UserForm};
