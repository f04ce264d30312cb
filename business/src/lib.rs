//! Business layer of the users directory.
//!
//! - `provider`: one-time fetch into the `UsersSnapshot`
//! - `pipeline` / `view`: filter + sort into `DirectoryView`
//! - `pagination` / `view_input`: page slicing and the user-controlled inputs
//!
//! UI code reads `UsersSnapshot` and `DirectoryView` via `ctx.cached`, writes
//! `ViewInput` via `ctx.update`, and starts the fetch with
//! `ctx.dispatch::<FetchUsersCommand>()`.

pub mod api;
mod config;
pub mod http;
pub mod pagination;
pub mod pipeline;
mod provider;
mod record;
mod view;
mod view_input;

pub use api::FetchError;
pub use config::{ConfigError, DEFAULT_API_BASE_URL, DEFAULT_USER_LIMIT, DirectoryConfig};
pub use pagination::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS, Page, paginate};
pub use pipeline::{SortDirection, SortKey, derive_view};
pub use provider::{FetchUsersCommand, SnapshotResult, UsersSnapshot, register};
pub use record::{RawUser, Record, Status, StatusPolicy, UsersResponse};
pub use view::DirectoryView;
pub use view_input::ViewInput;
