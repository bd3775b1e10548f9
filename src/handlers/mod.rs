//! HTTP handlers for login/logout and collection CRUD.

pub mod auth;
pub mod collection;
pub use auth::*;
pub use collection::*;
