//! Request extractors shared by the handlers.

mod json_object;
mod record_id;
pub use json_object::JsonObject;
pub use record_id::{parse_leading_int, RecordId};
