//! Response writers turning payloads and structured errors into HTTP
//! responses, as plain JSON or as JSON:API documents.

pub mod json;
pub mod jsonapi;
pub mod negotiate;
pub mod status;

pub use json::{ErrorJson, write_err_json, write_json};
pub use jsonapi::{ErrorJsonApi, write_err_jsonapi, write_jsonapi};
pub use negotiate::Format;
