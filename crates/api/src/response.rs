//! Shared response envelope types for API handlers.
//!
//! Most responses use a `{ "data": ... }` envelope. The profile document
//! keeps the `{ "user": ... }` shape the dashboard reads.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// ```ignore
/// Ok(Json(DataResponse { data: user }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
