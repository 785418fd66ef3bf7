use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Body of a full-collection save.
///
/// Collections are only ever written wholesale: the client re-sends the entire
/// array and the server replaces the stored one. The `reset` flag must be set
/// to `true` for the save to be accepted; it guards against accidental partial
/// writes from callers that assume patch semantics.
///
/// `expectedVersion` is optional. When present, the save only succeeds if the
/// stored collection still has that version, turning the replace into a
/// compare-and-swap. When absent, the last writer wins.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveListDto<T> {
    #[serde(default)]
    pub reset: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_version: Option<u64>,
    pub list: Vec<T>,
}
