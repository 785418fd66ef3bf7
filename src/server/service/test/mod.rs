
use crate::server::model::collection::ReplaceParams;

/// Save parameters with the reset flag set and no version token.
fn replace<T>(list: Vec<T>) -> ReplaceParams<T> {
    ReplaceParams {
        reset: true,
        expected_version: None,
        list,
    }
}
