use crate::{model::api::SaveListDto, server::error::AppError};

/// Parameters of a full-collection replace, converted from the wire DTO.
pub struct ReplaceParams<T> {
    pub reset: bool,
    pub expected_version: Option<u64>,
    pub list: Vec<T>,
}

impl<T> ReplaceParams<T> {
    pub fn from_dto(dto: SaveListDto<T>) -> Self {
        Self {
            reset: dto.reset,
            expected_version: dto.expected_version,
            list: dto.list,
        }
    }

    /// Rejects a save that does not carry `reset: true`.
    ///
    /// There are no partial or patch semantics; the flag is the caller's
    /// acknowledgement that the entire collection is being replaced.
    pub fn ensure_reset(&self) -> Result<(), AppError> {
        if self.reset {
            Ok(())
        } else {
            Err(AppError::BadRequest(
                "a collection save must set \"reset\": true".to_string(),
            ))
        }
    }
}
