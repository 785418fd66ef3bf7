use chrono::NaiveDate;

use crate::server::error::AppError;

/// Validated inclusive date range of an attendance report.
pub struct ReportRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl ReportRange {
    /// Builds a range, rejecting one whose end lies before its start.
    ///
    /// # Arguments
    /// - `from` - First day of the range, inclusive
    /// - `to` - Last day of the range, inclusive
    ///
    /// # Returns
    /// - `Ok(ReportRange)` - A valid range (a single day is allowed)
    /// - `Err(AppError::BadRequest)` - `to` lies before `from`
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, AppError> {
        if to < from {
            return Err(AppError::BadRequest(format!(
                "end date {to} lies before start date {from}"
            )));
        }

        Ok(Self { from, to })
    }
}
