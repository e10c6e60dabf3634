//! Request parameter types.

use serde::Serialize;
use time::Date;

time::serde::format_description!(report_date, Date, "[year]-[month]-[day]");

/// Date range accepted by the historical reports.
///
/// Serializes as `startDate=YYYY-MM-DD&endDate=YYYY-MM-DD`; unset bounds are
/// left out of the query string.
///
/// ```rust
/// use aeso_api_client::DateRangeRequest;
/// use time::macros::date;
///
/// let request = DateRangeRequest::new(date!(2023 - 01 - 01)).end_date(date!(2023 - 01 - 02));
/// assert_eq!(
///     serde_urlencoded::to_string(&request).unwrap(),
///     "startDate=2023-01-01&endDate=2023-01-02"
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeRequest {
    /// First day of the report
    #[serde(with = "report_date::option", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Date>,
    /// Last day of the report
    #[serde(with = "report_date::option", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Date>,
}

impl DateRangeRequest {
    /// Create a request starting on `start_date`.
    pub fn new(start_date: Date) -> Self {
        Self {
            start_date: Some(start_date),
            end_date: None,
        }
    }

    /// Set the last day of the report.
    pub fn end_date(mut self, end_date: Date) -> Self {
        self.end_date = Some(end_date);
        self
    }
}
