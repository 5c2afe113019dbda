//! DTOs for the submission endpoint.

use serde::Serialize;

use crate::domain::entities::{AccessPlatform, ReportDate, Submission};

/// Normalized submission echoed back to the caller.
#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub country: String,
    pub date: ReportDate,
    pub access: AccessPlatform,
    pub year: String,
    pub month: String,
    pub day: String,
    /// Dashboard page showing this submission's results.
    pub location: String,
}

impl From<Submission> for SubmissionResponse {
    fn from(submission: Submission) -> Self {
        Self {
            year: submission.year(),
            month: submission.month(),
            day: submission.day(),
            location: submission.country_view_path(),
            country: submission.country,
            date: submission.date,
            access: submission.access,
        }
    }
}
