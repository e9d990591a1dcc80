use crate::domain::{FormParams, IssueSet};

/// Where the signup form stands.
///
/// ```text
/// Fresh ──► Pending ──► Success
///   │          ▲  │
///   │          │  ▼
///   └───────► Error
/// ```
///
/// `Success` is terminal for a given form instance.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Fresh,
    Pending,
    Error {
        issues: IssueSet,
        /// The params the remote service rejected. `None` when the issues came from local
        /// validation or from a failed call.
        submitted: Option<FormParams>,
    },
    Success,
}

impl SubmissionStatus {
    pub fn issues(&self) -> Option<&IssueSet> {
        match self {
            SubmissionStatus::Error { issues, .. } => Some(issues),
            _ => None,
        }
    }

    pub fn submitted(&self) -> Option<&FormParams> {
        match self {
            SubmissionStatus::Error { submitted, .. } => submitted.as_ref(),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionStatus::Pending)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionStatus::Success)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Fresh => "fresh",
            SubmissionStatus::Pending => "pending",
            SubmissionStatus::Error { .. } => "error",
            SubmissionStatus::Success => "success",
        }
    }
}
