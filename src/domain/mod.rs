mod form_params;
mod issues;
mod messages;
mod status;
mod validation;

pub use form_params::FormParams;
pub use issues::{issues_intersection, Field, IssueCode, IssueSet};
pub use messages::message_for;
pub use status::SubmissionStatus;
pub use validation::validate;
