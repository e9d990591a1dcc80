use crate::backend_client::{Backend, BackendError, SubmissionOutcome};
use crate::domain::{
    issues_intersection, message_for, validate, Field, FormParams, IssueCode, IssueSet,
    SubmissionStatus,
};

/// The signup form behind the landing page.
///
/// A `Landing` lives for as long as one rendering of the page: it is mounted, optionally fed the
/// visitor's input, submitted, and then turned into a [`LandingView`]. Everything the page shows
/// (which messages, whether the button is enabled, what it says) is derived on demand from the
/// four pieces of state held here rather than stored alongside them.
pub struct Landing<'a> {
    backend: &'a dyn Backend,
    params: FormParams,
    status: SubmissionStatus,
    response_count: Option<u64>,
}

impl<'a> Landing<'a> {
    pub fn mount(backend: &'a dyn Backend) -> Self {
        Self {
            backend,
            params: FormParams::default(),
            status: SubmissionStatus::Fresh,
            response_count: None,
        }
    }

    /// Asks the remote service how many people signed up so far.
    ///
    /// The count is cosmetic: a failure is logged and shows up as zero, never as an error. The
    /// count is only stored once the call has resolved, so dropping the returned future (or the
    /// `Landing` itself) before that leaves nothing behind.
    #[tracing::instrument(name = "Loading the response count", skip(self))]
    pub async fn load_response_count(&mut self) {
        let count = match self.backend.response_count().await {
            Ok(count) => count.unwrap_or(0),
            Err(e) => {
                tracing::warn!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Failed to fetch the response count, showing zero instead"
                );
                0
            }
        };
        self.response_count = Some(count);
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        if !self.status.is_success() {
            self.params.name = name.into();
        }
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        if !self.status.is_success() {
            self.params.email = email.into();
        }
    }

    /// Validates the form and submits it to the remote service.
    #[tracing::instrument(
        name = "Submitting the signup form",
        skip(self),
        fields(
            response_email = %self.params.email,
            response_name = %self.params.name
        )
    )]
    pub async fn submit(&mut self) {
        if let Some(submitted) = self.begin_submission() {
            let result = self.backend.post_response(&submitted).await;
            self.complete_submission(submitted, result);
        }
    }

    /// First half of [`Landing::submit`]: local checks, then `Pending`.
    ///
    /// Returns the params to send, or `None` when there is nothing to send - either because local
    /// validation failed (the status now says why) or because the form was already accepted.
    pub fn begin_submission(&mut self) -> Option<FormParams> {
        if self.status.is_success() {
            tracing::debug!("Ignoring a submission for a form that was already accepted");
            return None;
        }

        if let Some(issues) = validate(&self.params) {
            tracing::info!(%issues, "Signup form failed local validation");
            self.status = SubmissionStatus::Error {
                issues,
                submitted: None,
            };
            return None;
        }

        self.status = SubmissionStatus::Pending;
        Some(self.params.clone())
    }

    /// Second half of [`Landing::submit`]: folds the remote service's answer into the status.
    pub fn complete_submission(
        &mut self,
        submitted: FormParams,
        result: Result<SubmissionOutcome, BackendError>,
    ) {
        self.status = match result {
            Ok(SubmissionOutcome::Accepted) => SubmissionStatus::Success,
            Ok(SubmissionOutcome::Rejected(issues)) => {
                let issues = issues.unwrap_or_else(IssueSet::base_error);
                tracing::info!(%issues, "The remote service rejected the signup");
                SubmissionStatus::Error {
                    issues,
                    submitted: Some(submitted),
                }
            }
            Err(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Failed to submit the signup form"
                );
                SubmissionStatus::Error {
                    issues: IssueSet::base_error(),
                    submitted: None,
                }
            }
        };
    }

    pub fn params(&self) -> &FormParams {
        &self.params
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn response_count(&self) -> Option<u64> {
        self.response_count
    }

    pub fn can_submit(&self) -> bool {
        self.response_count.is_some() && !self.status.is_pending()
    }

    /// The field issues that still apply to what is currently in the form.
    ///
    /// `email: not-unique` is only known to the remote service, so local validation can never
    /// confirm it: it stays as long as the email is the one that was rejected.
    pub fn unresolved_issues(&self) -> Option<IssueSet> {
        let local = validate(&self.params);
        let mut unresolved = issues_intersection(self.status.issues(), local.as_ref());

        let email_taken = self
            .status
            .issues()
            .map_or(false, |issues| issues.has(Field::Email, &IssueCode::NotUnique));
        let same_email = self
            .status
            .submitted()
            .map_or(false, |submitted| submitted.email == self.params.email);

        if email_taken && same_email {
            unresolved = Some(match unresolved.take() {
                Some(mut issues) => {
                    issues.insert(Field::Email, IssueCode::NotUnique);
                    issues
                }
                None => IssueSet::single(Field::Email, IssueCode::NotUnique),
            });
        }
        unresolved
    }

    pub fn view(&self) -> LandingView {
        let unresolved = self.unresolved_issues();
        let field_message = |field: Field| {
            unresolved
                .as_ref()
                .and_then(|issues| issues.get(field))
                .and_then(|code| message_for(field, code))
        };

        LandingView {
            succeeded: self.status.is_success(),
            name: self.params.name.clone(),
            email: self.params.email.clone(),
            name_message: field_message(Field::Name),
            email_message: field_message(Field::Email),
            base_message: self
                .status
                .issues()
                .and_then(|issues| issues.get(Field::Base))
                .and_then(|code| message_for(Field::Base, code)),
            can_submit: self.can_submit(),
            submit_label: submit_label(self.response_count),
            loading: self.status.is_pending(),
        }
    }
}

/// `None` means the count is still loading and a spinner should be shown instead.
pub fn submit_label(response_count: Option<u64>) -> Option<String> {
    match response_count? {
        count if count > 1 => Some(format!("Vouch with {count} others")),
        _ => Some("I'll vouch for that".to_string()),
    }
}

/// Everything the landing template needs, already decided.
#[derive(Debug, serde::Serialize)]
pub struct LandingView {
    pub succeeded: bool,
    pub name: String,
    pub email: String,
    pub name_message: Option<&'static str>,
    pub email_message: Option<&'static str>,
    pub base_message: Option<&'static str>,
    pub can_submit: bool,
    pub submit_label: Option<String>,
    pub loading: bool,
}
