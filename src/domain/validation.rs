use crate::domain::{Field, FormParams, IssueCode, IssueSet};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

/// Something before an `@`, something after it. Deliberately loose: a visitor with an unusual but
/// working address should never be turned away by the landing page.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r".+@.+").expect("valid hardcoded regex"));

/// Checks `params` locally, without asking the remote service anything.
///
/// Each field gets at most one issue - the first rule that applies. Returns `None` when the form
/// is clean.
pub fn validate(params: &FormParams) -> Option<IssueSet> {
    let mut issues = BTreeMap::new();

    if params.name.trim().is_empty() {
        issues.insert(Field::Name, IssueCode::Required);
    }

    if params.email.is_empty() {
        issues.insert(Field::Email, IssueCode::Required);
    } else if !EMAIL_SHAPE.is_match(&params.email) {
        issues.insert(Field::Email, IssueCode::Invalid);
    }

    IssueSet::from_map(issues)
}
