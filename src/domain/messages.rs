use crate::domain::{Field, IssueCode};

/// The user-facing text for an issue, if we have one.
///
/// Codes without an entry render nothing rather than failing the page.
pub fn message_for(field: Field, code: &IssueCode) -> Option<&'static str> {
    match (field, code) {
        (Field::Base, IssueCode::Error) => Some("Something went wrong"),
        (Field::Email, IssueCode::Invalid) => Some("That email address doesn't look quite right."),
        (Field::Email, IssueCode::NotUnique) => Some("This email has already been used."),
        (Field::Email, IssueCode::Required) => Some("You'll need an email to join the list."),
        (Field::Name, IssueCode::Required) => Some("Who are you, though?"),
        _ => None,
    }
}
