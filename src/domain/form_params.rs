/// What a visitor typed into the signup form.
///
/// Unlike a parsed domain type, `FormParams` may hold anything - including empty or malformed
/// values. Validation happens on demand through [`crate::domain::validate`], because the page has
/// to keep rendering whatever the visitor typed alongside the issues it has.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct FormParams {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl FormParams {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}
