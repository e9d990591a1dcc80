use std::collections::BTreeMap;
use std::fmt;

/// The form fields an issue can be attached to. `Base` covers problems with the form as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Base,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Base => "base",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "name" => Some(Field::Name),
            "email" => Some(Field::Email),
            "base" => Some(Field::Base),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Machine-readable issue codes.
///
/// The remote service is free to come up with codes we have never heard of: they are kept as
/// `Unknown` rather than rejected, and simply have no message attached to them.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(from = "String", into = "String")]
pub enum IssueCode {
    Required,
    Invalid,
    NotUnique,
    Error,
    Unknown(String),
}

impl IssueCode {
    pub fn as_str(&self) -> &str {
        match self {
            IssueCode::Required => "required",
            IssueCode::Invalid => "invalid",
            IssueCode::NotUnique => "not-unique",
            IssueCode::Error => "error",
            IssueCode::Unknown(code) => code,
        }
    }
}

impl From<String> for IssueCode {
    fn from(s: String) -> Self {
        match s.as_str() {
            "required" => IssueCode::Required,
            "invalid" => IssueCode::Invalid,
            "not-unique" => IssueCode::NotUnique,
            "error" => IssueCode::Error,
            _ => IssueCode::Unknown(s),
        }
    }
}

impl From<IssueCode> for String {
    fn from(code: IssueCode) -> Self {
        code.as_str().to_owned()
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-empty set of issues, at most one per field.
///
/// There is no way to build an empty `IssueSet`: "no issues" is spelled `None` wherever an
/// `Option<IssueSet>` is expected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueSet(BTreeMap<Field, IssueCode>);

impl IssueSet {
    /// Returns `None` if `issues` is empty.
    pub fn from_map(issues: BTreeMap<Field, IssueCode>) -> Option<Self> {
        if issues.is_empty() {
            None
        } else {
            Some(Self(issues))
        }
    }

    pub fn single(field: Field, code: IssueCode) -> Self {
        Self(BTreeMap::from([(field, code)]))
    }

    /// The generic "something went wrong" issue used for anything that is not the visitor's fault.
    pub fn base_error() -> Self {
        Self::single(Field::Base, IssueCode::Error)
    }

    /// Builds a set out of the loosely typed mapping returned by the remote service.
    ///
    /// Entries for fields this form does not have are dropped, since nothing could display them.
    pub fn from_wire(issues: BTreeMap<String, IssueCode>) -> Option<Self> {
        let issues = issues
            .into_iter()
            .filter_map(|(field, code)| match Field::parse(&field) {
                Some(field) => Some((field, code)),
                None => {
                    tracing::warn!(%field, %code, "Dropping an issue reported for an unknown field");
                    None
                }
            })
            .collect();
        Self::from_map(issues)
    }

    pub fn get(&self, field: Field) -> Option<&IssueCode> {
        self.0.get(&field)
    }

    pub fn has(&self, field: Field, code: &IssueCode) -> bool {
        self.get(field) == Some(code)
    }

    pub fn insert(&mut self, field: Field, code: IssueCode) {
        self.0.insert(field, code);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &IssueCode)> {
        self.0.iter().map(|(field, code)| (*field, code))
    }
}

impl fmt::Display for IssueSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, code) in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{field}: {code}")?;
            first = false;
        }
        Ok(())
    }
}

/// Keeps only the issues that `server` and `local` agree on, field by field.
///
/// A server-reported issue stays on screen only while local validation independently flags the
/// same problem: once the visitor fixes the field, the stale message goes away.
pub fn issues_intersection(
    server: Option<&IssueSet>,
    local: Option<&IssueSet>,
) -> Option<IssueSet> {
    let (server, local) = (server?, local?);
    let shared = local
        .iter()
        .filter(|(field, code)| server.has(*field, code))
        .map(|(field, code)| (field, code.clone()))
        .collect();
    IssueSet::from_map(shared)
}
