use serde::{Deserialize, Serialize};

/// acceptable header names for one semantic field, in order of preference.
/// the first candidate present in a row wins.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldCandidates(Vec<String>);

impl FieldCandidates {
    pub fn new<I, S>(candidates: I) -> FieldCandidates
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldCandidates(candidates.into_iter().map(Into::into).collect())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&[&str]> for FieldCandidates {
    fn from(value: &[&str]) -> Self {
        FieldCandidates::new(value.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for FieldCandidates {
    fn from(value: [&str; N]) -> Self {
        FieldCandidates::new(value)
    }
}
