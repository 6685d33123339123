use serde::{Deserialize, Serialize};
use std::fmt;

/// The authenticated user on whose behalf a request runs.
///
/// Authentication happens upstream; the gateway only carries the name
/// through to adapter resolution and document ownership.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Requester(String);

impl Requester {
    /// Creates a requester from a user name. Surrounding whitespace is
    /// stripped and an empty name is rejected.
    pub fn new(name: impl AsRef<str>) -> crate::Result<Self> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(crate::Error::EmptyRequester);
        }
        Ok(Self(name.to_string()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Requester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Requester {
    type Error = crate::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Requester> for String {
    fn from(value: Requester) -> Self {
        value.0
    }
}
