//! Location labels used to name graph nodes.
//!
//! Learning works on integer state indices; everything a caller sees is a
//! [`Location`].

use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

/// Human-readable label for a node of the route graph (e.g. `L1`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(String);

impl Location {
    /// Create a new location label.
    ///
    /// # Examples
    ///
    /// ```
    /// use qroute::identifiers::Location;
    ///
    /// let location = Location::new("L9");
    /// assert_eq!(location.as_str(), "L9");
    /// ```
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert the label into its inner String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for Location {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<Location> for &str {
    fn eq(&self, other: &Location) -> bool {
        *self == other.as_str()
    }
}

impl Borrow<str> for Location {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<String> for Location {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Location {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for Location {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Render a route as `[L9, L8, L5]`.
pub fn format_route(route: &[Location]) -> String {
    let labels: Vec<&str> = route.iter().map(Location::as_str).collect();
    format!("[{}]", labels.join(", "))
}
