use serde::Serialize;

/// Opaque item label.
///
/// Strategies must compare items only by identity. Nothing about the label
/// (its text, its numeric look) says where the item sits in the universe.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Item(String);

impl Item {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }
    pub fn label(&self) -> &str {
        &self.0
    }
    /// The standard universe: labels "1" through "12".
    pub fn universe() -> Vec<Self> {
        (1..=crate::BALLS).map(|i| Self(i.to_string())).collect()
    }
}

impl From<&str> for Item {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Item {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
