use serde::Serialize;

/// Whether the outlier is heavier or lighter than every genuine item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Weight {
    Heavy,
    Light,
}

impl Weight {
    pub const ALL: [Self; 2] = [Self::Heavy, Self::Light];
}

impl crate::Arbitrary for Weight {
    fn random() -> Self {
        if rand::random::<bool>() {
            Self::Heavy
        } else {
            Self::Light
        }
    }
}

impl std::fmt::Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Heavy => write!(f, "heavy"),
            Self::Light => write!(f, "light"),
        }
    }
}
