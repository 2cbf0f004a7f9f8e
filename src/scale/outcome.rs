use serde::Serialize;

/// What the balance shows after one use.
///
/// Tips are named for the side that goes down, i.e. the heavier side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Outcome {
    Balanced,
    TipLeft,
    TipRight,
}

impl Outcome {
    pub const ALL: [Self; crate::OUTCOMES] = [Self::Balanced, Self::TipLeft, Self::TipRight];

    /// The outcome seen if the two pans were swapped.
    pub fn flip(self) -> Self {
        match self {
            Self::Balanced => Self::Balanced,
            Self::TipLeft => Self::TipRight,
            Self::TipRight => Self::TipLeft,
        }
    }
    /// Dense index for branch tables.
    pub const fn index(self) -> usize {
        match self {
            Self::Balanced => 0,
            Self::TipLeft => 1,
            Self::TipRight => 2,
        }
    }
    /// Relation symbol between the left and right pan.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Balanced => "==",
            Self::TipLeft => ">",
            Self::TipRight => "<",
        }
    }
}

impl crate::Arbitrary for Outcome {
    fn random() -> Self {
        use rand::prelude::IndexedRandom;
        let ref mut rng = rand::rng();
        Self::ALL.choose(rng).copied().expect("ALL is empty")
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
