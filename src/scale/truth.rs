use super::*;
use crate::Arbitrary;
use serde::Serialize;

/// The hidden ground truth of a run: which item is odd, and which way.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Truth {
    outlier: Item,
    weight: Weight,
}

impl Truth {
    pub fn new(outlier: Item, weight: Weight) -> Self {
        Self { outlier, weight }
    }
    pub fn outlier(&self) -> &Item {
        &self.outlier
    }
    pub fn weight(&self) -> Weight {
        self.weight
    }
}

impl Arbitrary for Truth {
    fn random() -> Self {
        use rand::prelude::IndexedRandom;
        let ref mut rng = rand::rng();
        let outlier = Item::universe()
            .choose(rng)
            .cloned()
            .expect("universe is empty");
        Self::new(outlier, Weight::random())
    }
}

impl std::fmt::Display for Truth {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ({})", self.outlier, self.weight)
    }
}
