use crate::Arbitrary;

/// hero's candidate responses after villain bets or raises.
///
/// declaration order is the tie-break priority: when candidate EVs
/// tie, the earliest variant wins. Fold beats Call beats Reraise.
#[derive(Debug, Clone, Copy, Hash, Ord, PartialOrd, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Reply {
    Fold,
    Call,
    Reraise,
}

impl Reply {
    /// fixed priority order over which the argmax runs
    pub const ALL: [Self; 3] = [Self::Fold, Self::Call, Self::Reraise];
}

impl std::fmt::Display for Reply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reply::Fold => write!(f, "f"),
            Reply::Call => write!(f, "c"),
            Reply::Reraise => write!(f, "r"),
        }
    }
}

impl Arbitrary for Reply {
    fn random() -> Self {
        use rand::prelude::IndexedRandom;
        let ref mut rng = rand::rng();
        Self::ALL.choose(rng).copied().expect("ALL is non-empty")
    }
}
