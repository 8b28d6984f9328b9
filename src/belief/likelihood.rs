use crate::Arbitrary;
use crate::Probability;

/// per-bin probability that villain produces a fixed response,
/// indexed identically to the Distribution it conditions.
///
/// distinct Likelihoods for the mutually exclusive responses at one
/// decision point must sum to 1 per bin; Spot::new enforces this at
/// the root where incoherence would silently corrupt every EV.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Likelihood(Vec<Probability>);

impl Likelihood {
    pub fn n(&self) -> usize {
        self.0.len()
    }
    /// P(response | hand type i)
    pub fn density(&self, i: usize) -> Probability {
        self.0.get(i).copied().unwrap_or(0.)
    }
    pub fn iter(&self) -> impl Iterator<Item = &Probability> {
        self.0.iter()
    }
    /// an impossible response for every hand type
    pub fn never(n: usize) -> Self {
        Self(vec![0.; n])
    }
    /// a certain response for every hand type
    pub fn always(n: usize) -> Self {
        Self(vec![1.; n])
    }
}

impl From<Vec<Probability>> for Likelihood {
    fn from(weights: Vec<Probability>) -> Self {
        Self(weights)
    }
}

impl std::fmt::Display for Likelihood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}]",
            self.0
                .iter()
                .map(|p| format!("{:.3}", p))
                .collect::<Vec<_>>()
                .join(" ")
        )
    }
}

impl Arbitrary for Likelihood {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        Self((0..4).map(|_| rng.random::<Probability>()).collect())
    }
}
