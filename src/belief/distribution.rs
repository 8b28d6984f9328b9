use crate::belief::likelihood::Likelihood;
use crate::Arbitrary;
use crate::Probability;

/// a distribution over a fixed ordered set of villain hand-type bins.
///
/// a prior or posterior carries unit mass. the all-zero vector is the
/// one sanctioned degenerate: it marks a branch that villain never
/// takes under the model, and any EV computed against it is vacuous.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Distribution(Vec<Probability>);

impl Distribution {
    pub fn n(&self) -> usize {
        self.0.len()
    }
    /// weight of hand-type bin i. 0 for out-of-range bins.
    pub fn density(&self, i: usize) -> Probability {
        self.0.get(i).copied().unwrap_or(0.)
    }
    pub fn iter(&self) -> impl Iterator<Item = &Probability> {
        self.0.iter()
    }
    /// total mass. 1 for well-formed beliefs, 0 for off-path posteriors.
    pub fn mass(&self) -> Probability {
        self.0.iter().sum()
    }
    /// true when this is the all-zero off-path posterior
    pub fn is_vacuous(&self) -> bool {
        self.mass() == 0.
    }

    /// bayesian update against an observed villain response.
    ///
    /// element-wise product with the likelihood, renormalized. when the
    /// conditioning event has zero mass under the model we return the
    /// all-zero vector rather than fail; the caller never weights that
    /// branch because its reach probability vanishes with it.
    pub fn condition(&self, likelihood: &Likelihood) -> Self {
        let joint = self
            .0
            .iter()
            .enumerate()
            .map(|(i, p)| p * likelihood.density(i))
            .collect::<Vec<_>>();
        let mass = joint.iter().sum::<Probability>();
        if mass > 0. {
            Self(joint.iter().map(|p| p / mass).collect())
        } else {
            Self(vec![0.; self.n()])
        }
    }

    /// unconditional probability of the response: Σᵢ self[i]·likelihood[i]
    pub fn expectation(&self, likelihood: &Likelihood) -> Probability {
        self.0
            .iter()
            .enumerate()
            .map(|(i, p)| p * likelihood.density(i))
            .sum()
    }
}

impl From<Vec<Probability>> for Distribution {
    fn from(weights: Vec<Probability>) -> Self {
        Self(weights)
    }
}

impl std::fmt::Display for Distribution {
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

impl Arbitrary for Distribution {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        let weights = (0..4)
            .map(|_| rng.random::<Probability>())
            .collect::<Vec<_>>();
        let mass = weights.iter().sum::<Probability>();
        Self(weights.iter().map(|w| w / mass).collect())
    }
}
