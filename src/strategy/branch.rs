use crate::strategy::line::Line;
use crate::Arbitrary;
use crate::Probability;
use std::collections::BTreeMap;

/// one range's conditional mixed strategy at one top-level branch of
/// hero's opening action: a distribution over contingent plans.
///
/// unit mass across the support is a caller contract, checked by
/// Ranges::validate but deliberately not enforced on construction.
/// lookups of unseen plans yield an explicit zero.
#[derive(Debug, Clone, PartialEq, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Branch(BTreeMap<Line, Probability>);

impl Branch {
    pub fn inner(&self) -> &BTreeMap<Line, Probability> {
        &self.0
    }
    pub fn n(&self) -> usize {
        self.0.len()
    }
    /// probability mass on a plan. unseen plans carry zero.
    pub fn density(&self, line: &Line) -> Probability {
        self.0.get(line).copied().unwrap_or(0.)
    }
    pub fn support(&self) -> impl Iterator<Item = &Line> {
        self.0.keys()
    }
    pub fn mass(&self) -> Probability {
        self.0.values().sum()
    }
}

impl From<BTreeMap<Line, Probability>> for Branch {
    fn from(map: BTreeMap<Line, Probability>) -> Self {
        Self(map)
    }
}

impl FromIterator<(Line, Probability)> for Branch {
    fn from_iter<I: IntoIterator<Item = (Line, Probability)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{{}}}",
            self.0
                .iter()
                .map(|(line, p)| format!("{}:{:.3}", line, p))
                .collect::<Vec<_>>()
                .join(",")
        )
    }
}

impl Arbitrary for Branch {
    fn random() -> Self {
        use rand::prelude::IndexedRandom;
        use rand::Rng;
        let ref mut rng = rand::rng();
        let n = rng.random_range(2..=4);
        let mut lines = Vec::<Line>::new();
        while lines.len() < n {
            let line = *Line::ALL.choose(rng).expect("ALL is non-empty");
            if !lines.contains(&line) {
                lines.push(line);
            }
        }
        let weights = lines
            .iter()
            .map(|_| rng.random::<Probability>())
            .collect::<Vec<_>>();
        let mass = weights.iter().sum::<Probability>();
        lines
            .into_iter()
            .zip(weights.into_iter().map(|w| w / mass))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaulting() {
        let branch = Branch::from_iter([(Line::Check, 0.3), (Line::Bet, 0.7)]);
        assert_eq!(branch.density(&Line::RaiseCall), 0.);
        assert_eq!(branch.density(&Line::Bet), 0.7);
    }

    #[test]
    fn randomness() {
        let branch = Branch::random();
        assert!((branch.mass() - 1.).abs() < 1e-5);
        assert!(branch.n() >= 2);
    }
}
