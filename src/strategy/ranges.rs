use crate::strategy::branch::Branch;
use crate::strategy::combo::Combo;
use crate::strategy::line::Line;
use crate::Arbitrary;
use crate::Probability;
use std::collections::BTreeMap;

/// one villain range's full conditional mixed strategy: a Branch for
/// the check side of the tree and a Branch for the bet side. ranges
/// are independent of each other.
#[derive(Debug, Clone, PartialEq, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Ranges {
    pub check: Branch,
    pub bet: Branch,
}

impl Ranges {
    /// the pure strategies available to this single range: the cross
    /// product of its check plans and bet plans, each pair weighted by
    /// the product of its branch probabilities.
    pub fn pures(&self) -> Vec<((Line, Line), Probability)> {
        self.check
            .inner()
            .iter()
            .flat_map(|(&c, &pc)| {
                self.bet
                    .inner()
                    .iter()
                    .map(move |(&b, &pb)| ((c, b), pc * pb))
            })
            .collect()
    }

    /// unit-mass check on both branches, for callers who want the
    /// contract verified before enumeration
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, branch) in [("check", &self.check), ("bet", &self.bet)] {
            let mass = branch.mass();
            if (mass - 1.).abs() > crate::COHERENCE {
                return Err(anyhow::anyhow!("{} branch mass is {}", name, mass));
            }
        }
        Ok(())
    }

    /// structural inverse of Combo::expand: recover each range's
    /// marginal conditional mixed strategy from a weighted list of
    /// joint pure-strategy rows.
    ///
    /// per range, row weights accumulate keyed by that range's
    /// (check, bet) pair; the check branch is the marginal over bet
    /// plans and symmetrically for the bet branch. exact whenever the
    /// rows came from the independent-ranges product construction.
    /// rows whose range count disagrees with the first row are skipped
    /// with a diagnostic, in keeping with best-effort aggregation.
    pub fn collapse(rows: &[Combo]) -> Vec<Self> {
        let Some(first) = rows.first() else {
            return vec![];
        };
        let n = first.choices().len();
        let mut joints = vec![BTreeMap::<(Line, Line), Probability>::new(); n];
        for (i, row) in rows.iter().enumerate() {
            if row.choices().len() != n {
                log::warn!(
                    "skipping row {}: {} ranges where {} expected",
                    i + 1,
                    row.choices().len(),
                    n
                );
                continue;
            }
            for (joint, &pair) in joints.iter_mut().zip(row.choices()) {
                *joint.entry(pair).or_insert(0.) += row.weight();
            }
        }
        joints.into_iter().map(Self::from).collect()
    }
}

/// marginalize a range's joint pure-strategy masses down to its two
/// branch distributions
impl From<BTreeMap<(Line, Line), Probability>> for Ranges {
    fn from(joint: BTreeMap<(Line, Line), Probability>) -> Self {
        let mut check = BTreeMap::<Line, Probability>::new();
        let mut bet = BTreeMap::<Line, Probability>::new();
        for (&(c, b), &mass) in joint.iter() {
            *check.entry(c).or_insert(0.) += mass;
            *bet.entry(b).or_insert(0.) += mass;
        }
        Self {
            check: Branch::from(check),
            bet: Branch::from(bet),
        }
    }
}

impl std::fmt::Display for Ranges {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ch {} be {}", self.check, self.bet)
    }
}

impl Arbitrary for Ranges {
    fn random() -> Self {
        Self {
            check: Branch::random(),
            bet: Branch::random(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    fn close(a: Probability, b: Probability) -> bool {
        (a - b).abs() < 1e-5
    }

    /// the reference two-range profile: 3 check plans x 4 bet plans
    fn reference() -> Vec<Ranges> {
        let one = Ranges {
            check: Branch::from_iter([
                (Line::Check, 0.3),
                (Line::BetFold, 0.2),
                (Line::BetCall, 0.5),
            ]),
            bet: Branch::from_iter([
                (Line::Fold, 0.1),
                (Line::Call, 0.2),
                (Line::RaiseFold, 0.3),
                (Line::RaiseCall, 0.4),
            ]),
        };
        vec![one.clone(), one]
    }

    #[test]
    fn validation() {
        assert!(reference().iter().all(|r| r.validate().is_ok()));
        let lopsided = Ranges {
            check: Branch::from_iter([(Line::Check, 0.3), (Line::Bet, 0.3)]),
            bet: Branch::from_iter([(Line::Fold, 1.0)]),
        };
        assert!(lopsided.validate().is_err());
    }

    #[test]
    fn purity() {
        let profiles = reference();
        let pures = profiles[0].pures();
        assert_eq!(pures.len(), 12);
        assert!(close(pures.iter().map(|(_, p)| p).sum(), 1.0));
    }

    #[test]
    fn inversion() {
        // collapse . expand == id at full precision
        let profiles = reference();
        let recovered = Ranges::collapse(&Combo::expand(&profiles));
        assert_eq!(recovered.len(), profiles.len());
        for (out, src) in recovered.iter().zip(profiles.iter()) {
            for line in src.check.support() {
                assert!(close(out.check.density(line), src.check.density(line)));
            }
            for line in src.bet.support() {
                assert!(close(out.bet.density(line), src.bet.density(line)));
            }
        }
    }

    #[test]
    fn roundtrip() {
        // through the rendered text the 3-decimal rounding bites, so
        // the tolerance loosens to the accumulated rounding unit
        let profiles = reference();
        let lines = Combo::expand(&profiles)
            .iter()
            .map(|combo| combo.to_string())
            .collect::<Vec<_>>();
        let rows = Combo::parse(lines.iter().map(|s| s.as_str()));
        let recovered = Ranges::collapse(&rows);
        for (out, src) in recovered.iter().zip(profiles.iter()) {
            for line in src.check.support() {
                assert!((out.check.density(line) - src.check.density(line)).abs() < 0.05);
            }
            for line in src.bet.support() {
                assert!((out.bet.density(line) - src.bet.density(line)).abs() < 0.05);
            }
        }
    }

    #[test]
    fn independence() {
        // marginal recovery holds for arbitrary independent profiles
        let profiles = vec![Ranges::random(), Ranges::random(), Ranges::random()];
        let recovered = Ranges::collapse(&Combo::expand(&profiles));
        for (out, src) in recovered.iter().zip(profiles.iter()) {
            for line in src.check.support() {
                assert!(close(out.check.density(line), src.check.density(line)));
            }
            for line in src.bet.support() {
                assert!(close(out.bet.density(line), src.bet.density(line)));
            }
        }
    }

    #[test]
    fn raggedness() {
        // rows with a foreign range count are skipped, not fatal
        let profiles = reference();
        let mut rows = Combo::expand(&profiles);
        rows.insert(
            1,
            Combo::try_from(r#"0.5,"V1:ch/fo""#).unwrap(),
        );
        let recovered = Ranges::collapse(&rows);
        assert_eq!(recovered.len(), 2);
        for (out, src) in recovered.iter().zip(profiles.iter()) {
            for line in src.check.support() {
                assert!(close(out.check.density(line), src.check.density(line)));
            }
        }
    }

    #[test]
    fn vacancy() {
        assert!(Ranges::collapse(&[]).is_empty());
    }
}
