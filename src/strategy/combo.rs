use crate::strategy::line::Line;
use crate::strategy::ranges::Ranges;
use crate::Probability;

/// one joint pure strategy across all villain ranges: a concrete
/// (check plan, bet plan) pair per range, with the joint probability
/// of every range making exactly that pick.
///
/// the wire shape is one line per combination,
///
///   0.755,"V1:be-ca/ra-ca,V2:ch/fo"
///
/// with the probability rounded to 3 decimals at render time only.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Combo {
    weight: Probability,
    choices: Vec<(Line, Line)>,
}

impl Combo {
    pub fn weight(&self) -> Probability {
        self.weight
    }
    /// per-range picks, in V1, V2, ... order
    pub fn choices(&self) -> &[(Line, Line)] {
        &self.choices
    }
    /// the quoted part of the wire line
    pub fn label(&self) -> String {
        self.choices
            .iter()
            .enumerate()
            .map(|(i, (c, b))| format!("V{}:{}/{}", i + 1, c, b))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// expand per-range conditional mixed strategies into the full
    /// cross product of joint pure-strategy combinations.
    ///
    /// row count is the product of per-range pure-strategy counts, so
    /// this is exponential in range count and meant for small inputs.
    /// probabilities stay at full precision; ordering is probability
    /// descending with ties broken by lexical label order, so equal
    /// inputs render bit-identical output. branch masses are a caller
    /// contract (Ranges::validate), not re-checked here.
    pub fn expand(profiles: &[Ranges]) -> Vec<Self> {
        let seed = Self {
            weight: 1.,
            choices: vec![],
        };
        let mut combos = profiles.iter().map(Ranges::pures).fold(
            vec![seed],
            |combos, pures| {
                combos
                    .iter()
                    .flat_map(|prefix| {
                        pures.iter().map(|&(pair, p)| {
                            let mut choices = prefix.choices.clone();
                            choices.push(pair);
                            Self {
                                weight: prefix.weight * p,
                                choices,
                            }
                        })
                    })
                    .collect()
            },
        );
        combos.sort_by(|a, b| {
            b.weight
                .partial_cmp(&a.weight)
                .expect("weights are not NaN")
                .then_with(|| a.label().cmp(&b.label()))
        });
        combos
    }

    /// best-effort batch parse of wire lines. malformed lines (bad
    /// field count, missing separators, unknown tokens) are skipped
    /// with a warning; aggregation proceeds over the remainder.
    pub fn parse<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<Self> {
        lines
            .into_iter()
            .enumerate()
            .filter_map(|(i, line)| match Self::try_from(line) {
                Ok(combo) => Some(combo),
                Err(e) => {
                    log::warn!("skipping malformed strategy line {}: {}", i + 1, e);
                    None
                }
            })
            .collect()
    }
}

impl From<(Probability, Vec<(Line, Line)>)> for Combo {
    fn from((weight, choices): (Probability, Vec<(Line, Line)>)) -> Self {
        Self { weight, choices }
    }
}

impl TryFrom<&str> for Combo {
    type Error = anyhow::Error;
    fn try_from(line: &str) -> Result<Self, Self::Error> {
        let (weight, label) = line
            .split_once(',')
            .ok_or_else(|| anyhow::anyhow!("missing probability field"))?;
        let weight = weight
            .trim()
            .parse::<Probability>()
            .map_err(|e| anyhow::anyhow!("unparseable probability: {}", e))?;
        let label = label
            .trim()
            .strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .ok_or_else(|| anyhow::anyhow!("unquoted strategy label"))?;
        let choices = label
            .split(',')
            .enumerate()
            .map(|(i, part)| {
                let (_, plays) = part
                    .split_once(':')
                    .ok_or_else(|| anyhow::anyhow!("range {} missing ':'", i + 1))?;
                let (check, bet) = plays
                    .split_once('/')
                    .ok_or_else(|| anyhow::anyhow!("range {} missing '/'", i + 1))?;
                Ok((Line::try_from(check)?, Line::try_from(bet)?))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(Self { weight, choices })
    }
}

impl std::fmt::Display for Combo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3},\"{}\"", self.weight, self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::branch::Branch;

    fn close(a: Probability, b: Probability) -> bool {
        (a - b).abs() < 1e-4
    }

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
    fn cardinality() {
        // 2 ranges x (3 check plans x 4 bet plans) = 12^2 joint rows
        assert_eq!(Combo::expand(&reference()).len(), 144);
    }

    #[test]
    fn unitarity() {
        let total = Combo::expand(&reference())
            .iter()
            .map(Combo::weight)
            .sum::<Probability>();
        assert!(close(total, 1.0));
    }

    #[test]
    fn primacy() {
        // the top row pairs each range's modal check and bet plans
        let combos = Combo::expand(&reference());
        let top = combos.first().unwrap();
        assert!(close(top.weight(), 0.2 * 0.2));
        assert_eq!(
            top.choices(),
            &[
                (Line::BetCall, Line::RaiseCall),
                (Line::BetCall, Line::RaiseCall),
            ]
        );
    }

    #[test]
    fn monotonicity() {
        let combos = Combo::expand(&reference());
        assert!(combos.windows(2).all(|w| w[0].weight() >= w[1].weight()));
    }

    #[test]
    fn determinism() {
        let a = Combo::expand(&reference());
        let b = Combo::expand(&reference());
        assert_eq!(a, b);
        assert!(a
            .windows(2)
            .filter(|w| w[0].weight() == w[1].weight())
            .all(|w| w[0].label() < w[1].label()));
    }

    #[test]
    fn rendering() {
        let combo = Combo::from((
            0.7554,
            vec![(Line::BetCall, Line::RaiseCall), (Line::Check, Line::Fold)],
        ));
        assert_eq!(combo.to_string(), r#"0.755,"V1:be-ca/ra-ca,V2:ch/fo""#);
    }

    #[test]
    fn parsing() {
        let combo = Combo::try_from(r#"0.755,"V1:be-ca/ra-ca,V2:ch/fo""#).unwrap();
        assert!(close(combo.weight(), 0.755));
        assert_eq!(
            combo.choices(),
            &[(Line::BetCall, Line::RaiseCall), (Line::Check, Line::Fold)]
        );
    }

    #[test]
    fn notation() {
        // tiny probabilities arrive in scientific notation
        let combo = Combo::try_from(r#"1.8e-5,"V1:ch/fo""#).unwrap();
        assert!(close(combo.weight(), 1.8e-5));
    }

    #[test]
    fn rejection() {
        assert!(Combo::try_from("").is_err());
        assert!(Combo::try_from("0.5").is_err());
        assert!(Combo::try_from(r#"x,"V1:ch/fo""#).is_err());
        assert!(Combo::try_from(r#"0.5,V1:ch/fo"#).is_err());
        assert!(Combo::try_from(r#"0.5,"V1:ch""#).is_err());
        assert!(Combo::try_from(r#"0.5,"V1ch/fo""#).is_err());
        assert!(Combo::try_from(r#"0.5,"V1:zz/fo""#).is_err());
    }

    #[test]
    fn leniency() {
        // one rotten line does not spoil the batch
        let lines = [
            r#"0.755,"V1:be-ca/ra-ca,V2:ch/fo""#,
            r#"garbage"#,
            r#"0.106,"V1:be-ca/ra-ca,V2:be-fo/fo""#,
        ];
        let combos = Combo::parse(lines);
        assert_eq!(combos.len(), 2);
    }

    #[test]
    fn fidelity() {
        // render . parse == round to 3 decimals
        for combo in Combo::expand(&reference()).iter() {
            let back = Combo::try_from(combo.to_string().as_str()).unwrap();
            assert_eq!(back.choices(), combo.choices());
            assert!((back.weight() - combo.weight()).abs() <= 0.0005 + 1e-6);
        }
    }
}
