use crate::Arbitrary;

/// a contingent plan for one branch of hero's opening action,
/// written in the wire tokens of the combined-strategy format.
///
/// single tokens are unconditional plans ("ch" check, "fo" fold),
/// hyphenated tokens carry the follow-up ("be-fo" bet then fold to a
/// raise, "ra-ca" raise then call the reraise). a closed enum keeps
/// illegal tokens a parse error instead of a runtime surprise.
#[derive(Debug, Clone, Copy, Hash, Ord, PartialOrd, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Line {
    Check,
    Bet,
    BetFold,
    BetCall,
    Fold,
    Call,
    Raise,
    RaiseFold,
    RaiseCall,
}

impl Line {
    pub const ALL: [Self; 9] = [
        Self::Check,
        Self::Bet,
        Self::BetFold,
        Self::BetCall,
        Self::Fold,
        Self::Call,
        Self::Raise,
        Self::RaiseFold,
        Self::RaiseCall,
    ];
}

impl TryFrom<&str> for Line {
    type Error = anyhow::Error;
    fn try_from(token: &str) -> Result<Self, Self::Error> {
        match token {
            "ch" => Ok(Self::Check),
            "be" => Ok(Self::Bet),
            "be-fo" => Ok(Self::BetFold),
            "be-ca" => Ok(Self::BetCall),
            "fo" => Ok(Self::Fold),
            "ca" => Ok(Self::Call),
            "ra" => Ok(Self::Raise),
            "ra-fo" => Ok(Self::RaiseFold),
            "ra-ca" => Ok(Self::RaiseCall),
            _ => Err(anyhow::anyhow!("unknown action token '{}'", token)),
        }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Check => write!(f, "ch"),
            Self::Bet => write!(f, "be"),
            Self::BetFold => write!(f, "be-fo"),
            Self::BetCall => write!(f, "be-ca"),
            Self::Fold => write!(f, "fo"),
            Self::Call => write!(f, "ca"),
            Self::Raise => write!(f, "ra"),
            Self::RaiseFold => write!(f, "ra-fo"),
            Self::RaiseCall => write!(f, "ra-ca"),
        }
    }
}

impl Arbitrary for Line {
    fn random() -> Self {
        use rand::prelude::IndexedRandom;
        let ref mut rng = rand::rng();
        Self::ALL.choose(rng).copied().expect("ALL is non-empty")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_tokens() {
        assert!(Line::ALL
            .into_iter()
            .all(|line| line == Line::try_from(line.to_string().as_str()).unwrap()));
    }

    #[test]
    fn illegality() {
        assert!(Line::try_from("xx").is_err());
        assert!(Line::try_from("").is_err());
        assert!(Line::try_from("be-").is_err());
    }
}
