use crate::belief::Distribution;
use crate::evaluate::reply::Reply;
use crate::Probability;
use crate::Utility;

/// level-2 breakdown: hero's decision after villain bets or raises.
/// all EVs are net relative to this decision point, so folding is 0.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Raised {
    /// EV of surrendering the pot right here
    pub fold: Utility,
    /// EV of calling the raise and realizing equity
    pub call: Utility,
    /// EV of reraising, mixing villain's fold-out and call-down lines
    pub reraise: Utility,
    /// P(villain calls the reraise | villain raised)
    pub continued: Probability,
    /// value-maximizing reply under the documented tie-break
    pub choice: Reply,
    /// EV of that reply
    pub value: Utility,
}

impl Raised {
    pub fn candidates(&self) -> [(Reply, Utility); 3] {
        [
            (Reply::Fold, self.fold),
            (Reply::Call, self.call),
            (Reply::Reraise, self.reraise),
        ]
    }
}

/// the full audit trail of one betting-line evaluation: every belief,
/// branch probability, and candidate EV that fed the headline number.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Evaluation {
    /// P(villain hand | villain calls hero's opening action)
    pub called: Distribution,
    /// P(villain hand | villain raises hero's opening action)
    pub raised: Distribution,
    /// P(villain hand | villain calls hero's reraise, given he raised)
    pub continued: Distribution,
    /// hero's level-2 decision against the raise
    pub response: Raised,
    /// P(villain folds), against the prior
    pub folds: Probability,
    /// P(villain calls), against the prior
    pub calls: Probability,
    /// P(villain raises), against the prior
    pub raises: Probability,
    /// gross EV when villain folds: the uncontested pot
    pub folded: Utility,
    /// gross EV when villain calls: equity in the called-out pot
    pub showdown: Utility,
    /// net EV of hero's opening action, cost of the bet included
    pub value: Utility,
}

impl std::fmt::Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "P(hand | call)    {}", self.called)?;
        writeln!(f, "P(hand | raise)   {}", self.raised)?;
        writeln!(f, "P(hand | 3b call) {}", self.continued)?;
        writeln!(
            f,
            "vs raise          f {:>10.3}  c {:>10.3}  r {:>10.3}  -> {} {:.3}",
            self.response.fold,
            self.response.call,
            self.response.reraise,
            self.response.choice,
            self.response.value,
        )?;
        writeln!(
            f,
            "branches          f {:>10.3}  c {:>10.3}  r {:>10.3}",
            self.folds, self.calls, self.raises,
        )?;
        write!(f, "net               {:.3}", self.value)
    }
}
