use crate::belief::Distribution;
use crate::Chips;
use crate::Utility;

/// hero's expected monetary share of a showdown pot against a given
/// villain hand-type distribution. supplied by the caller; showdown
/// equity is never computed here.
///
/// contract: monotonically non-decreasing in pot for a fixed
/// distribution, and the result lies in [0, pot]. violations are
/// caller error and produce undefined (but non-panicking) EVs.
pub trait EquityModel {
    fn equity(&self, pot: Chips, villain: &Distribution) -> Utility;
}

/// any closure of the right shape is a model,
/// which is how tests and exploratory callers pass fixtures
impl<F> EquityModel for F
where
    F: Fn(Chips, &Distribution) -> Utility,
{
    fn equity(&self, pot: Chips, villain: &Distribution) -> Utility {
        self(pot, villain)
    }
}
