use crate::belief::Distribution;
use crate::belief::Likelihood;
use crate::evaluate::equity::EquityModel;
use crate::evaluate::evaluation::Evaluation;
use crate::evaluate::evaluation::Raised;
use crate::evaluate::reply::Reply;
use crate::Chips;
use crate::Utility;

/// one instance of the fixed two-level betting tree:
/// hero opens (checking is a bet of zero), villain folds, calls, or
/// raises, and against the raise hero folds, calls, or reraises.
///
/// bet sizes are additional amounts put in at each decision, so the
/// pot after hero bets and villain calls is pot + 2·bet, and so on.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Spot {
    pot: Chips,
    bet: Chips,
    raise: Chips,
    reraise: Chips,
    prior: Distribution,
    folds: Likelihood,
    calls: Likelihood,
    raises: Likelihood,
    continues: Likelihood,
}

impl Spot {
    /// validated construction.
    ///
    /// rejects negative sizes, likelihood vectors whose length differs
    /// from the prior's, and fold/call/raise likelihoods that fail to
    /// partition unit mass per hand-type bin. the reference behavior
    /// accepted incoherent likelihoods and silently produced garbage
    /// EVs; here it is a hard precondition.
    pub fn new(
        pot: Chips,
        bet: Chips,
        raise: Chips,
        reraise: Chips,
        prior: Distribution,
        folds: Likelihood,
        calls: Likelihood,
        raises: Likelihood,
        continues: Likelihood,
    ) -> anyhow::Result<Self> {
        let n = prior.n();
        if pot < 0. || bet < 0. || raise < 0. || reraise < 0. {
            return Err(anyhow::anyhow!("negative monetary size"));
        }
        for (name, likelihood) in [
            ("fold", &folds),
            ("call", &calls),
            ("raise", &raises),
            ("continue", &continues),
        ] {
            if likelihood.n() != n {
                return Err(anyhow::anyhow!(
                    "{} likelihood covers {} bins, prior covers {}",
                    name,
                    likelihood.n(),
                    n
                ));
            }
        }
        for i in 0..n {
            let mass = folds.density(i) + calls.density(i) + raises.density(i);
            if (mass - 1.).abs() > crate::COHERENCE {
                return Err(anyhow::anyhow!(
                    "response likelihoods sum to {} for hand type {}",
                    mass,
                    i
                ));
            }
        }
        Ok(Self {
            pot,
            bet,
            raise,
            reraise,
            prior,
            folds,
            calls,
            raises,
            continues,
        })
    }

    pub fn pot(&self) -> Chips {
        self.pot
    }
    pub fn bet(&self) -> Chips {
        self.bet
    }
    pub fn prior(&self) -> &Distribution {
        &self.prior
    }
    /// checking is modeled as opening for zero
    pub fn is_check(&self) -> bool {
        self.bet == 0.
    }

    /// backward induction over the two-level tree.
    ///
    /// level 2 first: against the posterior-on-raise, price out fold,
    /// call, and reraise, and keep the argmax (first maximal index wins,
    /// in Reply::ALL order). then level 1: weight the three villain
    /// branches by their unconditional reach probabilities against the
    /// prior, and charge the opening bet once, unless hero checked.
    pub fn evaluate(&self, model: &impl EquityModel) -> Evaluation {
        let called = self.prior.condition(&self.calls);
        let raised = self.prior.condition(&self.raises);
        let continued = raised.condition(&self.continues);
        let response = self.respond(model, &raised, &continued);
        let folds = self.prior.expectation(&self.folds);
        let calls = self.prior.expectation(&self.calls);
        let raises = self.prior.expectation(&self.raises);
        let folded = self.pot;
        let showdown = model.equity(self.pot + 2. * self.bet, &called);
        let value = folds * folded + calls * showdown + raises * response.value
            - if self.is_check() { 0. } else { self.bet };
        Evaluation {
            called,
            raised,
            continued,
            response,
            folds,
            calls,
            raises,
            folded,
            showdown,
            value,
        }
    }

    /// hero's decision after villain raises, net of this decision point
    fn respond(
        &self,
        model: &impl EquityModel,
        raised: &Distribution,
        continued: &Distribution,
    ) -> Raised {
        let fold = 0.;
        let call = model.equity(self.pot + 2. * self.bet + 2. * self.raise, raised) - self.raise;
        let cont = raised.expectation(&self.continues);
        let taken = self.pot + 2. * self.bet + self.raise;
        let table = self.pot + 2. * self.bet + 2. * (self.raise + self.reraise);
        let reraise = (1. - cont) * taken + cont * model.equity(table, continued)
            - (self.raise + self.reraise);
        let (choice, value) = Self::best([
            (Reply::Fold, fold),
            (Reply::Call, call),
            (Reply::Reraise, reraise),
        ]);
        Raised {
            fold,
            call,
            reraise,
            continued: cont,
            choice,
            value,
        }
    }

    /// first maximal index wins: strict improvement replaces,
    /// ties keep the earlier (higher-priority) reply
    fn best(candidates: [(Reply, Utility); 3]) -> (Reply, Utility) {
        candidates
            .into_iter()
            .reduce(|best, next| if next.1 > best.1 { next } else { best })
            .expect("three candidates")
    }
}
