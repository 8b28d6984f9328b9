pub mod belief;
pub mod evaluate;
pub mod strategy;

/// pot sizes and bet amounts
pub type Chips = f32;
/// expected values and payoffs
pub type Utility = f32;
/// strategy weights, likelihoods, and reach probabilities
pub type Probability = f32;

/// tolerance within which likelihoods across mutually exclusive
/// villain responses must partition unit mass per hand-type bin
pub const COHERENCE: Probability = 1e-4;

/// random instance generation for testing and sampling
pub trait Arbitrary {
    fn random() -> Self;
}
