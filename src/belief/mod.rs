pub mod distribution;
pub use distribution::*;

pub mod likelihood;
pub use likelihood::*;
