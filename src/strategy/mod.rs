pub mod line;
pub use line::*;

pub mod branch;
pub use branch::*;

pub mod ranges;
pub use ranges::*;

pub mod combo;
pub use combo::*;
