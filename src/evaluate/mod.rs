pub mod equity;
pub use equity::*;

pub mod reply;
pub use reply::*;

pub mod spot;
pub use spot::*;

pub mod evaluation;
pub use evaluation::*;
