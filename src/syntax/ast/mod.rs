pub mod enums;
pub mod predicates;
pub mod types;

pub use enums::*;
pub use predicates::*;
pub use types::*;
