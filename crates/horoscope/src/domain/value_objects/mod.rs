//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod gender;
mod length;
mod sign;
mod style;

pub use gender::*;
pub use length::*;
pub use sign::*;
pub use style::*;
