//! API Data Models
//!
//! - Horoscope: request/response DTOs of POST /api/horoscope
//! - Health: liveness payload

mod health;
mod horoscope;

pub use self::health::*;
pub use self::horoscope::*;
