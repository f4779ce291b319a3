//! Repository Ports
//!
//! Abstract interfaces for state kept between requests.

mod prediction_cache;

pub use prediction_cache::*;
