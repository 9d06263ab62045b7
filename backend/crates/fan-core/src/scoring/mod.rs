//! Dashboard scores derived from a stored record.
//!
//! Everything here is a pure function of its inputs; randomness only enters
//! through an explicitly passed RNG.

pub mod dashboard;
pub mod distribution;
pub mod engagement;
pub mod fan_level;
pub mod verification;
