//! Simulated verification: one cancellable delayed task per uploaded
//! document or linked profile.

pub mod lifecycle;
pub mod simulator;
pub mod tasks;
