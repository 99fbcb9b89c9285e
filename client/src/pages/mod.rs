//! Route-level page components.

pub mod simulator;
