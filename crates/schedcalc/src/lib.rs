//! SchedCalc library: application logic for the utilization calculator.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
