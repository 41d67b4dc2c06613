//! Core domain models for tagmend.
//!
//! Pure result types produced by the trim engine: cut points, trim
//! outcomes, and balance reports. No I/O dependencies.

pub mod outcome;

pub use outcome::{BalanceReport, CutPoint, CutStrategy, TagBalance, TrimOutcome};
