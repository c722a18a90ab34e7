//! Loan decision engine.
//!
//! Derives an applicant profile from an Estonian-format personal identification code, gates it
//! on credit standing and age, and searches for the largest approvable loan amount and the
//! shortest approvable period.

pub mod config;
pub mod decision;
pub mod error;
pub mod telemetry;
