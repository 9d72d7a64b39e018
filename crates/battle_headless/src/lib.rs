//! # Battle Headless
//!
//! Headless battle runner: loads a stats table and a scenario file, resolves
//! the battle, and reports the outcome as text or JSON. Designed for balance
//! testing and CI; the core library stays transport-agnostic.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod report;
pub mod scenario;
