//! MediScan - terminal health companion
//!
//! Walks a user through basic profile capture, then offers a dashboard of
//! health utilities: medication reminder tracking, symptom logging, a
//! body-part-driven symptom checker with static diagnosis lookup, and map
//! links for locating healthcare facilities.
//!
//! # Architecture
//!
//! - [`catalog`]: the three read-only lookup tables seeded at build time
//! - [`resolver`]: pure symptom-to-diagnosis resolution
//! - [`session`]: in-memory, session-lifetime state
//! - [`screens`]: the interactive screen loop (dispatcher + screens)
//!
//! Nothing persists: all data lives in process memory and is gone on
//! logout or exit.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod errors;
pub mod map;
pub mod resolver;
pub mod screens;
pub mod session;

// Re-export commonly used types
pub use errors::{MediScanError, Result};
