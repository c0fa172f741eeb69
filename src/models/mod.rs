//! Configuration and seed models loaded from outside the process.

pub mod config;
pub mod seed;
