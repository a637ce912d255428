//! lockbench library
//!
//! Hand-built mutual-exclusion and coordination primitives together with a
//! harness that measures them under identical, evenly partitioned workloads.

pub mod benchmark;
pub mod config;
pub mod demos;
pub mod metrics;
pub mod primitives;
pub mod utils;
