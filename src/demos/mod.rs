//! Demo programs built on the core primitives
//!
//! - students: sequential vs. partitioned parallel filter
//! - philosophers: dining philosophers with a seat-limiting semaphore

pub mod philosophers;
pub mod students;

pub use philosophers::{run_dinner, DiningConfig, DiningReport, DiningTable};
pub use students::{
    compare_filters, filter_parallel, filter_sequential, format_sample, generate_students,
    should_be_expelled, FilterReport, Student, DEBTS_THRESHOLD, DEFAULT_FILTER_THREADS,
};
