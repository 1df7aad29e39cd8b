//! Unit test modules.

mod activity_summary_test;
mod plan_generator_test;
