pub mod crash_test;
pub mod rng;
