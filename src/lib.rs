pub mod aggregators;
pub mod core;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
