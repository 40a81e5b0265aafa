pub mod adapters;
pub mod application;
pub mod infra;

pub use application::{app_error, use_cases};

#[cfg(test)]
pub mod test_utils;
