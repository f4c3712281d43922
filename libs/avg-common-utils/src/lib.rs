pub mod env;
pub mod num_utils;
pub mod tracing_utils;
