//! Application-level configuration.
//!
//! - [`CompletionParams`]: model, temperature and timeout for each request

pub mod completion_params;

pub use completion_params::CompletionParams;
