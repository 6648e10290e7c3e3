//! Application layer for expert-consult
//!
//! This crate contains the consultation use case, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::CompletionParams;
pub use ports::{
    completion_gateway::{CompletionGateway, CompletionRequest, GatewayError},
    progress::{ConsultProgressNotifier, NoProgress},
};
pub use use_cases::consult_expert::{ConsultError, ConsultExpertUseCase};
