//! Use cases (application services)

pub mod consult_expert;
