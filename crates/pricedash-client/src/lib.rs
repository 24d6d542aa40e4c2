pub mod analysis;
pub mod commands;
pub mod contracts;
pub mod dashboard;
pub mod dataset;
pub mod error;
pub mod ingest;
#[cfg(test)]
mod testkit;

pub use contracts::envelope::{FailureEnvelope, SuccessEnvelope};
pub use error::{ClientError, ClientResult};

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");
