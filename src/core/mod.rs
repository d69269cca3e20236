pub mod engine;
pub mod http_probe;
pub mod report;

pub use crate::domain::model::{ProbeOutcome, ProbeReport, ProbeRequest};
pub use crate::domain::ports::{ConfigProvider, Probe};
pub use crate::utils::error::Result;
