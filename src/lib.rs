pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::{ProbeSettings, DEFAULT_ENDPOINT};
pub use core::{
    engine::ProbeEngine,
    http_probe::HttpProbe,
    report::{emit, write_report, OutputFormat},
};
pub use domain::model::{ProbeOutcome, ProbeReport, ProbeRequest};
pub use utils::error::{ProbeError, Result};
