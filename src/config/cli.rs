use crate::config::toml_config::ProbeFileConfig;
use crate::config::ProbeSettings;
use crate::core::report::OutputFormat;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "fn-probe")]
#[command(about = "Send one GET request to a serverless function and print the response")]
pub struct CliConfig {
    #[arg(long, help = "Endpoint to probe (overrides the config file)")]
    pub endpoint: Option<String>,

    #[arg(long, help = "TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Request timeout in seconds (client default if unset)")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, help = "Exit with status 1 when the probe fails")]
    pub fail_on_error: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    pub fn settings(&self) -> Result<ProbeSettings> {
        let file = match &self.config {
            Some(path) => Some(ProbeFileConfig::from_file(path)?),
            None => None,
        };
        Ok(ProbeSettings::resolve(
            self.endpoint.clone(),
            self.timeout_seconds,
            file,
        ))
    }
}
