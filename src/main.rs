use clap::Parser;
use fn_probe::utils::{logger, validation::Validate};
use fn_probe::{emit, CliConfig, HttpProbe, ProbeEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose, config.json_logs);
    tracing::debug!("CLI config: {:?}", config);

    let settings = match config.settings().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let engine = ProbeEngine::new(HttpProbe::new()?);
    let report = engine.run(&settings.to_request()).await;

    let code = emit(
        &report,
        config.format,
        config.fail_on_error,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    )?;
    if code != 0 {
        std::process::exit(code);
    }

    Ok(())
}
