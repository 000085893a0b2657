use clap::Parser;
use signal_alerter::{
    batch::run_batch,
    cli::Cli,
    config::AppConfig,
    errors::Error,
    notify::{DryRunNotifier, Notifier, TelegramNotifier},
    obs,
    providers::yahoo_chart::YahooChartProvider,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    obs::init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::from_toml_file(path)?,
        None => AppConfig::default(),
    };

    let provider = YahooChartProvider::new()?;
    let notifier: Box<dyn Notifier> = if cli.dry_run {
        Box::new(DryRunNotifier)
    } else {
        Box::new(TelegramNotifier::from_env(config.recipients.clone())?)
    };

    // Per-instrument failures are contained inside the batch; once it runs,
    // the process exits cleanly for the scheduler.
    run_batch(&config, &provider, notifier.as_ref()).await;

    Ok(())
}
