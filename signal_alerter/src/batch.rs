//! The batch runner: drives the fetch → signal → alert pipeline for each
//! configured instrument, with failures contained per instrument.

use tracing::{info, warn};

use crate::{
    alert::format_setup,
    config::AppConfig,
    errors::Error,
    models::request_params::BarsRequest,
    notify::Notifier,
    providers::DataProvider,
    signal::{Direction, FibonacciLevels, Trend, evaluate_setup, is_near_level},
};

/// How one instrument's run ended, when it did not error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The vendor returned no bars; instrument skipped.
    Empty,
    /// Diagnostics computed, but the signal conditions did not line up.
    NoSetup,
    /// An alert was formatted and handed to the notifier.
    AlertSent(Direction),
}

/// Processes every configured instrument in order.
///
/// No instrument's failure aborts the batch: errors are logged with the
/// symbol and recorded in the returned summary, and processing moves on.
pub async fn run_batch(
    config: &AppConfig,
    provider: &dyn DataProvider,
    notifier: &dyn Notifier,
) -> Vec<(String, Result<Outcome, Error>)> {
    let mut results = Vec::with_capacity(config.instruments.len());

    for symbol in &config.instruments {
        info!(%symbol, "processing instrument");
        let outcome = process_instrument(config, provider, notifier, symbol).await;
        if let Err(error) = &outcome {
            warn!(%symbol, %error, "instrument failed, continuing");
        }
        results.push((symbol.clone(), outcome));
    }

    let alerts_sent = results
        .iter()
        .filter(|(_, r)| matches!(r, Ok(Outcome::AlertSent(_))))
        .count();
    let failed = results.iter().filter(|(_, r)| r.is_err()).count();
    info!(processed = results.len(), alerts_sent, failed, "batch complete");

    results
}

/// The per-instrument pipeline. Every failure mode is an explicit `Err`
/// handled by the caller; the skip conditions are explicit outcomes.
async fn process_instrument(
    config: &AppConfig,
    provider: &dyn DataProvider,
    notifier: &dyn Notifier,
    symbol: &str,
) -> Result<Outcome, Error> {
    let request = BarsRequest {
        symbol: symbol.to_string(),
        lookback: config.lookback,
        interval: config.interval,
    };

    let series = provider.fetch_bars(&request).await?;

    let (Some(levels), Some(last_bar)) =
        (FibonacciLevels::from_bars(&series.bars), series.last_bar())
    else {
        info!(symbol, "no data for instrument, skipping");
        return Ok(Outcome::Empty);
    };

    let trend = Trend::from_bars(&series.bars);
    let near_25 = is_near_level(last_bar.close, levels.level_25);
    let near_75 = is_near_level(last_bar.close, levels.level_75);

    info!(
        symbol,
        last_price = last_bar.close,
        trend = ?trend,
        levels = ?levels,
        near_25,
        near_75,
        "instrument diagnostics"
    );

    match evaluate_setup(&series.bars, &levels, trend) {
        Some(setup) => {
            let message = format_setup(config.display_name(symbol), &setup);
            notifier.send(&message).await?;
            info!(symbol, direction = ?setup.direction, "alert sent");
            Ok(Outcome::AlertSent(setup.direction))
        }
        None => Ok(Outcome::NoSetup),
    }
}
