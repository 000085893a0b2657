use async_trait::async_trait;
use chrono::DateTime;
use reqwest::Client;

use crate::{
    models::{bar::Bar, bar_series::BarSeries, request_params::BarsRequest},
    providers::{
        DataProvider, ProviderError,
        yahoo_chart::response::{ChartEnvelope, ChartResult},
    },
};

const BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

// The endpoint rejects reqwest's default user agent.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

pub struct YahooChartProvider {
    client: Client,
}

impl YahooChartProvider {
    /// Creates a new chart API provider.
    ///
    /// The endpoint is unauthenticated; only a browser user agent is needed.
    pub fn new() -> Result<Self, ProviderError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }

    fn decode(envelope: ChartEnvelope, request: &BarsRequest) -> Result<BarSeries, ProviderError> {
        if let Some(error) = envelope.chart.error {
            return Err(ProviderError::Api(format!(
                "{}: {}",
                error.code, error.description
            )));
        }

        let result = envelope
            .chart
            .result
            .unwrap_or_default()
            .into_iter()
            .next();

        let bars = match result {
            Some(chart) => Self::bars_from_chart(chart)?,
            // A well-formed empty payload is not an error; the batch runner
            // owns the skip decision.
            None => vec![],
        };

        Ok(BarSeries {
            symbol: request.symbol.clone(),
            interval: request.interval,
            bars,
        })
    }

    fn bars_from_chart(chart: ChartResult) -> Result<Vec<Bar>, ProviderError> {
        let quote = chart.indicators.quote.into_iter().next().unwrap_or_default();

        let mut bars = Vec::with_capacity(chart.timestamp.len());
        for (i, &ts) in chart.timestamp.iter().enumerate() {
            let open = quote.open.get(i).copied().flatten();
            let high = quote.high.get(i).copied().flatten();
            let low = quote.low.get(i).copied().flatten();
            let close = quote.close.get(i).copied().flatten();
            let volume = quote.volume.get(i).copied().flatten();

            // The vendor emits null rows for bars still forming; drop them.
            let (Some(open), Some(high), Some(low), Some(close)) = (open, high, low, close) else {
                continue;
            };

            let timestamp = DateTime::from_timestamp(ts, 0)
                .ok_or_else(|| ProviderError::Decode(format!("timestamp out of range: {ts}")))?;

            bars.push(Bar {
                timestamp,
                open,
                high,
                low,
                close,
                volume: volume.unwrap_or(0.0),
            });
        }

        Ok(bars)
    }
}

#[async_trait]
impl DataProvider for YahooChartProvider {
    async fn fetch_bars(&self, request: &BarsRequest) -> Result<BarSeries, ProviderError> {
        let url = format!("{BASE_URL}/{}", request.symbol);
        let query = [
            ("range", request.lookback.as_str()),
            ("interval", request.interval.as_str()),
        ];

        let response = self.client.get(&url).query(&query).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown API error".to_string());
            return Err(ProviderError::Api(format!("{status}: {body}")));
        }

        let envelope = response
            .json::<ChartEnvelope>()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        Self::decode(envelope, request)
    }
}
