use serde::{Deserialize, Serialize};

use crate::models::interval::{Interval, Lookback};

/// Universal parameters for requesting one instrument's bar data from any
/// market data provider.
///
/// Vendor-agnostic: the window is expressed as a trailing lookback range
/// rather than explicit start/end timestamps, which is what a scheduled
/// single-shot job wants. **Validation of allowed interval/lookback
/// combinations is performed by each provider implementation, according to
/// its own API rules.**
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BarsRequest {
    /// The symbol to request (e.g., `"GCU25.CMX"`, `"EURUSD=X"`).
    pub symbol: String,

    /// How far back from now the observation window reaches.
    pub lookback: Lookback,

    /// The time interval for each bar.
    pub interval: Interval,
}
