//! The signal engine: pure computation over a bar series producing
//! retracement levels, a trend reading, and (conditionally) a trade setup.

pub mod fibonacci;
pub mod setup;
pub mod trend;

pub use fibonacci::FibonacciLevels;
pub use setup::{Direction, TradeSetup, evaluate_setup, is_near_level};
pub use trend::Trend;
