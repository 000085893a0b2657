//! Renders a trade setup into the Markdown block sent to recipients.

use crate::signal::{Direction, TradeSetup};

/// Formats a setup for one instrument as Telegram Markdown.
///
/// Prices are shown to 2 decimal places even though level computation keeps 4.
/// The dollar figures on the lot line are the raw price-unit risk/reward
/// distances at 0.01 lots; no contract-value conversion is applied, since the
/// contract specification lives outside this system.
pub fn format_setup(display_name: &str, setup: &TradeSetup) -> String {
    let side = match setup.direction {
        Direction::Buy => "Buy",
        Direction::Sell => "Sell",
    };

    format!(
        "*{display_name} : {side} Limit/Stop*\
         \n\n*Entry:* `{entry:.2}`\
         \n\n*SL:* `{stop:.2}`\
         \n\n*TP:* `{tp:.2}`\n\
         ```\n 0.01 lots, ${risk:.2} ~ ${reward:.2}```",
        entry = setup.entry,
        stop = setup.stop_loss,
        tp = setup.take_profit,
        risk = setup.risk,
        reward = setup.reward,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buy_setup() -> TradeSetup {
        TradeSetup {
            direction: Direction::Buy,
            entry: 90.0,
            stop_loss: 80.0,
            take_profit: 110.0,
            risk: 10.0,
            reward: 20.0,
        }
    }

    #[test]
    fn buy_message_layout() {
        let message = format_setup("#XAUUSD", &buy_setup());

        assert!(message.starts_with("*#XAUUSD : Buy Limit/Stop*"));
        assert!(message.contains("*Entry:* `90.00`"));
        assert!(message.contains("*SL:* `80.00`"));
        assert!(message.contains("*TP:* `110.00`"));
        assert!(message.ends_with("```\n 0.01 lots, $10.00 ~ $20.00```"));
    }

    #[test]
    fn sell_message_layout() {
        let setup = TradeSetup {
            direction: Direction::Sell,
            entry: 110.0,
            stop_loss: 120.0,
            take_profit: 90.0,
            risk: 10.0,
            reward: 20.0,
        };
        let message = format_setup("#XAUUSD", &setup);

        assert!(message.starts_with("*#XAUUSD : Sell Limit/Stop*"));
        assert!(message.contains("*Entry:* `110.00`"));
    }

    #[test]
    fn prices_render_two_places_regardless_of_internal_precision() {
        let setup = TradeSetup {
            entry: 90.1234,
            stop_loss: 80.5678,
            take_profit: 109.2346,
            risk: 9.5556,
            reward: 19.1112,
            ..buy_setup()
        };
        let message = format_setup("#XAUUSD", &setup);

        assert!(message.contains("`90.12`"));
        assert!(message.contains("`80.57`"));
        assert!(message.contains("`109.23`"));
        assert!(message.contains("$9.56 ~ $19.11"));
    }
}
