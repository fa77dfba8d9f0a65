//! Tradable instruments and their price history.

use serde::{Deserialize, Serialize};

use super::common::DateRangeInput;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyType {
    Crypto,
    Fiat,
}

/// Bar width for price history.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum InstrumentHistoryPeriodicity {
    Minute,
    Minute5,
    Minute15,
    Minute30,
    Hour,
    Hour4,
    Hour8,
    Day,
    Week,
    Month,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Currency {
    pub currency_id: String,
    #[serde(rename = "type")]
    pub kind: Option<CurrencyType>,
    pub precision: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TradingFee {
    pub instrument_id: Option<String>,
    pub fee_group_id: Option<String>,
    pub maker_progressive: Option<f64>,
    pub taker_progressive: Option<f64>,
    pub maker_flat: Option<f64>,
    pub taker_flat: Option<f64>,
}

/// Current top of book.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct InstrumentPrice {
    pub instrument_id: String,
    pub ask: Option<f64>,
    pub bid: Option<f64>,
    pub price_24h_change: Option<f64>,
    pub ts: Option<String>,
    pub ts_iso: Option<String>,
}

/// One OHLCV bar.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PriceBar {
    pub instrument_id: String,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub open: Option<f64>,
    pub close: Option<f64>,
    pub volume_from: Option<f64>,
    pub volume_to: Option<f64>,
    pub price_24h_change: Option<f64>,
    pub ts: Option<String>,
    pub ts_iso: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Instrument {
    pub name: Option<String>,
    pub instrument_id: String,
    pub base_currency_id: String,
    pub quote_currency_id: String,
    pub price_decimals: Option<u32>,
    pub min_quantity: Option<f64>,
    pub max_quantity: Option<f64>,
    pub min_quote_quantity: Option<f64>,
    pub max_quote_quantity: Option<f64>,
    pub base_currency: Option<Currency>,
    pub quote_currency: Option<Currency>,
    pub trading_fees: Option<TradingFee>,
    pub price: Option<InstrumentPrice>,
    pub recent_price_bar: Option<PriceBar>,
    #[serde(default)]
    pub price_bars: Vec<PriceBar>,
}

/// Arguments for [`ReserveClient::get_instruments`](crate::ReserveClient::get_instruments).
///
/// These parameterize the nested `price_bars` and `recent_price_bar`
/// fields; the instrument list itself is not filtered.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct GetInstrumentsArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub periodicity: Option<InstrumentHistoryPeriodicity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRangeInput>,
}

#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct GetInstrumentPriceBarsArgs {
    pub instrument_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub periodicity: Option<InstrumentHistoryPeriodicity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRangeInput>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_periodicity_wire_names() {
        assert_eq!(
            serde_json::to_value(InstrumentHistoryPeriodicity::Minute15).unwrap(),
            json!("minute15")
        );
        assert_eq!(
            serde_json::to_value(InstrumentHistoryPeriodicity::Hour4).unwrap(),
            json!("hour4")
        );
    }

    #[test]
    fn test_instrument_decodes_nested_records() {
        let instrument: Instrument = serde_json::from_value(json!({
            "name": "BTC/USDT",
            "instrument_id": "BTCUSDT",
            "base_currency_id": "BTC",
            "quote_currency_id": "USDT",
            "base_currency": {"currency_id": "BTC", "type": "crypto", "precision": 8},
            "price": {"instrument_id": "BTCUSDT", "ask": 30001.0, "bid": 29999.0},
            "price_bars": [{"instrument_id": "BTCUSDT", "close": 30000.0}]
        }))
        .unwrap();

        assert_eq!(
            instrument.base_currency.and_then(|c| c.kind),
            Some(CurrencyType::Crypto)
        );
        assert_eq!(instrument.price_bars.len(), 1);
        assert_eq!(instrument.recent_price_bar, None);
    }
}
