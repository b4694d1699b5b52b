use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Side {
    Buy,
    Sell,
}

impl Side {
    /// text representation used in the orders table
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buy" => Ok(Self::Buy),
            "sell" => Ok(Self::Sell),
            s => Err(format!("Invalid Side: {s}")),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CreateOrderRequest {
    pub symbol: String,
    pub side: Side,
    pub quantity: f64,
    pub price: f64,
}

/// persisted order as returned on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Order {
    pub id: i64,
    pub symbol: String,
    pub side: Side,
    pub quantity: f64,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_round_trips_as_lowercase_text() {
        assert_eq!(Side::Buy.as_str(), "buy");
        assert_eq!("sell".parse::<Side>(), Ok(Side::Sell));
        assert!("hold".parse::<Side>().is_err());
        assert_eq!(serde_json::to_string(&Side::Sell).unwrap(), r#""sell""#);
    }

    #[test]
    fn create_request_rejects_missing_fields() {
        let missing_price = r#"{"symbol":"AAPL","side":"buy","quantity":10.0}"#;
        assert!(serde_json::from_str::<CreateOrderRequest>(missing_price).is_err());

        let full = r#"{"symbol":"AAPL","side":"buy","quantity":10.0,"price":187.5}"#;
        let req = serde_json::from_str::<CreateOrderRequest>(full).unwrap();
        assert_eq!(req.symbol, "AAPL");
        assert_eq!(req.side, Side::Buy);
    }
}
