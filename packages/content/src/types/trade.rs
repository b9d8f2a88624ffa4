use serde::{Deserialize, Serialize};

/// Second-hand clothing trade figures for one country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryTradeRecord {
    pub country: String,
    pub metric_tons: f64,
    pub population: f64,
    pub gdp_per_capita: f64,
    pub items_per_capita: f64,
    pub gdp_per_capita_per_item: f64,
}

/// Which side of the trade a country is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeRole {
    Receiving,
    Sending,
}

impl TradeRole {
    /// Exact match on the CMS discriminator; anything else is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "receiving" => Some(TradeRole::Receiving),
            "sending" => Some(TradeRole::Sending),
            _ => None,
        }
    }
}

/// Trade records split by role, each in source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradeBuckets {
    pub receiving: Vec<CountryTradeRecord>,
    pub sending: Vec<CountryTradeRecord>,
}

impl TradeBuckets {
    pub fn push(&mut self, role: TradeRole, record: CountryTradeRecord) {
        match role {
            TradeRole::Receiving => self.receiving.push(record),
            TradeRole::Sending => self.sending.push(record),
        }
    }

    pub fn len(&self) -> usize {
        self.receiving.len() + self.sending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
