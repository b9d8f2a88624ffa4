use drupal_client::Resource;
use serde_json::Value;

use crate::error::{NormalizeError, Result};
use crate::types::{CountryTradeRecord, TradeRole};

/// Attribute holding `"receiving"` or `"sending"`.
pub const TRADE_ROLE_FIELD: &str = "field_country_type";

const METRIC_TONS: &str = "field_metric_tons_of_clothing";
const POPULATION: &str = "field_population";
const GDP_PER_CAPITA: &str = "field_gdp_per_capita";
const ITEMS_PER_CAPITA: &str = "field_items_per_capita";
const GDP_PER_CAPITA_PER_ITEM: &str = "field_gdp_per_capita_per_item";

/// Normalize one trade record and classify it.
///
/// Records whose role is neither `receiving` nor `sending` are dropped
/// (`Ok(None)`); their figures are not parsed.
pub fn normalize_trade_record(resource: &Resource) -> Result<Option<(TradeRole, CountryTradeRecord)>> {
    let role_value = resource.attr_str(TRADE_ROLE_FIELD);
    let Some(role) = role_value.and_then(TradeRole::parse) else {
        tracing::debug!(
            id = %resource.id,
            role = ?role_value,
            "Dropping trade record with unrecognized role"
        );
        return Ok(None);
    };

    let record = CountryTradeRecord {
        country: resource
            .attr_str("field_country")
            .or_else(|| resource.attr_str("title"))
            .unwrap_or_default()
            .to_string(),
        metric_tons: number(resource, METRIC_TONS)?,
        population: number(resource, POPULATION)?,
        gdp_per_capita: number(resource, GDP_PER_CAPITA)?,
        items_per_capita: number(resource, ITEMS_PER_CAPITA)?,
        gdp_per_capita_per_item: number(resource, GDP_PER_CAPITA_PER_ITEM)?,
    };

    Ok(Some((role, record)))
}

/// A numeric figure stored either as a JSON number or as a numeric string.
fn number(resource: &Resource, field: &'static str) -> Result<f64> {
    let invalid = |value: String| NormalizeError::InvalidNumber {
        id: resource.id.clone(),
        field,
        value,
    };

    match resource.attr(field) {
        Some(Value::Number(n)) => n.as_f64().ok_or_else(|| invalid(n.to_string())),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| invalid(s.clone())),
        Some(other) => Err(invalid(other.to_string())),
        None => Err(NormalizeError::MissingNumber {
            id: resource.id.clone(),
            field,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::trade_record;

    #[test]
    fn test_string_figures_parsed() {
        let resource = trade_record(
            "r1",
            "Mozambique",
            "receiving",
            ["191570", "32163040", "500", "31", "16"],
        );

        let (role, record) = normalize_trade_record(&resource).unwrap().unwrap();
        assert_eq!(role, TradeRole::Receiving);
        assert_eq!(record.country, "Mozambique");
        assert_eq!(record.metric_tons, 191570.0);
        assert_eq!(record.population, 32163040.0);
        assert_eq!(record.gdp_per_capita_per_item, 16.0);
    }

    #[test]
    fn test_numeric_figures_used_directly() {
        let resource = trade_record("s1", "USA", "sending", ["0", "0", "0", "0", "0"])
            .with_attribute(METRIC_TONS, 720846)
            .with_attribute(GDP_PER_CAPITA, 69288.5);

        let (role, record) = normalize_trade_record(&resource).unwrap().unwrap();
        assert_eq!(role, TradeRole::Sending);
        assert_eq!(record.metric_tons, 720846.0);
        assert_eq!(record.gdp_per_capita, 69288.5);
    }

    #[test]
    fn test_whitespace_around_number_tolerated() {
        let resource = trade_record("r2", "Ghana", "receiving", [" 149181 ", "1", "1", "1", "1"]);
        let (_, record) = normalize_trade_record(&resource).unwrap().unwrap();
        assert_eq!(record.metric_tons, 149181.0);
    }

    #[test]
    fn test_unrecognized_role_dropped_without_parsing() {
        let resource = trade_record("x1", "Atlantis", "transit", ["oops", "1", "1", "1", "1"]);
        assert_eq!(normalize_trade_record(&resource), Ok(None));

        let no_role = drupal_client::Resource::new("node--clothing_trade_data", "x2");
        assert_eq!(normalize_trade_record(&no_role), Ok(None));
    }

    #[test]
    fn test_role_match_is_exact() {
        let resource = trade_record("x3", "Togo", "Receiving", ["1", "1", "1", "1", "1"]);
        assert_eq!(normalize_trade_record(&resource), Ok(None));
    }

    #[test]
    fn test_unparseable_figure_is_error() {
        let resource = trade_record("r3", "Haiti", "receiving", ["26233", "n/a", "1", "1", "1"]);
        assert_eq!(
            normalize_trade_record(&resource),
            Err(NormalizeError::InvalidNumber {
                id: "r3".to_string(),
                field: POPULATION,
                value: "n/a".to_string(),
            })
        );

        let nan = trade_record("r4", "Haiti", "receiving", ["NaN", "1", "1", "1", "1"]);
        assert!(normalize_trade_record(&nan).is_err());
    }

    #[test]
    fn test_missing_figure_is_error() {
        let mut resource = trade_record("r5", "Togo", "receiving", ["1", "1", "1", "1", "1"]);
        resource.attributes.remove(ITEMS_PER_CAPITA);

        assert_eq!(
            normalize_trade_record(&resource),
            Err(NormalizeError::MissingNumber {
                id: "r5".to_string(),
                field: ITEMS_PER_CAPITA,
            })
        );
    }
}
