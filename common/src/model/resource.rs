use serde::{Deserialize, Deserializer, Serialize};

/// A consumable that can fill a resource slot, e.g. one spool of filament.
///
/// `name` is the material ("PLA"); `brand` and `color` narrow it down.
/// `cost` is the per-unit price as a decimal string, the way the API sends it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub units: String,
    #[serde(default = "zero_cost", deserialize_with = "decimal_string")]
    pub cost: String,
}

impl Resource {
    /// Per-unit cost as a float. Unparseable values count as free.
    pub fn unit_cost(&self) -> f64 {
        match self.cost.trim().parse::<f64>() {
            Ok(cost) if cost.is_finite() => cost,
            _ => {
                log::warn!("resource {} has unparseable cost {:?}", self.id, self.cost);
                0.0
            }
        }
    }
}

fn zero_cost() -> String {
    "0".to_string()
}

/// Accepts the cost either as a JSON string or as a JSON number.
fn decimal_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Decimal {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Decimal::deserialize(deserializer)? {
        Decimal::Text(text) => text,
        Decimal::Number(number) => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_accepts_strings_and_numbers() {
        let text: Resource =
            serde_json::from_str(r#"{"id":"a","name":"PLA","units":"g","cost":"0.05000"}"#).unwrap();
        let number: Resource =
            serde_json::from_str(r#"{"id":"b","name":"PLA","units":"g","cost":0.05}"#).unwrap();

        assert_eq!(text.cost, "0.05000");
        assert_eq!(number.cost, "0.05");
        assert!((text.unit_cost() - 0.05).abs() < 1e-12);
        assert!((number.unit_cost() - 0.05).abs() < 1e-12);
    }

    #[test]
    fn garbage_cost_is_free() {
        let resource: Resource =
            serde_json::from_str(r#"{"id":"a","name":"PLA","cost":"n/a"}"#).unwrap();
        assert_eq!(resource.unit_cost(), 0.0);
        assert_eq!(resource.brand, None);
    }
}
