use serde::{Deserialize, Deserializer, Serialize};

/// One purchased line on a receipt.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    pub price: String, // decimal string, e.g. "6.49"
}

/// A submitted receipt.
///
/// Amounts, date and time stay as the strings the client sent. Scoring
/// coerces them rule by rule, so a malformed sub-field never rejects the
/// whole receipt.
///
/// Example JSON:
/// ```json
/// {
///   "retailer": "Target",
///   "purchaseDate": "2022-01-01",
///   "purchaseTime": "13:01",
///   "items": [{ "shortDescription": "Mountain Dew 12PK", "price": "6.49" }],
///   "total": "6.49"
/// }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: String, // YYYY-MM-DD
    pub purchase_time: String, // HH:MM, 24h
    pub total: String,
    /// Missing or `null` reads as an empty list
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<Item>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Item>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Item>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Receipt {
    /// Parse a receipt from raw JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }
}
