use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Treats an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// One listing returned by the price search API.
///
/// Missing or `null` fields decode to zero values and unknown fields are
/// ignored, so a sparse document never fails the whole response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShoeItem {
    #[serde(deserialize_with = "null_as_default")]
    pub parent_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub pcode: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price_high: f64,
    /// The buyable price; this is what thresholds compare against.
    #[serde(deserialize_with = "null_as_default")]
    pub price_low: f64,
}

impl fmt::Display for ShoeItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) at {:.2}", self.parent_name, self.pcode, self.price_low)
    }
}

/// `{ "response": { "numFound": .., "docs": [..] } }`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchEnvelope {
    #[serde(deserialize_with = "null_as_default")]
    pub response: SearchResponse,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    #[serde(rename = "numFound", deserialize_with = "null_as_default")]
    pub num_found: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub docs: Vec<ShoeItem>,
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::{SearchEnvelope, ShoeItem};

    #[test]
    fn decodes_envelope_and_ignores_unknown_fields() {
        let body = r#"{
            "responseHeader": { "status": 0 },
            "response": {
                "numFound": 2,
                "start": 0,
                "docs": [
                    { "parent_name": "Hoka Challenger", "pcode": "HK1", "price_high": 160.99, "price_low": 50, "brand": "Hoka" },
                    { "parent_name": "Altra Lone Peak", "pcode": "AL7", "price_high": 120.99, "price_low": 45.99 }
                ]
            }
        }"#;

        let envelope: SearchEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.response.num_found, 2);
        assert_eq!(
            envelope.response.docs,
            vec![
                ShoeItem {
                    parent_name: "Hoka Challenger".to_string(),
                    pcode: "HK1".to_string(),
                    price_high: 160.99,
                    price_low: 50.0,
                },
                ShoeItem {
                    parent_name: "Altra Lone Peak".to_string(),
                    pcode: "AL7".to_string(),
                    price_high: 120.99,
                    price_low: 45.99,
                },
            ]
        );
    }

    #[test]
    fn missing_fields_decode_to_defaults() {
        let envelope: SearchEnvelope =
            serde_json::from_str(r#"{ "response": { "docs": [ { "parent_name": "Bare" } ] } }"#)
                .unwrap();
        assert_eq!(envelope.response.num_found, 0);
        assert_eq!(
            envelope.response.docs,
            vec![ShoeItem {
                parent_name: "Bare".to_string(),
                ..ShoeItem::default()
            }]
        );

        let empty: SearchEnvelope = serde_json::from_str("{}").unwrap();
        assert!(empty.response.docs.is_empty());
    }

    #[test]
    fn null_fields_decode_to_defaults() {
        let body = r#"{
            "response": {
                "numFound": null,
                "docs": [
                    { "parent_name": "Hoka Challenger", "pcode": null, "price_high": null, "price_low": 50 },
                    { "parent_name": null, "pcode": "AL7", "price_high": 120.99, "price_low": null }
                ]
            }
        }"#;

        let envelope: SearchEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.response.num_found, 0);
        assert_eq!(
            envelope.response.docs,
            vec![
                ShoeItem {
                    parent_name: "Hoka Challenger".to_string(),
                    price_low: 50.0,
                    ..ShoeItem::default()
                },
                ShoeItem {
                    pcode: "AL7".to_string(),
                    price_high: 120.99,
                    ..ShoeItem::default()
                },
            ]
        );

        let null_docs: SearchEnvelope =
            serde_json::from_str(r#"{ "response": { "numFound": 0, "docs": null } }"#).unwrap();
        assert!(null_docs.response.docs.is_empty());

        let null_response: SearchEnvelope =
            serde_json::from_str(r#"{ "response": null }"#).unwrap();
        assert!(null_response.response.docs.is_empty());
    }
}
