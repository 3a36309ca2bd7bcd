//! Wire-facing record types served by the catalog backend.
//!
//! The backend streams rows straight out of a CSV-backed dataframe, so the
//! JSON is loosely typed: ids and prices arrive as strings or numbers
//! depending on the column, and missing cells routinely arrive as empty
//! strings. All of that tolerance lives here so the rest of the crate works
//! with explicit optional fields and documented fallbacks.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One product record as served by the catalog backend.
///
/// `id` is the only field trusted as a join key across fetch boundaries and
/// must be unique across the collection. Every other field is optional with
/// a display-time fallback (see [`crate::normalization`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "Product Id", deserialize_with = "id_string")]
    pub id: String,
    #[serde(
        rename = "Product Name",
        default,
        deserialize_with = "trimmed_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    /// `>`-delimited category path, consumed to depth 2 by the indexer.
    #[serde(
        rename = "Product Category",
        default,
        deserialize_with = "trimmed_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub category_path: Option<String>,
    /// Pipe-delimited list of one or more image URLs.
    #[serde(
        rename = "Product Image Url",
        default,
        deserialize_with = "trimmed_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_urls: Option<String>,
    /// Raw price value, coerced only at display time (number or numeric
    /// string on the wire).
    #[serde(
        rename = "Product Price",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Value>,
    #[serde(
        rename = "Product Brand",
        default,
        deserialize_with = "trimmed_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub brand: Option<String>,
    #[serde(
        rename = "Product Rating",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub rating: Option<Value>,
    #[serde(
        rename = "Product Reviews Count",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub review_count: Option<Value>,
    #[serde(
        rename = "Product Description",
        default,
        deserialize_with = "trimmed_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(
        rename = "Product Tags",
        default,
        deserialize_with = "trimmed_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub tags: Option<String>,
}

/// The three raw id lists returned by `/recommendations/{id}`, before
/// resolution to full records. Produced fresh per detail view, never cached.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendationBundle {
    #[serde(default, deserialize_with = "id_list")]
    pub content_based: Vec<String>,
    #[serde(default, deserialize_with = "id_list")]
    pub hybrid: Vec<String>,
    #[serde(default, deserialize_with = "id_list")]
    pub prev_viewed: Vec<String>,
}

/// String form of a scalar wire value; empty-after-trim counts as absent.
fn scalar_string(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn id_string<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(de)?;
    scalar_string(&raw)
        .ok_or_else(|| serde::de::Error::custom("product id must be a non-empty string or number"))
}

fn trimmed_opt<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(de)?;
    Ok(raw.as_ref().and_then(scalar_string))
}

fn id_list<'de, D>(de: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<Value>::deserialize(de)?;
    Ok(raw.iter().filter_map(scalar_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_loose_record() {
        let product: Product = serde_json::from_value(json!({
            "Product Id": 42,
            "Product Name": "  Stand Mixer  ",
            "Product Category": "Home > Kitchen",
            "Product Image Url": "https://a/1.jpg|https://a/2.jpg",
            "Product Price": "19.99",
            "Product Brand": "",
            "Product Rating": 4.5,
        }))
        .unwrap();

        assert_eq!(product.id, "42");
        assert_eq!(product.name.as_deref(), Some("Stand Mixer"));
        assert_eq!(product.category_path.as_deref(), Some("Home > Kitchen"));
        // fillna('') on the backend turns missing cells into empty strings
        assert_eq!(product.brand, None);
        assert_eq!(product.description, None);
        assert_eq!(product.price, Some(json!("19.99")));
    }

    #[test]
    fn rejects_record_without_id() {
        let err = serde_json::from_value::<Product>(json!({
            "Product Name": "Orphan",
        }));
        assert!(err.is_err());
    }

    #[test]
    fn bundle_accepts_numeric_ids_and_missing_rows() {
        let bundle: RecommendationBundle = serde_json::from_value(json!({
            "content_based": [1, "2", ""],
            "hybrid": [],
        }))
        .unwrap();

        assert_eq!(bundle.content_based, vec!["1", "2"]);
        assert!(bundle.hybrid.is_empty());
        assert!(bundle.prev_viewed.is_empty());
    }
}
