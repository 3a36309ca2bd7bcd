//! Pure sanitizers turning raw record fields into display strings.
//!
//! None of these fail or log; absent and malformed input is absorbed into
//! the documented per-field fallback.

use serde_json::Value;

/// Image reference rendered when a product carries no usable image URL.
pub const PLACEHOLDER_IMAGE: &str = "placeholder-image.jpeg";

/// Sentinel shown when a product has no name.
pub const NAME_FALLBACK: &str = "Product Name Not Available";

/// Compact recommendation cards cap the product name at this many characters.
pub const CARD_NAME_LIMIT: usize = 50;

/// First entry of a pipe-delimited image URL list, trimmed.
///
/// Falls back to [`PLACEHOLDER_IMAGE`] when the field is absent or the
/// first segment is empty.
pub fn first_image(raw: Option<&str>) -> String {
    let first = raw
        .and_then(|urls| urls.split('|').next())
        .map(str::trim)
        .unwrap_or("");
    if first.is_empty() {
        PLACEHOLDER_IMAGE.to_string()
    } else {
        first.to_string()
    }
}

/// Trimmed product name, or [`NAME_FALLBACK`].
pub fn display_name(raw: Option<&str>) -> String {
    text_or(raw, NAME_FALLBACK)
}

/// Name for compact recommendation cards: as [`display_name`], truncated to
/// [`CARD_NAME_LIMIT`] characters on a character boundary.
pub fn card_name(raw: Option<&str>) -> String {
    let mut name = display_name(raw);
    if let Some((idx, _)) = name.char_indices().nth(CARD_NAME_LIMIT) {
        name.truncate(idx);
    }
    name
}

/// Price formatted to exactly two decimals.
///
/// Accepts a JSON number or a numeric string; anything else is absorbed to
/// `0.00`. Idempotent: formatting an already-formatted price reproduces it.
pub fn display_price(raw: Option<&Value>) -> String {
    format!("{:.2}", raw.and_then(value_as_f64).unwrap_or(0.0))
}

/// Rating passed through as-is, or `No Rating`.
pub fn display_rating(raw: Option<&Value>) -> String {
    scalar_or(raw, "No Rating")
}

/// Review count passed through as-is, or `0`.
pub fn display_review_count(raw: Option<&Value>) -> String {
    scalar_or(raw, "0")
}

/// Brand name, or `Brand Not Available`.
pub fn display_brand(raw: Option<&str>) -> String {
    text_or(raw, "Brand Not Available")
}

/// Description, or `No description available.`.
pub fn display_description(raw: Option<&str>) -> String {
    text_or(raw, "No description available.")
}

fn text_or(raw: Option<&str>, fallback: &str) -> String {
    match raw.map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => fallback.to_string(),
    }
}

fn scalar_or(raw: Option<&Value>, fallback: &str) -> String {
    match raw {
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
        _ => fallback.to_string(),
    }
}

fn value_as_f64(v: &Value) -> Option<f64> {
    if let Some(n) = v.as_f64() {
        return Some(n);
    }
    if let Some(s) = v.as_str() {
        return s.trim().parse::<f64>().ok();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn first_image_takes_first_pipe_segment() {
        assert_eq!(
            first_image(Some(" https://a/1.jpg |https://a/2.jpg")),
            "https://a/1.jpg"
        );
        assert_eq!(first_image(Some("")), PLACEHOLDER_IMAGE);
        assert_eq!(first_image(None), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn card_name_truncates_on_char_boundary() {
        let long = "à".repeat(80);
        let card = card_name(Some(&long));
        assert_eq!(card.chars().count(), CARD_NAME_LIMIT);

        assert_eq!(card_name(Some("Short")), "Short");
        assert_eq!(card_name(None), NAME_FALLBACK);
    }

    #[test]
    fn price_coerces_and_defaults() {
        assert_eq!(display_price(Some(&json!(12.5))), "12.50");
        assert_eq!(display_price(Some(&json!("19.999"))), "20.00");
        assert_eq!(display_price(Some(&json!("not a price"))), "0.00");
        assert_eq!(display_price(None), "0.00");
    }

    #[test]
    fn price_formatting_is_idempotent() {
        let once = display_price(Some(&json!("19.999")));
        let twice = display_price(Some(&json!(once.clone())));
        assert_eq!(once, twice);
    }

    #[test]
    fn detail_fields_fall_back() {
        assert_eq!(display_rating(Some(&json!(4.5))), "4.5");
        assert_eq!(display_rating(None), "No Rating");
        assert_eq!(display_review_count(Some(&json!("128"))), "128");
        assert_eq!(display_review_count(Some(&json!(""))), "0");
        assert_eq!(display_brand(None), "Brand Not Available");
        assert_eq!(display_description(None), "No description available.");
    }
}
