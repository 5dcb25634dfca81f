//! Assertions over `--format json` listing output.

use anyhow::{Context, Result};
use serde_json::Value;

/// Ids of the listed items, in display order.
pub fn visible_ids(json: &Value) -> Result<Vec<String>> {
    let items = json["content"]["items"]
        .as_array()
        .context("Expected 'content.items' array in JSON")?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item["id"]
                .as_str()
                .map(String::from)
                .with_context(|| format!("Item {} missing id", i))
        })
        .collect()
}

/// Assert the listed items and their order.
pub fn assert_visible_ids(json: &Value, expected: &[&str]) -> Result<()> {
    let ids = visible_ids(json)?;
    if ids != expected {
        anyhow::bail!("Expected items {:?}, got {:?}", expected, ids);
    }
    Ok(())
}

pub fn assert_count_label(json: &Value, expected: &str) -> Result<()> {
    let label = json["content"]["count_label"]
        .as_str()
        .context("Expected 'content.count_label' in JSON")?;

    if label != expected {
        anyhow::bail!("Expected count label {:?}, got {:?}", expected, label);
    }
    Ok(())
}

/// Assert whether the "no results" placeholder is present.
pub fn assert_placeholder(json: &Value, expected: bool) -> Result<()> {
    let present = json["content"]
        .get("placeholder")
        .is_some_and(|placeholder| !placeholder.is_null());

    if present != expected {
        anyhow::bail!(
            "Expected placeholder present = {}, got {}",
            expected,
            present
        );
    }
    Ok(())
}

/// Assert a final control value (after any range correction).
pub fn assert_control(json: &Value, name: &str, expected: &str) -> Result<()> {
    let value = json["content"]["controls"][name]
        .as_str()
        .with_context(|| format!("Control {} not set in JSON", name))?;

    if value != expected {
        anyhow::bail!("Expected {} = {:?}, got {:?}", name, expected, value);
    }
    Ok(())
}
