use serde::{Deserialize, Deserializer, Serialize};

/// One recorded sale as returned by the backend listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub customer: String,
    pub item: String,
    pub quantity: u64,
    pub total: f64,
    #[serde(default, deserialize_with = "display_value")]
    pub timestamp: String,
}

/// Request body for the sale creation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSale {
    pub customer: String,
    pub item: String,
    pub price: f64,
    pub quantity: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddSaleResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub name: String,
    pub price: f64,
}

impl CatalogItem {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

pub fn default_catalog() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new("White Springtail", 120.0),
        CatalogItem::new("Orange Springtail", 250.0),
        CatalogItem::new("Agnara", 120.0),
        CatalogItem::new("Porcellio Sevilla", 250.0),
    ]
}

// Timestamps are server-assigned and only ever displayed, so any scalar is kept as text.
fn display_value<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(text) => text,
        other => other.to_string(),
    })
}
