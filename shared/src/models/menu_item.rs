//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Menu item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Price in currency unit
    pub price: f64,
    pub category: String,
    /// Server-relative image path (e.g. `/uploads/paneer.jpg`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Create/update menu item payload
///
/// Sent as multipart text fields; the image travels as a separate file part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItemFields {
    pub name: String,
    pub description: String,
    /// Price in currency unit
    pub price: f64,
    pub category: String,
}

impl From<&MenuItem> for MenuItemFields {
    fn from(item: &MenuItem) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price,
            category: item.category.clone(),
        }
    }
}
