use serde::{Deserialize, Serialize};

/// The single domain entity managed by this service.
///
/// Serialized with camelCase field names (`inStock`) to match the public
/// JSON contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Opaque unique identifier, generated at creation and immutable
    pub id: String,
    /// Non-empty display name, searched as a case-insensitive substring
    pub name: String,
    /// Non-empty description
    pub description: String,
    /// Non-negative price
    pub price: f64,
    /// Non-empty category, filtered by exact match
    pub category: String,
    /// Availability flag
    pub in_stock: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_product_serializes_camel_case() {
        let product = Product {
            id: "1".to_string(),
            name: "Laptop".to_string(),
            description: "High-performance laptop with 16GB RAM".to_string(),
            price: 1200.0,
            category: "electronics".to_string(),
            in_stock: true,
        };

        let json = serde_json::to_string(&product).expect("Serialization should succeed");
        assert!(json.contains("\"inStock\":true"));
        assert!(!json.contains("in_stock"));
    }

    #[test]
    fn test_product_round_trip() {
        let json = r#"{
            "id": "2",
            "name": "Smartphone",
            "description": "Latest model with 128GB storage",
            "price": 800,
            "category": "electronics",
            "inStock": true
        }"#;

        let product: Product = serde_json::from_str(json).expect("Deserialization should succeed");
        assert_eq!(product.name, "Smartphone");
        assert_eq!(product.price, 800.0);
        assert!(product.in_stock);

        let back = serde_json::to_value(&product).expect("Serialization should succeed");
        assert_eq!(back["inStock"], serde_json::Value::Bool(true));
    }
}
