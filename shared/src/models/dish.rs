//! Dish Model

use serde::{Deserialize, Serialize};

/// Dish entity (a stored row, id always assigned)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Dish {
    pub id: i64,
    pub name: String,
    pub price: f64,
    /// Grams
    pub weight: i64,
}

/// Create dish payload
///
/// Every field is mandatory. Requests are first decoded leniently so a
/// missing field can be reported with a stable message, see [`DishCreate::from_parts`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishCreate {
    pub name: String,
    pub price: f64,
    pub weight: i64,
}

impl DishCreate {
    /// Assemble a payload only when all three fields are present
    pub fn from_parts(
        name: Option<String>,
        price: Option<f64>,
        weight: Option<i64>,
    ) -> Option<Self> {
        Some(Self {
            name: name?,
            price: price?,
            weight: weight?,
        })
    }
}

/// Update dish payload
///
/// `None` means "leave unchanged". A JSON `null` decodes to `None` as well.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DishUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
}

impl DishUpdate {
    /// True when the patch would not touch any column
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.weight.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_requires_every_field() {
        assert!(DishCreate::from_parts(Some("Soup".into()), Some(5.5), None).is_none());
        assert!(DishCreate::from_parts(None, Some(5.5), Some(300)).is_none());

        let dish = DishCreate::from_parts(Some("Soup".into()), Some(5.5), Some(300)).unwrap();
        assert_eq!(dish.name, "Soup");
        assert_eq!(dish.weight, 300);
    }

    #[test]
    fn test_update_null_is_absent() {
        let update: DishUpdate = serde_json::from_str(r#"{"name": null, "price": 6.0}"#).unwrap();
        assert_eq!(update.name, None);
        assert_eq!(update.price, Some(6.0));
        assert!(!update.is_empty());

        let empty: DishUpdate = serde_json::from_str("{}").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_update_serializes_only_present_fields() {
        let update = DishUpdate {
            weight: Some(250),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"weight":250}"#);
    }
}
