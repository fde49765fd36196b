use serde::{Deserialize, Serialize};

use crate::domain::status::ActiveStatus;

/// A menu item. `category_name` arrives pre-joined from the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: Option<f64>,
    pub category_id: i64,
    pub category_name: String,
    pub status: ActiveStatus,
}

/// Create payload for a new menu item. Fields are optional while the form
/// is being filled; `validate` gates the network call.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFoodItem {
    pub name: String,
    pub description: String,
    pub price: Option<f64>,
    pub category_id: Option<i64>,
}

impl NewFoodItem {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".into());
        }
        if self.description.trim().is_empty() {
            return Err("Description is required".into());
        }
        match self.price {
            None => return Err("Price is required".into()),
            Some(p) if p < 0.0 => return Err("Price cannot be negative".into()),
            Some(_) => {}
        }
        if self.category_id.is_none() {
            return Err("Select a category".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_may_be_null_on_the_wire() {
        let json = r#"{
            "id": 2,
            "name": "Pho Bo",
            "description": "Beef noodle soup",
            "price": null,
            "categoryId": 1,
            "categoryName": "Soups",
            "status": 1
        }"#;
        let item: FoodItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.price, None);
        assert_eq!(item.status, ActiveStatus::Active);
    }

    #[test]
    fn new_item_requires_every_field() {
        let mut item = NewFoodItem {
            name: "Spring rolls".into(),
            description: "Fried, pork filling".into(),
            price: Some(4.5),
            category_id: Some(3),
        };
        assert!(item.validate().is_ok());

        item.category_id = None;
        assert!(item.validate().is_err());

        item.category_id = Some(3);
        item.price = Some(-1.0);
        assert!(item.validate().is_err());

        item.price = Some(4.5);
        item.name = "  ".into();
        assert!(item.validate().is_err());
    }
}
