use serde::{Deserialize, Serialize};

use crate::domain::status::TableFoodStatus;

/// One food order placed at a table. Table number, customer and food names
/// arrive pre-joined; the ids are kept for reference only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableFood {
    pub id: i64,
    pub table_id: i64,
    pub table_number: i32,
    pub booking_id: i64,
    pub customer_id: i64,
    pub customer_name: String,
    pub customer_phone: String,
    pub food_id: i64,
    pub food_name: String,
    pub status: TableFoodStatus,
}

/// Form state for the add-order form. `build` validates and produces the
/// wire payload (the API takes the food id as a one-element list).
#[derive(Debug, Clone, Default)]
pub struct NewTableFood {
    pub table_id: Option<i64>,
    pub food_id: Option<i64>,
    pub booking_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTableFood {
    pub table_id: i64,
    pub food_id: Vec<i64>,
    pub booking_id: i64,
}

impl NewTableFood {
    pub fn build(&self) -> Result<CreateTableFood, String> {
        let table_id = self.table_id.ok_or("Table ID is required")?;
        let food_id = self.food_id.ok_or("Select a food")?;
        let booking_id = self.booking_id.ok_or("Booking ID is required")?;
        Ok(CreateTableFood {
            table_id,
            food_id: vec![food_id],
            booking_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_payload_wraps_food_id_in_a_list() {
        let form = NewTableFood {
            table_id: Some(3),
            food_id: Some(17),
            booking_id: Some(8),
        };
        let payload = form.build().unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["tableId"], 3);
        assert_eq!(json["foodId"], serde_json::json!([17]));
        assert_eq!(json["bookingId"], 8);
    }

    #[test]
    fn build_rejects_missing_references() {
        assert!(NewTableFood::default().build().is_err());
        let partial = NewTableFood {
            table_id: Some(1),
            food_id: None,
            booking_id: Some(2),
        };
        assert!(partial.build().is_err());
    }
}
