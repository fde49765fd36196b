use serde::{Deserialize, Serialize};

use crate::domain::status::BookingStatus;

/// A table reservation as the API returns it. `eating_time` stays the ISO
/// string from the wire; formatting is a presentation concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub customer_name: String,
    pub customer_phone: String,
    pub eating_time: String,
    pub total_people: i32,
    pub total_table: i32,
    pub status: BookingStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_wire_shape() {
        let json = r#"{
            "id": 4,
            "customerName": "Lan Pham",
            "customerPhone": "0123456789",
            "eatingTime": "2024-05-01T18:30:00",
            "totalPeople": 4,
            "totalTable": 1,
            "status": 1
        }"#;
        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.id, 4);
        assert_eq!(booking.customer_phone, "0123456789");
        assert_eq!(booking.status, BookingStatus::Active);
    }
}
