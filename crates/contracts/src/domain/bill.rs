use serde::{Deserialize, Serialize};

use crate::domain::status::BillStatus;

/// A customer bill. Staff names arrive pre-joined; `paid_time` and the
/// updated-by fields are null until the bill is settled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: i64,
    pub customer_id: i64,
    pub customer_name: String,
    pub customer_phone: String,
    pub total_price: f64,
    pub created_time: String,
    pub created_staff_id: i64,
    pub created_staff_name: String,
    pub paid_time: Option<String>,
    pub updated_staff_id: Option<i64>,
    pub updated_staff_name: Option<String>,
    pub status: BillStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpaid_bill_has_no_settlement_fields() {
        let json = r#"{
            "id": 9,
            "customerId": 2,
            "customerName": "Minh Tran",
            "customerPhone": "0987654321",
            "totalPrice": 42.5,
            "createdTime": "2024-05-02T12:10:00",
            "createdStaffId": 1,
            "createdStaffName": "Staff One",
            "paidTime": null,
            "updatedStaffId": null,
            "updatedStaffName": null,
            "status": 0
        }"#;
        let bill: Bill = serde_json::from_str(json).unwrap();
        assert_eq!(bill.status, BillStatus::Unpaid);
        assert!(bill.paid_time.is_none());
    }
}
