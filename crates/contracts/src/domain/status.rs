//! Status enumerations and their transition tables.
//!
//! The API stores every status as a small integer. Each enum here keeps the
//! wire code, a display label, and the set of transitions the client is
//! allowed to request. The transition tables are consulted twice: by the UI
//! (which action buttons render at all) and by the mutation coordinator
//! (a disallowed transition is rejected before any network call is made).

use serde::{Deserialize, Serialize};

/// Two-state enable flag used by categories, foods, tables and users.
///
/// The server's `changestatus` endpoints flip it; the only transition is
/// the toggle to the opposite side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum ActiveStatus {
    Inactive,
    Active,
}

impl ActiveStatus {
    pub fn code(self) -> i32 {
        match self {
            ActiveStatus::Inactive => 0,
            ActiveStatus::Active => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ActiveStatus::Inactive => "Inactive",
            ActiveStatus::Active => "Active",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ActiveStatus::Inactive => ActiveStatus::Active,
            ActiveStatus::Active => ActiveStatus::Inactive,
        }
    }

    pub fn allowed_transitions(self) -> &'static [ActiveStatus] {
        match self {
            ActiveStatus::Inactive => &[ActiveStatus::Active],
            ActiveStatus::Active => &[ActiveStatus::Inactive],
        }
    }

    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_transitions().contains(&next)
    }
}

impl From<i32> for ActiveStatus {
    fn from(code: i32) -> Self {
        if code == 1 {
            ActiveStatus::Active
        } else {
            ActiveStatus::Inactive
        }
    }
}

impl From<ActiveStatus> for i32 {
    fn from(status: ActiveStatus) -> i32 {
        status.code()
    }
}

/// Booking status is display-only; the admin screens expose no booking
/// status transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum BookingStatus {
    Cancelled,
    Active,
}

impl BookingStatus {
    pub fn code(self) -> i32 {
        match self {
            BookingStatus::Cancelled => 0,
            BookingStatus::Active => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BookingStatus::Cancelled => "Cancelled",
            BookingStatus::Active => "Active",
        }
    }
}

impl From<i32> for BookingStatus {
    fn from(code: i32) -> Self {
        if code == 1 {
            BookingStatus::Active
        } else {
            BookingStatus::Cancelled
        }
    }
}

impl From<BookingStatus> for i32 {
    fn from(status: BookingStatus) -> i32 {
        status.code()
    }
}

/// Lifecycle of one food order placed at a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum TableFoodStatus {
    Cancelled,
    Ordered,
    Served,
}

impl TableFoodStatus {
    pub fn code(self) -> i32 {
        match self {
            TableFoodStatus::Cancelled => 0,
            TableFoodStatus::Ordered => 1,
            TableFoodStatus::Served => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TableFoodStatus::Cancelled => "Cancelled",
            TableFoodStatus::Ordered => "Ordered",
            TableFoodStatus::Served => "Served",
        }
    }

    /// An ordered item can be served or cancelled; a served item can still
    /// be cancelled (wrong table, returned dish); a cancelled item is final.
    pub fn allowed_transitions(self) -> &'static [TableFoodStatus] {
        match self {
            TableFoodStatus::Ordered => &[TableFoodStatus::Served, TableFoodStatus::Cancelled],
            TableFoodStatus::Served => &[TableFoodStatus::Cancelled],
            TableFoodStatus::Cancelled => &[],
        }
    }

    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_transitions().contains(&next)
    }
}

impl From<i32> for TableFoodStatus {
    fn from(code: i32) -> Self {
        match code {
            0 => TableFoodStatus::Cancelled,
            1 => TableFoodStatus::Ordered,
            _ => TableFoodStatus::Served,
        }
    }
}

impl From<TableFoodStatus> for i32 {
    fn from(status: TableFoodStatus) -> i32 {
        status.code()
    }
}

/// A bill is settled exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum BillStatus {
    Unpaid,
    Paid,
}

impl BillStatus {
    pub fn code(self) -> i32 {
        match self {
            BillStatus::Unpaid => 0,
            BillStatus::Paid => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BillStatus::Unpaid => "Unpaid",
            BillStatus::Paid => "Paid",
        }
    }

    pub fn allowed_transitions(self) -> &'static [BillStatus] {
        match self {
            BillStatus::Unpaid => &[BillStatus::Paid],
            BillStatus::Paid => &[],
        }
    }

    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_transitions().contains(&next)
    }
}

impl From<i32> for BillStatus {
    fn from(code: i32) -> Self {
        if code == 0 {
            BillStatus::Unpaid
        } else {
            BillStatus::Paid
        }
    }
}

impl From<BillStatus> for i32 {
    fn from(status: BillStatus) -> i32 {
        status.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_food_served_only_from_ordered() {
        assert!(TableFoodStatus::Ordered.can_transition_to(TableFoodStatus::Served));
        assert!(!TableFoodStatus::Cancelled.can_transition_to(TableFoodStatus::Served));
        assert!(!TableFoodStatus::Served.can_transition_to(TableFoodStatus::Served));
    }

    #[test]
    fn table_food_cancelled_is_final() {
        assert!(TableFoodStatus::Cancelled.allowed_transitions().is_empty());
        assert!(TableFoodStatus::Ordered.can_transition_to(TableFoodStatus::Cancelled));
        assert!(TableFoodStatus::Served.can_transition_to(TableFoodStatus::Cancelled));
    }

    #[test]
    fn bill_paid_is_final() {
        assert!(BillStatus::Unpaid.can_transition_to(BillStatus::Paid));
        assert!(BillStatus::Paid.allowed_transitions().is_empty());
    }

    #[test]
    fn active_status_is_a_toggle() {
        assert_eq!(ActiveStatus::Active.toggled(), ActiveStatus::Inactive);
        assert!(ActiveStatus::Active.can_transition_to(ActiveStatus::Inactive));
        assert!(!ActiveStatus::Active.can_transition_to(ActiveStatus::Active));
    }

    #[test]
    fn codes_round_trip_through_serde() {
        let json = serde_json::to_string(&TableFoodStatus::Served).unwrap();
        assert_eq!(json, "2");
        let back: TableFoodStatus = serde_json::from_str("1").unwrap();
        assert_eq!(back, TableFoodStatus::Ordered);
        // Unknown codes degrade the same way the screens always rendered them.
        let unknown: TableFoodStatus = serde_json::from_str("7").unwrap();
        assert_eq!(unknown, TableFoodStatus::Served);
    }
}
