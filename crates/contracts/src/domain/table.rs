use serde::{Deserialize, Serialize};

use crate::domain::status::ActiveStatus;

/// A physical dining table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningTable {
    pub id: i64,
    pub number: i32,
    pub description: String,
    pub status: ActiveStatus,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTable {
    pub number: Option<i32>,
    pub description: String,
}

impl NewTable {
    pub fn validate(&self) -> Result<(), String> {
        match self.number {
            None => return Err("Table number is required".into()),
            Some(n) if n <= 0 => return Err("Table number must be positive".into()),
            Some(_) => {}
        }
        if self.description.trim().is_empty() {
            return Err("Description is required".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_number_must_be_positive() {
        let mut table = NewTable {
            number: Some(12),
            description: "Window seat".into(),
        };
        assert!(table.validate().is_ok());

        table.number = Some(0);
        assert!(table.validate().is_err());

        table.number = None;
        assert!(table.validate().is_err());
    }
}
