use serde::{Deserialize, Serialize};

use crate::domain::status::ActiveStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub status: ActiveStatus,
}

impl Category {
    /// Update payloads send the whole record back with the edit applied,
    /// so the same validation covers create and update.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Category name is required".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    pub description: String,
}

impl NewCategory {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Category name is required".into());
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
    fn new_category_rejects_blank_fields() {
        let ok = NewCategory {
            name: "Desserts".into(),
            description: "Sweet things".into(),
        };
        assert!(ok.validate().is_ok());

        let blank = NewCategory {
            name: String::new(),
            description: "x".into(),
        };
        assert!(blank.validate().is_err());
    }
}
