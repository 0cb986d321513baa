//! Income record model

use serde::{Deserialize, Serialize};

/// One source of income for a month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeRecord {
    #[serde(rename = "incomeId")]
    pub income_id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub amount: f64,
}

impl IncomeRecord {
    /// Create a new income record
    pub fn new(income_id: impl Into<String>, description: impl Into<String>, amount: f64) -> Self {
        Self {
            income_id: income_id.into(),
            description: description.into(),
            amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let income = IncomeRecord::new("i1", "Salary", 5000.0);
        let json = serde_json::to_value(&income).unwrap();
        assert_eq!(json["incomeId"], "i1");
        assert_eq!(json["description"], "Salary");
        assert_eq!(json["amount"], 5000.0);
    }
}
