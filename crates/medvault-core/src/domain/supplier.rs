//! Supplier Entity
//!
//! The vendor a medicine batch was bought from.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Supplier as returned by `GET /suppliers`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    #[serde(rename = "supplier_id")]
    pub id: u32,
    #[serde(rename = "supplier_name")]
    pub name: String,
    pub contact_no: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Supplier {
    /// Text shown in the supplier selection control
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.contact_no)
    }
}

impl Entity for Supplier {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Body of `POST /suppliers`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSupplier {
    pub supplier_name: String,
    pub contact_no: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supplier_label() {
        let supplier: Supplier = serde_json::from_str(
            r#"{"supplier_id": 4, "supplier_name": "HealthCo", "contact_no": "0300-1234567"}"#,
        )
        .unwrap();
        assert_eq!(supplier.id(), 4);
        assert_eq!(supplier.label(), "HealthCo (0300-1234567)");
    }
}
