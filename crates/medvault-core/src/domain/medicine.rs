//! Medicine Entity
//!
//! One inventory record for a drug batch: quantity, price and expiry.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::wire::{decimal, lenient_date};

/// Medicine as returned by the read endpoints (joined with its supplier)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medicine {
    #[serde(rename = "medicine_id")]
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub company: String,
    #[serde(default, with = "lenient_date")]
    pub mfg_date: Option<NaiveDate>,
    #[serde(default, with = "lenient_date")]
    pub exp_date: Option<NaiveDate>,
    #[serde(default)]
    pub quantity: i64,
    #[serde(deserialize_with = "decimal")]
    pub price: f64,
    pub supplier_id: u32,
    #[serde(default)]
    pub supplier_name: Option<String>,
    #[serde(default)]
    pub contact_no: Option<String>,
    /// Only filled by `GET /medicines/expiring`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_until_expiry: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Entity for Medicine {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Body of `POST /medicines` and `PUT /medicines/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicinePayload {
    pub name: String,
    pub company: String,
    pub mfg_date: NaiveDate,
    pub exp_date: NaiveDate,
    pub quantity: u32,
    pub price: f64,
    pub supplier_id: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_backend_row() {
        let json = r#"{
            "medicine_id": 7,
            "name": "Paracetamol",
            "company": "Acme Pharma",
            "mfg_date": "2024-01-10",
            "exp_date": "2026-01-10",
            "quantity": 120,
            "price": "4.50",
            "supplier_id": 2,
            "supplier_name": "MedSupply",
            "contact_no": "555-0100",
            "created_at": "2024-01-11 09:00:00",
            "updated_at": null
        }"#;
        let medicine: Medicine = serde_json::from_str(json).unwrap();
        assert_eq!(medicine.id(), 7);
        assert_eq!(medicine.price, 4.5);
        assert_eq!(medicine.exp_date, NaiveDate::from_ymd_opt(2026, 1, 10));
        assert_eq!(medicine.supplier_name.as_deref(), Some("MedSupply"));
        assert!(medicine.days_until_expiry.is_none());
    }

    #[test]
    fn test_decode_tolerates_bad_dates_and_numeric_price() {
        let json = r#"{"medicine_id": 1, "name": "X", "company": "Y",
            "mfg_date": null, "exp_date": "not a date",
            "quantity": 0, "price": 12.25, "supplier_id": 1, "days_until_expiry": 3}"#;
        let medicine: Medicine = serde_json::from_str(json).unwrap();
        assert!(medicine.mfg_date.is_none());
        assert!(medicine.exp_date.is_none());
        assert_eq!(medicine.price, 12.25);
        assert_eq!(medicine.days_until_expiry, Some(3));
    }

    #[test]
    fn test_bad_price_is_decode_error() {
        for price in [r#""abc""#, "null", r#""""#] {
            let json = format!(
                r#"{{"medicine_id": 1, "name": "X", "company": "Y", "quantity": 1, "price": {}, "supplier_id": 1}}"#,
                price
            );
            assert!(serde_json::from_str::<Medicine>(&json).is_err(), "price {}", price);
        }
        let missing = r#"{"medicine_id": 1, "name": "X", "quantity": 1, "supplier_id": 1}"#;
        assert!(serde_json::from_str::<Medicine>(missing).is_err());
    }

    #[test]
    fn test_payload_wire_format() {
        let payload = MedicinePayload {
            name: "Ibuprofen".to_string(),
            company: "Acme".to_string(),
            mfg_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            exp_date: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
            quantity: 10,
            price: 2.5,
            supplier_id: 3,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["mfg_date"], "2024-01-01");
        assert_eq!(value["exp_date"], "2025-06-30");
        assert_eq!(value["quantity"], 10);
        assert_eq!(value["supplier_id"], 3);
    }
}
