//! Medicine Endpoints

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::{ApiClient, ApiError, Method, Transport};
use crate::domain::{Medicine, MedicinePayload, MutationResponse};

impl<T: Transport> ApiClient<T> {
    pub async fn list_medicines(&self) -> Result<Vec<Medicine>, ApiError> {
        self.get("/medicines", "Failed to fetch medicines").await
    }

    pub async fn get_medicine(&self, id: u32) -> Result<Medicine, ApiError> {
        self.get(&format!("/medicines/{}", id), "Failed to fetch medicine").await
    }

    /// Search by name, company or supplier. A blank query short-circuits to
    /// an empty result without touching the network.
    pub async fn search_medicines(&self, query: &str) -> Result<Vec<Medicine>, ApiError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        let encoded = utf8_percent_encode(query, NON_ALPHANUMERIC);
        self.get(&format!("/medicines/search?q={}", encoded), "Search failed").await
    }

    /// Medicines expiring between today and `within_days` from now,
    /// soonest first, each with `days_until_expiry` filled in.
    pub async fn list_expiring(&self, within_days: u32) -> Result<Vec<Medicine>, ApiError> {
        self.get(
            &format!("/medicines/expiring?days={}", within_days),
            "Failed to fetch expiring medicines",
        )
        .await
    }

    pub async fn create_medicine(&self, payload: &MedicinePayload) -> Result<MutationResponse, ApiError> {
        self.send_json(Method::Post, "/medicines", payload, "Failed to add medicine").await
    }

    pub async fn update_medicine(&self, id: u32, payload: &MedicinePayload) -> Result<MutationResponse, ApiError> {
        self.send_json(Method::Put, &format!("/medicines/{}", id), payload, "Failed to update medicine")
            .await
    }

    pub async fn delete_medicine(&self, id: u32) -> Result<MutationResponse, ApiError> {
        self.execute(Method::Delete, &format!("/medicines/{}", id), None, "Failed to delete medicine")
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{client, FakeTransport};
    use super::*;
    use chrono::NaiveDate;
    use futures::executor::block_on;

    const ONE_MEDICINE: &str = r#"[{"medicine_id": 1, "name": "Aspirin", "company": "Bayer",
        "mfg_date": "2024-01-01", "exp_date": "2026-01-01", "quantity": 5, "price": "2.00",
        "supplier_id": 1, "supplier_name": "MedSupply", "contact_no": "555"}]"#;

    fn payload() -> MedicinePayload {
        MedicinePayload {
            name: "Aspirin".to_string(),
            company: "Bayer".to_string(),
            mfg_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            exp_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            quantity: 5,
            price: 2.0,
            supplier_id: 1,
        }
    }

    #[test]
    fn test_list_medicines() {
        let api = client(FakeTransport::default().respond(200, ONE_MEDICINE));
        let medicines = block_on(api.list_medicines()).unwrap();
        assert_eq!(medicines.len(), 1);
        assert_eq!(medicines[0].name, "Aspirin");

        let request = api.transport().last_request().unwrap();
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.url, "http://localhost:5000/api/medicines");
        assert!(request.body.is_none());
    }

    #[test]
    fn test_get_medicine_not_found() {
        let api = client(FakeTransport::default().respond(404, r#"{"error": "Medicine not found"}"#));
        let err = block_on(api.get_medicine(99)).unwrap_err();
        assert_eq!(err, ApiError::NotFound("Medicine not found".to_string()));
        assert_eq!(api.transport().last_request().unwrap().url, "http://localhost:5000/api/medicines/99");
    }

    #[test]
    fn test_blank_search_makes_no_request() {
        let api = client(FakeTransport::default());
        assert!(block_on(api.search_medicines("")).unwrap().is_empty());
        assert!(block_on(api.search_medicines("   ")).unwrap().is_empty());
        assert_eq!(api.transport().request_count(), 0);
    }

    #[test]
    fn test_search_encodes_query() {
        let api = client(FakeTransport::default().respond(200, ONE_MEDICINE));
        let results = block_on(api.search_medicines(" vitamin c&d ")).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(
            api.transport().last_request().unwrap().url,
            "http://localhost:5000/api/medicines/search?q=vitamin%20c%26d"
        );
    }

    #[test]
    fn test_list_expiring_passes_window() {
        let body = r#"[{"medicine_id": 3, "name": "Insulin", "company": "Novo",
            "mfg_date": "2024-01-01", "exp_date": "2024-06-10", "quantity": 2, "price": 30,
            "supplier_id": 2, "days_until_expiry": 9}]"#;
        let api = client(FakeTransport::default().respond(200, body));
        let medicines = block_on(api.list_expiring(30)).unwrap();
        assert_eq!(medicines[0].days_until_expiry, Some(9));
        assert_eq!(
            api.transport().last_request().unwrap().url,
            "http://localhost:5000/api/medicines/expiring?days=30"
        );
    }

    #[test]
    fn test_create_medicine_sends_json() {
        let api = client(
            FakeTransport::default().respond(201, r#"{"message": "Medicine added successfully", "id": 12}"#),
        );
        let created = block_on(api.create_medicine(&payload())).unwrap();
        assert_eq!(created.id, Some(12));

        let request = api.transport().last_request().unwrap();
        assert_eq!(request.method, Method::Post);
        let sent: serde_json::Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(sent["name"], "Aspirin");
        assert_eq!(sent["exp_date"], "2026-01-01");
        assert_eq!(sent["price"], 2.0);
    }

    #[test]
    fn test_create_medicine_validation_error() {
        let api = client(
            FakeTransport::default().respond(400, r#"{"error": "Quantity must be non-negative"}"#),
        );
        let err = block_on(api.create_medicine(&payload())).unwrap_err();
        assert_eq!(err, ApiError::Validation("Quantity must be non-negative".to_string()));
    }

    #[test]
    fn test_update_medicine_uses_put() {
        let api = client(
            FakeTransport::default().respond(200, r#"{"message": "Medicine updated successfully"}"#),
        );
        let resp = block_on(api.update_medicine(4, &payload())).unwrap();
        assert_eq!(resp.message.as_deref(), Some("Medicine updated successfully"));
        let request = api.transport().last_request().unwrap();
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.url, "http://localhost:5000/api/medicines/4");
    }

    #[test]
    fn test_update_missing_medicine() {
        let api = client(FakeTransport::default().respond(404, r#"{"error": "Medicine not found"}"#));
        let err = block_on(api.update_medicine(77, &payload())).unwrap_err();
        assert_eq!(err, ApiError::NotFound("Medicine not found".to_string()));
        let request = api.transport().last_request().unwrap();
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.url, "http://localhost:5000/api/medicines/77");
    }

    #[test]
    fn test_delete_missing_medicine() {
        let api = client(FakeTransport::default().respond(404, r#"{"error": "Medicine not found"}"#));
        let err = block_on(api.delete_medicine(404)).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(api.transport().last_request().unwrap().method, Method::Delete);
    }

    #[test]
    fn test_server_error_without_body_uses_fallback() {
        let api = client(FakeTransport::default().respond(500, ""));
        let err = block_on(api.list_medicines()).unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch medicines");
    }
}
