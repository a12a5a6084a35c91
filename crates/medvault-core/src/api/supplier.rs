//! Supplier Endpoints

use super::{ApiClient, ApiError, Method, Transport};
use crate::domain::{MutationResponse, NewSupplier, Supplier};

impl<T: Transport> ApiClient<T> {
    pub async fn list_suppliers(&self) -> Result<Vec<Supplier>, ApiError> {
        self.get("/suppliers", "Failed to fetch suppliers").await
    }

    pub async fn create_supplier(&self, supplier: &NewSupplier) -> Result<MutationResponse, ApiError> {
        self.send_json(Method::Post, "/suppliers", supplier, "Failed to add supplier").await
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{client, FakeTransport};
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_list_suppliers() {
        let body = r#"[{"supplier_id": 1, "supplier_name": "HealthCo", "contact_no": "555-0101",
            "created_at": "2024-01-01 00:00:00", "updated_at": "2024-01-01 00:00:00"}]"#;
        let api = client(FakeTransport::default().respond(200, body));
        let suppliers = block_on(api.list_suppliers()).unwrap();
        assert_eq!(suppliers.len(), 1);
        assert_eq!(suppliers[0].name, "HealthCo");
    }

    #[test]
    fn test_create_supplier() {
        let api = client(
            FakeTransport::default().respond(201, r#"{"message": "Supplier added successfully", "id": 5}"#),
        );
        let new = NewSupplier {
            supplier_name: "PharmaDirect".to_string(),
            contact_no: "555-0199".to_string(),
        };
        let resp = block_on(api.create_supplier(&new)).unwrap();
        assert_eq!(resp.id, Some(5));

        let request = api.transport().last_request().unwrap();
        assert_eq!(request.method, Method::Post);
        let sent: serde_json::Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(sent["supplier_name"], "PharmaDirect");
        assert_eq!(sent["contact_no"], "555-0199");
    }

    #[test]
    fn test_missing_fields_error() {
        let api = client(FakeTransport::default().respond(
            400,
            r#"{"error": "Missing required fields: supplier_name, contact_no"}"#,
        ));
        let new = NewSupplier { supplier_name: String::new(), contact_no: String::new() };
        let err = block_on(api.create_supplier(&new)).unwrap_err();
        assert_eq!(err.to_string(), "Missing required fields: supplier_name, contact_no");
    }
}
