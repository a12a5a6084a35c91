//! Form Validation
//!
//! Client-side checks run before anything is sent to the backend. Every
//! violation is collected, not just the first one.

use std::fmt;

use chrono::NaiveDate;

use crate::domain::{parse_date, Medicine, MedicinePayload, NewSupplier};

/// Input fields of the medicine and supplier forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Company,
    MfgDate,
    ExpDate,
    Quantity,
    Price,
    Supplier,
    SupplierName,
    ContactNo,
}

impl FormField {
    /// The `name` attribute of the matching form control
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Company => "company",
            FormField::MfgDate => "mfg_date",
            FormField::ExpDate => "exp_date",
            FormField::Quantity => "quantity",
            FormField::Price => "price",
            FormField::Supplier => "supplier_id",
            FormField::SupplierName => "supplier_name",
            FormField::ContactNo => "contact_no",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field.as_str(), self.message)
    }
}

/// All violations found in one pass, in check order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<FieldError>,
}

impl ValidationReport {
    pub const SUMMARY: &'static str = "Please fill in all fields correctly";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add(&mut self, field: FormField, message: impl Into<String>) {
        self.errors.push(FieldError { field, message: message.into() });
    }

    /// Field that should receive input focus
    pub fn first_invalid(&self) -> Option<FormField> {
        self.errors.first().map(|e| e.field)
    }

    pub fn is_invalid(&self, field: FormField) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Drop the errors of one field, e.g. once the user edits it
    pub fn clear(&mut self, field: FormField) {
        self.errors.retain(|e| e.field != field);
    }

    /// Messages for one field, in check order
    pub fn messages_for(&self, field: FormField) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message.as_str())
            .collect()
    }
}

/// Raw values of the add/update medicine form, exactly as typed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MedicineForm {
    pub name: String,
    pub company: String,
    pub mfg_date: String,
    pub exp_date: String,
    pub quantity: String,
    pub price: String,
    pub supplier_id: String,
}

impl MedicineForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Company => &self.company,
            FormField::MfgDate => &self.mfg_date,
            FormField::ExpDate => &self.exp_date,
            FormField::Quantity => &self.quantity,
            FormField::Price => &self.price,
            FormField::Supplier => &self.supplier_id,
            FormField::SupplierName | FormField::ContactNo => "",
        }
    }

    /// Store a raw value; supplier-form fields are ignored
    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Company => &mut self.company,
            FormField::MfgDate => &mut self.mfg_date,
            FormField::ExpDate => &mut self.exp_date,
            FormField::Quantity => &mut self.quantity,
            FormField::Price => &mut self.price,
            FormField::Supplier => &mut self.supplier_id,
            FormField::SupplierName | FormField::ContactNo => return,
        };
        *slot = value;
    }
}

impl From<&Medicine> for MedicineForm {
    /// Prefill for the update form
    fn from(medicine: &Medicine) -> Self {
        let date = |d: Option<NaiveDate>| d.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default();
        Self {
            name: medicine.name.clone(),
            company: medicine.company.clone(),
            mfg_date: date(medicine.mfg_date),
            exp_date: date(medicine.exp_date),
            quantity: medicine.quantity.to_string(),
            price: medicine.price.to_string(),
            supplier_id: medicine.supplier_id.to_string(),
        }
    }
}

/// Validate the medicine form and build the request payload.
pub fn validate_medicine(form: &MedicineForm) -> Result<MedicinePayload, ValidationReport> {
    let mut report = ValidationReport::new();

    let name = form.name.trim();
    if name.is_empty() {
        report.add(FormField::Name, "Medicine name is required");
    }

    let company = form.company.trim();
    if company.is_empty() {
        report.add(FormField::Company, "Company name is required");
    }

    let mfg_date = required_date(&form.mfg_date, FormField::MfgDate, "Manufacture date is required", &mut report);
    let exp_date = required_date(&form.exp_date, FormField::ExpDate, "Expiry date is required", &mut report);

    let quantity = form.quantity.trim().parse::<i64>().ok().filter(|q| *q >= 0);
    let quantity = match quantity.and_then(|q| u32::try_from(q).ok()) {
        Some(q) => Some(q),
        None => {
            report.add(FormField::Quantity, "Valid quantity is required (>= 0)");
            None
        }
    };

    let price = form.price.trim().parse::<f64>().ok().filter(|p| p.is_finite() && *p >= 0.0);
    if price.is_none() {
        report.add(FormField::Price, "Valid price is required (>= 0)");
    }

    let supplier_id = form.supplier_id.trim().parse::<u32>().ok();
    if supplier_id.is_none() {
        report.add(FormField::Supplier, "Supplier selection is required");
    }

    if let (Some(mfg), Some(exp)) = (mfg_date, exp_date) {
        if exp <= mfg {
            report.add(FormField::ExpDate, "Expiry date must be after manufacture date");
        }
    }

    match (mfg_date, exp_date, quantity, price, supplier_id) {
        (Some(mfg_date), Some(exp_date), Some(quantity), Some(price), Some(supplier_id)) if report.is_valid() => {
            Ok(MedicinePayload {
                name: name.to_string(),
                company: company.to_string(),
                mfg_date,
                exp_date,
                quantity,
                price,
                supplier_id,
            })
        }
        _ => Err(report),
    }
}

fn required_date(raw: &str, field: FormField, missing: &str, report: &mut ValidationReport) -> Option<NaiveDate> {
    if raw.trim().is_empty() {
        report.add(field, missing);
        return None;
    }
    let parsed = parse_date(raw);
    if parsed.is_none() {
        report.add(field, "Invalid date");
    }
    parsed
}

/// Raw values of the add supplier form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupplierForm {
    pub name: String,
    pub contact_no: String,
}

pub fn validate_supplier(form: &SupplierForm) -> Result<NewSupplier, ValidationReport> {
    let mut report = ValidationReport::new();
    let name = form.name.trim();
    let contact_no = form.contact_no.trim();
    if name.is_empty() {
        report.add(FormField::SupplierName, "Supplier name is required");
    }
    if contact_no.is_empty() {
        report.add(FormField::ContactNo, "Contact number is required");
    }
    if !report.is_valid() {
        return Err(report);
    }
    Ok(NewSupplier {
        supplier_name: name.to_string(),
        contact_no: contact_no.to_string(),
    })
}
