//! Medicine Table View-Model
//!
//! Pure transform from a list of medicines to what a table shows. Row state
//! (class and badge) comes only from the expiry classifier, so every table
//! flavour paints a given medicine the same way.

use chrono::NaiveDate;

use crate::domain::Medicine;
use crate::expiry::{classify, Expiry, ExpiryStatus};

/// Which table is being rendered; drives the wrapper class and empty state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableMode {
    /// Expired medicines on the inventory page
    Expired,
    /// Non-expired medicines on the inventory page
    Valid,
    /// Result of the "expiring within N days" listing
    Expiring,
    /// Search results
    Search,
    /// Unfiltered listing
    All,
}

impl TableMode {
    pub fn container_class(&self) -> &'static str {
        match self {
            TableMode::Expired => "table-container expired-table",
            TableMode::Valid => "table-container good-table",
            TableMode::Expiring => "table-container expiring-table",
            TableMode::Search | TableMode::All => "table-container",
        }
    }

    pub fn empty_state(&self) -> EmptyState {
        let (title, detail) = match self {
            TableMode::Expired => ("✅ Great! No expired medicines", "All medicines are valid"),
            TableMode::Valid => ("📦 No good medicines found", "All medicines may have expired"),
            TableMode::Expiring => ("🎉 No medicines expiring soon", "Nothing expires within the selected window"),
            TableMode::Search => ("🔍 No medicines match your search", "Try a name, company or supplier"),
            TableMode::All => ("📦 No medicines in stock yet", "Add a medicine to get started"),
        };
        EmptyState { title, detail }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyState {
    pub title: &'static str,
    pub detail: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeKind {
    Danger,
    Warning,
}

impl BadgeKind {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeKind::Danger => "badge badge-danger",
            BadgeKind::Warning => "badge badge-warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub kind: BadgeKind,
    pub text: String,
}

impl Badge {
    /// Badge for an expiry result; valid and unknown rows get none
    pub fn for_expiry(expiry: &Expiry) -> Option<Badge> {
        match (expiry.status, expiry.days) {
            (ExpiryStatus::Expired, _) => Some(Badge { kind: BadgeKind::Danger, text: "Expired".to_string() }),
            (ExpiryStatus::Expiring, Some(days)) => Some(Badge {
                kind: BadgeKind::Warning,
                text: format!("{} days", days),
            }),
            _ => None,
        }
    }
}

/// One rendered table row
#[derive(Debug, Clone, PartialEq)]
pub struct MedicineRow {
    pub id: u32,
    pub id_label: String,
    pub name: String,
    pub company: String,
    pub mfg_date: String,
    pub exp_date: String,
    pub quantity: String,
    pub price: String,
    pub supplier: String,
    /// `"{n} days"` from the classifier, negative once expired
    pub days_left: String,
    pub expiry: Expiry,
    pub row_class: &'static str,
    pub badge: Option<Badge>,
}

impl MedicineRow {
    pub fn new(medicine: &Medicine, today: NaiveDate) -> Self {
        let expiry = classify(medicine.exp_date, today);
        Self {
            id: medicine.id,
            id_label: format!("#{}", medicine.id),
            name: or_na(&medicine.name),
            company: or_na(&medicine.company),
            mfg_date: format_date(medicine.mfg_date),
            exp_date: format_date(medicine.exp_date),
            quantity: medicine.quantity.to_string(),
            price: format_currency(medicine.price),
            supplier: medicine.supplier_name.as_deref().map(or_na).unwrap_or_else(|| "N/A".to_string()),
            days_left: match expiry.days {
                Some(days) => format!("{} days", days),
                None => "N/A".to_string(),
            },
            row_class: expiry.status.row_class(),
            badge: Badge::for_expiry(&expiry),
            expiry,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableView {
    Empty(EmptyState),
    Rows { mode: TableMode, rows: Vec<MedicineRow> },
}

impl TableView {
    pub fn build(medicines: &[Medicine], today: NaiveDate, mode: TableMode) -> Self {
        if medicines.is_empty() {
            return TableView::Empty(mode.empty_state());
        }
        TableView::Rows {
            mode,
            rows: medicines.iter().map(|m| MedicineRow::new(m, today)).collect(),
        }
    }

    /// Number of rows; zero for an empty state
    pub fn len(&self) -> usize {
        match self {
            TableView::Empty(_) => 0,
            TableView::Rows { rows, .. } => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Expired and good inventory tables, split and badged against the same
/// `today`
pub fn inventory_tables(medicines: &[Medicine], today: NaiveDate) -> (TableView, TableView) {
    let (expired, good) = partition_by_expiry(medicines, today);
    (
        TableView::build(&expired, today, TableMode::Expired),
        TableView::build(&good, today, TableMode::Valid),
    )
}

/// Split into (expired, everything else) for the two inventory tables.
/// Medicines without a usable expiry date land in the second list.
pub fn partition_by_expiry(medicines: &[Medicine], today: NaiveDate) -> (Vec<Medicine>, Vec<Medicine>) {
    medicines
        .iter()
        .cloned()
        .partition(|m| classify(m.exp_date, today).is_expired())
}

/// `Jan 5, 2024`; `N/A` when absent
pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%b %-d, %Y").to_string(),
        None => "N/A".to_string(),
    }
}

/// US dollars with thousands separators: `$1,234.50`, `-$3.00`
pub fn format_currency(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}

fn or_na(value: &str) -> String {
    if value.trim().is_empty() {
        "N/A".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn make_medicine(id: u32, exp_date: Option<NaiveDate>) -> Medicine {
        Medicine {
            id,
            name: format!("Medicine {}", id),
            company: "Acme".to_string(),
            mfg_date: NaiveDate::from_ymd_opt(2023, 1, 1),
            exp_date,
            quantity: 10,
            price: 1234.5,
            supplier_id: 1,
            supplier_name: Some("MedSupply".to_string()),
            contact_no: None,
            days_until_expiry: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_empty_states_differ_per_mode() {
        let expired = TableView::build(&[], today(), TableMode::Expired);
        let valid = TableView::build(&[], today(), TableMode::Valid);
        assert_ne!(expired, valid);
        match (expired, valid) {
            (TableView::Empty(a), TableView::Empty(b)) => {
                assert_eq!(a.title, "✅ Great! No expired medicines");
                assert_eq!(b.title, "📦 No good medicines found");
            }
            _ => panic!("expected empty states"),
        }
    }

    #[test]
    fn test_row_state_follows_classifier() {
        let medicines = vec![
            make_medicine(1, Some(today() - Duration::days(3))),
            make_medicine(2, Some(today() + Duration::days(5))),
            make_medicine(3, Some(today() + Duration::days(90))),
            make_medicine(4, None),
        ];
        let TableView::Rows { rows, .. } = TableView::build(&medicines, today(), TableMode::All) else {
            panic!("expected rows");
        };
        assert_eq!(rows[0].row_class, "expired");
        assert_eq!(rows[0].badge.as_ref().map(|b| b.text.as_str()), Some("Expired"));
        assert_eq!(rows[1].row_class, "expiring-soon");
        assert_eq!(rows[1].badge.as_ref().map(|b| b.kind), Some(BadgeKind::Warning));
        assert_eq!(rows[1].badge.as_ref().map(|b| b.text.as_str()), Some("5 days"));
        assert_eq!(rows[2].row_class, "");
        assert!(rows[2].badge.is_none());
        assert_eq!(rows[3].exp_date, "N/A");
        assert_eq!(rows[3].expiry.status, ExpiryStatus::Unknown);
    }

    #[test]
    fn test_same_medicine_renders_identically_in_every_mode() {
        let medicine = make_medicine(9, Some(today() + Duration::days(2)));
        let rows: Vec<MedicineRow> = [TableMode::Valid, TableMode::Expiring, TableMode::Search]
            .iter()
            .map(|mode| match TableView::build(std::slice::from_ref(&medicine), today(), *mode) {
                TableView::Rows { mut rows, .. } => rows.remove(0),
                TableView::Empty(_) => panic!("expected a row"),
            })
            .collect();
        assert!(rows.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_row_display_strings() {
        let mut medicine = make_medicine(42, NaiveDate::from_ymd_opt(2025, 1, 5));
        medicine.company = String::new();
        let row = MedicineRow::new(&medicine, today());
        assert_eq!(row.id_label, "#42");
        assert_eq!(row.company, "N/A");
        assert_eq!(row.mfg_date, "Jan 1, 2023");
        assert_eq!(row.exp_date, "Jan 5, 2025");
        assert_eq!(row.price, "$1,234.50");
        assert_eq!(row.supplier, "MedSupply");
    }

    #[test]
    fn test_days_left_beyond_badge_window() {
        let medicines = vec![
            make_medicine(1, Some(today() + Duration::days(10))),
            make_medicine(2, Some(today() + Duration::days(45))),
            make_medicine(3, None),
        ];
        let TableView::Rows { mode, rows } = TableView::build(&medicines, today(), TableMode::Expiring) else {
            panic!("expected rows");
        };
        assert!(mode.shows_days_left());
        assert!(!TableMode::Valid.shows_days_left());
        assert_eq!(rows[0].days_left, "10 days");
        assert_eq!(rows[1].days_left, "45 days");
        assert!(rows[1].badge.is_none());
        assert_eq!(rows[2].days_left, "N/A");
    }

    #[test]
    fn test_partition_by_expiry() {
        let medicines = vec![
            make_medicine(1, Some(today() - Duration::days(1))),
            make_medicine(2, Some(today())),
            make_medicine(3, None),
        ];
        let (expired, good) = partition_by_expiry(&medicines, today());
        assert_eq!(expired.iter().map(|m| m.id).collect::<Vec<_>>(), vec![1]);
        assert_eq!(good.iter().map(|m| m.id).collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn test_inventory_tables_agree_with_badges() {
        let medicines = vec![
            make_medicine(1, Some(today() - Duration::days(1))),
            make_medicine(2, Some(today())),
            make_medicine(3, Some(today() + Duration::days(200))),
        ];
        let (expired, good) = inventory_tables(&medicines, today());
        assert_eq!(expired.len(), 1);
        assert_eq!(good.len(), 2);
        let TableView::Rows { rows, .. } = good else {
            panic!("expected rows");
        };
        assert!(rows.iter().all(|row| !row.expiry.is_expired()));

        // A day later the batch expiring today moves across with its badge
        let tomorrow = today() + Duration::days(1);
        let (expired, good) = inventory_tables(&medicines, tomorrow);
        assert_eq!(expired.len(), 2);
        assert_eq!(good.len(), 1);
        let TableView::Rows { rows, .. } = expired else {
            panic!("expected rows");
        };
        assert!(rows.iter().all(|row| row.badge.as_ref().map(|b| b.text.as_str()) == Some("Expired")));

        let (expired, _) = inventory_tables(&[], today());
        assert!(expired.is_empty());
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(5.0), "$5.00");
        assert_eq!(format_currency(999.999), "$1,000.00");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(-3.0), "-$3.00");
    }
}
