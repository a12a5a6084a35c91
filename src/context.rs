//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;
use medvault_core::ApiClient;

use crate::config::AppConfig;
use crate::fetch::FetchTransport;

pub type Api = ApiClient<FetchTransport>;

/// Page sections reachable from the navigation bar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Inventory,
    Add,
    Update,
    Search,
    Expiring,
    Suppliers,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Inventory,
        Section::Add,
        Section::Update,
        Section::Search,
        Section::Expiring,
        Section::Suppliers,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Inventory => "📋 View Inventory",
            Section::Add => "➕ Add Medicine",
            Section::Update => "✏️ Update Medicine",
            Section::Search => "🔍 Search",
            Section::Expiring => "⏰ Expiring Soon",
            Section::Suppliers => "🏭 Suppliers",
        }
    }
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    api: StoredValue<Api>,
    /// Default window of the expiring listing
    pub expiring_days: u32,
    /// Active section - read
    pub section: ReadSignal<Section>,
    /// Active section - write
    set_section: WriteSignal<Section>,
    /// Trigger to reload medicine listings - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload medicine listings - write
    set_reload_trigger: WriteSignal<u32>,
    /// Trigger to reload the supplier list - read
    pub suppliers_trigger: ReadSignal<u32>,
    /// Trigger to reload the supplier list - write
    set_suppliers_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(config: &AppConfig) -> Self {
        let (section, set_section) = signal(Section::Inventory);
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        let (suppliers_trigger, set_suppliers_trigger) = signal(0u32);
        Self {
            api: StoredValue::new(ApiClient::new(config.api_base.clone(), FetchTransport)),
            expiring_days: config.expiring_days,
            section,
            set_section,
            reload_trigger,
            set_reload_trigger,
            suppliers_trigger,
            set_suppliers_trigger,
        }
    }

    /// REST client handle
    pub fn api(&self) -> Api {
        self.api.get_value()
    }

    /// Reload every medicine listing currently on screen
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn reload_suppliers(&self) {
        self.set_suppliers_trigger.update(|v| *v += 1);
    }

    pub fn navigate(&self, section: Section) {
        self.set_section.set(section);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
