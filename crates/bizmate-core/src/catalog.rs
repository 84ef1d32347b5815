//! # Catalogs
//!
//! The fixed lists of dashboard menu entries, report entries and the
//! categories they are grouped under.
//!
//! These lists are configuration, not user data. They are the single
//! source of truth for what *could* be shown; permission data only narrows
//! them (see [`crate::permissions`]).
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Dashboard                                                              │
//! │  ├── sales      : Sales Invoices, Customers                            │
//! │  ├── purchases  : Purchase Invoices, Suppliers                         │
//! │  ├── inventory  : Items, Inventory                                     │
//! │  └── field      : Staff Visits, Reports                                │
//! │                                                                         │
//! │  Reports                                                                │
//! │  ├── sales      : Sales, Customer Balances                             │
//! │  ├── purchases  : Purchases, Supplier Balances                         │
//! │  ├── inventory  : Stock                                                │
//! │  └── management : Staff Visits, Profit                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use ts_rs::TS;

use crate::routes::RouteId;

// =============================================================================
// Catalog Entries
// =============================================================================

/// Anything listed in a catalog and gated by a module permission.
pub trait CatalogEntry {
    /// Module whose permission unlocks this entry.
    fn module_name(&self) -> &str;

    /// Category the entry is grouped under.
    fn category_id(&self) -> &str;
}

/// A dashboard or reports-screen entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Stable route identifier.
    pub id: RouteId,
    /// String-table key of the title.
    pub title_key: &'static str,
    /// Module gating visibility.
    pub module_name: &'static str,
    /// Category id.
    pub category: &'static str,
    /// Icon name understood by the icon set of the UI.
    pub icon: &'static str,
    /// Accent color (hex).
    pub color: &'static str,
}

impl CatalogEntry for MenuItem {
    fn module_name(&self) -> &str {
        self.module_name
    }

    fn category_id(&self) -> &str {
        self.category
    }
}

/// A group heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: &'static str,
    pub title_key: &'static str,
    pub icon: &'static str,
}

const fn item(
    id: RouteId,
    title_key: &'static str,
    module_name: &'static str,
    category: &'static str,
    icon: &'static str,
    color: &'static str,
) -> MenuItem {
    MenuItem {
        id,
        title_key,
        module_name,
        category,
        icon,
        color,
    }
}

const fn category(id: &'static str, title_key: &'static str, icon: &'static str) -> Category {
    Category { id, title_key, icon }
}

// =============================================================================
// Module Names
// =============================================================================

/// Module names as granted by the backend.
pub mod modules {
    pub const SALES_INVOICE: &str = "sales_invoice";
    pub const PURCHASE_INVOICE: &str = "purchase_invoice";
    pub const CUSTOMERS: &str = "customers";
    pub const SUPPLIERS: &str = "suppliers";
    pub const ITEMS: &str = "items";
    pub const INVENTORY: &str = "inventory";
    pub const STAFF_VISITS: &str = "staff_visits";
    pub const REPORTS: &str = "reports";
    pub const SALES_REPORT: &str = "sales_report";
    pub const PURCHASE_REPORT: &str = "purchase_report";
    pub const INVENTORY_REPORT: &str = "inventory_report";
    pub const CUSTOMER_REPORT: &str = "customer_report";
    pub const SUPPLIER_REPORT: &str = "supplier_report";
    pub const VISITS_REPORT: &str = "visits_report";
    pub const PROFIT_REPORT: &str = "profit_report";
}

// =============================================================================
// Dashboard
// =============================================================================

/// Dashboard categories, in display order.
pub static DASHBOARD_CATEGORIES: &[Category] = &[
    category("sales", "category_sales", "cart-outline"),
    category("purchases", "category_purchases", "truck-outline"),
    category("inventory", "category_inventory", "cube-outline"),
    category("field", "category_field", "map-marker-outline"),
];

/// Dashboard menu, in display order.
pub static DASHBOARD_MENU: &[MenuItem] = &[
    item(
        RouteId::SalesInvoices,
        "sales_invoices",
        modules::SALES_INVOICE,
        "sales",
        "receipt",
        "#2E7D32",
    ),
    item(
        RouteId::Customers,
        "customers",
        modules::CUSTOMERS,
        "sales",
        "account-group",
        "#1565C0",
    ),
    item(
        RouteId::PurchaseInvoices,
        "purchase_invoices",
        modules::PURCHASE_INVOICE,
        "purchases",
        "file-document-outline",
        "#EF6C00",
    ),
    item(
        RouteId::Suppliers,
        "suppliers",
        modules::SUPPLIERS,
        "purchases",
        "truck",
        "#6A1B9A",
    ),
    item(
        RouteId::Items,
        "items",
        modules::ITEMS,
        "inventory",
        "tag-multiple",
        "#00838F",
    ),
    item(
        RouteId::Inventory,
        "inventory",
        modules::INVENTORY,
        "inventory",
        "warehouse",
        "#4E342E",
    ),
    item(
        RouteId::StaffVisits,
        "staff_visits",
        modules::STAFF_VISITS,
        "field",
        "map-marker-check",
        "#AD1457",
    ),
    item(
        RouteId::Reports,
        "reports",
        modules::REPORTS,
        "field",
        "chart-bar",
        "#283593",
    ),
];

// =============================================================================
// Reports
// =============================================================================

/// Report categories, in display order.
pub static REPORT_CATEGORIES: &[Category] = &[
    category("sales", "category_sales", "cart-outline"),
    category("purchases", "category_purchases", "truck-outline"),
    category("inventory", "category_inventory", "cube-outline"),
    category("management", "category_management", "briefcase-outline"),
];

/// Reports screen entries, in display order.
pub static REPORTS: &[MenuItem] = &[
    item(
        RouteId::SalesReport,
        "sales_report",
        modules::SALES_REPORT,
        "sales",
        "chart-line",
        "#2E7D32",
    ),
    item(
        RouteId::CustomerBalanceReport,
        "customer_balance_report",
        modules::CUSTOMER_REPORT,
        "sales",
        "account-cash",
        "#1565C0",
    ),
    item(
        RouteId::PurchaseReport,
        "purchase_report",
        modules::PURCHASE_REPORT,
        "purchases",
        "chart-areaspline",
        "#EF6C00",
    ),
    item(
        RouteId::SupplierBalanceReport,
        "supplier_balance_report",
        modules::SUPPLIER_REPORT,
        "purchases",
        "cash-multiple",
        "#6A1B9A",
    ),
    item(
        RouteId::InventoryReport,
        "inventory_report",
        modules::INVENTORY_REPORT,
        "inventory",
        "clipboard-list",
        "#00838F",
    ),
    item(
        RouteId::StaffVisitsReport,
        "staff_visits_report",
        modules::VISITS_REPORT,
        "management",
        "map-search",
        "#AD1457",
    ),
    item(
        RouteId::ProfitReport,
        "profit_report",
        modules::PROFIT_REPORT,
        "management",
        "finance",
        "#283593",
    ),
];

/// Finds a catalog entry by route.
pub fn find_item(catalog: &[MenuItem], route: RouteId) -> Option<&MenuItem> {
    catalog.iter().find(|item| item.id == route)
}
