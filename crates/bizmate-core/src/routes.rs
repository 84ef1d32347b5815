//! # Routes
//!
//! Stable identifiers for every destination reachable from the dashboard
//! or the reports screen, and a lookup table mapping them to handlers.
//!
//! Screens dispatch on a [`RouteId`] instead of comparing item titles, so
//! renaming or translating a title never breaks navigation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::CoreError;

// =============================================================================
// Route Identifiers
// =============================================================================

/// A navigable destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RouteId {
    // Dashboard menu
    SalesInvoices,
    PurchaseInvoices,
    Customers,
    Suppliers,
    Items,
    Inventory,
    StaffVisits,
    Reports,

    // Reports screen
    SalesReport,
    PurchaseReport,
    InventoryReport,
    CustomerBalanceReport,
    SupplierBalanceReport,
    StaffVisitsReport,
    ProfitReport,
}

impl RouteId {
    /// Every route, in declaration order.
    pub const ALL: [RouteId; 15] = [
        RouteId::SalesInvoices,
        RouteId::PurchaseInvoices,
        RouteId::Customers,
        RouteId::Suppliers,
        RouteId::Items,
        RouteId::Inventory,
        RouteId::StaffVisits,
        RouteId::Reports,
        RouteId::SalesReport,
        RouteId::PurchaseReport,
        RouteId::InventoryReport,
        RouteId::CustomerBalanceReport,
        RouteId::SupplierBalanceReport,
        RouteId::StaffVisitsReport,
        RouteId::ProfitReport,
    ];

    /// Stable snake_case identifier, matching the serde representation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            RouteId::SalesInvoices => "sales_invoices",
            RouteId::PurchaseInvoices => "purchase_invoices",
            RouteId::Customers => "customers",
            RouteId::Suppliers => "suppliers",
            RouteId::Items => "items",
            RouteId::Inventory => "inventory",
            RouteId::StaffVisits => "staff_visits",
            RouteId::Reports => "reports",
            RouteId::SalesReport => "sales_report",
            RouteId::PurchaseReport => "purchase_report",
            RouteId::InventoryReport => "inventory_report",
            RouteId::CustomerBalanceReport => "customer_balance_report",
            RouteId::SupplierBalanceReport => "supplier_balance_report",
            RouteId::StaffVisitsReport => "staff_visits_report",
            RouteId::ProfitReport => "profit_report",
        }
    }

    /// Returns true for entries of the reports screen.
    pub const fn is_report(&self) -> bool {
        matches!(
            self,
            RouteId::SalesReport
                | RouteId::PurchaseReport
                | RouteId::InventoryReport
                | RouteId::CustomerBalanceReport
                | RouteId::SupplierBalanceReport
                | RouteId::StaffVisitsReport
                | RouteId::ProfitReport
        )
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouteId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RouteId::ALL
            .iter()
            .copied()
            .find(|route| route.as_str() == s)
            .ok_or_else(|| CoreError::UnknownRoute(s.to_string()))
    }
}

// =============================================================================
// Route Table
// =============================================================================

/// Maps route identifiers to handlers.
///
/// `H` is whatever the screen layer navigates with: a screen name, a
/// boxed closure, a builder.
///
/// ## Example
/// ```rust
/// use bizmate_core::routes::{RouteId, RouteTable};
///
/// let mut table = RouteTable::new();
/// table.register(RouteId::SalesInvoices, "SalesInvoiceListScreen");
///
/// assert_eq!(table.resolve(RouteId::SalesInvoices), Some(&"SalesInvoiceListScreen"));
/// assert_eq!(table.resolve(RouteId::Suppliers), None);
/// ```
#[derive(Debug, Clone)]
pub struct RouteTable<H> {
    handlers: HashMap<RouteId, H>,
}

impl<H> Default for RouteTable<H> {
    fn default() -> Self {
        RouteTable {
            handlers: HashMap::new(),
        }
    }
}

impl<H> RouteTable<H> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for `route`, returning the handler it replaced.
    pub fn register(&mut self, route: RouteId, handler: H) -> Option<H> {
        self.handlers.insert(route, handler)
    }

    /// Builder-style registration.
    pub fn with(mut self, route: RouteId, handler: H) -> Self {
        self.register(route, handler);
        self
    }

    /// Looks up the handler for `route`.
    pub fn resolve(&self, route: RouteId) -> Option<&H> {
        self.handlers.get(&route)
    }

    /// Looks up a handler by its string identifier.
    pub fn resolve_str(&self, id: &str) -> Result<Option<&H>, CoreError> {
        let route: RouteId = id.parse()?;
        Ok(self.resolve(route))
    }

    /// Returns true if `route` has a handler.
    pub fn contains(&self, route: RouteId) -> bool {
        self.handlers.contains_key(&route)
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<H, R> RouteTable<H>
where
    H: Fn() -> R,
{
    /// Invokes the handler registered for `route`.
    ///
    /// Returns `None` if no handler is registered.
    pub fn dispatch(&self, route: RouteId) -> Option<R> {
        self.resolve(route).map(|handler| handler())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_roundtrip_for_every_route() {
        for route in RouteId::ALL {
            assert_eq!(route.as_str().parse::<RouteId>().unwrap(), route);
        }
    }

    #[test]
    fn test_serde_matches_identifier() {
        let json = serde_json::to_string(&RouteId::CustomerBalanceReport).unwrap();
        assert_eq!(json, "\"customer_balance_report\"");
    }

    #[test]
    fn test_unknown_identifier() {
        let err = "Sales Invoices".parse::<RouteId>().unwrap_err();
        assert_eq!(err, CoreError::UnknownRoute("Sales Invoices".to_string()));
    }

    #[test]
    fn test_report_flag() {
        assert!(RouteId::ProfitReport.is_report());
        assert!(!RouteId::Reports.is_report());
        assert!(!RouteId::SalesInvoices.is_report());
    }

    #[test]
    fn test_dispatch_closures() {
        type Handler = Box<dyn Fn() -> &'static str>;

        let table = RouteTable::<Handler>::new()
            .with(RouteId::Items, Box::new(|| "items-screen"))
            .with(RouteId::Reports, Box::new(|| "reports-screen"));

        assert_eq!(table.dispatch(RouteId::Items), Some("items-screen"));
        assert_eq!(table.dispatch(RouteId::Reports), Some("reports-screen"));
        assert_eq!(table.dispatch(RouteId::Suppliers), None);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_resolve_str() {
        let table = RouteTable::new().with(RouteId::StaffVisits, 7);
        assert_eq!(table.resolve_str("staff_visits").unwrap(), Some(&7));
        assert_eq!(table.resolve_str("inventory").unwrap(), None);
        assert!(table.resolve_str("visits").is_err());
    }

    #[test]
    fn test_register_replaces() {
        let mut table = RouteTable::new();
        assert_eq!(table.register(RouteId::Customers, 1), None);
        assert_eq!(table.register(RouteId::Customers, 2), Some(1));
        assert!(table.contains(RouteId::Customers));
    }
}
