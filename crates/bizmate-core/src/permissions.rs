//! # Permissions
//!
//! Decides which catalog entries a signed-in user may see.
//!
//! ## Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  role_id != 3  ──►  whole catalog, unfiltered                           │
//! │                                                                         │
//! │  role_id == 3  ──►  entries whose module_name ∈ granted modules         │
//! │                     (catalog order preserved, empty grant → empty list) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Permission data only ever narrows the catalog; a granted module with no
//! catalog entry shows nothing.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::catalog::{CatalogEntry, Category};
use crate::RESTRICTED_ROLE_ID;

// =============================================================================
// Role
// =============================================================================

/// A user's access level as sent by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(i64);

impl Role {
    /// The restricted staff role.
    pub const RESTRICTED: Role = Role(RESTRICTED_ROLE_ID);

    pub const fn new(id: i64) -> Self {
        Role(id)
    }

    pub const fn id(&self) -> i64 {
        self.0
    }

    /// Only role `3` is restricted; any other id has full access.
    pub const fn is_restricted(&self) -> bool {
        self.0 == RESTRICTED_ROLE_ID
    }
}

impl From<i64> for Role {
    fn from(id: i64) -> Self {
        Role(id)
    }
}

// =============================================================================
// Filtering
// =============================================================================

/// Returns the entries of `catalog` visible to `role`.
///
/// ## Example
/// ```rust
/// use std::collections::HashSet;
/// use bizmate_core::catalog::DASHBOARD_MENU;
/// use bizmate_core::permissions::{filter_items, Role};
///
/// let granted: HashSet<String> = ["items".to_string()].into();
///
/// assert_eq!(filter_items(Role::new(1), &granted, DASHBOARD_MENU).len(), DASHBOARD_MENU.len());
/// assert_eq!(filter_items(Role::new(3), &granted, DASHBOARD_MENU).len(), 1);
/// ```
pub fn filter_items<'a, T: CatalogEntry>(
    role: Role,
    granted_modules: &HashSet<String>,
    catalog: &'a [T],
) -> Vec<&'a T> {
    if !role.is_restricted() {
        return catalog.iter().collect();
    }

    catalog
        .iter()
        .filter(|entry| granted_modules.contains(entry.module_name()))
        .collect()
}

/// Returns the categories that contain at least one of `filtered`, in
/// `categories` order.
pub fn visible_categories<'a, T: CatalogEntry>(
    filtered: &[&T],
    categories: &'a [Category],
) -> Vec<&'a Category> {
    let used: HashSet<&str> = filtered.iter().map(|entry| entry.category_id()).collect();

    categories
        .iter()
        .filter(|category| used.contains(category.id))
        .collect()
}

// =============================================================================
// Permission Grant
// =============================================================================

/// One permission row as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionRow {
    pub module_name: String,
    /// Rows the backend marks as not allowed are ignored.
    #[serde(default = "default_allowed")]
    pub is_allowed: bool,
}

fn default_allowed() -> bool {
    true
}

/// The permissions of the signed-in user for the current session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionGrant {
    pub role: Role,
    pub modules: HashSet<String>,
}

impl PermissionGrant {
    pub fn new(role: Role, modules: impl IntoIterator<Item = String>) -> Self {
        PermissionGrant {
            role,
            modules: modules.into_iter().collect(),
        }
    }

    /// A grant with no modules. For a restricted role this hides everything.
    pub fn empty(role: Role) -> Self {
        PermissionGrant {
            role,
            modules: HashSet::new(),
        }
    }

    /// Builds a grant from backend rows, keeping only allowed modules.
    pub fn from_rows(role: Role, rows: impl IntoIterator<Item = PermissionRow>) -> Self {
        let modules = rows
            .into_iter()
            .filter(|row| row.is_allowed)
            .map(|row| row.module_name.trim().to_string())
            .filter(|name| !name.is_empty());
        PermissionGrant::new(role, modules)
    }

    /// Returns true if the user may open entries gated by `module_name`.
    pub fn allows(&self, module_name: &str) -> bool {
        !self.role.is_restricted() || self.modules.contains(module_name)
    }

    /// Filters `catalog` for this grant.
    pub fn visible<'a, T: CatalogEntry>(&self, catalog: &'a [T]) -> Vec<&'a T> {
        filter_items(self.role, &self.modules, catalog)
    }
}
