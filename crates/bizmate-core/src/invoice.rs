//! # Invoice Module
//!
//! Invoice totals and the editable invoice draft shared by the sales and
//! purchase invoice screens.
//!
//! ## Totals
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  subtotal        = Σ quantity × unit_price                              │
//! │  tax_amount      = subtotal × tax_percentage / 100                      │
//! │  discount_amount = override (if set and non-zero)                       │
//! │                    else subtotal × discount_percentage / 100            │
//! │  total_amount    = subtotal + tax_amount − discount_amount              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Totals are recomputed from scratch on every mutation of the draft; there
//! is no incremental update. Arithmetic is plain `f64`; rounding happens
//! only for display and in the submitted payload.
//!
//! ## Draft Editing Flow
//! ```text
//! add_line ──► set_line_item ──► set_quantity / set_unit_price
//!    │                                   │
//!    └──────────► recompute ◄────────────┘
//!                    ▲
//!  set_tax_percentage / set_discount_percentage / set_discount_amount
//!                    │
//!               remove_line
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::amount::{format_amount, parse_amount, round2, AmountPolicy, ParsedAmount};
use crate::catalog::modules;
use crate::error::{CoreError, CoreResult};
use crate::routes::RouteId;
use crate::validation::{
    validate_non_negative, validate_not_empty, validate_percentage, validate_quantity,
    validate_required,
};

// =============================================================================
// Totals Calculation
// =============================================================================

/// Anything with a quantity and a unit price.
pub trait Priced {
    fn quantity(&self) -> f64;
    fn unit_price(&self) -> f64;
}

/// Bare quantity/price pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LineAmounts {
    pub quantity: f64,
    pub unit_price: f64,
}

impl LineAmounts {
    pub const fn new(quantity: f64, unit_price: f64) -> Self {
        LineAmounts {
            quantity,
            unit_price,
        }
    }
}

impl Priced for LineAmounts {
    fn quantity(&self) -> f64 {
        self.quantity
    }

    fn unit_price(&self) -> f64 {
        self.unit_price
    }
}

/// Derived financial summary of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InvoiceTotals {
    pub subtotal: f64,
    pub tax_percentage: f64,
    pub tax_amount: f64,
    pub discount_percentage: f64,
    pub discount_amount: f64,
    pub total_amount: f64,
}

impl InvoiceTotals {
    /// Formats the derived amounts with two decimals.
    pub fn display(&self) -> TotalsDisplay {
        TotalsDisplay {
            subtotal: format_amount(self.subtotal),
            tax_amount: format_amount(self.tax_amount),
            discount_amount: format_amount(self.discount_amount),
            total_amount: format_amount(self.total_amount),
        }
    }
}

/// Display strings for [`InvoiceTotals`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TotalsDisplay {
    pub subtotal: String,
    pub tax_amount: String,
    pub discount_amount: String,
    pub total_amount: String,
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Computes invoice totals.
///
/// Never fails: non-finite inputs count as zero. An override of zero is
/// treated as absent and the discount percentage applies.
///
/// ## Example
/// ```rust
/// use bizmate_core::invoice::{compute_totals, LineAmounts};
///
/// let lines = [LineAmounts::new(2.0, 100.0)];
/// let totals = compute_totals(&lines, 15.0, 50.0, Some(10.0));
///
/// assert_eq!(totals.subtotal, 200.0);
/// assert_eq!(totals.tax_amount, 30.0);
/// assert_eq!(totals.discount_amount, 10.0);
/// assert_eq!(totals.total_amount, 220.0);
/// ```
pub fn compute_totals<L: Priced>(
    lines: &[L],
    tax_percentage: f64,
    discount_percentage: f64,
    discount_override: Option<f64>,
) -> InvoiceTotals {
    let tax_percentage = finite_or_zero(tax_percentage);
    let discount_percentage = finite_or_zero(discount_percentage);

    let subtotal: f64 = lines
        .iter()
        .map(|line| finite_or_zero(line.quantity()) * finite_or_zero(line.unit_price()))
        .sum();

    let tax_amount = subtotal * tax_percentage / 100.0;

    let discount_amount = match discount_override.map(finite_or_zero) {
        Some(amount) if amount != 0.0 => amount,
        _ => subtotal * discount_percentage / 100.0,
    };

    InvoiceTotals {
        subtotal,
        tax_percentage,
        tax_amount,
        discount_percentage,
        discount_amount,
        total_amount: subtotal + tax_amount - discount_amount,
    }
}

// =============================================================================
// Invoice Kind
// =============================================================================

/// Which side of a trade the invoice records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceKind {
    /// Sold to a customer.
    Sales,
    /// Bought from a supplier.
    Purchase,
}

impl InvoiceKind {
    /// Name of the counter-party field in the backend payload.
    pub const fn party_field(&self) -> &'static str {
        match self {
            InvoiceKind::Sales => "customer_id",
            InvoiceKind::Purchase => "supplier_id",
        }
    }

    /// Module gating the invoice screens.
    pub const fn module_name(&self) -> &'static str {
        match self {
            InvoiceKind::Sales => modules::SALES_INVOICE,
            InvoiceKind::Purchase => modules::PURCHASE_INVOICE,
        }
    }

    /// Route of the invoice list screen.
    pub const fn route(&self) -> RouteId {
        match self {
            InvoiceKind::Sales => RouteId::SalesInvoices,
            InvoiceKind::Purchase => RouteId::PurchaseInvoices,
        }
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One row of an invoice being edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// Local key (UUID v4) identifying the row while editing.
    pub key: String,
    /// Selected item, if any.
    pub item_id: Option<String>,
    pub quantity: f64,
    pub unit_price: f64,
    /// Always `quantity × unit_price`.
    pub total_price: f64,
}

impl LineItem {
    /// A blank row: no item, quantity 1, price 0.
    pub fn new() -> Self {
        LineItem {
            key: Uuid::new_v4().to_string(),
            item_id: None,
            quantity: 1.0,
            unit_price: 0.0,
            total_price: 0.0,
        }
    }

    fn recompute(&mut self) {
        self.total_price = self.quantity * self.unit_price;
    }
}

impl Default for LineItem {
    fn default() -> Self {
        LineItem::new()
    }
}

impl Priced for LineItem {
    fn quantity(&self) -> f64 {
        self.quantity
    }

    fn unit_price(&self) -> f64 {
        self.unit_price
    }
}

// =============================================================================
// Invoice Draft
// =============================================================================

/// An invoice being created or edited.
///
/// ## Invariants
/// - `totals` always reflects `lines` and the percentage fields
/// - every line's `total_price` equals `quantity × unit_price`
/// - under [`AmountPolicy::Reject`] a refused edit leaves the draft unchanged
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InvoiceDraft {
    pub kind: InvoiceKind,
    /// Customer id for sales, supplier id for purchases.
    pub party_id: Option<String>,
    #[ts(as = "Option<String>")]
    pub invoice_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub lines: Vec<LineItem>,
    pub tax_percentage: f64,
    pub discount_percentage: f64,
    /// Explicit discount amount typed by the user.
    pub discount_override: Option<f64>,
    pub totals: InvoiceTotals,
    #[serde(skip)]
    #[ts(skip)]
    policy: AmountPolicy,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl InvoiceDraft {
    /// Creates an empty draft using the legacy zero-coercion policy.
    pub fn new(kind: InvoiceKind) -> Self {
        Self::with_policy(kind, AmountPolicy::default())
    }

    /// Creates an empty draft with an explicit input policy.
    pub fn with_policy(kind: InvoiceKind, policy: AmountPolicy) -> Self {
        InvoiceDraft {
            kind,
            party_id: None,
            invoice_date: None,
            notes: None,
            lines: Vec::new(),
            tax_percentage: 0.0,
            discount_percentage: 0.0,
            discount_override: None,
            totals: InvoiceTotals::default(),
            policy,
            created_at: Utc::now(),
        }
    }

    pub fn policy(&self) -> AmountPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: AmountPolicy) {
        self.policy = policy;
    }

    // =========================================================================
    // Header Fields
    // =========================================================================

    pub fn set_party(&mut self, party_id: impl Into<String>) {
        self.party_id = Some(party_id.into());
    }

    pub fn set_invoice_date(&mut self, date: NaiveDate) {
        self.invoice_date = Some(date);
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        let notes = notes.into();
        self.notes = if notes.trim().is_empty() { None } else { Some(notes) };
    }

    // =========================================================================
    // Line Mutations
    // =========================================================================

    /// Appends a blank line and returns its key.
    pub fn add_line(&mut self) -> String {
        let line = LineItem::new();
        let key = line.key.clone();
        self.lines.push(line);
        self.recompute();
        key
    }

    /// Selects the item of a line. When `default_price` is given (the
    /// item's list price) it replaces the unit price.
    pub fn set_line_item(
        &mut self,
        key: &str,
        item_id: impl Into<String>,
        default_price: Option<f64>,
    ) -> CoreResult<()> {
        let line = self.line_mut(key)?;
        line.item_id = Some(item_id.into());
        if let Some(price) = default_price {
            line.unit_price = finite_or_zero(price);
        }
        line.recompute();
        self.recompute();
        Ok(())
    }

    /// Updates a line's quantity from form text.
    pub fn set_quantity(&mut self, key: &str, raw: &str) -> CoreResult<()> {
        let quantity = parse_amount(raw).resolve("quantity", self.policy)?;
        let line = self.line_mut(key)?;
        line.quantity = quantity;
        line.recompute();
        self.recompute();
        Ok(())
    }

    /// Updates a line's unit price from form text.
    pub fn set_unit_price(&mut self, key: &str, raw: &str) -> CoreResult<()> {
        let unit_price = parse_amount(raw).resolve("unit_price", self.policy)?;
        let line = self.line_mut(key)?;
        line.unit_price = unit_price;
        line.recompute();
        self.recompute();
        Ok(())
    }

    /// Removes a line.
    pub fn remove_line(&mut self, key: &str) -> CoreResult<LineItem> {
        let index = self
            .lines
            .iter()
            .position(|line| line.key == key)
            .ok_or_else(|| CoreError::LineNotFound(key.to_string()))?;
        let removed = self.lines.remove(index);
        self.recompute();
        Ok(removed)
    }

    // =========================================================================
    // Percentage Fields
    // =========================================================================

    pub fn set_tax_percentage(&mut self, raw: &str) -> CoreResult<()> {
        self.tax_percentage = parse_amount(raw).resolve("tax_percentage", self.policy)?;
        self.recompute();
        Ok(())
    }

    pub fn set_discount_percentage(&mut self, raw: &str) -> CoreResult<()> {
        self.discount_percentage = parse_amount(raw).resolve("discount_percentage", self.policy)?;
        self.recompute();
        Ok(())
    }

    /// Sets the explicit discount amount. Clearing the field removes the
    /// override so the discount percentage applies again.
    pub fn set_discount_amount(&mut self, raw: &str) -> CoreResult<()> {
        let parsed = parse_amount(raw);
        let amount = parsed.resolve("discount_amount", self.policy)?;
        self.discount_override = match parsed {
            ParsedAmount::Empty => None,
            _ => Some(amount),
        };
        self.recompute();
        Ok(())
    }

    // =========================================================================
    // Totals
    // =========================================================================

    /// Recomputes every line total and the invoice totals.
    pub fn recompute(&mut self) {
        for line in &mut self.lines {
            line.recompute();
        }
        self.totals = compute_totals(
            &self.lines,
            self.tax_percentage,
            self.discount_percentage,
            self.discount_override,
        );
    }

    pub fn totals(&self) -> &InvoiceTotals {
        &self.totals
    }

    pub fn line(&self, key: &str) -> Option<&LineItem> {
        self.lines.iter().find(|line| line.key == key)
    }

    fn line_mut(&mut self, key: &str) -> CoreResult<&mut LineItem> {
        self.lines
            .iter_mut()
            .find(|line| line.key == key)
            .ok_or_else(|| CoreError::LineNotFound(key.to_string()))
    }

    // =========================================================================
    // Submission
    // =========================================================================

    /// Checks the draft before submission.
    pub fn validate(&self) -> CoreResult<()> {
        validate_required(self.kind.party_field(), self.party_id.as_deref())?;
        validate_not_empty("items", self.lines.len())?;

        for (index, line) in self.lines.iter().enumerate() {
            validate_required(&format!("items[{index}].item_id"), line.item_id.as_deref())?;
            validate_quantity(&format!("items[{index}].quantity"), line.quantity)?;
            validate_non_negative(&format!("items[{index}].unit_price"), line.unit_price)?;
        }

        validate_percentage("tax_percentage", self.tax_percentage)?;
        validate_percentage("discount_percentage", self.discount_percentage)?;
        if let Some(amount) = self.discount_override {
            validate_non_negative("discount_amount", amount)?;
        }

        Ok(())
    }

    /// Validates the draft and builds the request body for the backend.
    pub fn to_payload(&self) -> CoreResult<InvoicePayload> {
        self.validate()?;

        let party_id = self.party_id.clone();
        let (customer_id, supplier_id) = match self.kind {
            InvoiceKind::Sales => (party_id, None),
            InvoiceKind::Purchase => (None, party_id),
        };

        let items = self
            .lines
            .iter()
            .map(|line| LinePayload {
                item_id: line.item_id.clone().unwrap_or_default(),
                quantity: line.quantity,
                unit_price: round2(line.unit_price),
                total_price: round2(line.total_price),
            })
            .collect();

        let totals = &self.totals;
        Ok(InvoicePayload {
            customer_id,
            supplier_id,
            invoice_date: self.invoice_date.map(|d| d.format("%Y-%m-%d").to_string()),
            notes: self.notes.clone(),
            items,
            subtotal: round2(totals.subtotal),
            tax_percentage: totals.tax_percentage,
            tax_amount: round2(totals.tax_amount),
            discount_percentage: totals.discount_percentage,
            discount_amount: round2(totals.discount_amount),
            total_amount: round2(totals.total_amount),
        })
    }
}

// =============================================================================
// Payload
// =============================================================================

/// Request body of the create/update invoice endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoicePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub items: Vec<LinePayload>,
    pub subtotal: f64,
    pub tax_percentage: f64,
    pub tax_amount: f64,
    pub discount_percentage: f64,
    pub discount_amount: f64,
    pub total_amount: f64,
}

/// One line of [`InvoicePayload`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePayload {
    pub item_id: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub total_price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_totals_with_discount_override() {
        let totals = compute_totals(&[LineAmounts::new(2.0, 100.0)], 15.0, 50.0, Some(10.0));
        assert_eq!(totals.subtotal, 200.0);
        assert_eq!(totals.tax_amount, 30.0);
        assert_eq!(totals.discount_amount, 10.0);
        assert_eq!(totals.total_amount, 220.0);
    }

    #[test]
    fn test_totals_with_discount_percentage() {
        let totals = compute_totals(&[LineAmounts::new(3.0, 50.0)], 15.0, 10.0, None);
        assert_eq!(totals.subtotal, 150.0);
        assert_eq!(totals.tax_amount, 22.5);
        assert_eq!(totals.discount_amount, 15.0);
        assert_eq!(totals.total_amount, 157.5);
    }

    #[test]
    fn test_zero_override_falls_back_to_percentage() {
        let totals = compute_totals(&[LineAmounts::new(1.0, 80.0)], 0.0, 25.0, Some(0.0));
        assert_eq!(totals.discount_amount, 20.0);
        assert_eq!(totals.total_amount, 60.0);
    }

    #[test]
    fn test_empty_lines() {
        let lines: [LineAmounts; 0] = [];
        let totals = compute_totals(&lines, 15.0, 10.0, None);
        assert_eq!(totals, InvoiceTotals {
            tax_percentage: 15.0,
            discount_percentage: 10.0,
            ..InvoiceTotals::default()
        });
    }

    #[test]
    fn test_non_finite_inputs_count_as_zero() {
        let lines = [LineAmounts::new(f64::NAN, 10.0), LineAmounts::new(2.0, 5.0)];
        let totals = compute_totals(&lines, f64::INFINITY, 0.0, Some(f64::NAN));
        assert_eq!(totals.subtotal, 10.0);
        assert_eq!(totals.tax_amount, 0.0);
        assert_eq!(totals.discount_amount, 0.0);
    }

    #[test]
    fn test_totals_display() {
        let totals = compute_totals(&[LineAmounts::new(3.0, 50.0)], 15.0, 10.0, None);
        let display = totals.display();
        assert_eq!(display.subtotal, "150.00");
        assert_eq!(display.tax_amount, "22.50");
        assert_eq!(display.discount_amount, "15.00");
        assert_eq!(display.total_amount, "157.50");
    }

    #[test]
    fn test_draft_recomputes_on_every_mutation() {
        let mut draft = InvoiceDraft::new(InvoiceKind::Sales);
        let key = draft.add_line();
        draft.set_line_item(&key, "item-1", Some(50.0)).unwrap();
        draft.set_quantity(&key, "3").unwrap();
        assert_eq!(draft.line(&key).unwrap().total_price, 150.0);
        assert_eq!(draft.totals().subtotal, 150.0);

        draft.set_tax_percentage("15").unwrap();
        assert_eq!(draft.totals().tax_amount, 22.5);

        draft.set_discount_percentage("10").unwrap();
        assert_eq!(draft.totals().total_amount, 157.5);

        draft.set_discount_amount("5").unwrap();
        assert_eq!(draft.totals().discount_amount, 5.0);
        assert_eq!(draft.totals().total_amount, 167.5);

        draft.set_discount_amount("").unwrap();
        assert_eq!(draft.discount_override, None);
        assert_eq!(draft.totals().discount_amount, 15.0);

        draft.set_unit_price(&key, "10").unwrap();
        assert_eq!(draft.line(&key).unwrap().total_price, 30.0);
        assert_eq!(draft.totals().subtotal, 30.0);

        draft.remove_line(&key).unwrap();
        assert_eq!(draft.totals().subtotal, 0.0);
        assert_eq!(draft.totals().total_amount, 0.0);
    }

    #[test]
    fn test_invalid_input_coerces_to_zero_by_default() {
        let mut draft = InvoiceDraft::new(InvoiceKind::Purchase);
        let key = draft.add_line();
        draft.set_unit_price(&key, "20").unwrap();
        draft.set_quantity(&key, "two").unwrap();
        assert_eq!(draft.line(&key).unwrap().quantity, 0.0);
        assert_eq!(draft.totals().subtotal, 0.0);
    }

    #[test]
    fn test_reject_policy_leaves_draft_unchanged() {
        let mut draft = InvoiceDraft::with_policy(InvoiceKind::Sales, AmountPolicy::Reject);
        let key = draft.add_line();
        draft.set_unit_price(&key, "20").unwrap();
        draft.set_quantity(&key, "2").unwrap();
        let before = draft.totals;

        let err = draft.set_quantity(&key, "two").unwrap_err();
        assert!(matches!(err, CoreError::InvalidAmount { .. }));
        assert_eq!(draft.line(&key).unwrap().quantity, 2.0);
        assert_eq!(draft.totals, before);

        assert!(draft.set_tax_percentage("%15").is_err());
        assert_eq!(draft.tax_percentage, 0.0);
    }

    #[test]
    fn test_unknown_line_key() {
        let mut draft = InvoiceDraft::new(InvoiceKind::Sales);
        assert_eq!(
            draft.set_quantity("missing", "1"),
            Err(CoreError::LineNotFound("missing".to_string()))
        );
        assert!(draft.remove_line("missing").is_err());
    }

    #[test]
    fn test_validate_requires_party_and_lines() {
        let mut draft = InvoiceDraft::new(InvoiceKind::Purchase);
        assert_eq!(
            draft.validate(),
            Err(CoreError::Validation(ValidationError::required("supplier_id")))
        );

        draft.set_party("sup-9");
        assert!(matches!(
            draft.validate(),
            Err(CoreError::Validation(ValidationError::Empty { .. }))
        ));

        let key = draft.add_line();
        assert!(matches!(
            draft.validate(),
            Err(CoreError::Validation(ValidationError::Required { .. }))
        ));

        draft.set_line_item(&key, "item-2", Some(4.0)).unwrap();
        assert!(draft.validate().is_ok());

        draft.set_quantity(&key, "0").unwrap();
        assert!(matches!(
            draft.validate(),
            Err(CoreError::Validation(ValidationError::MustBePositive { .. }))
        ));
    }

    #[test]
    fn test_validate_percentage_range() {
        let mut draft = InvoiceDraft::new(InvoiceKind::Sales);
        draft.set_party("cust-1");
        let key = draft.add_line();
        draft.set_line_item(&key, "item-1", Some(1.0)).unwrap();
        draft.set_tax_percentage("150").unwrap();
        assert!(matches!(
            draft.validate(),
            Err(CoreError::Validation(ValidationError::OutOfRange { .. }))
        ));
    }

    #[test]
    fn test_sales_payload() {
        let mut draft = InvoiceDraft::new(InvoiceKind::Sales);
        draft.set_party("cust-1");
        draft.set_invoice_date(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
        let key = draft.add_line();
        draft.set_line_item(&key, "item-1", Some(33.333)).unwrap();
        draft.set_quantity(&key, "3").unwrap();
        draft.set_tax_percentage("15").unwrap();

        let payload = draft.to_payload().unwrap();
        assert_eq!(payload.customer_id.as_deref(), Some("cust-1"));
        assert_eq!(payload.supplier_id, None);
        assert_eq!(payload.invoice_date.as_deref(), Some("2026-03-01"));
        assert_eq!(payload.items[0].unit_price, 33.33);
        assert_eq!(payload.items[0].total_price, 100.0);
        assert_eq!(payload.subtotal, 100.0);
        assert_eq!(payload.tax_amount, 15.0);

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("supplier_id").is_none());
        assert_eq!(json["items"][0]["item_id"], "item-1");
    }

    #[test]
    fn test_purchase_payload_uses_supplier_field() {
        let mut draft = InvoiceDraft::new(InvoiceKind::Purchase);
        draft.set_party("sup-1");
        let key = draft.add_line();
        draft.set_line_item(&key, "item-1", Some(10.0)).unwrap();

        let json = serde_json::to_value(draft.to_payload().unwrap()).unwrap();
        assert_eq!(json["supplier_id"], "sup-1");
        assert!(json.get("customer_id").is_none());
    }

    #[test]
    fn test_payload_rejects_invalid_draft() {
        let draft = InvoiceDraft::new(InvoiceKind::Sales);
        assert!(draft.to_payload().is_err());
    }

    #[test]
    fn test_kind_metadata() {
        assert_eq!(InvoiceKind::Sales.party_field(), "customer_id");
        assert_eq!(InvoiceKind::Purchase.module_name(), "purchase_invoice");
        assert_eq!(InvoiceKind::Purchase.route(), RouteId::PurchaseInvoices);
    }

    #[test]
    fn test_blank_notes_are_dropped() {
        let mut draft = InvoiceDraft::new(InvoiceKind::Sales);
        draft.set_notes("   ");
        assert_eq!(draft.notes, None);
        draft.set_notes("deliver friday");
        assert_eq!(draft.notes.as_deref(), Some("deliver friday"));
    }
}
