//! English strings.

pub(super) static STRINGS: &[(&str, &str)] = &[
    // Common actions
    ("save", "Save"),
    ("cancel", "Cancel"),
    ("delete", "Delete"),
    ("edit", "Edit"),
    ("add", "Add"),
    ("search", "Search"),
    ("loading", "Loading..."),
    ("ok", "OK"),
    ("yes", "Yes"),
    ("no", "No"),
    ("confirm", "Confirm"),
    ("login", "Login"),
    ("logout", "Logout"),
    ("settings", "Settings"),
    ("language", "Language"),
    ("english", "English"),
    ("arabic", "Arabic"),
    ("dashboard", "Dashboard"),
    // Dashboard menu
    ("sales_invoices", "Sales Invoices"),
    ("purchase_invoices", "Purchase Invoices"),
    ("customers", "Customers"),
    ("suppliers", "Suppliers"),
    ("items", "Items"),
    ("inventory", "Inventory"),
    ("staff_visits", "Staff Visits"),
    ("reports", "Reports"),
    // Reports
    ("sales_report", "Sales Report"),
    ("purchase_report", "Purchase Report"),
    ("inventory_report", "Inventory Report"),
    ("customer_balance_report", "Customer Balances"),
    ("supplier_balance_report", "Supplier Balances"),
    ("staff_visits_report", "Staff Visits Report"),
    ("profit_report", "Profit Report"),
    // Categories
    ("category_sales", "Sales"),
    ("category_purchases", "Purchases"),
    ("category_inventory", "Inventory"),
    ("category_field", "Field Work"),
    ("category_management", "Management"),
    // Invoice form
    ("invoice_number", "Invoice Number"),
    ("invoice_date", "Invoice Date"),
    ("customer", "Customer"),
    ("supplier", "Supplier"),
    ("item", "Item"),
    ("quantity", "Quantity"),
    ("unit_price", "Unit Price"),
    ("total_price", "Total Price"),
    ("subtotal", "Subtotal"),
    ("tax_percentage", "Tax %"),
    ("tax_amount", "Tax Amount"),
    ("discount_percentage", "Discount %"),
    ("discount_amount", "Discount Amount"),
    ("total_amount", "Total Amount"),
    ("add_item", "Add Item"),
    ("remove_item", "Remove Item"),
    ("notes", "Notes"),
    // Alerts
    ("error", "Error"),
    ("success", "Success"),
    ("network_error", "Network error. Please check your connection and try again."),
    ("something_went_wrong", "Something went wrong. Please try again."),
    ("saved_successfully", "Saved successfully"),
    ("deleted_successfully", "Deleted successfully"),
    ("confirm_delete", "Are you sure you want to delete this record?"),
    ("required_fields", "Please fill in all required fields"),
    ("invalid_number", "Please enter a valid number"),
    ("no_permissions", "You have no assigned permissions"),
];
