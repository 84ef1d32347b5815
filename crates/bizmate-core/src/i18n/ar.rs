//! Arabic strings.

pub(super) static STRINGS: &[(&str, &str)] = &[
    // Common actions
    ("save", "حفظ"),
    ("cancel", "إلغاء"),
    ("delete", "حذف"),
    ("edit", "تعديل"),
    ("add", "إضافة"),
    ("search", "بحث"),
    ("loading", "جاري التحميل..."),
    ("ok", "حسناً"),
    ("yes", "نعم"),
    ("no", "لا"),
    ("confirm", "تأكيد"),
    ("login", "تسجيل الدخول"),
    ("logout", "تسجيل الخروج"),
    ("settings", "الإعدادات"),
    ("language", "اللغة"),
    ("english", "الإنجليزية"),
    ("arabic", "العربية"),
    ("dashboard", "لوحة التحكم"),
    // Dashboard menu
    ("sales_invoices", "فواتير المبيعات"),
    ("purchase_invoices", "فواتير المشتريات"),
    ("customers", "العملاء"),
    ("suppliers", "الموردون"),
    ("items", "الأصناف"),
    ("inventory", "المخزون"),
    ("staff_visits", "زيارات الموظفين"),
    ("reports", "التقارير"),
    // Reports
    ("sales_report", "تقرير المبيعات"),
    ("purchase_report", "تقرير المشتريات"),
    ("inventory_report", "تقرير المخزون"),
    ("customer_balance_report", "أرصدة العملاء"),
    ("supplier_balance_report", "أرصدة الموردين"),
    ("staff_visits_report", "تقرير زيارات الموظفين"),
    ("profit_report", "تقرير الأرباح"),
    // Categories
    ("category_sales", "المبيعات"),
    ("category_purchases", "المشتريات"),
    ("category_inventory", "المخزون"),
    ("category_field", "العمل الميداني"),
    ("category_management", "الإدارة"),
    // Invoice form
    ("invoice_number", "رقم الفاتورة"),
    ("invoice_date", "تاريخ الفاتورة"),
    ("customer", "العميل"),
    ("supplier", "المورد"),
    ("item", "الصنف"),
    ("quantity", "الكمية"),
    ("unit_price", "سعر الوحدة"),
    ("total_price", "السعر الإجمالي"),
    ("subtotal", "المجموع الفرعي"),
    ("tax_percentage", "نسبة الضريبة %"),
    ("tax_amount", "مبلغ الضريبة"),
    ("discount_percentage", "نسبة الخصم %"),
    ("discount_amount", "مبلغ الخصم"),
    ("total_amount", "المبلغ الإجمالي"),
    ("add_item", "إضافة صنف"),
    ("remove_item", "حذف الصنف"),
    ("notes", "ملاحظات"),
    // Alerts
    ("error", "خطأ"),
    ("success", "تم بنجاح"),
    ("network_error", "خطأ في الشبكة. يرجى التحقق من الاتصال والمحاولة مرة أخرى."),
    ("something_went_wrong", "حدث خطأ ما. يرجى المحاولة مرة أخرى."),
    ("saved_successfully", "تم الحفظ بنجاح"),
    ("deleted_successfully", "تم الحذف بنجاح"),
    ("confirm_delete", "هل أنت متأكد من حذف هذا السجل؟"),
    ("required_fields", "يرجى تعبئة جميع الحقول المطلوبة"),
    ("invalid_number", "يرجى إدخال رقم صحيح"),
    ("no_permissions", "لا توجد صلاحيات مخصصة لك"),
];
