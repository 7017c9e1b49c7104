//! Data records exchanged with the platform.
//!
//! Every field is optional: an unset field is absent from the JSON in both
//! directions. Wire names are camelCase.

use serde::{Deserialize, Serialize};

/// Links an activity to a record of another table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityXRefModel {
    /// Unique ID of this cross reference.
    #[serde(rename = "activityXRefId", skip_serializing_if = "Option::is_none")]
    pub activity_x_ref_id: Option<String>,
    /// The activity being linked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_id: Option<String>,
    /// Group this record belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_key: Option<String>,
    /// Table of the linked record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_key: Option<String>,
    /// ID of the linked record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_key: Option<String>,
}

/// An app enrollment merged with one of its custom fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppEnrollmentCustomFieldModel {
    /// Unique ID of the enrollment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_enrollment_id: Option<String>,
    /// The enrolled application.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    /// Application name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Application type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_type: Option<String>,
    /// Group this record belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_key: Option<String>,
    /// Definition of the custom field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_field_definition_id: Option<String>,
    /// Label of the custom field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_field_label: Option<String>,
    /// Data type of the custom field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    /// Display order of the custom field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
    /// Value, when the field holds text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_value: Option<String>,
    /// Value, when the field holds a number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric_value: Option<f64>,
}

/// Cash flow over a timeframe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashflowReportModel {
    /// Number of days covered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<i32>,
    /// Total of payments collected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payments_collected: Option<f64>,
    /// Number of payments collected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payments_collected_count: Option<i32>,
    /// Total of invoices billed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoices_billed: Option<f64>,
    /// Number of invoices billed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoices_billed_count: Option<i32>,
}

/// An ISO 3166 country.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryModel {
    /// English name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Two-letter code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha2: Option<String>,
    /// Three-letter code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha3: Option<String>,
    /// Numeric code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<i32>,
    /// Region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Sub-region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_region: Option<String>,
    /// Intermediate region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intermediate_region: Option<String>,
    /// Numeric region code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_code: Option<i32>,
    /// Numeric sub-region code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_region_code: Option<i32>,
    /// Numeric intermediate region code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intermediate_region_code: Option<i32>,
    /// French name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub french_name: Option<String>,
    /// Other names, comma separated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aliases: Option<String>,
}

/// Daily sales outstanding for one period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySalesOutstandingReportModel {
    /// Start of the period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<String>,
    /// Invoices in the period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_count: Option<i32>,
    /// Average days for an invoice to be fully paid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_sales_outstanding: Option<f64>,
}

/// Request to create a developer account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperAccountSubmitModel {
    /// Name of the developer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Email of the developer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Company of the developer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
}

/// A payment applied to one invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoicePaymentDetailModel {
    /// Group this record belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_key: Option<String>,
    /// The payment application.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_applied_id: Option<String>,
    /// The invoice paid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<String>,
    /// The payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    /// Date the payment was applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_to_invoice_date: Option<String>,
    /// Amount applied to the invoice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_applied_amount: Option<f64>,
    /// Reference code of the payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_code: Option<String>,
    /// Company that made the payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    /// Total amount of the payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_amount: Option<f64>,
    /// Amount of the payment not yet applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unapplied_amount: Option<f64>,
}

/// Payment figures aggregated over a group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetailHeaderModel {
    /// Group the figures cover.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_key: Option<String>,
    /// Customers with payments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_count: Option<i32>,
    /// Total collected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_collected: Option<f64>,
    /// Total not applied to invoices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unapplied_amount: Option<f64>,
    /// Invoices fully paid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_invoice_count: Option<i32>,
    /// Invoices still open.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_invoice_count: Option<i32>,
}

/// Outcome of a sync for one entity type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncEntityResultModel {
    /// Records inserted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_count: Option<i32>,
    /// Records updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_count: Option<i32>,
    /// Records skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_count: Option<i32>,
    /// Records that failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_count: Option<i32>,
    /// Errors keyed by record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<serde_json::Value>,
}
