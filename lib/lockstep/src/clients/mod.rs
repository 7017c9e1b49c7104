//! Resource clients, one per API resource group.
//!
//! Each client is a borrowed view over a [`LockstepApi`](crate::LockstepApi):
//! its methods map typed arguments to a path, a parameter mapping and an
//! optional body, and forward them to
//! [`send_request`](crate::LockstepApi::send_request) unchanged.

mod activities;
mod attachments;
mod code_definitions;
mod contacts;
mod currencies;
mod invoice_history;
mod payment_applications;
mod payments;
mod reports;

use lockstep_core::QueryParams;

pub use activities::ActivitiesClient;
pub use attachments::AttachmentsClient;
pub use code_definitions::CodeDefinitionsClient;
pub use contacts::ContactsClient;
pub use currencies::CurrenciesClient;
pub use invoice_history::InvoiceHistoryClient;
pub use payment_applications::PaymentApplicationsClient;
pub use payments::PaymentsClient;
pub use reports::{AgingReportQuery, ReportsClient};

/// Searchlight query options accepted by every `query` endpoint.
///
/// Unset options are left out of the request and the platform applies its
/// own defaults.
///
/// ```
/// use lockstep::SearchlightQuery;
///
/// let query = SearchlightQuery::new()
///     .filter("paymentAmount gt 100")
///     .page_size(50);
///
/// assert_eq!(
///     query.to_params().to_query_string(),
///     "filter=paymentAmount+gt+100&pageSize=50"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchlightQuery {
    /// Searchlight filter expression.
    pub filter: Option<String>,
    /// Comma-separated related collections to include.
    pub include: Option<String>,
    /// Sort expression.
    pub order: Option<String>,
    /// Page size.
    pub page_size: Option<u32>,
    /// Zero-based page number.
    pub page_number: Option<u32>,
}

impl SearchlightQuery {
    /// Empty query: every option left to the platform.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter expression.
    #[must_use]
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Set the collections to include.
    #[must_use]
    pub fn include(mut self, include: impl Into<String>) -> Self {
        self.include = Some(include.into());
        self
    }

    /// Set the sort expression.
    #[must_use]
    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    /// Set the page size.
    #[must_use]
    pub const fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Set the page number.
    #[must_use]
    pub const fn page_number(mut self, page_number: u32) -> Self {
        self.page_number = Some(page_number);
        self
    }

    /// Parameter mapping for this query.
    #[must_use]
    pub fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .query("filter", &self.filter)
            .query("include", &self.include)
            .query("order", &self.order)
            .query("pageSize", self.page_size)
            .query("pageNumber", self.page_number)
    }
}

#[cfg(test)]
mod tests {
    use assert2::check;

    use super::*;

    #[test]
    fn empty_query_has_no_params() {
        check!(SearchlightQuery::new().to_params().is_empty());
    }

    #[test]
    fn every_option_is_mapped() {
        let query = SearchlightQuery::new()
            .filter("status eq 'Open'")
            .include("Attachments,Notes")
            .order("paymentDate desc")
            .page_size(25)
            .page_number(2);

        check!(
            query.to_params().pairs()
                == vec![
                    ("filter".to_string(), "status eq 'Open'".to_string()),
                    ("include".to_string(), "Attachments,Notes".to_string()),
                    ("order".to_string(), "paymentDate desc".to_string()),
                    ("pageSize".to_string(), "25".to_string()),
                    ("pageNumber".to_string(), "2".to_string()),
                ]
        );
    }
}
