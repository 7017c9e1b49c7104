//! Accounts receivable reports.

use lockstep_core::{Envelope, HttpClient, Method, QueryParams, Result};

use crate::HyperClient;
use crate::api::{LockstepApi, NO_BODY};
use crate::models::{CashflowReportModel, DailySalesOutstandingReportModel};

/// Options of the invoice aging report.
///
/// `buckets` are the day boundaries of the aging columns; an empty list lets
/// the platform use its defaults. Each bucket is sent as its own `Buckets`
/// parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgingReportQuery {
    /// Restrict the report to one company.
    pub company_id: Option<String>,
    /// Force the platform to recompute instead of serving a cached report.
    pub recalculate: Option<bool>,
    /// ISO 4217 currency to report in.
    pub currency_code: Option<String>,
    /// Exchange rate provider used for conversion.
    pub currency_provider: Option<String>,
    /// Aging bucket boundaries, in days.
    pub buckets: Vec<i32>,
}

impl AgingReportQuery {
    fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .query("CompanyId", &self.company_id)
            .query("Recalculate", self.recalculate)
            .query("CurrencyCode", &self.currency_code)
            .query("CurrencyProvider", &self.currency_provider)
            .query("Buckets", &self.buckets)
    }
}

/// Operations on `/api/v1/Reports`.
pub struct ReportsClient<'a, C = HyperClient> {
    api: &'a LockstepApi<C>,
}

impl<'a, C: HttpClient> ReportsClient<'a, C> {
    pub(crate) const fn new(api: &'a LockstepApi<C>) -> Self {
        Self { api }
    }

    /// Payments collected and invoices billed over the last `timeframe` days
    /// (30 when unset).
    pub async fn cash_flow(&self, timeframe: Option<u32>) -> Result<Envelope<CashflowReportModel>> {
        let params = QueryParams::new().query("timeframe", timeframe);
        self.api
            .send_request(Method::Get, "/api/v1/Reports/cashflow", NO_BODY, &params)
            .await
    }

    /// Daily sales outstanding, one entry per period.
    pub async fn daily_sales_outstanding(
        &self,
    ) -> Result<Envelope<Vec<DailySalesOutstandingReportModel>>> {
        self.api
            .send_request(
                Method::Get,
                "/api/v1/Reports/dailysalesoutstanding",
                NO_BODY,
                &QueryParams::new(),
            )
            .await
    }

    /// Share of invoices paid late, per period.
    pub async fn risk_rates(&self) -> Result<Envelope> {
        self.api
            .send_request(Method::Get, "/api/v1/Reports/riskrates", NO_BODY, &QueryParams::new())
            .await
    }

    /// Accounts receivable summary as of `report_date` (`YYYY-MM-DD`).
    pub async fn accounts_receivable_header(
        &self,
        report_date: Option<&str>,
        company_id: Option<&str>,
    ) -> Result<Envelope> {
        let params = QueryParams::new()
            .query("reportDate", report_date)
            .query("companyId", company_id);
        self.api
            .send_request(Method::Get, "/api/v1/Reports/ar-header", NO_BODY, &params)
            .await
    }

    /// Invoice aging report.
    pub async fn invoice_aging_report(&self, query: &AgingReportQuery) -> Result<Envelope> {
        self.api
            .send_request(Method::Get, "/api/v1/Reports/aging", NO_BODY, &query.to_params())
            .await
    }

    /// Header figures of the accounts receivable aging report.
    pub async fn accounts_receivable_aging_header(&self) -> Result<Envelope> {
        self.api
            .send_request(
                Method::Get,
                "/api/v1/Reports/ar-aging-header",
                NO_BODY,
                &QueryParams::new(),
            )
            .await
    }

    /// Attachment counts for one company, or the whole account.
    pub async fn attachments_header_information(
        &self,
        company_id: Option<&str>,
    ) -> Result<Envelope> {
        let params = QueryParams::new().query("companyId", company_id);
        self.api
            .send_request(Method::Get, "/api/v1/Reports/attachments-header", NO_BODY, &params)
            .await
    }
}
