//! Currency exchange rates.

use lockstep_core::{Envelope, HttpClient, Method, QueryParams, Result, segment};
use serde::Serialize;

use crate::HyperClient;
use crate::api::{LockstepApi, NO_BODY};

/// Operations on `/api/v1/Currencies`.
pub struct CurrenciesClient<'a, C = HyperClient> {
    api: &'a LockstepApi<C>,
}

impl<'a, C: HttpClient> CurrenciesClient<'a, C> {
    pub(crate) const fn new(api: &'a LockstepApi<C>) -> Self {
        Self { api }
    }

    /// Exchange rate between two ISO 4217 currencies.
    ///
    /// `date` (`YYYY-MM-DD`) defaults to today; `data_provider` to the
    /// platform's default provider.
    pub async fn retrieve_currency_rate(
        &self,
        source_currency: &str,
        destination_currency: &str,
        date: Option<&str>,
        data_provider: Option<&str>,
    ) -> Result<Envelope> {
        let path = format!(
            "/api/v1/Currencies/{}/{}",
            segment(source_currency)?,
            segment(destination_currency)?
        );
        let params = QueryParams::new()
            .path("sourceCurrency", source_currency)
            .path("destinationCurrency", destination_currency)
            .query("date", date)
            .query("dataProvider", data_provider);
        self.api.send_request(Method::Get, &path, NO_BODY, &params).await
    }

    /// Convert a batch of amounts into `destination_currency`.
    pub async fn bulk_currency_data<B>(
        &self,
        destination_currency: Option<&str>,
        body: &B,
    ) -> Result<Envelope>
    where
        B: Serialize + ?Sized,
    {
        let params = QueryParams::new().query("destinationCurrency", destination_currency);
        self.api
            .send_request(Method::Post, "/api/v1/Currencies/bulk", Some(body), &params)
            .await
    }
}
