use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    Url,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use serde_json::Value;

use crate::{
    api::{Report, ReportQuery, ReportSource},
    prelude::*,
};

/// Admin backend REST client.
pub struct Client {
    inner: reqwest::Client,
    base_url: Url,
}

impl Client {
    #[instrument(skip_all, fields(base_url = %base_url))]
    pub fn new(base_url: Url, access_token: Option<&str>, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(access_token) = access_token {
            let mut value = HeaderValue::from_str(&format!("Bearer {access_token}"))
                .context("invalid access token")?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        let inner = reqwest::Client::builder()
            .user_agent("chargeboard")
            .timeout(timeout)
            .default_headers(headers)
            .build()?;
        Ok(Self { inner, base_url })
    }

    fn build_url(&self, report: Report, query: &ReportQuery) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| anyhow!("invalid base URL"))?
            .pop_if_empty()
            .extend(report.path_segments());
        let query_string = query.to_query_string()?;
        url.set_query((!query_string.is_empty()).then_some(query_string.as_str()));
        Ok(url)
    }
}

#[async_trait]
impl ReportSource for Client {
    #[instrument(skip_all, fields(report = %report))]
    async fn fetch(&self, report: Report, query: &ReportQuery) -> Result<Value> {
        let url = self.build_url(report, query)?;
        debug!(%url, "requesting…");
        self.inner
            .get(url)
            .send()
            .await
            .with_context(|| format!("failed to request the `{report}` report"))?
            .error_for_status()
            .with_context(|| format!("the `{report}` report request failed"))?
            .json::<Value>()
            .await
            .with_context(|| format!("failed to deserialize the `{report}` report JSON"))
    }
}
