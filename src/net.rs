// src/net.rs
//
// HTTPS GET against the Electricity Maps API.
// The HTTP layer sits behind `HttpGet` so callers can swap in fakes.

use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;
use serde_json::Value;

use crate::config::consts::{API_ENDPOINT, API_VERSION, AUTH_HEADER, USER_AGENT};
use crate::config::options::ApiOptions;
use crate::error::{GridError, GridResult};

/// Status + raw body. No status policy is applied at this level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub trait HttpGet: Send + Sync {
    fn get(&self, url: &Url, headers: &[(&str, &str)]) -> GridResult<HttpResponse>;
}

pub struct ReqwestHttp {
    client: Client,
}

impl ReqwestHttp {
    pub fn new(timeout: Option<Duration>, system_proxy: bool) -> GridResult<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT).timeout(timeout);
        if !system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder
            .build()
            .map_err(|e| GridError::Config(format!("HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

impl HttpGet for ReqwestHttp {
    fn get(&self, url: &Url, headers: &[(&str, &str)]) -> GridResult<HttpResponse> {
        let mut req = self.client.get(url.clone());
        for (name, value) in headers {
            req = req.header(*name, *value);
        }
        let resp = req.send().map_err(|e| GridError::Network(e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp.text().map_err(|e| GridError::Network(e.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}

/// `{base}/v3/{data_type}/latest?zone={region}`, each piece percent-encoded.
pub fn build_url(base: &str, data_type: &str, region: &str) -> GridResult<Url> {
    let invalid = |reason: String| GridError::InvalidUrl { url: s!(base), reason };

    let mut url = Url::parse(base).map_err(|e| invalid(e.to_string()))?;
    {
        let mut segs = url
            .path_segments_mut()
            .map_err(|_| invalid(s!("cannot be a base")))?;
        segs.pop_if_empty().extend([API_VERSION, data_type, API_ENDPOINT]);
    }
    url.query_pairs_mut().clear().append_pair("zone", region);
    Ok(url)
}

pub struct Fetcher {
    http: Box<dyn HttpGet>,
    base_url: String,
    api_key: Option<String>,
}

impl Fetcher {
    pub fn new(http: Box<dyn HttpGet>, base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self { http, base_url: base_url.into(), api_key }
    }

    /// reqwest-backed fetcher using `opts` for base URL and timeout.
    pub fn from_options(opts: &ApiOptions, api_key: Option<String>) -> GridResult<Self> {
        let http = ReqwestHttp::new(opts.timeout, opts.system_proxy)?;
        Ok(Self::new(Box::new(http), opts.base_url.clone(), api_key))
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn fetch_reading(&self, data_type: &str, region: &str) -> GridResult<Value> {
        self.fetch_with_key(data_type, region, self.api_key.as_deref())
    }

    /// As `fetch_reading`, with an explicit key (or none).
    pub fn fetch_with_key(
        &self,
        data_type: &str,
        region: &str,
        api_key: Option<&str>,
    ) -> GridResult<Value> {
        let url = build_url(&self.base_url, data_type, region)?;

        let mut headers = Vec::with_capacity(1);
        if let Some(key) = api_key {
            headers.push((AUTH_HEADER, key));
        } else {
            logd!("Fetch: No API key for {}", url);
        }

        logf!("Fetch: GET {}", url);
        let resp = self.http.get(&url, &headers).map_err(|e| {
            loge!("Fetch: Transport failed {}: {}", url, e);
            e
        })?;

        // Lenient: non-2xx bodies are still handed back as data.
        if !resp.is_success() {
            logw!("Fetch: HTTP {} from {}", resp.status, url);
        }

        serde_json::from_str(&resp.body).map_err(|e| {
            loge!("Fetch: Bad JSON from {} (status {}): {}", url, resp.status, e);
            GridError::Decode(e.to_string())
        })
    }
}
