// src/config/options.rs
use std::time::Duration;

use super::consts::*;

/// Which transport a submission should try first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportMode {
    /// Message the background worker; fall back to direct fetch if the channel fails.
    Background,
    /// Skip the worker and call the API from the caller's thread.
    Direct,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiOptions {
    pub base_url: String,
    /// Held by the background worker. Only handed to the direct fetcher
    /// when `mode == Direct`.
    pub auth_token: Option<String>,
    pub mode: TransportMode,
    /// None = wait forever.
    pub timeout: Option<Duration>,
    /// Honor HTTP(S)_PROXY from the environment.
    pub system_proxy: bool,
}

impl Default for ApiOptions {
    fn default() -> Self {
        Self {
            base_url: s!(API_BASE_URL),
            auth_token: BUILD_TOKEN.and_then(non_blank),
            mode: TransportMode::Background,
            timeout: None,
            system_proxy: true,
        }
    }
}

impl ApiOptions {
    /// Defaults, then the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with whatever `lookup` yields for our env keys.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();
        if let Some(token) = lookup(ENV_TOKEN).as_deref().and_then(non_blank) {
            opts.auth_token = Some(token);
        }
        if let Some(url) = lookup(ENV_BASE_URL).as_deref().and_then(non_blank) {
            opts.base_url = url;
        }
        opts
    }

    /// Key for the direct fetcher. The worker keeps the secret otherwise.
    pub fn direct_token(&self) -> Option<String> {
        match self.mode {
            TransportMode::Direct => self.auth_token.clone(),
            TransportMode::Background => None,
        }
    }
}

fn non_blank(s: &str) -> Option<String> {
    let t = s.trim();
    if t.is_empty() { None } else { Some(s!(t)) }
}
