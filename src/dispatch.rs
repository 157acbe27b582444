// src/dispatch.rs
//
// One submission, one transport: the background channel when attached,
// otherwise (or when the channel cannot be reached) a direct fetch.

use crate::config::consts::{MSG_FETCH_FAILED, MSG_NO_RESPONSE};
use crate::config::options::{ApiOptions, TransportMode};
use crate::error::GridResult;
use crate::core::{FetchRequest, FetchResult, NormalizedReading, normalize};
use crate::net::Fetcher;
use crate::progress::Progress;
use crate::worker::{Envelope, FetchMessage, MessageChannel, Worker};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Background,
    Direct,
}

/// What the UI receives for a submission.
pub type Delivery = Result<NormalizedReading, String>;

pub struct Dispatcher {
    channel: Option<Box<dyn MessageChannel>>,
    direct: Fetcher,
}

impl Dispatcher {
    pub fn new(direct: Fetcher) -> Self {
        Self { channel: None, direct }
    }

    /// Production wiring: reqwest fetchers, plus a worker holding the key
    /// unless `opts.mode` is `Direct`.
    pub fn from_options(opts: &ApiOptions) -> GridResult<Self> {
        let direct = Fetcher::from_options(opts, opts.direct_token())?;
        let dispatcher = Self::new(direct);
        match opts.mode {
            TransportMode::Direct => Ok(dispatcher),
            TransportMode::Background => {
                let worker_fetcher = Fetcher::from_options(opts, opts.auth_token.clone())?;
                Ok(dispatcher.with_channel(Box::new(Worker::spawn(worker_fetcher))))
            }
        }
    }

    pub fn with_channel(mut self, channel: Box<dyn MessageChannel>) -> Self {
        self.channel = Some(channel);
        self
    }

    pub fn preferred_route(&self) -> Route {
        if self.channel.is_some() { Route::Background } else { Route::Direct }
    }

    /// Fetch via exactly one transport. Returns the route actually used.
    pub fn dispatch(&self, req: &FetchRequest) -> (Route, FetchResult) {
        if let Some(channel) = &self.channel {
            let msg = FetchMessage::fetch(req);
            match channel.send(&msg) {
                Ok(reply) => return (Route::Background, from_envelope(reply)),
                Err(e) => logw!("Dispatch: {} -> falling back to direct fetch", e),
            }
        }
        (Route::Direct, self.fetch_direct(req))
    }

    /// Dispatch, normalize and report. `progress` brackets the whole call.
    pub fn submit(&self, req: &FetchRequest, progress: &mut dyn Progress) -> Delivery {
        progress.begin();
        logf!("Submit: {} {} via {:?}", req.data_type, req.region, self.preferred_route());

        let (route, result) = self.dispatch(req);
        let delivery = deliver(req, result);

        match &delivery {
            Ok(r) => logf!("Submit: OK via {:?} zone={} carbon={}", route, r.zone, r.carbon),
            Err(msg) => {
                loge!("Submit: Error via {:?}: {}", route, msg);
                progress.log(msg);
            }
        }
        progress.finish();
        delivery
    }

    fn fetch_direct(&self, req: &FetchRequest) -> FetchResult {
        let key = req.api_key.as_deref().or(self.direct.api_key());
        match self.direct.fetch_with_key(req.data_type.as_str(), &req.region, key) {
            Ok(payload) => FetchResult::Success { payload },
            Err(e) => FetchResult::failure(e.to_string()),
        }
    }
}

fn from_envelope(reply: Option<Envelope>) -> FetchResult {
    match reply {
        None => FetchResult::failure(MSG_NO_RESPONSE),
        Some(env) if !env.ok => {
            let message = env.error.filter(|e| !e.is_empty()).unwrap_or_else(|| s!(MSG_FETCH_FAILED));
            FetchResult::failure(message)
        }
        Some(env) => FetchResult::Success { payload: env.into_payload() },
    }
}

/// Shape a result for display. Missing fields never fail; transport errors do.
pub fn deliver(req: &FetchRequest, result: FetchResult) -> Delivery {
    match result {
        FetchResult::Success { payload } => Ok(normalize(&payload, &req.region)),
        FetchResult::Failure { message } => Err(message),
    }
}
