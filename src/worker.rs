// src/worker.rs
//
// Background worker: owns the API key and answers `fetchCarbon` messages.
// Callers reach it through `MessageChannel`, never through the key itself.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::consts::{ACTION_FETCH, MSG_MISSING_FIELDS};
use crate::core::FetchRequest;
use crate::error::{GridError, GridResult};
use crate::net::Fetcher;

/// Request side of the message contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchMessage {
    pub action: String,
    #[serde(rename = "dataType", alias = "data_type", default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(rename = "apiKey", default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl FetchMessage {
    pub fn fetch(req: &FetchRequest) -> Self {
        Self {
            action: s!(ACTION_FETCH),
            data_type: Some(s!(req.data_type.as_str())),
            region: Some(req.region.clone()),
            api_key: req.api_key.clone(),
        }
    }
}

/// Response side of the message contract.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Older relays put the payload here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Envelope {
    pub fn success(data: Value) -> Self {
        Self { ok: true, data: Some(data), ..Self::default() }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self { ok: false, error: Some(error.into()), ..Self::default() }
    }

    /// `data`, else `json`, else an empty object. Null counts as absent.
    pub fn into_payload(self) -> Value {
        self.data
            .filter(|v| !v.is_null())
            .or(self.json.filter(|v| !v.is_null()))
            .unwrap_or_else(|| Value::Object(Default::default()))
    }
}

/// A transport able to deliver a `FetchMessage` and wait for the reply.
///
/// `Err` means the message could not be sent at all (the caller may fall
/// back). `Ok(None)` means it was sent but nobody answered.
pub trait MessageChannel: Send + Sync {
    fn send(&self, msg: &FetchMessage) -> GridResult<Option<Envelope>>;
}

type Job = (FetchMessage, Sender<Envelope>);

pub struct Worker;

impl Worker {
    /// Start the worker thread. It stops once every handle is dropped.
    pub fn spawn(fetcher: Fetcher) -> WorkerHandle {
        let (tx, rx) = mpsc::channel::<Job>();
        let join = thread::Builder::new()
            .name(s!("grid_carbon-worker"))
            .spawn(move || serve(fetcher, rx));
        let join = match join {
            Ok(j) => Some(j),
            Err(e) => {
                // rx was moved into the failed closure and dropped, so every
                // send will report a transport error and the caller falls back.
                loge!("Worker: Spawn failed: {}", e);
                None
            }
        };
        WorkerHandle { tx, _join: join }
    }
}

pub struct WorkerHandle {
    tx: Sender<Job>,
    _join: Option<JoinHandle<()>>,
}

impl MessageChannel for WorkerHandle {
    fn send(&self, msg: &FetchMessage) -> GridResult<Option<Envelope>> {
        let (reply_tx, reply_rx) = mpsc::channel();
        self.tx
            .send((msg.clone(), reply_tx))
            .map_err(|_| GridError::Transport(s!("worker is not running")))?;
        Ok(reply_rx.recv().ok())
    }
}

fn serve(fetcher: Fetcher, rx: Receiver<Job>) {
    logf!("Worker: Started (key={})", if fetcher.api_key().is_some() { "set" } else { "none" });
    let fetcher = Arc::new(fetcher);
    // One thread per job: a hung request must not hold up the next one.
    for (msg, reply) in rx {
        let fetcher = Arc::clone(&fetcher);
        let spawned = thread::Builder::new()
            .name(s!("grid_carbon-job"))
            .spawn(move || {
                if let Some(env) = handle_message(&fetcher, &msg) {
                    let _ = reply.send(env);
                }
            });
        if let Err(e) = spawned {
            // reply is dropped with the closure; the caller sees no response.
            loge!("Worker: Job spawn failed: {}", e);
        }
    }
    logf!("Worker: Stopped");
}

/// Answer one message. `None` = not ours, no reply.
pub fn handle_message(fetcher: &Fetcher, msg: &FetchMessage) -> Option<Envelope> {
    if msg.action != ACTION_FETCH {
        logd!("Worker: Ignoring action {:?}", msg.action);
        return None;
    }

    let data_type = msg.data_type.as_deref().filter(|s| !s.is_empty());
    let region = msg.region.as_deref().filter(|s| !s.is_empty());
    let (Some(data_type), Some(region)) = (data_type, region) else {
        logw!("Worker: {} (dataType={:?}, region={:?})", MSG_MISSING_FIELDS, msg.data_type, msg.region);
        return Some(Envelope::failure(MSG_MISSING_FIELDS));
    };

    let key = msg.api_key.as_deref().or(fetcher.api_key());
    let env = match fetcher.fetch_with_key(data_type, region, key) {
        Ok(json) => Envelope::success(json),
        Err(e) => Envelope::failure(e.to_string()),
    };
    logd!("Worker: Reply ok={} for {} {}", env.ok, data_type, region);
    Some(env)
}
