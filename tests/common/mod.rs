// tests/common/mod.rs
//
// Fake transports shared by the integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use grid_carbon::error::{GridError, GridResult};
use grid_carbon::net::{Fetcher, HttpGet, HttpResponse};
use grid_carbon::worker::{Envelope, FetchMessage, MessageChannel};
use reqwest::Url;

#[derive(Clone, Debug)]
pub struct Call {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// Returns a canned response (or error) and records every call.
#[derive(Clone)]
pub struct FakeHttp {
    pub calls: Arc<Mutex<Vec<Call>>>,
    reply: Result<HttpResponse, String>,
}

impl FakeHttp {
    pub fn ok(status: u16, body: &str) -> Self {
        Self {
            calls: Arc::default(),
            reply: Ok(HttpResponse { status, body: body.to_string() }),
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self { calls: Arc::default(), reply: Err(msg.to_string()) }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn fetcher(&self, key: Option<&str>) -> Fetcher {
        Fetcher::new(
            Box::new(self.clone()),
            "https://api.electricitymaps.com",
            key.map(str::to_string),
        )
    }
}

impl HttpGet for FakeHttp {
    fn get(&self, url: &Url, headers: &[(&str, &str)]) -> GridResult<HttpResponse> {
        self.calls.lock().unwrap().push(Call {
            url: url.to_string(),
            headers: headers.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
        });
        self.reply.clone().map_err(GridError::Network)
    }
}

pub enum ChannelReply {
    Envelope(Envelope),
    NoReply,
    Broken,
}

/// Message channel with a scripted answer; remembers what it was sent.
pub struct FakeChannel {
    pub sent: Arc<Mutex<Vec<FetchMessage>>>,
    reply: ChannelReply,
}

impl FakeChannel {
    pub fn new(reply: ChannelReply) -> Self {
        Self { sent: Arc::default(), reply }
    }
}

impl MessageChannel for FakeChannel {
    fn send(&self, msg: &FetchMessage) -> GridResult<Option<Envelope>> {
        self.sent.lock().unwrap().push(msg.clone());
        match &self.reply {
            ChannelReply::Envelope(env) => Ok(Some(env.clone())),
            ChannelReply::NoReply => Ok(None),
            ChannelReply::Broken => Err(GridError::Transport("closed".to_string())),
        }
    }
}
