// src/gui/app.rs
use std::{
    error::Error,
    sync::{
        Arc, Mutex,
        mpsc::{self, Receiver, Sender},
    },
    thread,
};

use eframe::egui;

use crate::{
    config::state::AppState,
    core::NormalizedReading,
    dispatch::{Delivery, Dispatcher},
};

use super::{
    components,
    progress::{GuiProgress, StatusLine},
};

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Grid Carbon",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // None when wiring failed; submit then reports `init_error`
    pub dispatcher: Option<Arc<Dispatcher>>,
    pub init_error: Option<String>,

    // latest delivered reading
    pub reading: Option<NormalizedReading>,

    // status line (submission threads write here)
    pub status: Arc<Mutex<StatusLine>>,

    // submission bookkeeping: newest seq wins, older deliveries are dropped
    seq: u64,
    pending: Option<u64>,
    tx: Sender<(u64, Delivery)>,
    rx: Receiver<(u64, Delivery)>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let (dispatcher, init_error) = match Dispatcher::from_options(&state.options) {
            Ok(d) => (Some(Arc::new(d)), None),
            Err(e) => {
                loge!("Init: Dispatcher failed: {}", e);
                (None, Some(e.to_string()))
            }
        };
        logf!("Init: mode={:?} base={}", state.options.mode, state.options.base_url);
        Self::with_dispatcher(state, dispatcher, init_error)
    }

    pub fn with_dispatcher(
        state: AppState,
        dispatcher: Option<Arc<Dispatcher>>,
        init_error: Option<String>,
    ) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            state,
            dispatcher,
            init_error,
            reading: None,
            status: Arc::new(Mutex::new(StatusLine::idle())),
            seq: 0,
            pending: None,
            tx,
            rx,
        }
    }

    #[inline]
    pub fn loading(&self) -> bool { self.pending.is_some() }

    #[inline]
    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.text.clone()).unwrap_or_default()
    }

    /// Validate and, if the form passes, start a submission in the background.
    pub fn submit(&mut self, ctx: &egui::Context) {
        let form = &mut self.state.gui.form;
        let Some(req) = form.submit() else { return };

        let Some(dispatcher) = self.dispatcher.clone() else {
            form.errors.push(self.init_error.clone().unwrap_or_else(|| s!("Not ready")));
            return;
        };

        self.seq += 1;
        let seq = self.seq;
        self.pending = Some(seq);
        self.reading = None;

        let tx = self.tx.clone();
        let ctx = ctx.clone();
        let mut prog = GuiProgress::new(self.status.clone(), seq, ctx.clone());

        let spawned = thread::Builder::new()
            .name(format!("submit-{seq}"))
            .spawn(move || {
                let delivery = dispatcher.submit(&req, &mut prog);
                let _ = tx.send((seq, delivery));
                ctx.request_repaint();
            });

        if let Err(e) = spawned {
            loge!("Submit: Thread spawn failed: {}", e);
            self.pending = None;
            self.state.gui.form.errors.push(e.to_string());
        }
    }

    /// Drain finished submissions. Only the newest one is shown.
    pub fn poll(&mut self) {
        while let Ok((seq, delivery)) = self.rx.try_recv() {
            if self.pending != Some(seq) {
                logd!("Submit: Dropping stale result seq={} (latest={})", seq, self.seq);
                continue;
            }
            self.pending = None;
            match delivery {
                Ok(reading) => self.reading = Some(reading),
                Err(msg) => self.state.gui.form.errors = vec![msg],
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll();

        egui::CentralPanel::default().show(ctx, |ui| {
            components::form_panel::draw(ui, self);

            ui.separator();

            components::result_panel::draw(ui, self);
        });
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn reading(zone: &str) -> NormalizedReading {
        NormalizedReading { zone: s!(zone), carbon: json!(1), fossil_fuel: json!(2) }
    }

    #[test]
    fn poll_shows_only_the_newest_submission() {
        let mut app = App::with_dispatcher(AppState::default(), None, None);
        // Two submissions in flight; the second is current.
        app.seq = 2;
        app.pending = Some(2);
        app.status.lock().unwrap().set(2, "Loading…");

        app.tx.send((1, Ok(reading("OLD")))).unwrap();
        app.poll();
        assert!(app.reading.is_none());
        assert!(app.loading());
        assert_eq!(app.status_text(), "Loading…");

        app.tx.send((2, Err(s!("boom")))).unwrap();
        app.poll();
        assert!(app.reading.is_none());
        assert_eq!(app.state.gui.form.errors, vec![s!("boom")]);
        assert!(!app.loading());
    }

    #[test]
    fn submit_without_dispatcher_reports_init_error() {
        let mut app = App::with_dispatcher(AppState::default(), None, Some(s!("no client")));
        app.state.gui.form.input.data_type = s!("carbon-intensity");
        app.state.gui.form.input.region_code = s!("CM");

        app.submit(&egui::Context::default());
        assert!(!app.loading());
        assert_eq!(app.state.gui.form.errors, vec![s!("no client")]);
    }
}
