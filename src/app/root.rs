use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use eframe::{Frame, egui::Context};
use tokio::runtime::Runtime;

use crate::{
    Cli,
    app::{FetchReply, ViewState, normalize_symbol},
    config::API,
    data::{HttpProvider, PriceHistoryProvider},
    ui::setup_custom_visuals,
};

pub struct App {
    pub(crate) view: ViewState,
    /// Contents of the ticker text box, distinct from the active symbol
    /// until submitted.
    pub(crate) symbol_input: String,
    base_url: String,
    data_tx: Sender<FetchReply>,
    data_rx: Receiver<FetchReply>,
}

impl App {
    pub(crate) fn new(_cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let base_url = args
            .api_url
            .unwrap_or_else(|| API.base_url.to_string());
        let symbol = args
            .symbol
            .as_deref()
            .and_then(normalize_symbol)
            .unwrap_or_else(|| API.default_symbol.to_string());

        let (data_tx, data_rx) = mpsc::channel();
        let mut app = Self {
            view: ViewState::new(symbol.clone()),
            symbol_input: symbol.clone(),
            base_url,
            data_tx,
            data_rx,
        };

        // Initial mount counts as a symbol change
        app.request_fetch(symbol);
        app
    }

    /// Kick off a background fetch for a symbol. The reply comes back over
    /// the channel tagged with its generation; `ViewState` discards any
    /// reply that a newer request has overtaken.
    pub(crate) fn request_fetch(&mut self, symbol: String) {
        let generation = self.view.begin_fetch(symbol.clone());
        let tx = self.data_tx.clone();
        let base_url = self.base_url.clone();

        thread::spawn(move || {
            let rt = Runtime::new().expect("Failed to create runtime");
            let outcome = rt.block_on(async {
                let provider = HttpProvider::new(base_url);
                provider.fetch_history(&symbol).await
            });
            let _ = tx.send(FetchReply {
                generation,
                outcome,
            });
        });
    }

    /// Called when the form is submitted. A value equal to the active
    /// symbol is a no-op, as is whitespace-only input.
    pub(crate) fn submit_symbol(&mut self) {
        if let Some(symbol) = normalize_symbol(&self.symbol_input) {
            self.symbol_input = symbol.clone();
            if symbol != self.view.symbol {
                self.request_fetch(symbol);
            }
        }
    }

    fn poll_fetch_replies(&mut self) {
        while let Ok(reply) = self.data_rx.try_recv() {
            self.view.apply_fetch(reply);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        self.poll_fetch_replies();

        self.render_top_panel(ctx);
        self.render_stats_panel(ctx);
        self.render_central_panel(ctx);

        // The reply channel is only drained on frames, so keep frames
        // coming while a request is in flight.
        if self.view.loading {
            ctx.request_repaint();
        }
    }
}
