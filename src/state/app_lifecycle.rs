//! Application lifecycle.
//!
//! - `new()` - Creates the application and mounts the initial key
//! - `run()` - Main event loop
//! - `resolve_view()` - One acquisition cycle without a terminal

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

use crate::client::TransactionFetcher;
use crate::presenter::TxView;
use crate::source::TransactionSource;
use crate::tui::Tui;
use crate::ui;

use super::{App, AppConfig, AppMessage, NavigationState, StartupOptions, UiState};

/// Interval between redraws and toast countdown steps.
const TICK_RATE: Duration = Duration::from_millis(100);

// ============================================================================
// Lifecycle Methods
// ============================================================================

impl<F: TransactionFetcher> App<F> {
    /// Creates the application around an already chosen data source.
    ///
    /// A live source starts fetching the startup query right away, so this
    /// must run inside a tokio runtime.
    #[must_use]
    pub fn new(config: AppConfig, source: TransactionSource<F>, options: StartupOptions) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        let network_config = options
            .network
            .unwrap_or_else(|| config.network.clone());
        let available_networks = config.get_all_networks();

        tracing::info!(
            network = %network_config,
            source = source.kind().as_str(),
            "starting lazysui"
        );

        let mut app = Self {
            nav: NavigationState::new(),
            ui: UiState::new(),
            query: options.query,
            network_config,
            available_networks,
            source,
            config,
            persist_config: options.persist_config,
            exit: false,
            message_tx,
            message_rx,
        };
        app.remount();
        app
    }

    /// Runs the main application loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal operations fail.
    pub async fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        if self.query.is_none() {
            self.ui.open_search(crate::domain::Category::default());
        }

        let mut last_tick = Instant::now();
        terminal.draw(|frame| ui::render(self, frame))?;

        while !self.exit {
            let redraw = self.process_messages();

            let timeout = TICK_RATE
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_secs(0));

            let mut handled_input = false;
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.handle_key_event(key);
                        handled_input = true;
                    }
                    Event::Resize(_, _) => handled_input = true,
                    _ => {}
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                self.ui.tick_toast();
                last_tick = Instant::now();
                terminal.draw(|frame| ui::render(self, frame))?;
            } else if redraw || handled_input {
                terminal.draw(|frame| ui::render(self, frame))?;
            }

            // Keep the runtime's fetch tasks moving between polls.
            tokio::task::yield_now().await;
        }

        Ok(())
    }

    /// Drains pending messages from background tasks.
    ///
    /// Returns `true` if anything changed.
    pub fn process_messages(&mut self) -> bool {
        let mut changed = false;
        while let Ok(message) = self.message_rx.try_recv() {
            changed |= self.apply_message(message);
        }
        changed
    }

    pub(super) fn apply_message(&mut self, message: AppMessage) -> bool {
        match message {
            AppMessage::TransactionsFetched(done) => {
                let applied = self.source.complete(done);
                if applied {
                    self.sync_selection();
                }
                applied
            }
        }
    }

    /// Runs one acquisition cycle for the current key and returns the view.
    ///
    /// Used by the plain-text mode; waits for the live fetch to settle.
    pub async fn resolve_view(&mut self) -> TxView {
        while matches!(self.current_view(), TxView::Loading) {
            match self.message_rx.recv().await {
                Some(message) => {
                    self.apply_message(message);
                }
                None => break,
            }
        }
        self.current_view()
    }

    // ========================================================================
    // Mounting
    // ========================================================================

    /// Mounts the current key on the source and resets the selection.
    pub(crate) fn remount(&mut self) {
        self.nav.reset();
        if let Some(key) = self.current_key() {
            tracing::info!(
                id = %key.id,
                network = %key.network,
                category = %key.category,
                "showing transactions"
            );
            self.source.mount(&key, &self.message_tx);
        }
        self.sync_selection();
    }

    /// Keeps the selection inside the groups of the current view.
    pub(crate) fn sync_selection(&mut self) {
        let lens = self.group_lens();
        self.nav.sync(lens);
    }

    /// Number of links in each of the two groups of the current view.
    pub(crate) fn group_lens(&self) -> [usize; 2] {
        let view = self.current_view();
        let groups = view.groups();
        [
            groups.first().map_or(0, |g| g.links.len()),
            groups.get(1).map_or(0, |g| g.links.len()),
        ]
    }
}
