//! Directory controller
//!
//! A single tokio task owns the `DirectoryState`, the debounce deadline and
//! the in-flight vendor load. Callers talk to it through a `DirectoryHandle`;
//! commands are processed one at a time in arrival order, and every change is
//! published as a `DirectoryView` on a watch channel.

use std::sync::Arc;

use shared::{
    session_debug, session_info, session_warn, DirectoryConfig, DirectoryView, IndustryFilter, SessionId,
    SharedResult, Vendor,
};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::core::debounce::wait_for_deadline;
use crate::core::{DebounceTimer, DirectoryState};
use crate::error::{DirectoryError, DirectoryResult};
use crate::traits::VendorSource;

/// Commands accepted by the controller task
#[derive(Debug, Clone, PartialEq)]
pub enum DirectoryCommand {
    SetSearchInput(String),
    SelectIndustry(IndustryFilter),
    SetVerifiedOnly(bool),
    SetPendingOnly(bool),
    ClearFilters,
    Reload,
    Shutdown,
}

/// Result of one load attempt, tagged with the load it belongs to
struct LoadOutcome {
    generation: u64,
    result: SharedResult<Vec<Vendor>>,
}

/// Controller task state. Constructed and driven only by `spawn`.
pub struct DirectoryController<S: VendorSource + 'static> {
    session: SessionId,
    source: Arc<S>,
    state: DirectoryState,
    debounce: DebounceTimer,
    commands: mpsc::Receiver<DirectoryCommand>,
    loads_tx: mpsc::UnboundedSender<LoadOutcome>,
    loads_rx: mpsc::UnboundedReceiver<LoadOutcome>,
    load_generation: u64,
    load_task: Option<JoinHandle<()>>,
    views: watch::Sender<DirectoryView>,
}

impl<S: VendorSource + 'static> DirectoryController<S> {
    /// Start a controller task and begin the initial load
    pub fn spawn(source: S, config: DirectoryConfig) -> DirectoryResult<DirectoryHandle> {
        config.validate()?;

        let session = SessionId::new();
        let (commands_tx, commands_rx) = mpsc::channel(config.command_buffer);
        let (loads_tx, loads_rx) = mpsc::unbounded_channel();
        let (views_tx, views_rx) = watch::channel(DirectoryView::initial());

        let controller = Self {
            session,
            source: Arc::new(source),
            state: DirectoryState::new(),
            debounce: DebounceTimer::new(config.debounce()),
            commands: commands_rx,
            loads_tx,
            loads_rx,
            load_generation: 0,
            load_task: None,
            views: views_tx,
        };

        let task = tokio::spawn(controller.run());

        Ok(DirectoryHandle {
            session,
            commands: commands_tx,
            views: views_rx,
            task,
        })
    }

    async fn run(mut self) {
        session_info!(
            self.session,
            "🚀 Directory controller started (source: {}, debounce: {}ms)",
            self.source.describe(),
            self.debounce.delay().as_millis()
        );

        self.start_load();
        self.publish();

        loop {
            let deadline = self.debounce.deadline();

            tokio::select! {
                // Commands win ties so a keystroke landing on the deadline restarts it
                biased;

                command = self.commands.recv() => match command {
                    Some(DirectoryCommand::Shutdown) | None => break,
                    Some(command) => self.handle_command(command),
                },

                Some(outcome) = self.loads_rx.recv() => self.handle_load(outcome),

                _ = wait_for_deadline(deadline) => self.handle_deadline(),
            }

            self.publish();
        }

        self.teardown();
    }

    fn handle_command(&mut self, command: DirectoryCommand) {
        match command {
            DirectoryCommand::SetSearchInput(value) => {
                if self.state.set_search_input(value) {
                    self.debounce.schedule(Instant::now());
                    session_debug!(
                        self.session,
                        raw = self.state.criteria().raw_input(),
                        "⌨️ Search input changed, debounce restarted"
                    );
                }
            }
            DirectoryCommand::SelectIndustry(industry) => {
                self.state.select_industry(industry);
            }
            DirectoryCommand::SetVerifiedOnly(value) => {
                self.state.set_verified_only(value);
            }
            DirectoryCommand::SetPendingOnly(value) => {
                self.state.set_pending_only(value);
            }
            DirectoryCommand::ClearFilters => {
                let cancelled = self.debounce.cancel();
                self.state.clear_filters();
                session_debug!(self.session, cancelled_debounce = cancelled, "🧹 Filters cleared");
            }
            DirectoryCommand::Reload => self.start_load(),
            // Handled by the run loop
            DirectoryCommand::Shutdown => {}
        }
    }

    fn handle_deadline(&mut self) {
        if !self.debounce.fire(Instant::now()) {
            return;
        }
        if self.state.commit_search() {
            session_debug!(
                self.session,
                term = self.state.criteria().search_term(),
                matches = self.state.filtered().len(),
                "🔎 Search term committed"
            );
        }
    }

    fn start_load(&mut self) {
        if let Some(previous) = self.load_task.take() {
            previous.abort();
        }

        self.load_generation += 1;
        self.state.begin_load();

        let generation = self.load_generation;
        let source = Arc::clone(&self.source);
        let loads_tx = self.loads_tx.clone();

        session_debug!(self.session, generation, "📥 Loading vendors");
        self.load_task = Some(tokio::spawn(async move {
            let result = source.load_vendors().await;
            // The controller may already be gone
            let _ = loads_tx.send(LoadOutcome { generation, result });
        }));
    }

    fn handle_load(&mut self, outcome: LoadOutcome) {
        if outcome.generation != self.load_generation {
            session_debug!(self.session, generation = outcome.generation, "Discarding superseded load");
            return;
        }
        self.load_task = None;

        let result = match outcome.result {
            // finish_load records its own failure when the collection is invalid
            Ok(vendors) => self.state.finish_load(vendors),
            Err(e) => {
                self.state.fail_load(e.to_string());
                Err(e)
            }
        };

        match result {
            Ok(count) => {
                session_info!(
                    self.session,
                    vendors = count,
                    matches = self.state.filtered().len(),
                    "✅ Vendors loaded"
                );
            }
            Err(e) => {
                session_warn!(
                    self.session,
                    error = %e,
                    vendors = self.state.vendors().len(),
                    "⚠️ Vendor load failed, keeping previous collection"
                );
            }
        }
    }

    fn publish(&self) {
        let view = self.state.view();
        self.views.send_if_modified(|current| {
            if *current == view {
                false
            } else {
                *current = view;
                true
            }
        });
    }

    fn teardown(&mut self) {
        if self.debounce.cancel() {
            session_debug!(self.session, "Pending search commit dropped at teardown");
        }
        if let Some(task) = self.load_task.take() {
            task.abort();
        }
        session_info!(self.session, "🛑 Directory controller stopped");
    }
}

/// Caller side of a running controller
pub struct DirectoryHandle {
    session: SessionId,
    commands: mpsc::Sender<DirectoryCommand>,
    views: watch::Receiver<DirectoryView>,
    task: JoinHandle<()>,
}

impl DirectoryHandle {
    pub fn session(&self) -> SessionId {
        self.session
    }

    pub async fn send(&self, command: DirectoryCommand) -> DirectoryResult<()> {
        self.commands
            .send(command)
            .await
            .map_err(|_| DirectoryError::ControllerClosed)
    }

    /// Record a keystroke; the search term commits after the debounce delay
    pub async fn set_search_input(&self, value: impl Into<String>) -> DirectoryResult<()> {
        self.send(DirectoryCommand::SetSearchInput(value.into())).await
    }

    pub async fn select_industry(&self, industry: impl Into<IndustryFilter>) -> DirectoryResult<()> {
        self.send(DirectoryCommand::SelectIndustry(industry.into())).await
    }

    pub async fn set_verified_only(&self, value: bool) -> DirectoryResult<()> {
        self.send(DirectoryCommand::SetVerifiedOnly(value)).await
    }

    pub async fn set_pending_only(&self, value: bool) -> DirectoryResult<()> {
        self.send(DirectoryCommand::SetPendingOnly(value)).await
    }

    pub async fn clear_filters(&self) -> DirectoryResult<()> {
        self.send(DirectoryCommand::ClearFilters).await
    }

    pub async fn reload(&self) -> DirectoryResult<()> {
        self.send(DirectoryCommand::Reload).await
    }

    /// Latest published view
    pub fn view(&self) -> DirectoryView {
        self.views.borrow().clone()
    }

    /// Receiver that is notified on every published change
    pub fn subscribe(&self) -> watch::Receiver<DirectoryView> {
        self.views.clone()
    }

    /// Wait until a published view satisfies `predicate`
    pub async fn wait_for<F>(&self, predicate: F) -> DirectoryResult<DirectoryView>
    where
        F: FnMut(&DirectoryView) -> bool,
    {
        let mut views = self.views.clone();
        let view = views
            .wait_for(predicate)
            .await
            .map_err(|_| DirectoryError::ControllerClosed)?;
        Ok(view.clone())
    }

    /// Stop the controller and wait for it to finish.
    /// A pending debounce is dropped, never committed.
    pub async fn shutdown(self) -> DirectoryResult<()> {
        // Already stopped is fine
        let _ = self.commands.send(DirectoryCommand::Shutdown).await;
        self.task.await.map_err(|e| DirectoryError::TaskFailed {
            message: e.to_string(),
        })
    }
}
