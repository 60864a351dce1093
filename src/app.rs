//! Application state and the tick state machine.

use std::time::Instant;

use anyhow::{Context, Result};

use crate::broker::BrokerClient;
use crate::data::{build_rows, HistoryStore, TopicRow};
use crate::events::Event;
use crate::ui::Theme;

/// Lifecycle of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Refreshing on every tick.
    Running,
    /// Quit was requested; the main loop exits.
    Stopped,
}

/// Main application state.
///
/// Owns the broker client and the offset history for the whole process
/// lifetime. Everything else is rebuilt on every tick.
pub struct App {
    state: State,
    broker: Box<dyn BrokerClient>,
    history: HistoryStore,

    /// Rows of the last successful refresh, sorted by topic name.
    pub rows: Vec<TopicRow>,
    pub last_refresh: Option<Instant>,
    pub ticks: u64,

    // UI
    pub theme: Theme,
}

impl App {
    /// Create a new App in the `Running` state.
    pub fn new(broker: Box<dyn BrokerClient>, theme: Theme) -> Self {
        Self {
            state: State::Running,
            broker,
            history: HistoryStore::new(),
            rows: Vec::new(),
            last_refresh: None,
            ticks: 0,
            theme,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == State::Running
    }

    /// Returns a description of the broker cluster.
    pub fn source_description(&self) -> &str {
        self.broker.description()
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Apply one event.
    ///
    /// A failed refresh is returned to the caller, which treats it as fatal.
    /// The previous rows stay untouched in that case.
    pub fn handle(&mut self, event: Event) -> Result<()> {
        match (self.state, event) {
            (State::Running, Event::Tick) => self.refresh(),
            (State::Running, Event::Quit) => {
                self.quit();
                Ok(())
            }
            (State::Stopped, _) => Ok(()),
        }
    }

    /// Query the cluster and replace the table rows.
    pub fn refresh(&mut self) -> Result<()> {
        let rows = build_rows(self.broker.as_ref(), &mut self.history)
            .with_context(|| format!("refreshing topics from {}", self.broker.description()))?;

        self.ticks += 1;
        tracing::debug!(tick = self.ticks, topics = rows.len(), "refreshed topic table");

        self.rows = rows;
        self.last_refresh = Some(Instant::now());
        Ok(())
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        if self.state == State::Running {
            tracing::info!(ticks = self.ticks, "quit requested");
        }
        self.state = State::Stopped;
    }
}
