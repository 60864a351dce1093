//! Keyboard input and the refresh timer, merged into one event stream.
//!
//! [`EventPump`] is the single consumer of both sources. It never emits a
//! tick while key input is pending, so a quit key always wins over a timer
//! deadline that has already passed.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Events the tick driver reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The refresh interval elapsed.
    Tick,
    /// The user asked to quit.
    Quit,
}

/// Source of key presses.
pub trait KeySource {
    /// Wait up to `timeout` for a key press. `Ok(None)` means the timeout
    /// elapsed without one.
    fn next_key(&mut self, timeout: Duration) -> Result<Option<KeyEvent>>;
}

/// Key presses read from the terminal via crossterm.
#[derive(Debug, Default)]
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn next_key(&mut self, timeout: Duration) -> Result<Option<KeyEvent>> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !event::poll(remaining)? {
                return Ok(None);
            }
            // Resize and mouse events are redrawn on the next tick.
            if let TermEvent::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(Some(key));
                }
            }
        }
    }
}

/// Scripted key presses, for driving the pump without a terminal.
///
/// Each `None` entry stands for a timeout.
#[derive(Debug, Default)]
pub struct ScriptedKeys {
    script: VecDeque<Option<KeyEvent>>,
}

impl ScriptedKeys {
    pub fn new<I: IntoIterator<Item = Option<KeyEvent>>>(script: I) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self, _timeout: Duration) -> Result<Option<KeyEvent>> {
        Ok(self.script.pop_front().flatten())
    }
}

/// Returns true for the keys that stop the dashboard.
pub fn is_quit_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Merges key input and a fixed-rate timer into a serial event stream.
#[derive(Debug)]
pub struct EventPump<K> {
    keys: K,
    tick_rate: Duration,
    next_tick: Instant,
}

impl<K: KeySource> EventPump<K> {
    /// Create a pump whose first tick is due immediately.
    pub fn new(keys: K, tick_rate: Duration) -> Self {
        Self {
            keys,
            tick_rate,
            next_tick: Instant::now(),
        }
    }

    /// Block until the next event.
    ///
    /// Keys other than quit keys are discarded. A tick that is overdue
    /// because a refresh ran long is emitted once; missed ticks are not
    /// replayed.
    pub fn next_event(&mut self) -> Result<Event> {
        loop {
            let timeout = self.next_tick.saturating_duration_since(Instant::now());
            match self.keys.next_key(timeout)? {
                Some(key) if is_quit_key(&key) => return Ok(Event::Quit),
                Some(_) => continue,
                None => {
                    let now = Instant::now();
                    self.next_tick = (self.next_tick + self.tick_rate).max(now);
                    return Ok(Event::Tick);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn quit_keys() {
        assert!(is_quit_key(&key(KeyCode::Char('q'))));
        assert!(is_quit_key(&key(KeyCode::Esc)));
        assert!(is_quit_key(&KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!is_quit_key(&key(KeyCode::Char('c'))));
        assert!(!is_quit_key(&key(KeyCode::Enter)));
    }

    #[test]
    fn timeout_becomes_tick() {
        let mut pump = EventPump::new(ScriptedKeys::new([None, None]), Duration::from_secs(1));
        assert_eq!(pump.next_event().unwrap(), Event::Tick);
        assert_eq!(pump.next_event().unwrap(), Event::Tick);
    }

    #[test]
    fn pending_quit_wins_over_due_tick() {
        // First tick is due immediately, but the key is already waiting.
        let keys = ScriptedKeys::new([Some(key(KeyCode::Char('q'))), None]);
        let mut pump = EventPump::new(keys, Duration::from_secs(1));
        assert_eq!(pump.next_event().unwrap(), Event::Quit);
    }

    #[test]
    fn other_keys_are_ignored() {
        let keys = ScriptedKeys::new([
            Some(key(KeyCode::Char('x'))),
            Some(key(KeyCode::Down)),
            None,
            Some(key(KeyCode::Char('q'))),
        ]);
        let mut pump = EventPump::new(keys, Duration::from_secs(1));
        assert_eq!(pump.next_event().unwrap(), Event::Tick);
        assert_eq!(pump.next_event().unwrap(), Event::Quit);
    }

    #[test]
    fn next_tick_is_never_in_the_past() {
        let mut pump = EventPump::new(ScriptedKeys::new([None]), Duration::from_millis(1));
        let before = Instant::now();
        pump.next_event().unwrap();
        assert!(pump.next_tick >= before);
    }
}
