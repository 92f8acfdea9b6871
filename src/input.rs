//! Keyboard state, polled once per simulation step.
//!
//! Keys are identified by lowercased names (`"w"`, `"arrowup"`, `" "`), so
//! `W` and `w` are the same key.  Movement is read from the map every step;
//! there is no debouncing or repeat suppression.

use std::collections::HashMap;

use crossterm::event::KeyCode;

/// Movement requested for one simulation step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

#[derive(Clone, Debug, Default)]
pub struct InputState {
    keys: HashMap<String, bool>,
    /// Frame of the last press or repeat, for terminals without releases.
    last_seen: HashMap<String, u64>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: &str, frame: u64) {
        let key = key.to_lowercase();
        self.last_seen.insert(key.clone(), frame);
        self.keys.insert(key, true);
    }

    pub fn release(&mut self, key: &str) {
        let key = key.to_lowercase();
        self.last_seen.remove(&key);
        self.keys.insert(key, false);
    }

    pub fn is_pressed(&self, key: &str) -> bool {
        self.keys.get(key).copied().unwrap_or(false)
    }

    /// Release every key whose last press is more than `window` frames old.
    ///
    /// Classic terminals only repeat key-press events while a key is held,
    /// so a key that stops repeating has been let go.
    pub fn expire(&mut self, frame: u64, window: u64) {
        let stale: Vec<String> = self
            .last_seen
            .iter()
            .filter(|(_, last)| frame.saturating_sub(**last) > window)
            .map(|(k, _)| k.clone())
            .collect();
        for key in stale {
            self.release(&key);
        }
    }

    pub fn clear(&mut self) {
        self.keys.clear();
        self.last_seen.clear();
    }

    pub fn tick_input(&self) -> TickInput {
        TickInput {
            up: self.is_pressed("w") || self.is_pressed("arrowup"),
            down: self.is_pressed("s") || self.is_pressed("arrowdown"),
            left: self.is_pressed("a") || self.is_pressed("arrowleft"),
            right: self.is_pressed("d") || self.is_pressed("arrowright"),
        }
    }
}

/// Lowercased identifier for a terminal key, `None` for keys the game ignores.
pub fn key_name(code: &KeyCode) -> Option<String> {
    let name = match code {
        KeyCode::Char(c) => return Some(c.to_lowercase().collect()),
        KeyCode::Up => "arrowup",
        KeyCode::Down => "arrowdown",
        KeyCode::Left => "arrowleft",
        KeyCode::Right => "arrowright",
        KeyCode::Esc => "escape",
        KeyCode::Enter => "enter",
        _ => return None,
    };
    Some(name.to_string())
}
