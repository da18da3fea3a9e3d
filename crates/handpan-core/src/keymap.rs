use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_STEP_SIZE, DEFAULT_ZOOM_IN_FACTOR, DEFAULT_ZOOM_OUT_FACTOR};
use crate::error::{Result, ViewportError};
use crate::gesture::Command;

/// A single key-to-command binding.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeyBinding {
    pub key: char,
    pub command: Command,
}

/// Keyboard layout for manual navigation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub bindings: Vec<KeyBinding>,
}

impl Default for KeyBindings {
    /// `e`/`r` zoom in/out, `w`/`a`/`s`/`d` pan up/left/down/right.
    fn default() -> Self {
        let step = DEFAULT_STEP_SIZE;
        let bind = |key, command| KeyBinding { key, command };
        Self {
            bindings: vec![
                bind('e', Command::Zoom { factor: DEFAULT_ZOOM_IN_FACTOR }),
                bind('r', Command::Zoom { factor: DEFAULT_ZOOM_OUT_FACTOR }),
                bind('w', Command::Move { dx: 0, dy: -step }),
                bind('a', Command::Move { dx: -step, dy: 0 }),
                bind('s', Command::Move { dx: 0, dy: step }),
                bind('d', Command::Move { dx: step, dy: 0 }),
            ],
        }
    }
}

impl KeyBindings {
    /// Command bound to `key`. Later bindings override earlier ones.
    pub fn lookup(&self, key: char) -> Result<Command> {
        self.bindings
            .iter()
            .rev()
            .find(|b| b.key == key)
            .map(|b| b.command)
            .ok_or(ViewportError::UnknownKey(key))
    }

    /// Translate a key string into commands, splitting out keys with no binding.
    pub fn parse_keys(&self, keys: &str) -> (Vec<Command>, Vec<char>) {
        let mut commands = Vec::new();
        let mut unknown = Vec::new();
        for key in keys.chars().filter(|c| !c.is_whitespace()) {
            match self.lookup(key) {
                Ok(command) => commands.push(command),
                Err(_) => unknown.push(key),
            }
        }
        (commands, unknown)
    }
}
