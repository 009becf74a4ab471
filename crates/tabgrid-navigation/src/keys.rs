//! Keyboard surface of the switcher
//!
//! | Key | Command |
//! |---|---|
//! | Tab / Shift+Tab | next / previous |
//! | ArrowRight / ArrowLeft | next / previous |
//! | ArrowDown / ArrowUp | grid down / up |
//! | Delete | close selected |
//! | Enter | activate selected |
//! | Escape | dismiss |

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::command::{NavCommand, SwitcherCommand};
use crate::error::NavigationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Tab,
    ArrowRight,
    ArrowLeft,
    ArrowDown,
    ArrowUp,
    Delete,
    Enter,
    Escape,
}

impl Key {
    pub fn as_str(&self) -> &'static str {
        match self {
            Key::Tab => "Tab",
            Key::ArrowRight => "ArrowRight",
            Key::ArrowLeft => "ArrowLeft",
            Key::ArrowDown => "ArrowDown",
            Key::ArrowUp => "ArrowUp",
            Key::Delete => "Delete",
            Key::Enter => "Enter",
            Key::Escape => "Escape",
        }
    }
}

impl FromStr for Key {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tab" => Ok(Key::Tab),
            "arrowright" | "right" => Ok(Key::ArrowRight),
            "arrowleft" | "left" => Ok(Key::ArrowLeft),
            "arrowdown" | "down" => Ok(Key::ArrowDown),
            "arrowup" | "up" => Ok(Key::ArrowUp),
            "delete" | "del" => Ok(Key::Delete),
            "enter" | "return" => Ok(Key::Enter),
            "escape" | "esc" => Ok(Key::Escape),
            _ => Err(NavigationError::UnknownKey(s.to_string())),
        }
    }
}

/// A key press with the modifier state that matters to the switcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyInput {
    pub key: Key,
    pub shift: bool,
}

impl KeyInput {
    pub fn new(key: Key) -> Self {
        Self { key, shift: false }
    }

    pub fn shifted(key: Key) -> Self {
        Self { key, shift: true }
    }

    /// Command bound to this key press
    pub fn command(&self) -> SwitcherCommand {
        match (self.key, self.shift) {
            (Key::Tab, true) => SwitcherCommand::Navigate(NavCommand::Previous),
            (Key::Tab, false) => SwitcherCommand::Navigate(NavCommand::Next),
            (Key::ArrowRight, _) => SwitcherCommand::Navigate(NavCommand::Next),
            (Key::ArrowLeft, _) => SwitcherCommand::Navigate(NavCommand::Previous),
            (Key::ArrowDown, _) => SwitcherCommand::Navigate(NavCommand::Down),
            (Key::ArrowUp, _) => SwitcherCommand::Navigate(NavCommand::Up),
            (Key::Delete, _) => SwitcherCommand::CloseSelected,
            (Key::Enter, _) => SwitcherCommand::ActivateSelected,
            (Key::Escape, _) => SwitcherCommand::Dismiss,
        }
    }
}

impl From<Key> for KeyInput {
    fn from(key: Key) -> Self {
        Self::new(key)
    }
}

/// Parses `Tab`, `Shift+Tab`, `down`, ...
impl FromStr for KeyInput {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut parts = s.rsplitn(2, '+');
        let key = parts.next().unwrap_or_default().parse::<Key>()?;

        match parts.next() {
            None => Ok(KeyInput::new(key)),
            Some(modifier) if modifier.trim().eq_ignore_ascii_case("shift") => {
                Ok(KeyInput::shifted(key))
            }
            Some(_) => Err(NavigationError::UnknownKey(s.to_string())),
        }
    }
}

impl std::fmt::Display for KeyInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.shift {
            write!(f, "Shift+{}", self.key.as_str())
        } else {
            f.write_str(self.key.as_str())
        }
    }
}
