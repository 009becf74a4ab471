//! Console commands
//!
//! One command per stdin line. Key names go to the switcher as key presses;
//! everything else simulates the browser around it.
use anyhow::{anyhow, Context};
use std::str::FromStr;

use tabgrid_core::KeyInput;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    /// Key press while the page has focus
    Key(KeyInput),
    /// Global hotkey
    Toggle,
    /// Primary click on the Nth card (1-based)
    Click(usize),
    /// Click on the Nth card's dismiss control
    Close(usize),
    /// Middle click on the Nth card
    Middle(usize),
    Retry,
    /// Resize the viewport
    Width(u32),
    /// Print the window's tabs
    List,
    Quit,
}

impl FromStr for HostCommand {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(anyhow!("empty command"));
        };
        let arg = words.next();

        let command = match head.to_ascii_lowercase().as_str() {
            "toggle" => HostCommand::Toggle,
            "retry" => HostCommand::Retry,
            "tabs" | "list" => HostCommand::List,
            "quit" | "exit" => HostCommand::Quit,
            "click" => HostCommand::Click(card_number(arg)?),
            "close" => HostCommand::Close(card_number(arg)?),
            "middle" => HostCommand::Middle(card_number(arg)?),
            "width" => {
                let width = arg.context("width needs a value")?;
                HostCommand::Width(width.parse().with_context(|| format!("bad width: {}", width))?)
            }
            _ => HostCommand::Key(line.trim().parse()?),
        };

        Ok(command)
    }
}

fn card_number(arg: Option<&str>) -> anyhow::Result<usize> {
    let raw = arg.context("card number missing")?;
    match raw.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(anyhow!("bad card number: {}", raw)),
    }
}
