//! Command-line arguments
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "tabgrid")]
#[command(about = "Keyboard-driven tab switcher over a simulated browser window", long_about = None)]
pub struct Cli {
    #[arg(short, long, help = "JSON config file (defaults apply when omitted)")]
    pub config: Option<PathBuf>,

    #[arg(short, long, default_value_t = 1280, help = "Initial viewport width")]
    pub width: u32,

    #[arg(
        short,
        long = "tab",
        value_name = "TITLE|URL[|ICON[|PREVIEW]]",
        help = "Open a tab; repeat for more. The first one starts active"
    )]
    pub tabs: Vec<String>,
}

/// A tab to open at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSeed {
    pub title: String,
    pub url: String,
    pub icon: Option<String>,
    pub preview: Option<String>,
}

impl TabSeed {
    fn new(title: &str, url: &str) -> Self {
        Self {
            title: title.to_string(),
            url: url.to_string(),
            icon: None,
            preview: None,
        }
    }
}

/// Split a `TITLE|URL[|ICON[|PREVIEW]]` argument. A bare value is taken as
/// the URL.
pub fn parse_tab_arg(raw: &str) -> TabSeed {
    let mut parts = raw.split('|').map(str::trim);
    let first = parts.next().unwrap_or_default();

    let Some(url) = parts.next() else {
        return TabSeed::new("", first);
    };
    let optional = |part: Option<&str>| part.filter(|p| !p.is_empty()).map(str::to_string);

    TabSeed {
        icon: optional(parts.next()),
        preview: optional(parts.next()),
        ..TabSeed::new(first, url)
    }
}

/// Tabs opened when none are given
pub fn default_tabs() -> Vec<TabSeed> {
    [
        ("Inbox", "https://mail.example.com/inbox"),
        ("Docs", "https://docs.example.com/"),
        ("News", "https://news.example.com/"),
        ("Maps", "https://maps.example.com/"),
        ("Music", "https://music.example.com/"),
    ]
    .into_iter()
    .map(|(title, url)| TabSeed::new(title, url))
    .collect()
}
