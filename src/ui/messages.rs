use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

static COLOR: AtomicBool = AtomicBool::new(true);

/// Globally enable or disable ANSI sequences in messages.
pub fn set_color(enabled: bool) {
    COLOR.store(enabled, Ordering::Relaxed);
}

pub fn color_enabled() -> bool {
    COLOR.load(Ordering::Relaxed)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Warning,
    Error,
}

impl Tone {
    fn parts(self) -> (&'static str, &'static str) {
        match self {
            Tone::Info => (FG_BLUE, ICON_INFO),
            Tone::Success => (FG_GREEN, ICON_OK),
            Tone::Warning => (FG_YELLOW, ICON_WARN),
            Tone::Error => (FG_RED, ICON_ERR),
        }
    }
}

/// Render one message line without printing it.
pub fn format_line<T: fmt::Display>(tone: Tone, msg: T) -> String {
    let (color, icon) = tone.parts();
    if color_enabled() {
        format!("{}{}{} {}{}", color, BOLD, icon, RESET, msg)
    } else {
        format!("{} {}", icon, msg)
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", format_line(Tone::Info, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", format_line(Tone::Success, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", format_line(Tone::Warning, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", format_line(Tone::Error, msg));
}

/// Optional: formatted section header
pub fn header<T: fmt::Display>(msg: T) -> String {
    if color_enabled() {
        format!("{}{}====================== {}{}", FG_BLUE, BOLD, msg, RESET)
    } else {
        format!("====================== {}", msg)
    }
}
