//! Icon-prefixed status lines for the terminal.
//!
//! Besides the generic levels there are two review tones: `scheduled` for
//! anything that sets a next review date and `mastered` for a problem that
//! just left the rotation. Colours are dropped when `NO_COLOR` is set.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Debug, Clone, Copy)]
enum Tone {
    Info,
    Success,
    Warning,
    Error,
    Scheduled,
    Mastered,
}

impl Tone {
    fn icon(self) -> &'static str {
        match self {
            Tone::Info => "ℹ️",
            Tone::Success => "✅",
            Tone::Warning => "⚠️",
            Tone::Error => "❌",
            Tone::Scheduled => "📅",
            Tone::Mastered => "🎉",
        }
    }

    fn colour(self) -> &'static str {
        match self {
            Tone::Info => "\x1b[34m",
            Tone::Success => "\x1b[32m",
            Tone::Warning => "\x1b[33m",
            Tone::Error => "\x1b[31m",
            Tone::Scheduled => "\x1b[36m",
            Tone::Mastered => "\x1b[35m",
        }
    }
}

/// Colours are on unless `NO_COLOR` is set.
pub fn use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

fn render<T: fmt::Display>(tone: Tone, msg: T) -> String {
    if use_color() {
        format!("{}{}{} {}{}", tone.colour(), BOLD, tone.icon(), RESET, msg)
    } else {
        format!("{} {}", tone.icon(), msg)
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", render(Tone::Info, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", render(Tone::Success, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", render(Tone::Warning, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", render(Tone::Error, msg));
}

/// A problem got a (new) review date.
pub fn scheduled<T: fmt::Display>(msg: T) {
    println!("{}", render(Tone::Scheduled, msg));
}

/// A problem ran out of repetitions and was removed.
pub fn mastered<T: fmt::Display>(msg: T) {
    println!("{}", render(Tone::Mastered, msg));
}

/// Section title, e.g. "📌 Due for review (2)".
pub fn section<T: fmt::Display>(icon: &str, title: T, count: usize) {
    if use_color() {
        println!("\n{}{} {} ({}){}", BOLD, icon, title, count, RESET);
    } else {
        println!("\n{} {} ({})", icon, title, count);
    }
}
