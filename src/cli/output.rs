use colored::Colorize;
use std::fmt;
use std::sync::{OnceLock, RwLock};

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Warning,
    Error,
    Section,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct OutputPreferences {
    pub plain: bool,
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

pub fn set_preferences(prefs: OutputPreferences) {
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
    if prefs.plain {
        colored::control::set_override(false);
    }
}

fn preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

fn label(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Success => "OK",
        MessageKind::Warning => "WARNING",
        MessageKind::Error => "ERROR",
        MessageKind::Section => "",
    }
}

/// Formats a message the way it is printed, without printing it.
pub fn styled(kind: MessageKind, message: impl fmt::Display) -> String {
    let text = message.to_string();
    let base = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        _ => format!("{}: {}", label(kind), text),
    };
    if preferences().plain {
        return base;
    }
    match kind {
        MessageKind::Section => base.bold().cyan().to_string(),
        MessageKind::Success => base.green().to_string(),
        MessageKind::Warning => base.yellow().to_string(),
        MessageKind::Error => base.red().bold().to_string(),
    }
}

/// Colors a fragment red when `alert` holds.
pub fn alert_if(alert: bool, text: impl fmt::Display) -> String {
    let text = text.to_string();
    if alert && !preferences().plain {
        text.red().to_string()
    } else {
        text
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    match kind {
        MessageKind::Warning | MessageKind::Error => eprintln!("{}", styled(kind, message)),
        _ => println!("{}", styled(kind, message)),
    }
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_output_has_labels_and_no_escape_codes() {
        set_preferences(OutputPreferences { plain: true });
        assert_eq!(styled(MessageKind::Warning, "careful"), "WARNING: careful");
        assert_eq!(styled(MessageKind::Section, " Budget "), "=== Budget ===");
        assert_eq!(alert_if(true, "over"), "over");
        assert_eq!(styled(MessageKind::Error, "broken"), "ERROR: broken");
    }
}
