//! Terminal emulator, followed by a palette swatch when colours are on.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::env;

use super::{parse_options, Entry, Options};
use crate::core::context::Context;
use crate::error::Result;
use crate::ui::colors::{Colors, Palette};
use crate::ui::lines::LineSink;

/// Variables only set by one particular emulator
const TERM_DICT: [(&str, &str); 7] = [
    ("ALACRITTY_LOG", "Alacritty"),
    ("GNOME_TERMINAL_SCREEN", "GNOME Terminal"),
    ("GUAKE_TAB_UUID", "Guake"),
    ("KITTY_WINDOW_ID", "Kitty"),
    ("KONSOLE_VERSION", "Konsole"),
    ("MLTERM", "MLTERM"),
    ("TERMINATOR_UUID", "Terminator"),
];

static COLORTERM_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:kmscon|rxvt)").expect("valid COLORTERM pattern"));

static TERM_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^xterm-termite$").expect("valid TERM pattern"));

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TerminalOptions {
    /// Draw the swatch with full blocks instead of `#`
    pub use_unicode: bool,
}

impl Default for TerminalOptions {
    fn default() -> Self {
        Self { use_unicode: true }
    }
}

pub struct Terminal {
    name: String,
    options: TerminalOptions,
    value: Option<String>,
}

impl Terminal {
    pub fn new(name: String, options: &Options, _ctx: &Context) -> Self {
        let options = parse_options(&name, options);
        let value = detect_terminal_emulator(|key| env::var(key).ok().filter(|v| !v.is_empty()));
        Self {
            name,
            options,
            value,
        }
    }

    pub fn boxed(name: String, options: &Options, ctx: &Context) -> Result<Box<dyn Entry>> {
        Ok(Box::new(Self::new(name, options, ctx)))
    }
}

/// Guess the emulator from environment variables, most specific first
fn detect_terminal_emulator<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(program) = lookup("TERM_PROGRAM") {
        return Some(match lookup("TERM_PROGRAM_VERSION") {
            Some(version) => format!("{} {}", program, version),
            None => program,
        });
    }

    if let Some(colorterm) = lookup("COLORTERM").filter(|c| COLORTERM_PATTERN.is_match(c)) {
        return Some(colorterm);
    }

    let term = lookup("TERM");
    if let Some(term) = term
        .as_ref()
        .filter(|term| TERM_PATTERN.is_match(term) || !term.starts_with("xterm"))
    {
        return Some(term.clone());
    }

    TERM_DICT
        .iter()
        .find(|(variable, _)| lookup(variable).is_some())
        .map(|(_, terminal)| terminal.to_string())
        .or(term)
}

/// One normal and one bright block per colour
fn palette_swatch(palette: Palette, use_unicode: bool) -> String {
    let block = if use_unicode { "\u{2588}" } else { "#" };

    Colors::SWATCHES
        .iter()
        .map(|(normal, bright)| {
            format!(
                "{}{}",
                palette.paint(*normal, block),
                palette.paint(*bright, block)
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl Entry for Terminal {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> Value {
        self.value.clone().map(Value::String).unwrap_or(Value::Null)
    }

    fn render(&self, sink: &mut LineSink) {
        let mut text = self
            .value
            .clone()
            .unwrap_or_else(|| sink.default_strings().not_detected.clone());

        let palette = sink.palette();
        if palette.enabled() {
            text.push(' ');
            text.push_str(&palette_swatch(palette, self.options.use_unicode));
        }

        sink.append(&self.name, text);
    }
}
