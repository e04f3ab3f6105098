//! Terminal colours.
//!
//! Coloured text is produced through a [`Palette`], which knows whether
//! colouring was enabled for this run. Probes never consult the environment
//! themselves.

use colored::{Color, ColoredString, Colorize};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::core::environment::Environment;

/// Matches the SGR sequences this program emits (`ESC[0m`, `ESC[1;32m`, ...)
pub static ANSI_ECMA_REGEXP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x1b\[\d+(?:(?:;\d+)+)?m").expect("valid ANSI pattern"));

/// Reset sequence appended by `colored` after every coloured string
pub const RESET: &str = "\x1b[0m";

/// Named colours, normal and bright (bold)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colors {
    RedNormal,
    RedBright,
    GreenNormal,
    GreenBright,
    YellowNormal,
    YellowBright,
    BlueNormal,
    BlueBright,
    MagentaNormal,
    MagentaBright,
    CyanNormal,
    CyanBright,
    WhiteNormal,
    WhiteBright,
}

impl Colors {
    pub fn color(self) -> Color {
        match self {
            Colors::RedNormal | Colors::RedBright => Color::Red,
            Colors::GreenNormal | Colors::GreenBright => Color::Green,
            Colors::YellowNormal | Colors::YellowBright => Color::Yellow,
            Colors::BlueNormal | Colors::BlueBright => Color::Blue,
            Colors::MagentaNormal | Colors::MagentaBright => Color::Magenta,
            Colors::CyanNormal | Colors::CyanBright => Color::Cyan,
            Colors::WhiteNormal | Colors::WhiteBright => Color::White,
        }
    }

    pub fn is_bright(self) -> bool {
        matches!(
            self,
            Colors::RedBright
                | Colors::GreenBright
                | Colors::YellowBright
                | Colors::BlueBright
                | Colors::MagentaBright
                | Colors::CyanBright
                | Colors::WhiteBright
        )
    }

    /// `text` in this colour; bright colours are rendered bold
    pub fn colorize(self, text: impl fmt::Display) -> ColoredString {
        let text = text.to_string();
        let colored = text.as_str().color(self.color());
        if self.is_bright() {
            colored.bold()
        } else {
            colored
        }
    }

    /// Opening sequence only, as used by the logo colour slots
    pub fn escape_code(self) -> String {
        let attrs = if self.is_bright() {
            format!("1;{}", self.color().to_fg_str())
        } else {
            self.color().to_fg_str().into_owned()
        };
        escape_code_from_attrs(&attrs)
    }

    /// Normal/bright pairs used by the terminal palette swatch, white first
    pub const SWATCHES: [(Colors, Colors); 7] = [
        (Colors::WhiteNormal, Colors::WhiteBright),
        (Colors::CyanNormal, Colors::CyanBright),
        (Colors::MagentaNormal, Colors::MagentaBright),
        (Colors::BlueNormal, Colors::BlueBright),
        (Colors::YellowNormal, Colors::YellowBright),
        (Colors::GreenNormal, Colors::GreenBright),
        (Colors::RedNormal, Colors::RedBright),
    ];
}

/// Build an escape sequence from raw display attributes (`"1;32"`)
pub fn escape_code_from_attrs(display_attrs: &str) -> String {
    format!("\x1b[{}m", display_attrs)
}

/// Strip every SGR sequence from `text`
pub fn remove_colors(text: &str) -> String {
    ANSI_ECMA_REGEXP.replace_all(text, "").into_owned()
}

/// Band a value falls into, given two ascending breakpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Ok,
    Warn,
    Danger,
}

impl Level {
    /// `value < warn_bpt` is ok, `value >= danger_bpt` is danger, warn in between.
    ///
    /// Equal breakpoints make the warn band unreachable.
    pub fn from_breakpoints(value: f64, warn_bpt: f64, danger_bpt: f64) -> Self {
        // Insertion point to the right of equal elements, as a bisection would give.
        let position = [warn_bpt, danger_bpt]
            .iter()
            .filter(|breakpoint| **breakpoint <= value)
            .count();

        match position {
            0 => Level::Ok,
            1 => Level::Warn,
            _ => Level::Danger,
        }
    }

    pub fn color(self) -> Colors {
        match self {
            Level::Ok => Colors::GreenNormal,
            Level::Warn => Colors::YellowNormal,
            Level::Danger => Colors::RedNormal,
        }
    }
}

/// Colour for a value given its warning and danger breakpoints
pub fn get_level_color(value: f64, warn_bpt: f64, danger_bpt: f64) -> Colors {
    Level::from_breakpoints(value, warn_bpt, danger_bpt).color()
}

/// Decide once whether this run emits colour.
///
/// `CLICOLOR_FORCE` wins over everything, `NO_COLOR` disables, otherwise
/// colour requires an interactive stdout and `CLICOLOR` not set to `0`.
pub fn should_color_output(env: &Environment, stdout_is_tty: bool) -> bool {
    if env.clicolor_force {
        return true;
    }

    if env.no_color {
        return false;
    }

    stdout_is_tty && env.clicolor
}

/// Colours text, or leaves it plain when colour is disabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// An enabled palette forces `colored` on for the rest of the process,
    /// whatever the stdout type.
    pub fn new(enabled: bool) -> Self {
        if enabled {
            colored::control::set_override(true);
        }
        Self { enabled }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Reset sequence, empty when colour is disabled
    pub fn clear(&self) -> &'static str {
        if self.enabled {
            RESET
        } else {
            ""
        }
    }

    /// `text` in `color`, followed by a reset
    pub fn paint(&self, color: Colors, text: impl fmt::Display) -> String {
        if self.enabled {
            color.colorize(text).to_string()
        } else {
            text.to_string()
        }
    }
}
