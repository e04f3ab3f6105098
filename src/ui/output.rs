//! Final report: logo on the left, entries on the right, or a JSON document.

use std::env;
use std::io::{self, IsTerminal, Write};

use crate::core::config::DefaultStrings;
use crate::core::distributions::{Distributions, OsRelease};
use crate::core::entries::Entry;
use crate::error::{GlanceError, Result};
use crate::ui::colors::{escape_code_from_attrs, Colors, Palette};
use crate::ui::lines::LineSink;
use crate::ui::logos::{fill_color_slots, get_logo_width, logo_for};
use crate::ui::wrap::wrap_colored_line;

const LOGO_RIGHT_PADDING: &str = "   ";
const FALLBACK_COLUMNS: usize = 80;

const UNICODE_ERROR: &str = "Your locale or TTY does not seem to support UTF-8 encoding.\n\
Please disable Unicode within your configuration file.";

/// Text report settings for one run
pub struct Output {
    distribution: Distributions,
    logo_lines: Vec<String>,
    colors: Vec<String>,
    /// Logo's first colour, used for entry labels
    label_color: Option<Colors>,
    /// Opening sequence built from `ANSI_COLOR`, when honoured
    ansi_color: Option<String>,
    palette: Palette,
}

impl Output {
    /// Pick the distribution logo and resolve its colours.
    ///
    /// With `honor_ansi_color`, an `ANSI_COLOR` from `os-release` replaces
    /// every logo colour.
    pub fn new(
        distribution: Distributions,
        os_release: &OsRelease,
        palette: Palette,
        honor_ansi_color: bool,
    ) -> Self {
        let logo = logo_for(distribution);
        let ansi_color = os_release
            .ansi_color()
            .filter(|_| honor_ansi_color && palette.enabled())
            .map(escape_code_from_attrs);

        let colors = logo
            .colors
            .iter()
            .map(|color| match (palette.enabled(), &ansi_color) {
                (false, _) => String::new(),
                (true, Some(code)) => code.clone(),
                (true, None) => color.escape_code(),
            })
            .collect();

        Self {
            distribution,
            logo_lines: logo.lines.iter().map(|line| line.to_string()).collect(),
            colors,
            label_color: logo.colors.first().copied(),
            ansi_color,
            palette,
        }
    }

    fn label(&self, label: &str) -> String {
        let label = format!("{}:", label);
        match (&self.ansi_color, self.label_color) {
            (Some(code), _) => format!("{}{}{}", code, label, self.palette.clear()),
            (None, Some(color)) => self.palette.paint(color, label),
            (None, None) => label,
        }
    }

    /// `label: value` lines for every entry, labels coloured
    pub fn entry_lines(&self, entries: &[Box<dyn Entry>], default_strings: &DefaultStrings) -> Vec<String> {
        let mut sink = LineSink::new(default_strings.clone(), self.palette);
        for entry in entries {
            entry.render(&mut sink);
        }

        sink.into_lines()
            .into_iter()
            .map(|(label, value)| format!("{} {}", self.label(&label), value))
            .collect()
    }

    /// Assemble the report for a terminal `text_width` columns wide
    /// (`None` for unlimited)
    pub fn compose(&self, results: Vec<String>, text_width: Option<usize>) -> String {
        compose_text(
            &self.logo_lines,
            &self.colors,
            results,
            text_width,
            self.palette.clear(),
        )
    }

    pub fn logo_width(&self) -> usize {
        get_logo_width(&self.logo_lines)
    }

    /// Render every entry and print the report
    pub fn output_text(&self, entries: &[Box<dyn Entry>], default_strings: &DefaultStrings) -> Result<()> {
        let results = self.entry_lines(entries, default_strings);

        let text_width = if io::stdout().is_terminal() {
            Some(terminal_columns().saturating_sub(self.logo_width() + LOGO_RIGHT_PADDING.len()))
        } else {
            None
        };

        write_report(&self.compose(results, text_width))
    }

    /// Print the JSON document, `json_level` being the number of `-j` flags
    pub fn output_json(&self, entries: &[Box<dyn Entry>], json_level: usize) -> Result<()> {
        let document = crate::core::api::json_serialization(
            entries,
            self.distribution,
            json_level.saturating_sub(1),
        )?;
        write_report(&document)
    }
}

/// `COLUMNS` when set, else the terminal size, else 80
fn terminal_columns() -> usize {
    env::var("COLUMNS")
        .ok()
        .and_then(|columns| columns.trim().parse().ok())
        .or_else(|| crossterm::terminal::size().ok().map(|(columns, _)| columns as usize))
        .unwrap_or(FALLBACK_COLUMNS)
}

fn write_report(report: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    match writeln!(stdout, "{}", report).and_then(|_| stdout.flush()) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(_) => Err(GlanceError::render(UNICODE_ERROR)),
    }
}

/// Lay out logo lines and entry lines side by side.
///
/// The shorter column is padded, centred vertically: blank entries, or
/// blank logo lines of the logo's width. Entries are wrapped to
/// `text_width`, then each pair is joined with a three-space gap and the
/// logo colour slots are filled in.
pub fn compose_text(
    logo_lines: &[String],
    colors: &[String],
    mut results: Vec<String>,
    text_width: Option<usize>,
    clear: &str,
) -> String {
    let logo_width = get_logo_width(logo_lines);
    let mut logo: Vec<String> = logo_lines.to_vec();

    if logo.len() >= results.len() {
        let top = (logo.len() - results.len()) / 2;
        results.splice(0..0, std::iter::repeat(String::new()).take(top));
        results.resize(logo.len(), String::new());
    } else {
        let first_color = colors.first().map(String::as_str).unwrap_or("");
        let empty_line = format!("{}{}", first_color, " ".repeat(logo_width));
        let top = (results.len() - logo.len()) / 2;
        logo.splice(0..0, std::iter::repeat(empty_line.clone()).take(top));
        logo.resize(results.len(), empty_line);
    }

    let lines: Vec<String> = logo
        .iter()
        .zip(&results)
        .map(|(logo_part, entry_part)| {
            format!(
                "{}{}{}",
                fill_color_slots(logo_part, colors),
                LOGO_RIGHT_PADDING,
                wrap_colored_line(entry_part, text_width, clear)
            )
        })
        .collect();

    format!("{}{}", lines.join("\n"), clear)
}
