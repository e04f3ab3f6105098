//! Collected `(label, value)` report lines.

use crate::core::config::DefaultStrings;
use crate::ui::colors::Palette;

/// Where entries append their rendered lines
#[derive(Debug, Clone)]
pub struct LineSink {
    lines: Vec<(String, String)>,
    default_strings: DefaultStrings,
    palette: Palette,
}

impl LineSink {
    pub fn new(default_strings: DefaultStrings, palette: Palette) -> Self {
        Self {
            lines: Vec::new(),
            default_strings,
            palette,
        }
    }

    pub fn append(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.lines.push((label.into(), value.into()));
    }

    pub fn default_strings(&self) -> &DefaultStrings {
        &self.default_strings
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn lines(&self) -> &[(String, String)] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<(String, String)> {
        self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_keeps_order() {
        let mut sink = LineSink::new(DefaultStrings::default(), Palette::new(false));
        sink.append("CPU", "a");
        sink.append("CPU", "b".to_string());
        sink.append("RAM", "c");

        let labels: Vec<&str> = sink.lines().iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels, vec!["CPU", "CPU", "RAM"]);
        assert_eq!(sink.into_lines()[1].1, "b");
    }
}
