//! Distribution logos.
//!
//! Each logo is a list of template lines where `{cN}` marks a switch to
//! the N-th colour of the logo. Every line has the same visible width.

mod alpine;
mod arch;
mod centos;
mod debian;
mod kali;
mod linux;
mod linuxmint;
mod ubuntu;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use unicode_width::UnicodeWidthStr;

use crate::core::distributions::Distributions;
use crate::ui::colors::Colors;

static COLOR_SLOT_REGEXP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{c(\d+)\}").expect("valid color slot pattern"));

#[derive(Debug, Clone, Copy)]
pub struct Logo {
    pub colors: &'static [Colors],
    pub lines: &'static [&'static str],
}

pub fn logo_for(distribution: Distributions) -> &'static Logo {
    match distribution {
        Distributions::Alpine => &alpine::LOGO,
        Distributions::Arch => &arch::LOGO,
        Distributions::Centos => &centos::LOGO,
        Distributions::Debian => &debian::LOGO,
        Distributions::Kali => &kali::LOGO,
        Distributions::Linux => &linux::LOGO,
        Distributions::LinuxMint => &linuxmint::LOGO,
        Distributions::Ubuntu => &ubuntu::LOGO,
    }
}

/// Visible width of a logo, measured on its first line
pub fn get_logo_width<S: AsRef<str>>(lines: &[S]) -> usize {
    lines
        .first()
        .map(|line| COLOR_SLOT_REGEXP.replace_all(line.as_ref(), "").width())
        .unwrap_or(0)
}

/// Replace every `{cN}` slot with `colors[N]`; unknown slots become empty
pub fn fill_color_slots(line: &str, colors: &[String]) -> String {
    COLOR_SLOT_REGEXP
        .replace_all(line, |captures: &Captures| {
            captures[1]
                .parse::<usize>()
                .ok()
                .and_then(|index| colors.get(index))
                .cloned()
                .unwrap_or_default()
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_distribution_has_a_logo() {
        for distribution in Distributions::ALL {
            let logo = logo_for(distribution);
            assert!(!logo.lines.is_empty());
            assert!(!logo.colors.is_empty());
        }
    }

    #[test]
    fn test_logo_lines_share_width_and_known_slots() {
        for distribution in Distributions::ALL {
            let logo = logo_for(distribution);
            let width = get_logo_width(logo.lines);

            for line in logo.lines {
                assert_eq!(
                    get_logo_width(&[line]),
                    width,
                    "{:?}: {:?}",
                    distribution,
                    line
                );
                for captures in COLOR_SLOT_REGEXP.captures_iter(line) {
                    let index: usize = captures[1].parse().unwrap();
                    assert!(index < logo.colors.len(), "{:?}: {:?}", distribution, line);
                }
            }
        }
    }

    #[test]
    fn test_fill_color_slots() {
        let colors = vec!["<a>".to_string(), "<b>".to_string()];
        assert_eq!(fill_color_slots("{c0}x{c1}y{c7}z", &colors), "<a>x<b>yz");
        assert_eq!(fill_color_slots("{c0}plain", &[]), "plain");
    }

    #[test]
    fn test_width_ignores_slots() {
        assert_eq!(get_logo_width(&["{c0}ab{c1}cd"]), 4);
        assert_eq!(get_logo_width::<&str>(&[]), 0);
    }
}
