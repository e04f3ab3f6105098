//! Running window manager (or Wayland compositor).

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::{Entry, Options};
use crate::core::context::Context;
use crate::error::Result;
use crate::platform::command;

/// Process name to display name
const WM_DICT: [(&str, &str); 18] = [
    ("awesome", "Awesome"),
    ("bspwm", "bspwm"),
    ("cinnamon", "Cinnamon"),
    ("dwm", "DWM"),
    ("enlightenment", "Enlightenment"),
    ("fluxbox", "Fluxbox"),
    ("herbstluftwm", "herbstluftwm"),
    ("Hyprland", "Hyprland"),
    ("i3", "i3"),
    ("icewm", "IceWM"),
    ("kwin_wayland", "KWin"),
    ("kwin_x11", "KWin"),
    ("openbox", "Openbox"),
    ("qtile", "Qtile"),
    ("spectrwm", "SpectrWM"),
    ("sway", "Sway"),
    ("xfwm4", "Xfwm"),
    ("xmonad", "Xmonad"),
];

static WMCTRL_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Name: (.*)").expect("valid wmctrl pattern"));

pub struct WindowManager {
    name: String,
    value: Option<String>,
}

impl WindowManager {
    pub fn new(name: String, _options: &Options, ctx: &Context) -> Self {
        let value = command::check_output("wmctrl", &["-m"])
            .and_then(|output| parse_wmctrl(&output))
            .or_else(|| {
                WM_DICT
                    .iter()
                    .find(|(process, _)| ctx.processes.contains(process))
                    .map(|(_, wm_name)| wm_name.to_string())
            });

        Self { name, value }
    }

    pub fn boxed(name: String, options: &Options, ctx: &Context) -> Result<Box<dyn Entry>> {
        Ok(Box::new(Self::new(name, options, ctx)))
    }
}

fn parse_wmctrl(output: &str) -> Option<String> {
    WMCTRL_NAME
        .captures(output)
        .map(|captures| captures[1].trim().to_string())
        .filter(|wm_name| !wm_name.is_empty())
}

impl Entry for WindowManager {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> Value {
        self.value.clone().map(Value::String).unwrap_or(Value::Null)
    }
}
