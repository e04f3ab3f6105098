use serde_json::{json, Value};
use sysglance::core::config::DefaultStrings;
use sysglance::core::distributions::{Distributions, OsRelease};
use sysglance::core::entries::Entry;
use sysglance::ui::colors::{remove_colors, Palette};
use sysglance::ui::logos::{get_logo_width, logo_for};
use sysglance::ui::output::Output;

struct Fixed(&'static str, Value);

impl Entry for Fixed {
    fn name(&self) -> &str {
        self.0
    }

    fn value(&self) -> Value {
        self.1.clone()
    }
}

fn entries(count: usize) -> Vec<Box<dyn Entry>> {
    (0..count)
        .map(|_| Box::new(Fixed("Shell", json!("/usr/bin/fish"))) as Box<dyn Entry>)
        .collect()
}

#[test]
fn test_report_height_is_the_taller_column() {
    let output = Output::new(
        Distributions::Linux,
        &OsRelease::default(),
        Palette::new(false),
        true,
    );
    let logo_height = logo_for(Distributions::Linux).lines.len();

    let short = output.compose(output.entry_lines(&entries(2), &DefaultStrings::default()), None);
    assert_eq!(short.lines().count(), logo_height);

    let tall = output.compose(
        output.entry_lines(&entries(logo_height + 6), &DefaultStrings::default()),
        None,
    );
    assert_eq!(tall.lines().count(), logo_height + 6);
}

#[test]
fn test_report_respects_text_width() {
    let output = Output::new(
        Distributions::Ubuntu,
        &OsRelease::default(),
        Palette::new(true),
        true,
    );
    let logo_width = get_logo_width(logo_for(Distributions::Ubuntu).lines);
    let entries: Vec<Box<dyn Entry>> = vec![Box::new(Fixed(
        "Model",
        json!("A very long hardware model name that will not fit in twenty columns"),
    ))];

    let report = output.compose(output.entry_lines(&entries, &DefaultStrings::default()), Some(20));

    for line in remove_colors(&report).lines() {
        assert!(line.chars().count() <= logo_width + 3 + 20, "{:?}", line);
    }
    assert!(remove_colors(&report).contains("Model: A very..."));
    assert!(report.ends_with("\x1b[0m"));
}
