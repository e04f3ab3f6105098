use anyhow::Result;
use log::{debug, LevelFilter};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::sync::Arc;

use crate::core::config::Configuration;
use crate::core::context::Context;
use crate::core::distributions::Distributions;
use crate::core::entries::resolve_descriptors;
use crate::core::loader::load_entries;
use crate::ui::colors::{should_color_output, Palette};
use crate::ui::output::Output;

/// What the command line asked for
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    pub config_path: Option<PathBuf>,
    /// Number of `-j` flags; 0 prints the text report
    pub json_level: usize,
}

pub fn execute(options: &ReportOptions) -> Result<()> {
    let configuration = Configuration::load(options.config_path.as_deref());
    let settings = configuration.settings();
    debug!("Configuration files: {:?}", configuration.loaded_files());

    if settings.suppress_warnings {
        log::set_max_level(LevelFilter::Error);
    }

    let ctx = Arc::new(Context::collect(settings.default_strings.clone()));
    let distribution = Distributions::detect(&ctx.os_release);
    let palette = Palette::new(should_color_output(&ctx.env, io::stdout().is_terminal()));

    let requests = resolve_descriptors(&settings.entries);
    let entries = load_entries(requests, Arc::clone(&ctx), settings.parallel_loading)?;

    let output = Output::new(
        distribution,
        &ctx.os_release,
        palette,
        settings.honor_ansi_color,
    );

    if options.json_level > 0 {
        output.output_json(&entries, options.json_level)?;
    } else {
        output.output_text(&entries, &settings.default_strings)?;
    }

    Ok(())
}
