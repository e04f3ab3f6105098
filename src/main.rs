use clap::{Arg, ArgAction, Command};
use colored::*;
use std::path::PathBuf;
use std::process;

use sysglance::commands::{self, ReportOptions};

fn build_cli() -> Command {
    Command::new("sysglance")
        .about("Simple system information tool, printed next to your distribution's logo")
        .disable_version_flag(true)
        .arg(
            Arg::new("config-path")
                .short('c')
                .long("config-path")
                .value_name("PATH")
                .help("Path to a configuration file, or a directory containing a `config.json`")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("json")
                .short('j')
                .long("json")
                .help("Output entries data to JSON format, use multiple times to increase indentation")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .help("Print version information")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    sysglance::init_logging();

    let result = if matches.get_flag("version") {
        commands::version()
    } else {
        let options = ReportOptions {
            config_path: matches.get_one::<PathBuf>("config-path").cloned(),
            json_level: matches.get_count("json") as usize,
        };
        commands::report(&options)
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        process::exit(1);
    }
}
