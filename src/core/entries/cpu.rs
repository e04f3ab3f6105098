//! CPU models, grouped per physical package with their logical core count.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;

use super::{append_items, parse_options, squeeze_whitespace, Entry, Options};
use crate::core::context::Context;
use crate::error::Result;
use crate::platform::command;
use crate::ui::lines::LineSink;

const CPUINFO_PATH: &str = "/proc/cpuinfo";

static MODEL_NAME_REGEXP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^model name\s*:\s*(.*)$").expect("valid model name pattern"));
static PHYSICAL_ID_REGEXP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^physical id\s*:\s*(\d+)$").expect("valid physical id pattern"));

static THREADS_PER_CORE_REGEXP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^Thread\(s\) per core\s*:\s*(\d+)$").expect("valid lscpu pattern"));
static CORES_PER_UNIT_REGEXP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^Core\(s\) per (?:socket|cluster)\s*:\s*(\d+)$").expect("valid lscpu pattern")
});
static UNITS_REGEXP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^(?:Socket|Cluster)\(s\)\s*:\s*(\d+)$").expect("valid lscpu pattern"));
static LSCPU_MODEL_NAME_REGEXP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^Model name\s*:\s*(.*)$").expect("valid lscpu pattern"));

/// Model name to logical core count, in first-seen order
pub type CpuPackage = Vec<(String, u32)>;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CpuOptions {
    pub one_line: bool,
}

pub struct Cpu {
    name: String,
    options: CpuOptions,
    value: Vec<CpuPackage>,
}

impl Cpu {
    pub fn new(name: String, options: &Options, _ctx: &Context) -> Self {
        let options = parse_options(&name, options);

        let mut value = fs::read_to_string(CPUINFO_PATH)
            .map(|cpuinfo| parse_proc_cpuinfo(&cpuinfo))
            .unwrap_or_default();

        if value.is_empty() {
            value = command::check_output("lscpu", &[])
                .map(|output| parse_lscpu(&output))
                .unwrap_or_default();
        }

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

fn increment(package: &mut CpuPackage, model_name: String, by: u32) {
    match package.iter_mut().find(|(model, _)| *model == model_name) {
        Some((_, count)) => *count += by,
        None => package.push((model_name, by)),
    }
}

/// Group `model name` entries by `physical id`.
///
/// Ids are assumed to show up in increasing order; an id past the last
/// known package opens a new one.
pub fn parse_proc_cpuinfo(cpuinfo: &str) -> Vec<CpuPackage> {
    let model_names = MODEL_NAME_REGEXP
        .captures_iter(cpuinfo)
        .map(|captures| squeeze_whitespace(&captures[1]));
    let physical_ids = PHYSICAL_ID_REGEXP
        .captures_iter(cpuinfo)
        .filter_map(|captures| captures[1].parse::<usize>().ok());

    let mut packages: Vec<CpuPackage> = Vec::new();

    for (model_name, physical_id) in model_names.zip(physical_ids) {
        match packages.get_mut(physical_id) {
            Some(package) => increment(package, model_name, 1),
            None => packages.push(vec![(model_name, 1)]),
        }
    }

    packages
}

fn captured_numbers(regex: &Regex, text: &str) -> Vec<u32> {
    regex
        .captures_iter(text)
        .filter_map(|captures| captures[1].parse().ok())
        .collect()
}

/// Build packages from `lscpu` when `/proc/cpuinfo` has no usable data
pub fn parse_lscpu(output: &str) -> Vec<CpuPackage> {
    let threads_per_core = captured_numbers(&THREADS_PER_CORE_REGEXP, output);
    let cores_per_unit = captured_numbers(&CORES_PER_UNIT_REGEXP, output);
    let units = captured_numbers(&UNITS_REGEXP, output);
    let model_names = LSCPU_MODEL_NAME_REGEXP
        .captures_iter(output)
        .map(|captures| squeeze_whitespace(&captures[1]));

    let mut packages = Vec::new();

    for (((threads, cores), count), model_name) in threads_per_core
        .into_iter()
        .zip(cores_per_unit)
        .zip(units)
        .zip(model_names)
    {
        for _ in 0..count {
            packages.push(vec![(model_name.clone(), threads * cores)]);
        }
    }

    packages
}

impl Entry for Cpu {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> Value {
        Value::Array(
            self.value
                .iter()
                .map(|package| {
                    let models: Map<String, Value> = package
                        .iter()
                        .map(|(model, count)| (model.clone(), Value::from(*count)))
                        .collect();
                    Value::Object(models)
                })
                .collect(),
        )
    }

    fn render(&self, sink: &mut LineSink) {
        if self.value.is_empty() {
            let not_detected = sink.default_strings().not_detected.clone();
            sink.append(&self.name, not_detected);
            return;
        }

        let entries: Vec<String> = self
            .value
            .iter()
            .flatten()
            .map(|(model, count)| {
                if *count > 1 {
                    format!("{} x {}", count, model)
                } else {
                    model.clone()
                }
            })
            .collect();

        append_items(sink, &self.name, &entries, self.options.one_line);
    }
}
