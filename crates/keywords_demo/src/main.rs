mod host;
mod logging;
mod render;
mod widgets;

use std::io::{self, Write};
use std::path::Path;

use anyhow::Context;
use keywords_logging::{kw_info, level_from_env};
use log::LevelFilter;

use host::DemoHost;
use logging::LogDestination;

const USAGE: &str = "usage: keywords_demo [--quiet] [--log-terminal] [WIDGETS.ron]";

fn main() -> anyhow::Result<()> {
    let mut quiet = false;
    let mut destination = LogDestination::File;
    let mut widget_file = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--quiet" => quiet = true,
            "--log-terminal" => destination = LogDestination::Terminal,
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(());
            }
            flag if flag.starts_with('-') => anyhow::bail!("unknown option {flag}\n{USAGE}"),
            path => widget_file = Some(path.to_string()),
        }
    }

    logging::initialize(destination, level_from_env(LevelFilter::Info));

    let specs = match &widget_file {
        Some(path) => widgets::load_widgets(Path::new(path))
            .with_context(|| format!("loading widgets from {path}"))?,
        None => widgets::builtin_widgets(),
    };
    kw_info!("Starting demo host with {} widgets", specs.len());

    let mut host = DemoHost::new(&specs, move || -> Box<dyn Write> {
        if quiet {
            Box::new(io::sink())
        } else {
            Box::new(io::stdout())
        }
    })?;
    host.run_script(io::stdin().lock(), &mut io::stdout())
        .context("running host script")
}
