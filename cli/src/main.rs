mod args;
mod io;

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

use args::{Cli, Mode};
use lzjb_core::compression::create_codec;
use lzjb_core::container::{inspect, ContainerCodec, ContainerConfig};
use lzjb_core::telemetry::{Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    if cli.output.is_some() && cli.inputs.len() > 1 {
        bail!("--output can only be used with a single input ({} given)", cli.inputs.len());
    }

    let mode = cli.mode();
    let codec = create_codec(cli.codec as u16, cli.level)?;
    let container = ContainerCodec::new(codec, ContainerConfig::new(None, cli.max_size));

    for input in &cli.inputs {
        let output = cli
            .output
            .clone()
            .unwrap_or_else(|| io::default_output(input, mode));

        let snapshot = process(&container, mode, input, &output, cli.flags)
            .with_context(|| format!("failed to {mode} {}", input.display()))?;

        info!(
            input = %input.display(),
            output = %output.display(),
            raw = snapshot.bytes_raw,
            container = snapshot.bytes_container,
            ratio = snapshot.compression_ratio,
            "{mode}ed"
        );
        if cli.stats {
            println!("{}", snapshot.to_json()?);
        }
    }

    Ok(())
}

/// Load one file, run it through the container codec and save the result.
fn process(
    container: &ContainerCodec,
    mode: Mode,
    input: &Path,
    output: &Path,
    flags: u32,
) -> Result<TelemetrySnapshot> {
    let mut timer = TelemetryTimer::new();
    let mut counters = TelemetryCounters::default();

    let data = timer.time(Stage::Read, || io::load_file(input))?;

    let result = match mode {
        Mode::Compress => {
            let packed = timer.time(Stage::Compress, || container.compress(&data, flags))?;
            counters.add_container(&inspect(&packed)?);
            packed
        }
        Mode::Decompress => {
            let layout = inspect(&data)?;
            let raw = timer.time(Stage::Decompress, || container.decompress(&data, flags))?;
            counters.add_container(&layout);
            raw
        }
    };

    timer.time(Stage::Write, || io::save_file(output, &result))?;
    timer.finish();

    Ok(TelemetrySnapshot::from(&counters, &timer))
}

fn init_logging(verbose: u8, quiet: bool) {
    let default = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
