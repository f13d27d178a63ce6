//! geotrip CLI - Lossless GeoJSON round trip
//!
//! Reads one GeoJSON document from FILE (or standard input for `-`),
//! decodes it against the typed schema and writes it back to standard
//! output in the selected layout.

mod logging;

use clap::{Parser, ValueEnum};
use geotrip_io::{trip_source, DecodeOptions, InputSource, Layout, Result, TripOptions};
use std::io::{self, BufWriter};
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(name = "geotrip")]
#[command(about = "Decode a GeoJSON document and encode it back out")]
#[command(version)]
struct Cli {
    /// Input file (`-` for standard input)
    file: String,
    /// Keep source locations for diagnostics
    #[arg(short, long)]
    locs: bool,
    /// Output layout
    #[arg(short, long, value_enum, default_value_t = Format::Minify)]
    format: Format,
    /// Check RFC 7946 position and bbox lengths
    #[arg(long)]
    check_lengths: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Indent,
    Minify,
}

impl From<Format> for Layout {
    fn from(format: Format) -> Self {
        match format {
            Format::Indent => Layout::Indent,
            Format::Minify => Layout::Minify,
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let options = TripOptions::default()
        .with_layout(cli.format.into())
        .with_decode(
            DecodeOptions::default()
                .with_locs(cli.locs)
                .with_length_checks(cli.check_lengths),
        );
    let source = InputSource::from_arg(&cli.file);
    let stdout = io::stdout();
    let summary = trip_source(&source, BufWriter::new(stdout.lock()), &options)?;
    debug!(
        kind = %summary.kind,
        bytes_read = summary.bytes_read,
        bytes_written = summary.bytes_written,
        "done"
    );
    Ok(())
}

fn main() -> ExitCode {
    logging::init_logging();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(kind = ?err.kind(), "trip failed");
            eprintln!("Error: {err}");
            ExitCode::from(1)
        }
    }
}
