//! padthai CLI
//!
//! Encode binary data as Thai text, or decode it back (similar to base64).

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use padthai::{Decoder, Encoder};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "padthai")]
#[command(version)]
#[command(about = "Encode binary data to Thai Unicode characters, or decode back")]
struct Cli {
    /// Decode Thai-encoded UTF-8 text back to binary
    #[arg(short, long)]
    decode: bool,

    /// Input file (default: stdin)
    #[arg(short = 'i', long)]
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Wrap encoded lines after COLS characters (0 disables wrapping)
    #[arg(short, long, value_name = "COLS", default_value_t = 0)]
    wrap: usize,

    /// Verbose output on stderr (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    if cli.decode {
        if cli.wrap != 0 {
            log::warn!("--wrap has no effect when decoding");
        }
        decode(cli.input, cli.output)
    } else {
        encode(cli.input, cli.output, cli.wrap)
    }
}

fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("padthai: {l}: {m}{n}")))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;

    log4rs::init_config(config)?;
    Ok(())
}

fn encode(input: Option<PathBuf>, output: Option<PathBuf>, wrap: usize) -> Result<()> {
    let data = read_input(input)?;
    log::info!("Encoding {} bytes", data.len());

    let encoder = Encoder::new().with_wrap(wrap);
    match output {
        Some(output_path) => encoder.encode_to_file(&data, &output_path)?,
        None => encoder
            .encode_to_writer(&data, io::stdout().lock())
            .context("Failed to write to stdout")?,
    }

    log::debug!("Wrote {} characters", padthai::encoded_len(data.len()));
    Ok(())
}

fn decode(input: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let decoder = Decoder::new();
    let decoded = match input {
        Some(input_path) => decoder.decode_file(&input_path)?,
        None => decoder.decode_from_reader(io::stdin().lock())?,
    };
    log::info!("Decoded {} bytes", decoded.len());

    match output {
        Some(output_path) => {
            fs::write(&output_path, &decoded)
                .with_context(|| format!("Failed to write: {}", output_path.display()))?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&decoded).context("Failed to write to stdout")?;
            stdout.flush()?;
        }
    }

    Ok(())
}

fn read_input(input: Option<PathBuf>) -> Result<Vec<u8>> {
    match input {
        Some(input_path) => {
            fs::read(&input_path).with_context(|| format!("Failed to read: {}", input_path.display()))
        }
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer).context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}
