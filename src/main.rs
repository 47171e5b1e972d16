//! wavsplit CLI
//!
//! A command-line tool for splitting multichannel WAV files into
//! per-channel mono files.

use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use wavsplit::format::WavView;
use wavsplit::util::channel_labels;
use wavsplit::{convert, init, Config};

#[derive(Parser)]
#[command(name = "wavsplit")]
#[command(about = "Split multichannel WAV files into mono WAV files", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show information about a WAV file
    Info {
        /// Input file path
        input: PathBuf,
    },

    /// Split a WAV file into one mono file per channel
    Split {
        /// Input file path
        input: PathBuf,

        /// Output directory (defaults to the input's directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init(Config {
        verbose: cli.verbose,
        debug: cli.debug,
    });

    match cli.command {
        Commands::Info { input } => {
            cmd_info(&input)?;
        }
        Commands::Split { input, output } => {
            cmd_split(&input, output)?;
        }
    }

    Ok(())
}

fn cmd_info(input: &Path) -> wavsplit::Result<()> {
    let bytes = fs::read(input)?;
    let wav = WavView::parse(&bytes)?;
    let format = &wav.format;

    println!("File: {}", input.display());
    println!();
    println!("  Format Tag: {:?}", format.format_tag);
    if let Some(subformat) = format.subformat {
        println!("  Subformat: {:?}", subformat);
    }
    println!("  Channels: {}", format.channels);
    println!("  Sample Rate: {} Hz", format.sample_rate);
    println!("  Bits Per Sample: {}", format.bits_per_sample);
    println!("  Block Align: {}", format.block_align);
    println!("  Byte Rate: {}", format.byte_rate);
    println!("  Frames: {}", wav.frames());
    println!("  Duration: {:.2}s", wav.duration_seconds());

    let labels = channel_labels(format.channels as usize, format.channel_mask);
    println!("  Channel Labels: {}", labels.join(", "));

    Ok(())
}

fn cmd_split(input: &Path, output: Option<PathBuf>) -> wavsplit::Result<()> {
    let bytes = fs::read(input)?;
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("input.wav"));

    let outputs = convert(&bytes, &name)?;

    let dir = match output {
        Some(dir) => dir,
        None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
    };
    if !dir.as_os_str().is_empty() {
        fs::create_dir_all(&dir)?;
    }

    for file in &outputs {
        let path = dir.join(&file.filename);
        fs::write(&path, &file.data)?;
        info!("wrote {}", path.display());
        println!("  {}", path.display());
    }
    println!("Wrote {} channel files", outputs.len());

    Ok(())
}
