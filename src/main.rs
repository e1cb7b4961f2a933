use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use slideplot::{new_presentation, ArchiveFormat, ConversionSession, Figure, SaveOptions, SlideSize};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "slideplot")]
#[command(about = "Convert plotted figures into editable presentation slides", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an empty single-slide presentation
    New {
        /// Output file (".pptx" is appended when there is no extension)
        #[arg(value_name = "FILE", default_value = "new.pptx")]
        output: PathBuf,

        /// Slide width in inches
        #[arg(long, default_value_t = 13.333)]
        width: f64,

        /// Slide height in inches
        #[arg(long, default_value_t = 7.5)]
        height: f64,
    },

    /// Convert between a presentation, a zip archive and a directory
    Convert {
        /// Source presentation, zip file or directory
        #[arg(value_name = "SOURCE")]
        source: PathBuf,

        /// Target format: pptx, ppt, zip or dir
        #[arg(long, default_value = "dir")]
        to: String,

        /// Target path (derived from the source when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Convert a figure exported as JSON into a presentation
    Save {
        /// Path to the figure JSON file
        #[arg(value_name = "FIGURE")]
        input: PathBuf,

        /// Output file (defaults to the input filename with .pptx extension)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Hide the frame edge and tick labels
        #[arg(long)]
        no_axis: bool,

        /// JSON file with save options
        #[arg(long, value_name = "FILE")]
        options: Option<PathBuf>,
    },
}

/// Install the tracing subscriber; RUST_LOG refines the INFO default.
fn init_logging() {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false))
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    match args.command {
        Command::New {
            output,
            width,
            height,
        } => {
            let size = SlideSize::new(width, height).context("Invalid slide size")?;
            let path = new_presentation(&output, size)
                .with_context(|| format!("Failed to create presentation: {output:?}"))?;
            println!("Created {}", path.display());
        }
        Command::Convert { source, to, output } => {
            let from = ArchiveFormat::detect(&source)
                .with_context(|| format!("Cannot tell the format of {source:?}"))?;
            let to = ArchiveFormat::from_name(&to)?;
            let path = from
                .convert(&source, to, output.as_deref())
                .with_context(|| format!("Failed to convert {source:?}"))?;
            println!(
                "Successfully converted {} to {}",
                source.display(),
                path.display()
            );
        }
        Command::Save {
            input,
            output,
            no_axis,
            options,
        } => {
            let mut save_options = match options {
                Some(path) => SaveOptions::from_file(&path)
                    .with_context(|| format!("Failed to read options file: {path:?}"))?,
                None => SaveOptions::default(),
            };
            if no_axis {
                save_options.canvas.axis = false;
            }

            let json_content = fs::read_to_string(&input)
                .with_context(|| format!("Failed to read input file: {input:?}"))?;
            let figure: Figure =
                serde_json::from_str(&json_content).context("Failed to parse figure JSON")?;

            let output_path = output.unwrap_or_else(|| input.with_extension("pptx"));
            let path = ConversionSession::new(save_options)
                .savefig(&figure, &output_path)
                .with_context(|| format!("Failed to save presentation: {output_path:?}"))?;
            println!(
                "Successfully converted {} to {}",
                input.display(),
                path.display()
            );
        }
    }

    Ok(())
}
