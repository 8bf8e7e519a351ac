use std::path::PathBuf;

use clap::Parser;
use padframe::{AnimationSpec, Fps, OutputFormat};

/// Create an optimized GIF or WebP animation from a folder of images.
#[derive(Parser, Debug)]
#[command(name = "creategif", version)]
struct Cli {
    /// Folder of frames, used in file-name order.
    input_folder: PathBuf,

    /// Output file. `.gif` or `.webp` is appended when missing.
    output_file: PathBuf,

    /// Frames per second.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    fps: u32,

    /// Frames wider than this are downscaled, keeping their aspect ratio.
    #[arg(
        long = "max_width",
        default_value_t = 720,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    max_width: u32,

    /// Output animated WebP instead of GIF (smaller and better quality).
    #[arg(long)]
    webp: bool,
}

fn main() {
    padframe::logging::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    if let Err(err) = run(&cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let format = if cli.webp {
        OutputFormat::WebP
    } else {
        OutputFormat::Gif
    };
    let spec = AnimationSpec::full(Fps::new(cli.fps)?, cli.max_width, format);

    let run = padframe::make_animation(&cli.input_folder, &cli.output_file, &spec)?;

    println!(
        "Found {} images. Resized to ≤{}px wide.",
        run.found, cli.max_width
    );
    for skipped in &run.skipped {
        eprintln!(
            "Skipping unreadable file: {} ({})",
            skipped.path.display(),
            skipped.message
        );
    }
    println!(
        "Saved {} ({} frames, {} FPS)",
        format.name(),
        run.report.frame_count,
        cli.fps
    );
    println!(
        "Done: {} ({:.1} MB)",
        run.report.path.display(),
        run.report.size_mb()
    );
    Ok(())
}
