use std::path::PathBuf;

use clap::Parser;
use padframe::{AnimationSpec, Fps};

/// Create a GIF from a folder of images at their original size.
#[derive(Parser, Debug)]
#[command(name = "creategif_simple", version)]
struct Cli {
    /// Folder of frames, used in file-name order.
    input_folder: PathBuf,

    /// Output file. `.gif` is appended when missing.
    output_file: PathBuf,

    /// Frames per second.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    fps: u32,
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
    let spec = AnimationSpec::simple(Fps::new(cli.fps)?);
    let run = padframe::make_animation(&cli.input_folder, &cli.output_file, &spec)?;

    println!(
        "Saved GIF: {} ({} frames, {} FPS)",
        run.report.path.display(),
        run.report.frame_count,
        cli.fps
    );
    Ok(())
}
