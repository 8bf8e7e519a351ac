use std::path::PathBuf;

use clap::Parser;

/// Pad every image in a directory onto a 1440x1800 canvas with 5% whitespace.
#[derive(Parser, Debug)]
#[command(name = "pad", version)]
struct Cli {
    /// Directory containing the images. Results go to `<input_dir>/output/`.
    input_dir: PathBuf,
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
    if !cli.input_dir.is_dir() {
        anyhow::bail!("not a valid directory: {}", cli.input_dir.display());
    }

    let report = padframe::process_directory(&cli.input_dir, &padframe::PadConfig::default())?;
    if report.is_empty() {
        println!("No images found in: {}", cli.input_dir.display());
        return Ok(());
    }

    println!("Processing {} images...", report.found);
    for out in &report.written {
        let name = out.file_name().unwrap_or(out.as_os_str());
        println!("  → {}", name.to_string_lossy());
    }
    for failure in &report.failures {
        println!(
            "  ! Error processing {}: {}",
            failure.path.display(),
            failure.message
        );
    }

    println!(
        "\nFinished! {} of {} images saved in:\n{}",
        report.processed(),
        report.found,
        report.output_dir.display()
    );
    Ok(())
}
