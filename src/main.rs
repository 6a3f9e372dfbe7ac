use std::path::PathBuf;
use std::process;

use clap::Parser;
use ghost_icons::{
    CatalogConfig, CatalogWriter, DEFAULT_ICON_SIZE, DEFAULT_OUTPUT_DIR, Result, Variant,
};

/// Draws the ghost app icon and writes an iOS app icon set.
#[derive(Debug, Parser)]
#[command(name = "ghost-icons", version, about)]
struct Cli {
    /// The `.appiconset` directory to write into (created if missing).
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Side length of the rendered icons in pixels.
    #[arg(short, long, default_value_t = DEFAULT_ICON_SIZE, value_parser = clap::value_parser!(u32).range(1..))]
    size: u32,
}

fn run(cli: Cli) -> Result<()> {
    let writer = CatalogWriter::new(CatalogConfig::new(cli.output_dir).with_size(cli.size));
    let size = writer.config().size;

    writer.prepare()?;

    let mut written = Vec::with_capacity(Variant::ALL.len() + 1);
    for variant in Variant::ALL {
        println!("Rendering {variant} icon ({size}x{size})...");
        written.push(writer.write_variant(variant)?);
    }

    println!("Writing manifest...");
    let (manifest_path, _) = writer.write_manifest(&Variant::ALL)?;
    written.push(manifest_path);

    println!(
        "Done. Icon set written to {}",
        writer.config().output_dir.display()
    );
    for path in &written {
        if let Some(name) = path.file_name() {
            println!("  - {}", name.to_string_lossy());
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("ghost-icons: {e}");
        process::exit(1);
    }
}
