//! CLI for inspecting, checking, and rendering .9.png files.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use log::error;
use ninepatch::{io, NinePatch, Pixmap, Sampling};

#[derive(Parser)]
#[command(name = "ninepatch", about = "Inspect, check, and render .9.png files")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print dimensions, padding, and the patch grid of a 9-patch
    Info {
        file: PathBuf,
        /// Treat a plain bitmap as a 9-patch by wrapping it in a border
        #[arg(long)]
        convert: bool,
    },
    /// Report stretch regions that would distort when scaled
    Check { file: PathBuf },
    /// Render a 9-patch at a target size and write the result as PNG
    Render {
        file: PathBuf,
        width: u32,
        height: u32,
        /// Output path
        #[arg(short, long)]
        output: PathBuf,
        /// Use nearest-neighbor sampling instead of bilinear
        #[arg(long)]
        nearest: bool,
        /// Treat a plain bitmap as a 9-patch by wrapping it in a border
        #[arg(long)]
        convert: bool,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{e}");
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> ninepatch::Result<()> {
    match cli.command {
        Command::Info { file, convert } => {
            let np = io::load_path(&file, convert)?;
            print_info(&np);
        }
        Command::Check { file } => {
            let np = io::load_path(&file, false)?;
            let bad = np.find_bad_patches();
            if bad.is_empty() {
                println!("ok: no bad patches");
            } else {
                println!("{} bad patch(es):", bad.len());
                for r in &bad {
                    println!("  {}x{} at ({}, {})", r.w, r.h, r.x, r.y);
                }
                process::exit(1);
            }
        }
        Command::Render {
            file,
            width,
            height,
            output,
            nearest,
            convert,
        } => {
            let np = io::load_path(&file, convert)?;
            let sampling = if nearest {
                Sampling::Nearest
            } else {
                Sampling::Bilinear
            };
            let mut target = Pixmap::new(width, height);
            np.draw(&mut target, 0, 0, width, height, sampling);
            io::save_png(&target, &output)?;
            println!("wrote {}", output.display());
        }
    }
    Ok(())
}

fn print_info(np: &NinePatch) {
    let pad = np.padding();
    let (min_w, min_h) = np.min_size();
    println!("size:      {}x{}", np.width(), np.height());
    println!("min size:  {}x{}", min_w, min_h);
    println!(
        "padding:   left {} top {} right {} bottom {}",
        pad.left, pad.top, pad.right, pad.bottom
    );
    let grid = np.grid();
    println!(
        "grid:      {} fixed, {} patches, {} horizontal, {} vertical",
        grid.fixed.len(),
        grid.patches.len(),
        grid.horizontal.len(),
        grid.vertical.len()
    );
    for r in &grid.patches {
        println!("  patch      {}x{} at ({}, {})", r.w, r.h, r.x, r.y);
    }
    for r in &grid.horizontal {
        println!("  h-patch    {}x{} at ({}, {})", r.w, r.h, r.x, r.y);
    }
    for r in &grid.vertical {
        println!("  v-patch    {}x{} at ({}, {})", r.w, r.h, r.x, r.y);
    }
}
