// src/bin/magic.rs
// ============================================================================
// FLOAT32 MAGIC - Busca runs de float32 plausibles en un binario
// ============================================================================
//
// Uso: hexnum-magic dump.bin              → dump_decoded.txt
//      hexnum-magic dump.bin -o out.txt --json
//
// ============================================================================

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use hexnum_convert::{
    builder::decode_file,
    magic::{Plausibility, DEFAULT_MAX_ABS, DEFAULT_MIN_ABS},
};

#[derive(Parser)]
#[command(name = "hexnum-magic")]
#[command(about = "Split a binary file into plausible float32 runs and raw bytes")]
struct Args {
    /// Binary file to scan
    file: PathBuf,

    /// Output document (default: <stem>_decoded.txt next to the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Smallest accepted |value| (exclusive)
    #[arg(long, default_value_t = DEFAULT_MIN_ABS)]
    min_abs: f64,

    /// Largest accepted |value| (exclusive)
    #[arg(long, default_value_t = DEFAULT_MAX_ABS)]
    max_abs: f64,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn format_size(size: usize) -> String {
    if size < 1024 {
        format!("{} B", size)
    } else if size < 1024 * 1024 {
        format!("{:.1} KB", size as f64 / 1024.0)
    } else {
        format!("{:.1} MB", size as f64 / 1024.0 / 1024.0)
    }
}

fn make_bar(ratio: f64, width: usize) -> String {
    let filled = ((ratio.clamp(0.0, 1.0)) * width as f64) as usize;
    "█".repeat(filled) + &"░".repeat(width.saturating_sub(filled))
}

fn main() -> Result<()> {
    let args = Args::parse();
    let default = if args.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();

    if args.min_abs >= args.max_abs {
        anyhow::bail!("--min-abs ({}) must be below --max-abs ({})", args.min_abs, args.max_abs);
    }
    let bounds = Plausibility {
        min_abs: args.min_abs,
        max_abs: args.max_abs,
    };

    let report = decode_file(&args.file, args.output.as_deref(), &bounds)
        .with_context(|| format!("Float32 magic failed on {}", args.file.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let summary = &report.summary;
    println!();
    println!("════════════════════════════════════════════════════════════════");
    println!("  FLOAT32 MAGIC");
    println!("════════════════════════════════════════════════════════════════");
    println!("  Archivo:      {}", report.input.display());
    println!("  Tamaño:       {}", format_size(summary.total_bytes));
    println!("  Rango |v|:    ({:e}, {})", bounds.min_abs, bounds.max_abs);
    println!();
    println!("  Float runs:   {:>8}  ({} floats)", summary.float_runs, summary.floats);
    println!("  Byte runs:    {:>8}  ({} bytes)", summary.byte_runs, summary.stray_bytes);
    println!(
        "  Cobertura:    {} {:.1}%",
        make_bar(summary.float_coverage(), 30),
        summary.float_coverage() * 100.0
    );

    if args.verbose {
        println!();
        for info in &report.segments {
            println!(
                "    0x{:08X}  {:<8} {:>6} × {}",
                info.offset,
                info.kind,
                info.count,
                format_size(info.byte_len)
            );
        }
    }

    println!();
    println!("  ✓ Decoded file saved as: {}", report.output.display());
    println!("════════════════════════════════════════════════════════════════");

    Ok(())
}
