// src/main.rs
// ============================================================================
// HEXNUM-CONVERT CLI
// ============================================================================
//
// Uso:
//   hexnum-convert hex2f32 "00 00 80 3f 00 00 00 3f"    → 1.0, 0.5
//   hexnum-convert f322hex "1.0, 0.5"                   → 0000803f 0000003f
//   hexnum-convert hex2i16 -i dump.txt -o values.txt
//   echo "ab cd" | hexnum-convert hex2le                → cd ab
//   hexnum-convert visualize -m int16 -i values.txt -o preview.png
//
// Sin TEXT ni --input se lee stdin.
//
// ============================================================================

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use hexnum_convert::{
    builder::visualize_text,
    codec::Conversion,
    files::{read_text, write_atomic},
    viz::Mode,
};

#[derive(Parser, Debug)]
#[command(name = "hexnum-convert")]
#[command(about = "Convert between hex text and little-endian float32/int16 values")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Hex → float32 LE values
    #[command(name = "hex2f32")]
    HexToFloat32(TextArgs),

    /// float32 values → hex LE
    #[command(name = "f322hex")]
    Float32ToHex(TextArgs),

    /// Hex → signed int16 LE values
    #[command(name = "hex2i16")]
    HexToInt16(TextArgs),

    /// Signed int16 values → hex LE
    #[command(name = "i162hex")]
    Int16ToHex(TextArgs),

    /// Hex → byte-reversed hex tokens
    #[command(name = "hex2le")]
    HexToLittleEndian(TextArgs),

    /// Byte-reversed hex tokens → hex
    #[command(name = "le2hex")]
    LittleEndianToHex(TextArgs),

    /// Render comma-separated values as a grayscale PNG
    Visualize {
        /// Value interpretation: float32 | int16
        #[arg(short, long, default_value = "float32")]
        mode: String,

        #[command(flatten)]
        source: SourceArgs,

        /// Output PNG
        #[arg(short, long, required = true)]
        output: PathBuf,
    },
}

#[derive(clap::Args, Debug)]
struct SourceArgs {
    /// Input text (stdin if omitted)
    #[arg(value_name = "TEXT", allow_hyphen_values = true)]
    text: Vec<String>,

    /// Read input text from a file
    #[arg(short, long, conflicts_with = "text")]
    input: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
struct TextArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Write the result to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Command {
    fn conversion(&self) -> Option<(Conversion, &TextArgs)> {
        match self {
            Self::HexToFloat32(a) => Some((Conversion::HexToFloat32, a)),
            Self::Float32ToHex(a) => Some((Conversion::Float32ToHex, a)),
            Self::HexToInt16(a) => Some((Conversion::HexToInt16, a)),
            Self::Int16ToHex(a) => Some((Conversion::Int16ToHex, a)),
            Self::HexToLittleEndian(a) => Some((Conversion::HexToLittleEndian, a)),
            Self::LittleEndianToHex(a) => Some((Conversion::LittleEndianToHex, a)),
            Self::Visualize { .. } => None,
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

/// Texto de entrada: --input, argumentos, o stdin
fn read_source(source: &SourceArgs) -> Result<String> {
    if let Some(path) = &source.input {
        return Ok(read_text(path)?);
    }
    if !source.text.is_empty() {
        return Ok(source.text.join(" "));
    }
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("Cannot read stdin")?;
    Ok(text)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some((conversion, args)) = cli.command.conversion() {
        let input = read_source(&args.source)?;
        let result = conversion.apply(&input);
        log::info!("{}: {} chars in, {} chars out", conversion, input.len(), result.len());

        match &args.output {
            Some(path) => {
                write_atomic(path, result.as_bytes())
                    .with_context(|| format!("{} failed", conversion))?;
                if cli.verbose {
                    println!("  ✓ {} → {}", conversion, path.display());
                }
            }
            None => println!("{}", result),
        }
        return Ok(());
    }

    if let Command::Visualize { mode, source, output } = &cli.command {
        let mode = Mode::from_str(mode)
            .ok_or_else(|| anyhow::anyhow!("Invalid mode: {} (expected float32 or int16)", mode))?;
        let text = read_source(source)?;

        let side = visualize_text(&text, mode, output).context("Visualization error")?;

        println!("═══════════════════════════════════════════════════════════════");
        println!("  VISUALIZE {}", mode.to_string().to_uppercase());
        println!("═══════════════════════════════════════════════════════════════");
        println!("  Grid:   {}x{}", side, side);
        println!("  Output: {}", output.display());
    }

    Ok(())
}
