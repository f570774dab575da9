use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use gmc4_rs::{encode, normalize, RenderMode};

mod input;
use input::{load_config, load_source};

#[derive(Parser, Debug)]
#[command(author, version, about = "GMC-4 assembler", long_about = None)]
struct Cli {
    /// Assembly source file
    #[arg(value_name = "SRC")]
    input: PathBuf,
    /// LED output: show each nibble next to its address as GMC-4 LED indicators
    #[arg(short, long, conflicts_with = "asm")]
    led: bool,
    /// ASM output (default): addresses, hex values and the original assembly
    #[arg(short, long)]
    asm: bool,
    /// Output format: text or json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Export labels to JSON (Vec<{ addr, name }>)
    #[arg(long, value_name = "FILE")]
    labels_out: Option<PathBuf>,
    /// Write output to file instead of stdout
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,
    /// Render settings as JSON (glyphs, address width, jump range)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat { Text, Json }

impl Cli {
    fn mode(&self) -> RenderMode {
        match (self.led, self.asm) {
            (true, false) => RenderMode::LedDiagram,
            _ => RenderMode::AssemblyListing,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = load_config(cli.config.as_deref())?;
    let src = load_source(&cli.input)?;

    let program = encode(&normalize(&src))?;
    tracing::debug!(size = program.size, "encoded {}", cli.input.display());

    if let Some(path) = &cli.labels_out {
        let json = serde_json::to_string_pretty(&program.labels.to_kv())?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    }

    let mut out: Box<dyn Write> = match &cli.out {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    match cli.format {
        // Streams line by line; anything before an unresolved jump stays printed.
        OutputFormat::Text => program.render(cli.mode(), &cfg, &mut out)?,
        OutputFormat::Json => {
            let export = program.export(&cfg)?;
            serde_json::to_writer_pretty(&mut out, &export)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mode_of(args: &[&str]) -> RenderMode {
        Cli::try_parse_from(args.iter().copied()).unwrap().mode()
    }

    #[test]
    fn render_mode_selection() {
        assert_eq!(mode_of(&["gmc4asm", "prog.asm"]), RenderMode::AssemblyListing);
        assert_eq!(mode_of(&["gmc4asm", "-a", "prog.asm"]), RenderMode::AssemblyListing);
        assert_eq!(mode_of(&["gmc4asm", "-l", "prog.asm"]), RenderMode::LedDiagram);
        assert_eq!(mode_of(&["gmc4asm", "--led", "prog.asm"]), RenderMode::LedDiagram);
    }

    #[test]
    fn led_and_asm_conflict() {
        assert!(Cli::try_parse_from(["gmc4asm", "-l", "-a", "prog.asm"]).is_err());
    }
}
