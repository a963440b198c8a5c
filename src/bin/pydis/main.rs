use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use comfy_table::{presets::UTF8_FULL, Table};
use log::{LevelFilter, Log, Metadata, Record};

use pyrs_bytecode::bytecode::{prettify, pretty_code, BytecodeContainer, Instruction};
use pyrs_bytecode::opcode::{OpcodeTable, PythonVersion};

#[derive(Parser)]
#[command(name = "pydis", version, about = "Decode CPython code streams")]
struct Cli {
    /// Log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode the raw code stream of a single code object
    Decode {
        file: PathBuf,

        /// Read FILE as hex text instead of raw bytes
        #[arg(long)]
        hex: bool,

        /// Code stream carries inline cache entries
        #[arg(long)]
        quickened: bool,

        /// Reject unassigned opcodes and stray CACHE words
        #[arg(long)]
        strict: bool,

        #[arg(long = "py-version", default_value = "3.11")]
        py_version: PythonVersion,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the opcode table of a Python version
    Opcodes {
        #[arg(long = "py-version", default_value = "3.11")]
        py_version: PythonVersion,

        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Table,
    Json,
}

// ----------------------------------------------------------------------------
// Logging
// ----------------------------------------------------------------------------
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logger(verbose: u8) -> Result<()> {
    log::set_logger(&LOGGER).map_err(|e| anyhow!("{e}"))?;
    log::set_max_level(match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    });
    Ok(())
}

// ----------------------------------------------------------------------------
// Input
// ----------------------------------------------------------------------------
fn parse_hex(text: &[u8]) -> Result<Vec<u8>> {
    let digits: Vec<u8> = text
        .iter()
        .copied()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    if digits.len() % 2 != 0 {
        bail!("hex input has an odd number of digits ({})", digits.len());
    }

    digits
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| {
            std::str::from_utf8(pair)
                .ok()
                .and_then(|s| u8::from_str_radix(s, 16).ok())
                .ok_or_else(|| anyhow!("invalid hex byte at position {}", i * 2))
        })
        .collect()
}

fn map_file(path: &Path) -> Result<memmap2::Mmap> {
    let file = std::fs::File::open(path).with_context(|| format!("opening {path:?}"))?;
    let mmap = unsafe { memmap2::Mmap::map(&file) }.with_context(|| format!("mapping {path:?}"))?;
    log::info!("mapped {} bytes from {:?}", mmap.len(), path);
    Ok(mmap)
}

// ----------------------------------------------------------------------------
// Output
// ----------------------------------------------------------------------------
fn print_instructions(insns: &[Instruction], table: &OpcodeTable, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", pretty_code(insns, table, prettify::Variant::WithRaw)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(insns)?),
        OutputFormat::Table => {
            let mut out = Table::new();
            out.load_preset(UTF8_FULL);
            out.set_header(vec!["Offset", "Opcode", "Operand", "Stored as", "Length"]);
            for inst in insns {
                let canonical = inst.canonical_descriptor(table);
                out.add_row(vec![
                    inst.offset.to_string(),
                    canonical.mnemonic.to_string(),
                    match canonical.takes_operand {
                        true => inst.operand.to_string(),
                        false => String::new(),
                    },
                    match inst.is_specialized() {
                        true => table.mnemonic(inst.raw_opcode).to_string(),
                        false => String::new(),
                    },
                    inst.length.to_string(),
                ]);
            }
            println!("{out}");
        }
    }
    Ok(())
}

fn print_opcodes(table: &OpcodeTable, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let rows: Vec<_> = table.iter().collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Text => {
            for desc in table.iter().filter(|d| d.is_assigned()) {
                println!("{:>3} {}", desc.code, desc.mnemonic);
            }
        }
        OutputFormat::Table => {
            let mut out = Table::new();
            out.load_preset(UTF8_FULL);
            out.set_header(vec!["Code", "Mnemonic", "Operand", "Family", "Cache"]);
            for desc in table.iter().filter(|d| d.is_assigned()) {
                out.add_row(vec![
                    desc.code.to_string(),
                    desc.mnemonic.to_string(),
                    desc.takes_operand.to_string(),
                    table
                        .family_of(desc)
                        .map(|f| f.mnemonic.to_string())
                        .unwrap_or_default(),
                    desc.cache_slot_count.to_string(),
                ]);
            }
            println!("{out}");
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose)?;

    match cli.command {
        Command::Decode {
            file,
            hex,
            quickened,
            strict,
            py_version,
            format,
        } => {
            let mmap = map_file(&file)?;
            let parsed;
            let code: &[u8] = if hex {
                parsed = parse_hex(&mmap)?;
                &parsed
            } else {
                &mmap
            };
            let container = BytecodeContainer::new(code)
                .version(py_version)
                .quickened(quickened)
                .strict(strict);
            let insns = container
                .decode()
                .with_context(|| format!("decoding {file:?}"))?;
            print_instructions(&insns, container.opcode_table(), format)
        }
        Command::Opcodes { py_version, format } => {
            print_opcodes(py_version.opcode_table(), format)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex(b"6400 5300\n").unwrap(), vec![0x64, 0x00, 0x53, 0x00]);
        assert_eq!(parse_hex(b"").unwrap(), Vec::<u8>::new());
        assert!(parse_hex(b"640").is_err());
        assert!(parse_hex(b"zz").is_err());
    }

    #[test]
    fn test_map_file_exposes_file_bytes() {
        let path = std::env::temp_dir().join(format!("pydis-map-{}.bin", std::process::id()));
        std::fs::write(&path, [100, 0, 83, 0]).unwrap();
        let mmap = map_file(&path).unwrap();
        let insns = BytecodeContainer::new(&mmap).decode().unwrap();
        assert_eq!(insns.len(), 2);
        drop(mmap);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_cli_arguments() {
        let cli = Cli::try_parse_from([
            "pydis",
            "-vv",
            "decode",
            "code.bin",
            "--quickened",
            "--py-version",
            "3.11",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Decode {
                quickened,
                strict,
                py_version,
                format,
                ..
            } => {
                assert!(quickened);
                assert!(!strict);
                assert_eq!(py_version, PythonVersion::V3_11);
                assert!(format == OutputFormat::Json);
            }
            _ => panic!("expected decode"),
        }

        assert!(Cli::try_parse_from(["pydis", "opcodes", "--py-version", "2.7"]).is_err());
    }
}
