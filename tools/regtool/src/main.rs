//! Regtool - Register Codec Diagnostic Tool
//!
//! Decodes polled register words into typed values, encodes operator input
//! into the words to write, and prints hex dumps, using the same codec the
//! services use.

mod words;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use tracing::debug;
use voltage_regcodec::{
    bytes_to_hex, decode_registers, encode_to_words, load_config, load_config_from_file,
    words_to_bytes, words_to_hex, ByteOrder, CodecConfig, DataType, NumberLocale,
};

use crate::words::parse_words;

#[derive(Parser)]
#[command(name = "regtool")]
#[command(about = "Regtool - register codec diagnostics")]
#[command(long_about = "Regtool - register codec diagnostics

Examples:
  regtool decode -t float -o CDAB 0x0000 0x41C8     # Decode two registers
  regtool encode -t int32 -o CDAB 305419896         # Words to write
  regtool encode -t int16 -5                        # Negative setpoint
  regtool encode -t double --decimal-separator , 3,14
  regtool hex 0x1234 0xABCD                         # Hex dumps
  regtool fields -c device.yaml -s 100 0 0x41C8     # Decode a polled block")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode register words into a typed value
    Decode {
        /// Value type (Int16, UInt16, Int32, UInt32, Int64, UInt64, Float, Double, String)
        #[arg(short = 't', long = "type", value_parser = parse_data_type)]
        data_type: DataType,

        /// Device byte order (ABCD, BADC, CDAB, DCBA)
        #[arg(short, long, default_value = "ABCD", value_parser = parse_byte_order)]
        order: ByteOrder,

        /// Register words (decimal or 0x-prefixed hex)
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Encode a value into the register words to write
    Encode {
        /// Value type
        #[arg(short = 't', long = "type", value_parser = parse_data_type)]
        data_type: DataType,

        /// Device byte order
        #[arg(short, long, default_value = "ABCD", value_parser = parse_byte_order)]
        order: ByteOrder,

        /// Decimal separator of the operator locale
        #[arg(long, default_value_t = '.')]
        decimal_separator: char,

        /// Value text
        #[arg(allow_negative_numbers = true)]
        value: String,
    },

    /// Print word and byte hex dumps
    Hex {
        /// Register words (decimal or 0x-prefixed hex)
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Decode every configured field inside a polled block
    Fields {
        /// Register map file (YAML/TOML/JSON); defaults to $REGCODEC_CONFIG
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Address of the first register in the block
        #[arg(short, long, default_value_t = 0)]
        start: u16,

        /// Register words (decimal or 0x-prefixed hex)
        #[arg(required = true)]
        words: Vec<String>,
    },
}

fn parse_data_type(s: &str) -> std::result::Result<DataType, String> {
    s.parse()
}

fn parse_byte_order(s: &str) -> std::result::Result<ByteOrder, String> {
    s.parse()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure colored output
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Decode {
            data_type,
            order,
            words,
        } => cmd_decode(data_type, order, &words),
        Commands::Encode {
            data_type,
            order,
            decimal_separator,
            value,
        } => cmd_encode(data_type, order, decimal_separator, &value),
        Commands::Hex { words } => cmd_hex(&words),
        Commands::Fields {
            config,
            start,
            words,
        } => cmd_fields(config, start, &words),
    }
}

fn cmd_decode(data_type: DataType, order: ByteOrder, words: &[String]) -> Result<()> {
    let registers = parse_words(words)?;
    debug!(%data_type, %order, count = registers.len(), "Decoding registers");
    let value = decode_registers(&registers, data_type, order)
        .with_context(|| format!("Failed to decode {} ({})", data_type, order))?;

    println!("{} {}", "Registers:".bright_cyan(), words_to_hex(&registers));
    println!(
        "{} {} {}",
        "Value:".bright_cyan(),
        value.to_string().green(),
        format!("[{}, {}]", data_type, order).dimmed()
    );
    Ok(())
}

fn cmd_encode(data_type: DataType, order: ByteOrder, separator: char, value: &str) -> Result<()> {
    let locale = NumberLocale {
        decimal_separator: separator,
    };
    let registers = encode_to_words(value, data_type, order, &locale)
        .with_context(|| format!("Failed to encode '{}' as {}", value, data_type))?;

    let decimal: Vec<String> = registers.iter().map(|w| w.to_string()).collect();
    println!("{} {}", "Registers:".bright_cyan(), words_to_hex(&registers).green());
    println!("{} {}", "Decimal:".bright_cyan(), decimal.join(" "));
    Ok(())
}

fn cmd_hex(words: &[String]) -> Result<()> {
    let registers = parse_words(words)?;
    println!("{} {}", "Words:".bright_cyan(), words_to_hex(&registers));
    println!("{} {}", "Bytes:".bright_cyan(), bytes_to_hex(&words_to_bytes(&registers)));
    Ok(())
}

fn cmd_fields(config_path: Option<PathBuf>, start: u16, words: &[String]) -> Result<()> {
    let config: CodecConfig = match config_path {
        Some(path) => load_config_from_file(&path)
            .with_context(|| format!("Failed to load register map {}", path.display()))?,
        None => load_config().context("Failed to load register map")?,
    };
    let registers = parse_words(words)?;
    debug!(
        fields = config.fields.len(),
        start,
        count = registers.len(),
        "Decoding polled block"
    );

    let values = config.read_block(start, &registers);
    if values.is_empty() {
        println!(
            "{} No configured field lies inside registers {}..{}",
            "WARN".yellow(),
            start,
            start as u32 + registers.len() as u32
        );
        return Ok(());
    }

    for (name, result) in values {
        match result {
            Ok(value) => println!("  {:<24} {}", name.bold(), value.to_string().green()),
            Err(e) => println!("  {:<24} {}", name.bold(), e.to_string().red()),
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    #[test]
    fn test_encode_accepts_negative_value() {
        let cli = Cli::try_parse_from(["regtool", "encode", "-t", "int16", "-5"]).unwrap();
        match cli.command {
            Commands::Encode {
                data_type, value, ..
            } => {
                assert_eq!(data_type, DataType::Int16);
                assert_eq!(value, "-5");
            },
            _ => panic!("expected encode command"),
        }
    }

    #[test]
    fn test_encode_negative_float_with_order() {
        let cli =
            Cli::try_parse_from(["regtool", "encode", "-t", "float", "-o", "cdab", "-2.5"]).unwrap();
        match cli.command {
            Commands::Encode { order, value, .. } => {
                assert_eq!(order, ByteOrder::CDAB);
                assert_eq!(value, "-2.5");
            },
            _ => panic!("expected encode command"),
        }
    }
}
