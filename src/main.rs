//! Floating-point engine CLI.
//!
//! The main executable for the engine. It handles command-line argument
//! parsing, configuration loading, and the individual command flows.
//!
//! # Usage
//!
//! Operands are raw bit patterns of the configured width, written in any
//! radix (`0x` hex, `0b` binary, `0o` octal, or plain decimal); results
//! are printed back in the radix of the first operand.
//!
//! * `add A B` / `mul A B`: one arithmetic operation.
//! * `classify V`: the ten-flag classification of one pattern.
//! * `print V`: one pattern rendered in every radix with decoded fields.
//! * `compare`: the directed-plus-random compare flow against the
//!   reference model.

use clap::{Parser, Subcommand};
use std::{fs, path::Path, process};

extern crate fp_engine;

use fp_engine::common::format::FormatParams;
use fp_engine::common::radix::{parse_pattern, render_pattern, Radix};
use fp_engine::config::Config;
use fp_engine::core::round::RoundingMode;
use fp_engine::core::unpack::{classify, unpack};
use fp_engine::core::{add, multiply};
use fp_engine::sim::{checker::promote, run_compare};

/// Command-line arguments for the floating-point engine.
#[derive(Parser, Debug)]
#[command(author, version, about = "Bit-exact IEEE 754 floating-point engine")]
struct Args {
    #[arg(short, long, default_value = "configs/default.toml")]
    config: String,

    /// Operand width in bits (16, 32, or 64); overrides the config file.
    #[arg(short, long)]
    width: Option<u32>,

    /// Rounding mode (rne, rtz, rpi, rni, rna); overrides the config file.
    #[arg(short, long)]
    rounding: Option<String>,

    /// Emit machine-readable JSON instead of text.
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Adds two operand bit patterns.
    Add { a: String, b: String },
    /// Multiplies two operand bit patterns.
    Mul { a: String, b: String },
    /// Classifies one operand bit pattern.
    Classify { value: String },
    /// Prints one operand in every radix with its decoded fields.
    Print { value: String },
    /// Runs the compare flow against the reference model.
    Compare,
}

/// Resolved settings for one invocation: format parameters and the
/// rounding mode after command-line overrides.
fn resolve(args: &Args, config: &Config) -> (FormatParams, RoundingMode) {
    let width = args.width.unwrap_or(config.engine.width);
    let params = match config.engine.guard_bits {
        Some(g) => FormatParams::new(width, g),
        None => FormatParams::with_default_guard(width),
    }
    .unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    let mode_name = args
        .rounding
        .as_deref()
        .unwrap_or(&config.engine.rounding_mode);
    let mode = RoundingMode::from_name(mode_name).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    (params, mode)
}

fn run_binary_op(
    args: &Args,
    params: &FormatParams,
    mode: RoundingMode,
    a: &str,
    b: &str,
    op: fn(u64, u64, RoundingMode, &FormatParams) -> u64,
    name: &str,
) {
    let (a_bits, radix) = parse_pattern(a, params).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });
    let (b_bits, _) = parse_pattern(b, params).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    let result = op(a_bits, b_bits, mode, params);

    if args.json {
        let report = serde_json::json!({
            "op": name,
            "width": params.total_width,
            "rounding_mode": mode.name(),
            "a": a_bits,
            "b": b_bits,
            "result": result,
            "result_hex": render_pattern(result, Radix::Hex, params),
        });
        println!("{}", report);
    } else {
        println!("{}", render_pattern(result, radix, params));
    }
}

fn run_classify(args: &Args, params: &FormatParams, value: &str) {
    let (bits, _) = parse_pattern(value, params).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    let flags = classify(bits, params);

    if args.json {
        let report = serde_json::json!({
            "op": "classify",
            "width": params.total_width,
            "value": bits,
            "class": flags.class_name(),
        });
        println!("{}", report);
    } else {
        for (name, set) in flags.named() {
            println!("{:<16} {}", name, set as u32);
        }
    }
}

fn run_print(args: &Args, params: &FormatParams, value: &str) {
    let (bits, _) = parse_pattern(value, params).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    let op = unpack(bits, params);
    let flags = classify(bits, params);
    let value = promote(bits, params);

    if args.json {
        let report = serde_json::json!({
            "op": "print",
            "width": params.total_width,
            "hex": render_pattern(bits, Radix::Hex, params),
            "bin": render_pattern(bits, Radix::Bin, params),
            "oct": render_pattern(bits, Radix::Oct, params),
            "dec": bits,
            "value": value,
            "sign": op.sign as u32,
            "exponent": op.exponent,
            "mantissa": op.mantissa,
            "class": flags.class_name(),
        });
        println!("{}", report);
    } else {
        println!("Pattern ({} bits)", params.total_width);
        println!("  Hex:      {}", render_pattern(bits, Radix::Hex, params));
        println!("  Bin:      {}", render_pattern(bits, Radix::Bin, params));
        println!("  Oct:      {}", render_pattern(bits, Radix::Oct, params));
        println!("  Dec:      {}", bits);
        println!("Fields:");
        println!("  Sign:     {}", op.sign as u32);
        println!(
            "  Exponent: {:#x} (biased {}, bias {})",
            op.exponent, op.exponent, params.bias
        );
        println!("  Mantissa: {:#x}", op.mantissa);
        println!("Value:      {} ({:e})", value, value);
        println!("Class:      {}", flags.class_name());
    }
}

fn run_compare_flow(args: &Args, config: &Config) {
    let report = run_compare(config).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    if args.json {
        let modes: Vec<_> = report
            .modes
            .iter()
            .map(|m| {
                serde_json::json!({
                    "mode": m.mode.name(),
                    "add": { "passed": m.add_passed, "failed": m.add_failed, "skipped": m.add_skipped },
                    "mul": { "passed": m.mul_passed, "failed": m.mul_failed, "skipped": m.mul_skipped },
                })
            })
            .collect();
        let out = serde_json::json!({
            "width": config.engine.width,
            "modes": modes,
            "total_failed": report.total_failed(),
        });
        println!("{}", out);
    } else {
        report.print_summary();
        for m in report.mismatches.iter().take(20) {
            println!(
                "MISMATCH {:?} {} a={:#x} b={:#x} got={:#x} expected={:#x}",
                m.op,
                m.mode.name(),
                m.a,
                m.b,
                m.got,
                m.expected
            );
        }
        report.stats.print();
    }

    if report.total_failed() > 0 {
        process::exit(1);
    }
}

/// Main entry point for the floating-point engine CLI.
///
/// # Behavior
///
/// 1. **Configuration**: Parses command-line arguments and loads the TOML
///    configuration file (built-in defaults when the file is absent).
/// 2. **Overrides**: Applies `--width` and `--rounding` on top of the file.
/// 3. **Dispatch**: Runs the selected command and prints the result in the
///    operand's radix, or as JSON with `--json`.
fn main() {
    let args = Args::parse();

    let config: Config = if Path::new(&args.config).exists() {
        let content = fs::read_to_string(&args.config).unwrap_or_else(|e| {
            eprintln!("Error: failed to read {}: {}", args.config, e);
            process::exit(1);
        });
        toml::from_str(&content).unwrap_or_else(|e| {
            eprintln!("Error: failed to parse {}: {}", args.config, e);
            process::exit(1);
        })
    } else {
        Config::default()
    };

    let (params, mode) = resolve(&args, &config);

    match &args.command {
        Command::Add { a, b } => run_binary_op(&args, &params, mode, a, b, add, "add"),
        Command::Mul { a, b } => run_binary_op(&args, &params, mode, a, b, multiply, "mul"),
        Command::Classify { value } => run_classify(&args, &params, value),
        Command::Print { value } => run_print(&args, &params, value),
        Command::Compare => {
            let mut config = config;
            if let Some(w) = args.width {
                config.engine.width = w;
            }
            run_compare_flow(&args, &config);
        }
    }
}
