//! Hack ALU command-line simulator.
//!
//! This binary evaluates the bit-level engine from the shell. It provides:
//! 1. **eval:** Run one of the 18 named Hack operations and print the four-stage trace.
//! 2. **control:** Run an arbitrary six-bit control word, naming the matching operation.
//! 3. **add / sub:** Run the ripple-carry layer and print the per-bit carry trace.
//! 4. **ops:** List the operation table.
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

use std::fmt::{self, Write as _};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use hackalu_core::codec::{NumericBase, bits_to_binary, bits_to_decimal};
use hackalu_core::common::{AluError, Bits, HACK_WORD_WIDTH};
use hackalu_core::hack::{ControlBits, HackAlu, HackAluResult, Operation, StageOutput};
use hackalu_core::ops::{AluResult, Flags, add_full, sub_via_twos_complement};

#[derive(Parser, Debug)]
#[command(
    name = "hackalu",
    author,
    version,
    about = "Bit-precise Hack ALU simulator",
    long_about = "Evaluate the Nand2Tetris Hack ALU bit by bit.\n\nExamples:\n  hackalu eval x+y --x 7 --y 9\n  hackalu eval x-y --x 0x10 --y 3 --base hex --signed\n  hackalu control 010011 --x 5 --y 3\n  hackalu add --x 15 --y 1 --width 4\n  hackalu ops"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a named Hack operation (`x+y`, `!x`, `y-1`, ...).
    Eval {
        /// Operation symbol; see `hackalu ops`.
        #[arg(allow_hyphen_values = true)]
        operation: String,

        #[command(flatten)]
        operands: Operands,
    },

    /// Run a raw control word `zx nx zy ny f no`, e.g. `000010` or `0b000010`.
    Control {
        /// Six binary digits.
        word: String,

        #[command(flatten)]
        operands: Operands,
    },

    /// Ripple-carry addition with per-bit trace.
    Add {
        #[command(flatten)]
        operands: Operands,
    },

    /// Ripple-carry subtraction (`x + (!y + 1)`) with per-bit trace.
    Sub {
        #[command(flatten)]
        operands: Operands,
    },

    /// List the 18 operations with control words and descriptions.
    Ops {
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
struct Operands {
    /// First operand, in `--base`.
    #[arg(short, long, allow_hyphen_values = true)]
    x: String,

    /// Second operand, in `--base`.
    #[arg(short, long, allow_hyphen_values = true)]
    y: String,

    /// Operand width in bits (1-64).
    #[arg(short, long, default_value_t = HACK_WORD_WIDTH)]
    width: usize,

    /// Base of the operands and of printed values: dec, hex or bin.
    #[arg(short, long, default_value = "dec")]
    base: NumericBase,

    /// Read and print values as two's-complement.
    #[arg(short, long)]
    signed: bool,

    /// Print the full result as JSON.
    #[arg(long)]
    json: bool,
}

impl Operands {
    fn parse(&self) -> Result<(Bits, Bits), AluError> {
        let x = self.base.parse(&self.x, self.width, self.signed)?;
        let y = self.base.parse(&self.y, self.width, self.signed)?;
        Ok((x, y))
    }

    fn show(&self, bits: &Bits) -> String {
        let text = self.base.format(bits, self.signed);
        match self.base {
            NumericBase::Decimal => format!("{} ({text})", bits_to_binary(bits)),
            NumericBase::Hex | NumericBase::Binary => {
                format!("{text} ({})", bits_to_decimal(bits, self.signed))
            }
        }
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Alu(#[from] AluError),
    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("output failed: {0}")]
    Format(#[from] fmt::Error),
}

#[derive(Serialize, Debug)]
struct OperationRow {
    symbol: &'static str,
    control: String,
    description: &'static str,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli.command) {
        Ok(out) => {
            print!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            warn!(error = %e, "command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Executes one subcommand and returns what it prints.
fn run(command: &Commands) -> Result<String, CliError> {
    debug!(?command, "dispatching");
    match command {
        Commands::Eval {
            operation,
            operands,
        } => {
            let (x, y) = operands.parse()?;
            let result = HackAlu::execute_named(&x, &y, operation)?;
            let control = operation.parse::<Operation>()?.control_bits();
            render_hack(operands, control, &x, &y, &result)
        }
        Commands::Control { word, operands } => {
            let control: ControlBits = word.parse()?;
            let (x, y) = operands.parse()?;
            let result = HackAlu::execute(&x, &y, control)?;
            render_hack(operands, control, &x, &y, &result)
        }
        Commands::Add { operands } => {
            let (x, y) = operands.parse()?;
            let result = add_full(&x, &y, operands.signed)?;
            render_ripple(operands, "+", &x, &y, &result)
        }
        Commands::Sub { operands } => {
            let (x, y) = operands.parse()?;
            let result = sub_via_twos_complement(&x, &y, operands.signed)?;
            render_ripple(operands, "-", &x, &y, &result)
        }
        Commands::Ops { json } => render_ops(*json),
    }
}

fn render_hack(
    operands: &Operands,
    control: ControlBits,
    x: &Bits,
    y: &Bits,
    result: &HackAluResult,
) -> Result<String, CliError> {
    if operands.json {
        return Ok(serde_json::to_string_pretty(result)? + "\n");
    }

    let mut out = String::new();
    match control.operation() {
        Some(op) => writeln!(out, "Operation: {op} ({})", op.description())?,
        None => writeln!(out, "Operation: (none)")?,
    }
    writeln!(out, "Control:   {control}  (zx nx zy ny f no)")?;
    writeln!(out, "x:         {}", operands.show(x))?;
    writeln!(out, "y:         {}", operands.show(y))?;
    writeln!(out, "Stages:")?;
    for (i, step) in result.steps.iter().enumerate() {
        writeln!(
            out,
            "  {}. {:<13} {:<40} -> {}",
            i + 1,
            step.stage().name(),
            step.description,
            bits_to_binary(stage_bits(&step.output))
        )?;
    }
    writeln!(out, "Result:    {}", operands.show(&result.result))?;
    writeln!(out, "Flags:     {}", flags_line(result.flags))?;
    Ok(out)
}

fn render_ripple(
    operands: &Operands,
    symbol: &str,
    x: &Bits,
    y: &Bits,
    result: &AluResult,
) -> Result<String, CliError> {
    if operands.json {
        return Ok(serde_json::to_string_pretty(result)? + "\n");
    }

    let mut out = String::new();
    writeln!(out, "x:      {}", operands.show(x))?;
    writeln!(out, "y:      {}", operands.show(y))?;
    writeln!(out, "x {symbol} y:")?;
    for step in &result.steps {
        writeln!(out, "  {}", step.description)?;
    }
    writeln!(out, "Result: {}", operands.show(&result.result))?;
    writeln!(out, "Flags:  {}", flags_line(result.flags))?;
    Ok(out)
}

fn render_ops(json: bool) -> Result<String, CliError> {
    let rows: Vec<OperationRow> = Operation::ALL
        .iter()
        .map(|op| OperationRow {
            symbol: op.symbol(),
            control: op.control_bits().to_string(),
            description: op.description(),
        })
        .collect();
    if json {
        return Ok(serde_json::to_string_pretty(&rows)? + "\n");
    }

    let mut out = String::new();
    writeln!(out, "{:<5} {:<7} DESCRIPTION", "OP", "CONTROL")?;
    for row in &rows {
        writeln!(
            out,
            "{:<5} {:<7} {}",
            row.symbol, row.control, row.description
        )?;
    }
    Ok(out)
}

fn stage_bits(output: &StageOutput) -> &Bits {
    match output {
        StageOutput::PreprocessX { x_processed } => x_processed,
        StageOutput::PreprocessY { y_processed } => y_processed,
        StageOutput::Compute { raw_result, .. } => raw_result,
        StageOutput::Postprocess { final_result, .. } => final_result,
    }
}

fn flags_line(flags: Flags) -> String {
    format!(
        "zero={} sign={} overflow={} carry={}",
        u8::from(flags.zero),
        u8::from(flags.sign),
        u8::from(flags.overflow),
        u8::from(flags.carry)
    )
}
