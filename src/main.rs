// Copyright (c) 2024 Mudit Bhargava
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.
//

// main.rs
//
// Command-line entry point: reads a program, runs the Tomasulo/ROB
// simulator, and prints its report.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::error;

use tomasulo_sim::utils::logger;
use tomasulo_sim::utils::parser::parse_program;
use tomasulo_sim::{engine, report, SimulatorConfig};

#[derive(Parser)]
#[command(name = "tomasulo_sim")]
#[command(about = "A cycle-accurate simulator of Tomasulo's algorithm with a reorder buffer")]
#[command(version)]
struct Cli {
    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulator and print the per-instruction stage report
    Run {
        /// Program file, one instruction per line (`OPCODE WRITE READ1 READ2 ...`)
        input: PathBuf,

        /// Stop the simulation after this many cycles even if unfinished
        #[arg(long, default_value_t = 1000)]
        max_cycles: usize,

        /// Reorder buffer capacity
        #[arg(long)]
        rob_capacity: Option<usize>,

        /// Emit the full per-instruction history and hazard messages as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print only the cycle every instruction commits by
    Max {
        /// Program file, one instruction per line (`OPCODE WRITE READ1 READ2 ...`)
        input: PathBuf,

        /// Stop searching after this many cycles
        #[arg(long, default_value_t = 1000)]
        max_cycles: usize,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(cli.verbose as i8);

    let result = match cli.command {
        Commands::Run { input, max_cycles, rob_capacity, json } => run_command(input, max_cycles, rob_capacity, json),
        Commands::Max { input, max_cycles } => max_command(input, max_cycles),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("{}", message);
            eprintln!("error: {}", message);
            ExitCode::FAILURE
        },
    }
}

fn read_program(input: &PathBuf) -> Result<Vec<tomasulo_sim::Instruction>, String> {
    let source = fs::read_to_string(input).map_err(|e| format!("reading {}: {}", input.display(), e))?;
    parse_program(&source).map_err(|e| e.to_string())
}

fn run_command(input: PathBuf, max_cycles: usize, rob_capacity: Option<usize>, json: bool) -> Result<(), String> {
    let instructions = read_program(&input)?;
    let mut config = SimulatorConfig::new().with_max_cycles(max_cycles);
    if let Some(capacity) = rob_capacity {
        config = config.with_rob_capacity(capacity);
    }
    let result = engine::run(instructions, &config);

    if json {
        let text = report::render_json(&result.tracker).map_err(|e| e.to_string())?;
        println!("{}", text);
    } else {
        print!("{}", report::render_text(&result.tracker));
    }

    if result.terminal_cycle.is_none() {
        eprintln!("warning: cycle cap ({}) reached before every instruction committed", max_cycles);
    }
    Ok(())
}

fn max_command(input: PathBuf, max_cycles: usize) -> Result<(), String> {
    let instructions = read_program(&input)?;
    match engine::get_max(instructions, max_cycles) {
        Some(cycle) => println!("{}", cycle),
        None => println!("did not complete within {} cycles", max_cycles),
    }
    Ok(())
}
