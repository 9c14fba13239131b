//! MIPS pipeline visualizer CLI.
//!
//! This binary drives the pipeline model from the terminal. It performs:
//! 1. **Run:** Load a hex program, tick it at the configured cadence, and draw each cycle.
//! 2. **Decode:** Disassemble individual instruction words.
//! 3. **Hazards:** List forwarding and load-use edges without running the clock.

mod render;

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use mipsviz_core::common::RegisterNaming;
use mipsviz_core::config::Config;
use mipsviz_core::isa::{RawInstruction, decode, disassemble_with};
use mipsviz_core::pipeline::PipelineClock;
use mipsviz_core::sim::{IntervalTicker, Simulator, StopReason, load_program};

#[derive(Parser, Debug)]
#[command(
    name = "mipsviz",
    author,
    version,
    about = "Cycle-by-cycle MIPS 5-stage pipeline visualizer",
    long_about = "Step a short MIPS program through IF/ID/EX/MEM/WB and show forwarding and load-use stalls.\n\nPrograms are text files with one 8-digit hex word per line.\n\nExamples:\n  mipsviz run -f demo.hex --interval-ms 0\n  mipsviz decode 8C220000 00441820\n  mipsviz hazards -f demo.hex --abi"
)]
struct Cli {
    /// Log verbosity when RUST_LOG is unset (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program to completion, one cycle per tick.
    Run {
        /// Program file (one hex word per line).
        #[arg(short, long)]
        file: PathBuf,

        /// JSON configuration file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Milliseconds between ticks (overrides the config).
        #[arg(long)]
        interval_ms: Option<u64>,

        /// Emit a JSON snapshot per cycle and a closing summary instead of text.
        #[arg(long)]
        json: bool,

        /// Draw the occupancy grid after every cycle.
        #[arg(long)]
        trace: bool,

        /// Use ABI register names ($t0, $sp, ...).
        #[arg(long)]
        abi: bool,
    },

    /// Disassemble one or more hex words.
    Decode {
        /// Instruction words, 8 hex digits each.
        #[arg(required = true)]
        words: Vec<String>,

        /// Use ABI register names.
        #[arg(long)]
        abi: bool,
    },

    /// List the hazards in a program.
    Hazards {
        /// Program file (one hex word per line).
        #[arg(short, long)]
        file: PathBuf,

        /// Use ABI register names.
        #[arg(long)]
        abi: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run {
            file,
            config,
            interval_ms,
            json,
            trace,
            abi,
        } => {
            let mut config = config.map_or_else(Config::default, |path| {
                Config::load(&path).unwrap_or_else(|e| fail(&e))
            });
            if let Some(ms) = interval_ms {
                config.clock.tick_interval_ms = ms;
            }
            config.general.trace_cycles |= trace;
            if abi {
                config.display.register_names = RegisterNaming::Abi;
            }
            debug!(?config, "resolved configuration");
            cmd_run(&file, config, json);
        }
        Commands::Decode { words, abi } => cmd_decode(&words, naming(abi)),
        Commands::Hazards { file, abi } => cmd_hazards(&file, naming(abi)),
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

const fn naming(abi: bool) -> RegisterNaming {
    if abi {
        RegisterNaming::Abi
    } else {
        RegisterNaming::Numeric
    }
}

fn fail(err: &dyn std::error::Error) -> ! {
    eprintln!("Error: {err}");
    process::exit(1);
}

/// Loads the program, then ticks it through the pipeline until the last instruction retires.
///
/// Text mode prints the listing, one status line per cycle, and the final grid and
/// statistics. JSON mode prints one snapshot per line, starting with cycle 1, then a
/// summary line.
fn cmd_run(file: &Path, config: Config, json: bool) {
    let program = load_program(file).unwrap_or_else(|e| fail(&e));
    let naming = config.display.register_names;
    let trace = config.general.trace_cycles;
    let ticker = IntervalTicker::from_millis(config.clock.tick_interval_ms);

    let mut sim = Simulator::new(config);
    if let Err(e) = sim.load(program) {
        fail(&e);
    }

    let emit_json = |clock: &PipelineClock| match clock.snapshot(naming).to_json() {
        Ok(line) => println!("{line}"),
        Err(e) => fail(&e),
    };

    if json {
        emit_json(sim.clock());
    } else if let Some(state) = sim.clock().simulation() {
        println!("[*] Program: {}", file.display());
        print!("{}", render::program_listing(state, naming));
        println!();
    }

    let result = sim.run(ticker, |clock, outcome| {
        if json {
            emit_json(clock);
            return;
        }
        if let Some(line) = render::tick_line(outcome) {
            println!("{line}");
        }
        if let (true, Some(state)) = (trace, clock.simulation()) {
            print!("{}", render::grid(state, clock.current_cycle()));
        }
    });

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(e) => fail(&e),
    };

    if json {
        match render::run_summary_json(&outcome, sim.stats().as_ref()) {
            Ok(line) => println!("{line}"),
            Err(e) => fail(&e),
        }
    } else {
        if let Some(state) = sim.clock().simulation() {
            println!();
            print!("{}", render::grid(state, sim.clock().current_cycle()));
        }
        if let Some(stats) = sim.stats() {
            stats.print();
        }
    }
    if outcome.reason != StopReason::Finished {
        eprintln!(
            "[!] stopped after {} ticks at cycle {} ({:?})",
            outcome.ticks, outcome.cycle, outcome.reason
        );
        process::exit(2);
    }
}

/// Prints the disassembly of each word; exits non-zero if any word is malformed.
fn cmd_decode(words: &[String], naming: RegisterNaming) {
    let mut failed = false;
    for text in words {
        match text.parse::<RawInstruction>() {
            Ok(raw) => {
                let decoded = decode(raw.word());
                println!("{raw}  {}", disassemble_with(&decoded, naming));
            }
            Err(e) => {
                eprintln!("Error: {e}");
                failed = true;
            }
        }
    }
    if failed {
        process::exit(1);
    }
}

/// Prints every hazard edge of a program.
fn cmd_hazards(file: &Path, naming: RegisterNaming) {
    let program = load_program(file).unwrap_or_else(|e| fail(&e));
    let mut clock = PipelineClock::new();
    if let Err(e) = clock.start(program) {
        fail(&e);
    }
    let Some(sim) = clock.simulation() else {
        return;
    };

    print!("{}", render::program_listing(sim, naming));
    let hazards = sim.hazards();
    if hazards.is_empty() {
        println!("\nno hazards");
        return;
    }
    println!();
    for edge in hazards.edges() {
        println!(
            "  #{} -> #{}  {:<6} {:?}",
            edge.from,
            edge.to,
            edge.register.name(naming),
            edge.kind
        );
    }
    println!(
        "\n{} forward(s), {} load-use stall(s); completion at cycle {}",
        hazards.forward_count(),
        hazards.stall_count(),
        sim.projected_completion_cycle()
    );
}
