//! Trit Arithmetic - CLI Entry Point
//!
//! Commands:
//! - `trit-arith demo` - Walk through trits, gates and packed arithmetic
//! - `trit-arith gates [name]` - Print gate truth tables
//! - `trit-arith calc <op> <x> <y>` - Tritwise logic or arithmetic on integers
//! - `trit-arith shift <x> <d>` - Shift a packed value
//! - `trit-arith registers` - Dump the Setun-1958 register file
//! - `trit-arith self-test` - Run the built-in self-test

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tritarith::ternary::arith;
use tritarith::{ArithConfig, Gate, Registers, Trit, TritError, TritOps, TritString, UnaryGate};

#[derive(Parser)]
#[command(name = "trit-arith")]
#[command(author = "Yigit")]
#[command(version = "0.1.0")]
#[command(about = "Balanced ternary trits, logic gates and packed 32-trit integers")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON file with `index_policy` / `carry_policy`
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Fail on out-of-range positions and dropped carries
    #[arg(long, global = true)]
    strict: bool,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk through the ternary primitives
    Demo,
    /// Print gate truth tables
    Gates {
        /// Gate name (all gates if omitted)
        name: Option<String>,
    },
    /// Apply an operation to two integers encoded as trit-strings
    #[command(allow_negative_numbers = true)]
    Calc {
        op: CalcOp,
        x: i64,
        y: i64,
        /// Declared length of both operands
        #[arg(short, long, default_value = "18")]
        len: u8,
    },
    /// Shift a value: positive toward the least significant trit
    #[command(allow_negative_numbers = true)]
    Shift {
        x: i64,
        d: i32,
        /// Declared length of the operand
        #[arg(short, long, default_value = "18")]
        len: u8,
    },
    /// Show the Setun-1958 register file
    Registers {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Run the built-in self-test
    SelfTest,
}

#[derive(Clone, Copy, ValueEnum)]
enum CalcOp {
    Add,
    Sub,
    And,
    Or,
    Xor,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match load_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Some(Commands::Gates { name }) => print_gates(name.as_deref()),
        Some(Commands::Calc { op, x, y, len }) => calc(&config, op, x, y, len),
        Some(Commands::Shift { x, d, len }) => shift_value(x, d, len),
        Some(Commands::Registers { json }) => show_registers(json),
        Some(Commands::SelfTest) => {
            run_self_test();
            Ok(())
        }
        Some(Commands::Demo) | None => {
            demo_ternary_primitives();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn default_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

fn init_logging(verbose: u8) {
    let default = default_log_level(verbose);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn load_config(cli: &Cli) -> Result<ArithConfig, TritError> {
    let config = match &cli.config {
        Some(path) => ArithConfig::load(path)?,
        None => ArithConfig::default(),
    };
    let config = if cli.strict { ArithConfig::strict() } else { config };
    tracing::info!(?config, "arithmetic policies");
    Ok(config)
}

fn print_gates(name: Option<&str>) -> Result<(), TritError> {
    match name {
        Some(name) => {
            let gate: Gate = name.parse()?;
            println!("{}", gate);
        }
        None => {
            for gate in UnaryGate::ALL {
                println!("{}", gate.name());
                for a in Trit::ALL {
                    println!("  {} -> {}", a, gate.apply(a));
                }
                println!();
            }
            for gate in Gate::ALL {
                println!("{}", gate);
            }
        }
    }
    Ok(())
}

fn calc(config: &ArithConfig, op: CalcOp, x: i64, y: i64, len: u8) -> Result<(), TritError> {
    let a = TritString::from_i64(x, len)?;
    let b = TritString::from_i64(y, len)?;

    let (symbol, result) = match op {
        CalcOp::Add => ("+", config.add(&a, &b)?),
        CalcOp::Sub => ("-", config.sub(&a, &b)?),
        CalcOp::And => ("and", arith::and(&a, &b)),
        CalcOp::Or => ("or", arith::or(&a, &b)),
        CalcOp::Xor => ("xor", arith::xor(&a, &b)),
    };

    println!("  {} ({})", a, x);
    println!("{} {} ({})", symbol, b, y);
    println!("= {} ({})", result, result.to_i64());
    println!("  sign: {}", result.sign().symbol_logic());
    Ok(())
}

fn shift_value(x: i64, d: i32, len: u8) -> Result<(), TritError> {
    let a = TritString::from_i64(x, len)?;
    let shifted = arith::shift(&a, d);
    println!("  {} ({})", a, x);
    println!(">> {} = {} ({})", d, shifted, shifted.to_i64());
    Ok(())
}

fn show_registers(json: bool) -> Result<(), TritError> {
    let regs = Registers::new();
    if json {
        let text = serde_json::to_string_pretty(&regs).map_err(|e| TritError::Config(e.to_string()))?;
        println!("{}", text);
    } else {
        for (name, reg) in regs.iter() {
            println!("{:>3}({:>2}) {}", name, reg.len(), reg);
        }
    }
    Ok(())
}

fn demo_ternary_primitives() {
    println!("━━━ Balanced Ternary Demo ━━━");
    println!();

    println!("Trits (single balanced ternary digits):");
    for t in Trit::ALL {
        println!(
            "  {:>2} = {} = {} = {}",
            t.to_i8(),
            t.symbol(),
            t.symbol_char(),
            t.symbol_logic()
        );
    }
    println!();

    println!("Full adder:");
    let (sum, carry) = Trit::N.full_add(Trit::P, Trit::P);
    println!("  - + + + + = {} carry {}", sum, carry);
    println!();

    println!("Gates:");
    for gate in [Gate::And, Gate::Or, Gate::Xor, Gate::Magnitude] {
        let row: Vec<String> = Trit::ALL
            .iter()
            .map(|&b| gate.apply(Trit::P, b).to_string())
            .collect();
        println!("  {:<10} + with (-, 0, +): {}", gate.name(), row.join(" "));
    }
    println!();

    println!("Trit-strings (up to 32 trits):");
    let x = TritString::from_i64(12345, 18).unwrap_or_default();
    let y = TritString::from_i64(-6789, 18).unwrap_or_default();
    println!("  x = {:?}", x);
    println!("  y = {:?}", y);
    println!("  x + y = {}", arith::add(&x, &y).to_i64());
    println!("  x - y = {}", arith::sub(&x, &y).to_i64());
    println!("  x min y = {}", x.ternary_min(&y));
    println!("  x << 2 = {}", arith::shift(&x, -2).to_i64());
    println!();

    println!("Registers:");
    let mut regs = Registers::new();
    regs.k.set_true(0);
    regs.s = arith::add(&regs.k, &regs.k);
    println!("  K + K     = {}", regs.s);
    regs.s = arith::sub(&regs.s, &regs.s);
    println!("  S - S     = {}", regs.s);
    println!();

    println!("✓ Core ternary primitives working!");
}

fn run_self_test() {
    println!("━━━ Trit Arithmetic Self-Test ━━━");
    println!();

    let mut passed = 0;
    let mut failed = 0;

    // Test 1: Trit negation involution
    print!("Trit negation involution... ");
    let ok = Trit::ALL.iter().all(|&t| t.neg().neg() == t);
    if ok { println!("✓"); passed += 1; }
    else { println!("✗"); failed += 1; }

    // Test 2: Full adder
    print!("Full adder (- + + + +)... ");
    if Trit::N.full_add(Trit::P, Trit::P) == (Trit::P, Trit::O) {
        println!("✓");
        passed += 1;
    } else {
        println!("✗");
        failed += 1;
    }

    // Test 3: Conversion roundtrip
    print!("Trit-string conversion roundtrip... ");
    let ok = [-9841i64, -100, -1, 0, 1, 100, 9841]
        .iter()
        .all(|&v| TritString::from_i64(v, 9).map(|t| t.to_i64()) == Ok(v));
    if ok { println!("✓"); passed += 1; }
    else { println!("✗"); failed += 1; }

    // Test 4: Add then subtract
    print!("Register K + K - (K + K) = 0... ");
    let mut k = TritString::new(9);
    k.set_true(0);
    let doubled = arith::add(&k, &k);
    if arith::sub(&doubled, &doubled).is_zero() {
        println!("✓");
        passed += 1;
    } else {
        println!("✗");
        failed += 1;
    }

    // Test 5: Sign
    print!("Sign from most significant trit... ");
    let x = TritString::new(3).with(0, Trit::P).with(2, Trit::N);
    if x.sign() == Trit::N {
        println!("✓");
        passed += 1;
    } else {
        println!("✗ (got {:?})", x.sign());
        failed += 1;
    }

    // Test 6: Shift saturation
    print!("Shift by full width clears... ");
    let full = TritString::from_i64(TritString::max_value(32), 32).unwrap_or_default();
    if arith::shift(&full, 32).low_bits() == 0 && arith::shift(&full, -32).low_bits() == 0 {
        println!("✓");
        passed += 1;
    } else {
        println!("✗");
        failed += 1;
    }

    // Test 7: Checked overflow
    print!("Checked add reports overflow... ");
    let max = TritString::from_i64(13, 3).unwrap_or_default();
    let one = TritString::from_i64(1, 3).unwrap_or_default();
    if ArithConfig::strict().add(&max, &one).is_err() {
        println!("✓");
        passed += 1;
    } else {
        println!("✗");
        failed += 1;
    }

    println!();
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Results: {} passed, {} failed", passed, failed);

    if failed == 0 {
        println!("✓ All tests passed!");
    } else {
        std::process::exit(1);
    }
}
