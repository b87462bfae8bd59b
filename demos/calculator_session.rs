//! Calculator Session
//!
//! This example walks through a short calculator session.
//!
//! Key concepts:
//! - Dispatch by operation name
//! - Integer-only and float-only operation families
//! - History with running extrema
//! - Number analysis
//!
//! Run with: cargo run --example calculator_session

use reckoner::calculator::report::format_line;
use reckoner::{CalcOptions, Calculator, Number, Operation};

fn main() {
    println!("=== Calculator Session ===\n");

    let mut calc = Calculator::new();
    let printed = CalcOptions::new().print(true);

    calc.calculate("add", Number::Int(10), Number::Int(5), &printed)
        .unwrap();
    calc.calculate("multiply", Number::Int(-4), Number::Int(8), &printed)
        .unwrap();
    calc.calculate(
        "divide",
        Number::Float(10.0),
        Number::Float(3.0),
        &printed.clone().round(3),
    )
    .unwrap();

    println!("\nRejected requests:");
    for (op, a, b) in [
        ("add", Number::Float(2.5), Number::Int(3)),
        ("divide", Number::Int(6), Number::Int(2)),
        ("divide", Number::Float(1.0), Number::Float(1e-12)),
        ("modulo", Number::Int(7), Number::Int(2)),
    ] {
        if let Err(e) = calc.calculate(op, a, b, &CalcOptions::default()) {
            println!("  {op}({a}, {b}): {e}");
        }
    }

    // Manual sequencing without recording
    let outcome = calc
        .compute(Operation::Subtract, Number::Int(1), Number::Int(100))
        .unwrap();
    println!(
        "\nUnrecorded: {}",
        format_line(Operation::Subtract, Number::Int(1), Number::Int(100), &outcome)
    );

    let history = calc.history();
    println!("\nHistory ({} entries):", history.operation_count());
    for entry in history.entries() {
        println!(
            "  {} {} {} -> {}",
            entry.operation, entry.operand_a, entry.operand_b, entry.result
        );
    }
    println!("Largest result:  {}", history.largest_result());
    println!("Smallest result: {}", history.smallest_result());
    println!("Errors:          {}", calc.error_count());

    println!("\nAnalysis:");
    for n in [7, 42, 91] {
        let analysis = calc.analyze_number(Number::Int(n)).unwrap();
        println!(
            "  {n}: prime={} even={} answer={}",
            analysis.is_prime(),
            analysis.is_even(),
            analysis.is_answer_to_everything()
        );
    }

    println!("\n=== Example Complete ===");
}
