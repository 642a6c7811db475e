//! Drives the calculator through a short button-press session and prints
//! the display after each step.
//!
//! Run with `RUST_LOG=debug` to see the per-press event log.

use keypad_calc::prelude::*;
use tracing_subscriber::EnvFilter;

fn show(app: &CalculatorApp, label: &str) {
    println!(
        "{label:<24} expr: {:<10} out: {}",
        app.expression(),
        app.output()
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut app = CalculatorApp::new();
    show(&app, "start");

    // 12+7=
    for id in ["btn-1", "btn-2", "btn-plus", "btn-7", "btn-equals"] {
        app.dispatch(&DomEvent::click(id));
    }
    show(&app, "12+7=");

    // Continue from the result
    for id in ["btn-times", "btn-2", "btn-equals"] {
        app.dispatch(&DomEvent::click(id));
    }
    show(&app, "chain *2=");

    // Guards in action: 0.5 with a stray second decimal point
    app.dispatch(&DomEvent::click("btn-clear"));
    for id in ["btn-decimal", "btn-5", "btn-decimal", "btn-times", "btn-2", "btn-equals"] {
        app.dispatch(&DomEvent::click(id));
    }
    show(&app, ".5.*2=");

    // Division by zero and recovery
    app.dispatch(&DomEvent::click("btn-clear"));
    for id in ["btn-1", "btn-divide", "btn-0", "btn-equals"] {
        app.dispatch(&DomEvent::click(id));
    }
    show(&app, "1/0=");
    app.dispatch(&DomEvent::click("btn-clear"));
    show(&app, "after AC");

    // Theme toggle
    app.dispatch(&DomEvent::click("btn-theme"));
    println!("theme is now {:?}", app.theme());

    println!("\nhistory:");
    for entry in app.editor().history().iter_rev() {
        println!("  {}", entry.display());
    }
}
