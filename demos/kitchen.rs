//! Kitchen Host Loop
//!
//! This demo plays the part of a game host: it forwards scripted clicks to
//! the selection machine, ticks it at 60 frames per second and prints what a
//! renderer would draw whenever the snapshot changes.
//!
//! Key concepts:
//! - Loading the built-in kitchen (or a TOML file given as first argument)
//! - Feeding picks and frame ticks through separate inputs
//! - Rendering only from snapshots
//!
//! Run with: cargo run --example kitchen [-- path/to/kitchen.toml]

use cookpair::logging::init_logger;
use cookpair::selection::{Input, SelectionMachine, Snapshot};
use cookpair::KitchenConfig;
use std::error::Error;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

fn render(frame: usize, snapshot: &Snapshot) {
    let selection = snapshot.selection_label().unwrap_or_default();
    match snapshot.result_label() {
        Some(result) => println!("[frame {frame:>4}] {selection} = {result}"),
        None if selection.is_empty() => println!("[frame {frame:>4}] (choose two ingredients)"),
        None => println!("[frame {frame:>4}] {selection} + ?"),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logger(true)?;

    let config = match std::env::args().nth(1) {
        Some(path) => KitchenConfig::from_file(path)?,
        None => KitchenConfig::builtin()?,
    };
    let mut machine: SelectionMachine = config.into_machine()?;

    println!("=== Kitchen ===\n");
    let names: Vec<&str> = machine.table().palette().iter().map(|i| i.name()).collect();
    println!("Ingredients: {}\n", names.join(", "));

    // (frame, ingredient) clicks, including a repeat, a click during the
    // display and a name the kitchen does not have.
    let clicks = [
        (10, "Egg"),
        (20, "Egg"),
        (30, "Carrot"),
        (60, "Milk"),
        (150, "Bread"),
        (170, "Tofu"),
        (180, "Milk"),
        (300, "Banana"),
        (310, "Apple"),
    ];

    let mut last = machine.snapshot();
    render(0, &last);

    for frame in 1..=450 {
        for (_, name) in clicks.iter().filter(|(at, _)| *at == frame) {
            if let Err(err) = machine.handle(Input::Pick(name.to_string())) {
                tracing::warn!("{err}");
            }
        }
        machine.tick(FRAME);

        let snapshot = machine.snapshot();
        if snapshot != last {
            render(frame, &snapshot);
            last = snapshot;
        }
    }

    println!("\nCompleted rounds: {}", machine.completed_cycles());
    println!("\n=== Demo Complete ===");
    Ok(())
}
