//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - Typed state and event names via `state_enum!`
//! - Undo/redo through the transition history
//!
//! Run with: cargo run --example traffic_light

use turnstile::{state_enum, StateMachineBuilder};

state_enum! {
    enum TrafficLight {
        Red,
        Yellow,
        Green,
    }
}

state_enum! {
    enum Signal {
        Timer,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Traffic Light State Machine ===\n");

    // Create cyclic state machine
    let mut machine = StateMachineBuilder::new()
        .initial(TrafficLight::Red)
        .transition(TrafficLight::Red, Signal::Timer, TrafficLight::Green)
        .transition(TrafficLight::Green, Signal::Timer, TrafficLight::Yellow)
        .transition(TrafficLight::Yellow, Signal::Timer, TrafficLight::Red)
        .build()?;

    println!("Initial state: {}\n", machine.current_state());

    println!("Transition sequence:");
    for _ in 0..4 {
        let from = machine.current_state().parse::<TrafficLight>()?;
        machine.trigger(Signal::Timer)?;
        println!("  {} -> {}", from, machine.current_state());
    }

    println!("\nStepping back through history:");
    while machine.undo() {
        println!("  undo -> {}", machine.current_state());
    }

    println!("\nAll lights: {:?}", machine.states(None));
    println!(
        "Lights reacting to {}: {:?}",
        Signal::Timer,
        machine.states(Some(Signal::Timer.name()))
    );

    println!("\n=== Example Complete ===");
    Ok(())
}
