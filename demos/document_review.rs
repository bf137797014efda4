//! Document Review Workflow
//!
//! This example loads a workflow table from JSON and walks a document through
//! review, showing how invalid events are reported and how history behaves.
//!
//! Key concepts:
//! - JSON configuration with strict validation
//! - Error handling for undeclared events and unknown states
//! - Redo tail discarded by a new transition
//!
//! Run with: RUST_LOG=turnstile=trace cargo run --example document_review

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use turnstile::{MachineConfig, StateMachine};

const WORKFLOW: &str = r#"{
    "initial": "draft",
    "states": {
        "draft":     { "transitions": { "submit": "review" } },
        "review":    { "transitions": { "approve": "published", "reject": "draft" } },
        "published": { "transitions": { "archive": "archived" } },
        "archived":  {}
    },
    "validation": "strict"
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Document Review Workflow ===\n");

    let config = MachineConfig::from_json(WORKFLOW)?;
    let mut doc = StateMachine::new(config)?;

    println!("Starting in: {}", doc.current_state());
    println!("Events from here: {:?}", doc.available_events().collect::<Vec<_>>());

    doc.trigger("submit")?;
    println!("\nSubmitted -> {}", doc.current_state());

    if let Err(e) = doc.trigger("archive") {
        println!("Rejected event: {}", e);
    }
    if let Err(e) = doc.change_state("shredded") {
        println!("Rejected jump: {}", e);
    }

    doc.trigger("reject")?;
    println!("\nSent back -> {}", doc.current_state());

    doc.undo();
    println!("Undo -> {} (redo available: {})", doc.current_state(), doc.can_redo());

    doc.trigger("approve")?;
    println!(
        "Approved instead -> {} (redo available: {})",
        doc.current_state(),
        doc.can_redo()
    );

    doc.trigger("archive")?;
    println!("Archived -> {} (final: {})", doc.current_state(), doc.is_final());

    println!("\nHistory:");
    for (i, entry) in doc.history().entries().iter().enumerate() {
        let marker = if i == doc.history().cursor() { ">" } else { " " };
        println!("  {} {} at {}", marker, entry.state, entry.entered_at);
    }

    println!("\nStates that can be rejected: {:?}", doc.states(Some("reject")));

    println!("\n=== Example Complete ===");
    Ok(())
}
