//! End-to-end scenarios for the state machine's transitions and history.

use std::sync::{Arc, Mutex};
use std::thread;
use turnstile::core::Validation;
use turnstile::{machine_config, BuildError, MachineConfig, MachineError, StateMachine};

fn light_switch() -> StateMachine {
    let config = MachineConfig::from_json(
        r#"{
            "initial": "off",
            "states": {
                "off": { "transitions": { "flip": "on" } },
                "on": { "transitions": { "flip": "off" } }
            }
        }"#,
    )
    .unwrap();
    StateMachine::new(config).unwrap()
}

fn document() -> StateMachine {
    let config = machine_config! {
        initial: "draft",
        states: {
            "draft" => { "submit" => "review" },
            "review" => { "approve" => "published", "reject" => "draft" },
            "published" => { "archive" => "archived", "reject" => "draft" },
            "archived" => {},
        },
        validation: Validation::Strict,
    };
    StateMachine::new(config).unwrap()
}

#[test]
fn light_switch_walkthrough() {
    let mut fsm = light_switch();
    assert_eq!(fsm.current_state(), "off");

    fsm.trigger("flip").unwrap();
    assert_eq!(fsm.current_state(), "on");
    fsm.trigger("flip").unwrap();
    assert_eq!(fsm.current_state(), "off");

    assert!(fsm.undo());
    assert_eq!(fsm.current_state(), "on");
    assert!(fsm.undo());
    assert_eq!(fsm.current_state(), "off");
    assert!(!fsm.undo());
    assert_eq!(fsm.history().cursor(), 0);

    assert!(fsm.redo());
    assert_eq!(fsm.current_state(), "on");

    fsm.reset().unwrap();
    assert_eq!(fsm.current_state(), "off");
    assert_eq!(fsm.history().cursor(), 2);
    assert_eq!(fsm.history().path(), vec!["off", "on", "off"]);
    assert!(!fsm.redo());
}

#[test]
fn new_transition_after_undo_drops_redo_tail() {
    let mut fsm = light_switch();
    fsm.trigger("flip").unwrap();
    fsm.trigger("flip").unwrap();
    fsm.trigger("flip").unwrap();
    assert!(fsm.undo());
    assert!(fsm.undo());
    assert_eq!(fsm.current_state(), "on");

    fsm.trigger("flip").unwrap();

    assert_eq!(fsm.current_state(), "off");
    assert_eq!(fsm.history().cursor(), 2);
    assert_eq!(fsm.history().len(), 3);
    assert!(!fsm.redo());
}

#[test]
fn change_undo_redo_round_trip() {
    let mut fsm = document();

    fsm.change_state("archived").unwrap();
    assert!(fsm.undo());
    assert!(fsm.redo());

    assert_eq!(fsm.current_state(), "archived");
}

#[test]
fn failed_operations_leave_machine_untouched() {
    let mut fsm = document();
    fsm.trigger("submit").unwrap();
    let before = fsm.history().clone();

    assert_eq!(
        fsm.change_state("deleted"),
        Err(MachineError::InvalidState("deleted".to_string()))
    );
    assert_eq!(
        fsm.trigger("archive"),
        Err(MachineError::InvalidEvent {
            state: "review".to_string(),
            event: "archive".to_string(),
        })
    );

    assert_eq!(fsm.current_state(), "review");
    assert_eq!(fsm.history(), &before);
}

#[test]
fn error_messages_name_the_culprits() {
    let mut fsm = document();

    let err = fsm.trigger("publish").unwrap_err();
    assert_eq!(
        err.to_string(),
        "No transition for event 'publish' from state 'draft'"
    );

    let err = fsm.change_state("limbo").unwrap_err();
    assert_eq!(err.to_string(), "Unknown state 'limbo'");
}

#[test]
fn states_by_event() {
    let fsm = document();

    assert_eq!(
        fsm.states(None),
        ["draft", "review", "published", "archived"]
    );
    assert_eq!(fsm.states(Some("reject")), ["review", "published"]);
    assert_eq!(fsm.states(Some("submit")), ["draft"]);
    assert!(fsm.states(Some("shred")).is_empty());
}

#[test]
fn clear_history_rebases_reset() {
    let mut fsm = document();
    fsm.trigger("submit").unwrap();
    fsm.trigger("approve").unwrap();

    fsm.clear_history();
    assert!(!fsm.undo());
    assert_eq!(fsm.initial_state(), "published");

    fsm.trigger("archive").unwrap();
    fsm.reset().unwrap();
    assert_eq!(fsm.current_state(), "published");
}

#[test]
fn strict_config_from_json_rejects_dangling_target() {
    let config = MachineConfig::from_json(
        r#"{
            "initial": "a",
            "states": { "a": { "transitions": { "go": "b" } } },
            "validation": "strict"
        }"#,
    )
    .unwrap();

    let err = StateMachine::new(config).unwrap_err();
    assert_eq!(
        err,
        BuildError::UnknownTarget {
            state: "a".to_string(),
            event: "go".to_string(),
            target: "b".to_string(),
        }
    );
}

#[test]
fn lazy_config_fails_when_leaving_unknown_state() {
    let config = MachineConfig::from_json(
        r#"{
            "initial": "a",
            "states": {
                "a": { "transitions": { "go": "b" } },
                "b": { "transitions": { "go": "ghost" } }
            }
        }"#,
    )
    .unwrap();
    let mut fsm = StateMachine::new(config).unwrap();

    fsm.trigger("go").unwrap();
    assert_eq!(
        fsm.trigger("go"),
        Err(MachineError::InvalidState("ghost".to_string()))
    );
    assert_eq!(fsm.current_state(), "b");
}

#[test]
fn shared_machine_behind_a_lock() {
    let fsm = Arc::new(Mutex::new(light_switch()));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let fsm = Arc::clone(&fsm);
            thread::spawn(move || {
                fsm.lock().unwrap().trigger("flip").unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let fsm = fsm.lock().unwrap();
    assert_eq!(fsm.current_state(), "off");
    assert_eq!(fsm.history().len(), 5);
}
