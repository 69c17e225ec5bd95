// Host-side tests for the loading gate.

#![allow(dead_code)]
mod gate {
    include!("../src/core/gate.rs");
}

use gate::*;

#[test]
fn asset_alone_keeps_waiting() {
    let mut g = LoadGate::new();
    assert_eq!(g.mark(LoadSignal::Asset), GateState::Waiting);
    // Repeating the same signal does not count as the other one
    assert_eq!(g.mark(LoadSignal::Asset), GateState::Waiting);
}

#[test]
fn releases_once_in_either_order() {
    for (first, second) in [
        (LoadSignal::Asset, LoadSignal::PageLoad),
        (LoadSignal::PageLoad, LoadSignal::Asset),
    ] {
        let mut g = LoadGate::new();
        assert_eq!(g.mark(first), GateState::Waiting);
        assert_eq!(g.mark(second), GateState::Released);
        assert_eq!(g.mark(first), GateState::Done);
        assert_eq!(g.mark(second), GateState::Done);
    }
}
