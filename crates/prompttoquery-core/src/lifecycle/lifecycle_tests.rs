#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

// Valid transitions

#[test_case(ClientState::Unbound, ClientState::Bound ; "unbound to bound")]
#[test_case(ClientState::Bound, ClientState::Ready ; "bound to ready")]
#[test_case(ClientState::Unbound, ClientState::Failed ; "unbound to failed")]
#[test_case(ClientState::Bound, ClientState::Failed ; "bound to failed")]
fn ClientState___valid_transition___allowed(from: ClientState, to: ClientState) {
    assert!(from.can_transition_to(to));
}

// Invalid transitions

#[test_case(ClientState::Unbound, ClientState::Ready ; "skip binding")]
#[test_case(ClientState::Ready, ClientState::Bound ; "no reset")]
#[test_case(ClientState::Ready, ClientState::Failed ; "ready is final")]
#[test_case(ClientState::Failed, ClientState::Bound ; "failed to bound")]
#[test_case(ClientState::Failed, ClientState::Ready ; "no reinitialization")]
#[test_case(ClientState::Bound, ClientState::Bound ; "self transition")]
fn ClientState___invalid_transition___rejected(from: ClientState, to: ClientState) {
    assert!(!from.can_transition_to(to));
}

#[test]
fn ClientState___default___is_unbound() {
    assert_eq!(ClientState::default(), ClientState::Unbound);
}

#[test]
fn ClientState___can_handle_requests___only_when_ready() {
    assert!(ClientState::Ready.can_handle_requests());
    assert!(!ClientState::Unbound.can_handle_requests());
    assert!(!ClientState::Bound.can_handle_requests());
    assert!(!ClientState::Failed.can_handle_requests());
}

#[test]
fn ClientState___is_terminal___ready_and_failed() {
    assert!(ClientState::Ready.is_terminal());
    assert!(ClientState::Failed.is_terminal());
    assert!(!ClientState::Unbound.is_terminal());
    assert!(!ClientState::Bound.is_terminal());
}

#[test]
fn ClientState___display___matches_variant_name() {
    assert_eq!(ClientState::Bound.to_string(), "Bound");
    assert_eq!(ClientState::Ready.to_string(), "Ready");
}

#[test]
fn ClientState___serialize___uses_snake_case() {
    let json = serde_json::to_string(&ClientState::Unbound).unwrap();

    assert_eq!(json, "\"unbound\"");
}
