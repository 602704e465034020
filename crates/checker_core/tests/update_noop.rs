use checker_core::{update, AgentState, Msg};

#[test]
fn update_is_noop() {
    let state = AgentState::new();
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
