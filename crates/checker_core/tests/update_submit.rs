use std::sync::Once;

use checker_core::{update, AgentState, Effect, FieldRole, FieldSnapshot, Highlight, Msg};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(checker_logging::initialize_for_tests);
}

fn url_field(id: u64, text: &str) -> FieldSnapshot {
    FieldSnapshot {
        id,
        role: FieldRole::Url,
        text: text.to_string(),
        width: 400,
    }
}

#[test]
fn submit_with_in_form_duplicates_is_blocked() {
    init_logging();
    let fields = vec![
        url_field(1, "https://a.example.com"),
        url_field(2, "https://a.example.com"),
    ];
    let (_, effects) = update(AgentState::new(), Msg::FormSubmitted { fields });

    assert!(effects.contains(&Effect::BlockSubmit));
    assert!(effects.contains(&Effect::SetHighlight {
        field: 2,
        highlight: Highlight::Duplicate,
    }));
}

#[test]
fn submit_check_uses_a_fresh_set_not_the_page_history() {
    init_logging();
    // Seed the page-lifetime history with the value.
    let (state, _) = update(
        AgentState::new(),
        Msg::FieldEdited {
            field: url_field(1, "https://a.example.com"),
            row: None,
        },
    );

    // A form containing that value exactly once is fine.
    let (_, effects) = update(
        state,
        Msg::FormSubmitted {
            fields: vec![url_field(1, "https://a.example.com")],
        },
    );
    assert!(!effects.contains(&Effect::BlockSubmit));
}

#[test]
fn empty_values_never_collide_on_submit() {
    init_logging();
    let fields = vec![url_field(1, ""), url_field(2, "")];
    let (_, effects) = update(AgentState::new(), Msg::FormSubmitted { fields });

    assert!(!effects.contains(&Effect::BlockSubmit));
}

#[test]
fn submit_check_can_be_disabled() {
    init_logging();
    let (state, _) = update(AgentState::new(), Msg::CheckOnSubmitToggled(false));
    let fields = vec![
        url_field(1, "https://a.example.com"),
        url_field(2, "https://a.example.com"),
    ];
    let (_, effects) = update(state, Msg::FormSubmitted { fields });

    assert!(effects.is_empty());
}
