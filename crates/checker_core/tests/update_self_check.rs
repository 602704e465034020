use std::sync::Once;

use checker_core::{
    update, AgentState, DocumentSnapshot, Effect, FieldRole, FieldSnapshot, Msg, RowSnapshot,
    SelfCheckEntry,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(checker_logging::initialize_for_tests);
}

fn url_row(sequence: &str, id: u64, url: &str) -> RowSnapshot {
    RowSnapshot {
        sequence: sequence.to_string(),
        fields: vec![FieldSnapshot {
            id,
            role: FieldRole::Url,
            text: url.to_string(),
            width: 400,
        }],
    }
}

fn open_request(effects: &[Effect]) -> Option<&[String]> {
    effects.iter().find_map(|effect| match effect {
        Effect::OpenSelfCheckWindow { urls } => Some(urls.as_slice()),
        _ => None,
    })
}

#[test]
fn toggle_extracts_rows_and_requests_the_side_window() {
    init_logging();
    let document = DocumentSnapshot {
        rows: vec![
            url_row("1", 1, "https://a.example.com"),
            url_row("2", 2, "https://b.example.com"),
        ],
    };
    let (state, effects) = update(AgentState::new(), Msg::SelfCheckToggled { document });

    assert!(state.self_check_active());
    assert_eq!(
        state.self_check_entries(),
        &[
            SelfCheckEntry {
                sequence: "1".to_string(),
                url: "https://a.example.com".to_string(),
            },
            SelfCheckEntry {
                sequence: "2".to_string(),
                url: "https://b.example.com".to_string(),
            },
        ]
    );
    assert_eq!(
        open_request(&effects),
        Some(
            &[
                "https://a.example.com".to_string(),
                "https://b.example.com".to_string(),
            ][..]
        )
    );
}

#[test]
fn toggle_with_nothing_to_extract_notifies_without_an_open_request() {
    init_logging();
    let document = DocumentSnapshot {
        rows: vec![url_row("1", 1, "")],
    };
    let (state, effects) = update(AgentState::new(), Msg::SelfCheckToggled { document });

    assert!(state.self_check_active());
    assert!(state.self_check_entries().is_empty());
    assert!(open_request(&effects).is_none());
    assert!(effects
        .iter()
        .any(|effect| matches!(effect, Effect::Notify { warning: true, .. })));
}

#[test]
fn non_http_values_are_excluded_from_extraction() {
    init_logging();
    let document = DocumentSnapshot {
        rows: vec![
            url_row("1", 1, "ftp://files.example.com"),
            url_row("2", 2, "not a url"),
            url_row("3", 3, "http://ok.example.com"),
        ],
    };
    let (state, _) = update(AgentState::new(), Msg::SelfCheckToggled { document });

    assert_eq!(state.self_check_entries().len(), 1);
    assert_eq!(state.self_check_entries()[0].url, "http://ok.example.com");
}

#[test]
fn reentering_overwrites_the_previous_extraction() {
    init_logging();
    let first = DocumentSnapshot {
        rows: vec![url_row("1", 1, "https://a.example.com")],
    };
    let (state, _) = update(AgentState::new(), Msg::SelfCheckToggled { document: first });
    // Toggle off, then on again against a changed document.
    let (state, _) = update(
        state,
        Msg::SelfCheckToggled {
            document: DocumentSnapshot::default(),
        },
    );
    let second = DocumentSnapshot {
        rows: vec![url_row("7", 9, "https://b.example.com")],
    };
    let (state, _) = update(state, Msg::SelfCheckToggled { document: second });

    assert_eq!(state.self_check_entries().len(), 1);
    assert_eq!(state.self_check_entries()[0].url, "https://b.example.com");
    assert_eq!(state.self_check_entries()[0].sequence, "7");
}

#[test]
fn ending_self_check_requests_the_close() {
    init_logging();
    let document = DocumentSnapshot {
        rows: vec![url_row("1", 1, "https://a.example.com")],
    };
    let (state, _) = update(AgentState::new(), Msg::SelfCheckToggled { document });
    let (state, effects) = update(state, Msg::SelfCheckEnded);

    assert!(!state.self_check_active());
    assert!(effects.contains(&Effect::CloseSelfCheckWindow));
}

#[test]
fn coordinator_replies_become_notices() {
    init_logging();
    let state = AgentState::new();
    let (state, effects) = update(state, Msg::SelfCheckOpened { count: 2 });
    assert!(matches!(
        &effects[..],
        [Effect::Notify { warning: false, .. }]
    ));

    let (state, effects) = update(state, Msg::SelfCheckOpenFailed {
        message: "window creation returned no tabs".to_string(),
    });
    assert!(matches!(&effects[..], [Effect::Notify { warning: true, .. }]));

    let (state, effects) = update(state, Msg::SelfCheckClosed { count: 1 });
    assert!(matches!(
        &effects[..],
        [Effect::Notify { warning: false, .. }]
    ));

    let (_, effects) = update(state, Msg::SelfCheckNothingToClose);
    assert!(matches!(&effects[..], [Effect::Notify { warning: true, .. }]));
}
