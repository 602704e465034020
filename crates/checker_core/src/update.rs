use std::collections::HashSet;

use url::Url;

use crate::check::{check_value, normalize_value, Classification};
use crate::{
    AgentState, DocumentSnapshot, Effect, FieldId, FieldSnapshot, Highlight, Msg, RowSnapshot,
    SelfCheckEntry,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AgentState, msg: Msg) -> (AgentState, Vec<Effect>) {
    let effects = match msg {
        Msg::FieldEdited { field, row } => {
            let mut effects = Vec::new();
            check_edited_field(&mut state, &field, &mut effects);
            if field.is_eligible_url_field() {
                if let Some(row) = row {
                    derive_level(&field.text, &row, &mut effects);
                }
            }
            effects
        }
        Msg::FormSubmitted { fields } => check_submitted_form(&state, &fields),
        Msg::CaseSensitiveToggled(enabled) => {
            if state.settings.case_sensitive != enabled {
                state.settings.case_sensitive = enabled;
                // The set holds values normalized under the old toggle.
                state.seen.clear();
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::CheckOnSubmitToggled(enabled) => {
            state.settings.check_on_submit = enabled;
            state.mark_dirty();
            Vec::new()
        }
        Msg::NotificationsToggled(enabled) => {
            state.settings.show_notifications = enabled;
            state.mark_dirty();
            Vec::new()
        }
        Msg::ClearHistory => {
            state.seen.clear();
            state.mark_dirty();
            let mut effects = vec![Effect::ClearAllHighlights];
            push_notice(
                &mut effects,
                state.settings.show_notifications,
                "Entry history cleared.",
                false,
            );
            effects
        }
        Msg::BatchPasted { raw, document } => {
            let urls = parse_urls(&raw);
            if urls.is_empty() {
                return (state, Vec::new());
            }
            state.batch.load(urls);
            state.mark_dirty();
            fill_from_queue(&mut state, &document)
        }
        Msg::FillRequested { document } => fill_from_queue(&mut state, &document),
        Msg::SelfCheckToggled { document } => {
            state.self_check_active = !state.self_check_active;
            state.mark_dirty();
            if !state.self_check_active {
                return (state, Vec::new());
            }
            // Rebuilt from scratch on every extraction; re-entering while
            // active overwrites the previous list without closing its tabs.
            state.self_check_entries = extract_entries(&document);
            let show = state.settings.show_notifications;
            let mut effects = Vec::new();
            if state.self_check_entries.is_empty() {
                push_notice(&mut effects, show, "No links available for self-check.", true);
            } else {
                push_notice(
                    &mut effects,
                    show,
                    format!(
                        "Extracted {} links for self-check.",
                        state.self_check_entries.len()
                    ),
                    false,
                );
                let urls = state
                    .self_check_entries
                    .iter()
                    .map(|entry| entry.url.clone())
                    .collect();
                effects.push(Effect::OpenSelfCheckWindow { urls });
            }
            effects
        }
        Msg::SelfCheckEnded => {
            state.self_check_active = false;
            state.mark_dirty();
            let mut effects = Vec::new();
            push_notice(
                &mut effects,
                state.settings.show_notifications,
                "Closing self-check window...",
                false,
            );
            effects.push(Effect::CloseSelfCheckWindow);
            effects
        }
        Msg::SelfCheckOpened { count } => {
            single_notice(&state, format!("Opened {count} tabs for self-check."), false)
        }
        Msg::SelfCheckOpenFailed { message } => single_notice(
            &state,
            format!("Could not open self-check window: {message}"),
            true,
        ),
        Msg::SelfCheckClosed { count } => {
            single_notice(&state, format!("Closed {count} self-check tabs."), false)
        }
        Msg::SelfCheckCloseFailed { message } => single_notice(
            &state,
            format!("Could not close self-check tabs: {message}"),
            true,
        ),
        Msg::SelfCheckNothingToClose => {
            single_notice(&state, "No self-check tabs to close.", true)
        }
        Msg::PanelMoved { left, top } => {
            state.panel.left = left;
            state.panel.top = top;
            vec![Effect::SavePanelSettings(state.panel)]
        }
        Msg::PanelMinimizeToggled => {
            state.panel.minimized = !state.panel.minimized;
            state.mark_dirty();
            vec![Effect::SavePanelSettings(state.panel)]
        }
        Msg::RestorePanelSettings(panel) => {
            state.panel = panel;
            state.mark_dirty();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn parse_urls(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

fn push_notice(
    effects: &mut Vec<Effect>,
    show_notifications: bool,
    message: impl Into<String>,
    warning: bool,
) {
    if show_notifications {
        effects.push(Effect::Notify {
            message: message.into(),
            warning,
        });
    }
}

fn single_notice(state: &AgentState, message: impl Into<String>, warning: bool) -> Vec<Effect> {
    let mut effects = Vec::new();
    push_notice(
        &mut effects,
        state.settings.show_notifications,
        message,
        warning,
    );
    effects
}

/// Duplicate check for one debounced edit.
fn check_edited_field(state: &mut AgentState, field: &FieldSnapshot, effects: &mut Vec<Effect>) {
    if !field.is_wide() {
        effects.push(Effect::SetHighlight {
            field: field.id,
            highlight: Highlight::Neutral,
        });
        return;
    }

    let show = state.settings.show_notifications;
    let outcome = check_value(&mut state.seen, &field.text, state.settings.case_sensitive);
    if outcome.tracked {
        state.mark_dirty();
    }

    let highlight = match outcome.classification {
        Classification::Duplicate => Highlight::Duplicate,
        Classification::QueryMarker => Highlight::QueryMarker,
        Classification::FragmentMarker => Highlight::FragmentMarker,
        Classification::Neutral => Highlight::Neutral,
    };
    effects.push(Effect::SetHighlight {
        field: field.id,
        highlight,
    });

    match outcome.classification {
        Classification::Duplicate => push_notice(
            effects,
            show,
            format!("Duplicate entry detected: \"{}\"", field.text),
            false,
        ),
        Classification::QueryMarker => push_notice(
            effects,
            show,
            "URL contains '?'; verify the query string before keeping it.",
            false,
        ),
        Classification::FragmentMarker => push_notice(
            effects,
            show,
            "URL contains '#'; this may be a same-page navigation link.",
            false,
        ),
        Classification::Neutral => {}
    }
}

/// Writes the derived path depth into the row's level field.
///
/// No-op when the row lacks either a URL slot or a level field. An empty
/// URL clears the level field without flashing it.
fn derive_level(url_text: &str, row: &RowSnapshot, effects: &mut Vec<Effect>) {
    let Some(level) = row.level_field() else {
        return;
    };
    if !row.has_url_field() {
        return;
    }

    let url = url_text.trim();
    if url.is_empty() {
        effects.push(Effect::SetFieldText {
            field: level.id,
            text: String::new(),
        });
        return;
    }

    effects.push(Effect::SetFieldText {
        field: level.id,
        text: crate::path_depth(url).to_string(),
    });
    effects.push(Effect::FlashField { field: level.id });
}

/// Submit-time scan: duplicates within the submitted form itself, checked
/// against a fresh set rather than the page-lifetime history.
fn check_submitted_form(state: &AgentState, fields: &[FieldSnapshot]) -> Vec<Effect> {
    if !state.settings.check_on_submit {
        return Vec::new();
    }

    let mut effects = Vec::new();
    let mut current = HashSet::new();
    let mut has_duplicates = false;
    for field in fields {
        if field.is_wide() {
            let value = normalize_value(&field.text, state.settings.case_sensitive);
            if !value.trim().is_empty() && current.contains(&value) {
                has_duplicates = true;
                effects.push(Effect::SetHighlight {
                    field: field.id,
                    highlight: Highlight::Duplicate,
                });
            } else {
                current.insert(value);
            }
        } else {
            effects.push(Effect::SetHighlight {
                field: field.id,
                highlight: Highlight::Neutral,
            });
        }
    }

    if has_duplicates {
        effects.push(Effect::BlockSubmit);
        push_notice(
            &mut effects,
            state.settings.show_notifications,
            "Form contains duplicate entries; please review before submitting.",
            true,
        );
    }
    effects
}

fn next_empty_url_field<'a>(
    document: &'a DocumentSnapshot,
    used: &HashSet<FieldId>,
) -> Option<(&'a RowSnapshot, &'a FieldSnapshot)> {
    document.rows.iter().find_map(|row| {
        row.fields
            .iter()
            .find(|field| {
                field.is_eligible_url_field()
                    && field.text.trim().is_empty()
                    && !used.contains(&field.id)
            })
            .map(|field| (row, field))
    })
}

/// Assigns queued URLs to empty URL slots in document order until either
/// the queue or the field supply is exhausted.
fn fill_from_queue(state: &mut AgentState, document: &DocumentSnapshot) -> Vec<Effect> {
    if state.batch.is_empty() {
        return Vec::new();
    }

    let show = state.settings.show_notifications;
    let mut effects = Vec::new();
    let mut used: HashSet<FieldId> = HashSet::new();
    let mut filled = 0usize;

    while let Some(url) = state.batch.next_pending().map(ToOwned::to_owned) {
        let Some((row, field)) = next_empty_url_field(document, &used) else {
            break;
        };
        used.insert(field.id);
        effects.push(Effect::SetFieldText {
            field: field.id,
            text: url.clone(),
        });
        derive_level(&url, row, &mut effects);
        state.batch.advance();
        filled += 1;
    }
    state.mark_dirty();

    if state.batch.is_drained() {
        push_notice(&mut effects, show, format!("Filled all {filled} URLs."), false);
    } else {
        push_notice(
            &mut effects,
            show,
            "Not all URLs were filled; open the next page and fill again.",
            true,
        );
    }
    effects
}

fn is_http_url(text: &str) -> bool {
    Url::parse(text)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// One entry per qualifying URL slot, rebuilt from scratch.
fn extract_entries(document: &DocumentSnapshot) -> Vec<SelfCheckEntry> {
    let mut entries = Vec::new();
    for row in &document.rows {
        for field in &row.fields {
            if !field.is_eligible_url_field() {
                continue;
            }
            let url = field.text.trim();
            if url.is_empty() || !is_http_url(url) {
                continue;
            }
            entries.push(SelfCheckEntry {
                sequence: row.sequence.clone(),
                url: url.to_owned(),
            });
        }
    }
    entries
}
