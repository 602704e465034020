use std::path::PathBuf;
use std::sync::mpsc;

use checker_coordinator::{CloseReply, CoordinatorHandle, OpenReply, WindowId};
use checker_core::{Effect, Msg};
use checker_logging::{checker_info, checker_warn};

use super::host::HostPage;
use super::persistence;

/// Executes core effects against the host page and the coordinator.
///
/// Coordinator replies and channel failures are fed back into the message
/// queue as reply messages.
pub struct EffectRunner {
    coordinator: CoordinatorHandle,
    agent_window: WindowId,
    settings_dir: PathBuf,
}

impl EffectRunner {
    pub fn new(
        coordinator: CoordinatorHandle,
        agent_window: WindowId,
        settings_dir: PathBuf,
    ) -> Self {
        Self {
            coordinator,
            agent_window,
            settings_dir,
        }
    }

    pub fn run(&self, host: &mut dyn HostPage, effects: Vec<Effect>, msg_tx: &mpsc::Sender<Msg>) {
        for effect in effects {
            match effect {
                Effect::SetHighlight { field, highlight } => host.set_highlight(field, highlight),
                Effect::ClearAllHighlights => host.clear_highlights(),
                Effect::SetFieldText { field, text } => {
                    host.set_field_text(field, &text);
                    // Mirror of the synthetic input event: a programmatic
                    // write is observed like an operator edit.
                    if let Some((snapshot, row)) = host.find_field(field) {
                        let _ = msg_tx.send(Msg::FieldEdited {
                            field: snapshot,
                            row,
                        });
                    }
                }
                Effect::FlashField { field } => host.flash_field(field),
                Effect::Notify { message, warning } => host.notify(&message, warning),
                Effect::BlockSubmit => host.block_submit(),
                Effect::OpenSelfCheckWindow { urls } => {
                    checker_info!("Requesting self-check window for {} urls", urls.len());
                    let msg = match self.coordinator.open_urls(self.agent_window, urls) {
                        Ok(OpenReply::Completed { count }) => Msg::SelfCheckOpened { count },
                        Ok(OpenReply::Error { message }) => Msg::SelfCheckOpenFailed { message },
                        Err(err) => {
                            checker_warn!("Self-check open request failed: {}", err);
                            Msg::SelfCheckOpenFailed {
                                message: err.to_string(),
                            }
                        }
                    };
                    let _ = msg_tx.send(msg);
                }
                Effect::CloseSelfCheckWindow => {
                    let msg = match self.coordinator.close_tabs() {
                        Ok(CloseReply::Closed { count }) => Msg::SelfCheckClosed { count },
                        Ok(CloseReply::NoTabsToClose) => Msg::SelfCheckNothingToClose,
                        Err(err) => {
                            checker_warn!("Self-check close request failed: {}", err);
                            Msg::SelfCheckCloseFailed {
                                message: err.to_string(),
                            }
                        }
                    };
                    let _ = msg_tx.send(msg);
                }
                Effect::SavePanelSettings(settings) => {
                    persistence::save_panel_settings(&self.settings_dir, &settings);
                }
            }
        }
    }
}
