use std::io::{self, Read};
use std::path::PathBuf;
use std::sync::mpsc;

use checker_coordinator::{CoordinatorHandle, MemorySessionStore};
use checker_core::{update, AgentState, FieldRole, Highlight, Msg, PanelViewModel};

use super::effects::EffectRunner;
use super::host::{DetachedWindowHost, HostPage, InMemoryHostPage};
use super::logging::{self, LogDestination};
use super::persistence;

/// Owns the agent state and pumps messages through the pure update,
/// running effects and any follow-up messages they produce.
pub struct AgentRuntime<P: HostPage> {
    state: AgentState,
    host: P,
    runner: EffectRunner,
    msg_tx: mpsc::Sender<Msg>,
    msg_rx: mpsc::Receiver<Msg>,
}

impl<P: HostPage> AgentRuntime<P> {
    pub fn new(host: P, runner: EffectRunner) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            state: AgentState::new(),
            host,
            runner,
            msg_tx,
            msg_rx,
        }
    }

    /// Applies one message plus every follow-up it produces (coordinator
    /// replies, echoed edits).
    pub fn dispatch(&mut self, msg: Msg) {
        let _ = self.msg_tx.send(msg);
        while let Ok(msg) = self.msg_rx.try_recv() {
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;
            self.runner.run(&mut self.host, effects, &self.msg_tx);
        }
    }

    pub fn view(&self) -> PanelViewModel {
        self.state.view()
    }

    pub fn host(&self) -> &P {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut P {
        &mut self.host
    }

    /// Returns whether a re-render is due and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        self.state.consume_dirty()
    }
}

/// Stdin-driven demo: batch-fills an in-memory form with the pasted URL
/// list and reports duplicates and derived path depths.
pub fn run_app() -> io::Result<()> {
    logging::initialize(LogDestination::File);

    let mut raw = String::new();
    io::stdin().read_to_string(&mut raw)?;
    let url_count = raw.lines().filter(|line| !line.trim().is_empty()).count();
    if url_count == 0 {
        eprintln!("Paste a newline-delimited URL list on stdin.");
        return Ok(());
    }

    let settings_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let coordinator = CoordinatorHandle::spawn(DetachedWindowHost, MemorySessionStore::new());
    let runner = EffectRunner::new(coordinator, 0, settings_dir.clone());

    let mut host = InMemoryHostPage::new();
    for index in 1..=url_count {
        host.push_url_row(&index.to_string());
    }

    let mut runtime = AgentRuntime::new(host, runner);
    if let Some(panel) = persistence::load_panel_settings(&settings_dir) {
        runtime.dispatch(Msg::RestorePanelSettings(panel));
    }

    let document = runtime.host().document();
    runtime.dispatch(Msg::BatchPasted { raw, document });

    print_report(&runtime);
    Ok(())
}

fn print_report(runtime: &AgentRuntime<InMemoryHostPage>) {
    let host = runtime.host();
    for row in host.rows() {
        let Some(url) = row.fields.iter().find(|field| field.role == FieldRole::Url) else {
            continue;
        };
        let depth = row
            .level_field()
            .map(|field| field.text.clone())
            .unwrap_or_default();
        let flag = match host.highlight(url.id) {
            Some(Highlight::Duplicate) => "  [duplicate]",
            Some(Highlight::QueryMarker) => "  [query]",
            Some(Highlight::FragmentMarker) => "  [fragment]",
            _ => "",
        };
        println!("{:>4}  depth {:>2}  {}{}", row.sequence, depth, url.text, flag);
    }

    let view = runtime.view();
    println!(
        "{} distinct values tracked, {} still queued",
        view.seen_count, view.pending_batch
    );
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use checker_coordinator::{
        Bounds, CoordinatorHandle, HostError, MemorySessionStore, TabId, WindowHost, WindowId,
        WindowPlan,
    };
    use checker_core::{FieldId, Msg};

    use super::super::effects::EffectRunner;
    use super::super::host::{DetachedWindowHost, HostPage, InMemoryHostPage};
    use super::AgentRuntime;

    struct ScriptedWindowHost;

    #[async_trait]
    impl WindowHost for ScriptedWindowHost {
        async fn window_bounds(&self, _window: WindowId) -> Result<Bounds, HostError> {
            Ok(Bounds {
                left: 0,
                top: 0,
                width: 960,
                height: 1040,
            })
        }

        async fn primary_work_area(&self) -> Result<Bounds, HostError> {
            Ok(Bounds {
                left: 0,
                top: 0,
                width: 1920,
                height: 1040,
            })
        }

        async fn create_window(
            &self,
            urls: &[String],
            _plan: &WindowPlan,
        ) -> Result<Vec<TabId>, HostError> {
            Ok((1..=urls.len() as TabId).collect())
        }

        async fn close_tab(&self, _tab: TabId) -> Result<(), HostError> {
            Ok(())
        }
    }

    fn runtime_with(
        host: InMemoryHostPage,
        window_host: impl WindowHost + 'static,
    ) -> (AgentRuntime<InMemoryHostPage>, tempfile::TempDir) {
        let dir = tempfile::tempdir().expect("temp dir");
        let coordinator = CoordinatorHandle::spawn(window_host, MemorySessionStore::new());
        let runner = EffectRunner::new(coordinator, 1, dir.path().to_path_buf());
        (AgentRuntime::new(host, runner), dir)
    }

    fn edit_msg(host: &InMemoryHostPage, field: FieldId) -> Msg {
        let (snapshot, row) = host.find_field(field).expect("field exists");
        Msg::FieldEdited {
            field: snapshot,
            row,
        }
    }

    #[test]
    fn manual_edits_are_checked_and_levels_derived() {
        let mut host = InMemoryHostPage::new();
        let (url_a, level_a) = host.push_url_row("1");
        let (url_b, _) = host.push_url_row("2");
        host.set_field_text(url_a, "https://a.example.com/x/y");
        host.set_field_text(url_b, "https://a.example.com/x/y");
        let (mut runtime, _dir) = runtime_with(host, DetachedWindowHost);

        let msg = edit_msg(runtime.host(), url_a);
        runtime.dispatch(msg);
        let msg = edit_msg(runtime.host(), url_b);
        runtime.dispatch(msg);

        assert_eq!(
            runtime.host().highlight(url_b),
            Some(checker_core::Highlight::Duplicate)
        );
        assert_eq!(runtime.host().field_text(level_a), Some("2"));
        assert_eq!(runtime.view().seen_count, 1);
    }

    #[test]
    fn batch_fill_tracks_filled_values_through_the_echo_loop() {
        let mut host = InMemoryHostPage::new();
        let (url_a, level_a) = host.push_url_row("1");
        let (url_b, _) = host.push_url_row("2");
        let (mut runtime, _dir) = runtime_with(host, DetachedWindowHost);

        let document = runtime.host().document();
        runtime.dispatch(Msg::BatchPasted {
            raw: "https://a.com/b\nhttps://a.com/b\nhttps://c.com".to_string(),
            document,
        });

        assert_eq!(runtime.host().field_text(url_a), Some("https://a.com/b"));
        assert_eq!(runtime.host().field_text(url_b), Some("https://a.com/b"));
        assert_eq!(runtime.host().field_text(level_a), Some("1"));
        // The echoed edit flags the repeated fill as a duplicate.
        assert_eq!(
            runtime.host().highlight(url_b),
            Some(checker_core::Highlight::Duplicate)
        );
        // One URL remains queued for the next page.
        assert_eq!(runtime.view().pending_batch, 1);
    }

    #[test]
    fn self_check_round_trip_reports_open_and_close_counts() {
        let mut host = InMemoryHostPage::new();
        let (url_a, _) = host.push_url_row("1");
        let (url_b, _) = host.push_url_row("2");
        host.set_field_text(url_a, "https://a.example.com");
        host.set_field_text(url_b, "https://b.example.com");
        let (mut runtime, _dir) = runtime_with(host, ScriptedWindowHost);

        let document = runtime.host().document();
        runtime.dispatch(Msg::SelfCheckToggled { document });
        runtime.dispatch(Msg::SelfCheckEnded);

        let notices: Vec<&str> = runtime
            .host()
            .notices()
            .iter()
            .map(|(message, _)| message.as_str())
            .collect();
        assert!(notices.contains(&"Extracted 2 links for self-check."));
        assert!(notices.contains(&"Opened 2 tabs for self-check."));
        assert!(notices.contains(&"Closed 2 self-check tabs."));
    }

    #[test]
    fn detached_browser_surfaces_an_error_notice() {
        let mut host = InMemoryHostPage::new();
        let (url_a, _) = host.push_url_row("1");
        host.set_field_text(url_a, "https://a.example.com");
        let (mut runtime, _dir) = runtime_with(host, DetachedWindowHost);

        let document = runtime.host().document();
        runtime.dispatch(Msg::SelfCheckToggled { document });

        assert!(runtime
            .host()
            .notices()
            .iter()
            .any(|(message, warning)| *warning
                && message.starts_with("Could not open self-check window")));
    }
}
