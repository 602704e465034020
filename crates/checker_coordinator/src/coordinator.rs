use checker_logging::{checker_debug, checker_error, checker_info};

use crate::geometry::plan_side_window;
use crate::{
    CloseReply, CoordinatorError, OpenReply, SessionStore, WindowHost, WindowId,
    MANAGED_TAB_IDS_KEY,
};

/// Privileged side of the self-check workflow: opens the side window,
/// tracks its tabs in session storage and closes them on request.
pub struct Coordinator<H, S> {
    host: H,
    store: S,
}

impl<H: WindowHost, S: SessionStore> Coordinator<H, S> {
    pub fn new(host: H, store: S) -> Self {
        Self { host, store }
    }

    /// Handles an open request from the page agent.
    ///
    /// Any failure becomes an error reply with a message; there is no
    /// retry, the operator retries manually.
    pub async fn handle_open(&self, sender: WindowId, urls: &[String]) -> OpenReply {
        match self.open_side_window(sender, urls).await {
            Ok(count) => OpenReply::Completed { count },
            Err(err) => {
                checker_error!("Failed to open self-check window: {}", err);
                OpenReply::Error {
                    message: err.to_string(),
                }
            }
        }
    }

    async fn open_side_window(
        &self,
        sender: WindowId,
        urls: &[String],
    ) -> Result<usize, CoordinatorError> {
        if urls.is_empty() {
            return Err(CoordinatorError::EmptyRequest);
        }

        let sender_bounds = self.host.window_bounds(sender).await?;
        let work_area = self.host.primary_work_area().await?;
        let plan = plan_side_window(&sender_bounds, &work_area);

        let tabs = self.host.create_window(urls, &plan).await?;
        if tabs.is_empty() {
            return Err(CoordinatorError::WindowCreation);
        }

        // Opening again before a close overwrites the tracked IDs and
        // orphans the earlier window's tabs.
        self.store.store(MANAGED_TAB_IDS_KEY, &tabs);
        checker_info!(
            "Self-check window opened with {} tabs at left={}",
            tabs.len(),
            plan.left
        );
        Ok(tabs.len())
    }

    /// Handles a close request: closes each tracked tab sequentially,
    /// tolerating tabs the operator already closed, then clears the
    /// tracked IDs regardless of partial failure.
    pub async fn handle_close(&self) -> CloseReply {
        let ids = self.store.load(MANAGED_TAB_IDS_KEY);
        if ids.is_empty() {
            return CloseReply::NoTabsToClose;
        }

        let mut closed = 0usize;
        for tab in ids {
            match self.host.close_tab(tab).await {
                Ok(()) => closed += 1,
                Err(err) => {
                    // Expected when the operator closed the tab by hand.
                    checker_debug!("Skipping tab {}: {}", tab, err);
                }
            }
        }
        self.store.remove(MANAGED_TAB_IDS_KEY);
        checker_info!("Closed {} self-check tabs", closed);
        CloseReply::Closed { count: closed }
    }
}
