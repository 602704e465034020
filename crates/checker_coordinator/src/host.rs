use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::{Bounds, TabId, WindowId, WindowPlan};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("window {0} not found")]
    WindowNotFound(WindowId),
    #[error("no display information available")]
    NoDisplay,
    #[error("tab {0} no longer exists")]
    TabGone(TabId),
    #[error("window management call failed: {0}")]
    Api(String),
}

/// Window-management seam: the privileged browser API surface the
/// coordinator needs, and nothing more.
#[async_trait]
pub trait WindowHost: Send + Sync {
    /// Bounds of an existing window.
    async fn window_bounds(&self, window: WindowId) -> Result<Bounds, HostError>;

    /// Usable work area of the primary display.
    async fn primary_work_area(&self) -> Result<Bounds, HostError>;

    /// Opens one window with every URL as a tab; returns the tab IDs in
    /// tab order.
    async fn create_window(
        &self,
        urls: &[String],
        plan: &WindowPlan,
    ) -> Result<Vec<TabId>, HostError>;

    /// Closes one tab.
    async fn close_tab(&self, tab: TabId) -> Result<(), HostError>;
}

#[async_trait]
impl<T: WindowHost + ?Sized> WindowHost for Arc<T> {
    async fn window_bounds(&self, window: WindowId) -> Result<Bounds, HostError> {
        (**self).window_bounds(window).await
    }

    async fn primary_work_area(&self) -> Result<Bounds, HostError> {
        (**self).primary_work_area().await
    }

    async fn create_window(
        &self,
        urls: &[String],
        plan: &WindowPlan,
    ) -> Result<Vec<TabId>, HostError> {
        (**self).create_window(urls, plan).await
    }

    async fn close_tab(&self, tab: TabId) -> Result<(), HostError> {
        (**self).close_tab(tab).await
    }
}
