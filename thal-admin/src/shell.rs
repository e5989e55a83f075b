//! Page router
//!
//! Tracks the active page and the [`MountScope`] of its current mount.
//! Leaving a page cancels its scope so late responses are dropped instead of
//! landing in a view that is no longer shown.

use std::fmt;
use std::future::Future;

use tokio_util::sync::CancellationToken;

/// Navigation key that ends the session
pub const LOGOUT_KEY: &str = "adminlogout";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Orders,
    Menu,
}

impl Page {
    /// Pages in sidebar order
    pub const ALL: [Page; 3] = [Page::Dashboard, Page::Orders, Page::Menu];

    pub fn key(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Orders => "orders",
            Page::Menu => "menu",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Orders => "Orders",
            Page::Menu => "Menu",
        }
    }

    /// Resolve a page key; unknown keys land on the dashboard
    pub fn from_key(key: &str) -> Self {
        Page::ALL
            .into_iter()
            .find(|page| page.key() == key)
            .unwrap_or_default()
    }

    /// Sidebar position, starting at 1
    pub fn from_number(n: usize) -> Option<Self> {
        n.checked_sub(1).and_then(|i| Page::ALL.get(i).copied())
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Lifetime of one page mount
///
/// Futures run through the scope resolve to `None` once it is cancelled.
#[derive(Debug, Clone, Default)]
pub struct MountScope {
    token: CancellationToken,
}

impl MountScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Run `fut` unless the scope is cancelled first
    pub async fn run<F>(&self, fut: F) -> Option<F::Output>
    where
        F: Future,
    {
        tokio::select! {
            biased;
            _ = self.token.cancelled() => None,
            output = fut => Some(output),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// A page was (re)mounted
    Switched(Page),
    Logout,
}

#[derive(Debug, Default)]
pub struct Shell {
    current: Page,
    scope: MountScope,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Page {
        self.current
    }

    /// Scope of the current mount
    pub fn scope(&self) -> &MountScope {
        &self.scope
    }

    /// Follow a navigation key
    ///
    /// Every navigation tears down the current mount, including re-selecting
    /// the active page (which remounts it).
    pub fn navigate(&mut self, key: &str) -> Navigation {
        self.scope.cancel();
        if key == LOGOUT_KEY {
            tracing::info!("Session ended");
            return Navigation::Logout;
        }

        let page = Page::from_key(key);
        self.current = page;
        self.scope = MountScope::new();
        tracing::debug!(page = %page, "Page mounted");
        Navigation::Switched(page)
    }

    pub fn open(&mut self, page: Page) -> Navigation {
        self.navigate(page.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_page_keys() {
        assert_eq!(Page::from_key("orders"), Page::Orders);
        assert_eq!(Page::from_key("menu"), Page::Menu);
        assert_eq!(Page::from_key("settings"), Page::Dashboard);
        assert_eq!(Page::from_number(3), Some(Page::Menu));
        assert_eq!(Page::from_number(0), None);
        assert_eq!(Page::from_number(4), None);
    }

    #[test]
    fn test_navigation_cancels_previous_scope() {
        let mut shell = Shell::new();
        let first = shell.scope().clone();

        assert_eq!(shell.navigate("menu"), Navigation::Switched(Page::Menu));
        assert!(first.is_cancelled());
        assert!(!shell.scope().is_cancelled());
        assert_eq!(shell.current(), Page::Menu);

        let second = shell.scope().clone();
        assert_eq!(shell.navigate(LOGOUT_KEY), Navigation::Logout);
        assert!(second.is_cancelled());
    }

    #[tokio::test]
    async fn test_cancelled_scope_drops_result() {
        let scope = MountScope::new();
        assert_eq!(scope.run(async { 7 }).await, Some(7));

        let pending = scope.clone();
        let handle = tokio::spawn(async move {
            pending
                .run(async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    1
                })
                .await
        });
        scope.cancel();
        assert_eq!(handle.await.unwrap(), None);
    }
}
