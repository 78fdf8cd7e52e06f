use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use serde::Serialize;
use tracing::debug;

/// How much of a list is on screen after `page` "load more" steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub page: usize,
    pub page_size: usize,
    pub revealed: usize,
    pub total: usize,
}

impl PageWindow {
    pub fn new(page: usize, page_size: usize, total: usize) -> Self {
        let page = page.max(1);
        let page_size = page_size.max(1);
        Self {
            page,
            page_size,
            revealed: page.saturating_mul(page_size).min(total),
            total,
        }
    }

    /// A window showing the first `limit` items with no further paging.
    pub fn capped(limit: usize, total: usize) -> Self {
        Self::new(1, limit, total)
    }

    pub fn has_more(&self) -> bool {
        self.revealed < self.total
    }

    pub fn next_page(&self) -> Option<usize> {
        self.has_more().then_some(self.page + 1)
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.revealed.min(items.len())]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMore {
    /// The next slice is out; the window covers everything revealed so far.
    Revealed(PageWindow),
    /// Another load is still pending.
    Busy,
    /// Nothing left to reveal.
    Exhausted,
}

/// The "load more" cursor. Shared by reference; a second `load_more` while
/// one is waiting out the delay is turned away instead of skipping a page.
#[derive(Debug)]
pub struct LoadMoreController {
    current_page: AtomicUsize,
    is_loading: AtomicBool,
    page_size: usize,
    total: usize,
    delay: Duration,
}

impl LoadMoreController {
    pub fn new(total: usize, page_size: usize, delay: Duration) -> Self {
        Self {
            current_page: AtomicUsize::new(1),
            is_loading: AtomicBool::new(false),
            page_size: page_size.max(1),
            total,
            delay,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page.load(Ordering::Acquire)
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading.load(Ordering::Acquire)
    }

    pub fn window(&self) -> PageWindow {
        PageWindow::new(self.current_page(), self.page_size, self.total)
    }

    pub fn has_more(&self) -> bool {
        self.window().has_more()
    }

    pub async fn load_more(&self) -> LoadMore {
        if !self.has_more() {
            return LoadMore::Exhausted;
        }
        if self
            .is_loading
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("load more ignored, previous load still pending");
            return LoadMore::Busy;
        }
        let _guard = LoadingGuard(&self.is_loading);

        tokio::time::sleep(self.delay).await;

        let page = self.current_page.fetch_add(1, Ordering::AcqRel) + 1;
        let window = PageWindow::new(page, self.page_size, self.total);
        debug!("revealed {}/{} items (page {})", window.revealed, window.total, page);
        LoadMore::Revealed(window)
    }
}

/// Clears the in-flight flag even when the load future is dropped mid-delay.
struct LoadingGuard<'a>(&'a AtomicBool);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
