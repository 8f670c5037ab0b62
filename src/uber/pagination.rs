//! Paginated streaming fetch engine
//!
//! Every listing endpoint goes through [`UberClient::paginate`], which spawns
//! one worker task per call and hands back a [`PageStream`] right away. The
//! worker fetches pages strictly in order, emits each one over a channel that
//! holds a single page, and waits for the caller to take it before throttling
//! and fetching the next. The first error ends the stream on the page that
//! carries it.

use futures::Stream;
use log::debug;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::sync::mpsc;

use crate::config::paging;
use crate::error::{Result, UberError};
use crate::uber::cancel::{cancel_pair, CancelHandle, CancelSignal};
use crate::uber::client::{ApiVersion, UberClient};
use crate::uber::traits::PaginatedResponse;

/// Wait applied between two page fetches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Throttle {
    /// 150 ms
    #[default]
    Default,
    /// No wait at all
    Disabled,
    Fixed(Duration),
}

impl Throttle {
    /// Map a millisecond setting; [`paging::NO_THROTTLE`] disables the wait
    pub fn from_millis(ms: i64) -> Self {
        match ms {
            paging::NO_THROTTLE => Throttle::Disabled,
            ms if ms <= 0 => Throttle::Default,
            ms => Throttle::Fixed(Duration::from_millis(ms.unsigned_abs())),
        }
    }

    /// Effective wait, `None` when throttling is disabled
    pub fn duration(&self) -> Option<Duration> {
        match self {
            Throttle::Disabled => None,
            Throttle::Fixed(d) if !d.is_zero() => Some(*d),
            Throttle::Default | Throttle::Fixed(_) => Some(paging::DEFAULT_THROTTLE),
        }
    }
}

/// Pagination settings for one streaming call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    pub limit_per_page: i64,
    pub start_offset: i64,
    /// `<= 0` means unbounded
    pub max_pages: i64,
    pub throttle: Throttle,
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            limit_per_page: paging::DEFAULT_LIMIT_PER_PAGE,
            start_offset: paging::DEFAULT_START_OFFSET,
            max_pages: 0,
            throttle: Throttle::Default,
        }
    }
}

impl Pager {
    /// Pager fetching at most `max_pages` pages with default settings otherwise
    pub fn with_max_pages(max_pages: i64) -> Self {
        Self {
            max_pages,
            ..Self::default()
        }
    }

    /// Replace out-of-range values with defaults
    pub fn normalized(mut self) -> Self {
        if self.limit_per_page <= 0 {
            self.limit_per_page = paging::DEFAULT_LIMIT_PER_PAGE;
        }
        if self.start_offset <= 0 {
            self.start_offset = paging::DEFAULT_START_OFFSET;
        }
        if self.max_pages < 0 {
            self.max_pages = 0;
        }
        if self.throttle == Throttle::Fixed(Duration::ZERO) {
            self.throttle = Throttle::Default;
        }
        self
    }

    fn has_reached(&self, pages_done: u64) -> bool {
        self.max_pages > 0 && pages_done >= self.max_pages.unsigned_abs()
    }

    fn query_pairs(&self) -> [(String, String); 2] {
        [
            ("limit".to_string(), self.limit_per_page.to_string()),
            ("offset".to_string(), self.start_offset.to_string()),
        ]
    }
}

/// One page of results
#[derive(Debug)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Set on the final page of a failed stream
    pub error: Option<UberError>,
    /// Zero-based position in the stream
    pub page_number: u64,
    /// Server-reported continuation signal
    pub count: i64,
}

impl<T> Page<T> {
    fn failed(page_number: u64, error: UberError) -> Self {
        Self {
            items: Vec::new(),
            error: Some(error),
            page_number,
            count: 0,
        }
    }

    /// Split into items or the error the page carries
    pub fn into_result(self) -> Result<Vec<T>> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.items),
        }
    }
}

/// Receiving end of a paginated call
///
/// Dropping the stream stops the worker before its next fetch.
#[derive(Debug)]
pub struct PageStream<T> {
    rx: mpsc::Receiver<Page<T>>,
    cancel: CancelHandle,
}

impl<T> PageStream<T> {
    /// Next page, or `None` once the stream has ended
    pub async fn next_page(&mut self) -> Option<Page<T>> {
        self.rx.recv().await
    }

    /// Stop fetching; pages already emitted can still be received
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Handle that cancels this stream from elsewhere
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Drain the stream, failing on the first error page
    pub async fn collect_items(mut self) -> Result<Vec<T>> {
        let mut all = Vec::new();
        while let Some(page) = self.next_page().await {
            all.extend(page.into_result()?);
        }
        Ok(all)
    }
}

impl<T> Stream for PageStream<T> {
    type Item = Page<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().rx.poll_recv(cx)
    }
}

/// What a paginated call fetches
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub path: String,
    pub version: ApiVersion,
    /// Resource-specific query parameters; `limit`/`offset` are added per page
    pub query: Vec<(String, String)>,
    pub authenticate: bool,
}

impl Endpoint {
    pub fn new(path: impl Into<String>, version: ApiVersion) -> Self {
        Self {
            path: path.into(),
            version,
            query: Vec::new(),
            authenticate: true,
        }
    }

    pub fn param(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn param_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.param(key, v),
            None => self,
        }
    }
}

impl UberClient {
    /// Stream pages of `T` from a listing endpoint
    ///
    /// Returns immediately; fetching happens on a spawned task. Must be
    /// called from within a tokio runtime.
    pub fn paginate<T, R>(&self, endpoint: Endpoint, pager: Pager) -> PageStream<T>
    where
        T: Send + 'static,
        R: PaginatedResponse<T>,
    {
        let (tx, rx) = mpsc::channel(1);
        let (signal, cancel) = cancel_pair();
        let client = self.clone();
        let pager = pager.normalized();

        debug!(
            "Starting pagination of {}/{} (limit {}, offset {}, max pages {})",
            endpoint.version, endpoint.path, pager.limit_per_page, pager.start_offset, pager.max_pages
        );
        tokio::spawn(async move {
            client.run_pages::<T, R>(endpoint, pager, tx, signal).await;
        });

        PageStream { rx, cancel }
    }

    async fn run_pages<T, R>(
        self,
        endpoint: Endpoint,
        mut pager: Pager,
        tx: mpsc::Sender<Page<T>>,
        signal: CancelSignal,
    ) where
        T: Send + 'static,
        R: PaginatedResponse<T>,
    {
        let mut page_number: u64 = 0;
        let Ok(mut permit) = tx.reserve().await else {
            return;
        };

        loop {
            let listing = match self.fetch_listing::<T, R>(&endpoint, &pager).await {
                Ok(listing) => listing,
                Err(e) => {
                    debug!("Page {} of {} failed: {}", page_number, endpoint.path, e);
                    permit.send(Page::failed(page_number, e));
                    return;
                }
            };

            let count = listing.remaining_count();
            let last = listing.is_last_page();
            permit.send(Page {
                items: listing.into_items(),
                error: None,
                page_number,
                count,
            });

            if count <= 0 || last {
                debug!(
                    "Pagination of {} done after page {} (count {})",
                    endpoint.path, page_number, count
                );
                return;
            }

            page_number += 1;
            if pager.has_reached(page_number) {
                debug!("Reached max pages ({}) for {}", pager.max_pages, endpoint.path);
                return;
            }

            // The previous page must be taken before the next one is fetched.
            permit = match tx.reserve().await {
                Ok(permit) => permit,
                Err(_) => {
                    debug!("Page receiver dropped, stopping {}", endpoint.path);
                    return;
                }
            };

            let Some(next_offset) = pager.start_offset.checked_add(pager.limit_per_page) else {
                permit.send(Page::failed(
                    page_number,
                    UberError::InvalidInput(format!(
                        "offset overflow after {} + {}",
                        pager.start_offset, pager.limit_per_page
                    )),
                ));
                return;
            };

            match pager.throttle.duration() {
                Some(wait) => {
                    tokio::select! {
                        biased;
                        _ = signal.cancelled() => {
                            debug!("Pagination of {} cancelled", endpoint.path);
                            return;
                        }
                        _ = tokio::time::sleep(wait) => {}
                    }
                }
                None => {
                    if signal.is_cancelled() {
                        debug!("Pagination of {} cancelled", endpoint.path);
                        return;
                    }
                }
            }

            pager.start_offset = next_offset;
        }
    }

    async fn fetch_listing<T, R>(&self, endpoint: &Endpoint, pager: &Pager) -> Result<R>
    where
        R: PaginatedResponse<T>,
    {
        let mut query = endpoint.query.clone();
        query.extend(pager.query_pairs());
        let url = self.url(endpoint.version, &endpoint.path, &query)?;
        debug!("Fetching page: {}", url);

        let builder = if endpoint.authenticate {
            self.get(url)
        } else {
            self.request_parts().http.get(url)
        };
        self.send_json::<R>(builder).await
    }
}
