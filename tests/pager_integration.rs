//! Integration tests over a simulated paging transport
//!
//! Tests the full flow: continuation-token transport → FrameStream → Pager → Page

use async_trait::async_trait;
use offset_pager::source::{AsyncFrameFetcher, Fetcher, IterFrames, StreamFrames};
use offset_pager::{
    Error, Frame, FrameFetcher, FrameStream, OutOfBoundsStrategy, Page, Pager, PagerConfig,
    Result,
};
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// ============================================================================
// Simulated Transport
// ============================================================================

/// Server-side result set answering "rows after token" requests
#[derive(Debug, Clone)]
struct ResultSet {
    rows: Vec<u32>,
    fetch_size: usize,
    /// Reveal the end only through an extra empty frame
    empty_terminal_frame: bool,
}

impl ResultSet {
    fn new(rows: u32, fetch_size: usize) -> Self {
        Self {
            rows: (1..=rows).collect(),
            fetch_size,
            empty_terminal_frame: false,
        }
    }

    fn with_empty_terminal_frame(mut self) -> Self {
        self.empty_terminal_frame = true;
        self
    }

    /// Answer one request, returning the frame and the next paging token
    fn query(&self, token: usize) -> (Frame<u32>, Option<usize>) {
        let end = (token + self.fetch_size).min(self.rows.len());
        let elements = self.rows[token..end].to_vec();
        let has_more = if self.empty_terminal_frame {
            !elements.is_empty()
        } else {
            end < self.rows.len()
        };
        let next = has_more.then_some(end);
        (
            Frame {
                elements,
                last: next.is_none(),
            },
            next,
        )
    }
}

/// Client-side fetcher carrying the continuation token between requests
struct TokenFetcher {
    server: ResultSet,
    token: Option<usize>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
    requests: Arc<AtomicUsize>,
}

impl TokenFetcher {
    fn new(server: ResultSet) -> Self {
        Self {
            server,
            token: Some(0),
            in_flight: Arc::new(AtomicUsize::new(0)),
            max_in_flight: Arc::new(AtomicUsize::new(0)),
            requests: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn request(&mut self) -> Result<Frame<u32>> {
        let token = self
            .token
            .ok_or_else(|| Error::source_failure(anyhow::anyhow!("query has no more pages")))?;
        self.requests.fetch_add(1, Ordering::SeqCst);
        let (frame, next) = self.server.query(token);
        self.token = next;
        Ok(frame)
    }
}

impl Fetcher for TokenFetcher {
    type Item = u32;
}

impl FrameFetcher for TokenFetcher {
    fn fetch(&mut self) -> Result<Frame<u32>> {
        self.request()
    }
}

#[async_trait]
impl AsyncFrameFetcher for TokenFetcher {
    async fn fetch(&mut self) -> Result<Frame<u32>> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        tokio::time::sleep(Duration::from_millis(1)).await;
        let frame = self.request();

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        frame
    }
}

// ============================================================================
// Blocking Tests
// ============================================================================

#[test]
fn test_blocking_pages_over_transport() {
    init_tracing();
    let pager = Pager::new(OutOfBoundsStrategy::Fail);

    let server = ResultSet::new(23, 5);
    let mut all = Vec::new();
    let mut page_number = 1;
    loop {
        let mut source = FrameStream::new(TokenFetcher::new(server.clone()));
        let page = pager.get_page(&mut source, page_number, 4).unwrap();
        let is_last = page.is_last();
        all.extend(page.into_elements());
        if is_last {
            break;
        }
        page_number += 1;
    }

    assert_eq!(page_number, 6);
    assert_eq!(all, (1..=23).collect::<Vec<_>>());
}

#[test]
fn test_blocking_out_of_bounds() {
    let pager = Pager::new(OutOfBoundsStrategy::Fail);
    let fetcher = TokenFetcher::new(ResultSet::new(10, 3));
    let requests = fetcher.requests.clone();
    let mut source = FrameStream::new(fetcher);

    let err = pager.get_page(&mut source, 5, 3).unwrap_err();
    assert!(matches!(
        err,
        Error::OutOfBounds {
            page_number: 5,
            page_size: 3,
            available: 10
        }
    ));
    assert_eq!(requests.load(Ordering::SeqCst), 4);
}

#[test]
fn test_blocking_iterator_fetcher() {
    let frames: Vec<Result<Frame<&str>>> = vec![
        Ok(Frame::more(vec!["a", "b"])),
        Ok(Frame::more(vec!["c"])),
        Ok(Frame::more(vec![])),
        Ok(Frame::more(vec!["d", "e"])),
    ];
    let pager = Pager::default();
    let mut source = FrameStream::new(IterFrames::new(frames.into_iter()));

    let page = pager.get_page(&mut source, 2, 2).unwrap();
    assert_eq!(page, Page::new(vec!["c", "d"], 2, false));

    // The iterator ends without a terminal frame; its end still finalizes
    let page = pager.get_page(&mut source, 1, 5).unwrap();
    assert_eq!(page, Page::new(vec!["e"], 1, true));
}

// ============================================================================
// Async Tests
// ============================================================================

#[tokio::test]
async fn test_async_pages_over_transport() {
    init_tracing();
    let pager = Pager::new(OutOfBoundsStrategy::Fail);

    let page = pager
        .get_page_async(
            &mut FrameStream::new(TokenFetcher::new(ResultSet::new(5, 2))),
            2,
            2,
        )
        .await
        .unwrap();
    assert_eq!(page, Page::new(vec![3, 4], 2, false));

    let page = pager
        .get_page_async(
            &mut FrameStream::new(TokenFetcher::new(ResultSet::new(5, 2))),
            3,
            2,
        )
        .await
        .unwrap();
    assert_eq!(page, Page::new(vec![5], 3, true));
}

#[tokio::test]
async fn test_async_empty_terminal_frame() {
    let pager = Pager::default();
    let server = ResultSet::new(3, 3).with_empty_terminal_frame();
    let fetcher = TokenFetcher::new(server);
    let requests = fetcher.requests.clone();
    let mut source = FrameStream::new(fetcher);

    let page = pager.get_page_async(&mut source, 1, 3).await.unwrap();
    assert_eq!(page, Page::new(vec![1, 2, 3], 1, true));
    assert_eq!(requests.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_async_one_fetch_in_flight() {
    let pager = Pager::default();
    let fetcher = TokenFetcher::new(ResultSet::new(40, 3).with_empty_terminal_frame());
    let max_in_flight = fetcher.max_in_flight.clone();
    let mut source = FrameStream::new(fetcher);

    let page = pager.get_page_async(&mut source, 3, 7).await.unwrap();
    assert_eq!(page.elements(), &[15, 16, 17, 18, 19, 20, 21]);
    assert_eq!(max_in_flight.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_async_pages_on_separate_tasks() {
    let pager = Pager::new(OutOfBoundsStrategy::ReturnLast);
    let server = ResultSet::new(17, 4);

    let handles: Vec<_> = (1..=6)
        .map(|page_number| {
            let server = server.clone();
            tokio::spawn(async move {
                let mut source = FrameStream::new(TokenFetcher::new(server));
                pager.get_page_async(&mut source, page_number, 5).await
            })
        })
        .collect();

    let mut pages = Vec::new();
    for handle in handles {
        pages.push(handle.await.unwrap().unwrap());
    }

    assert_eq!(pages[0], Page::new(vec![1, 2, 3, 4, 5], 1, false));
    assert_eq!(pages[3], Page::new(vec![16, 17], 4, true));
    // Pages 5 and 6 do not exist; the last page is returned instead
    assert_eq!(pages[4], pages[3]);
    assert_eq!(pages[5], pages[3]);
}

#[tokio::test]
async fn test_async_stream_fetcher() {
    let frames: Vec<Result<Frame<u32>>> = vec![
        Ok(Frame::more(vec![1, 2, 3])),
        Ok(Frame::last(vec![4])),
    ];
    let pager = Pager::default();
    let mut source = FrameStream::new(StreamFrames::new(futures::stream::iter(frames)));

    let page = pager.get_page_async(&mut source, 2, 2).await.unwrap();
    assert_eq!(page, Page::new(vec![3, 4], 2, true));
}

#[tokio::test]
async fn test_async_source_failure_aborts_page() {
    let pager = Pager::default();
    let mut fetcher = TokenFetcher::new(ResultSet::new(10, 2));
    // A token the server no longer accepts
    fetcher.token = None;
    let mut source = FrameStream::new(fetcher);

    let err = pager.get_page_async(&mut source, 1, 2).await.unwrap_err();
    assert!(err.is_source_failure());
    assert!(err.to_string().contains("query has no more pages"));
}

// ============================================================================
// Configuration Tests
// ============================================================================

#[tokio::test]
async fn test_configured_pager() {
    let config = PagerConfig::from_yaml_str(
        r"
out_of_bounds: return_empty
default_page_size: 3
",
    )
    .unwrap();
    let pager = Pager::from_config(&config).unwrap();

    let page = pager
        .get_default_page_async(
            &mut FrameStream::new(TokenFetcher::new(ResultSet::new(8, 2))),
            3,
        )
        .await
        .unwrap();
    assert_eq!(page, Page::new(vec![7, 8], 3, true));

    let page = pager
        .get_default_page(
            &mut FrameStream::new(TokenFetcher::new(ResultSet::new(8, 2))),
            9,
        )
        .unwrap();
    assert_eq!(page, Page::new(vec![], 9, true));
}
