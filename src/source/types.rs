//! Frame source types and traits
//!
//! Defines the capability the pager consumes: a forward-only buffer of
//! elements that is refilled one frame at a time, either blocking or async.

use crate::error::Result;
use async_trait::async_trait;

/// One chunk of elements delivered by a single round-trip to the source
///
/// The final marker is set by the source. It is not inferred from the
/// element count: a non-final frame may be short and a final frame may be
/// empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame<T> {
    /// Elements in delivery order
    pub elements: Vec<T>,
    /// Whether this is the terminal frame
    pub last: bool,
}

impl<T> Frame<T> {
    /// Create a frame that more frames will follow
    pub fn more(elements: Vec<T>) -> Self {
        Self {
            elements,
            last: false,
        }
    }

    /// Create the terminal frame
    pub fn last(elements: Vec<T>) -> Self {
        Self {
            elements,
            last: true,
        }
    }

    /// Create an empty terminal frame
    pub fn terminal() -> Self {
        Self::last(Vec::new())
    }

    /// Number of elements in the frame
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the frame carries no elements
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Check if this is the terminal frame
    pub fn is_last(&self) -> bool {
        self.last
    }
}

/// Buffered, forward-only view of a frame source
///
/// Shared by the blocking and async capability variants.
pub trait FrameBuffer {
    /// Element type
    type Item;

    /// True if an already-fetched, unconsumed element exists
    fn has_buffered_element(&self) -> bool;

    /// Consume the next buffered element, `None` if nothing is buffered
    fn next_element(&mut self) -> Option<Self::Item>;

    /// True once the terminal frame has been received and fully consumed
    fn is_exhausted(&self) -> bool;
}

/// Frame source driven by blocking fetches
pub trait FrameSource: FrameBuffer {
    /// Load the next frame into the buffer, blocking until it arrives
    ///
    /// Must not be called once the source is exhausted.
    fn fetch_next_frame(&mut self) -> Result<()>;
}

/// Frame source driven by async fetches
#[async_trait]
pub trait AsyncFrameSource: FrameBuffer + Send {
    /// Load the next frame into the buffer
    ///
    /// Must not be called once the source is exhausted, nor while a prior
    /// fetch is unresolved.
    async fn fetch_next_frame(&mut self) -> Result<()>;
}

/// Element type produced by a frame fetcher
///
/// Shared by the blocking and async fetcher variants so a single fetcher
/// type can implement both.
pub trait Fetcher {
    /// Element type
    type Item;
}

/// One round-trip to the transport, blocking
pub trait FrameFetcher: Fetcher {
    /// Fetch the frame following the previous one
    fn fetch(&mut self) -> Result<Frame<Self::Item>>;
}

/// One round-trip to the transport, async
#[async_trait]
pub trait AsyncFrameFetcher: Fetcher + Send {
    /// Fetch the frame following the previous one
    async fn fetch(&mut self) -> Result<Frame<Self::Item>>;
}
