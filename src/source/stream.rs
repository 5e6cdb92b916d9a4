//! Buffered frame streams
//!
//! Adapts a fetcher (one round-trip per call) into the buffered source the
//! pager walks, plus fetchers over iterators and `futures` streams.

use super::types::{
    AsyncFrameFetcher, AsyncFrameSource, Fetcher, Frame, FrameBuffer, FrameFetcher, FrameSource,
};
use crate::error::{Error, Result};
use async_trait::async_trait;
use futures::{Stream, StreamExt};
use std::collections::VecDeque;
use tracing::trace;

// ============================================================================
// Frame Stream
// ============================================================================

/// Buffers the elements of the most recent frame of a fetcher
///
/// Unconsumed elements stay buffered between pager calls, so a stream
/// resumes from its natural position when paged again.
pub struct FrameStream<F: Fetcher> {
    /// Transport-facing fetcher
    fetcher: F,
    /// Elements received but not yet consumed
    buffer: VecDeque<F::Item>,
    /// Whether the terminal frame has been received
    last_received: bool,
    /// Number of frames fetched so far
    frames_fetched: usize,
}

impl<F: Fetcher> FrameStream<F> {
    /// Create a stream that has not fetched anything yet
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            buffer: VecDeque::new(),
            last_received: false,
            frames_fetched: 0,
        }
    }

    /// Create a stream whose first frame arrived with the initial response
    ///
    /// The first frame does not count as fetched.
    pub fn with_first_frame(fetcher: F, first: Frame<F::Item>) -> Self {
        let mut stream = Self::new(fetcher);
        stream.buffer.extend(first.elements);
        stream.last_received = first.last;
        stream
    }

    /// Number of frames fetched through this stream
    pub fn frames_fetched(&self) -> usize {
        self.frames_fetched
    }

    /// Number of elements currently buffered
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// Get the underlying fetcher
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Consume the stream, returning the fetcher
    pub fn into_fetcher(self) -> F {
        self.fetcher
    }

    fn ensure_fetchable(&self) -> Result<()> {
        if self.last_received {
            return Err(Error::SourceExhausted);
        }
        Ok(())
    }

    fn accept(&mut self, frame: Frame<F::Item>) {
        self.frames_fetched += 1;
        trace!(
            frame = self.frames_fetched,
            elements = frame.len(),
            last = frame.last,
            "Received frame"
        );
        self.buffer.extend(frame.elements);
        self.last_received = frame.last;
    }
}

impl<F: Fetcher> FrameBuffer for FrameStream<F> {
    type Item = F::Item;

    fn has_buffered_element(&self) -> bool {
        !self.buffer.is_empty()
    }

    fn next_element(&mut self) -> Option<Self::Item> {
        self.buffer.pop_front()
    }

    fn is_exhausted(&self) -> bool {
        self.last_received && self.buffer.is_empty()
    }
}

impl<F: FrameFetcher> FrameSource for FrameStream<F> {
    fn fetch_next_frame(&mut self) -> Result<()> {
        self.ensure_fetchable()?;
        let frame = self.fetcher.fetch()?;
        self.accept(frame);
        Ok(())
    }
}

#[async_trait]
impl<F> AsyncFrameSource for FrameStream<F>
where
    F: AsyncFrameFetcher,
    F::Item: Send,
{
    async fn fetch_next_frame(&mut self) -> Result<()> {
        self.ensure_fetchable()?;
        let frame = self.fetcher.fetch().await?;
        self.accept(frame);
        Ok(())
    }
}

impl<F: Fetcher> std::fmt::Debug for FrameStream<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameStream")
            .field("buffered", &self.buffer.len())
            .field("last_received", &self.last_received)
            .field("frames_fetched", &self.frames_fetched)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Iterator Fetcher
// ============================================================================

/// Blocking fetcher over an iterator of frames
///
/// If the iterator ends without yielding a terminal frame, the end is
/// reported as an empty terminal frame.
#[derive(Debug, Clone)]
pub struct IterFrames<I> {
    frames: I,
}

impl<I> IterFrames<I> {
    /// Create a fetcher from an iterator of frame results
    pub fn new(frames: I) -> Self {
        Self { frames }
    }
}

impl<I, T> Fetcher for IterFrames<I>
where
    I: Iterator<Item = Result<Frame<T>>>,
{
    type Item = T;
}

impl<I, T> FrameFetcher for IterFrames<I>
where
    I: Iterator<Item = Result<Frame<T>>>,
{
    fn fetch(&mut self) -> Result<Frame<T>> {
        self.frames.next().unwrap_or_else(|| Ok(Frame::terminal()))
    }
}

// ============================================================================
// Stream Fetcher
// ============================================================================

/// Async fetcher over a `futures` stream of frames
///
/// If the stream ends without yielding a terminal frame, the end is
/// reported as an empty terminal frame.
#[derive(Debug)]
pub struct StreamFrames<St> {
    frames: St,
}

impl<St> StreamFrames<St> {
    /// Create a fetcher from a stream of frame results
    pub fn new(frames: St) -> Self {
        Self { frames }
    }
}

impl<St, T> Fetcher for StreamFrames<St>
where
    St: Stream<Item = Result<Frame<T>>>,
{
    type Item = T;
}

#[async_trait]
impl<St, T> AsyncFrameFetcher for StreamFrames<St>
where
    St: Stream<Item = Result<Frame<T>>> + Unpin + Send,
    T: Send,
{
    async fn fetch(&mut self) -> Result<Frame<T>> {
        match self.frames.next().await {
            Some(frame) => frame,
            None => Ok(Frame::terminal()),
        }
    }
}
