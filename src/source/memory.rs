//! In-memory frame fetcher
//!
//! Cuts a fixed element sequence into frames of `fetch_size`, the way a
//! server would. Deterministic, so a clone replays the same frames.

use super::types::{AsyncFrameFetcher, Fetcher, Frame, FrameFetcher};
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::collections::VecDeque;

/// Replayable fetcher over a fixed element sequence
#[derive(Debug, Clone)]
pub struct MemoryFrames<T> {
    /// Elements not yet delivered
    remaining: VecDeque<T>,
    /// Maximum frame length
    fetch_size: usize,
    /// Signal the end with an extra empty frame instead of marking the
    /// last non-empty frame final
    trailing_empty_frame: bool,
    /// Whether the terminal frame has been delivered
    finished: bool,
    /// Number of fetches served
    fetches: usize,
}

impl<T> MemoryFrames<T> {
    /// Create a fetcher delivering `elements` in frames of `fetch_size`
    ///
    /// A `fetch_size` of zero is treated as one.
    pub fn new(elements: impl IntoIterator<Item = T>, fetch_size: usize) -> Self {
        Self {
            remaining: elements.into_iter().collect(),
            fetch_size: fetch_size.max(1),
            trailing_empty_frame: false,
            finished: false,
            fetches: 0,
        }
    }

    /// End the sequence with an empty terminal frame
    #[must_use]
    pub fn with_trailing_empty_frame(mut self, enabled: bool) -> Self {
        self.trailing_empty_frame = enabled;
        self
    }

    /// Maximum frame length
    pub fn fetch_size(&self) -> usize {
        self.fetch_size
    }

    /// Number of fetches served so far
    pub fn fetches(&self) -> usize {
        self.fetches
    }

    /// Whether the terminal frame has been delivered
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn next_frame(&mut self) -> Result<Frame<T>> {
        if self.finished {
            return Err(Error::SourceExhausted);
        }
        self.fetches += 1;

        let take = self.fetch_size.min(self.remaining.len());
        let elements: Vec<T> = self.remaining.drain(..take).collect();
        let last = if self.trailing_empty_frame {
            elements.is_empty()
        } else {
            self.remaining.is_empty()
        };

        self.finished = last;
        Ok(Frame { elements, last })
    }
}

impl<T> Fetcher for MemoryFrames<T> {
    type Item = T;
}

impl<T> FrameFetcher for MemoryFrames<T> {
    fn fetch(&mut self) -> Result<Frame<T>> {
        self.next_frame()
    }
}

#[async_trait]
impl<T: Send> AsyncFrameFetcher for MemoryFrames<T> {
    async fn fetch(&mut self) -> Result<Frame<T>> {
        self.next_frame()
    }
}
