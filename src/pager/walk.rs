//! Skip/collect walk
//!
//! The page computation as a state machine over a [`FrameBuffer`]. It
//! consumes whatever is buffered and, when it runs dry, asks its driver for
//! exactly one more frame. The blocking and async pagers differ only in how
//! they perform that fetch.

use super::strategy::OutOfBoundsStrategy;
use super::types::Page;
use crate::error::{Error, Result};
use crate::source::FrameBuffer;
use tracing::{debug, trace, warn};

/// What the walk needs next
#[derive(Debug)]
pub(crate) enum Step<T> {
    /// Fetch one frame into the source, then advance again
    Fetch,
    /// The page is complete
    Done(Page<T>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Discarding elements before the requested page
    Skip,
    /// Filling the requested page
    Collect,
    /// Page is full, deciding whether anything follows it
    Peek,
}

/// Cursor state of one page request
#[derive(Debug)]
pub(crate) struct PageWalk<T> {
    strategy: OutOfBoundsStrategy,
    page_number: usize,
    page_size: usize,
    phase: Phase,
    /// Elements still to discard
    remaining_skip: usize,
    /// Elements discarded so far
    skipped: usize,
    /// The requested page
    elements: Vec<T>,
    /// Last partial page seen while skipping, for `ReturnLast`
    trailing: Vec<T>,
    frames_fetched: usize,
}

impl<T> PageWalk<T> {
    /// Validate a request and start its walk
    ///
    /// Nothing is fetched when the arguments are rejected.
    pub(crate) fn new(
        strategy: OutOfBoundsStrategy,
        page_number: usize,
        page_size: usize,
    ) -> Result<Self> {
        if page_number < 1 {
            return Err(Error::invalid_argument(
                "page_number",
                format!("must be at least 1, got {page_number}"),
            ));
        }
        if page_size < 1 {
            return Err(Error::invalid_argument(
                "page_size",
                format!("must be at least 1, got {page_size}"),
            ));
        }
        let skip = (page_number - 1).checked_mul(page_size).ok_or_else(|| {
            Error::invalid_argument(
                "page_number",
                format!("page {page_number} of size {page_size} overflows the element offset"),
            )
        })?;

        debug!(page_number, page_size, skip, %strategy, "Starting page walk");

        Ok(Self {
            strategy,
            page_number,
            page_size,
            phase: Phase::Skip,
            remaining_skip: skip,
            skipped: 0,
            elements: Vec::new(),
            trailing: Vec::new(),
            frames_fetched: 0,
        })
    }

    /// Consume buffered elements until the page is done or a frame is needed
    pub(crate) fn advance<S>(&mut self, source: &mut S) -> Result<Step<T>>
    where
        S: FrameBuffer<Item = T> + ?Sized,
    {
        loop {
            match self.phase {
                Phase::Skip => {
                    while self.remaining_skip > 0 {
                        let Some(element) = source.next_element() else {
                            break;
                        };
                        self.discard(element);
                    }

                    if self.remaining_skip == 0 {
                        self.phase = Phase::Collect;
                        continue;
                    }
                    if source.is_exhausted() {
                        return self.out_of_bounds();
                    }
                    return Ok(Step::Fetch);
                }
                Phase::Collect => {
                    while self.elements.len() < self.page_size {
                        let Some(element) = source.next_element() else {
                            break;
                        };
                        self.elements.push(element);
                    }

                    if self.elements.len() == self.page_size {
                        self.phase = Phase::Peek;
                        continue;
                    }
                    if !source.is_exhausted() {
                        return Ok(Step::Fetch);
                    }
                    // Page 1 of an empty source exists; any later empty page does not.
                    if self.elements.is_empty() && self.page_number > 1 {
                        return self.out_of_bounds();
                    }
                    return Ok(self.finish(true));
                }
                Phase::Peek => {
                    if source.has_buffered_element() {
                        return Ok(self.finish(false));
                    }
                    if source.is_exhausted() {
                        return Ok(self.finish(true));
                    }
                    // Only the next frame can tell; it may be the empty terminal one.
                    return Ok(Step::Fetch);
                }
            }
        }
    }

    /// Record that the driver fetched a frame
    pub(crate) fn record_fetch(&mut self) {
        self.frames_fetched += 1;
        trace!(
            page_number = self.page_number,
            frames_fetched = self.frames_fetched,
            phase = ?self.phase,
            "Fetched frame"
        );
    }

    fn discard(&mut self, element: T) {
        self.remaining_skip -= 1;
        self.skipped += 1;
        if self.strategy.keeps_trailing_page() {
            if (self.skipped - 1) % self.page_size == 0 {
                self.trailing.clear();
            }
            self.trailing.push(element);
        }
    }

    fn out_of_bounds(&mut self) -> Result<Step<T>> {
        let available = self.skipped + self.elements.len();
        warn!(
            page_number = self.page_number,
            page_size = self.page_size,
            available,
            strategy = %self.strategy,
            "Requested page is out of bounds"
        );
        let trailing = std::mem::take(&mut self.trailing);
        self.strategy
            .resolve(self.page_number, self.page_size, available, trailing)
            .map(Step::Done)
    }

    fn finish(&mut self, is_last: bool) -> Step<T> {
        let elements = std::mem::take(&mut self.elements);
        debug!(
            page_number = self.page_number,
            elements = elements.len(),
            is_last,
            frames_fetched = self.frames_fetched,
            "Page complete"
        );
        Step::Done(Page::new(elements, self.page_number, is_last))
    }
}
