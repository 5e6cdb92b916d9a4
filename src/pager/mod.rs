//! Pager module
//!
//! Offset pagination over forward-only frame sources.
//!
//! # Overview
//!
//! A [`Pager`] answers "page N of size S" on top of a source that only
//! delivers elements frame by frame. The same skip/collect walk backs both
//! execution models:
//! - [`Pager::get_page`] blocks the calling thread on each frame fetch
//! - [`Pager::get_page_async`] awaits each fetch in strict sequence
//!
//! At most one frame is requested at a time, and a frame is only requested
//! when the page cannot be completed or finalized from what is buffered.

mod strategy;
mod types;
mod walk;

pub use strategy::OutOfBoundsStrategy;
pub use types::Page;

use crate::config::PagerConfig;
use crate::error::{Error, Result};
use crate::source::{AsyncFrameSource, FrameSource};
use walk::{PageWalk, Step};

/// Offset pager with a fixed out-of-bounds policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pager {
    /// Policy for pages starting past the end of the source
    strategy: OutOfBoundsStrategy,
    /// Page size used by the `get_default_page*` methods
    default_page_size: Option<usize>,
}

impl Pager {
    /// Create a pager with the given out-of-bounds strategy
    pub fn new(strategy: OutOfBoundsStrategy) -> Self {
        Self {
            strategy,
            default_page_size: None,
        }
    }

    /// Create a pager from a validated configuration
    pub fn from_config(config: &PagerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            strategy: config.out_of_bounds,
            default_page_size: config.default_page_size,
        })
    }

    /// Set the page size used by the `get_default_page*` methods
    #[must_use]
    pub fn with_default_page_size(mut self, page_size: usize) -> Self {
        self.default_page_size = Some(page_size);
        self
    }

    /// Get the out-of-bounds strategy
    pub fn strategy(&self) -> OutOfBoundsStrategy {
        self.strategy
    }

    /// Get the configured default page size
    pub fn default_page_size(&self) -> Option<usize> {
        self.default_page_size
    }

    /// Compute a page, blocking on each frame fetch
    ///
    /// `page_number` is 1-based. Elements before the page are consumed from
    /// the source; elements after it stay buffered there.
    pub fn get_page<S>(
        &self,
        source: &mut S,
        page_number: usize,
        page_size: usize,
    ) -> Result<Page<S::Item>>
    where
        S: FrameSource + ?Sized,
    {
        let mut walk = PageWalk::new(self.strategy, page_number, page_size)?;
        loop {
            match walk.advance(source)? {
                Step::Done(page) => return Ok(page),
                Step::Fetch => {
                    source.fetch_next_frame()?;
                    walk.record_fetch();
                }
            }
        }
    }

    /// Compute a page, awaiting each frame fetch
    ///
    /// Fetches are issued one at a time; the next is only started once the
    /// previous one resolved. Dropping the future abandons the walk.
    pub async fn get_page_async<S>(
        &self,
        source: &mut S,
        page_number: usize,
        page_size: usize,
    ) -> Result<Page<S::Item>>
    where
        S: AsyncFrameSource + ?Sized,
    {
        let mut walk = PageWalk::new(self.strategy, page_number, page_size)?;
        loop {
            match walk.advance(source)? {
                Step::Done(page) => return Ok(page),
                Step::Fetch => {
                    source.fetch_next_frame().await?;
                    walk.record_fetch();
                }
            }
        }
    }

    /// Compute a page of the configured default size, blocking
    pub fn get_default_page<S>(&self, source: &mut S, page_number: usize) -> Result<Page<S::Item>>
    where
        S: FrameSource + ?Sized,
    {
        let page_size = self.require_default_page_size()?;
        self.get_page(source, page_number, page_size)
    }

    /// Compute a page of the configured default size, async
    pub async fn get_default_page_async<S>(
        &self,
        source: &mut S,
        page_number: usize,
    ) -> Result<Page<S::Item>>
    where
        S: AsyncFrameSource + ?Sized,
    {
        let page_size = self.require_default_page_size()?;
        self.get_page_async(source, page_number, page_size).await
    }

    fn require_default_page_size(&self) -> Result<usize> {
        self.default_page_size.ok_or_else(|| {
            Error::invalid_argument("page_size", "no default page size is configured")
        })
    }
}
