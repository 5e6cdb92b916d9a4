//! # offset-pager
//!
//! Offset pagination ("page N of size S") on top of forward-only result
//! streams that deliver elements in server-sized frames.
//!
//! ## Features
//!
//! - **Blocking and async**: one skip/collect walk, driven either by blocking
//!   fetches or by awaited ones
//! - **One frame at a time**: never more than one fetch in flight, never a
//!   fetch the page doesn't need
//! - **Exact finality**: `is_last` is only reported once the source has
//!   signaled its end, including via an empty terminal frame
//! - **Out-of-bounds policy**: fail, return the last page, or return an empty page
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use offset_pager::{FrameStream, MemoryFrames, OutOfBoundsStrategy, Pager, Result};
//!
//! fn main() -> Result<()> {
//!     let pager = Pager::new(OutOfBoundsStrategy::Fail);
//!
//!     // Five elements, delivered two per frame
//!     let mut source = FrameStream::new(MemoryFrames::new(["a", "b", "c", "d", "e"], 2));
//!     let page = pager.get_page(&mut source, 2, 2)?;
//!
//!     assert_eq!(page.elements(), &["c", "d"]);
//!     assert!(!page.is_last());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  Pager::get_page / Pager::get_page_async                 │
//! └───────────────────────────┬──────────────────────────────┘
//!                             │
//! ┌───────────────────────────┴──────────────────────────────┐
//! │  PageWalk: skip → collect → peek   (OutOfBoundsStrategy) │
//! └───────────────────────────┬──────────────────────────────┘
//!                             │ FrameBuffer + fetch_next_frame
//! ┌───────────────────────────┴──────────────────────────────┐
//! │  FrameStream<FrameFetcher | AsyncFrameFetcher>           │
//! └──────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Pager configuration
pub mod config;

/// Frame sources and fetchers
pub mod source;

/// Offset pager
pub mod pager;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::PagerConfig;
pub use error::{Error, Result};
pub use pager::{OutOfBoundsStrategy, Page, Pager};
pub use source::{
    AsyncFrameFetcher, AsyncFrameSource, Frame, FrameBuffer, FrameFetcher, FrameSource,
    FrameStream, MemoryFrames,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
