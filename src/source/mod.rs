//! Frame source module
//!
//! Supports: blocking and async fetchers, iterator and stream adapters,
//! in-memory replay
//!
//! # Overview
//!
//! A frame source delivers elements in server-sized chunks driven by a
//! continuation token the transport owns. The pager only sees the buffered,
//! forward-only view of it ([`FrameBuffer`]) plus one way to fetch the next
//! frame: [`FrameSource`] (blocking) or [`AsyncFrameSource`] (async).
//!
//! Transports usually implement [`FrameFetcher`] or [`AsyncFrameFetcher`]
//! (one round-trip per call) and wrap it in a [`FrameStream`], which does
//! the buffering.

mod memory;
mod stream;
mod types;

pub use memory::MemoryFrames;
pub use stream::{FrameStream, IterFrames, StreamFrames};
pub use types::{
    AsyncFrameFetcher, AsyncFrameSource, Fetcher, Frame, FrameBuffer, FrameFetcher, FrameSource,
};
