//! Caller identification

pub mod context;

pub use context::{CallFrame, CallerContext, FrameGuard};
