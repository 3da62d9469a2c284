//! Explicit caller context
//!
//! Entry points announce themselves by pushing a [`CallFrame`] for the
//! duration of a call:
//!
//! ```ignore
//! let _frame = CallerContext::enter("billing::invoices", "billing");
//! let loader = servload::load("formatter", ())?; // package "billing"
//! ```
//!
//! Frames are per thread and are popped when the guard drops.

use servload_domain::{CallerIdentificationOptions, CallerIdentifier, CallerInfo};
use std::cell::RefCell;
use std::marker::PhantomData;

thread_local! {
    static FRAMES: RefCell<Vec<CallFrame>> = const { RefCell::new(Vec::new()) };
}

/// One entry on the caller stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallFrame {
    /// Module identifier of the caller
    pub module: String,
    /// Package owning the module
    pub package: Option<String>,
}

impl CallFrame {
    fn into_info(self) -> CallerInfo {
        CallerInfo::new(self.module, self.package)
    }
}

/// Caller identifier reading the current thread's frame stack
#[derive(Debug, Clone, Copy, Default)]
pub struct CallerContext;

impl CallerContext {
    /// Create the identifier
    pub fn new() -> Self {
        Self
    }

    /// Push a frame for `module` owned by `package` until the guard drops
    #[must_use = "the frame is popped as soon as the guard is dropped"]
    pub fn enter<M: Into<String>, P: Into<String>>(module: M, package: P) -> FrameGuard {
        Self::push(CallFrame {
            module: module.into(),
            package: Some(package.into()),
        })
    }

    /// Push a frame whose owning package is unknown
    #[must_use = "the frame is popped as soon as the guard is dropped"]
    pub fn enter_anonymous<M: Into<String>>(module: M) -> FrameGuard {
        Self::push(CallFrame {
            module: module.into(),
            package: None,
        })
    }

    fn push(frame: CallFrame) -> FrameGuard {
        let depth = FRAMES.with(|frames| {
            let mut frames = frames.borrow_mut();
            frames.push(frame);
            frames.len()
        });
        FrameGuard {
            depth,
            _not_send: PhantomData,
        }
    }

    /// Frames on the current thread, innermost first
    pub fn frames() -> Vec<CallFrame> {
        FRAMES.with(|frames| frames.borrow().iter().rev().cloned().collect())
    }
}

impl CallerIdentifier for CallerContext {
    fn identify(&self, request: &CallerIdentificationOptions) -> Vec<CallerInfo> {
        FRAMES.with(|frames| {
            frames
                .borrow()
                .iter()
                .rev()
                .filter(|frame| !request.excludes(&frame.module))
                .take(request.limit)
                .cloned()
                .map(CallFrame::into_info)
                .collect()
        })
    }
}

/// Pops its frame, and any frames pushed after it, on drop
#[derive(Debug)]
pub struct FrameGuard {
    depth: usize,
    _not_send: PhantomData<*const ()>,
}

impl Drop for FrameGuard {
    fn drop(&mut self) {
        FRAMES.with(|frames| frames.borrow_mut().truncate(self.depth - 1));
    }
}
