//! Viewport width signal
//!
//! The grid column count is derived from the viewport width on every vertical
//! move, so the width is read through a trait rather than cached.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

pub trait Viewport: Send + Sync {
    fn width(&self) -> u32;
}

/// A viewport that never resizes
#[derive(Debug, Clone, Copy)]
pub struct FixedViewport(pub u32);

impl Viewport for FixedViewport {
    fn width(&self) -> u32 {
        self.0
    }
}

/// Shared, resizable viewport width
#[derive(Debug, Clone)]
pub struct ViewportHandle {
    width: Arc<AtomicU32>,
}

impl ViewportHandle {
    pub fn new(width: u32) -> Self {
        Self {
            width: Arc::new(AtomicU32::new(width)),
        }
    }

    pub fn set_width(&self, width: u32) {
        self.width.store(width, Ordering::Relaxed);
    }
}

impl Viewport for ViewportHandle {
    fn width(&self) -> u32 {
        self.width.load(Ordering::Relaxed)
    }
}
