//! Test support utilities - only compiled in test builds.

use core::sync::atomic::AtomicU32;

use crate::{catalog, region::MappedRegion, window::RegisterWindow};

/// Zeroed word storage backing a RAM-based region.
pub fn words<const N: usize>() -> [AtomicU32; N] {
    [const { AtomicU32::new(0) }; N]
}

/// Attaches a buzzer window (span 4) over the given words.
pub fn buzzer_window(words: &[AtomicU32]) -> RegisterWindow<'_, 'static> {
    RegisterWindow::attach(MappedRegion::new(words), catalog::BUZZER).unwrap()
}

/// Attaches an rgb-controller window (span 16) over the given words.
pub fn rgb_window(words: &[AtomicU32]) -> RegisterWindow<'_, 'static> {
    RegisterWindow::attach(MappedRegion::new(words), catalog::RGB_CONTROLLER).unwrap()
}
