#[cfg(not(all(test, feature = "loom")))]
use core::sync::atomic::{AtomicU8, Ordering};
#[cfg(not(all(test, feature = "loom")))]
use std::thread::yield_now;

#[cfg(all(test, feature = "loom"))]
use loom::{
    sync::atomic::{AtomicU8, Ordering},
    thread::yield_now,
};

use crate::error::LoggerError;
use crate::prelude::Logger;

enum LazyState {
    Unloaded = 0,
    Locked = 1,
    Ready = 2,
}

/// A value written at most once, then shared read-only for the rest of the
/// process.
pub(crate) struct Lazy<T> {
    inner: core::cell::UnsafeCell<Option<T>>,
    state: AtomicU8,
}

impl<T> Lazy<T> {
    #[cfg(not(all(test, feature = "loom")))]
    pub(crate) const fn new() -> Self {
        Self {
            inner: core::cell::UnsafeCell::new(None),
            state: AtomicU8::new(LazyState::Unloaded as u8),
        }
    }

    #[cfg(all(test, feature = "loom"))]
    pub(crate) fn new() -> Self {
        Self {
            inner: core::cell::UnsafeCell::new(None),
            state: AtomicU8::new(LazyState::Unloaded as u8),
        }
    }

    /// Returns the stored value, running `init` first if nobody has yet.
    pub(crate) fn get_or_init(&self, init: impl FnOnce() -> T) -> &T {
        match self.try_init(init) {
            Ok(value) | Err(value) => value,
        }
    }

    /// Stores the value produced by `init` unless another value is already
    /// stored. `Err` carries the value that won.
    pub(crate) fn try_init(&self, init: impl FnOnce() -> T) -> Result<&T, &T> {
        if self.state.load(Ordering::Acquire) == LazyState::Ready as u8 {
            return Err(self.ready());
        }

        match self.state.compare_exchange(
            LazyState::Unloaded as u8,
            LazyState::Locked as u8,
            Ordering::Acquire,
            Ordering::Relaxed,
        ) {
            Ok(_) => {
                let value = init();
                // SAFETY: the Unloaded -> Locked transition above succeeded, so
                // this thread is the only writer and no reader gets past the
                // Ready check until the store below.
                unsafe {
                    *self.inner.get() = Some(value);
                }
                self.state.store(LazyState::Ready as u8, Ordering::Release);
                Ok(self.ready())
            }
            Err(_) => {
                while self.state.load(Ordering::Acquire) != LazyState::Ready as u8 {
                    yield_now();
                }
                Err(self.ready())
            }
        }
    }

    fn ready(&self) -> &T {
        // SAFETY: only called after observing Ready with Acquire ordering;
        // the slot is never written again.
        match unsafe { (*self.inner.get()).as_ref() } {
            Some(value) => value,
            None => unreachable!("lazy value marked ready without a value"),
        }
    }
}

unsafe impl<T: Send + Sync> Sync for Lazy<T> {}

#[cfg(not(all(test, feature = "loom")))]
static GLOBAL: Lazy<Logger> = Lazy::new();

/// Returns the process-wide logger, creating a default one on first use.
///
/// The default logger uses the platform's color sink and a threshold of
/// [`Severity::Trace`](crate::Severity::Trace).
#[cfg(not(all(test, feature = "loom")))]
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(Logger::new)
}

/// Installs `logger` as the process-wide logger.
///
/// # Returns
///
/// The installed logger, or `LoggerError::AlreadyInitialized` if
/// [`global`] or `init_global` already ran.
#[cfg(not(all(test, feature = "loom")))]
pub fn init_global(logger: Logger) -> Result<&'static Logger, LoggerError> {
    GLOBAL
        .try_init(move || logger)
        .map_err(|_| LoggerError::AlreadyInitialized)
}
