//! Lock used for game state.
//!
//! With `std` this wraps [`std::sync::Mutex`] and recovers the guard from a
//! poisoned lock. Without `std` it is `spin::Mutex`.

#[cfg(feature = "std")]
pub struct Mutex<T>(std::sync::Mutex<T>);

#[cfg(feature = "std")]
impl<T> Mutex<T> {
    pub const fn new(value: T) -> Self {
        Self(std::sync::Mutex::new(value))
    }

    /// Locks the mutex, taking the guard even if another holder panicked.
    pub fn lock(&self) -> std::sync::MutexGuard<'_, T> {
        self.0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

// Shows the guarded value so `Game` can derive `Debug`. Never blocks.
#[cfg(feature = "std")]
impl<T: core::fmt::Debug> core::fmt::Debug for Mutex<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut tuple = f.debug_tuple("Mutex");
        match self.0.try_lock() {
            Ok(guard) => tuple.field(&*guard),
            Err(std::sync::TryLockError::Poisoned(err)) => tuple.field(&*err.into_inner()),
            Err(std::sync::TryLockError::WouldBlock) => tuple.field(&format_args!("<locked>")),
        };
        tuple.finish()
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub use spin::Mutex;
