//! Caller-side mutual exclusion for an [`Optional`].
//!
//! [`Optional`] carries no locking of its own. When a container has to be
//! reached from several threads, wrap it in a [`SharedOptional`]: a cloneable
//! handle to one `Arc<Mutex<Optional<T>>>`. Every clone sees the same slot.
//! A poisoned lock is reported as [`OptionalError::Lock`] rather than
//! propagating the panic that poisoned it.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::warn;

use crate::error::{OptionalError, Result};
use crate::optional::Optional;

#[derive(Debug)]
pub struct SharedOptional<T> {
    slot: Arc<Mutex<Optional<T>>>,
}

// derived Clone would require T: Clone
impl<T> Clone for SharedOptional<T> {
    fn clone(&self) -> Self {
        Self { slot: Arc::clone(&self.slot) }
    }
}

impl<T> Default for SharedOptional<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Optional<T>> for SharedOptional<T> {
    fn from(optional: Optional<T>) -> Self {
        Self { slot: Arc::new(Mutex::new(optional)) }
    }
}

impl<T> SharedOptional<T> {
    pub fn new() -> Self {
        Self::from(Optional::Empty)
    }
    pub fn holding(value: T) -> Self {
        Self::from(Optional::Holding(value))
    }

    fn lock(&self) -> Result<MutexGuard<'_, Optional<T>>> {
        self.slot.lock().map_err(|e| {
            warn!(error=%e, "shared optional lock poisoned");
            OptionalError::Lock(e.to_string())
        })
    }

    /// Runs `f` with exclusive access to the container.
    pub fn with<R, F>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&mut Optional<T>) -> R,
    {
        let mut guard = self.lock()?;
        Ok(f(&mut guard))
    }

    pub fn assign(&self, value: T) -> Result<()> {
        self.with(|o| o.assign(value))
    }
    pub fn reset(&self) -> Result<()> {
        self.with(|o| o.reset())
    }
    pub fn take(&self) -> Result<Optional<T>> {
        self.with(|o| o.take())
    }
    pub fn is_present(&self) -> Result<bool> {
        self.with(|o| o.is_present())
    }
    /// Copies the held value out. Absence surfaces as [`OptionalError::Absent`].
    pub fn get_cloned(&self) -> Result<T>
    where
        T: Clone,
    {
        let guard = self.lock()?;
        Ok(guard.try_get()?.clone())
    }
}
