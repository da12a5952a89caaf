/// FocusStack: bounded, order-preserving stack deciding the active camera.
///
/// Entries are stable `CameraKey`s, never addresses, so compacting the
/// stack or the camera storage cannot invalidate another entry.
///
/// Invariants:
/// - no key appears twice
/// - removal from the middle compacts and keeps the relative order
/// - the top entry (last pushed, not yet released) is the active camera

use crate::error::{Error, Result};
use super::camera_world::CameraKey;

/// Bounded focus stack. Bottom is index 0, top is the last entry.
#[derive(Debug, Clone)]
pub struct FocusStack {
    entries: Vec<CameraKey>,
    capacity: usize,
}

impl FocusStack {
    /// Create an empty stack holding at most `capacity` keys
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Give focus to `key`.
    ///
    /// An existing occurrence is removed first, so re-acquiring moves the key
    /// to the top without duplicating it.
    ///
    /// # Errors
    ///
    /// `CapacityExceeded` if the stack is still full after that removal.
    /// The stack is left unchanged and the current top keeps focus.
    pub fn acquire(&mut self, key: CameraKey) -> Result<()> {
        self.remove_if_present(key);
        if self.entries.len() >= self.capacity {
            return Err(Error::CapacityExceeded { what: "focus stack", capacity: self.capacity });
        }
        self.entries.push(key);
        Ok(())
    }

    /// Take focus away from `key` wherever it sits.
    ///
    /// Returns whether the key was present. Absent keys are not an error.
    pub fn release(&mut self, key: CameraKey) -> bool {
        self.remove_if_present(key)
    }

    /// Drop `key` when its camera is destroyed. Same compaction as `release`.
    pub fn remove_if_present(&mut self, key: CameraKey) -> bool {
        match self.entries.iter().position(|&k| k == key) {
            Some(index) => {
                // Vec::remove shifts the tail down, keeping order
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Active camera, or None when nothing has focus
    pub fn top(&self) -> Option<CameraKey> {
        self.entries.last().copied()
    }

    pub fn contains(&self, key: CameraKey) -> bool {
        self.entries.contains(&key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate from bottom (oldest) to top (active)
    pub fn iter(&self) -> impl Iterator<Item = CameraKey> + '_ {
        self.entries.iter().copied()
    }
}

#[cfg(test)]
#[path = "focus_stack_tests.rs"]
mod tests;
