//! Bidirectional stepping over a [`TriVec`].
//!
//! [`TriVec`]: crate::TriVec

#[cfg(test)]
mod tests;

use std::ptr;

use crate::modify::Modifiers;
use crate::Entry;

/// A position within a [`TriVec`]: one of its entries, or the "ghost"
/// position past the last entry.
///
/// Stepping is circular, like `std::collections::linked_list` cursors.
/// Moving forward from the last entry lands on the ghost, moving forward
/// from the ghost wraps to the first entry, and symmetrically backwards.
/// Stepping forward then backward the same number of times always comes
/// back to the starting position.
///
/// Like [`Iter`], a cursor holds a copy of all three modifier slots
/// taken at creation. [`Cursor::current`] applies that copy, not the
/// live registry.
///
/// # Example
///
/// ```rust
/// use trivec::{trivec, Entry, TriVec};
///
/// let mut list: TriVec<i32, String, bool> = trivec![1, true];
/// list.modify(|x: i32| x + 1);
///
/// let mut cursor = list.cursor_front();
/// assert_eq!(cursor.current(), Some(Entry::First(2)));
/// cursor.move_next();
/// assert_eq!(cursor.current(), Some(Entry::Third(true)));
/// cursor.move_next();
/// assert_eq!(cursor.current(), None); // the ghost
/// cursor.move_prev();
/// assert_eq!(cursor.index(), Some(1));
/// ```
///
/// [`TriVec`]: crate::TriVec
/// [`Iter`]: crate::Iter
#[derive(Debug)]
pub struct Cursor<'a, A: 'static, B: 'static, C: 'static> {
    pub(crate) items: &'a [Entry<A, B, C>],
    /// In `0..=items.len()`, where `items.len()` is the ghost.
    pub(crate) index: usize,
    pub(crate) modifiers: Modifiers<A, B, C>,
}

impl<A, B, C> Cursor<'_, A, B, C> {
    /// Position of the cursor within the sequence, `None` at the ghost.
    #[inline]
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        (self.index < self.items.len()).then_some(self.index)
    }

    /// Step to the next position. From the ghost, wraps to the front.
    #[inline]
    pub fn move_next(&mut self) {
        self.index = if self.index == self.items.len() {
            0
        } else {
            self.index + 1
        };
    }

    /// Step to the previous position. From the front, lands on the ghost.
    #[inline]
    pub fn move_prev(&mut self) {
        self.index = match self.index.checked_sub(1) {
            Some(index) => index,
            None => self.items.len(),
        };
    }
}

impl<A: Clone, B: Clone, C: Clone> Cursor<'_, A, B, C> {
    /// A transformed copy of the entry under the cursor, `None` at the
    /// ghost. The stored entry itself is left untouched.
    #[must_use]
    pub fn current(&self) -> Option<Entry<A, B, C>> {
        let entry = self.items.get(self.index)?;
        Some(self.modifiers.apply(entry.clone()))
    }
}

/// Positional equality: two cursors are equal when they point into the
/// same storage at the same position. Captured modifier slots do not
/// count.
impl<A, B, C> PartialEq for Cursor<'_, A, B, C> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.items, other.items) && self.index == other.index
    }
}

impl<A, B, C> Eq for Cursor<'_, A, B, C> {}

impl<A, B, C> Clone for Cursor<'_, A, B, C> {
    fn clone(&self) -> Self {
        Cursor {
            items: self.items,
            index: self.index,
            modifiers: self.modifiers.clone(),
        }
    }
}
