//! The tagged value stored by a [`TriVec`].
//!
//! [`TriVec`]: crate::TriVec

use crate::element::Element;

/// One element of a [`TriVec`]: a value of one of its three element
/// types, tagged with the slot it belongs to.
///
/// Entries are stored exactly as pushed. Reading them back through the
/// container's iterators or cursors yields transformed copies instead of
/// touching the stored value.
///
/// # Example
///
/// ```rust
/// use trivec::Entry;
///
/// let entry: Entry<i32, String, bool> = Entry::First(1);
/// assert_eq!(entry.get::<i32, _>(), Some(&1));
/// assert_eq!(entry.get::<bool, _>(), None);
/// ```
///
/// [`TriVec`]: crate::TriVec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry<A, B, C> {
    /// A value of the first element type.
    First(A),
    /// A value of the second element type.
    Second(B),
    /// A value of the third element type.
    Third(C),
}

impl<A, B, C> Entry<A, B, C> {
    /// The stored value if this entry belongs to `T`'s slot, `None`
    /// otherwise.
    #[inline]
    #[must_use]
    pub fn get<T, I>(&self) -> Option<&T>
    where
        T: Element<A, B, C, I>,
    {
        T::from_entry(self)
    }
}
