//! Whole-sequence iteration with per-slot modifiers applied.

use std::iter::FusedIterator;
use std::slice;

use crate::modify::Modifiers;
use crate::Entry;

/// Iterator over every entry of a [`TriVec`] in insertion order, each
/// value passed through the modifier of its slot.
///
/// Created by [`TriVec::iter`]. It holds a copy of all three modifier
/// slots taken when it was created, so `modify` and `reset` calls made
/// afterwards do not change what this instance yields.
///
/// # Example
///
/// ```rust
/// use trivec::{trivec, Entry, TriVec};
///
/// let mut list: TriVec<i32, String, bool> = trivec![1, "a".to_string(), 2];
/// list.modify(|x: i32| x * 10);
///
/// let mut iter = list.iter();
/// assert_eq!(iter.next(), Some(Entry::First(10)));
/// assert_eq!(iter.next_back(), Some(Entry::First(20)));
/// assert_eq!(iter.len(), 1);
/// ```
///
/// [`TriVec`]: crate::TriVec
/// [`TriVec::iter`]: crate::TriVec::iter
#[derive(Debug)]
pub struct Iter<'a, A: 'static, B: 'static, C: 'static> {
    pub(crate) items: slice::Iter<'a, Entry<A, B, C>>,
    pub(crate) modifiers: Modifiers<A, B, C>,
}

impl<A: Clone, B: Clone, C: Clone> Iterator for Iter<'_, A, B, C> {
    type Item = Entry<A, B, C>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.items.next()?;
        Some(self.modifiers.apply(entry.clone()))
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
    fn count(self) -> usize {
        self.items.count()
    }
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let entry = self.items.nth(n)?;
        Some(self.modifiers.apply(entry.clone()))
    }
    fn fold<Acc, F: FnMut(Acc, Self::Item) -> Acc>(self, init: Acc, mut f: F) -> Acc {
        let Iter { items, modifiers } = self;
        items.fold(init, |acc, entry| f(acc, modifiers.apply(entry.clone())))
    }
}

impl<A: Clone, B: Clone, C: Clone> DoubleEndedIterator for Iter<'_, A, B, C> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let entry = self.items.next_back()?;
        Some(self.modifiers.apply(entry.clone()))
    }
}

impl<A: Clone, B: Clone, C: Clone> ExactSizeIterator for Iter<'_, A, B, C> {
    fn len(&self) -> usize {
        self.items.len()
    }
}

impl<A: Clone, B: Clone, C: Clone> FusedIterator for Iter<'_, A, B, C> {}

/// The clone resumes from this iterator's position, reusing its captured
/// modifier slots.
impl<A, B, C> Clone for Iter<'_, A, B, C> {
    fn clone(&self) -> Self {
        Iter {
            items: self.items.clone(),
            modifiers: self.modifiers.clone(),
        }
    }
}
