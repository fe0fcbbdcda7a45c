//! Per-type modifiers: one composable slot per element type.

use std::fmt;
use std::rc::Rc;

use crate::Entry;

/// A shared element transformation: a pure function from a slot type to
/// itself, accumulated by composition.
///
/// Stored behind [`Rc`] so that iterators and cursors can hold a cheap
/// copy of the slot they were created under. This makes the container
/// single-threaded: it is neither `Send` nor `Sync`.
pub type Modifier<T> = Rc<dyn Fn(T) -> T>;

/// The three modifier slots of a [`TriVec`].
///
/// `None` is the identity, so nothing allocates until a modifier is
/// registered. A slot is only ever replaced as a whole: composition
/// wraps the previous callable into the new one, reset drops the chain.
///
/// [`TriVec`]: crate::TriVec
pub struct Modifiers<A: 'static, B: 'static, C: 'static> {
    pub first: Option<Modifier<A>>,
    pub second: Option<Modifier<B>>,
    pub third: Option<Modifier<C>>,
}

impl<A, B, C> Modifiers<A, B, C> {
    /// All three slots the identity.
    pub const IDENTITY: Self = Modifiers {
        first: None,
        second: None,
        third: None,
    };

    /// Run the slot-appropriate modifier on an entry.
    pub fn apply(&self, entry: Entry<A, B, C>) -> Entry<A, B, C> {
        match entry {
            Entry::First(value) => Entry::First(apply(self.first.as_ref(), value)),
            Entry::Second(value) => Entry::Second(apply(self.second.as_ref(), value)),
            Entry::Third(value) => Entry::Third(apply(self.third.as_ref(), value)),
        }
    }
}

/// Cloning the slots is what gives iterators and cursors their snapshot
/// behavior: a later registration replaces a slot in the registry, it
/// never reaches inside an already-cloned [`Rc`].
impl<A, B, C> Clone for Modifiers<A, B, C> {
    fn clone(&self) -> Self {
        Modifiers {
            first: self.first.clone(),
            second: self.second.clone(),
            third: self.third.clone(),
        }
    }
}

impl<A, B, C> fmt::Debug for Modifiers<A, B, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = |set: bool| if set { "set" } else { "identity" };
        f.debug_tuple("Modifiers")
            .field(&state(self.first.is_some()))
            .field(&state(self.second.is_some()))
            .field(&state(self.third.is_some()))
            .finish()
    }
}

/// Compose `f` onto a slot: the stored chain runs first, `f` runs on its
/// result.
pub fn compose<T: 'static>(slot: &mut Option<Modifier<T>>, f: impl Fn(T) -> T + 'static) {
    *slot = Some(match slot.take() {
        Some(old) => Rc::new(move |value| f(old(value))),
        None => Rc::new(f),
    });
}

#[inline]
pub fn apply<T: 'static>(modifier: Option<&Modifier<T>>, value: T) -> T {
    match modifier {
        Some(f) => f(value),
        None => value,
    }
}
