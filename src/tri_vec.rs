//! An insertion-ordered sequence over three element types.


use crate::cursor::Cursor;
use crate::element::Element;
use crate::iter::Iter;
use crate::modify::{self, Modifiers};
use crate::Entry;

/// An insertion-ordered sequence of values of three fixed element types,
/// with one lazy, composable modifier per type.
///
/// Values of the three types interleave freely in a single sequence and
/// are only ever appended. Each element type owns a modifier slot, a
/// function from the type to itself: [`modify`](TriVec::modify) composes
/// onto the slot and [`reset`](TriVec::reset) restores the identity.
///
/// Modifiers run when entries are read back, never when they are stored.
/// Every read hands out a transformed copy and leaves the stored value
/// untouched, so dropping a modifier with `reset` reveals the original
/// values again.
///
/// Which of the three slots a call addresses is picked by the element
/// type, checked at compile time. See [`Element`]. Element types are
/// `'static` because modifier slots store them inside `Rc<dyn Fn>`
/// callables; they do not need any other trait until values are read
/// back (reading clones).
///
/// # Example
///
/// ```rust
/// use trivec::{trivec, Entry, TriVec};
///
/// let mut list: TriVec<i32, String, bool> = trivec![1, "a".to_string(), true, 2];
/// list.modify(|x: i32| x + 1);
/// list.modify(|s: String| s + "!");
///
/// let all: Vec<_> = list.iter().collect();
/// assert_eq!(all, [
///     Entry::First(2),
///     Entry::Second("a!".to_string()),
///     Entry::Third(true),
///     Entry::First(3),
/// ]);
///
/// list.reset::<i32, _>();
/// let ints: Vec<i32> = list.iter_only::<i32, _>().collect();
/// assert_eq!(ints, [1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct TriVec<A: 'static, B: 'static, C: 'static> {
    pub(crate) items: Vec<Entry<A, B, C>>,
    pub(crate) modifiers: Modifiers<A, B, C>,
}

impl<A, B, C> TriVec<A, B, C> {
    /// An empty sequence, every modifier slot the identity.
    #[must_use]
    pub const fn new() -> Self {
        TriVec {
            items: Vec::new(),
            modifiers: Modifiers::IDENTITY,
        }
    }

    /// How many entries are stored, all three types taken together.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a value of one of the three element types.
    ///
    /// The value is stored as-is. Modifiers only ever run when an entry
    /// is read back, so pushing after a `modify` stores the untouched
    /// value just the same.
    ///
    /// # Example
    ///
    /// ```rust
    /// use trivec::TriVec;
    ///
    /// let mut list: TriVec<i32, String, bool> = TriVec::new();
    /// list.push(1);
    /// list.push(true);
    /// list.push("a".to_string());
    /// assert_eq!(list.len(), 3);
    /// ```
    pub fn push<T, I>(&mut self, value: T)
    where
        T: Element<A, B, C, I>,
    {
        self.items.push(value.into_entry());
    }

    /// Compose `f` onto the modifier slot for `T` entries.
    ///
    /// The slot keeps a single callable: the chain registered so far
    /// runs first and `f` runs on its result. Registration is O(1)
    /// however long the chain, and nothing is applied until entries are
    /// read.
    ///
    /// Modifiers cannot change an element's type:
    ///
    /// ```compile_fail
    /// use trivec::TriVec;
    ///
    /// let mut list: TriVec<i32, String, bool> = TriVec::new();
    /// list.modify(|x: i32| x.to_string());
    /// ```
    ///
    /// # Example
    ///
    /// ```rust
    /// use trivec::{trivec, TriVec};
    ///
    /// let mut list: TriVec<i32, String, bool> = trivec![1, 2];
    /// list.modify(|x: i32| x + 1);
    /// list.modify(|x: i32| x * 10);
    ///
    /// // Registration order is execution order: (1 + 1) * 10.
    /// let ints: Vec<i32> = list.iter_only::<i32, _>().collect();
    /// assert_eq!(ints, [20, 30]);
    /// ```
    pub fn modify<T, I, F>(&mut self, f: F)
    where
        T: Element<A, B, C, I>,
        F: Fn(T) -> T + 'static,
    {
        modify::compose(T::modifier_slot(self), f);
    }

    /// Restore the identity modifier for `T` entries, dropping the whole
    /// accumulated chain. The other two slots are untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use trivec::{trivec, TriVec};
    ///
    /// let mut list: TriVec<i32, String, bool> = trivec![1, "a".to_string()];
    /// list.modify(|x: i32| x + 100);
    /// list.modify(|s: String| s + "!");
    /// list.reset::<i32, _>();
    ///
    /// assert_eq!(list.iter_only::<i32, _>().collect::<Vec<_>>(), [1]);
    /// assert_eq!(list.iter_only::<String, _>().collect::<Vec<_>>(), ["a!".to_string()]);
    /// ```
    pub fn reset<T, I>(&mut self)
    where
        T: Element<A, B, C, I>,
    {
        *T::modifier_slot(self) = None;
    }

    /// Iterate over the `T` entries only, in insertion order, each one
    /// passed through a copy of `T`'s modifier slot taken now.
    ///
    /// The iterator is double-ended and `Clone`: cloning it replays the
    /// same elements under the same captured modifier.
    ///
    /// # Example
    ///
    /// ```rust
    /// use trivec::{trivec, TriVec};
    ///
    /// let mut list: TriVec<i32, String, bool> = trivec![1, "a".to_string(), true, 2];
    /// list.modify(|x: i32| x + 1);
    ///
    /// let view = list.iter_only::<i32, _>();
    /// let rerun = view.clone();
    /// assert_eq!(view.collect::<Vec<_>>(), [2, 3]);
    /// assert_eq!(rerun.collect::<Vec<_>>(), [2, 3]);
    /// ```
    pub fn iter_only<T, I>(&self) -> impl DoubleEndedIterator<Item = T> + Clone + '_
    where
        T: Element<A, B, C, I> + Clone,
        // The returned iterator's type captures `I`.
        I: 'static,
    {
        let modifier = T::modifier(self).cloned();
        self.items
            .iter()
            .filter_map(T::from_entry)
            .map(move |value| modify::apply(modifier.as_ref(), value.clone()))
    }

    /// Iterate over every entry in insertion order, each value passed
    /// through the modifier of its own slot. See [`Iter`].
    pub fn iter(&self) -> Iter<'_, A, B, C> {
        Iter {
            items: self.items.iter(),
            modifiers: self.modifiers.clone(),
        }
    }

    /// A [`Cursor`] on the first entry, or on the ghost if the sequence
    /// is empty.
    #[must_use]
    pub fn cursor_front(&self) -> Cursor<'_, A, B, C> {
        Cursor {
            items: &self.items,
            index: 0,
            modifiers: self.modifiers.clone(),
        }
    }

    /// A [`Cursor`] on the last entry, or on the ghost if the sequence
    /// is empty.
    #[must_use]
    pub fn cursor_back(&self) -> Cursor<'_, A, B, C> {
        Cursor {
            items: &self.items,
            index: self.items.len().saturating_sub(1),
            modifiers: self.modifiers.clone(),
        }
    }
}

impl<A, B, C> Default for TriVec<A, B, C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Appends the entries in iteration order. Modifier slots are untouched.
impl<A, B, C> Extend<Entry<A, B, C>> for TriVec<A, B, C> {
    fn extend<T: IntoIterator<Item = Entry<A, B, C>>>(&mut self, iter: T) {
        self.items.extend(iter);
    }
}

/// A sequence pre-populated in iteration order, every modifier slot the
/// identity.
///
/// # Example
///
/// ```rust
/// use trivec::{Entry, TriVec};
///
/// let list: TriVec<i32, String, bool> =
///     [Entry::First(1), Entry::Third(true)].into_iter().collect();
/// assert_eq!(list.len(), 2);
/// ```
impl<A, B, C> FromIterator<Entry<A, B, C>> for TriVec<A, B, C> {
    fn from_iter<T: IntoIterator<Item = Entry<A, B, C>>>(iter: T) -> Self {
        TriVec {
            items: iter.into_iter().collect(),
            modifiers: Modifiers::IDENTITY,
        }
    }
}

impl<A, B, C> From<Vec<Entry<A, B, C>>> for TriVec<A, B, C> {
    fn from(items: Vec<Entry<A, B, C>>) -> Self {
        TriVec {
            items,
            modifiers: Modifiers::IDENTITY,
        }
    }
}

impl<'a, A: Clone, B: Clone, C: Clone> IntoIterator for &'a TriVec<A, B, C> {
    type Item = Entry<A, B, C>;
    type IntoIter = Iter<'a, A, B, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A [`TriVec`] from a list of values of its three element types.
///
/// Values are [pushed](TriVec::push) in order, so any mix of the three
/// element types works. The element types themselves are taken from the
/// surrounding context.
///
/// # Example
///
/// ```rust
/// use trivec::{trivec, TriVec};
///
/// let list: TriVec<i32, String, bool> = trivec![1, "a".to_string(), true, 2];
/// assert_eq!(list.len(), 4);
/// ```
#[macro_export]
macro_rules! trivec {
    () => {
        $crate::TriVec::new()
    };
    ($($value:expr),+ $(,)?) => {{
        let mut list = $crate::TriVec::new();
        $(list.push($value);)+
        list
    }};
}
