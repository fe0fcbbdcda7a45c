//! Membership of the closed three-type element set of a [`TriVec`].
//!
//! [`TriVec`]: crate::TriVec

use crate::modify::Modifier;
use crate::{Entry, TriVec};

/// Type-level index of the first slot. Never constructed, only inferred.
pub enum Slot0 {}
/// Type-level index of the second slot.
pub enum Slot1 {}
/// Type-level index of the third slot.
pub enum Slot2 {}

mod sealed {
    pub trait Element<A, B, C, I> {}
}
impl<A, B, C> sealed::Element<A, B, C, Slot0> for A {}
impl<A, B, C> sealed::Element<A, B, C, Slot1> for B {}
impl<A, B, C> sealed::Element<A, B, C, Slot2> for C {}

/// One of the three element types of a [`TriVec<A, B, C>`].
///
/// `I` is the type-level index of the slot `Self` occupies, [`Slot0`],
/// [`Slot1`] or [`Slot2`]. It exists so that the three blanket impls do
/// not overlap, and it is inferred whenever `A`, `B` and `C` are
/// distinct. If two element types are equal, a call such as
/// `list.reset::<u32, _>()` becomes ambiguous and the index must be
/// spelled out.
///
/// The set is closed: a type that is not one of `A`, `B`, `C` satisfies
/// no impl, so inserting it (or registering a modifier for it) is
/// rejected at compile time.
///
/// ```compile_fail
/// use trivec::TriVec;
///
/// let mut list: TriVec<i32, String, bool> = TriVec::new();
/// list.push(1.5f64); // not one of the three element types
/// ```
///
/// The trait is also sealed: the three blanket impls below are the only
/// ones that can exist, so a fourth type cannot join the set by
/// implementing `Element` itself.
///
/// ```compile_fail
/// use trivec::{Element, Entry, Modifier, Slot0, TriVec};
///
/// struct Fourth;
///
/// impl Element<i32, String, bool, Slot0> for Fourth {
///     fn into_entry(self) -> Entry<i32, String, bool> {
///         Entry::First(0)
///     }
///     fn from_entry(_: &Entry<i32, String, bool>) -> Option<&Self> {
///         None
///     }
///     fn modifier(_: &TriVec<i32, String, bool>) -> Option<&Modifier<Self>> {
///         None
///     }
///     fn modifier_slot(_: &mut TriVec<i32, String, bool>) -> &mut Option<Modifier<Self>> {
///         todo!()
///     }
/// }
/// ```
///
/// Element types are `'static`: modifier slots store them inside
/// `Rc<dyn Fn>` callables.
///
/// [`TriVec<A, B, C>`]: crate::TriVec
pub trait Element<A, B, C, I>: Sized + 'static + sealed::Element<A, B, C, I> {
    /// Wrap a value into the [`Entry`] variant of its slot.
    fn into_entry(self) -> Entry<A, B, C>;

    /// Project an entry onto this slot, `None` if it holds another type.
    fn from_entry(entry: &Entry<A, B, C>) -> Option<&Self>;

    #[doc(hidden)]
    fn modifier(list: &TriVec<A, B, C>) -> Option<&Modifier<Self>>;

    #[doc(hidden)]
    fn modifier_slot(list: &mut TriVec<A, B, C>) -> &mut Option<Modifier<Self>>;
}

impl<A: 'static, B: 'static, C: 'static> Element<A, B, C, Slot0> for A {
    fn into_entry(self) -> Entry<A, B, C> {
        Entry::First(self)
    }
    fn from_entry(entry: &Entry<A, B, C>) -> Option<&Self> {
        match entry {
            Entry::First(value) => Some(value),
            _ => None,
        }
    }
    fn modifier(list: &TriVec<A, B, C>) -> Option<&Modifier<Self>> {
        list.modifiers.first.as_ref()
    }
    fn modifier_slot(list: &mut TriVec<A, B, C>) -> &mut Option<Modifier<Self>> {
        &mut list.modifiers.first
    }
}

impl<A: 'static, B: 'static, C: 'static> Element<A, B, C, Slot1> for B {
    fn into_entry(self) -> Entry<A, B, C> {
        Entry::Second(self)
    }
    fn from_entry(entry: &Entry<A, B, C>) -> Option<&Self> {
        match entry {
            Entry::Second(value) => Some(value),
            _ => None,
        }
    }
    fn modifier(list: &TriVec<A, B, C>) -> Option<&Modifier<Self>> {
        list.modifiers.second.as_ref()
    }
    fn modifier_slot(list: &mut TriVec<A, B, C>) -> &mut Option<Modifier<Self>> {
        &mut list.modifiers.second
    }
}

impl<A: 'static, B: 'static, C: 'static> Element<A, B, C, Slot2> for C {
    fn into_entry(self) -> Entry<A, B, C> {
        Entry::Third(self)
    }
    fn from_entry(entry: &Entry<A, B, C>) -> Option<&Self> {
        match entry {
            Entry::Third(value) => Some(value),
            _ => None,
        }
    }
    fn modifier(list: &TriVec<A, B, C>) -> Option<&Modifier<Self>> {
        list.modifiers.third.as_ref()
    }
    fn modifier_slot(list: &mut TriVec<A, B, C>) -> &mut Option<Modifier<Self>> {
        &mut list.modifiers.third
    }
}
