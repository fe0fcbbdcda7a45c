#![warn(clippy::nursery)]
#![allow(clippy::use_self)]
#![doc = include_str!("../README.md")]

mod cursor;
mod element;
mod entry;
mod iter;
mod modify;
mod tri_vec;

pub use cursor::Cursor;
pub use element::{Element, Slot0, Slot1, Slot2};
pub use entry::Entry;
pub use iter::Iter;
pub use modify::Modifier;
pub use tri_vec::TriVec;
