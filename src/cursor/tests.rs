use pretty_assertions::{assert_eq, assert_ne};
use static_assertions::assert_not_impl_any;

use super::*;
use crate::modify;
use crate::{trivec, TriVec};

assert_not_impl_any!(Cursor<'static, i32, String, bool>: Send, Sync);

fn sample() -> TriVec<i32, String, bool> {
    trivec![1, "a".to_string(), true, 2]
}

#[test]
fn steps_forward_through_all_entries() {
    let list = sample();
    let mut cursor = list.cursor_front();

    let mut seen = Vec::new();
    while let Some(entry) = cursor.current() {
        seen.push(entry);
        cursor.move_next();
    }
    let expected = [
        Entry::First(1),
        Entry::Second("a".to_string()),
        Entry::Third(true),
        Entry::First(2),
    ];
    assert_eq!(seen, expected);
    assert_eq!(cursor.index(), None);
}

#[test]
fn back_cursor_starts_on_the_last_entry() {
    let list = sample();
    let mut cursor = list.cursor_back();
    assert_eq!(cursor.index(), Some(3));
    assert_eq!(cursor.current(), Some(Entry::First(2)));

    cursor.move_prev();
    assert_eq!(cursor.current(), Some(Entry::Third(true)));
}

#[test]
fn forward_then_backward_returns_to_start() {
    let list = sample();
    let mut cursor = list.cursor_front();
    cursor.move_next();
    let start = cursor.clone();
    let reference = cursor.current();

    // Crosses the ghost on the way forward.
    for _ in 0..4 {
        cursor.move_next();
    }
    for _ in 0..4 {
        cursor.move_prev();
    }

    assert_eq!(cursor, start);
    assert_eq!(cursor.current(), reference);
    assert_eq!(cursor.index(), Some(1));
}

#[test]
fn stepping_back_retraces_from_every_position() {
    let lists = [sample(), TriVec::new()];
    for list in &lists {
        for start in 0..=list.len() {
            let mut origin = list.cursor_front();
            for _ in 0..start {
                origin.move_next();
            }
            for steps in 0..=list.len() + 1 {
                let mut cursor = origin.clone();
                for _ in 0..steps {
                    cursor.move_next();
                }
                for _ in 0..steps {
                    cursor.move_prev();
                }
                assert_eq!(cursor, origin);
            }
        }
    }
}

#[test]
fn wraps_at_the_ghost() {
    let list = sample();
    let mut cursor = list.cursor_front();

    for _ in 0..list.len() {
        cursor.move_next();
    }
    assert_eq!(cursor.current(), None);
    assert_eq!(cursor.index(), None);

    cursor.move_next();
    assert_eq!(cursor.index(), Some(0));

    cursor.move_prev();
    assert_eq!(cursor.index(), None);
    cursor.move_prev();
    assert_eq!(cursor.index(), Some(list.len() - 1));
}

#[test]
fn empty_list_is_only_the_ghost() {
    let list: TriVec<i32, String, bool> = TriVec::new();
    let mut cursor = list.cursor_front();
    assert_eq!(cursor.current(), None);
    cursor.move_next();
    assert_eq!(cursor.current(), None);
    cursor.move_prev();
    assert_eq!(cursor.index(), None);
    assert_eq!(list.cursor_front(), list.cursor_back());
}

#[test]
fn applies_its_snapshot_not_the_registry() {
    let mut list = sample();
    list.modify(|x: i32| x + 1);

    // Built from the fields directly, so the registry stays free to
    // change while the cursor lives.
    let cursor = Cursor {
        items: &list.items,
        index: 0,
        modifiers: list.modifiers.clone(),
    };
    modify::compose(&mut list.modifiers.first, |x: i32| x * 100);

    assert_eq!(cursor.current(), Some(Entry::First(2)));
    // A cursor created now picks up the extended chain.
    assert_eq!(list.cursor_front().current(), Some(Entry::First(200)));

    // Emptying the slot does not reach the live cursor either.
    list.modifiers.first = None;
    assert_eq!(cursor.current(), Some(Entry::First(2)));
    assert_eq!(list.cursor_front().current(), Some(Entry::First(1)));
}

#[test]
fn equality_is_positional() {
    let mut list = sample();

    let plain = Cursor {
        items: &list.items,
        index: 1,
        modifiers: list.modifiers.clone(),
    };
    modify::compose(&mut list.modifiers.first, |x: i32| x + 1);
    let modified = Cursor {
        items: &list.items,
        index: 1,
        modifiers: list.modifiers.clone(),
    };

    // Same storage, same position: equal, even though the captured
    // modifier slots differ.
    assert_eq!(plain, modified);

    let mut stepped = plain.clone();
    stepped.move_next();
    assert_ne!(stepped, plain);

    // Cursors over distinct storage never compare equal.
    let other = sample();
    assert_ne!(other.cursor_front(), list.cursor_front());
}
