//! 双方向連結リスト。
//!
//! ノードは arena に置き、前後へのリンクは世代つきの添字で表す。
//! 両端への挿入・削除は $`O(1)`$、比較関数による削除は $`O(n)`$。
//!
//! 位置を基準にした走査・削除は [`Cursor`] で行う。
//! 境界への挿入は [`InsertCursor`] のみが持つ機能で、
//! [`OrderedInsertCursor`] を通して順序を保つ挿入に使われる。
//!
//! ```
//! use linked_seq::LinkedSeq;
//!
//! let mut seq = LinkedSeq::new();
//! seq.push_back(3);
//! seq.push_back(1);
//! seq.push_front(2);
//! assert_eq!(seq.to_vec(), [2, 3, 1]);
//!
//! assert_eq!(seq.remove_by(&3, |x, y| x.cmp(y)), Some(3));
//! assert_eq!(seq.pop_back(), Some(1));
//! assert_eq!(seq.to_vec(), [2]);
//! ```

use std::{cmp::Ordering, fmt, iter::FusedIterator};

mod arena;
mod cursor;
mod debug;
mod error;
mod log;

use arena::{Arena, Node, NodeId};

pub use cursor::{Cursor, InsertCursor, OrderedInsertCursor};
pub use error::{Error, Result};

pub struct LinkedSeq<T> {
    arena: Arena<T>,
    ends: Option<(NodeId, NodeId)>,
}

pub struct Iter<'a, T> {
    seq: &'a LinkedSeq<T>,
    ends: Option<(NodeId, NodeId)>,
    len: usize,
}

pub struct IntoIter<T> {
    seq: LinkedSeq<T>,
}

impl<T> LinkedSeq<T> {
    pub fn new() -> Self { Self { arena: Arena::new(), ends: None } }
    pub fn with_capacity(cap: usize) -> Self {
        Self { arena: Arena::with_capacity(cap), ends: None }
    }
    pub fn singleton(elt: T) -> Self {
        let mut seq = Self::with_capacity(1);
        seq.push_back(elt);
        seq
    }

    pub fn len(&self) -> usize { self.arena.len() }
    pub fn is_empty(&self) -> bool { self.ends.is_none() }
    pub fn capacity(&self) -> usize { self.arena.capacity() }

    pub fn push_front(&mut self, elt: T) { self.link_front(elt); }
    pub fn push_back(&mut self, elt: T) { self.link_back(elt); }

    pub fn pop_front(&mut self) -> Option<T> {
        let (first, _) = self.ends?;
        Some(self.unlink(first))
    }
    pub fn pop_back(&mut self) -> Option<T> {
        let (_, last) = self.ends?;
        Some(self.unlink(last))
    }

    pub fn peek_front(&self) -> Option<&T> {
        self.ends.map(|(first, _)| &self.arena[first].val)
    }
    pub fn peek_back(&self) -> Option<&T> {
        self.ends.map(|(_, last)| &self.arena[last].val)
    }
    pub fn peek_front_mut(&mut self) -> Option<&mut T> {
        let (first, _) = self.ends?;
        Some(&mut self.arena[first].val)
    }
    pub fn peek_back_mut(&mut self) -> Option<&mut T> {
        let (_, last) = self.ends?;
        Some(&mut self.arena[last].val)
    }

    /// Returns a cursor placed before the first element.
    pub fn cursor(&mut self) -> Cursor<'_, T> { Cursor::new(self) }

    /// Returns a cursor placed before the first element, able to splice
    /// new elements at its position.
    pub fn insert_cursor(&mut self) -> InsertCursor<'_, T> {
        InsertCursor::new(self)
    }

    /// Removes the first element `x` such that `cmp(target, x)` is
    /// [`Ordering::Equal`], and returns it.
    ///
    /// ```
    /// use linked_seq::LinkedSeq;
    ///
    /// let mut seq: LinkedSeq<_> = [(1, 'a'), (2, 'b'), (1, 'c')].into();
    /// let by_key = |x: &(i32, char), y: &(i32, char)| x.0.cmp(&y.0);
    /// assert_eq!(seq.remove_by(&(1, '_'), by_key), Some((1, 'a')));
    /// assert_eq!(seq.remove_by(&(5, '_'), by_key), None);
    /// assert_eq!(seq.to_vec(), [(2, 'b'), (1, 'c')]);
    /// ```
    pub fn remove_by(
        &mut self,
        target: &T,
        mut cmp: impl FnMut(&T, &T) -> Ordering,
    ) -> Option<T> {
        let mut cursor = self.cursor();
        while let Ok(elt) = cursor.next() {
            if cmp(target, elt) == Ordering::Equal {
                return cursor.remove_current().ok();
            }
        }
        log::trace!("remove_by: no matching element");
        None
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.ends = None;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter { seq: self, ends: self.ends, len: self.len() }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    fn first(&self) -> Option<NodeId> { self.ends.map(|(first, _)| first) }

    fn link_front(&mut self, elt: T) -> NodeId {
        let new = self.arena.alloc(Node::new(elt));
        if let Some((first, last)) = self.ends {
            self.arena[new].next = Some(first);
            self.arena[first].prev = Some(new);
            self.ends = Some((new, last));
        } else {
            self.ends = Some((new, new));
        }
        new
    }
    fn link_back(&mut self, elt: T) -> NodeId {
        let new = self.arena.alloc(Node::new(elt));
        if let Some((first, last)) = self.ends {
            self.arena[new].prev = Some(last);
            self.arena[last].next = Some(new);
            self.ends = Some((first, new));
        } else {
            self.ends = Some((new, new));
        }
        new
    }

    fn link_between(
        &mut self,
        prev: NodeId,
        next: NodeId,
        elt: T,
    ) -> NodeId {
        debug_assert_eq!(self.arena[prev].next, Some(next));
        debug_assert_eq!(self.arena[next].prev, Some(prev));
        let new = self.arena.alloc(Node {
            val: elt,
            prev: Some(prev),
            next: Some(next),
        });
        self.arena[prev].next = Some(new);
        // when `next` is the last node, this is what keeps the backward
        // walk from the last node going through `new`.
        self.arena[next].prev = Some(new);
        new
    }

    fn unlink(&mut self, id: NodeId) -> T {
        let Node { val, prev, next } = self.arena.release(id);
        match prev {
            Some(prev) => self.arena[prev].next = next,
            None => debug_assert_eq!(self.first(), Some(id)),
        }
        match next {
            Some(next) => self.arena[next].prev = prev,
            None => debug_assert_eq!(self.ends.map(|(_, last)| last), Some(id)),
        }
        self.ends = match (prev, next, self.ends) {
            (None, None, _) => None,
            (None, Some(next), Some((_, last))) => Some((next, last)),
            (Some(prev), None, Some((first, _))) => Some((first, prev)),
            (_, _, ends) => ends,
        };
        val
    }
}

impl<T> Default for LinkedSeq<T> {
    fn default() -> Self { Self::new() }
}

impl<T: Clone> Clone for LinkedSeq<T> {
    fn clone(&self) -> Self { self.iter().cloned().collect() }
}

impl<T: PartialEq> PartialEq for LinkedSeq<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedSeq<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedSeq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for LinkedSeq<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elt in iter {
            self.push_back(elt);
        }
    }
}

impl<T> FromIterator<T> for LinkedSeq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Self::new();
        seq.extend(iter);
        seq
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedSeq<T> {
    fn from(arr: [T; N]) -> Self {
        let mut seq = Self::with_capacity(N);
        seq.extend(arr);
        seq
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        let (first, last) = self.ends?;
        let node = &self.seq.arena[first];
        self.len -= 1;
        self.ends = if self.len == 0 {
            None
        } else {
            node.next.map(|next| (next, last))
        };
        Some(&node.val)
    }
    fn size_hint(&self) -> (usize, Option<usize>) { (self.len, Some(self.len)) }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        let (first, last) = self.ends?;
        let node = &self.seq.arena[last];
        self.len -= 1;
        self.ends = if self.len == 0 {
            None
        } else {
            node.prev.map(|prev| (first, prev))
        };
        Some(&node.val)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self { Self { ..*self } }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> { self.seq.pop_front() }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.seq.len(), Some(self.seq.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> { self.seq.pop_back() }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a LinkedSeq<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

impl<T> IntoIterator for LinkedSeq<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> IntoIter<T> { IntoIter { seq: self } }
}
