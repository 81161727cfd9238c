//! 挿入のたびに昇順を保つ双方向連結リスト。
//!
//! [`add`](SortedLinkedSeq::add) は先頭から走査し、挿入する値より真に大きい最初の要素の直前に挿入する。
//! 比較で等しい要素は追い越さないので、等しい要素どうしは挿入順に並ぶ。
//! 一回の挿入は $`O(n)`$。
//!
//! 位置を指定する挿入（[`push_front`](SortedLinkedSeq::push_front)・[`push_back`](SortedLinkedSeq::push_back)）は順序を壊しうるので
//! [`Error::Unsupported`] を返す。
//!
//! ```
//! use sorted_linked_seq::SortedLinkedSeq;
//!
//! let mut seq = SortedLinkedSeq::new();
//! seq.add(3);
//! seq.add(1);
//! seq.add(2);
//! assert_eq!(seq.to_vec(), [1, 2, 3]);
//! assert!(seq.push_back(0).is_err());
//! ```

use std::{cmp::Ordering, fmt};

use linked_seq::{Cursor, Error, Iter, LinkedSeq, OrderedInsertCursor, Result};

mod log;

pub struct SortedLinkedSeq<T, F = fn(&T, &T) -> Ordering> {
    seq: LinkedSeq<T>,
    cmp: F,
}

/// `cursor` の位置から前方に走査し、`cmp(&elt, x)` が
/// [`Ordering::Less`] になる最初の要素 `x` の直前に `elt` を挿入する。
/// そのような要素がなければ末尾に挿入する。
pub fn insert_sorted<T, C, F>(cursor: &mut C, elt: T, mut cmp: F)
where
    C: OrderedInsertCursor<T> + ?Sized,
    F: FnMut(&T, &T) -> Ordering,
{
    while matches!(cursor.peek_next(), Some(next) if cmp(&elt, next).is_ge()) {
        // cannot fail, the element was just peeked
        let _ = cursor.next();
    }
    cursor.insert(elt);
}

impl<T: Ord> SortedLinkedSeq<T> {
    pub fn new() -> Self { Self::with_comparator(T::cmp) }
}

impl<T, F: Fn(&T, &T) -> Ordering> SortedLinkedSeq<T, F> {
    pub fn with_comparator(cmp: F) -> Self {
        Self { seq: LinkedSeq::new(), cmp }
    }
    pub fn singleton_with_comparator(elt: T, cmp: F) -> Self {
        Self { seq: LinkedSeq::singleton(elt), cmp }
    }

    pub fn add(&mut self, elt: T) {
        let mut cursor = self.seq.insert_cursor();
        insert_sorted(&mut cursor, elt, &self.cmp);
        log::trace!(index = cursor.next_index() - 1, "add");
    }

    pub fn push_front(&mut self, _elt: T) -> Result<()> {
        log::debug!("push_front refused on a sorted sequence");
        Err(Error::Unsupported("push_front on a sorted sequence"))
    }
    pub fn push_back(&mut self, _elt: T) -> Result<()> {
        log::debug!("push_back refused on a sorted sequence");
        Err(Error::Unsupported("push_back on a sorted sequence"))
    }

    /// Removes the first element equal to `target` under this sequence's
    /// own comparator.
    pub fn remove(&mut self, target: &T) -> Option<T> {
        self.seq.remove_by(target, &self.cmp)
    }
    pub fn remove_by(
        &mut self,
        target: &T,
        cmp: impl FnMut(&T, &T) -> Ordering,
    ) -> Option<T> {
        self.seq.remove_by(target, cmp)
    }

    pub fn len(&self) -> usize { self.seq.len() }
    pub fn is_empty(&self) -> bool { self.seq.is_empty() }
    pub fn peek_front(&self) -> Option<&T> { self.seq.peek_front() }
    pub fn peek_back(&self) -> Option<&T> { self.seq.peek_back() }
    pub fn pop_front(&mut self) -> Option<T> { self.seq.pop_front() }
    pub fn pop_back(&mut self) -> Option<T> { self.seq.pop_back() }
    pub fn clear(&mut self) { self.seq.clear() }

    /// The cursor can step and remove, but not insert, so the order is kept.
    pub fn cursor(&mut self) -> Cursor<'_, T> { self.seq.cursor() }
    pub fn iter(&self) -> Iter<'_, T> { self.seq.iter() }
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.seq.to_vec()
    }

    pub fn comparator(&self) -> &F { &self.cmp }
    pub fn as_inner(&self) -> &LinkedSeq<T> { &self.seq }
    pub fn into_inner(self) -> LinkedSeq<T> { self.seq }
}

impl<T: Ord> Default for SortedLinkedSeq<T> {
    fn default() -> Self { Self::new() }
}

impl<T: Clone, F: Clone> Clone for SortedLinkedSeq<T, F> {
    fn clone(&self) -> Self {
        Self { seq: self.seq.clone(), cmp: self.cmp.clone() }
    }
}

impl<T, F: Fn(&T, &T) -> Ordering> Extend<T> for SortedLinkedSeq<T, F> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elt in iter {
            self.add(elt);
        }
    }
}

impl<T: Ord> FromIterator<T> for SortedLinkedSeq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Self::new();
        seq.extend(iter);
        seq
    }
}

impl<'a, T, F> IntoIterator for &'a SortedLinkedSeq<T, F> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { self.seq.iter() }
}

impl<T: fmt::Debug, F> fmt::Debug for SortedLinkedSeq<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.seq, f)
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;
    use vec_seq::VecSeq;

    use super::*;

    fn is_sorted_by<T>(
        seq: &LinkedSeq<T>,
        cmp: impl Fn(&T, &T) -> Ordering,
    ) -> bool {
        seq.iter().zip(seq.iter().skip(1)).all(|(x, y)| cmp(x, y).is_le())
    }

    #[test]
    fn sanity_check() {
        let mut seq = SortedLinkedSeq::new();
        seq.add(3);
        seq.add(1);
        seq.add(2);
        assert_eq!(seq.to_vec(), [1, 2, 3]);
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.peek_front(), Some(&1));
        assert_eq!(seq.peek_back(), Some(&3));
        seq.into_inner().assert_links();
    }

    #[test]
    fn empty() {
        let mut seq = SortedLinkedSeq::<i32>::new();
        assert!(seq.is_empty());
        assert_eq!(seq.to_vec(), Vec::<i32>::new());
        assert_eq!(seq.pop_front(), None);
        assert_eq!(seq.pop_back(), None);
        assert_eq!(seq.remove(&1), None);
        seq.add(1);
        assert_eq!(seq.to_vec(), [1]);
    }

    #[test]
    fn positional_insertion_is_refused() {
        let mut seq: SortedLinkedSeq<_> = [2, 4].into_iter().collect();
        assert_eq!(
            seq.push_front(9),
            Err(Error::Unsupported("push_front on a sorted sequence"))
        );
        assert_eq!(
            seq.push_back(0),
            Err(Error::Unsupported("push_back on a sorted sequence"))
        );
        assert_eq!(seq.to_vec(), [2, 4]);
    }

    #[test]
    fn equal_elements_keep_insertion_order() {
        let by_key = |x: &(i32, char), y: &(i32, char)| x.0.cmp(&y.0);
        let mut seq = SortedLinkedSeq::with_comparator(by_key);
        seq.extend([(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (2, 'e')]);
        assert_eq!(
            seq.to_vec(),
            [(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c'), (2, 'e')]
        );

        // the first of a run of duplicates goes first
        assert_eq!(seq.remove(&(2, '_')), Some((2, 'a')));
        assert_eq!(seq.remove_by(&(1, '_'), by_key), Some((1, 'b')));
        assert_eq!(seq.to_vec(), [(1, 'd'), (2, 'c'), (2, 'e')]);
    }

    #[test]
    fn second_to_last() {
        let mut seq = SortedLinkedSeq::new();
        seq.add(10);
        seq.add(30);
        seq.add(20);
        assert!(seq.iter().rev().eq(&[30, 20, 10]));
        seq.add(25);
        seq.add(28);
        assert!(seq.iter().rev().eq(&[30, 28, 25, 20, 10]));

        assert_eq!(seq.pop_back(), Some(30));
        assert_eq!(seq.peek_back(), Some(&28));
        seq.add(29);
        assert_eq!(seq.to_vec(), [10, 20, 25, 28, 29]);
        seq.into_inner().assert_links();
    }

    #[test]
    fn descending() {
        let mut seq =
            SortedLinkedSeq::with_comparator(|x: &i32, y: &i32| y.cmp(x));
        seq.extend([3, 1, 4, 1, 5, 9, 2, 6]);
        assert_eq!(seq.to_vec(), [9, 6, 5, 4, 3, 2, 1, 1]);
    }

    #[test]
    fn singleton() {
        let by_str = |x: &&str, y: &&str| x.cmp(y);
        let mut seq = SortedLinkedSeq::singleton_with_comparator("m", by_str);
        seq.add("a");
        seq.add("z");
        assert_eq!(seq.to_vec(), ["a", "m", "z"]);
    }

    #[test]
    fn round_trip() {
        let seq: LinkedSeq<_> = [5, 3, 8, 1, 3, 9, 0].into();
        let sorted: SortedLinkedSeq<_> = seq.to_vec().into_iter().collect();
        assert_eq!(sorted.to_vec(), [0, 1, 3, 3, 5, 8, 9]);

        let again: SortedLinkedSeq<_> = sorted.to_vec().into_iter().collect();
        assert_eq!(again.into_inner(), sorted.into_inner());
    }

    #[test]
    fn cursor_removal_keeps_order() {
        let mut seq: SortedLinkedSeq<_> = (0..10).rev().collect();
        let mut cursor = seq.cursor();
        while let Ok(&x) = cursor.next() {
            if x % 3 == 0 {
                cursor.remove_current().unwrap();
            }
        }
        assert_eq!(seq.to_vec(), [1, 2, 4, 5, 7, 8]);
        seq.add(6);
        seq.add(0);
        assert_eq!(seq.to_vec(), [0, 1, 2, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_fmt() {
        let seq: SortedLinkedSeq<_> = [3, 1, 2].into_iter().collect();
        assert_eq!(format!("{seq:?}"), "[1, 2, 3]");
    }

    struct VecCursor<'a> {
        buf: &'a mut Vec<i32>,
        index: usize,
    }

    impl OrderedInsertCursor<i32> for VecCursor<'_> {
        fn peek_next(&self) -> Option<&i32> { self.buf.get(self.index) }
        fn next(&mut self) -> Result<&i32> {
            let len = self.buf.len();
            let elt = self
                .buf
                .get(self.index)
                .ok_or(Error::OutOfRange { index: self.index, len })?;
            self.index += 1;
            Ok(elt)
        }
        fn insert(&mut self, elt: i32) {
            self.buf.insert(self.index, elt);
            self.index += 1;
        }
    }

    #[test]
    fn insert_sorted_over_any_cursor() {
        let mut buf = vec![];
        for x in [5, 2, 8, 2, 7] {
            let mut cursor = VecCursor { buf: &mut buf, index: 0 };
            insert_sorted(&mut cursor, x, i32::cmp);
        }
        assert_eq!(buf, [2, 2, 5, 7, 8]);
    }

    #[test]
    fn random_ops() {
        let mut rng = ChaCha20Rng::from_seed([
            0x6D, 0x02, 0xB8, 0x4F, 0xE3, 0x19, 0x7A, 0xC5, 0x30, 0x9E, 0x51,
            0xF7, 0x0C, 0xA4, 0x68, 0xD3, 0x2B, 0x86, 0xEF, 0x15, 0x7C, 0xB0,
            0x4A, 0x93, 0xD6, 0x21, 0x5F, 0xE8, 0x0A, 0xC7, 0x34, 0x9B,
        ]);
        let by_key = |x: &(u8, usize), y: &(u8, usize)| x.0.cmp(&y.0);
        let mut actual = SortedLinkedSeq::with_comparator(by_key);
        let mut expected = VecSeq::new();
        for tag in 0..20000 {
            match rng.gen_range(0..8) {
                0 => assert_eq!(actual.pop_front(), expected.pop_front()),
                1 => assert_eq!(actual.pop_back(), expected.pop_back()),
                2 => {
                    let key = (rng.gen_range(0..16), 0);
                    assert_eq!(
                        actual.remove(&key),
                        expected.remove_by(&key, by_key)
                    );
                }
                _ => {
                    let elt = (rng.gen_range(0..16), tag);
                    actual.add(elt);
                    expected.insert_sorted_by(elt, by_key);
                }
            }
            assert_eq!(actual.len(), expected.len());
            assert_eq!(actual.peek_front(), expected.peek_front());
            assert_eq!(actual.peek_back(), expected.peek_back());
        }
        assert_eq!(actual.to_vec(), expected.to_vec());

        actual.as_inner().assert_links();
        assert!(is_sorted_by(actual.as_inner(), by_key));
    }

    #[test]
    fn sorted_after_every_add() {
        let mut rng = ChaCha20Rng::from_seed([0; 32]);
        let mut seq = SortedLinkedSeq::new();
        for _ in 0..500 {
            seq.add(rng.gen_range(-50..50));
            let inner = seq.as_inner();
            assert!(is_sorted_by(inner, i32::cmp));
            assert!(inner.iter().rev().eq(inner.to_vec().iter().rev()));
            inner.assert_links();
        }
        assert_eq!(seq.len(), 500);
    }
}
