use std::{cmp::Ordering, collections::VecDeque};

pub struct VecSeq<T>(VecDeque<T>);

impl<T> VecSeq<T> {
    pub fn new() -> Self { Self(VecDeque::new()) }
    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
    pub fn push_front(&mut self, elt: T) { self.0.push_front(elt) }
    pub fn push_back(&mut self, elt: T) { self.0.push_back(elt) }
    pub fn pop_front(&mut self) -> Option<T> { self.0.pop_front() }
    pub fn pop_back(&mut self) -> Option<T> { self.0.pop_back() }
    pub fn peek_front(&self) -> Option<&T> { self.0.front() }
    pub fn peek_back(&self) -> Option<&T> { self.0.back() }
    pub fn get(&self, i: usize) -> Option<&T> { self.0.get(i) }
    pub fn remove(&mut self, i: usize) -> Option<T> { self.0.remove(i) }
    pub fn insert(&mut self, i: usize, elt: T) { self.0.insert(i, elt) }

    pub fn remove_by(
        &mut self,
        target: &T,
        mut cmp: impl FnMut(&T, &T) -> Ordering,
    ) -> Option<T> {
        let i = self.0.iter().position(|x| cmp(target, x).is_eq())?;
        self.0.remove(i)
    }

    /// 比較で `elt` 以下の要素すべての直後に挿入する。
    pub fn insert_sorted_by(
        &mut self,
        elt: T,
        mut cmp: impl FnMut(&T, &T) -> Ordering,
    ) {
        let i = self.0.iter().take_while(|x| !cmp(&elt, x).is_lt()).count();
        self.0.insert(i, elt);
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + DoubleEndedIterator {
        self.0.iter()
    }
}

impl<T: Clone> VecSeq<T> {
    pub fn to_vec(&self) -> Vec<T> { self.0.iter().cloned().collect() }
}

impl<T> Default for VecSeq<T> {
    fn default() -> Self { Self::new() }
}

#[test]
fn sanity_check() {
    let mut seq = VecSeq::new();
    seq.insert_sorted_by((2, 'a'), |x, y| x.0.cmp(&y.0));
    seq.insert_sorted_by((1, 'b'), |x, y| x.0.cmp(&y.0));
    seq.insert_sorted_by((2, 'c'), |x, y| x.0.cmp(&y.0));
    assert_eq!(seq.to_vec(), [(1, 'b'), (2, 'a'), (2, 'c')]);

    assert_eq!(seq.remove_by(&(2, '_'), |x, y| x.0.cmp(&y.0)), Some((2, 'a')));
    assert_eq!(seq.remove_by(&(5, '_'), |x, y| x.0.cmp(&y.0)), None);
    assert_eq!(seq.to_vec(), [(1, 'b'), (2, 'c')]);
}
