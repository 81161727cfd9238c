use crate::{arena::NodeId, log, Error, LinkedSeq, Result};

/// 要素と要素の間を指すカーソル。
///
/// `index` は「`index` 番目の要素の直前」を表し、`0..=len` の値をとる。
/// 直前・直後のノードを覚えておくので、一歩の移動は $`O(1)`$。
/// 最後に [`next`](Cursor::next) か [`previous`](Cursor::previous)
/// で通過した要素を [`remove_current`](Cursor::remove_current) で削除できる。
///
/// ```
/// use linked_seq::{Error, LinkedSeq};
///
/// let mut seq: LinkedSeq<_> = [1, 2, 3].into();
/// let mut cursor = seq.cursor();
/// assert_eq!(cursor.next(), Ok(&1));
/// assert_eq!(cursor.next(), Ok(&2));
/// assert_eq!(cursor.next(), Ok(&3));
/// assert_eq!(cursor.next(), Err(Error::OutOfRange { index: 3, len: 3 }));
/// assert_eq!(cursor.remove_current(), Ok(3));
/// assert_eq!(seq.to_vec(), [1, 2]);
/// ```
pub struct Cursor<'a, T> {
    seq: &'a mut LinkedSeq<T>,
    index: usize,
    before: Option<NodeId>,
    after: Option<NodeId>,
    current: Option<NodeId>,
}

/// 境界への挿入ができるカーソル。
///
/// 挿入位置の正しさ（たとえば昇順が保たれること）は呼び出し側が責任を持つ。
pub trait OrderedInsertCursor<T> {
    fn peek_next(&self) -> Option<&T>;
    fn next(&mut self) -> Result<&T>;
    /// Splices `elt` at the boundary. The cursor ends up right after the
    /// new element.
    fn insert(&mut self, elt: T);
}

pub struct InsertCursor<'a, T> {
    cursor: Cursor<'a, T>,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(seq: &'a mut LinkedSeq<T>) -> Self {
        let after = seq.first();
        Self { seq, index: 0, before: None, after, current: None }
    }

    pub fn has_next(&self) -> bool { self.after.is_some() }
    pub fn has_previous(&self) -> bool { self.before.is_some() }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<&T> {
        let id = self.after.ok_or(self.out_of_range())?;
        self.before = Some(id);
        self.after = self.seq.arena[id].next;
        self.current = Some(id);
        self.index += 1;
        Ok(&self.seq.arena[id].val)
    }
    pub fn previous(&mut self) -> Result<&T> {
        let id = self.before.ok_or(self.out_of_range())?;
        self.after = Some(id);
        self.before = self.seq.arena[id].prev;
        self.current = Some(id);
        self.index -= 1;
        Ok(&self.seq.arena[id].val)
    }

    pub fn peek_next(&self) -> Option<&T> {
        self.after.map(|id| &self.seq.arena[id].val)
    }
    pub fn peek_previous(&self) -> Option<&T> {
        self.before.map(|id| &self.seq.arena[id].val)
    }
    pub fn current(&self) -> Option<&T> {
        self.current.map(|id| &self.seq.arena[id].val)
    }

    pub fn next_index(&self) -> usize { self.index }
    pub fn previous_index(&self) -> Result<usize> {
        self.index.checked_sub(1).ok_or(self.out_of_range())
    }

    /// Removes the element last returned by `next` or `previous`.
    ///
    /// Afterwards the cursor sits right before the element that used to
    /// follow the removed one.
    pub fn remove_current(&mut self) -> Result<T> {
        let id = match self.current {
            Some(id) if !self.seq.is_empty() => id,
            _ => {
                log::debug!(index = self.index, "remove_current refused");
                return Err(Error::InvalidState);
            }
        };
        let node = &self.seq.arena[id];
        let (prev, next) = (node.prev, node.next);
        if self.before == Some(id) {
            self.index -= 1;
        }
        self.before = prev;
        self.after = next;
        self.current = None;
        Ok(self.seq.unlink(id))
    }

    pub fn reset(&mut self) {
        self.index = 0;
        self.before = None;
        self.after = self.seq.first();
        self.current = None;
    }

    fn out_of_range(&self) -> Error {
        Error::OutOfRange { index: self.index, len: self.seq.len() }
    }
}

impl<'a, T> InsertCursor<'a, T> {
    pub(crate) fn new(seq: &'a mut LinkedSeq<T>) -> Self {
        Self { cursor: Cursor::new(seq) }
    }
    pub fn as_cursor(&mut self) -> &mut Cursor<'a, T> { &mut self.cursor }
    pub fn next_index(&self) -> usize { self.cursor.index }
}

impl<T> OrderedInsertCursor<T> for InsertCursor<'_, T> {
    fn peek_next(&self) -> Option<&T> { self.cursor.peek_next() }
    fn next(&mut self) -> Result<&T> { self.cursor.next() }

    fn insert(&mut self, elt: T) {
        let c = &mut self.cursor;
        let new = match (c.before, c.after) {
            // index == 0
            (None, _) => c.seq.link_front(elt),
            // index == len
            (Some(_), None) => c.seq.link_back(elt),
            (Some(before), Some(after)) => {
                c.seq.link_between(before, after, elt)
            }
        };
        c.before = Some(new);
        c.index += 1;
        c.current = None;
    }
}
