use std::fmt::Debug;

use crate::{arena::NodeId, LinkedSeq};

impl<T> LinkedSeq<T> {
    /// Walks the chain in both directions and panics on any broken link.
    #[doc(hidden)]
    pub fn assert_links(&self) {
        let len = self.len();
        let Some((first, last)) = self.ends else {
            assert_eq!(len, 0, "no ends but len is {len}");
            return;
        };
        assert!(self.arena[first].prev.is_none(), "first node has a prev");
        assert!(self.arena[last].next.is_none(), "last node has a next");

        let mut forward = vec![first];
        while let Some(next) = self.arena[*forward.last().unwrap()].next {
            assert!(forward.len() < len, "forward walk exceeds len {len}");
            assert_eq!(
                self.arena[next].prev,
                forward.last().copied(),
                "next.prev does not point back"
            );
            forward.push(next);
        }
        assert_eq!(forward.len(), len, "forward walk is too short");
        assert_eq!(forward.last(), Some(&last), "forward walk misses last");

        let mut backward = vec![last];
        while let Some(prev) = self.arena[*backward.last().unwrap()].prev {
            assert!(backward.len() < len, "backward walk exceeds len {len}");
            assert_eq!(
                self.arena[prev].next,
                backward.last().copied(),
                "prev.next does not point forward"
            );
            backward.push(prev);
        }
        backward.reverse();
        assert_eq!(forward, backward, "walks disagree");
    }

    /// Dumps the chain to stderr, one node per line.
    #[doc(hidden)]
    pub fn visualize(&self)
    where
        T: Debug,
    {
        let Some((first, last)) = self.ends else {
            eprintln!("(empty)");
            return;
        };
        let fmt_id = |id: Option<NodeId>| match id {
            Some(id) => format!("{}#{}", id.slot(), id.gen()),
            None => "-".to_owned(),
        };
        let mut cur = Some(first);
        while let Some(id) = cur {
            let node = &self.arena[id];
            let mark = match (id == first, id == last) {
                (true, true) => "─",
                (true, false) => "┌",
                (false, false) => "├",
                (false, true) => "└",
            };
            eprintln!(
                "{mark} [{}] {:?} (prev: {}, next: {})",
                fmt_id(Some(id)),
                node.val,
                fmt_id(node.prev),
                fmt_id(node.next),
            );
            cur = node.next;
        }
    }
}
