/// An owning link to a child. `None` marks the empty slot at the bottom of a subtree.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A `Node` has a key used for searching/sorting and owns at most one left and one right child.
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Node<K> {
    /// Construct a new leaf holding `key`.
    pub(crate) fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Replaces this node's key with the largest key of its left subtree and unlinks the node
    /// that held it. That node has no right child, so its left child takes its place.
    ///
    /// ## Panics
    ///
    /// When called on a node without a left child.
    pub(crate) fn lift_max_in_left_subtree(&mut self) -> K {
        let mut slot = &mut self.left;
        while slot.as_ref().map_or(false, |n| n.right.is_some()) {
            slot = &mut slot.as_mut().expect("Loop condition => node").right;
        }

        let mut largest = slot
            .take()
            .expect("Lifting the left subtree's max => left child");
        *slot = largest.left.take();
        std::mem::replace(&mut self.key, largest.key)
    }
}
