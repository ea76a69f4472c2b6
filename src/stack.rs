//! A minimal single-linked LIFO used to walk trees without recursion.

struct Frame<T> {
    value: T,
    below: Option<Box<Frame<T>>>,
}

pub(crate) struct Stack<T> {
    top: Option<Box<Frame<T>>>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Stack<T> {
    // Unlink frame by frame so a deep stack doesn't drop recursively.
    fn drop(&mut self) {
        let mut top = self.top.take();
        while let Some(mut frame) = top {
            top = frame.below.take();
        }
    }
}

impl<T> Stack<T> {
    pub(crate) fn new() -> Self {
        Self { top: None }
    }

    pub(crate) fn push(&mut self, value: T) {
        let below = self.top.take();
        self.top = Some(Box::new(Frame { value, below }));
    }

    pub(crate) fn pop(&mut self) -> Option<T> {
        self.top.take().map(|frame| {
            let frame = *frame;
            self.top = frame.below;
            frame.value
        })
    }

    /// Pushes `value` only if there is one. Handy for optional children.
    pub(crate) fn push_some(&mut self, value: Option<T>) {
        if let Some(value) = value {
            self.push(value);
        }
    }
}
