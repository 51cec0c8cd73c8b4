use crate::stack::Stack;

/// FIFO queue made of two stacks.
///
/// Pushes land on `inbox`. When `outbox` runs dry, the whole inbox is poured into it, which
/// reverses the order so the oldest element ends up on top. Each element moves at most once,
/// so every operation is amortised O(1).
pub struct MyQueue<T> {
    inbox: Stack<T>,
    outbox: Stack<T>,
}

impl<T> Default for MyQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MyQueue<T> {
    pub fn new() -> MyQueue<T> {
        MyQueue {
            inbox: Stack::new(),
            outbox: Stack::new(),
        }
    }

    pub fn push(&mut self, value: T) {
        self.inbox.push(value);
    }

    /// Removes and returns the oldest element, or `None` if the queue is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.refill();
        self.outbox.pop()
    }

    pub fn peek(&mut self) -> Option<&T> {
        self.refill();
        self.outbox.peek()
    }

    pub fn empty(&self) -> bool {
        self.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.inbox.is_empty() && self.outbox.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inbox.len() + self.outbox.len()
    }

    fn refill(&mut self) {
        if self.outbox.is_empty() {
            while let Some(value) = self.inbox.pop() {
                self.outbox.push(value);
            }
        }
    }
}
