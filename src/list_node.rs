//! Exercises over bare node chains, where the caller owns the head directly.

use log::debug;

// Definition for singly-linked list.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct ListNode {
    pub val: i32,
    pub next: Option<Box<ListNode>>,
}

impl ListNode {
    #[inline]
    pub fn new(val: i32) -> Self {
        ListNode { next: None, val }
    }

    pub fn from_vec(values: &[i32]) -> Option<Box<ListNode>> {
        values
            .iter()
            .rev()
            .fold(None, |next, &val| Some(Box::new(ListNode { val, next })))
    }

    pub fn to_vec(head: &Option<Box<ListNode>>) -> Vec<i32> {
        let mut values = Vec::new();
        let mut current = head.as_deref();
        while let Some(node) = current {
            values.push(node.val);
            current = node.next.as_deref();
        }
        values
    }
}

impl Drop for ListNode {
    fn drop(&mut self) {
        let mut current = self.next.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

fn length(head: &Option<Box<ListNode>>) -> usize {
    let mut len = 0;
    let mut current = head.as_deref();
    while let Some(node) = current {
        len += 1;
        current = node.next.as_deref();
    }
    len
}

fn advance(node: &mut ListNode, steps: usize) -> Option<&mut ListNode> {
    let mut current = node;
    for _ in 0..steps {
        current = current.next.as_deref_mut()?;
    }
    Some(current)
}

/// Swaps every two adjacent nodes by relinking them. A trailing odd node stays where it is.
pub fn swap_pairs(head: Option<Box<ListNode>>) -> Option<Box<ListNode>> {
    let mut dummy = Box::new(ListNode { val: 0, next: head });
    let mut prev = &mut dummy;
    while let Some(mut first) = prev.next.take() {
        match first.next.take() {
            Some(mut second) => {
                first.next = second.next.take();
                second.next = Some(first);
                let placed = prev.next.insert(second);
                match placed.next.as_mut() {
                    Some(next_pair) => prev = next_pair,
                    None => break,
                }
            }
            None => {
                prev.next = Some(first);
                break;
            }
        }
    }
    dummy.next.take()
}

/// Removes the `n`-th node counted from the end, `n == 1` being the last one. If `n` is not in
/// `1..=len`, the chain comes back unchanged.
pub fn remove_nth_from_end(head: Option<Box<ListNode>>, n: i32) -> Option<Box<ListNode>> {
    let len = length(&head);
    let n = match usize::try_from(n) {
        Ok(n) if (1..=len).contains(&n) => n,
        _ => {
            debug!(
                "ignoring remove_nth_from_end({}): chain has {} nodes",
                n, len
            );
            return head;
        }
    };

    let mut dummy = Box::new(ListNode { val: 0, next: head });
    if let Some(prev) = advance(&mut dummy, len - n) {
        if let Some(mut removed) = prev.next.take() {
            prev.next = removed.next.take();
        }
    }
    dummy.next.take()
}
