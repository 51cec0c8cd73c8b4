use std::collections::VecDeque;

use linked_list::{MyLinkedList, MyQueue};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn contents(list: &MyLinkedList) -> Vec<i32> {
    list.iter().collect()
}

/// Random operation sequences, including out-of-range indices, checked against a `Vec`.
#[test]
fn linked_list_matches_vec() {
    let mut rng = StdRng::seed_from_u64(110);
    for _ in 0..50 {
        let mut list = MyLinkedList::new();
        let mut model: Vec<i32> = Vec::new();
        for _ in 0..200 {
            let len = model.len() as i32;
            let index = rng.gen_range(-2..=len + 2);
            let value = rng.gen_range(-100..100);
            match rng.gen_range(0..5) {
                0 => {
                    list.add_at_head(value);
                    model.insert(0, value);
                }
                1 => {
                    list.add_at_tail(value);
                    model.push(value);
                }
                2 => {
                    list.add_at_index(index, value);
                    if index >= 0 && index <= len {
                        model.insert(index as usize, value);
                    }
                }
                3 => {
                    list.delete_at_index(index);
                    if index >= 0 && index < len {
                        model.remove(index as usize);
                    }
                }
                _ => {
                    let expected = usize::try_from(index)
                        .ok()
                        .and_then(|i| model.get(i).copied());
                    assert_eq!(list.get(index), expected);
                }
            }
            assert_eq!(list.len(), model.len());
        }
        assert_eq!(contents(&list), model);
    }
}

#[test]
fn out_of_range_reads_at_every_size() {
    let mut list = MyLinkedList::new();
    for count in 0..10 {
        assert_eq!(list.get(-1), None);
        assert_eq!(list.get(count), None);
        list.add_at_tail(count);
    }
}

#[test]
fn out_of_range_writes_leave_list_alone() {
    let mut list: MyLinkedList = vec![5, 6, 7].into_iter().collect();
    let before = list.clone();
    list.add_at_index(4, 1);
    list.add_at_index(-1, 1);
    list.delete_at_index(3);
    list.delete_at_index(-1);
    assert_eq!(list, before);
}

#[test]
fn queue_matches_vec_deque() {
    let mut rng = StdRng::seed_from_u64(242);
    let mut queue = MyQueue::new();
    let mut model = VecDeque::new();
    for step in 0..1000 {
        if rng.gen_bool(0.55) {
            queue.push(step);
            model.push_back(step);
        } else if rng.gen_bool(0.5) {
            assert_eq!(queue.pop(), model.pop_front());
        } else {
            assert_eq!(queue.peek(), model.front());
        }
        assert_eq!(queue.len(), model.len());
        assert_eq!(queue.empty(), model.is_empty());
    }
    while let Some(expected) = model.pop_front() {
        assert_eq!(queue.pop(), Some(expected));
    }
    assert_eq!(queue.pop(), None);
}
