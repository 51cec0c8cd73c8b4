pub mod arena;
pub mod command;
pub mod error;
pub mod linked_list;
pub mod list_node;
pub mod queue;
pub mod stack;

pub use arena::{detect_cycle, get_intersection_node, NodeArena, NodeId};
pub use error::Error;
pub use linked_list::MyLinkedList;
pub use list_node::{remove_nth_from_end, swap_pairs, ListNode};
pub use queue::MyQueue;
pub use stack::Stack;
