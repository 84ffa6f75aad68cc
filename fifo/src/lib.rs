//! A generic first-in-first-out queue.
//!
//! [`Queue`] stores elements in insertion order: [`enqueue`](Queue::enqueue)
//! appends at the rear and [`dequeue`](Queue::dequeue) removes from the
//! front. Looking at either end never mutates the queue, and an empty queue
//! reports absence through [`None`] rather than an error.
//!
//! ```
//! use fifo::Queue;
//!
//! let mut q = Queue::new();
//! q.enqueue(10);
//! q.enqueue(20);
//! q.enqueue(30);
//!
//! assert_eq!(q.dequeue(), Some(10));
//! assert_eq!(q.front(), Some(&20));
//! assert_eq!(q.rear(), Some(&30));
//! assert_eq!(q.len(), 2);
//! assert_eq!(q.to_vec(), [20, 30]);
//! ```
//!
//! The queue does no locking of its own. Share it across threads by wrapping
//! it, e.g. in a [`Mutex`](std::sync::Mutex).

pub mod queue;
pub use queue::{Drain, IntoIter, Iter, Queue};
