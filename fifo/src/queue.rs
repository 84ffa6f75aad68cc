use std::collections::VecDeque;
use std::collections::vec_deque;
use std::fmt;
use std::iter::FusedIterator;

/// A first-in-first-out queue.
///
/// Elements leave the queue in exactly the order they entered it. The front
/// is the element held longest, the rear the one enqueued most recently.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Creates an empty queue without allocating.
    pub const fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Creates an empty queue with room for at least `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// Appends `val` as the new rear element.
    pub fn enqueue(&mut self, val: T) {
        self.items.push_back(val);
    }

    /// Removes and returns the front element, or `None` if the queue is
    /// empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Returns the front element without removing it.
    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    /// Returns the rear element without removing it.
    pub fn rear(&self) -> Option<&T> {
        self.items.back()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Drops every element and releases the backing buffer.
    pub fn clear(&mut self) {
        let items = std::mem::take(&mut self.items);
        if !items.is_empty() {
            tracing::trace!("cleared queue, dropped={}", items.len());
        }
    }

    /// Returns a front-to-rear iterator over the elements.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter(self.items.iter())
    }

    /// Removes every element, yielding them in dequeue order.
    ///
    /// The queue is empty once the returned iterator is dropped, whether or
    /// not it was fully consumed.
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain(self.items.drain(..))
    }
}

impl<T: Clone> Queue<T> {
    /// Copies the elements, front to rear, into a new vector.
    ///
    /// The vector is independent of the queue: changes to either one are
    /// never observed through the other.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> From<Vec<T>> for Queue<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items: items.into(),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Queue<T> {
    fn from(items: [T; N]) -> Self {
        Self {
            items: items.into(),
        }
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self.items.into_iter())
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Borrowing iterator returned by [`Queue::iter`].
#[derive(Clone, Debug)]
pub struct Iter<'a, T>(vec_deque::Iter<'a, T>);

/// Owning iterator returned by [`Queue::into_iter`].
#[derive(Clone, Debug)]
pub struct IntoIter<T>(vec_deque::IntoIter<T>);

/// Draining iterator returned by [`Queue::drain`].
#[derive(Debug)]
pub struct Drain<'a, T>(vec_deque::Drain<'a, T>);

macro_rules! forward_iterator {
    ($name:ident<$($lt:lifetime,)? $t:ident>, $item:ty) => {
        impl<$($lt,)? $t> Iterator for $name<$($lt,)? $t> {
            type Item = $item;

            fn next(&mut self) -> Option<$item> {
                self.0.next()
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.0.size_hint()
            }
        }

        impl<$($lt,)? $t> DoubleEndedIterator for $name<$($lt,)? $t> {
            fn next_back(&mut self) -> Option<$item> {
                self.0.next_back()
            }
        }

        impl<$($lt,)? $t> ExactSizeIterator for $name<$($lt,)? $t> {}
        impl<$($lt,)? $t> FusedIterator for $name<$($lt,)? $t> {}
    };
}

forward_iterator!(Iter<'a, T>, &'a T);
forward_iterator!(IntoIter<T>, T);
forward_iterator!(Drain<'a, T>, T);
