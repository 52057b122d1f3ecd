//! A `Vec` that is iterated from the last to the first pushed element.

use alloc::vec::Vec;

/// A `Vec` that is iterated from the last to the first pushed element.
///
/// During matching, this records the order in which variables were bound,
/// so that the last `n` bindings can be undone
/// without knowing which variables they concern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stack<A>(Vec<A>);

impl<A> Stack<A> {
    /// Create an empty stack that can hold `n` elements without reallocating.
    pub fn with_capacity(n: usize) -> Self {
        Self(Vec::with_capacity(n))
    }

    /// Add an element to the top of the stack.
    pub fn push(&mut self, x: A) {
        self.0.push(x)
    }

    /// Remove and return an element from the top of the stack.
    pub fn pop(&mut self) -> Option<A> {
        self.0.pop()
    }

    /// Remove n elements from the top of the stack and
    /// yield them starting from the top.
    ///
    /// Returns `None` and leaves the stack untouched if
    /// the stack holds fewer than n elements.
    ///
    /// ~~~
    /// # use gpmatch::Stack;
    /// let mut s = Stack::with_capacity(3);
    /// s.push(0);
    /// s.push(1);
    /// s.push(2);
    /// assert!(s.pop_many(4).is_none());
    /// let popped: Vec<_> = s.pop_many(2).unwrap().collect();
    /// assert_eq!(popped, vec![2, 1]);
    /// assert_eq!(s.len(), 1);
    /// ~~~
    pub fn pop_many(&mut self, n: usize) -> Option<impl Iterator<Item = A> + '_> {
        let keep = self.len().checked_sub(n)?;
        Some(self.0.drain(keep..).rev())
    }

    /// Remove all elements from the stack.
    pub fn clear(&mut self) {
        self.0.clear()
    }

    /// Return the number of elements on the stack.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return true if the stack contains no elements.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate through the elements of the stack starting from the top.
    pub fn iter(&self) -> impl Iterator<Item = &A> {
        self.0.iter().rev()
    }
}

impl<A> Default for Stack<A> {
    fn default() -> Self {
        Self(Vec::new())
    }
}
