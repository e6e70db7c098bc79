//! Bounded stack of points.
//!
//! Capacity is fixed at construction and enforced on every push. Precondition
//! violations (push when full, pop when empty) are returned as `StackError`
//! instead of being silently ignored.

use std::fmt;

use crate::geom::Point;

/// Errors from stack operations that would violate the capacity or occupancy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackError {
    /// Push onto a stack that already holds `capacity` points.
    Overflow { capacity: usize },
    /// Pop from an empty stack.
    Underflow,
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackError::Overflow { capacity } => {
                write!(f, "stack overflow: capacity of {capacity} points exceeded")
            }
            StackError::Underflow => write!(f, "stack underflow: pop from an empty stack"),
        }
    }
}

impl std::error::Error for StackError {}

/// Array-backed stack with a hard capacity.
///
/// Bottom of the stack is index 0 of [`BoundedStack::as_slice`].
#[derive(Clone, Debug)]
pub struct BoundedStack {
    items: Vec<Point>,
    capacity: usize,
}

impl BoundedStack {
    /// Empty stack that holds at most `capacity` points.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, point: Point) -> Result<(), StackError> {
        if self.is_full() {
            return Err(StackError::Overflow {
                capacity: self.capacity,
            });
        }
        self.items.push(point);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<Point, StackError> {
        self.items.pop().ok_or(StackError::Underflow)
    }

    #[inline]
    pub fn top(&self) -> Option<Point> {
        self.items.last().copied()
    }

    /// Element just below the top; `None` with fewer than two elements.
    #[inline]
    pub fn second_from_top(&self) -> Option<Point> {
        let n = self.items.len();
        if n < 2 {
            None
        } else {
            Some(self.items[n - 2])
        }
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.items
    }

    /// Contents bottom to top.
    pub fn into_vec(self) -> Vec<Point> {
        self.items
    }
}
