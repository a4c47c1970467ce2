use std::num::NonZeroUsize;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
}

/// Circular cursor over `[0, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    current: usize,
    len: NonZeroUsize,
}

impl Navigator {
    pub fn new(len: NonZeroUsize) -> Self {
        Self { current: 0, len }
    }

    pub fn starting_at(len: NonZeroUsize, index: usize) -> Result<Self, AppError> {
        if index >= len.get() {
            return Err(AppError::IndexOutOfRange {
                index,
                len: len.get(),
            });
        }
        let mut navigator = Self::new(len);
        navigator.current = index;
        Ok(navigator)
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len.get()
    }

    pub fn last(&self) -> usize {
        self.len.get() - 1
    }

    pub fn next(&mut self) -> Step {
        let from = self.current;
        self.current = if from == self.last() { 0 } else { from + 1 };
        Step {
            from,
            to: self.current,
            direction: Direction::Forward,
        }
    }

    pub fn previous(&mut self) -> Step {
        let from = self.current;
        self.current = if from == 0 { self.last() } else { from - 1 };
        Step {
            from,
            to: self.current,
            direction: Direction::Backward,
        }
    }

    pub fn jump_to(&mut self, index: usize) -> Result<Step, AppError> {
        if index >= self.len.get() {
            return Err(AppError::IndexOutOfRange {
                index,
                len: self.len.get(),
            });
        }
        let from = self.current;
        self.current = index;
        let direction = if index < from {
            Direction::Backward
        } else {
            Direction::Forward
        };
        Ok(Step {
            from,
            to: index,
            direction,
        })
    }

    /// Index `next()` would land on, without moving.
    pub fn peek_next(&self) -> usize {
        let mut probe = *self;
        probe.next().to
    }

    pub fn peek_previous(&self) -> usize {
        let mut probe = *self;
        probe.previous().to
    }
}
