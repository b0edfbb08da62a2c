use std::collections::VecDeque;

use super::action::Velocity;

/// A cell on the snake grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move cell by one velocity step
    pub fn stepped(&self, velocity: Velocity) -> Self {
        Self {
            x: self.x + velocity.dx,
            y: self.y + velocity.dy,
        }
    }
}

/// Movement and growth rules shared by the snake implementations.
///
/// A tick calls [`advance`](SnakeBody::advance), checks
/// [`hits_itself`](SnakeBody::hits_itself), optionally
/// [`grow`](SnakeBody::grow)s, and ends with [`settle`](SnakeBody::settle),
/// which records the head as a segment and trims the tail down to the target
/// length.
pub trait SnakeBody {
    fn new(start: Cell, target_len: usize) -> Self
    where
        Self: Sized;

    fn head(&self) -> Cell;

    /// Move the head one cell by `velocity`
    fn advance(&mut self, velocity: Velocity);

    /// Head shares a cell with another segment
    fn hits_itself(&self) -> bool;

    /// Lengthen by one; takes effect in the next trim
    fn grow(&mut self);

    /// Record the head and trim from the tail to the target length
    fn settle(&mut self);

    fn target_len(&self) -> usize;

    /// Number of recorded segments
    fn len(&self) -> usize;

    /// Recorded segments, tail first
    fn segments(&self) -> Vec<Cell>;
}

/// Head coordinates plus a history of previous head cells.
///
/// The history is appended to after every tick, so while the head is being
/// checked it still holds only earlier positions.
#[derive(Debug, Clone, PartialEq)]
pub struct TrailSnake {
    head: Cell,
    history: VecDeque<Cell>,
    target_len: usize,
}

impl SnakeBody for TrailSnake {
    fn new(start: Cell, target_len: usize) -> Self {
        Self {
            head: start,
            history: VecDeque::new(),
            target_len,
        }
    }

    fn head(&self) -> Cell {
        self.head
    }

    fn advance(&mut self, velocity: Velocity) {
        self.head = self.head.stepped(velocity);
    }

    fn hits_itself(&self) -> bool {
        self.history.contains(&self.head)
    }

    fn grow(&mut self) {
        self.target_len += 1;
    }

    fn settle(&mut self) {
        self.history.push_back(self.head);
        while self.history.len() > self.target_len {
            self.history.pop_front();
        }
    }

    fn target_len(&self) -> usize {
        self.target_len
    }

    fn len(&self) -> usize {
        self.history.len()
    }

    fn segments(&self) -> Vec<Cell> {
        self.history.iter().copied().collect()
    }
}

/// Body vector with the head at index 0, stepped by the velocity.
///
/// A resting snake (zero velocity) neither moves nor records segments.
#[derive(Debug, Clone, PartialEq)]
pub struct StepSnake {
    body: Vec<Cell>,
    target_len: usize,
}

impl SnakeBody for StepSnake {
    fn new(start: Cell, target_len: usize) -> Self {
        Self {
            body: vec![start],
            target_len,
        }
    }

    fn head(&self) -> Cell {
        self.body[0]
    }

    fn advance(&mut self, velocity: Velocity) {
        if velocity.is_zero() {
            return;
        }
        let new_head = self.head().stepped(velocity);
        self.body.insert(0, new_head);
    }

    fn hits_itself(&self) -> bool {
        self.body[1..].contains(&self.body[0])
    }

    fn grow(&mut self) {
        self.target_len += 1;
    }

    fn settle(&mut self) {
        self.body.truncate(self.target_len.max(1));
    }

    fn target_len(&self) -> usize {
        self.target_len
    }

    fn len(&self) -> usize {
        self.body.len()
    }

    fn segments(&self) -> Vec<Cell> {
        self.body.iter().rev().copied().collect()
    }
}
