/// Direction an entity can be steered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Grid velocity: zero, or a unit vector along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Velocity {
    pub dx: i32,
    pub dy: i32,
}

impl Velocity {
    pub const ZERO: Velocity = Velocity { dx: 0, dy: 0 };

    pub fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    pub fn is_zero(&self) -> bool {
        self.dx == 0 && self.dy == 0
    }

    /// Velocity actually applied this tick when `requested` was latched and
    /// `self` was applied on the previous tick.
    ///
    /// Each axis is checked on its own: a request for the opposite sign on an
    /// axis the snake is already moving along keeps the previous component.
    pub fn guarded(self, requested: Velocity) -> Velocity {
        let mut applied = requested;

        if (self.dx == 1 && requested.dx == -1) || (self.dx == -1 && requested.dx == 1) {
            applied.dx = self.dx;
        }
        if (self.dy == 1 && requested.dy == -1) || (self.dy == -1 && requested.dy == 1) {
            applied.dy = self.dy;
        }

        applied
    }
}

impl From<Direction> for Velocity {
    fn from(direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Velocity { dx, dy }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_velocity_from_direction() {
        assert_eq!(Velocity::from(Direction::Up), Velocity::new(0, -1));
        assert_eq!(Velocity::from(Direction::Down), Velocity::new(0, 1));
        assert_eq!(Velocity::from(Direction::Left), Velocity::new(-1, 0));
        assert_eq!(Velocity::from(Direction::Right), Velocity::new(1, 0));
    }

    #[test]
    fn test_reversal_is_ignored() {
        let previous = Velocity::new(1, 0);
        assert_eq!(previous.guarded(Velocity::new(-1, 0)), Velocity::new(1, 0));

        let previous = Velocity::new(0, -1);
        assert_eq!(previous.guarded(Velocity::new(0, 1)), Velocity::new(0, -1));
    }

    #[test]
    fn test_perpendicular_turn_is_applied() {
        let previous = Velocity::new(1, 0);
        assert_eq!(previous.guarded(Velocity::new(0, 1)), Velocity::new(0, 1));
    }

    #[test]
    fn test_first_input_from_rest() {
        assert_eq!(
            Velocity::ZERO.guarded(Velocity::new(-1, 0)),
            Velocity::new(-1, 0)
        );
        assert!(Velocity::ZERO.is_zero());
    }
}
