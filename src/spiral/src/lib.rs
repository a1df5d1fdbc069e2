use derive_more::Display;

/// Center value of the classic prime-rich Ulam spiral.
pub const DEFAULT_SEED: u64 = 41;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Left,
    Down,
    Right,
}

impl Direction {
    fn unit(self) -> (i64, i64) {
        match self {
            Direction::Up => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Down => (0, 1),
            Direction::Right => (1, 0),
        }
    }

    fn rotated(self) -> Self {
        match self {
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
            Direction::Right => Direction::Up,
        }
    }
}

/// One step of the walk: a grid position and the value placed there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("{x} {y} {value}")]
pub struct Point {
    pub x: i64,
    pub y: i64,
    pub value: u64,
}

/// Unbounded square-spiral walk outward from the origin. Bound it with
/// [`Iterator::take`]; each walk is independent of every other.
#[derive(Debug, Clone)]
pub struct Walk {
    x: i64,
    y: i64,
    value: u64,
    direction: Direction,
    min_x: i64,
    max_x: i64,
    min_y: i64,
    max_y: i64,
}

impl Walk {
    pub fn new(seed: u64) -> Self {
        Walk {
            x: 0,
            y: 0,
            value: seed,
            direction: Direction::Up,
            min_x: 0,
            max_x: 0,
            min_y: 0,
            max_y: 0,
        }
    }
}

impl Default for Walk {
    fn default() -> Self {
        Walk::new(DEFAULT_SEED)
    }
}

impl Iterator for Walk {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let point = Point {
            x: self.x,
            y: self.y,
            value: self.value,
        };
        self.value += 1;
        let (dx, dy) = self.direction.unit();
        self.x += dx;
        self.y += dy;
        // All four bounds are checked independently every step; each
        // crossing rotates the direction and records the new extremum.
        if self.x < self.min_x {
            self.direction = self.direction.rotated();
            self.min_x = self.x;
        }
        if self.x > self.max_x {
            self.direction = self.direction.rotated();
            self.max_x = self.x;
        }
        if self.y < self.min_y {
            self.direction = self.direction.rotated();
            self.min_y = self.y;
        }
        if self.y > self.max_y {
            self.direction = self.direction.rotated();
            self.max_y = self.y;
        }
        Some(point)
    }
}
