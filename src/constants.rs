use nalgebra::Vector3;

// Fixed enumeration order: -x, +x, -y, +y, -z, +z.
pub const DIRECTIONS: [Direction; 6] = [
    Direction::West,
    Direction::East,
    Direction::North,
    Direction::South,
    Direction::Up,
    Direction::Down,
];

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    West,
    East,
    North,
    South,
    Up,
    Down,
}

impl Direction {
    pub fn unit(&self) -> Vector3<i32> {
        match self {
            Direction::West => Vector3::new(-1, 0, 0),
            Direction::East => Vector3::new(1, 0, 0),
            Direction::North => Vector3::new(0, -1, 0),
            Direction::South => Vector3::new(0, 1, 0),
            Direction::Up => Vector3::new(0, 0, -1),
            Direction::Down => Vector3::new(0, 0, 1),
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::West => Direction::East,
            Direction::East => Direction::West,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Direction::West => "west",
            Direction::East => "east",
            Direction::North => "north",
            Direction::South => "south",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    pub fn from_offset(offset: &Vector3<i32>) -> Option<Direction> {
        DIRECTIONS
            .iter()
            .copied()
            .find(|direction| direction.unit() == *offset)
    }
}
