use crate::constants::Direction;
use nalgebra::Vector3;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub position: Vector3<i32>,
    pub start: bool,
    pub end: bool,
    pub visited: bool,
    pub connections: BTreeSet<Direction>,
    pub glyph: char,
}

impl Room {
    pub fn new(position: Vector3<i32>, start: bool, end: bool) -> Self {
        Room {
            position,
            start,
            end,
            visited: false,
            connections: BTreeSet::new(),
            glyph: ' ',
        }
    }

    pub fn name(&self) -> String {
        format!(
            "{}-{}-{}",
            self.position.x, self.position.y, self.position.z
        )
    }
}

#[derive(Ord, PartialOrd, PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub struct RoomIndex(pub(crate) usize);
