use crate::constants::{Direction, DIRECTIONS};
use crate::room::{Room, RoomIndex};
use nalgebra::Vector3;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct Labyrinth {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    rooms: Vec<Room>,
    start: RoomIndex,
}

impl Labyrinth {
    pub fn new(
        width: u32,
        height: u32,
        depth: u32,
        start: (u32, u32, u32),
        end: (u32, u32, u32),
    ) -> Self {
        let mut rooms =
            Vec::with_capacity(width as usize * height as usize * depth as usize);
        for z in 0..depth {
            for y in 0..height {
                for x in 0..width {
                    rooms.push(Room::new(
                        Vector3::new(x as i32, y as i32, z as i32),
                        (x, y, z) == start,
                        (x, y, z) == end,
                    ));
                }
            }
        }
        let start_index =
            RoomIndex(((start.2 * height + start.1) * width + start.0) as usize);
        Labyrinth {
            width,
            height,
            depth,
            rooms,
            start: start_index,
        }
    }

    pub fn coords_in_bounds(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0
            && x < self.width as i32
            && y >= 0
            && y < self.height as i32
            && z >= 0
            && z < self.depth as i32
    }

    fn index_of(&self, position: &Vector3<i32>) -> RoomIndex {
        RoomIndex(
            (position.z as usize * self.height as usize + position.y as usize)
                * self.width as usize
                + position.x as usize,
        )
    }

    pub fn room(&self, index: RoomIndex) -> &Room {
        &self.rooms[index.0]
    }

    pub fn room_mut(&mut self, index: RoomIndex) -> &mut Room {
        &mut self.rooms[index.0]
    }

    pub fn room_at(&self, x: u32, y: u32, z: u32) -> &Room {
        &self.rooms[((z * self.height + y) * self.width + x) as usize]
    }

    pub fn origin(&self) -> RoomIndex {
        RoomIndex(0)
    }

    pub fn start_room(&self) -> &Room {
        self.room(self.start)
    }

    // Rooms in storage order: z ascending, then y, then x.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub(crate) fn rooms_mut(&mut self) -> &mut [Room] {
        &mut self.rooms
    }

    pub fn indices(&self) -> impl Iterator<Item = RoomIndex> {
        (0..self.rooms.len()).map(RoomIndex)
    }

    pub fn room_in_direction(&self, index: RoomIndex, direction: Direction) -> Option<RoomIndex> {
        let target = self.room(index).position + direction.unit();
        if self.coords_in_bounds(target.x, target.y, target.z) {
            Some(self.index_of(&target))
        } else {
            None
        }
    }

    pub fn neighbors_of(&self, index: RoomIndex) -> Vec<RoomIndex> {
        DIRECTIONS
            .iter()
            .filter_map(|direction| self.room_in_direction(index, *direction))
            .collect()
    }

    pub fn available_neighbors_of(&self, index: RoomIndex) -> Vec<RoomIndex> {
        self.neighbors_of(index)
            .into_iter()
            .filter(|neighbor| !self.room(*neighbor).visited)
            .collect()
    }

    pub fn visited_neighbors_of(&self, index: RoomIndex) -> Vec<RoomIndex> {
        self.neighbors_of(index)
            .into_iter()
            .filter(|neighbor| self.room(*neighbor).visited)
            .collect()
    }

    pub fn connect(&mut self, a: RoomIndex, b: RoomIndex) {
        let offset = self.room(b).position - self.room(a).position;
        let direction =
            Direction::from_offset(&offset).expect("connected rooms must be grid-adjacent");
        self.room_mut(a).connections.insert(direction);
        self.room_mut(b).connections.insert(direction.opposite());
    }

    pub fn exits_of(&self, index: RoomIndex) -> BTreeMap<&'static str, String> {
        self.room(index)
            .connections
            .iter()
            .filter_map(|direction| {
                self.room_in_direction(index, *direction)
                    .map(|neighbor| (direction.label(), self.room(neighbor).name()))
            })
            .collect()
    }
}
