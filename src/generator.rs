use crate::labyrinth::Labyrinth;
use crate::room::RoomIndex;
use crate::symbol::assign_glyphs;
use rand::seq::{IteratorRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;
use thiserror::Error;

pub struct LabyrinthGeneratorConfig {
    pub width: u32,             // Number of rooms along the x-axis
    pub height: u32,            // Number of rooms along the y-axis
    pub depth: u32,             // Number of rooms along the z-axis
    pub start: (u32, u32, u32), // Coordinates of the entry room
    pub end: (u32, u32, u32),   // Coordinates of the goal room
    pub seed: Option<u64>,      // Seed value for random labyrinth generation
}

impl Default for LabyrinthGeneratorConfig {
    fn default() -> Self {
        LabyrinthGeneratorConfig {
            width: 8,
            height: 8,
            depth: 2,
            start: (0, 0, 0),
            end: (7, 7, 1),
            seed: None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LabyrinthGeneratorError {
    #[error("width, height and depth must all be at least 1")]
    ZeroDimension,
    #[error("start room {0}-{1}-{2} is outside the grid")]
    StartOutOfBounds(u32, u32, u32),
    #[error("end room {0}-{1}-{2} is outside the grid")]
    EndOutOfBounds(u32, u32, u32),
}

pub fn generate_labyrinth(
    config: LabyrinthGeneratorConfig,
) -> Result<Labyrinth, LabyrinthGeneratorError> {
    let mut rng: rand::rngs::StdRng = config
        .seed
        .map(SeedableRng::seed_from_u64)
        .unwrap_or_else(rand::rngs::StdRng::from_entropy);
    generate_labyrinth_with(&config, &mut rng)
}

pub fn generate_labyrinth_with<R: Rng>(
    config: &LabyrinthGeneratorConfig,
    rng: &mut R,
) -> Result<Labyrinth, LabyrinthGeneratorError> {
    // validate
    if config.width == 0 || config.height == 0 || config.depth == 0 {
        return Err(LabyrinthGeneratorError::ZeroDimension);
    }
    let (sx, sy, sz) = config.start;
    if sx >= config.width || sy >= config.height || sz >= config.depth {
        return Err(LabyrinthGeneratorError::StartOutOfBounds(sx, sy, sz));
    }
    let (ex, ey, ez) = config.end;
    if ex >= config.width || ey >= config.height || ez >= config.depth {
        return Err(LabyrinthGeneratorError::EndOutOfBounds(ex, ey, ez));
    }

    log::debug!(
        "generating {}x{}x{} labyrinth",
        config.width,
        config.height,
        config.depth
    );
    let mut labyrinth = Labyrinth::new(
        config.width,
        config.height,
        config.depth,
        config.start,
        config.end,
    );
    carve_spanning_tree(&mut labyrinth, rng);
    assign_glyphs(&mut labyrinth);
    log::debug!(
        "carved spanning tree with {} connections",
        labyrinth.rooms().len() - 1
    );
    Ok(labyrinth)
}

// Randomized frontier growth. The growth origin is always room (0, 0, 0),
// independent of the caller-chosen start/end flags.
fn carve_spanning_tree<R: Rng>(labyrinth: &mut Labyrinth, rng: &mut R) {
    let origin = labyrinth.origin();
    labyrinth.room_mut(origin).visited = true;

    let mut frontier: BTreeSet<RoomIndex> = labyrinth
        .available_neighbors_of(origin)
        .into_iter()
        .collect();

    while !frontier.is_empty() {
        let current = frontier.iter().copied().choose(rng).unwrap();
        frontier.remove(&current);
        labyrinth.room_mut(current).visited = true;

        frontier.extend(labyrinth.available_neighbors_of(current));

        // Non-empty: the room was reachable from the visited region.
        let anchors = labyrinth.visited_neighbors_of(current);
        let anchor = *anchors.choose(rng).unwrap();
        labyrinth.connect(current, anchor);
    }
}
