use crate::constants::Direction;
use crate::labyrinth::Labyrinth;
use std::collections::BTreeSet;

pub const START_GLYPH: char = 'S';
pub const END_GLYPH: char = 'E';

// Junction glyph for the horizontal connection pattern. Membership is tested
// in fixed north, west, south, east order; vertical connections never
// contribute (they only select a color attribute in the visualizer).
pub fn junction_glyph(connections: &BTreeSet<Direction>) -> char {
    let north = connections.contains(&Direction::North);
    let west = connections.contains(&Direction::West);
    let south = connections.contains(&Direction::South);
    let east = connections.contains(&Direction::East);
    match (north, west, south, east) {
        (false, false, false, false) => '¤',
        (true, false, false, false) => '╥',
        (false, true, false, false) => '╞',
        (false, false, true, false) => '╨',
        (false, false, false, true) => '╡',
        (true, false, false, true) => '╚',
        (true, true, false, false) => '╝',
        (true, false, true, false) => '║',
        (false, true, false, true) => '═',
        (false, true, true, false) => '╗',
        (false, false, true, true) => '╔',
        (true, true, true, false) => '╣',
        (true, false, true, true) => '╠',
        (true, true, false, true) => '╩',
        (false, true, true, true) => '╦',
        (true, true, true, true) => '╬',
    }
}

// Runs once after generation completes; start is checked before end, so a
// room carrying both flags shows the start marker.
pub fn assign_glyphs(labyrinth: &mut Labyrinth) {
    for room in labyrinth.rooms_mut() {
        room.glyph = if room.start {
            START_GLYPH
        } else if room.end {
            END_GLYPH
        } else {
            junction_glyph(&room.connections)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::{assign_glyphs, junction_glyph};
    use crate::constants::Direction;
    use crate::labyrinth::Labyrinth;
    use std::collections::BTreeSet;

    #[test]
    fn test_junction_glyphs() {
        assert_eq!(junction_glyph(&BTreeSet::new()), '¤');
        assert_eq!(junction_glyph(&BTreeSet::from([Direction::North])), '╥');
        assert_eq!(
            junction_glyph(&BTreeSet::from([Direction::North, Direction::South])),
            '║'
        );
        assert_eq!(
            junction_glyph(&BTreeSet::from([Direction::West, Direction::East])),
            '═'
        );
        assert_eq!(
            junction_glyph(&BTreeSet::from([
                Direction::North,
                Direction::West,
                Direction::South,
                Direction::East,
            ])),
            '╬'
        );
    }

    #[test]
    fn test_vertical_connections_do_not_affect_glyph() {
        assert_eq!(
            junction_glyph(&BTreeSet::from([Direction::Up, Direction::Down])),
            '¤'
        );
        assert_eq!(
            junction_glyph(&BTreeSet::from([Direction::East, Direction::Up])),
            '╡'
        );
    }

    #[test]
    fn test_derivation_is_pure() {
        let connections = BTreeSet::from([Direction::North, Direction::East]);
        assert_eq!(junction_glyph(&connections), junction_glyph(&connections));
    }

    #[test]
    fn test_start_marker_wins_over_end_marker() {
        let mut labyrinth = Labyrinth::new(1, 1, 1, (0, 0, 0), (0, 0, 0));
        assign_glyphs(&mut labyrinth);
        assert_eq!(labyrinth.room(labyrinth.origin()).glyph, 'S');
    }

    #[test]
    fn test_assigned_glyphs_match_connections() {
        let mut labyrinth = Labyrinth::new(3, 1, 1, (0, 0, 0), (2, 0, 0));
        let origin = labyrinth.origin();
        let middle = labyrinth.room_in_direction(origin, Direction::East).unwrap();
        let last = labyrinth.room_in_direction(middle, Direction::East).unwrap();
        labyrinth.connect(origin, middle);
        labyrinth.connect(middle, last);
        assign_glyphs(&mut labyrinth);
        assert_eq!(labyrinth.room(origin).glyph, 'S');
        assert_eq!(labyrinth.room(middle).glyph, '═');
        assert_eq!(labyrinth.room(last).glyph, 'E');
    }
}
