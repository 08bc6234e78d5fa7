use crate::labyrinth::Labyrinth;
use crate::room::RoomIndex;

// End is checked before start here, unlike the glyph markers: a room carrying
// both flags describes itself as the goal while displaying the start marker.
pub fn describe_room(labyrinth: &Labyrinth, index: RoomIndex) -> String {
    let room = labyrinth.room(index);
    let mut record = String::new();
    record.push_str("synopsis: Another Room\n");
    record.push_str("description: ");
    record.push_str(if room.end {
        "You have reached the heart of the labyrinth!\n"
    } else if room.start {
        "You see the door you entered through.\n"
    } else {
        "You have no idea where you are...\n"
    });
    record.push_str("exits:\n");
    for (direction, neighbor) in labyrinth.exits_of(index) {
        record.push_str(&format!("  {}: {}\n", direction, neighbor));
    }
    record
}

pub fn settings_record(labyrinth: &Labyrinth) -> String {
    format!(
        "start: {}\nalso_load: []\n",
        labyrinth.start_room().name()
    )
}
