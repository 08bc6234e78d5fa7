use crate::constants::Direction;
use crate::labyrinth::Labyrinth;
use crate::room::Room;

const ANSI_GREEN: &str = "\u{1b}[92m";
const ANSI_YELLOW: &str = "\u{1b}[93m";
const ANSI_BLUE: &str = "\u{1b}[94m";
const ANSI_RESET: &str = "\u{1b}[0m";

// Vertical connectivity only selects a color attribute; it never changes the
// glyph itself.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum VerticalLink {
    Both,
    Up,
    Down,
    Neither,
}

pub fn vertical_link(room: &Room) -> VerticalLink {
    let up = room.connections.contains(&Direction::Up);
    let down = room.connections.contains(&Direction::Down);
    match (up, down) {
        (true, true) => VerticalLink::Both,
        (true, false) => VerticalLink::Up,
        (false, true) => VerticalLink::Down,
        (false, false) => VerticalLink::Neither,
    }
}

// Shared traversal for both renderings: x cells within y rows within z
// slices, one row break per row, one separator per slice.
fn render_cells<F>(labyrinth: &Labyrinth, mut cell: F, row_break: &str, slice_break: &str) -> String
where
    F: FnMut(&Room) -> String,
{
    let mut out = String::new();
    for z in 0..labyrinth.depth {
        for y in 0..labyrinth.height {
            for x in 0..labyrinth.width {
                out.push_str(&cell(labyrinth.room_at(x, y, z)));
            }
            out.push_str(row_break);
        }
        out.push_str(slice_break);
    }
    out
}

pub fn render_html(labyrinth: &Labyrinth) -> String {
    let cells = render_cells(
        labyrinth,
        |room| match vertical_link(room) {
            VerticalLink::Both => format!("<font color=\"green\">{}</font>", room.glyph),
            VerticalLink::Up => format!("<font color=\"yellow\">{}</font>", room.glyph),
            VerticalLink::Down => format!("<font color=\"blue\">{}</font>", room.glyph),
            VerticalLink::Neither => format!("<font>{}</font>", room.glyph),
        },
        "<br>\n",
        "--------<br>\n",
    );
    format!(
        "<html>\n<head>\n<meta charset=\"UTF-8\">\n<style>html{{background-color: black; color: white;}} font{{font-family: \"Courier\";}}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        cells
    )
}

pub fn render_text(labyrinth: &Labyrinth) -> String {
    render_cells(
        labyrinth,
        |room| match vertical_link(room) {
            VerticalLink::Both => format!("{}{}{}", ANSI_GREEN, room.glyph, ANSI_RESET),
            VerticalLink::Up => format!("{}{}{}", ANSI_YELLOW, room.glyph, ANSI_RESET),
            VerticalLink::Down => format!("{}{}{}", ANSI_BLUE, room.glyph, ANSI_RESET),
            VerticalLink::Neither => room.glyph.to_string(),
        },
        "\n",
        "--------\n",
    )
}

#[cfg(test)]
mod tests {
    use super::{render_html, render_text, vertical_link, VerticalLink};
    use crate::constants::Direction;
    use crate::labyrinth::Labyrinth;
    use crate::symbol::assign_glyphs;

    fn flat_labyrinth() -> Labyrinth {
        let mut labyrinth = Labyrinth::new(2, 2, 1, (0, 0, 0), (1, 1, 0));
        let origin = labyrinth.origin();
        let east = labyrinth.room_in_direction(origin, Direction::East).unwrap();
        let south_east = labyrinth.room_in_direction(east, Direction::South).unwrap();
        labyrinth.connect(origin, east);
        labyrinth.connect(east, south_east);
        assign_glyphs(&mut labyrinth);
        labyrinth
    }

    #[test]
    fn test_vertical_link_classification() {
        let mut labyrinth = Labyrinth::new(1, 1, 3, (0, 0, 0), (0, 0, 2));
        let top = labyrinth.origin();
        let middle = labyrinth.room_in_direction(top, Direction::Down).unwrap();
        let bottom = labyrinth.room_in_direction(middle, Direction::Down).unwrap();
        labyrinth.connect(top, middle);
        labyrinth.connect(middle, bottom);
        assert_eq!(vertical_link(labyrinth.room(top)), VerticalLink::Down);
        assert_eq!(vertical_link(labyrinth.room(middle)), VerticalLink::Both);
        assert_eq!(vertical_link(labyrinth.room(bottom)), VerticalLink::Up);
    }

    #[test]
    fn test_render_text_flat_slice() {
        let labyrinth = flat_labyrinth();
        assert_eq!(render_text(&labyrinth), "S╗\n¤E\n--------\n");
    }

    #[test]
    fn test_render_text_colors_vertical_links() {
        let mut labyrinth = Labyrinth::new(1, 1, 2, (0, 0, 0), (0, 0, 1));
        let upper = labyrinth.origin();
        let lower = labyrinth.room_in_direction(upper, Direction::Down).unwrap();
        labyrinth.connect(upper, lower);
        assign_glyphs(&mut labyrinth);
        assert_eq!(
            render_text(&labyrinth),
            "\u{1b}[94mS\u{1b}[0m\n--------\n\u{1b}[93mE\u{1b}[0m\n--------\n"
        );
    }

    #[test]
    fn test_render_html_document() {
        let labyrinth = flat_labyrinth();
        insta::assert_snapshot!(render_html(&labyrinth), @r#"
        <html>
        <head>
        <meta charset="UTF-8">
        <style>html{background-color: black; color: white;} font{font-family: "Courier";}</style>
        </head>
        <body>
        <font>S</font><font>╗</font><br>
        <font>¤</font><font>E</font><br>
        --------<br>
        </body>
        </html>
        "#);
    }

    #[test]
    fn test_renderings_share_traversal() {
        let labyrinth = flat_labyrinth();
        let text_glyphs: String = render_text(&labyrinth)
            .chars()
            .filter(|c| !c.is_ascii())
            .collect();
        let html = render_html(&labyrinth);
        for glyph in text_glyphs.chars() {
            assert!(html.contains(glyph));
        }
    }
}
