use clap::Parser;
use labyrinth_3d_generator::describe::{describe_room, settings_record};
use labyrinth_3d_generator::generator::{generate_labyrinth, LabyrinthGeneratorConfig};
use labyrinth_3d_generator::visualize::{render_html, render_text};
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(about = "Generate a 3D labyrinth and export room descriptions and maps")]
struct Args {
    #[arg(long, default_value_t = 2)]
    width: u32,
    #[arg(long, default_value_t = 2)]
    height: u32,
    #[arg(long, default_value_t = 2)]
    depth: u32,
    #[arg(long, value_parser = parse_coords, default_value = "0,0,0")]
    start: (u32, u32, u32),
    #[arg(long, value_parser = parse_coords, default_value = "1,1,1")]
    end: (u32, u32, u32),
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value = "rooms")]
    out_dir: PathBuf,
}

fn parse_coords(value: &str) -> Result<(u32, u32, u32), String> {
    let parts: Vec<&str> = value.split(',').collect();
    if parts.len() != 3 {
        return Err(format!("expected x,y,z, got '{}'", value));
    }
    let mut coords = [0u32; 3];
    for (slot, part) in coords.iter_mut().zip(&parts) {
        *slot = part
            .trim()
            .parse()
            .map_err(|_| format!("invalid coordinate '{}'", part))?;
    }
    Ok((coords[0], coords[1], coords[2]))
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let labyrinth = match generate_labyrinth(LabyrinthGeneratorConfig {
        width: args.width,
        height: args.height,
        depth: args.depth,
        start: args.start,
        end: args.end,
        seed: args.seed,
    }) {
        Ok(labyrinth) => labyrinth,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };

    fs::create_dir_all(&args.out_dir).unwrap();
    for index in labyrinth.indices() {
        let room = labyrinth.room(index);
        fs::write(
            args.out_dir.join(format!("{}.yaml", room.name())),
            describe_room(&labyrinth, index),
        )
        .unwrap();
    }
    fs::write(
        args.out_dir.join("settings.yaml"),
        settings_record(&labyrinth),
    )
    .unwrap();
    fs::write("map.html", render_html(&labyrinth)).unwrap();
    log::info!(
        "wrote {} room records to {}",
        labyrinth.rooms().len(),
        args.out_dir.display()
    );

    print!("{}", render_text(&labyrinth));
}
