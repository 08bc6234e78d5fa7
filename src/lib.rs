pub mod constants;
pub mod describe;
pub mod generator;
pub mod labyrinth;
pub mod room;
pub mod symbol;
pub mod visualize;
