/*!
* A live cell dies if it has fewer than two live neighbors.
* A live cell with two or three live neighbors lives on to the next generation.
* A live cell with more than three live neighbors dies.
* A dead cell will be brought back to live if it has exactly three live neighbors.
*
* The world is a torus: every edge wraps around to the opposite one.
*/

pub mod command;
pub mod config;
pub mod density;
pub mod grid;
pub mod headless;
pub mod pattern;
pub mod render;
pub mod simulation;
pub mod viewport;
