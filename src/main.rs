//! # Voxel World Entry Point
//!
//! Runs the headless engine: generates or loads the world, draws one frame and saves.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --release -- engine.json
//! ```

fn main() {
    voxel_world::run();
}
