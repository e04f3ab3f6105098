// Terminal rendering

pub mod colors;
pub mod lines;
pub mod logos;
pub mod output;
pub mod wrap;

// Re-export commonly used items
pub use colors::{should_color_output, Colors, Palette};
pub use lines::LineSink;
pub use output::Output;
