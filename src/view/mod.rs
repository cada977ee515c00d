pub mod format;
pub mod renderer;
pub mod surface;
pub mod terminal;
