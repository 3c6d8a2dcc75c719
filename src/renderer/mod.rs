pub mod grid;
pub mod mesh;
pub mod render;
pub mod renderer;
pub mod vertex;

pub use renderer::Renderer;
