pub mod point;
pub mod pool;

pub use pool::MarkerPool;
