pub mod segmenter;
pub mod types;

pub use segmenter::*;
pub use types::*;
