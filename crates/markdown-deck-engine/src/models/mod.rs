pub mod chunk;
pub mod option;
pub mod page;

pub use chunk::{Alignment, Chunk, Direction};
pub use option::{PageOption, SlideSize, Styles};
pub use page::Page;
