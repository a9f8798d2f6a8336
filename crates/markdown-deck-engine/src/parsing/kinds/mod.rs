mod code_fence;
mod divider;
mod heading;

pub use code_fence::{CodeFence, FenceKind, FenceTracker};
pub use divider::{Divider, DividerKind};
pub use heading::Heading;
