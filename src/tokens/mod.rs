// Design Token Table for the Dayflow styling pipeline
// Every scale here extends the consumer's defaults; nothing replaces them.

pub mod color;
pub mod layer;
pub mod motion;
pub mod radius;
pub mod shadow;
pub mod sizing;
pub mod spacing;
pub mod typography;
pub use color::*;
pub use layer::*;
pub use motion::*;
pub use radius::*;
pub use shadow::*;
pub use sizing::*;
pub use spacing::*;
pub use typography::*;
