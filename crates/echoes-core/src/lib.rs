pub mod carousel;
pub mod constants;
pub mod cursor;
pub mod effects;
pub mod media;
pub mod modal;
pub mod page;
pub mod particles;
pub mod sequence;
pub mod slides;
pub mod sprites;

pub use carousel::*;
pub use cursor::*;
pub use effects::*;
pub use media::*;
pub use modal::*;
pub use particles::*;
pub use sequence::*;
pub use slides::*;
