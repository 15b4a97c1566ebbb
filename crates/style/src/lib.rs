pub mod frame;
pub mod insets;

pub use self::frame::BlockFrame;
pub use self::insets::{Insets, LengthUnit};
