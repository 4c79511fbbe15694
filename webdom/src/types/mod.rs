mod color;
mod extent;
mod insets;
mod style;

pub use color::{Color, Rgb};
pub use extent::Extent;
pub use insets::Insets;
pub use style::Style;
