pub mod circle;
pub mod line;
pub mod text;

pub use circle::CircleCmd;
pub use line::LineCmd;
pub use text::TextCmd;
