pub mod bounds;
pub mod rect;
