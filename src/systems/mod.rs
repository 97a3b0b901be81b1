pub mod behaviors;
pub mod random;
pub mod vec2;
