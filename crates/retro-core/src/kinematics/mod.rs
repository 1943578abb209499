pub mod body;
pub mod clock;
pub mod vec2;
