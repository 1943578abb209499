pub mod engine;
pub mod frame;
pub mod trajectory;
