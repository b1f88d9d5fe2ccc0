pub mod display;
pub mod duration;
pub mod lifecycle;
pub mod models;
