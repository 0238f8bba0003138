pub mod canvas;
pub mod certificate;
pub mod font;

pub use certificate::{layout, render, score_message, CANVAS_HEIGHT, CANVAS_WIDTH};
