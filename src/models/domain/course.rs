use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Course {
    pub title: String,
    pub description: String,
    pub slides: Vec<Slide>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Slide {
    pub id: u32,
    pub title: String,
    pub content: String,
    pub key_points: Vec<String>,
}

impl Course {
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }
}
