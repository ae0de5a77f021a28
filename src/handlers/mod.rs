pub mod food_detector;
pub mod prompts;

pub use food_detector::FoodDetector;
