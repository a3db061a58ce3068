pub mod character;
pub mod emotion;
pub mod performance;
pub mod story;
