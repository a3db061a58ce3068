pub mod cancel;
pub mod cast;
pub mod config;
pub mod dialogue;
pub mod director;
pub mod factory;
pub mod interaction;
pub mod segment;
pub mod speech;
