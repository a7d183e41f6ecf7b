pub mod confidence;
pub mod engine;
pub mod payoffs;
