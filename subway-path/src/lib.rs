//! Subway path and fare engine.
//!
//! Answers two questions for a transit network: "what is the shortest route
//! between these two stations?" and "what does the rider pay for it?"

pub mod domain;
pub mod fare;
pub mod network;
pub mod path;
pub mod route;
