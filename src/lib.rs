//! Library exports for the deal message generator
//!
//! This module exposes internal components for testing and potential library usage.

pub mod handler;
pub mod message;
pub mod model;
pub mod route;
