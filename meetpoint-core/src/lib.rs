pub mod algorithm;
pub mod model;
pub mod service;
