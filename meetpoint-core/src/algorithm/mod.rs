pub mod candidate_evaluator;
pub mod grid;
pub mod route_info;
pub mod selector;
