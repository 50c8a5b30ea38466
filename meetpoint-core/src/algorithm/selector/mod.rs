mod meeting_point_selector;
mod search_config;
mod selection_ops;

pub use meeting_point_selector::MeetingPointSelector;
pub use search_config::SearchConfig;
pub use selection_ops::{select_best_complete, select_best_partial};
