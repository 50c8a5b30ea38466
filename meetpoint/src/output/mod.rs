mod meeting_report;
mod write_ops;

pub use meeting_report::{MeetingReport, OriginReport};
pub use write_ops::{create_dirs, write_csv, write_geojson, write_json};
