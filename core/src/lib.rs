mod alert;
mod de;
mod message;
mod reading;
mod search;
mod station;

pub use alert::AlertLevel;
pub use message::format_station_message;
pub use reading::{Reading, latest_reading};
pub use search::closest_station_names;
pub use station::{Station, StationData, Thresholds};

/// Variable code of the hydrometric level sensors (meters).
pub const LEVEL_VARIABLE: &str = "254,0,0/1,-,-,-/B13215";
