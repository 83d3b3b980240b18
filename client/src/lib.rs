mod client;
mod error;
mod logging;

pub use client::{DEFAULT_BASE_URL, REQUEST_TIMEOUT, StationDataClient};
pub use error::{BoxError, ClientError, ErrorKind};
pub use livello_core::{AlertLevel, Reading, Station, StationData, Thresholds};
