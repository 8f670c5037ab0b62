//! Trip history output

use super::TableRow;
use crate::uber::history::Trip;
use crate::uber::models::display_or_dash;

impl TableRow for Trip {
    const HEADERS: &'static [&'static str] = &[
        "REQUEST ID",
        "STATUS",
        "CITY",
        "DISTANCE (MI)",
        "STARTED",
        "ENDED",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            display_or_dash(self.request_id.as_deref()),
            display_or_dash(self.status.as_deref()),
            self.city().to_string(),
            display_or_dash(self.distance_miles.map(|d| format!("{:.2}", d))),
            display_or_dash(self.started_at().map(|t| t.to_rfc3339())),
            display_or_dash(self.ended_at().map(|t| t.to_rfc3339())),
        ]
    }
}
