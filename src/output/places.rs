//! Place output

use super::TableRow;
use crate::uber::models::display_or_dash;
use crate::uber::places::Place;

impl TableRow for Place {
    const HEADERS: &'static [&'static str] = &["NAME", "ADDRESS", "LATITUDE", "LONGITUDE"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.name().to_string(),
            self.address().to_string(),
            display_or_dash(self.latitude),
            display_or_dash(self.longitude),
        ]
    }
}
