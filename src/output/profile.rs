//! Profile output

use super::TableRow;
use crate::uber::models::display_or_dash;
use crate::uber::profile::Profile;

impl TableRow for Profile {
    const HEADERS: &'static [&'static str] =
        &["NAME", "EMAIL", "RATING", "PROMO CODE", "STATUS", "ID"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.full_name(),
            display_or_dash(self.email.as_deref()),
            display_or_dash(self.rating),
            display_or_dash(self.promo_code.as_deref()),
            display_or_dash(self.activation_status.map(|s| s.as_str())),
            display_or_dash(self.id.as_deref().or(self.driver_id.as_deref())),
        ]
    }
}
