//! Order command arguments

use clap::Parser;

use crate::error::{Result, UberError};
use crate::uber::{Coordinates, PlaceName};

/// Arguments for 'order' command
#[derive(Parser, Debug)]
pub struct OrderArgs {
    /// Saved place to start from
    #[arg(long, conflicts_with_all = ["start_lat", "start_lng"])]
    pub start_place: Option<PlaceName>,

    /// Start latitude
    #[arg(long, requires = "start_lng", allow_negative_numbers = true)]
    pub start_lat: Option<f64>,

    /// Start longitude
    #[arg(long, requires = "start_lat", allow_negative_numbers = true)]
    pub start_lng: Option<f64>,

    /// Saved place to ride to
    #[arg(long, conflicts_with_all = ["end_lat", "end_lng"])]
    pub end_place: Option<PlaceName>,

    /// End latitude
    #[arg(long, requires = "end_lng", allow_negative_numbers = true)]
    pub end_lat: Option<f64>,

    /// End longitude
    #[arg(long, requires = "end_lat", allow_negative_numbers = true)]
    pub end_lng: Option<f64>,

    /// Product to order (prompted for when omitted)
    #[arg(long)]
    pub product: Option<String>,

    /// Number of seats (shared rides only, max 2)
    #[arg(long, default_value_t = 0)]
    pub seats: u8,

    /// Accept the fare without asking
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Either a saved place or explicit coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Waypoint {
    Place(PlaceName),
    Coordinates(Coordinates),
}

impl OrderArgs {
    pub fn start(&self) -> Result<Waypoint> {
        waypoint("start", self.start_place, self.start_lat, self.start_lng)
    }

    pub fn end(&self) -> Result<Waypoint> {
        waypoint("end", self.end_place, self.end_lat, self.end_lng)
    }
}

fn waypoint(
    which: &str,
    place: Option<PlaceName>,
    lat: Option<f64>,
    lng: Option<f64>,
) -> Result<Waypoint> {
    match (place, lat, lng) {
        (Some(place), _, _) => Ok(Waypoint::Place(place)),
        (None, Some(lat), Some(lng)) => Ok(Waypoint::Coordinates(Coordinates::new(lat, lng))),
        _ => Err(UberError::InvalidInput(format!(
            "--{which}-place or --{which}-lat/--{which}-lng is required"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> OrderArgs {
        let mut argv = vec!["order"];
        argv.extend_from_slice(extra);
        OrderArgs::parse_from(argv)
    }

    #[test]
    fn test_waypoints_from_places() {
        let args = args(&["--start-place", "home", "--end-place", "work"]);
        assert_eq!(args.start().unwrap(), Waypoint::Place(PlaceName::Home));
        assert_eq!(args.end().unwrap(), Waypoint::Place(PlaceName::Work));
    }

    #[test]
    fn test_waypoints_from_coordinates() {
        let args = args(&[
            "--start-lat",
            "37.77",
            "--start-lng",
            "-122.41",
            "--end-place",
            "home",
        ]);
        assert_eq!(
            args.start().unwrap(),
            Waypoint::Coordinates(Coordinates::new(37.77, -122.41))
        );
    }

    #[test]
    fn test_missing_start_is_error() {
        let args = args(&["--end-place", "work"]);
        assert!(matches!(args.start(), Err(UberError::InvalidInput(_))));
    }

    #[test]
    fn test_place_conflicts_with_coordinates() {
        let result = OrderArgs::try_parse_from([
            "order",
            "--start-place",
            "home",
            "--start-lat",
            "1",
            "--start-lng",
            "2",
        ]);
        assert!(result.is_err());
    }
}
