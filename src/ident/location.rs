//! Talker GPS positions.

use std::fmt;

/// One coordinate of a position: whole degrees, whole minutes, and minute fraction
/// in 1/5000ths.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "ser", derive(Serialize))]
pub struct Coordinate {
    pub degrees: u8,
    pub minutes: u8,
    pub fraction: u16,
    /// Southern latitude or western longitude.
    pub negative: bool,
}

impl Coordinate {
    /// Coordinate in signed decimal degrees.
    pub fn decimal(&self) -> f64 {
        let minutes = self.minutes as f64 + self.fraction as f64 / 5000.0;
        let deg = self.degrees as f64 + minutes / 60.0;

        if self.negative { -deg } else { deg }
    }
}

/// Position reported for a talker.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "ser", derive(Serialize))]
pub struct Location {
    pub latitude: Coordinate,
    pub longitude: Coordinate,
    /// Time of the fix in seconds past midnight UTC.
    pub time: u32,
}

impl Location {
    /// Latitude in signed decimal degrees.
    pub fn latitude(&self) -> f64 { self.latitude.decimal() }
    /// Longitude in signed decimal degrees.
    pub fn longitude(&self) -> f64 { self.longitude.decimal() }

    /// Time of the fix as (hours, minutes, seconds.)
    pub fn hms(&self) -> (u32, u32, u32) {
        (self.time / 3600, self.time / 60 % 60, self.time % 60)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (h, m, s) = self.hms();

        write!(f, "{:.6} {:.6} {:02}:{:02}:{:02}Z",
            self.latitude(), self.longitude(), h, m, s)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_location() {
        let l = Location {
            latitude: Coordinate { degrees: 29, minutes: 35, fraction: 4030, negative: false },
            longitude: Coordinate { degrees: 82, minutes: 49, fraction: 1065, negative: true },
            time: 48057,
        };

        assert!((l.latitude() - 29.596767).abs() < 1e-6);
        assert!((l.longitude() + 82.820217).abs() < 1e-6);
        assert_eq!(l.hms(), (13, 20, 57));
        assert_eq!(format!("{}", l), "29.596767 -82.820217 13:20:57Z");
    }
}
