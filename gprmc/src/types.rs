use crate::{
    constants::{DEFAULT_CENTURY_PIVOT, METERS_PER_SECOND_PER_KNOT},
    error::DateTimeError,
    rmc::Rmc,
};
use chrono::prelude::*;

/// Represents a world position, can be constructed from an [Rmc] with a fix.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// Longitude in degrees, west is negative
    pub lon: f64,

    /// Latitude in degrees, south is negative
    pub lat: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Velocity {
    /// m/s over the ground
    pub speed: f64,

    /// Heading in degrees
    pub heading: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    fn sign(self) -> f64 {
        match self {
            Hemisphere::North | Hemisphere::East => 1.0,
            Hemisphere::South | Hemisphere::West => -1.0,
        }
    }
}

impl TryFrom<char> for Hemisphere {
    type Error = char;

    fn try_from(c: char) -> Result<Self, char> {
        match c {
            'N' => Ok(Hemisphere::North),
            'S' => Ok(Hemisphere::South),
            'E' => Ok(Hemisphere::East),
            'W' => Ok(Hemisphere::West),
            other => Err(other),
        }
    }
}

/// Decides the century of a two-digit year: years below the pivot are 20xx,
/// the others 19xx. The default pivot is 80.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CenturyPivot(u8);

impl CenturyPivot {
    /// `None` if `pivot` is above 100.
    pub const fn new(pivot: u8) -> Option<Self> {
        if pivot > 100 {
            None
        } else {
            Some(Self(pivot))
        }
    }

    pub const fn full_year(self, year: u8) -> i32 {
        if year < self.0 {
            2000 + year as i32
        } else {
            1900 + year as i32
        }
    }
}

impl Default for CenturyPivot {
    fn default() -> Self {
        Self(DEFAULT_CENTURY_PIVOT)
    }
}

impl Rmc {
    pub fn latitude_hemisphere(&self) -> Option<Hemisphere> {
        match Hemisphere::try_from(self.latitude_direction) {
            Ok(h @ (Hemisphere::North | Hemisphere::South)) => Some(h),
            _ => None,
        }
    }

    pub fn longitude_hemisphere(&self) -> Option<Hemisphere> {
        match Hemisphere::try_from(self.longitude_direction) {
            Ok(h @ (Hemisphere::East | Hemisphere::West)) => Some(h),
            _ => None,
        }
    }

    /// Position in decimal degrees. `None` without a fix or with a direction
    /// character that does not belong to its axis.
    pub fn position(&self) -> Option<Position> {
        if !self.has_fix() {
            return None;
        }
        let lat = self.latitude_hemisphere()?.sign()
            * (f64::from(self.latitude) + self.latitude_minutes / 60.0);
        let lon = self.longitude_hemisphere()?.sign()
            * (f64::from(self.longitude) + self.longitude_minutes / 60.0);
        Some(Position { lon, lat })
    }

    /// Speed in m/s and track, `None` without a fix.
    pub fn velocity(&self) -> Option<Velocity> {
        if !self.has_fix() {
            return None;
        }
        Some(Velocity {
            speed: self.speed * METERS_PER_SECOND_PER_KNOT,
            heading: self.tracking_angle,
        })
    }

    /// UTC time of day. Available with or without a fix. A leap second
    /// (`60`) is kept as chrono's leap representation.
    pub fn time_of_day(&self) -> Option<NaiveTime> {
        let (h, m, s) = (
            u32::from(self.hours),
            u32::from(self.minutes),
            u32::from(self.seconds),
        );
        if s == 60 {
            NaiveTime::from_hms_milli_opt(h, m, 59, 1_000)
        } else {
            NaiveTime::from_hms_opt(h, m, s)
        }
    }

    /// Full UTC date and time, expanding the two-digit year with `pivot`.
    pub fn to_datetime(&self, pivot: CenturyPivot) -> Result<DateTime<Utc>, DateTimeError> {
        if !self.has_fix() {
            return Err(DateTimeError::NoFix);
        }
        let date = NaiveDate::from_ymd_opt(
            pivot.full_year(self.year),
            u32::from(self.month),
            u32::from(self.day),
        )
        .ok_or(DateTimeError::InvalidDate)?;
        let time = self.time_of_day().ok_or(DateTimeError::InvalidTime)?;

        Ok(Utc.from_utc_datetime(&NaiveDateTime::new(date, time)))
    }
}

impl TryFrom<&Rmc> for DateTime<Utc> {
    type Error = DateTimeError;

    fn try_from(rmc: &Rmc) -> Result<Self, Self::Error> {
        rmc.to_datetime(CenturyPivot::default())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn fix() -> Rmc {
        Rmc {
            hours: 12,
            minutes: 35,
            seconds: 19,
            lock_flag: 'A',
            latitude: 48,
            latitude_minutes: 7.038,
            latitude_direction: 'N',
            longitude: 11,
            longitude_minutes: 31.0,
            longitude_direction: 'E',
            speed: 22.4,
            tracking_angle: 84.4,
            day: 23,
            month: 3,
            year: 94,
        }
    }

    #[test]
    fn position_in_decimal_degrees() {
        let pos = fix().position().unwrap();
        assert!((pos.lat - 48.1173).abs() < 1e-9);
        assert!((pos.lon - (11.0 + 31.0 / 60.0)).abs() < 1e-9);

        let south_west = Rmc {
            latitude_direction: 'S',
            longitude_direction: 'W',
            ..fix()
        };
        let pos = south_west.position().unwrap();
        assert!(pos.lat < 0.0 && pos.lon < 0.0);
    }

    #[test]
    fn position_needs_matching_directions() {
        let swapped = Rmc {
            latitude_direction: 'E',
            ..fix()
        };
        assert_eq!(swapped.position(), None);
        assert_eq!(
            Rmc {
                lock_flag: 'V',
                ..fix()
            }
            .position(),
            None
        );
    }

    #[test]
    fn velocity_in_meters_per_second() {
        let vel = fix().velocity().unwrap();
        assert!((vel.speed - 22.4 * 0.514_444).abs() < 1e-3);
        assert_eq!(vel.heading, 84.4);
    }

    #[test]
    fn century_pivot() {
        let pivot = CenturyPivot::default();
        assert_eq!(pivot.full_year(94), 1994);
        assert_eq!(pivot.full_year(79), 2079);
        assert_eq!(pivot.full_year(0), 2000);
        assert_eq!(CenturyPivot::new(0).unwrap().full_year(5), 1905);
        assert_eq!(CenturyPivot::new(100).unwrap().full_year(99), 2099);
        assert_eq!(CenturyPivot::new(101), None);
    }

    #[test]
    fn datetime_from_fix() {
        let dt: DateTime<Utc> = (&fix()).try_into().unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(1994, 3, 23, 12, 35, 19).unwrap());

        let dt = fix().to_datetime(CenturyPivot::new(95).unwrap()).unwrap();
        assert_eq!(dt.year(), 2094);
    }

    #[test]
    fn datetime_errors() {
        let void = Rmc {
            lock_flag: 'V',
            ..fix()
        };
        assert_eq!(
            DateTime::<Utc>::try_from(&void),
            Err(DateTimeError::NoFix)
        );

        let bad_date = Rmc { month: 13, ..fix() };
        assert_eq!(
            DateTime::<Utc>::try_from(&bad_date),
            Err(DateTimeError::InvalidDate)
        );

        let bad_time = Rmc { hours: 24, ..fix() };
        assert_eq!(
            DateTime::<Utc>::try_from(&bad_time),
            Err(DateTimeError::InvalidTime)
        );
    }

    #[test]
    fn time_of_day_without_fix() {
        let void = Rmc {
            lock_flag: 'V',
            ..fix()
        };
        assert_eq!(void.time_of_day(), NaiveTime::from_hms_opt(12, 35, 19));
        let leap = Rmc {
            seconds: 60,
            ..fix()
        };
        assert!(leap.time_of_day().is_some());
    }
}
