use crate::constants::FIX_VALID;

/// One decoded `$GPRMC` sentence, field by field as it appears on the wire.
///
/// `Rmc::default()` is the all-zero record: numbers are zero and every
/// character field is `'\0'`. Without a fix (`lock_flag != 'A'`) everything
/// but the time of day holds the sentinels set by [Rmc::clear_without_fix].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Rmc {
    pub hours: u8,
    pub minutes: u8,
    /// Whole seconds; any fractional part is dropped
    pub seconds: u8,

    /// `'A'` for a valid fix, `'V'` for none
    pub lock_flag: char,

    /// Whole degrees of latitude, two digits on the wire
    pub latitude: u8,
    pub latitude_minutes: f64,
    /// `'N'` or `'S'`
    pub latitude_direction: char,

    /// Whole degrees of longitude, three digits on the wire
    pub longitude: u16,
    pub longitude_minutes: f64,
    /// `'E'` or `'W'`
    pub longitude_direction: char,

    /// Speed over ground in knots
    pub speed: f64,
    /// Track made good in degrees
    pub tracking_angle: f64,

    pub day: u8,
    pub month: u8,
    /// Two-digit year, see [CenturyPivot](crate::CenturyPivot)
    pub year: u8,
}

impl Rmc {
    /// Whether the receiver reported a valid position lock.
    pub fn has_fix(&self) -> bool {
        self.lock_flag == FIX_VALID
    }

    /// Without a fix, resets everything except the time of day to fixed
    /// sentinels: position 0°0' N / 0°0' E, zero speed and track, date 00-00-00.
    pub fn clear_without_fix(&mut self) {
        if self.has_fix() {
            return;
        }

        self.latitude = 0;
        self.latitude_minutes = 0.0;
        self.latitude_direction = 'N';

        self.longitude = 0;
        self.longitude_minutes = 0.0;
        self.longitude_direction = 'E';

        self.speed = 0.0;
        self.tracking_angle = 0.0;

        self.day = 0;
        self.month = 0;
        self.year = 0;
    }
}
