//! Low-precision solar ephemeris in the Earth-fixed frame.
//!
//! Uses the Astronomical Almanac's short series for the sun's ecliptic
//! longitude (about 0.01° over 1950–2050) and the IAU 1982 expression for
//! Greenwich mean sidereal time. Plenty for lighting a rendered globe.

use chrono::{DateTime, Utc};
use spacecam_math::Vector3;

/// Julian date of the Unix epoch.
const UNIX_EPOCH_JD: f64 = 2_440_587.5;
/// Julian date of J2000.0.
const J2000_JD: f64 = 2_451_545.0;
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian date of an instant.
pub fn julian_date(time: DateTime<Utc>) -> f64 {
    let seconds =
        time.timestamp() as f64 + f64::from(time.timestamp_subsec_nanos()) * 1e-9;
    UNIX_EPOCH_JD + seconds / SECONDS_PER_DAY
}

/// Greenwich mean sidereal time in radians, in `[0, 2π)`.
pub fn gmst(time: DateTime<Utc>) -> f64 {
    let days = julian_date(time) - J2000_JD;
    (280.460_618_37 + 360.985_647_366_29 * days)
        .rem_euclid(360.0)
        .to_radians()
}

/// Unit vector toward the sun in the Earth-centered inertial (equatorial) frame.
pub fn sun_direction_eci(time: DateTime<Utc>) -> Vector3 {
    let days = julian_date(time) - J2000_JD;

    let mean_longitude = (280.460 + 0.985_647_4 * days).rem_euclid(360.0);
    let mean_anomaly = (357.528 + 0.985_600_3 * days).rem_euclid(360.0).to_radians();
    let ecliptic_longitude = (mean_longitude
        + 1.915 * mean_anomaly.sin()
        + 0.020 * (2.0 * mean_anomaly).sin())
    .to_radians();
    let obliquity = (23.439 - 0.000_000_4 * days).to_radians();

    let (sin_lambda, cos_lambda) = ecliptic_longitude.sin_cos();
    let (sin_eps, cos_eps) = obliquity.sin_cos();
    Vector3::new(cos_lambda, cos_eps * sin_lambda, sin_eps * sin_lambda)
}

/// Unit vector toward the sun in the Earth-fixed frame (x through the prime
/// meridian at the equator, z through the north pole).
pub fn sun_direction_ecef(time: DateTime<Utc>) -> Vector3 {
    let eci = sun_direction_eci(time);
    let (sin_theta, cos_theta) = gmst(time).sin_cos();
    Vector3::new(
        eci.x * cos_theta + eci.y * sin_theta,
        -eci.x * sin_theta + eci.y * cos_theta,
        eci.z,
    )
    .normalize_or_zero()
}

/// Geodetic `(latitude, longitude)` in degrees of the point with the sun at zenith.
/// Longitude is in `(-180, 180]`.
pub fn subsolar_point(time: DateTime<Utc>) -> (f64, f64) {
    let sun = sun_direction_ecef(time);
    let lat = sun.z.clamp(-1.0, 1.0).asin().to_degrees();
    let lon = sun.y.atan2(sun.x).to_degrees();
    (lat, lon)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
            .single()
            .expect("valid date")
    }

    #[test]
    fn test_julian_date_of_j2000() {
        assert!((julian_date(utc(2000, 1, 1, 12, 0)) - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn test_direction_is_unit() {
        let sun = sun_direction_ecef(utc(2024, 8, 8, 9, 23));
        assert!((sun.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_june_solstice_declination() {
        let (lat, _) = subsolar_point(utc(2024, 6, 20, 20, 51));
        assert!((lat - 23.44).abs() < 0.05, "{lat}");
    }

    #[test]
    fn test_december_solstice_declination() {
        let (lat, _) = subsolar_point(utc(2024, 12, 21, 9, 20));
        assert!((lat + 23.44).abs() < 0.05, "{lat}");
    }

    #[test]
    fn test_march_equinox_declination() {
        let (lat, _) = subsolar_point(utc(2024, 3, 20, 3, 6));
        assert!(lat.abs() < 0.05, "{lat}");
    }

    #[test]
    fn test_noon_at_greenwich() {
        // Mid-April the equation of time is close to zero.
        let (_, lon) = subsolar_point(utc(2024, 4, 15, 12, 0));
        assert!(lon.abs() < 1.0, "{lon}");
        let (_, lon) = subsolar_point(utc(2024, 4, 15, 0, 0));
        assert!(180.0 - lon.abs() < 1.0, "{lon}");
    }

    #[test]
    fn test_subsolar_point_moves_west() {
        let (_, morning) = subsolar_point(utc(2024, 8, 8, 9, 0));
        let (_, later) = subsolar_point(utc(2024, 8, 8, 10, 0));
        let delta = morning - later;
        assert!((delta - 15.0).abs() < 0.1, "{delta}");
    }

    #[test]
    fn test_gmst_range() {
        let theta = gmst(utc(2031, 1, 1, 0, 0));
        assert!((0.0..std::f64::consts::TAU).contains(&theta));
    }
}
