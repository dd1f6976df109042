//! Physical constants in kilometers, the length unit used throughout spacecam.

/// Mean Earth radius (spherical approximation).
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Height of the atmosphere shell above the surface used for scattering.
pub const ATMOSPHERE_HEIGHT_KM: f64 = 100.0;

/// Nominal solar radius (IAU 2015 resolution B3).
pub const SOLAR_RADIUS_KM: f64 = 696_000.0;

/// 1 Astronomical Unit = 149,597,870.7 km (IAU 2012 exact definition).
pub const AU_KM: f64 = 149_597_870.7;
