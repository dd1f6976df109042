//! Parametric ray intervals returned by the intersection routines.

/// Parametric interval `[t_near, t_far]` along a ray `origin + t * dir`.
///
/// Forward intersections always satisfy `0 <= t_near <= t_far` when `hit` is set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    /// Whether the ray intersects the shape in front of its origin.
    pub hit: bool,
    /// Entry distance, clamped to 0 when the origin is already inside.
    pub t_near: f64,
    /// Exit distance.
    pub t_far: f64,
}

impl Intersection {
    /// No intersection.
    pub const MISS: Intersection = Intersection {
        hit: false,
        t_near: 0.0,
        t_far: 0.0,
    };

    /// Build a forward interval from two sorted roots.
    ///
    /// Misses when the whole interval is behind the origin or a root is NaN.
    pub(crate) fn forward(t_near: f64, t_far: f64) -> Self {
        if !(t_far >= 0.0) || !(t_near <= t_far) {
            return Self::MISS;
        }
        Self {
            hit: true,
            t_near: t_near.max(0.0),
            t_far,
        }
    }

    /// Length of the interval, 0 on a miss.
    pub fn length(&self) -> f64 {
        if self.hit {
            self.t_far - self.t_near
        } else {
            0.0
        }
    }

    /// Midpoint parameter of the interval.
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.t_near + self.t_far)
    }

    /// Clip both bounds so neither exceeds `limit`.
    pub fn clamp_far(self, limit: f64) -> Self {
        if !self.hit {
            return self;
        }
        Self {
            hit: true,
            t_near: self.t_near.min(limit),
            t_far: self.t_far.min(limit),
        }
    }

    /// Length of the parametric range shared with `other`.
    pub fn overlap(&self, other: &Intersection) -> f64 {
        if !self.hit || !other.hit {
            return 0.0;
        }
        let start = self.t_near.max(other.t_near);
        let end = self.t_far.min(other.t_far);
        (end - start).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(t_near: f64, t_far: f64) -> Intersection {
        Intersection {
            hit: true,
            t_near,
            t_far,
        }
    }

    #[test]
    fn test_forward_clamps_near_root() {
        assert_eq!(Intersection::forward(-3.0, 5.0), span(0.0, 5.0));
    }

    #[test]
    fn test_forward_behind_origin_misses() {
        assert_eq!(Intersection::forward(-5.0, -1.0), Intersection::MISS);
        assert_eq!(Intersection::forward(f64::NAN, f64::NAN), Intersection::MISS);
    }

    #[test]
    fn test_length_of_miss_is_zero() {
        assert_eq!(Intersection::MISS.length(), 0.0);
        assert_eq!(span(2.0, 7.0).length(), 5.0);
    }

    #[test]
    fn test_clamp_far() {
        assert_eq!(span(2.0, 7.0).clamp_far(4.0), span(2.0, 4.0));
        assert_eq!(span(5.0, 7.0).clamp_far(4.0), span(4.0, 4.0));
        assert_eq!(Intersection::MISS.clamp_far(1.0), Intersection::MISS);
    }

    #[test]
    fn test_overlap() {
        assert_eq!(span(0.0, 10.0).overlap(&span(4.0, 20.0)), 6.0);
        assert_eq!(span(0.0, 3.0).overlap(&span(4.0, 20.0)), 0.0);
        assert_eq!(span(0.0, 10.0).overlap(&Intersection::MISS), 0.0);
    }
}
