// Modified from https://github.com/atbentley/bevy_mod_orbits
// MIT licensed by atbentley <Andrew Bentley>
//
// Kepler-orbit kernels on raw SI floats. The typed layer in `orbits` and
// `bodies` validates units and domains before calling into these.

use std::f64::consts::{PI, TAU};

const KEPLER_TOLERANCE: f64 = 1e-14;
const KEPLER_MAX_ITERATIONS: usize = 50;

#[inline]
pub fn calculate_mean_motion<T: num_traits::Float + From<f64>>(period: T) -> T {
    let tau: T = TAU.into();
    tau / period
}

/// Mean anomaly at `time`, wrapped to `[0, 2π)`.
#[inline]
pub fn calculate_mean_anomaly<T: num_traits::Float + From<f64>>(
    mean_motion: T,
    initial_mean_anomaly: T,
    time: T,
) -> T {
    let tau: T = TAU.into();
    let wrapped = (initial_mean_anomaly + mean_motion * time) % tau;
    if wrapped < T::zero() {
        wrapped + tau
    } else {
        wrapped
    }
}

/// Solves Kepler's equation `M = E - e·sin E` for `E` by Newton's method.
#[inline]
pub fn calculate_eccentric_anomaly<T: num_traits::Float + From<f64>>(
    eccentricity: T,
    mean_anomaly: T,
) -> T {
    let e = eccentricity;
    let ma = mean_anomaly;
    // High eccentricities converge poorly from E = M.
    let threshold: T = 0.8_f64.into();
    let tolerance: T = KEPLER_TOLERANCE.into();
    let mut ea = if e > threshold { PI.into() } else { ma };
    for _ in 0..KEPLER_MAX_ITERATIONS {
        let delta = (ea - e * ea.sin() - ma) / (T::one() - e * ea.cos());
        ea = ea - delta;
        if delta.abs() < tolerance {
            break;
        }
    }
    ea
}

#[inline]
pub fn calculate_true_anomaly<T: num_traits::Float + From<f64>>(
    eccentricity: T,
    eccentric_anomaly: T,
) -> T {
    let e = eccentricity;
    let half: T = 0.5_f64.into();
    let two: T = 2.0_f64.into();
    let y = (T::one() + e).sqrt() * (eccentric_anomaly * half).sin();
    let x = (T::one() - e).sqrt() * (eccentric_anomaly * half).cos();
    // E in [0, 2π) keeps y non-negative, so this lands in [0, 2π].
    two * y.atan2(x)
}

#[inline]
pub fn calculate_heliocentric_distance<T: num_traits::Float>(
    semi_major_axis: T,
    eccentricity: T,
    true_anomaly: T,
) -> T {
    let semilatus_rectum = semi_major_axis * (T::one() - eccentricity.powi(2));
    semilatus_rectum / (T::one() + eccentricity * true_anomaly.cos())
}

/// Ratio of the time-averaged orbital speed to the circular speed `2πa/T`,
/// from the series expansion in eccentricity.
#[inline]
pub fn mean_orbital_speed_factor<T: num_traits::Float + From<f64>>(eccentricity: T) -> T {
    let e2 = eccentricity * eccentricity;
    let c1: T = 0.25_f64.into();
    let c2: T = (3.0_f64 / 64.0).into();
    let c3: T = (5.0_f64 / 256.0).into();
    let c4: T = (175.0_f64 / 16384.0).into();
    T::one() - e2 * (c1 + e2 * (c2 + e2 * (c3 + e2 * c4)))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn kepler_solution_satisfies_equation() {
        for &e in &[0.0, 0.0167, 0.2, 0.6, 0.95] {
            for &ma in &[0.1, 1.0, 2.5, 4.0, 6.0] {
                let ea: f64 = calculate_eccentric_anomaly(e, ma);
                assert_relative_eq!(ea - e * ea.sin(), ma, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn circular_orbit_has_constant_distance() {
        let a = 7.0e6;
        for &ma in &[0.0, 1.0, 3.0, 5.5] {
            let ea = calculate_eccentric_anomaly(0.0, ma);
            let nu = calculate_true_anomaly(0.0, ea);
            assert_relative_eq!(calculate_heliocentric_distance(a, 0.0, nu), a, max_relative = 1e-12);
        }
    }

    #[test]
    fn apoapsis_at_half_period() {
        let (a, e) = (1.0e7, 0.3);
        let ea = calculate_eccentric_anomaly(e, PI);
        let nu = calculate_true_anomaly(e, ea);
        assert_relative_eq!(nu, PI, epsilon = 1e-12);
        assert_relative_eq!(
            calculate_heliocentric_distance(a, e, nu),
            a * (1.0 + e),
            max_relative = 1e-12
        );
    }

    #[test]
    fn mean_anomaly_wraps() {
        let ma = calculate_mean_anomaly(1.0, 0.5, -1.0);
        assert_relative_eq!(ma, TAU - 0.5, epsilon = 1e-12);
    }

    #[test]
    fn speed_factor_is_one_for_circles() {
        assert_eq!(mean_orbital_speed_factor(0.0), 1.0);
        assert!(mean_orbital_speed_factor(0.5) < 1.0);
    }
}
