//! Lock-duration boost schedule.

/// Boost earned per committed month, before stacking.
pub const BOOST_LINEAR_STEP: f64 = 0.05;

/// Extra boost per unit of month-on-month stacking.
pub const BOOST_STACKING_STEP: f64 = 0.01;

/// Multiplicative voting-power boost for locking `lock_months` months.
///
/// The schedule is `1 + 0.05*m + 0.01 * m*(m-1)/2`, a triangular-number
/// curve: each additional month contributes a linearly growing increment,
/// so longer commitments earn super-linearly. `boost_multiplier(0)` is
/// exactly `1.0` and the schedule is strictly increasing in `lock_months`.
pub fn boost_multiplier(lock_months: u32) -> f64 {
    let m = lock_months as f64;
    1.0 + BOOST_LINEAR_STEP * m + BOOST_STACKING_STEP * (m * (m - 1.0)) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_lock_means_no_boost() {
        assert_eq!(boost_multiplier(0), 1.0);
    }

    #[test]
    fn single_month_adds_linear_step_only() {
        assert_eq!(boost_multiplier(1), 1.05);
    }

    #[test]
    fn twelve_months_stack_to_triangular_bonus() {
        // 1 + 0.6 + 0.01 * 66 = 2.26
        assert!((boost_multiplier(12) - 2.26).abs() < 1e-12);
    }

    #[test]
    fn schedule_is_strictly_increasing() {
        for m in 0..120 {
            assert!(
                boost_multiplier(m + 1) > boost_multiplier(m),
                "boost must grow from {m} to {} months",
                m + 1
            );
        }
    }

    #[test]
    fn monthly_increments_grow() {
        for m in 1..120 {
            let prev = boost_multiplier(m) - boost_multiplier(m - 1);
            let next = boost_multiplier(m + 1) - boost_multiplier(m);
            assert!(next > prev, "increment must grow at {m} months");
        }
    }
}
