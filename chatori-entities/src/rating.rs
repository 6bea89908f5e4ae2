/// A single star rating as submitted with a review.
///
/// Zero is the "not rated yet" resting state of the input control and
/// is rejected at submission time, so stored reviews always carry a
/// value in (0.0, 5.0].
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct RatingValue(f64);

impl RatingValue {
    pub fn new<V: Into<f64>>(val: V) -> Self {
        let new = Self(val.into());
        debug_assert!(new.is_valid());
        new
    }

    pub const fn min() -> Self {
        Self(0.0)
    }

    pub const fn max() -> Self {
        Self(5.0)
    }

    pub fn clamp(self) -> Self {
        Self(self.0.max(Self::min().0).min(Self::max().0))
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }

    pub fn is_rated(self) -> bool {
        self > Self::min()
    }
}

impl From<f64> for RatingValue {
    fn from(from: f64) -> Self {
        Self(from)
    }
}

impl From<RatingValue> for f64 {
    fn from(from: RatingValue) -> Self {
        from.0
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct AvgRatingValue(f64);

impl AvgRatingValue {
    pub const fn min() -> Self {
        Self(0.0)
    }

    pub const fn max() -> Self {
        Self(5.0)
    }

    pub fn clamp(self) -> Self {
        Self(self.0.max(Self::min().0).min(Self::max().0))
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }
}

impl From<f64> for AvgRatingValue {
    fn from(from: f64) -> Self {
        Self(from)
    }
}

impl From<AvgRatingValue> for f64 {
    fn from(from: AvgRatingValue) -> Self {
        from.0
    }
}

impl From<RatingValue> for AvgRatingValue {
    fn from(from: RatingValue) -> Self {
        f64::from(from).into()
    }
}

/// Denormalized rating aggregate of a stall: the running mean over all
/// contributed ratings together with the number of contributions.
///
/// Invariant: `value` equals the arithmetic mean of every rating folded
/// in so far, `count` the number of folds.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct AvgRating {
    pub value: AvgRatingValue,
    pub count: u64,
}

impl AvgRating {
    /// Fold one more rating into the running mean.
    pub fn add(self, rating: RatingValue) -> Self {
        let total = f64::from(self.value) * self.count as f64;
        let count = self.count + 1;
        Self {
            value: AvgRatingValue::from((total + f64::from(rating)) / count as f64),
            count,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct AvgRatingBuilder {
    acc: f64,
    cnt: u64,
}

impl AvgRatingBuilder {
    fn add(&mut self, val: RatingValue) {
        debug_assert!(val.is_valid());
        self.acc += f64::from(val);
        self.cnt += 1;
    }

    pub fn build(self) -> AvgRating {
        if self.cnt > 0 {
            AvgRating {
                value: AvgRatingValue::from(self.acc / self.cnt as f64).clamp(),
                count: self.cnt,
            }
        } else {
            Default::default()
        }
    }
}

impl std::ops::AddAssign<RatingValue> for AvgRatingBuilder {
    fn add_assign(&mut self, rhs: RatingValue) {
        self.add(rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_new_rating_into_running_mean() {
        let avg = AvgRating {
            value: 4.0.into(),
            count: 2,
        };
        let avg = avg.add(RatingValue::new(5.0));
        assert_eq!(3, avg.count);
        let value = f64::from(avg.value);
        assert!((value - 13.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn first_rating_becomes_the_mean() {
        let avg = AvgRating::default().add(RatingValue::new(3.5));
        assert_eq!(1, avg.count);
        assert_eq!(AvgRatingValue::from(3.5), avg.value);
    }

    #[test]
    fn builder_matches_incremental_folds() {
        let ratings = [4.0, 2.5, 5.0, 3.0];
        let mut builder = AvgRatingBuilder::default();
        let mut incremental = AvgRating::default();
        for r in ratings {
            builder += RatingValue::new(r);
            incremental = incremental.add(RatingValue::new(r));
        }
        let rebuilt = builder.build();
        assert_eq!(rebuilt.count, incremental.count);
        assert!((f64::from(rebuilt.value) - f64::from(incremental.value)).abs() < 1e-9);
    }

    #[test]
    fn builder_of_nothing_is_unrated() {
        let avg = AvgRatingBuilder::default().build();
        assert_eq!(0, avg.count);
        assert_eq!(AvgRatingValue::default(), avg.value);
    }

    #[test]
    fn validity_bounds() {
        assert!(RatingValue::new(0.0).is_valid());
        assert!(!RatingValue::new(0.0).is_rated());
        assert!(RatingValue::new(5.0).is_valid());
        assert!(!RatingValue::from(5.1).is_valid());
        assert!(!RatingValue::from(-0.5).is_valid());
        assert_eq!(RatingValue::max(), RatingValue::from(7.0).clamp());
    }
}
