//! Age-group discounts.

/// Flat amount deducted before a percentage discount applies.
const DEDUCTION: u64 = 350;

/// Rider age bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FareAgeGroup {
    /// Ages 6 to 12.
    Child,
    /// Ages 13 to 18.
    Teenager,
    /// Ages 19 to 100, and any age outside every bracket.
    Adult,
}

impl FareAgeGroup {
    const ALL: [FareAgeGroup; 3] = [
        FareAgeGroup::Child,
        FareAgeGroup::Teenager,
        FareAgeGroup::Adult,
    ];

    /// Classify an age. Ages no bracket covers are treated as adult.
    ///
    /// # Examples
    ///
    /// ```
    /// use subway_path::fare::FareAgeGroup;
    ///
    /// assert_eq!(FareAgeGroup::of(6), FareAgeGroup::Child);
    /// assert_eq!(FareAgeGroup::of(18), FareAgeGroup::Teenager);
    /// assert_eq!(FareAgeGroup::of(3), FareAgeGroup::Adult);
    /// ```
    pub fn of(age: i32) -> Self {
        Self::ALL
            .into_iter()
            .find(|group| group.ages().contains(&age))
            .unwrap_or(FareAgeGroup::Adult)
    }

    /// Inclusive age range of the bracket.
    pub fn ages(self) -> std::ops::RangeInclusive<i32> {
        match self {
            FareAgeGroup::Child => 6..=12,
            FareAgeGroup::Teenager => 13..=18,
            FareAgeGroup::Adult => 19..=100,
        }
    }

    /// Percentage taken off the fare after the flat deduction.
    pub fn discount_percent(self) -> u64 {
        match self {
            FareAgeGroup::Child => 50,
            FareAgeGroup::Teenager => 20,
            FareAgeGroup::Adult => 0,
        }
    }

    /// Apply the discount to a fare in won.
    ///
    /// Discounted groups pay `fare - 350 - floor((fare - 350) * percent / 100)`.
    /// Fares below the flat deduction become 0.
    pub fn calculate_fare(self, fare: u64) -> u64 {
        if self == FareAgeGroup::Adult {
            return fare;
        }
        let remaining = fare.saturating_sub(DEDUCTION);
        let percent = self.discount_percent();
        // floor(remaining * percent / 100) without overflowing
        let discount = remaining / 100 * percent + remaining % 100 * percent / 100;
        remaining - discount
    }
}
