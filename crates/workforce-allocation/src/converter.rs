//! Allocation to daily hours.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use workforce_core::calendars::Calendar;
use workforce_core::types::{AllocationKind, AllocationSpec, MonthKey};

use crate::calculator::AllocationCalculator;

impl<C: Calendar + ?Sized> AllocationCalculator<'_, C> {
    /// Hours per working day that `spec` takes in `month`.
    ///
    /// - Percentage: `hours_per_day * value / 100`, independent of the month.
    /// - Monthly hours: `value / working_days(month)`, or 0 for a month
    ///   without working days.
    #[must_use]
    pub fn daily_hours(&self, spec: &AllocationSpec, month: MonthKey) -> Decimal {
        match spec.kind() {
            AllocationKind::Percentage => self.config().hours_per_day * spec.value() / dec!(100),
            AllocationKind::MonthlyHours => {
                let working_days = self.working_days(month);
                if working_days == 0 {
                    return Decimal::ZERO;
                }
                spec.value() / Decimal::from(working_days)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UtilizationConfig;
    use workforce_core::types::Holiday;
    use workforce_core::Date;

    fn month(y: i32, m: u32) -> MonthKey {
        MonthKey::new(y, m).unwrap()
    }

    #[test]
    fn test_percentage() {
        let calc = AllocationCalculator::polish();
        let feb = month(2026, 2);
        assert_eq!(
            calc.daily_hours(&AllocationSpec::percentage(dec!(50)).unwrap(), feb),
            dec!(4.0)
        );
        assert_eq!(
            calc.daily_hours(&AllocationSpec::percentage(dec!(100)).unwrap(), feb),
            dec!(8.0)
        );
        assert_eq!(
            calc.daily_hours(&AllocationSpec::percentage(dec!(12.5)).unwrap(), feb),
            dec!(1)
        );
    }

    #[test]
    fn test_monthly_hours() {
        let calc = AllocationCalculator::polish();
        let spec = AllocationSpec::monthly_hours(dec!(30)).unwrap();
        assert_eq!(calc.daily_hours(&spec, month(2026, 2)), dec!(1.5));
        // April 2026 has 21 working days
        assert_eq!(
            calc.daily_hours(&AllocationSpec::monthly_hours(dec!(42)).unwrap(), month(2026, 4)),
            dec!(2)
        );
    }

    #[test]
    fn test_percentage_follows_configured_day() {
        let calc = AllocationCalculator::new(
            workforce_core::calendars::PolishCalendar::global(),
            UtilizationConfig::new().with_hours_per_day(dec!(6)),
        );
        let spec = AllocationSpec::percentage(dec!(50)).unwrap();
        assert_eq!(calc.daily_hours(&spec, month(2026, 2)), dec!(3));
    }

    /// Every day is a holiday.
    struct ClosedCalendar;

    impl Calendar for ClosedCalendar {
        fn name(&self) -> &'static str {
            "Closed"
        }

        fn is_holiday(&self, _date: Date) -> bool {
            true
        }

        fn holidays_for_year(&self, _year: i32) -> Vec<Holiday> {
            Vec::new()
        }

        fn holiday_name(&self, _date: Date) -> Option<&'static str> {
            Some("Closed")
        }
    }

    #[test]
    fn test_month_without_working_days() {
        let calc = AllocationCalculator::new(&ClosedCalendar, UtilizationConfig::default());
        let spec = AllocationSpec::monthly_hours(dec!(30)).unwrap();
        assert_eq!(calc.daily_hours(&spec, month(2026, 2)), Decimal::ZERO);
    }
}
