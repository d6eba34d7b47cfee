//! Hours an allocation contributes to calendar months.

use rust_decimal::Decimal;
use std::collections::BTreeMap;
use workforce_core::calendars::Calendar;
use workforce_core::types::{AllocationSpec, DateRange, MonthKey};

use crate::calculator::AllocationCalculator;

impl<C: Calendar + ?Sized> AllocationCalculator<'_, C> {
    /// Hours `spec` over `period` contributes to `month`.
    ///
    /// Only working days inside both the period and the month count, and
    /// they are paid at the target month's daily rate. Returns 0 when the
    /// period misses the month or the overlap has no working days.
    #[must_use]
    pub fn hours_in_month(
        &self,
        period: &DateRange,
        spec: &AllocationSpec,
        month: MonthKey,
    ) -> Decimal {
        let Some(overlap) = period.intersect(&month.range()) else {
            return Decimal::ZERO;
        };

        let days = self.calendar().working_day_count(&overlap);
        if days == 0 {
            return Decimal::ZERO;
        }

        let hours = self.daily_hours(spec, month) * Decimal::from(days);
        tracing::trace!(%month, %overlap, days, %hours, "hours in month");
        hours
    }

    /// Contribution of `spec` over `period` to every month the period touches.
    ///
    /// Months without working days in the overlap appear with 0.
    #[must_use]
    pub fn hours_by_month(
        &self,
        period: &DateRange,
        spec: &AllocationSpec,
    ) -> BTreeMap<MonthKey, Decimal> {
        MonthKey::spanning(period)
            .into_iter()
            .map(|month| (month, self.hours_in_month(period, spec, month)))
            .collect()
    }
}
