// Copyright (c) 2025 Pennyplan Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::ContributionFrequency;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Projection {
    /// Number of contribution intervals across the timeframe.
    pub intervals: u32,
    /// Goal minus expenses over the period. Negative means a shortfall; the
    /// caller presents it as a deficit, never clamps it to zero.
    pub net_to_save: Decimal,
    /// Required deposit per interval; zero when there are no intervals.
    pub per_interval: Decimal,
}

/// Computes the per-interval contribution needed to close the gap between a
/// savings goal and the projected expenses over the timeframe.
///
/// Stateless and referentially transparent: identical arguments always yield
/// identical results, which is what lets the preview and the final calculate
/// share one code path.
pub fn project(
    savings_goal: Decimal,
    total_expenses_over_period: Decimal,
    timeframe_months: u32,
    frequency: ContributionFrequency,
) -> Projection {
    let intervals = timeframe_months * frequency.intervals_per_month();
    let net_to_save = savings_goal - total_expenses_over_period;
    let per_interval = if intervals > 0 {
        net_to_save / Decimal::from(intervals)
    } else {
        Decimal::ZERO
    };
    Projection {
        intervals,
        net_to_save,
        per_interval,
    }
}
