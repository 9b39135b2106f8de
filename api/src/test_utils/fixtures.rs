//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::RateRule;

/// Timezone every fixture is stored under
pub const TEST_TZ: &str = "America/Chicago";

/// The weekday rate: mon,tues,thurs 09-21 at 1500
pub fn test_rate() -> RateRule {
    rate("mon,tues,thurs", "0900-2100", 1500)
}

/// The Wednesday rate: wed 06-18 at 1750
pub fn wednesday_rate() -> RateRule {
    rate("wed", "0600-1800", 1750)
}

/// Create a rate in the test timezone
pub fn rate(days: &str, times: &str, price: u32) -> RateRule {
    RateRule {
        days: days.to_string(),
        times: times.to_string(),
        tz: TEST_TZ.to_string(),
        price,
    }
}
