/// Floor year for "all time" aggregation windows.
///
/// No record predates the product launch, so summing from the first instant
/// of this year is equivalent to summing everything.
pub const ALL_TIME_EPOCH_YEAR: i32 = 2000;

/// Number of recent records returned by the dashboard summary when the
/// caller does not supply a limit.
pub const DEFAULT_RECENT_LIMIT: u32 = 5;

/// Months in a calendar year.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Compounding periods per year for monthly mortgage amortization.
pub const MORTGAGE_PAYMENTS_PER_YEAR: u32 = 12;
