//! Dashboard module - aggregation of ledger queries into summary views.

mod dashboard_errors;
mod dashboard_model;
mod dashboard_service;
mod dashboard_traits;

#[cfg(test)]
mod dashboard_service_tests;

pub use dashboard_errors::{AggregationError, SummaryQuery};
pub use dashboard_model::{
    AllTimeSummary, AverageMonth, DashboardSummary, MonthPeriod, MonthSummary, MonthTotals,
    MonthlyStats, YearPeriod, YearSummary, YearlyStats,
};
pub use dashboard_service::DashboardService;
pub use dashboard_traits::DashboardServiceTrait;
