//! Tests for the dashboard aggregation service.

#[cfg(test)]
mod tests {
    use crate::dashboard::{DashboardService, DashboardServiceTrait, SummaryQuery};
    use crate::errors::{Error, Result};
    use crate::expenses::{CategoryBreakdown, Expense, ExpenseCategory, ExpenseRepositoryTrait};
    use crate::incomes::{Income, IncomeRepositoryTrait, IncomeSource, SourceBreakdown};
    use crate::users::{UserLimits, UserRepositoryTrait};
    use crate::utils::time_utils::Period;
    use async_trait::async_trait;
    use chrono::{Datelike, NaiveDate, NaiveDateTime};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::collections::{HashMap, HashSet};
    use std::sync::{Arc, Mutex};

    fn dt(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn expense(
        id: i64,
        user_id: i64,
        amount: Decimal,
        category: ExpenseCategory,
        date: NaiveDateTime,
    ) -> Expense {
        Expense {
            id,
            user_id,
            title: format!("expense {id}"),
            amount,
            category,
            date,
            description: String::new(),
            created_at: date,
            updated_at: date,
        }
    }

    fn income(
        id: i64,
        user_id: i64,
        amount: Decimal,
        source: IncomeSource,
        date: NaiveDateTime,
    ) -> Income {
        Income {
            id,
            user_id,
            amount,
            source,
            date,
            description: String::new(),
            created_at: date,
            updated_at: date,
        }
    }

    fn contains(period: &Period, date: NaiveDateTime) -> bool {
        date >= period.start && date <= period.end
    }

    // --- Mock ExpenseRepository ---
    struct MockExpenseRepository {
        records: Vec<Expense>,
        /// Totals queries whose period starts in one of these months fail.
        fail_total_months: HashSet<u32>,
        cancelled: bool,
    }

    impl MockExpenseRepository {
        fn new(records: Vec<Expense>) -> Self {
            Self {
                records,
                fail_total_months: HashSet::new(),
                cancelled: false,
            }
        }

        fn failing_totals_in(mut self, months: &[u32]) -> Self {
            self.fail_total_months = months.iter().copied().collect();
            self
        }

        fn cancelled(mut self) -> Self {
            self.cancelled = true;
            self
        }
    }

    #[async_trait]
    impl ExpenseRepositoryTrait for MockExpenseRepository {
        async fn total_in_period(&self, user_id: i64, period: &Period) -> Result<Decimal> {
            if self.cancelled {
                return Err(Error::Cancelled);
            }
            if self.fail_total_months.contains(&period.start.month()) {
                return Err(Error::Repository("storage offline".to_string()));
            }
            Ok(self
                .records
                .iter()
                .filter(|e| e.user_id == user_id && contains(period, e.date))
                .map(|e| e.amount)
                .sum())
        }

        async fn totals_by_category(
            &self,
            user_id: i64,
            period: &Period,
        ) -> Result<CategoryBreakdown> {
            let mut breakdown = CategoryBreakdown::new();
            for e in self
                .records
                .iter()
                .filter(|e| e.user_id == user_id && contains(period, e.date))
            {
                *breakdown.entry(e.category).or_insert(Decimal::ZERO) += e.amount;
            }
            Ok(breakdown)
        }

        async fn list_in_period(&self, user_id: i64, period: &Period) -> Result<Vec<Expense>> {
            Ok(self
                .records
                .iter()
                .filter(|e| e.user_id == user_id && contains(period, e.date))
                .cloned()
                .collect())
        }

        async fn list_recent(&self, user_id: i64, limit: u32) -> Result<Vec<Expense>> {
            let mut recent: Vec<Expense> = self
                .records
                .iter()
                .filter(|e| e.user_id == user_id)
                .cloned()
                .collect();
            recent.sort_by(|a, b| b.date.cmp(&a.date));
            recent.truncate(limit as usize);
            Ok(recent)
        }
    }

    // --- Mock IncomeRepository ---
    struct MockIncomeRepository {
        records: Vec<Income>,
        fail_total_months: HashSet<u32>,
    }

    impl MockIncomeRepository {
        fn new(records: Vec<Income>) -> Self {
            Self {
                records,
                fail_total_months: HashSet::new(),
            }
        }
    }

    #[async_trait]
    impl IncomeRepositoryTrait for MockIncomeRepository {
        async fn total_in_period(&self, user_id: i64, period: &Period) -> Result<Decimal> {
            if self.fail_total_months.contains(&period.start.month()) {
                return Err(Error::Repository("storage offline".to_string()));
            }
            Ok(self
                .records
                .iter()
                .filter(|i| i.user_id == user_id && contains(period, i.date))
                .map(|i| i.amount)
                .sum())
        }

        async fn totals_by_source(
            &self,
            user_id: i64,
            period: &Period,
        ) -> Result<SourceBreakdown> {
            let mut breakdown = SourceBreakdown::new();
            for i in self
                .records
                .iter()
                .filter(|i| i.user_id == user_id && contains(period, i.date))
            {
                *breakdown.entry(i.source).or_insert(Decimal::ZERO) += i.amount;
            }
            Ok(breakdown)
        }

        async fn list_in_period(&self, user_id: i64, period: &Period) -> Result<Vec<Income>> {
            Ok(self
                .records
                .iter()
                .filter(|i| i.user_id == user_id && contains(period, i.date))
                .cloned()
                .collect())
        }

        async fn list_recent(&self, user_id: i64, limit: u32) -> Result<Vec<Income>> {
            let mut recent: Vec<Income> = self
                .records
                .iter()
                .filter(|i| i.user_id == user_id)
                .cloned()
                .collect();
            recent.sort_by(|a, b| b.date.cmp(&a.date));
            recent.truncate(limit as usize);
            Ok(recent)
        }
    }

    // --- Mock UserRepository ---
    struct MockUserRepository {
        users: Mutex<HashMap<i64, UserLimits>>,
    }

    impl MockUserRepository {
        fn with_user(user_id: i64, limits: UserLimits) -> Self {
            let mut users = HashMap::new();
            users.insert(user_id, limits);
            Self {
                users: Mutex::new(users),
            }
        }

        fn empty() -> Self {
            Self {
                users: Mutex::new(HashMap::new()),
            }
        }
    }

    #[async_trait]
    impl UserRepositoryTrait for MockUserRepository {
        async fn get_user_limits(&self, user_id: i64) -> Result<UserLimits> {
            self.users
                .lock()
                .unwrap()
                .get(&user_id)
                .copied()
                .ok_or_else(|| Error::NotFound(format!("user {user_id}")))
        }
    }

    const USER_ID: i64 = 7;

    fn limits(monthly_limit: Decimal, savings_goal: Decimal) -> UserLimits {
        UserLimits {
            monthly_limit,
            savings_goal,
        }
    }

    fn sample_expenses() -> Vec<Expense> {
        vec![
            expense(1, USER_ID, dec!(100), ExpenseCategory::Food, dt(2024, 6, 10)),
            expense(2, USER_ID, dec!(40), ExpenseCategory::Transport, dt(2024, 6, 12)),
            expense(3, USER_ID, dec!(60), ExpenseCategory::Shopping, dt(2024, 5, 20)),
            expense(4, USER_ID, dec!(30), ExpenseCategory::Other, dt(2023, 7, 1)),
        ]
    }

    fn sample_incomes() -> Vec<Income> {
        vec![
            income(1, USER_ID, dec!(500), IncomeSource::Salary, dt(2024, 6, 3)),
            income(2, USER_ID, dec!(200), IncomeSource::Gift, dt(2023, 3, 9)),
        ]
    }

    fn service(
        expenses: MockExpenseRepository,
        incomes: MockIncomeRepository,
        users: MockUserRepository,
    ) -> DashboardService {
        DashboardService::new(Arc::new(expenses), Arc::new(incomes), Arc::new(users))
    }

    // ==================== get_summary ====================

    #[tokio::test]
    async fn summary_composes_current_month_and_all_time() {
        let service = service(
            MockExpenseRepository::new(sample_expenses()),
            MockIncomeRepository::new(sample_incomes()),
            MockUserRepository::with_user(USER_ID, limits(dec!(1000), dec!(2000))),
        );

        let summary = service
            .get_summary_at(USER_ID, None, dt(2024, 6, 15))
            .await
            .unwrap();

        assert_eq!(summary.current_month.expenses, dec!(140));
        assert_eq!(summary.current_month.incomes, dec!(500));
        assert_eq!(summary.current_month.expenses_percent, dec!(14));
        assert_eq!(summary.current_month.savings_percent, dec!(25));
        assert_eq!(summary.current_month.balance, dec!(360));

        assert_eq!(summary.all_time.expenses, dec!(230));
        assert_eq!(summary.all_time.incomes, dec!(700));
        assert_eq!(summary.all_time.balance, dec!(470));

        // Breakdowns cover the current month only; absent keys mean zero.
        assert_eq!(
            summary.expenses_by_category.get(&ExpenseCategory::Food),
            Some(&dec!(100))
        );
        assert_eq!(
            summary.expenses_by_category.get(&ExpenseCategory::Transport),
            Some(&dec!(40))
        );
        assert!(summary
            .expenses_by_category
            .get(&ExpenseCategory::Shopping)
            .is_none());
        assert_eq!(
            summary.incomes_by_source.get(&IncomeSource::Salary),
            Some(&dec!(500))
        );

        // Recent lists are newest-first across all periods.
        assert_eq!(summary.recent_expenses.len(), 4);
        assert_eq!(summary.recent_expenses[0].id, 2);
        assert_eq!(summary.recent_incomes[0].id, 1);
    }

    #[tokio::test]
    async fn summary_zero_targets_yield_zero_percentages() {
        let service = service(
            MockExpenseRepository::new(sample_expenses()),
            MockIncomeRepository::new(sample_incomes()),
            MockUserRepository::with_user(USER_ID, limits(dec!(0), dec!(0))),
        );

        let summary = service
            .get_summary_at(USER_ID, None, dt(2024, 6, 15))
            .await
            .unwrap();

        assert_eq!(summary.current_month.expenses_percent, Decimal::ZERO);
        assert_eq!(summary.current_month.savings_percent, Decimal::ZERO);
    }

    #[tokio::test]
    async fn summary_honors_recent_limit() {
        let service = service(
            MockExpenseRepository::new(sample_expenses()),
            MockIncomeRepository::new(sample_incomes()),
            MockUserRepository::with_user(USER_ID, limits(dec!(1000), dec!(2000))),
        );

        let summary = service
            .get_summary_at(USER_ID, Some(1), dt(2024, 6, 15))
            .await
            .unwrap();

        assert_eq!(summary.recent_expenses.len(), 1);
        assert_eq!(summary.recent_expenses[0].id, 2);
        assert_eq!(summary.recent_incomes.len(), 1);
    }

    #[tokio::test]
    async fn summary_unknown_user_is_not_found() {
        let service = service(
            MockExpenseRepository::new(Vec::new()),
            MockIncomeRepository::new(Vec::new()),
            MockUserRepository::empty(),
        );

        let err = service
            .get_summary_at(USER_ID, None, dt(2024, 6, 15))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn summary_is_all_or_nothing_when_a_sub_query_fails() {
        let service = service(
            MockExpenseRepository::new(sample_expenses()).failing_totals_in(&[6]),
            MockIncomeRepository::new(sample_incomes()),
            MockUserRepository::with_user(USER_ID, limits(dec!(1000), dec!(2000))),
        );

        let err = service
            .get_summary_at(USER_ID, None, dt(2024, 6, 15))
            .await
            .unwrap_err();
        match err {
            Error::Aggregation(aggregation) => {
                assert_eq!(aggregation.query, SummaryQuery::ExpenseTotal);
                assert!(aggregation.to_string().contains("storage offline"));
            }
            other => panic!("expected aggregation error, got {other}"),
        }
    }

    #[tokio::test]
    async fn summary_propagates_cancellation_untagged() {
        let service = service(
            MockExpenseRepository::new(sample_expenses()).cancelled(),
            MockIncomeRepository::new(sample_incomes()),
            MockUserRepository::with_user(USER_ID, limits(dec!(1000), dec!(2000))),
        );

        let err = service
            .get_summary_at(USER_ID, None, dt(2024, 6, 15))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Cancelled));
    }

    // ==================== get_monthly_stats ====================

    #[tokio::test]
    async fn monthly_stats_cover_the_requested_month() {
        let service = service(
            MockExpenseRepository::new(sample_expenses()),
            MockIncomeRepository::new(sample_incomes()),
            MockUserRepository::with_user(USER_ID, limits(dec!(300), dec!(2000))),
        );

        let stats = service
            .get_monthly_stats(USER_ID, 2024, 5)
            .await
            .unwrap();

        assert_eq!(stats.period.year, 2024);
        assert_eq!(stats.period.month, 5);
        assert_eq!(stats.period.start_date.to_string(), "2024-05-01 00:00:00");
        assert_eq!(stats.period.end_date.to_string(), "2024-05-31 23:59:59");

        assert_eq!(stats.summary.expenses, dec!(60));
        assert_eq!(stats.summary.incomes, Decimal::ZERO);
        assert_eq!(stats.summary.expenses_percent, dec!(20));
        assert_eq!(stats.summary.balance, dec!(-60));

        assert_eq!(stats.expenses.len(), 1);
        assert_eq!(stats.expenses[0].id, 3);
        assert!(stats.incomes.is_empty());
        assert_eq!(
            stats.expenses_by_category.get(&ExpenseCategory::Shopping),
            Some(&dec!(60))
        );
    }

    #[tokio::test]
    async fn monthly_stats_reject_month_out_of_range() {
        let service = service(
            MockExpenseRepository::new(Vec::new()),
            MockIncomeRepository::new(Vec::new()),
            MockUserRepository::with_user(USER_ID, limits(dec!(1000), dec!(2000))),
        );

        let err = service
            .get_monthly_stats(USER_ID, 2024, 13)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));

        let err = service.get_monthly_stats(USER_ID, 2024, 0).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    // ==================== get_yearly_stats ====================

    #[tokio::test]
    async fn yearly_stats_aggregate_and_average() {
        let service = service(
            MockExpenseRepository::new(sample_expenses()),
            MockIncomeRepository::new(sample_incomes()),
            MockUserRepository::with_user(USER_ID, limits(dec!(1000), dec!(2000))),
        );

        let stats = service.get_yearly_stats(USER_ID, 2023).await.unwrap();

        assert_eq!(stats.period.year, 2023);
        assert_eq!(stats.summary.expenses, dec!(30));
        assert_eq!(stats.summary.incomes, dec!(200));
        assert_eq!(stats.summary.balance, dec!(170));
        assert_eq!(stats.summary.avg_month.expenses, dec!(2.5));

        assert_eq!(stats.monthly_data.len(), 12);
        let july = &stats.monthly_data[6];
        assert_eq!(july.month, 7);
        assert_eq!(july.month_name, "July");
        assert_eq!(july.expenses, dec!(30));
        assert_eq!(july.balance, dec!(-30));

        let march = &stats.monthly_data[2];
        assert_eq!(march.incomes, dec!(200));
        assert_eq!(stats.monthly_data[0].expenses, Decimal::ZERO);
    }

    #[tokio::test]
    async fn yearly_stats_degrade_failed_months_to_zero() {
        let expenses = vec![
            expense(1, USER_ID, dec!(50), ExpenseCategory::Food, dt(2023, 3, 5)),
            expense(2, USER_ID, dec!(70), ExpenseCategory::Food, dt(2023, 4, 5)),
        ];
        let service = service(
            MockExpenseRepository::new(expenses).failing_totals_in(&[3]),
            MockIncomeRepository::new(Vec::new()),
            MockUserRepository::with_user(USER_ID, limits(dec!(1000), dec!(2000))),
        );

        let stats = service.get_yearly_stats(USER_ID, 2023).await.unwrap();

        // March's query failed and reports zero; April is untouched, and the
        // year total came from its own (successful) query.
        assert_eq!(stats.monthly_data[2].expenses, Decimal::ZERO);
        assert_eq!(stats.monthly_data[3].expenses, dec!(70));
        assert_eq!(stats.summary.expenses, dec!(120));
    }

    #[tokio::test]
    async fn yearly_stats_cancellation_aborts_the_call() {
        let service = service(
            MockExpenseRepository::new(sample_expenses()).cancelled(),
            MockIncomeRepository::new(sample_incomes()),
            MockUserRepository::with_user(USER_ID, limits(dec!(1000), dec!(2000))),
        );

        let err = service.get_yearly_stats(USER_ID, 2023).await.unwrap_err();
        assert!(matches!(err, Error::Cancelled));
    }
}
