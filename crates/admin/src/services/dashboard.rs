//! Dashboard summary metrics.
//!
//! Four independent slots: user count, post count, total profit, and the
//! 30-day profit chart. `fetch_all` issues the four remote calls
//! concurrently; they complete in any order and each fills only its own
//! slot, last write wins. A failed slot records the remote message and
//! leaves the slot's previous value standing.

use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::instrument;

use crate::backend::{BackendError, DataClient, SelectQuery};

use secondxe_core::PaymentStatus;

/// How far back the profit chart reaches.
const CHART_WINDOW_DAYS: u64 = 30;

/// One point of the profit chart: a day and the paid total for that day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfitPoint {
    /// Day-of-month label, matching what the chart renders.
    pub day: u32,
    /// Sum of paid payments created on that day.
    pub total: Decimal,
}

/// Dashboard slots plus bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    user_count: u64,
    post_count: u64,
    total_profit: Decimal,
    chart: Vec<ProfitPoint>,
    error: Option<String>,
    last_updated: Option<DateTime<Utc>>,
}

/// Serializable snapshot of the dashboard state.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub user_count: u64,
    pub post_count: u64,
    pub total_profit: Decimal,
    pub chart: Vec<ProfitPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub last_updated: Option<DateTime<Utc>>,
}

/// Paid-payment row projected for profit queries.
#[derive(Debug, Deserialize)]
struct PaidRow {
    created_at: DateTime<Utc>,
    #[serde(default)]
    total_price: Option<Decimal>,
}

/// Row projected for the flat profit sum.
#[derive(Debug, Deserialize)]
struct PriceRow {
    #[serde(default)]
    total_price: Option<Decimal>,
}

/// Service for the dashboard view.
pub struct DashboardService<'a> {
    data: &'a DataClient,
    state: &'a RwLock<DashboardState>,
}

impl<'a> DashboardService<'a> {
    /// Create a new dashboard service.
    #[must_use]
    pub const fn new(data: &'a DataClient, state: &'a RwLock<DashboardState>) -> Self {
        Self { data, state }
    }

    /// Refresh all four slots concurrently and return the snapshot.
    ///
    /// Individual failures do not abort the rest; each failed slot keeps
    /// its previous value and the last failure's message is recorded.
    #[instrument(skip(self))]
    pub async fn fetch_all(&self) -> DashboardSnapshot {
        let (users, posts, profit, chart) = tokio::join!(
            self.data.count("User"),
            self.data.count("VehiclePost"),
            self.fetch_total_profit(),
            self.fetch_profit_chart(),
        );

        {
            let mut state = self.state.write().await;
            state.error = None;

            match users {
                Ok(count) => state.user_count = count,
                Err(e) => state.error = Some(e.message()),
            }
            match posts {
                Ok(count) => state.post_count = count,
                Err(e) => state.error = Some(e.message()),
            }
            match profit {
                Ok(total) => state.total_profit = total,
                Err(e) => state.error = Some(e.message()),
            }
            match chart {
                Ok(points) => state.chart = points,
                Err(e) => state.error = Some(e.message()),
            }

            state.last_updated = Some(Utc::now());
        }

        self.snapshot().await
    }

    /// The current snapshot without refetching.
    pub async fn snapshot(&self) -> DashboardSnapshot {
        let state = self.state.read().await;
        DashboardSnapshot {
            user_count: state.user_count,
            post_count: state.post_count,
            total_profit: state.total_profit,
            chart: state.chart.clone(),
            error: state.error.clone(),
            last_updated: state.last_updated,
        }
    }

    /// Sum of `total_price` over paid payments.
    async fn fetch_total_profit(&self) -> Result<Decimal, BackendError> {
        let rows: Vec<PriceRow> = self
            .data
            .select(
                "PostPayment",
                SelectQuery::new()
                    .columns("total_price")
                    .eq("status", PaymentStatus::Paid),
            )
            .await?;

        Ok(rows.iter().filter_map(|r| r.total_price).sum())
    }

    /// Paid payments of the last 30 days, grouped per day.
    async fn fetch_profit_chart(&self) -> Result<Vec<ProfitPoint>, BackendError> {
        let cutoff = Utc::now() - Days::new(CHART_WINDOW_DAYS);
        let rows: Vec<PaidRow> = self
            .data
            .select(
                "PostPayment",
                SelectQuery::new()
                    .columns("created_at, total_price")
                    .eq("status", PaymentStatus::Paid)
                    .gte("created_at", cutoff.to_rfc3339())
                    .order_asc("created_at"),
            )
            .await?;

        Ok(build_chart(&rows, Utc::now().date_naive()))
    }
}

/// Group paid rows into one chronological point per day of the window.
///
/// Days without payments are zero-filled so the chart never has gaps. The
/// window is the 30 days ending at `today` inclusive, oldest first,
/// labelled with the day of month.
fn build_chart(rows: &[PaidRow], today: NaiveDate) -> Vec<ProfitPoint> {
    (0..CHART_WINDOW_DAYS)
        .rev()
        .filter_map(|back| today.checked_sub_days(Days::new(back)))
        .map(|date| {
            let total = rows
                .iter()
                .filter(|r| r.created_at.date_naive() == date)
                .filter_map(|r| r.total_price)
                .sum();
            ProfitPoint {
                day: date.day(),
                total,
            }
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn paid(date: &str, price: i64) -> PaidRow {
        PaidRow {
            created_at: format!("{date}T09:00:00Z").parse().unwrap(),
            total_price: Some(Decimal::from(price)),
        }
    }

    #[test]
    fn test_chart_is_zero_filled_and_ordered() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
        let chart = build_chart(&[], today);

        assert_eq!(chart.len(), 30);
        // Window is 2026-07-31 .. 2026-08-29, oldest first
        assert_eq!(chart[0].day, 31);
        assert_eq!(chart[29].day, 29);
        assert!(chart.iter().all(|p| p.total == Decimal::ZERO));
    }

    #[test]
    fn test_chart_sums_same_day_payments() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
        let rows = vec![
            paid("2026-08-10", 100),
            paid("2026-08-10", 250),
            paid("2026-08-11", 40),
        ];
        let chart = build_chart(&rows, today);

        let aug10 = chart.iter().find(|p| p.day == 10).unwrap();
        assert_eq!(aug10.total, Decimal::from(350));
        let aug11 = chart.iter().find(|p| p.day == 11).unwrap();
        assert_eq!(aug11.total, Decimal::from(40));
    }

    #[test]
    fn test_chart_includes_today() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
        let rows = vec![paid("2026-08-29", 75)];
        let chart = build_chart(&rows, today);
        assert_eq!(chart[29].day, 29);
        assert_eq!(chart[29].total, Decimal::from(75));
    }

    #[test]
    fn test_chart_ignores_rows_before_window() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
        let rows = vec![paid("2026-07-30", 999), paid("2026-07-01", 999)];
        let chart = build_chart(&rows, today);
        assert!(chart.iter().all(|p| p.total == Decimal::ZERO));
    }

    #[test]
    fn test_null_prices_count_as_zero() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
        let rows = vec![PaidRow {
            created_at: "2026-08-10T09:00:00Z".parse().unwrap(),
            total_price: None,
        }];
        let chart = build_chart(&rows, today);
        let aug10 = chart.iter().find(|p| p.day == 10).unwrap();
        assert_eq!(aug10.total, Decimal::ZERO);
    }
}
