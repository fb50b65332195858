//! Dashboard repository: aggregate queries over logs and tasks.

use domain::models::{Dashboard, DashboardMetrics, TaskStats};
use domain::services::UNKNOWN_PLACE;
use sqlx::{PgPool, Row};
use std::collections::{BTreeMap, HashMap};

use crate::metrics::QueryTimer;

/// Repository for dashboard aggregates.
#[derive(Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Compute every dashboard aggregate.
    pub async fn get_dashboard(&self) -> Result<Dashboard, sqlx::Error> {
        let (metrics, event_distribution, place_distribution, task_stats) = tokio::try_join!(
            self.get_log_metrics(),
            self.get_event_distribution(),
            self.get_place_distribution(),
            self.get_task_stats(),
        )?;

        Ok(Dashboard {
            metrics,
            event_distribution,
            place_distribution,
            task_stats,
        })
    }

    /// "Today" is the current date in the session time zone.
    async fn get_log_metrics(&self) -> Result<DashboardMetrics, sqlx::Error> {
        let timer = QueryTimer::new("dashboard_log_metrics");
        let row = sqlx::query(
            r#"
            SELECT
                COUNT(*) AS total_logs,
                COUNT(*) FILTER (WHERE DATE(timestamp) = CURRENT_DATE) AS today_logs,
                COUNT(DISTINCT event) AS unique_events,
                COALESCE(SUM(duration_minutes), 0)::bigint AS total_duration_minutes
            FROM logs
            "#,
        )
        .fetch_one(&self.pool)
        .await;
        timer.record();
        let row = row?;

        Ok(DashboardMetrics::new(
            row.get("total_logs"),
            row.get("today_logs"),
            row.get("unique_events"),
            row.get("total_duration_minutes"),
        ))
    }

    async fn get_event_distribution(&self) -> Result<BTreeMap<String, i64>, sqlx::Error> {
        let timer = QueryTimer::new("dashboard_event_distribution");
        let rows = sqlx::query_as::<_, (String, i64)>(
            r#"
            SELECT event, COUNT(*) FROM logs GROUP BY event
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        Ok(rows?.into_iter().collect())
    }

    async fn get_place_distribution(&self) -> Result<BTreeMap<String, i64>, sqlx::Error> {
        let timer = QueryTimer::new("dashboard_place_distribution");
        let rows = sqlx::query_as::<_, (String, i64)>(
            r#"
            SELECT COALESCE(p.name, $1) AS place, COUNT(*)
            FROM logs l
            LEFT JOIN places p ON l.place_id = p.id
            GROUP BY 1
            "#,
        )
        .bind(UNKNOWN_PLACE)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        Ok(rows?.into_iter().collect())
    }

    async fn get_task_stats(&self) -> Result<TaskStats, sqlx::Error> {
        let timer = QueryTimer::new("dashboard_task_stats");
        let rows = sqlx::query_as::<_, (String, i64)>(
            r#"
            SELECT status, COUNT(*) FROM tasks GROUP BY status
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();

        let by_status: HashMap<String, i64> = rows?.into_iter().collect();
        let total = by_status.values().sum();
        Ok(TaskStats::from_status_counts(total, &by_status))
    }
}
