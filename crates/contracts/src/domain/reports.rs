use serde::Deserialize;
use std::collections::HashMap;

/// Daily report from `GET /reports/daily/?date=YYYY-MM-DD`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DailyStats {
    #[serde(default)]
    pub total_conversations: i64,
    #[serde(default)]
    pub total_appointments: i64,
    #[serde(default)]
    pub channels: HashMap<String, i64>,
    #[serde(default)]
    pub top_intents: HashMap<String, i64>,
}

/// Aggregate counters from `GET /admin/analytics/summary?from=&to=`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyticsSummary {
    #[serde(default)]
    pub total_conversations: i64,
    #[serde(default)]
    pub total_appointments: i64,
    #[serde(default)]
    pub channels: HashMap<String, i64>,
    #[serde(default)]
    pub top_intents: HashMap<String, i64>,
}
