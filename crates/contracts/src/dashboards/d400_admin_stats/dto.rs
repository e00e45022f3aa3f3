use serde::{Deserialize, Serialize};

use crate::shared::serde_helpers::lenient_f64;

/// Totals of `GET /admin/stats`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub total_orders: u64,
    #[serde(default)]
    pub total_products: u64,
    #[serde(default)]
    pub total_categories: u64,
}

/// One month of `GET /admin/statics`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPoint {
    #[serde(default)]
    pub month: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_users: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_sales: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_orders: f64,
}

/// The monthly endpoint answers with a bare array; newer builds wrap it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MonthlySeriesResponse {
    Bare(Vec<MonthlyPoint>),
    Wrapped {
        #[serde(default)]
        data: Vec<MonthlyPoint>,
    },
}

impl MonthlySeriesResponse {
    pub fn into_points(self) -> Vec<MonthlyPoint> {
        match self {
            MonthlySeriesResponse::Bare(points) | MonthlySeriesResponse::Wrapped { data: points } => {
                points
            }
        }
    }
}

/// Series drawn on the monthly chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartSeries {
    Users,
    Sales,
    Orders,
}

impl ChartSeries {
    pub const ALL: [ChartSeries; 3] = [ChartSeries::Users, ChartSeries::Sales, ChartSeries::Orders];

    pub fn label(self) -> &'static str {
        match self {
            ChartSeries::Users => "Users",
            ChartSeries::Sales => "Sales",
            ChartSeries::Orders => "Orders",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ChartSeries::Users => "#8884d8",
            ChartSeries::Sales => "#82ca9d",
            ChartSeries::Orders => "#ffc658",
        }
    }

    pub fn value(self, point: &MonthlyPoint) -> f64 {
        match self {
            ChartSeries::Users => point.total_users,
            ChartSeries::Sales => point.total_sales,
            ChartSeries::Orders => point.total_orders,
        }
    }
}

/// Y axis label: `1.5M`, `12K`, or the plain number below a thousand.
pub fn format_axis_tick(value: f64) -> String {
    let trim = |v: f64| {
        let s = format!("{v:.1}");
        s.strip_suffix(".0").map(str::to_string).unwrap_or(s)
    };
    if value >= 1_000_000.0 {
        format!("{}M", trim(value / 1_000_000.0))
    } else if value >= 1_000.0 {
        format!("{}K", trim(value / 1_000.0))
    } else {
        trim(value)
    }
}

/// Axis maximum rounded up to 1, 2 or 5 times a power of ten.
pub fn nice_axis_max(points: &[MonthlyPoint]) -> f64 {
    let max = points
        .iter()
        .flat_map(|p| ChartSeries::ALL.map(|s| s.value(p)))
        .fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powi(max.log10().floor() as i32);
    [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(|m| m * magnitude)
        .find(|candidate| *candidate >= max)
        .unwrap_or(10.0 * magnitude)
}

/// `count + 1` evenly spaced tick values from 0 to `axis_max`.
pub fn axis_ticks(axis_max: f64, count: usize) -> Vec<f64> {
    let count = count.max(1);
    (0..=count)
        .map(|i| axis_max * i as f64 / count as f64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_formatting() {
        assert_eq!(format_axis_tick(0.0), "0");
        assert_eq!(format_axis_tick(950.0), "950");
        assert_eq!(format_axis_tick(1_000.0), "1K");
        assert_eq!(format_axis_tick(12_500.0), "12.5K");
        assert_eq!(format_axis_tick(2_000_000.0), "2M");
        assert_eq!(format_axis_tick(1_240_000.0), "1.2M");
    }

    #[test]
    fn monthly_series_shapes() {
        let bare: MonthlySeriesResponse =
            serde_json::from_str(r#"[{"month":"Jan","totalUsers":3,"totalSales":1200.5,"totalOrders":"4"}]"#)
                .unwrap();
        let points = bare.into_points();
        assert_eq!(points[0].total_orders, 4.0);

        let wrapped: MonthlySeriesResponse =
            serde_json::from_str(r#"{"data":[{"month":"Feb"}]}"#).unwrap();
        assert_eq!(wrapped.into_points()[0].month, "Feb");
    }

    #[test]
    fn axis_max_is_nice() {
        let point = |sales: f64| MonthlyPoint {
            total_sales: sales,
            ..Default::default()
        };
        assert_eq!(nice_axis_max(&[]), 1.0);
        assert_eq!(nice_axis_max(&[point(7.0)]), 10.0);
        assert_eq!(nice_axis_max(&[point(130.0)]), 200.0);
        assert_eq!(nice_axis_max(&[point(4_100.0)]), 5_000.0);
        assert_eq!(nice_axis_max(&[point(1_000.0)]), 1_000.0);
        assert_eq!(axis_ticks(100.0, 4), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn stats_default_missing_counters() {
        let stats: AdminStats = serde_json::from_str(r#"{"totalUsers":5}"#).unwrap();
        assert_eq!(stats.total_users, 5);
        assert_eq!(stats.total_categories, 0);
    }
}
