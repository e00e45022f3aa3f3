use contracts::dashboards::d400_admin_stats::{
    axis_ticks, format_axis_tick, nice_axis_max, ChartSeries, MonthlyPoint,
};
use leptos::prelude::*;

const WIDTH: f64 = 760.0;
const HEIGHT: f64 = 300.0;
const PAD_LEFT: f64 = 52.0;
const PAD_RIGHT: f64 = 12.0;
const PAD_TOP: f64 = 12.0;
const PAD_BOTTOM: f64 = 28.0;
const TICKS: usize = 4;

/// Geometry of one bar, in SVG user units.
#[derive(Debug, Clone, PartialEq)]
struct Bar {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    color: &'static str,
    title: String,
}

/// SVG attribute text for a coordinate.
fn n(v: f64) -> String {
    format!("{:.2}", v)
}

fn plot_height() -> f64 {
    HEIGHT - PAD_TOP - PAD_BOTTOM
}

fn y_for(value: f64, axis_max: f64) -> f64 {
    PAD_TOP + plot_height() * (1.0 - (value / axis_max).clamp(0.0, 1.0))
}

/// One group per month with a bar per series, 20% of the group left as gap.
fn layout_bars(points: &[MonthlyPoint], axis_max: f64) -> Vec<Bar> {
    if points.is_empty() {
        return Vec::new();
    }
    let group_width = (WIDTH - PAD_LEFT - PAD_RIGHT) / points.len() as f64;
    let bar_width = group_width * 0.8 / ChartSeries::ALL.len() as f64;

    points
        .iter()
        .enumerate()
        .flat_map(|(i, point)| {
            let group_x = PAD_LEFT + group_width * i as f64 + group_width * 0.1;
            ChartSeries::ALL.into_iter().enumerate().map(move |(j, series)| {
                let value = series.value(point);
                let y = y_for(value, axis_max);
                Bar {
                    x: group_x + bar_width * j as f64,
                    y,
                    width: bar_width,
                    height: PAD_TOP + plot_height() - y,
                    color: series.color(),
                    title: format!("{} {}: {}", point.month, series.label(), format_axis_tick(value)),
                }
            })
        })
        .collect()
}

/// Grouped bar chart of the monthly series.
#[component]
pub fn MonthlyChart(#[prop(into)] points: Signal<Vec<MonthlyPoint>>) -> impl IntoView {
    let axis_max = Memo::new(move |_| points.with(|p| nice_axis_max(p)));

    let grid = move || {
        let max = axis_max.get();
        axis_ticks(max, TICKS)
            .into_iter()
            .map(|tick| {
                let y = y_for(tick, max);
                view! {
                    <g class="chart__tick">
                        <line x1=n(PAD_LEFT) x2=n(WIDTH - PAD_RIGHT) y1=n(y) y2=n(y) stroke="#e5e7eb" />
                        <text x=n(PAD_LEFT - 6.0) y=n(y + 4.0) text-anchor="end" font-size="11">
                            {format_axis_tick(tick)}
                        </text>
                    </g>
                }
            })
            .collect_view()
    };

    let bars = move || {
        points.with(|p| layout_bars(p, axis_max.get()))
            .into_iter()
            .map(|bar| view! {
                <rect x=n(bar.x) y=n(bar.y) width=n(bar.width) height=n(bar.height) fill=bar.color rx="2">
                    <title>{bar.title}</title>
                </rect>
            })
            .collect_view()
    };

    let labels = move || {
        points.with(|p| {
            let group_width = (WIDTH - PAD_LEFT - PAD_RIGHT) / p.len().max(1) as f64;
            p.iter()
                .enumerate()
                .map(|(i, point)| {
                    let x = PAD_LEFT + group_width * (i as f64 + 0.5);
                    view! {
                        <text x=n(x) y=n(HEIGHT - 8.0) text-anchor="middle" font-size="11">
                            {point.month.clone()}
                        </text>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="chart">
            <div class="chart__legend">
                {ChartSeries::ALL.into_iter().map(|s| view! {
                    <span class="chart__legend-item">
                        <span class="chart__swatch" style:background-color=s.color()></span>
                        {s.label()}
                    </span>
                }).collect_view()}
            </div>
            <Show
                when=move || points.with(|p| !p.is_empty())
                fallback=|| view! { <div class="chart__empty">"No monthly data yet."</div> }
            >
                <svg
                    class="chart__svg"
                    viewBox=format!("0 0 {} {}", WIDTH, HEIGHT)
                    preserveAspectRatio="xMidYMid meet"
                    role="img"
                >
                    {grid}
                    {bars}
                    {labels}
                </svg>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(month: &str, users: f64, sales: f64, orders: f64) -> MonthlyPoint {
        MonthlyPoint {
            month: month.into(),
            total_users: users,
            total_sales: sales,
            total_orders: orders,
        }
    }

    #[test]
    fn one_bar_per_series_and_month() {
        let points = vec![point("Jan", 1.0, 10.0, 2.0), point("Feb", 0.0, 5.0, 1.0)];
        let bars = layout_bars(&points, 10.0);
        assert_eq!(bars.len(), 6);
        assert!(bars.iter().all(|b| b.x >= PAD_LEFT && b.x + b.width <= WIDTH - PAD_RIGHT));
    }

    #[test]
    fn bar_heights_scale_to_axis() {
        let bars = layout_bars(&[point("Jan", 0.0, 10.0, 5.0)], 10.0);
        assert_eq!(bars[0].height, 0.0);
        assert!((bars[1].height - plot_height()).abs() < 1e-9);
        assert!((bars[2].height - plot_height() / 2.0).abs() < 1e-9);
        assert_eq!(bars[1].y, PAD_TOP);
    }

    #[test]
    fn empty_series_has_no_bars() {
        assert!(layout_bars(&[], 1.0).is_empty());
    }
}
