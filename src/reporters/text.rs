//! Text (terminal) reporter

use crate::forecast::{DayForecast, Forecast, ForecastTarget};
use crate::models::EventLog;

/// Shown when there are too few cycles to forecast
pub const INSUFFICIENT_DATA: &str =
    "Not enough data was collected in order to make predictions about period cycle";

fn status_line(target: ForecastTarget) -> &'static str {
    match target {
        ForecastTarget::NextStart => "Period is not active",
        ForecastTarget::NextEnd => "Period is active",
    }
}

fn expectation_line(target: ForecastTarget) -> &'static str {
    match target {
        ForecastTarget::NextStart => "The start of period can be expected on:",
        ForecastTarget::NextEnd => "The end of period can be expected on:",
    }
}

/// One histogram row: `2024-01-29 12.3% ■■■■`
pub fn render_row(day: &DayForecast) -> String {
    let bar = day.bar();
    if bar.is_empty() {
        format!("{} {:.1}%", day.date, day.percent)
    } else {
        format!("{} {:.1}% {}", day.date, day.percent, bar)
    }
}

/// Render a forecast as status header plus one row per day
pub fn render_forecast(forecast: &Forecast) -> String {
    let mut out = String::new();
    out.push_str(status_line(forecast.target));
    out.push('\n');
    out.push_str(expectation_line(forecast.target));
    out.push_str("\n\n");
    for day in &forecast.days {
        out.push_str(&render_row(day));
        out.push('\n');
    }
    out
}

/// Render the event history, one `DATE start|end` line per event
pub fn render_events(log: &EventLog) -> String {
    log.events()
        .iter()
        .map(|e| format!("{} {}\n", e.date, e.kind))
        .collect()
}
