//! Terminal adapter: state in, text out.

use std::fmt::Write;

use crate::presenter::{WeatherView, TEMPERATURE_UNIT};
use crate::state::ViewState;

pub const LOADING_TEXT: &str = "Loading weather...";

/// Render the results area for `state`.
pub fn render(state: &ViewState) -> String {
    match state {
        ViewState::Idle => String::new(),
        ViewState::Loading => format!("{}\n", LOADING_TEXT),
        ViewState::Error(message) => format!("! {}\n", message),
        ViewState::Content(view) => render_content(view),
    }
}

fn render_content(view: &WeatherView) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "{}", view.name);
    let _ = writeln!(out, "{}", view.local_time);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "  {}{}  {} [{}]",
        view.temperature, TEMPERATURE_UNIT, view.description, view.icon
    );
    let _ = writeln!(out, "  {}", view.feels_like);
    let _ = writeln!(out);
    let _ = writeln!(out, "  Humidity     {}", view.humidity);
    let _ = writeln!(out, "  Wind         {}", view.wind);
    let _ = writeln!(out, "  Pressure     {}", view.pressure);
    let _ = writeln!(out, "  Visibility   {}", view.visibility);
    let _ = writeln!(out, "  Precipitation {}", view.precipitation);

    if !view.forecast.is_empty() {
        let _ = writeln!(out);
        for day in &view.forecast {
            let _ = writeln!(
                out,
                "  {:<4} {:>4}° {:>4}°  {}",
                day.weekday, day.high, day.low, day.description
            );
        }
    }

    out
}
