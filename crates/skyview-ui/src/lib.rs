//! Skyview widget logic: presenter, view state, request orchestration and
//! the terminal renderer.

pub mod orchestrator;
pub mod presenter;
pub mod render;
pub mod state;

pub use orchestrator::RequestOrchestrator;
pub use presenter::{present, ForecastDayView, WeatherView};
pub use render::render;
pub use state::{ViewState, Visibility, WidgetState};
