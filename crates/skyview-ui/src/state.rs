use crate::presenter::WeatherView;

/// What the results area shows. Exactly one variant at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    /// Nothing requested yet
    #[default]
    Idle,
    Loading,
    Error(String),
    Content(WeatherView),
}

/// Which of the three result regions are visible
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Visibility {
    pub loading: bool,
    pub error: bool,
    pub content: bool,
}

impl Visibility {
    pub fn visible_count(&self) -> usize {
        [self.loading, self.error, self.content]
            .iter()
            .filter(|shown| **shown)
            .count()
    }
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn content(&self) -> Option<&WeatherView> {
        match self {
            Self::Content(view) => Some(view),
            _ => None,
        }
    }

    pub fn visibility(&self) -> Visibility {
        Visibility {
            loading: self.is_loading(),
            error: self.error_message().is_some(),
            content: self.content().is_some(),
        }
    }
}

/// Whole widget: results area plus the search box text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetState {
    pub view: ViewState,
    pub search_input: String,
}
