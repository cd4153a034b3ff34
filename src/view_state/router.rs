//! The five top-level views and the shared user filter.

/// A top-level screen. Exactly one is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Overview,
    Sessions,
    Logs,
    Crashes,
    Visuals,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Overview,
        View::Sessions,
        View::Logs,
        View::Crashes,
        View::Visuals,
    ];

    /// Tab label.
    pub fn label(&self) -> &'static str {
        match self {
            View::Overview => "Overview",
            View::Sessions => "Sessions",
            View::Logs => "Logs",
            View::Crashes => "Crashes",
            View::Visuals => "Visuals",
        }
    }

    /// Header title.
    pub fn title(&self) -> &'static str {
        match self {
            View::Visuals => "Visualizations",
            other => other.label(),
        }
    }

    /// Header subtitle.
    pub fn subtitle(&self) -> &'static str {
        match self {
            View::Overview => "System summary & latest activity.",
            View::Sessions => "Browse tracked sessions across users.",
            View::Logs => "Review stored logs across users.",
            View::Crashes => "Search, filter, group & export crash events.",
            View::Visuals => "Charts & trends for sessions and crashes.",
        }
    }

    /// Whether the shared user filter applies to this view.
    pub fn uses_user_filter(&self) -> bool {
        matches!(self, View::Sessions | View::Logs | View::Crashes)
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|v| v == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<View> {
        Self::ALL.get(index).copied()
    }

    pub fn next(&self) -> View {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> View {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// The user selector shared by Sessions, Logs and Crashes.
///
/// An empty value means "All Users".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    value: String,
    visible: bool,
    options: Vec<String>,
}

impl UserFilter {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Label for the current value.
    pub fn display(&self) -> &str {
        if self.value.is_empty() {
            "All Users"
        } else {
            &self.value
        }
    }

    /// Replace the known users. A selected user that disappeared is kept;
    /// the operator chose it and the server decides what it matches.
    pub fn set_options(&mut self, users: Vec<String>) {
        self.options = users;
    }

    pub fn select(&mut self, user: impl Into<String>) {
        self.value = user.into();
    }

    pub fn reset(&mut self) {
        self.value.clear();
    }

    /// Step through "All Users" and then each known user, wrapping around.
    pub fn cycle(&mut self, forward: bool) {
        let slots = self.options.len() + 1;
        let current = if self.value.is_empty() {
            0
        } else {
            self.options
                .iter()
                .position(|u| *u == self.value)
                .map(|i| i + 1)
                .unwrap_or(0)
        };
        let next = if forward {
            (current + 1) % slots
        } else {
            (current + slots - 1) % slots
        };
        self.value = match next {
            0 => String::new(),
            i => self.options[i - 1].clone(),
        };
    }

    fn show(&mut self, visible: bool) {
        self.visible = visible;
        if !visible {
            self.reset();
        }
    }
}

/// Finite state machine over [`View`].
#[derive(Debug, Default)]
pub struct Router {
    current: View,
    user_filter: UserFilter,
}

impl Router {
    pub fn new() -> Self {
        let mut router = Self::default();
        router.user_filter.show(router.current.uses_user_filter());
        router
    }

    pub fn current(&self) -> View {
        self.current
    }

    pub fn user_filter(&self) -> &UserFilter {
        &self.user_filter
    }

    pub fn user_filter_mut(&mut self) -> &mut UserFilter {
        &mut self.user_filter
    }

    /// Current user scope; always empty on views without the filter.
    pub fn user(&self) -> &str {
        self.user_filter.value()
    }

    /// Switch to `view`, returning the view that was current before.
    ///
    /// Re-entering the current view is allowed and behaves like any other
    /// transition. The user filter is shown for per-user views and hidden
    /// and cleared for the others.
    pub fn navigate(&mut self, view: View) -> View {
        let previous = self.current;
        self.current = view;
        self.user_filter.show(view.uses_user_filter());
        tracing::info!(from = ?previous, to = ?view, "navigate");
        previous
    }
}
