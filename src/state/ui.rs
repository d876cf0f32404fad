//! Local UI chrome state (active section, backend status).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state so navigation
//! can evolve independently of the pages it switches between.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Workspace sections reachable from the sidebar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    CodeRunner,
    ApiCaller,
    AiChat,
    Dashboard,
    Settings,
}

impl Section {
    pub const ALL: [Self; 5] = [Self::CodeRunner, Self::ApiCaller, Self::AiChat, Self::Dashboard, Self::Settings];

    pub fn label(self) -> &'static str {
        match self {
            Self::CodeRunner => "Code Runner",
            Self::ApiCaller => "API Caller",
            Self::AiChat => "AI Chat",
            Self::Dashboard => "Dashboard",
            Self::Settings => "Settings",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::CodeRunner => "</>",
            Self::ApiCaller => "⚡",
            Self::AiChat => "🤖",
            Self::Dashboard => "▦",
            Self::Settings => "⚙",
        }
    }
}

/// Result of the startup `GET /health` probe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackendStatus {
    #[default]
    Unknown,
    Online,
    Offline,
}

impl BackendStatus {
    pub fn from_probe(ok: bool) -> Self {
        if ok { Self::Online } else { Self::Offline }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Unknown => "Checking backend…",
            Self::Online => "Backend online",
            Self::Offline => "Backend offline",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub section: Section,
    pub backend: BackendStatus,
}
