use serde::{Deserialize, Serialize};

const ICON_ROOT: &str = "/System/Library/CoreServices/CoreTypes.bundle/Contents/Resources";

/// Display hint for a result row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Web,
    Note,
    Error,
    Info,
}

impl Icon {
    /// macOS system icon used by Alfred for this hint
    pub fn path(self) -> String {
        let file = match self {
            Icon::Web => "BookmarkIcon.icns",
            Icon::Note => "AlertNoteIcon.icns",
            Icon::Error => "AlertStopIcon.icns",
            Icon::Info => "ToolbarInfo.icns",
        };
        format!("{ICON_ROOT}/{file}")
    }
}

/// One row in the launcher result list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub title: String,
    pub subtitle: String,
    /// Passed to the next workflow action when the row is actioned
    pub arg: String,
    pub valid: bool,
    pub autocomplete: Option<String>,
    pub large_type: Option<String>,
    pub icon: Icon,
}

impl DisplayItem {
    pub fn new(title: impl Into<String>, icon: Icon) -> Self {
        Self {
            title: title.into(),
            subtitle: String::new(),
            arg: String::new(),
            valid: true,
            autocomplete: None,
            large_type: None,
            icon,
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.arg = arg.into();
        self
    }

    pub fn valid(mut self, valid: bool) -> Self {
        self.valid = valid;
        self
    }

    pub fn autocomplete(mut self, autocomplete: impl Into<String>) -> Self {
        self.autocomplete = Some(autocomplete.into());
        self
    }

    pub fn large_type(mut self, text: impl Into<String>) -> Self {
        self.large_type = Some(text.into());
        self
    }
}
