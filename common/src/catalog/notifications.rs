use crate::model::penguin::Penguin;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
    Info,
}

/// A transient status message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }

    /// Worded from the flag's value *before* the toggle.
    pub(crate) fn favorite_toggled(penguin: &Penguin) -> Self {
        let direction = if penguin.is_favorite {
            "removed from"
        } else {
            "added to"
        };
        Self::success(format!("{} {} favorites!", penguin.species, direction))
    }

    pub(crate) fn favorite_failed() -> Self {
        Self::error("Failed to update favorite")
    }

    pub(crate) fn saved(updated: bool) -> Self {
        if updated {
            Self::success("Penguin updated successfully!")
        } else {
            Self::success("Penguin added successfully!")
        }
    }

    pub(crate) fn save_failed() -> Self {
        Self::error("Failed to save penguin")
    }

    pub(crate) fn delete_unavailable() -> Self {
        Self::info("Delete functionality not implemented in entity system")
    }
}

/// Text of the delete confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePrompt {
    pub title: &'static str,
    pub content: String,
}

impl DeletePrompt {
    pub fn for_penguin(penguin: &Penguin) -> Self {
        Self {
            title: "Delete Penguin",
            content: format!("Are you sure you want to delete {}?", penguin.species),
        }
    }
}
