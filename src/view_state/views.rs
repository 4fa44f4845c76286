//! View state for the blog list, health panel and login screen.

use std::sync::Arc;

use crate::health::HealthRecord;
use crate::models::Post;

use super::{LoadFailure, MenuCursor, StatusLine};

/// Blog list. Posts are replaced on every successful load and cleared on
/// failure.
#[derive(Debug, Clone, Default)]
pub struct BlogView {
    pub posts: Vec<Arc<Post>>,
    pub loading: bool,
    pub error: Option<LoadFailure>,
    pub cursor: MenuCursor,
}

impl BlogView {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn selected(&self) -> Option<&Arc<Post>> {
        self.posts.get(self.cursor.index)
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

/// Rows of the health panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HealthField {
    #[default]
    Steps,
    Weight,
    Water,
    Sleep,
}

impl HealthField {
    pub const ALL: [HealthField; 4] = [
        HealthField::Steps,
        HealthField::Weight,
        HealthField::Water,
        HealthField::Sleep,
    ];

    pub fn title(self) -> &'static str {
        match self {
            HealthField::Steps => "Mai lépések",
            HealthField::Weight => "Súly",
            HealthField::Water => "Vízbevitel",
            HealthField::Sleep => "Alvás",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            HealthField::Steps => "Enter: lépésszám megadása",
            HealthField::Weight => "Enter: súly megadása (kg)",
            HealthField::Water => "Enter: +0.25 L",
            HealthField::Sleep => "Enter: alvás megadása (óra)",
        }
    }

    /// Water is a button; the others take typed input.
    pub fn is_editable(self) -> bool {
        !matches!(self, HealthField::Water)
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct HealthView {
    pub record: HealthRecord,
    pub field: HealthField,
    /// Text being typed for `field`, when editing
    pub input: Option<String>,
    pub message: Option<StatusLine>,
}

impl HealthView {
    pub fn is_editing(&self) -> bool {
        self.input.is_some()
    }

    pub fn select_next(&mut self, delta: isize) {
        let mut cursor = MenuCursor {
            index: self.field.index(),
        };
        cursor.move_by(delta, HealthField::ALL.len());
        self.field = HealthField::ALL[cursor.index];
    }
}

/// URL paste box on the login screen.
#[derive(Debug, Clone, Default)]
pub struct LoginView {
    pub input: String,
    pub message: Option<StatusLine>,
    /// Whether the login page was handed to the browser this visit
    pub browser_opened: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_field_cycle_stops_at_ends() {
        let mut view = HealthView::default();
        view.select_next(-1);
        assert_eq!(view.field, HealthField::Steps);
        view.select_next(2);
        assert_eq!(view.field, HealthField::Water);
        view.select_next(5);
        assert_eq!(view.field, HealthField::Sleep);
    }
}
