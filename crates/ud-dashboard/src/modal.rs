use ud_core::{FormField, PLACEHOLDER, User};

/// Detail modal over the user list.
///
/// Closed when nothing is selected. In edit mode the form is bound to
/// `draft`, a copy of the selected user; the list is untouched until save.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailModal {
    selected: Option<User>,
    edit_mode: bool,
    draft: Option<User>,
}

impl DetailModal {
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn is_editing(&self) -> bool {
        self.edit_mode
    }

    pub fn selected(&self) -> Option<&User> {
        self.selected.as_ref()
    }

    pub fn draft(&self) -> Option<&User> {
        self.draft.as_ref()
    }

    /// Heading: the user's name, or "Edit User" in edit mode.
    pub fn title(&self) -> Option<&str> {
        if self.edit_mode {
            return Some("Edit User");
        }
        self.selected.as_ref().map(|u| u.name.as_str())
    }

    /// Labelled read-only values below the heading, blanks shown as `-`.
    pub fn rows(&self) -> Vec<(&'static str, &str)> {
        let Some(user) = self.selected.as_ref() else {
            return Vec::new();
        };
        [
            FormField::Email,
            FormField::Phone,
            FormField::Street,
            FormField::City,
            FormField::Zip,
        ]
        .into_iter()
        .map(|field| (field.label(), display_value(user.field(field))))
        .collect()
    }

    pub(crate) fn open(&mut self, user: User) {
        self.selected = Some(user);
        self.edit_mode = false;
        self.draft = None;
    }

    pub(crate) fn open_edit(&mut self, user: User) {
        self.draft = Some(user.clone());
        self.selected = Some(user);
        self.edit_mode = true;
    }

    pub(crate) fn draft_mut(&mut self) -> Option<&mut User> {
        if self.edit_mode {
            self.draft.as_mut()
        } else {
            None
        }
    }

    pub(crate) fn take_draft(&mut self) -> Option<User> {
        if self.edit_mode {
            self.draft.take()
        } else {
            None
        }
    }

    pub(crate) fn close(&mut self) {
        *self = Self::default();
    }
}

/// Pending delete awaiting confirmation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteConfirmation {
    pending: Option<User>,
}

impl DeleteConfirmation {
    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&User> {
        self.pending.as_ref()
    }

    pub fn message(&self) -> Option<String> {
        self.pending.as_ref().map(|u| {
            format!(
                "Are you sure you want to permanently delete user: {}?",
                u.name
            )
        })
    }

    pub(crate) fn open(&mut self, user: User) {
        self.pending = Some(user);
    }

    pub(crate) fn take(&mut self) -> Option<User> {
        self.pending.take()
    }
}

fn display_value(value: &str) -> &str {
    if value.is_empty() {
        PLACEHOLDER
    } else {
        value
    }
}
