//! Save/edit dialog state.

use derive_getters::Getters;
use velha_tictactoe::Winner;

use crate::GameResult;

/// What submitting the modal does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    /// Record the game that just ended.
    Create {
        /// Outcome of the finished game.
        winner: Winner,
    },
    /// Edit an existing history record.
    Update {
        /// Record being edited.
        id: i32,
    },
}

/// Input field that receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalField {
    /// Match name.
    Name,
    /// Winner text (edit dialog only).
    Winner,
}

/// Working data of an open dialog. Dropped on close.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Modal {
    kind: ModalKind,
    name_input: String,
    winner_input: String,
    focus: ModalField,
    error: Option<String>,
}

impl Modal {
    /// Dialog for saving a finished game, with an empty name.
    pub fn for_create(winner: Winner) -> Self {
        Self {
            kind: ModalKind::Create { winner },
            name_input: String::new(),
            winner_input: winner.to_string(),
            focus: ModalField::Name,
            error: None,
        }
    }

    /// Dialog for editing `record`, pre-filled with its current values.
    pub fn for_update(record: &GameResult) -> Self {
        Self {
            kind: ModalKind::Update { id: *record.id() },
            name_input: record.name().clone().unwrap_or_default(),
            winner_input: record.winner().clone(),
            focus: ModalField::Name,
            error: None,
        }
    }

    /// Heading shown above the fields.
    pub fn title(&self) -> &'static str {
        match self.kind {
            ModalKind::Create { .. } => "Save match",
            ModalKind::Update { .. } => "Edit match",
        }
    }

    /// Appends a typed character to the focused field.
    pub fn push_char(&mut self, c: char) {
        self.error = None;
        self.focused_input_mut().push(c);
    }

    /// Removes the last character of the focused field.
    pub fn backspace(&mut self) {
        self.focused_input_mut().pop();
    }

    /// Switches between name and winner. The create dialog only has a name.
    pub fn toggle_field(&mut self) {
        if let ModalKind::Update { .. } = self.kind {
            self.focus = match self.focus {
                ModalField::Name => ModalField::Winner,
                ModalField::Winner => ModalField::Name,
            };
        }
    }

    /// Shows a validation message inside the dialog.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    fn focused_input_mut(&mut self) -> &mut String {
        match self.focus {
            ModalField::Name => &mut self.name_input,
            ModalField::Winner => &mut self.winner_input,
        }
    }
}
