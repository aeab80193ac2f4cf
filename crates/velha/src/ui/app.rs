//! Application state and logic for the terminal client.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::widgets::ListState;
use tracing::{debug, info, instrument, warn};
use velha_tictactoe::{Game, GameStatus, PlaceError, Position, Winner};

use super::input::move_cursor;
use super::modal::{Modal, ModalKind};
use crate::api::{CreateGameRequest, UpdateGameRequest};
use crate::client::MatchStore;
use crate::{DEFAULT_MATCH_NAME, GameResult, Scoreboard};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Cursor moves over the board.
    Board,
    /// Cursor moves over the history list.
    History,
}

/// Whole client state, passed explicitly through every operation.
#[derive(Debug)]
pub struct App {
    game: Game,
    cursor: Position,
    focus: Focus,
    history: Vec<GameResult>,
    list_state: ListState,
    modal: Option<Modal>,
    pending_delete: Option<i32>,
    should_quit: bool,
}

impl App {
    /// Creates a client with a fresh game and an empty history.
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            history: Vec::new(),
            list_state: ListState::default(),
            modal: None,
            pending_delete: None,
            should_quit: false,
        }
    }

    /// Current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// History as last fetched from the server.
    pub fn history(&self) -> &[GameResult] {
        &self.history
    }

    /// Selection state of the history list.
    pub fn list_state(&self) -> &ListState {
        &self.list_state
    }

    /// Open dialog, if any.
    pub fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    /// Record awaiting delete confirmation.
    pub fn pending_delete(&self) -> Option<i32> {
        self.pending_delete
    }

    /// True once the player asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Win tally, recomputed from the fetched history.
    pub fn scores(&self) -> Scoreboard {
        Scoreboard::tally(&self.history)
    }

    /// Status line for the board.
    pub fn status_line(&self) -> String {
        match self.game.status() {
            GameStatus::Won(mark) => format!("Winner: {}", mark),
            GameStatus::Draw => "Draw!".to_string(),
            GameStatus::InProgress => format!("Next player: {}", self.game.to_move()),
        }
    }

    /// Record currently highlighted in the history list.
    pub fn selected_record(&self) -> Option<&GameResult> {
        self.list_state.selected().and_then(|i| self.history.get(i))
    }

    /// Plays the current mark at `pos`.
    ///
    /// A move that ends the game opens the save dialog for the outcome.
    #[instrument(skip(self))]
    pub fn select_cell(&mut self, pos: Position) -> Result<GameStatus, PlaceError> {
        let status = self.game.place(pos)?;
        self.cursor = pos;

        if let Some(winner) = Winner::from_status(status) {
            info!(%winner, "Game finished");
            self.open_create_modal(winner);
        }
        Ok(status)
    }

    /// Starts a new game with an empty board and X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting game");
        self.game.reset();
        self.cursor = Position::Center;
    }

    fn open_create_modal(&mut self, winner: Winner) {
        self.pending_delete = None;
        self.modal = Some(Modal::for_create(winner));
    }

    /// Opens the edit dialog for the highlighted history record.
    #[instrument(skip(self))]
    pub fn open_edit_modal(&mut self) {
        if let Some(record) = self.selected_record() {
            debug!(id = record.id(), "Opening edit dialog");
            self.modal = Some(Modal::for_update(record));
        }
    }

    /// Closes the dialog and discards its inputs.
    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Submits the open dialog, then closes it and re-fetches history.
    ///
    /// Server failures are logged only. An edit with an unrecognised winner
    /// keeps the dialog open with a message instead of calling the server.
    #[instrument(skip(self, store))]
    pub async fn submit_modal(&mut self, store: &dyn MatchStore) {
        let Some(modal) = self.modal.as_mut() else {
            return;
        };

        match *modal.kind() {
            ModalKind::Create { winner } => {
                let name = if modal.name_input().is_empty() {
                    DEFAULT_MATCH_NAME.to_string()
                } else {
                    modal.name_input().clone()
                };
                let request = CreateGameRequest {
                    winner,
                    name: Some(name),
                };
                if let Err(e) = store.create(request).await {
                    warn!(error = %e, "Failed to save game");
                }
            }
            ModalKind::Update { id } => {
                let winner = match modal.winner_input().parse::<Winner>() {
                    Ok(winner) => winner,
                    Err(e) => {
                        debug!(error = %e, "Edit rejected locally");
                        modal.set_error("Winner must be X, O or Empate");
                        return;
                    }
                };
                let request = UpdateGameRequest {
                    winner: Some(winner),
                    name: Some(Some(modal.name_input().clone())),
                };
                if let Err(e) = store.update(id, request).await {
                    warn!(error = %e, id, "Failed to update game");
                }
            }
        }

        self.close_modal();
        self.refresh_history(store).await;
    }

    /// Asks for confirmation before deleting the highlighted record.
    pub fn request_delete(&mut self) {
        self.pending_delete = self.selected_record().map(|r| *r.id());
    }

    /// Abandons a pending delete.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Deletes the confirmed record, then re-fetches history.
    #[instrument(skip(self, store))]
    pub async fn confirm_delete(&mut self, store: &dyn MatchStore) {
        let Some(id) = self.pending_delete.take() else {
            return;
        };
        if let Err(e) = store.delete(id).await {
            warn!(error = %e, id, "Failed to delete game");
        }
        self.refresh_history(store).await;
    }

    /// Replaces the history with the server's current list.
    ///
    /// On failure the previous list stays on screen.
    #[instrument(skip(self, store))]
    pub async fn refresh_history(&mut self, store: &dyn MatchStore) {
        match store.list().await {
            Ok(history) => {
                debug!(count = history.len(), "History refreshed");
                self.history = history;
                self.clamp_selection();
            }
            Err(e) => warn!(error = %e, "Failed to fetch history"),
        }
    }

    fn clamp_selection(&mut self) {
        let selected = match (self.list_state.selected(), self.history.len()) {
            (_, 0) => None,
            (Some(i), len) => Some(i.min(len - 1)),
            (None, _) => Some(0),
        };
        self.list_state.select(selected);
    }

    fn select_previous(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => self.history.len() - 1,
        };
        self.list_state.select(Some(i));
    }

    fn select_next(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.history.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Routes a key press to the dialog, the delete prompt, or the panes.
    #[instrument(skip(self, key, store), fields(code = ?key.code))]
    pub async fn handle_key(&mut self, key: KeyEvent, store: &dyn MatchStore) {
        if let Some(modal) = self.modal.as_mut() {
            match key.code {
                KeyCode::Esc => self.close_modal(),
                KeyCode::Enter => self.submit_modal(store).await,
                KeyCode::Tab => modal.toggle_field(),
                KeyCode::Backspace => modal.backspace(),
                KeyCode::Char(c) => modal.push_char(c),
                _ => {}
            }
            return;
        }

        if self.pending_delete.is_some() {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    self.confirm_delete(store).await
                }
                _ => self.cancel_delete(),
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Char('r') | KeyCode::Char('R') => self.refresh_history(store).await,
            KeyCode::Char('n') | KeyCode::Char('N') if self.game.status().is_terminal() => {
                self.reset()
            }
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Board => Focus::History,
                    Focus::History => Focus::Board,
                };
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = Position::from_key(c) {
                    self.place_logged(pos);
                }
            }
            code => match self.focus {
                Focus::Board => match code {
                    KeyCode::Enter | KeyCode::Char(' ') => self.place_logged(self.cursor),
                    other => self.cursor = move_cursor(self.cursor, other),
                },
                Focus::History => match code {
                    KeyCode::Up => self.select_previous(),
                    KeyCode::Down => self.select_next(),
                    KeyCode::Char('e') | KeyCode::Char('E') | KeyCode::Enter => {
                        self.open_edit_modal()
                    }
                    KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => {
                        self.request_delete()
                    }
                    _ => {}
                },
            },
        }
    }

    fn place_logged(&mut self, pos: Position) {
        if let Err(e) = self.select_cell(pos) {
            debug!(error = %e, "Move ignored");
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
