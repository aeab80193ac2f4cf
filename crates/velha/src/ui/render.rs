//! Stateless rendering of the client screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};
use velha_tictactoe::{Board, Mark, Position, Square};

use super::app::{App, Focus};
use super::modal::{Modal, ModalField, ModalKind};

/// Draws the whole screen for the current state.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Scoreboard
            Constraint::Length(3), // Status
            Constraint::Min(13),   // Board + history
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Velha - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let scores = app.scores();
    let scoreboard = Paragraph::new(format!(
        "X: {} wins    O: {} wins",
        scores.x_wins(),
        scores.o_wins()
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Score"));
    frame.render_widget(scoreboard, chunks[1]);

    let over = app.game().status().is_terminal();
    let status_style = if over {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(app.status_line())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[3]);
    draw_board_pane(frame, panes[0], app);
    draw_history(frame, panes[1], app);

    let help = if over {
        "n: New game | Tab: History | e: Edit | d: Delete | r: Refresh | q: Quit"
    } else {
        "Arrows/1-9: Move | Enter: Play | Tab: History | e: Edit | d: Delete | q: Quit"
    };
    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[4]);

    if let Some(modal) = app.modal() {
        draw_modal(frame, modal);
    } else if app.pending_delete().is_some() {
        draw_delete_prompt(frame);
    }
}

fn pane_block(title: &str, focused: bool) -> Block<'_> {
    let style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title)
}

fn draw_board_pane(frame: &mut Frame, area: Rect, app: &App) {
    let block = pane_block("Board", app.focus() == Focus::Board);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cursor = (app.focus() == Focus::Board).then_some(app.cursor());
    draw_board(frame, inner, app.game().board(), cursor);
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Option<Position>) {
    let board_area = center_rect(area, 38, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, positions) in Position::ALL.chunks(3).enumerate() {
        draw_row(frame, rows[row * 2], board, cursor, positions);
        if row < 2 {
            let sep = Paragraph::new("──────────────────────────────────────")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, board: &Board, cursor: Option<Position>, positions: &[Position]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (col, pos) in positions.iter().enumerate() {
        draw_cell(frame, cols[col * 2], board, cursor, *pos);
        if col < 2 {
            let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, board: &Board, cursor: Option<Position>, pos: Position) {
    let hint = format!(" {} ", pos.to_index() + 1);
    let (symbol, base_style) = match board.get(pos) {
        Square::Empty => (hint, Style::default().fg(Color::DarkGray)),
        Square::Occupied(Mark::X) => (
            " X ".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Mark::O) => (
            " O ".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if cursor == Some(pos) {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App) {
    let block = pane_block("Match history", app.focus() == Focus::History);

    if app.history().is_empty() {
        let empty = Paragraph::new("No games saved yet.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .history()
        .iter()
        .map(|record| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    record.display_name().to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(" (Winner: {})", record.winner())),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut list_state = app.list_state().clone();
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_modal(frame: &mut Frame, modal: &Modal) {
    let area = center_rect(frame.area(), 52, 11);
    frame.render_widget(Clear, area);

    let field_style = |field: ModalField| {
        if *modal.focus() == field {
            Style::default().fg(Color::White).add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        }
    };

    let winner_line = match modal.kind() {
        ModalKind::Create { winner } => Line::from(vec![
            Span::raw("Winner: "),
            Span::styled(winner.to_string(), Style::default().add_modifier(Modifier::BOLD)),
        ]),
        ModalKind::Update { .. } => Line::from(vec![
            Span::raw("Winner: "),
            Span::styled(modal.winner_input().clone(), field_style(ModalField::Winner)),
        ]),
    };

    let name_text = if modal.name_input().is_empty() && *modal.focus() != ModalField::Name {
        "Ex: Amanda vs. Bot".to_string()
    } else {
        modal.name_input().clone()
    };

    let mut lines = vec![
        winner_line,
        Line::from(""),
        Line::from(vec![
            Span::raw("Match name: "),
            Span::styled(name_text, field_style(ModalField::Name)),
        ]),
        Line::from(""),
    ];
    if let Some(error) = modal.error() {
        lines.push(Line::styled(error.clone(), Style::default().fg(Color::Red)));
    }
    let help = match modal.kind() {
        ModalKind::Create { .. } => "Enter: Save | Esc: Cancel",
        ModalKind::Update { .. } => "Enter: Save | Tab: Switch field | Esc: Cancel",
    };
    lines.push(Line::styled(help, Style::default().fg(Color::DarkGray)));

    let dialog = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(modal.title())
            .style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(dialog, area);
}

fn draw_delete_prompt(frame: &mut Frame) {
    let area = center_rect(frame.area(), 44, 5);
    frame.render_widget(Clear, area);
    let prompt = Paragraph::new("Delete this match? (y/n)")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).title("Confirm"));
    frame.render_widget(prompt, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
