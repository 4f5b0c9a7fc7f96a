//! Stateless UI rendering and mouse hit-testing.
//!
//! [`ScreenLayout`] is the single source of truth for where things are
//! drawn, so a click lands on the cell the player sees.

use ratatui::{
    Frame,
    layout::{self, Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe::{Cell, GameState, GameStatus, Player, Position};

use crate::app::App;
use crate::config::Theme;

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;
const RESET_LABEL: &str = "New game";

/// Something on screen a click can hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A board cell.
    Cell(Position),
    /// The new-game button.
    Reset,
}

/// Screen regions for a given terminal area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// The whole 3x3 grid including separators.
    pub board: Rect,
    /// Cell rectangles, indexed by [`Position::to_index`].
    pub cells: [Rect; 9],
    /// Turn indicator / winner banner.
    pub status: Rect,
    /// New-game button.
    pub reset_button: Rect,
    /// Key help line.
    pub help: Rect,
}

impl ScreenLayout {
    /// Splits `area` into the screen regions.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),            // Title
                Constraint::Min(BOARD_HEIGHT),    // Board
                Constraint::Length(3),            // Status
                Constraint::Length(3),            // New game
                Constraint::Length(1),            // Help
            ])
            .split(area);

        let board = center_rect(chunks[1], BOARD_WIDTH, BOARD_HEIGHT);
        let cells = Position::ALL.map(|pos| {
            Rect::new(
                board.x + pos.col() as u16 * (CELL_WIDTH + 1),
                board.y + pos.row() as u16 * (CELL_HEIGHT + 1),
                CELL_WIDTH,
                CELL_HEIGHT,
            )
            .intersection(board)
        });

        Self {
            title: chunks[0],
            board,
            cells,
            status: chunks[2],
            reset_button: center_rect(chunks[3], RESET_LABEL.len() as u16 + 4, 3),
            help: chunks[4],
        }
    }

    /// Returns what sits under terminal cell `(column, row)`.
    pub fn hit(&self, column: u16, row: u16) -> Option<Target> {
        let point = layout::Position::new(column, row);

        if let Some(pos) = Position::ALL
            .into_iter()
            .find(|pos| self.cells[pos.to_index()].contains(point))
        {
            return Some(Target::Cell(pos));
        }

        self.reset_button.contains(point).then_some(Target::Reset)
    }
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App, theme: &Theme) {
    let layout = ScreenLayout::new(frame.area());
    let game = app.game();

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, layout.title);

    draw_board(frame, &layout, game, app.cursor(), theme);

    let status = Paragraph::new(game.banner())
        .style(banner_style(game, theme))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, layout.status);

    let reset = Paragraph::new(RESET_LABEL)
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(reset, layout.reset_button);

    if theme.show_help {
        let help = Paragraph::new("Click or 1-9 | Arrows + Enter | R: New game | Q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(help, layout.help);
    }
}

fn draw_board(
    frame: &mut Frame,
    layout: &ScreenLayout,
    game: &GameState,
    cursor: Position,
    theme: &Theme,
) {
    let board = layout.board;
    for sep_row in [CELL_HEIGHT, CELL_HEIGHT * 2 + 1] {
        let area = Rect::new(board.x, board.y + sep_row, board.width, 1).intersection(board);
        draw_separator(frame, area);
    }

    let winning = game.winning_line();
    for pos in Position::ALL {
        let highlighted = winning.is_some_and(|line| line.contains(&pos));
        let selected = pos == cursor && !game.is_over();
        draw_cell(
            frame,
            layout.cells[pos.to_index()],
            game.board().get(pos),
            pos,
            selected,
            highlighted,
            theme,
        );

        if pos.col() < 2 {
            let cell = layout.cells[pos.to_index()];
            let area =
                Rect::new(cell.x + CELL_WIDTH, cell.y, 1, CELL_HEIGHT).intersection(board);
            draw_separator_vertical(frame, area);
        }
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    cell: Cell,
    pos: Position,
    selected: bool,
    highlighted: bool,
    theme: &Theme,
) {
    let (symbol, base_style) = match cell {
        Cell::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Occupied(player) => (player.to_string(), mark_style(player, theme)),
    };

    let style = if selected {
        base_style.bg(Color::White).fg(Color::Black)
    } else if highlighted {
        base_style.bg(Color::Green)
    } else {
        base_style
    };

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(symbol, style)),
        Line::from(""),
    ];
    let paragraph = Paragraph::new(text)
        .style(Style::default().bg(style.bg.unwrap_or(Color::Reset)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn mark_style(player: Player, theme: &Theme) -> Style {
    let color = match player {
        Player::X => theme.x,
        Player::O => theme.o,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn banner_style(game: &GameState, theme: &Theme) -> Style {
    match game.status() {
        GameStatus::Won(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        GameStatus::Drawn => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        GameStatus::InProgress => mark_style(game.current_player(), theme),
    }
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let line = ["─"; 3]
        .map(|s| s.repeat(CELL_WIDTH as usize))
        .join("┼");
    let sep = Paragraph::new(line).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); CELL_HEIGHT as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> ScreenLayout {
        ScreenLayout::new(Rect::new(0, 0, 80, 30))
    }

    #[test]
    fn test_board_is_centered_and_full_size() {
        let layout = layout();
        assert_eq!(layout.board.width, BOARD_WIDTH);
        assert_eq!(layout.board.height, BOARD_HEIGHT);
        assert_eq!(layout.board.x, (80 - BOARD_WIDTH) / 2);
    }

    #[test]
    fn test_cells_do_not_overlap() {
        let layout = layout();
        for a in Position::ALL {
            for b in Position::ALL {
                if a != b {
                    assert!(!layout.cells[a.to_index()].intersects(layout.cells[b.to_index()]));
                }
            }
        }
    }

    #[test]
    fn test_hit_every_cell_center() {
        let layout = layout();
        for pos in Position::ALL {
            let cell = layout.cells[pos.to_index()];
            let hit = layout.hit(cell.x + cell.width / 2, cell.y + cell.height / 2);
            assert_eq!(hit, Some(Target::Cell(pos)));
        }
    }

    #[test]
    fn test_hit_separator_is_nothing() {
        let layout = layout();
        let cell = layout.cells[Position::TopLeft.to_index()];
        assert_eq!(layout.hit(cell.x + CELL_WIDTH, cell.y), None);
        assert_eq!(layout.hit(cell.x, cell.y + CELL_HEIGHT), None);
    }

    #[test]
    fn test_hit_reset_button() {
        let layout = layout();
        let button = layout.reset_button;
        assert_eq!(layout.hit(button.x + 1, button.y + 1), Some(Target::Reset));
    }

    #[test]
    fn test_hit_outside_everything() {
        assert_eq!(layout().hit(0, 0), None);
    }
}
