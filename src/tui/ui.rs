//! Stateless UI rendering.

use prime_duel::{CellView, PhaseKind, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::App;

/// Renders the whole screen for the current phase.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Body
            Constraint::Length(3), // Status
        ])
        .split(area);

    let title = Paragraph::new("Prime Duel")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    match app.view().phase {
        PhaseKind::Setup => draw_setup(frame, chunks[1], app),
        PhaseKind::Playing => draw_playing(frame, chunks[1], app),
        PhaseKind::Over => draw_over(frame, chunks[1], app),
    }

    let status = Paragraph::new(app.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);
}

fn draw_setup(frame: &mut Frame, area: Rect, app: &App) {
    let form = center_rect(area, 40, 8);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Length(2)])
        .split(form);

    for (row, player) in [(rows[0], Player::One), (rows[1], Player::Two)] {
        let focused = app.focus() == player;
        let style = if focused {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let text = app.name_inputs()[player].as_str();
        let shown = if text.is_empty() && !focused {
            player.default_name()
        } else {
            text
        };
        let input = Paragraph::new(shown).style(style).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} name", player)),
        );
        frame.render_widget(input, row);
    }

    let hint = Paragraph::new("Tab: switch field   Enter: start   Esc: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(hint, rows[2]);
}

fn draw_playing(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.view();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5), Constraint::Length(1)])
        .split(area);

    let scoreboard = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(30),
            Constraint::Percentage(35),
        ])
        .split(chunks[0]);

    for (slot, player) in [(scoreboard[0], Player::One), (scoreboard[2], Player::Two)] {
        let active = view.current_player == player;
        let color = player_color(player);
        let mut block = Block::default().borders(Borders::ALL).title(view.names[player].as_str());
        if active {
            block = block.border_style(Style::default().fg(color).add_modifier(Modifier::BOLD));
        }
        let score = Paragraph::new(view.scores[player].to_string())
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(score, slot);
    }

    let timer_style = if view.time_left <= 5 {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let timer = Paragraph::new(Line::from(vec![
        Span::styled(format!("{}s", view.time_left), timer_style),
        Span::raw("  "),
        Span::raw(view.turn_banner()),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Clock"));
    frame.render_widget(timer, scoreboard[1]);

    draw_grid(frame, chunks[1], app);

    let hint = Paragraph::new("Arrows: move   Enter/Space: pick   e: end   r: reset   q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(hint, chunks[2]);
}

fn draw_grid(frame: &mut Frame, area: Rect, app: &App) {
    let cells = &app.view().cells;
    let columns = app.columns();
    let rows = cells.len().div_ceil(columns);
    if rows == 0 {
        return;
    }

    let width = u16::try_from(columns).unwrap_or(u16::MAX).saturating_mul(9);
    let height = u16::try_from(rows).unwrap_or(u16::MAX).saturating_mul(3);
    let grid_area = center_rect(area, width, height);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(3); rows])
        .split(grid_area);

    for (row, row_area) in row_areas.iter().enumerate() {
        let col_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Length(9); columns])
            .split(*row_area);

        for (col, cell_area) in col_areas.iter().enumerate() {
            let index = row * columns + col;
            if let Some(cell) = cells.get(index) {
                draw_cell(frame, *cell_area, cell, index == app.cursor());
            }
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: &CellView, under_cursor: bool) {
    let base = match cell.correct {
        None => Style::default().fg(Color::White),
        Some(true) => Style::default().fg(Color::Green),
        Some(false) => Style::default().fg(Color::Red),
    };
    let style = if under_cursor {
        base.add_modifier(Modifier::REVERSED | Modifier::BOLD)
    } else {
        base
    };

    let border = match cell.owner {
        Some(player) => Style::default().fg(player_color(player)),
        None => Style::default().fg(Color::DarkGray),
    };

    let paragraph = Paragraph::new(Span::styled(cell.value.to_string(), style))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(paragraph, area);
}

fn draw_over(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.view();
    let Some(report) = &view.report else {
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            report.announcement(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for player in Player::ALL {
        let mut name_style = Style::default().fg(player_color(player));
        if report.outcome.is_winner(player) {
            name_style = name_style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        lines.push(Line::from(vec![
            Span::styled(format!("{:<16}", report.names[player]), name_style),
            Span::raw(report.scores[player].to_string()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(format!(
        "{} of {} cells picked",
        view.selected_count(),
        view.cells.len()
    )));

    let summary = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Game Over"));
    frame.render_widget(summary, center_rect(area, 40, 9));
}

fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Blue,
    }
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
