use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table},
};

use crate::tui::app::App;
use crate::tui::constants::URL_TRUNCATE_LENGTH;

pub fn draw_main_screen(frame: &mut Frame, app: &mut App, area: Rect) {
    if app.links.is_empty() {
        let empty_text = vec![
            Line::from(""),
            Line::from(""),
            Line::from(vec![Span::styled(
                "No links yet",
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::DarkGray)),
                Span::styled("a", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                Span::styled(" to add your first link", Style::default().fg(Color::DarkGray)),
            ]),
        ];

        let empty = Paragraph::new(empty_text)
            .block(
                Block::default()
                    .title("Links")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            )
            .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from(Span::styled(
            "Slug",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Cell::from(Span::styled(
            "Destination",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .height(1);

    let rows: Vec<Row> = app
        .links
        .values()
        .map(|link| {
            Row::new(vec![
                Cell::from(Span::styled(
                    format!("/{}", link.slug),
                    Style::default().fg(Color::Cyan),
                )),
                Cell::from(truncate_url(&link.url)),
            ])
        })
        .collect();

    let table = Table::new(rows, [Constraint::Length(24), Constraint::Min(20)])
        .header(header)
        .block(
            Block::default()
                .title(format!("Links ({})", app.links.len()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .row_highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White))
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(table, area, &mut app.table_state);
}

fn truncate_url(url: &str) -> String {
    if url.chars().count() > URL_TRUNCATE_LENGTH {
        let truncated: String = url.chars().take(URL_TRUNCATE_LENGTH).collect();
        format!("{}…", truncated)
    } else {
        url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_url() {
        assert_eq!(truncate_url("https://a.com"), "https://a.com");

        let long = format!("https://example.com/{}", "x".repeat(60));
        let shown = truncate_url(&long);
        assert!(shown.ends_with('…'));
        assert_eq!(shown.chars().count(), URL_TRUNCATE_LENGTH + 1);
    }
}
