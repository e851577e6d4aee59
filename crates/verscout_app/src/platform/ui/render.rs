use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap};
use ratatui::Frame;
use verscout_core::{AppViewModel, ResultsView};

use super::theme::{palette, Palette};

/// Draws the whole screen from the view model. Pure with respect to state:
/// the same view model always produces the same frame.
pub fn render(f: &mut Frame, view: &AppViewModel) {
    let colors = palette(view.preference);
    let base = Style::default()
        .fg(colors.foreground)
        .bg(colors.background);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(f.area());

    let input = Paragraph::new(view.location.clone()).style(base).block(
        Block::default()
            .title("Target location")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.accent)),
    );
    f.render_widget(input, chunks[0]);

    let submit_style = if view.submit_enabled {
        Style::default()
            .fg(colors.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.muted)
    };
    let mut submit_spans = vec![Span::styled(view.submit_label, submit_style)];
    if view.busy {
        submit_spans.push(Span::styled(
            "  (request in flight)",
            Style::default().fg(colors.muted),
        ));
    }
    let submit = Paragraph::new(Line::from(submit_spans)).style(base).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(submit_style),
    );
    f.render_widget(submit, chunks[1]);

    render_results(f, view, &colors, base, chunks[2]);

    let hints = Paragraph::new("Enter: scrape | Ctrl+T: light/dark | Esc: quit")
        .style(Style::default().fg(colors.muted).bg(colors.background));
    f.render_widget(hints, chunks[3]);
}

fn render_results(
    f: &mut Frame,
    view: &AppViewModel,
    colors: &Palette,
    base: Style,
    area: ratatui::layout::Rect,
) {
    let block = Block::default().title("Results").borders(Borders::ALL);

    match &view.results {
        ResultsView::None => {
            f.render_widget(Paragraph::new("").style(base).block(block), area);
        }
        ResultsView::Table(records) => {
            let rows = records.iter().map(|record| {
                Row::new(vec![
                    Cell::from(record.version.clone()),
                    Cell::from(record.date.clone()),
                    // Rendered as received; not validated as a URL.
                    Cell::from(record.source_url.clone()).style(
                        Style::default()
                            .fg(colors.accent)
                            .add_modifier(Modifier::UNDERLINED),
                    ),
                ])
            });
            let table = Table::new(
                rows,
                [
                    Constraint::Length(14),
                    Constraint::Length(14),
                    Constraint::Min(24),
                ],
            )
            .header(
                Row::new(vec!["Version", "Date", "URL"])
                    .style(Style::default().add_modifier(Modifier::BOLD)),
            )
            .style(base)
            .block(block)
            .column_spacing(1);
            f.render_widget(table, area);
        }
        ResultsView::Empty => {
            let notice = Paragraph::new(Line::from(vec![
                Span::styled(
                    "No Data: ",
                    Style::default()
                        .fg(colors.notice)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("No data was scraped for the provided URL."),
            ]))
            .style(base)
            .wrap(Wrap { trim: true })
            .block(block.border_style(Style::default().fg(colors.notice)));
            f.render_widget(notice, area);
        }
        ResultsView::Error(message) => {
            let notice = Paragraph::new(Line::from(vec![
                Span::styled(
                    "Error: ",
                    Style::default()
                        .fg(colors.error)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(message.clone()),
            ]))
            .style(base)
            .wrap(Wrap { trim: true })
            .block(block.border_style(Style::default().fg(colors.error)));
            f.render_widget(notice, area);
        }
    }
}
