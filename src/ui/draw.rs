use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame
};

use super::app::{App, DialogKind, Focus, Phase, EXAMPLE_KEYWORDS, INSTRUCTIONS, PLACEHOLDER};

const TITLE: &str = "arXiv Search";

impl App {
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let outer = Block::default().title(TITLE).borders(Borders::ALL);
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let categories = u16::try_from(self.config().categories.len()).unwrap_or(u16::MAX);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),              // instructions
                Constraint::Length(2),              // example keywords
                Constraint::Length(3),              // keyword input
                Constraint::Length(categories.saturating_add(2)), // checkboxes
                Constraint::Length(1),              // search button
                Constraint::Min(0),
                Constraint::Length(1),              // status line
            ])
            .split(inner);

        frame.render_widget(Paragraph::new(INSTRUCTIONS).wrap(Wrap { trim: true }), chunks[0]);
        frame.render_widget(
            Paragraph::new(EXAMPLE_KEYWORDS)
                .style(Style::default().fg(Color::DarkGray))
                .wrap(Wrap { trim: true }),
            chunks[1]
        );
        self.render_input(frame, chunks[2]);
        self.render_categories(frame, chunks[3]);
        self.render_button(frame, chunks[4]);
        self.render_status(frame, chunks[6]);

        if let Some(dialog) = &self.dialog {
            let color = match dialog.kind {
                DialogKind::Warning => Color::Yellow,
                DialogKind::Information => Color::Cyan
            };
            let popup = centered_rect(60, 40, area);
            let block = Block::default()
                .title(dialog.title.as_str())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(Color::Black));
            let mut lines: Vec<Line> = dialog.message.lines().map(Line::from).collect();
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled("[ OK ]  (Enter)", Style::default().add_modifier(Modifier::BOLD))));
            frame.render_widget(Clear, popup);
            frame.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: false }), popup);
        }
    }

    fn render_input(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::Keywords;
        let block = Block::default()
            .title("Keywords")
            .borders(Borders::ALL)
            .border_style(focus_style(focused));
        let text = if self.keywords.is_empty() {
            Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(self.keywords.as_str())
        };
        frame.render_widget(Paragraph::new(Line::from(text)).block(block), area);

        if focused && self.dialog.is_none() && self.phase == Phase::Idle {
            let x = cursor_x(area, self.keywords.chars().count());
            frame.set_cursor_position(Position::new(x, area.y + 1));
        }
    }

    fn render_categories(&self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self.config().categories.iter()
            .zip(self.checked.iter())
            .enumerate()
            .map(|(i, (cat, checked))| {
                let mark = if *checked { "[x]" } else { "[ ]" };
                let style = if self.focus == Focus::Category(i) {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Line::from(Span::styled(format!("{} {}", mark, cat.name), style))
            })
            .collect();
        let block = Block::default().title("Categories").borders(Borders::ALL);
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_button(&self, frame: &mut Frame, area: Rect) {
        let style = if self.focus == Focus::Search {
            Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        frame.render_widget(Paragraph::new(Span::styled("[ Search ]", style)), area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let status = match self.phase {
            Phase::Searching => Span::styled(
                "Searching arXiv, please wait...",
                Style::default().fg(Color::Yellow)
            ),
            Phase::Idle => Span::styled(
                "Tab/Up/Down: move  Space: toggle  Enter: search  Esc: quit",
                Style::default().fg(Color::DarkGray)
            )
        };
        frame.render_widget(Paragraph::new(Line::from(status)), area);
    }
}

// column after the typed text, clamped inside the input's right border.
fn cursor_x(area: Rect, typed: usize) -> u16 {
    let width = u16::try_from(typed).unwrap_or(u16::MAX);
    area.x
        .saturating_add(1)
        .saturating_add(width)
        .min(area.right().saturating_sub(2))
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2)
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2)
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use crate::config::SearchConfig;
    use crate::search::SearchOutcome;

    use super::*;

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_form_widgets_rendered() {
        let app = App::new(SearchConfig::default());
        let text = screen(&app);
        assert!(text.contains("Enter your keywords here..."));
        assert!(text.contains("[x] Quantum Physics (quant-ph)"));
        assert!(text.contains("[x] Systems and Control (cs.SY)"));
        assert!(text.contains("[ Search ]"));
    }

    #[test]
    fn test_cursor_clamped_for_long_input() {
        let area = Rect::new(3, 5, 40, 3);
        assert_eq!(cursor_x(area, 0), 4);
        assert_eq!(cursor_x(area, 10), 14);
        assert_eq!(cursor_x(area, 200), 41);
        assert_eq!(cursor_x(area, 70_000), 41);
        assert_eq!(cursor_x(Rect::new(u16::MAX - 10, 0, 10, 3), usize::MAX), u16::MAX - 2);
    }

    #[test]
    fn test_very_long_keywords_render() {
        let mut app = App::new(SearchConfig::default());
        app.keywords = "q".repeat(70_000);
        let text = screen(&app);
        assert!(text.contains("qqqq"));
    }

    #[test]
    fn test_dialog_rendered() {
        let mut app = App::new(SearchConfig::default());
        app.finish_search(Ok(SearchOutcome::NoResults { failed: Vec::new() }));
        let text = screen(&app);
        assert!(text.contains("No Results"));
        assert!(text.contains("[ OK ]"));
    }
}
