//! Step description pane
//!
//! Shows the current step's phase tag and narration, plus the example's
//! closing insight once the walkthrough reaches its last step.

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Render the description pane
pub fn render_description_pane(
    frame: &mut Frame,
    area: Rect,
    phase: &str,
    description: &str,
    insight: Option<&str>,
) {
    let block = Block::default()
        .title(" Step ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));

    let mut lines = Vec::new();

    let mut header = Vec::new();
    if !phase.is_empty() {
        header.push(Span::styled(
            format!("[{}] ", phase),
            Style::default()
                .fg(DEFAULT_THEME.phase)
                .add_modifier(Modifier::BOLD),
        ));
    }
    header.push(Span::styled(
        description,
        Style::default().fg(DEFAULT_THEME.fg),
    ));
    lines.push(Line::from(header));

    if let Some(insight) = insight {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(
                "★ ",
                Style::default().fg(DEFAULT_THEME.insight),
            ),
            Span::styled(
                insight,
                Style::default()
                    .fg(DEFAULT_THEME.insight)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
