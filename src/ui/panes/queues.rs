//! Queue pane rendering
//!
//! Draws every named collection the current step carries: task queues for
//! the event loop walkthroughs, promise boxes, captured environments,
//! prototype chains. Each queue gets a header line followed by its items,
//! front first.

use crate::catalog::QueueState;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the queues pane
pub fn render_queues_pane(
    frame: &mut Frame,
    area: Rect,
    queues: &[QueueState],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Queues ")
        .borders(Borders::ALL)
        .border_style(border_style);

    if queues.is_empty() {
        let paragraph = Paragraph::new("(none)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));

    let mut all_items: Vec<ListItem> = Vec::new();
    for (qi, queue) in queues.iter().enumerate() {
        if qi > 0 {
            all_items.push(ListItem::new(""));
        }
        all_items.push(
            ListItem::new(format!("{}:", queue.name)).style(
                Style::default()
                    .fg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::BOLD),
            ),
        );
        if queue.items.is_empty() {
            all_items.push(
                ListItem::new("  (empty)").style(Style::default().fg(DEFAULT_THEME.comment)),
            );
        } else {
            for item in queue.items {
                all_items.push(
                    ListItem::new(format!("  {}", item))
                        .style(Style::default().fg(DEFAULT_THEME.fg)),
                );
            }
        }
    }

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    if total_items > visible_height {
        *scroll_offset = (*scroll_offset).min(total_items - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}
