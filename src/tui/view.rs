use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Gauge, Paragraph, Wrap};
use ratatui::Frame;

use super::crossterm::{UNITS_PER_COL, UNITS_PER_ROW};
use crate::app::CardView;
use crate::kernel::{CardStyle, Choice, DecisionSummary, Decision, Progress};

const CARD_WIDTH: u16 = 40;
const CARD_HEIGHT: u16 = 12;

pub struct DeckScreen<'a> {
    pub cards: &'a [CardView<'a>],
    pub progress: Progress,
}

pub struct SummaryScreen<'a> {
    pub decisions: &'a [Decision],
    pub summary: DecisionSummary,
}

/// Draws the deck and returns the area cards are laid out in, for hit testing.
pub fn render_deck(frame: &mut Frame, screen: &DeckScreen<'_>) -> Rect {
    let rows = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(frame.area());

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Buy or Rent?",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("Swipe right to buy, left to rent"),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, rows[0]);

    let progress = screen.progress;
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::White))
        .ratio(progress.fraction.clamp(0.0, 1.0))
        .label(format!("{} of {}", progress.position, progress.total));
    frame.render_widget(gauge, rows[1]);

    let deck_area = rows[2];
    for view in screen.cards.iter().rev() {
        let Some(rect) = card_rect(deck_area, &view.style) else {
            continue;
        };
        frame.render_widget(Clear, rect);
        frame.render_widget(card_widget(view), rect);
    }

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("← rent", Style::default().fg(Color::Red)),
        Span::raw("   "),
        Span::styled("buy →", Style::default().fg(Color::Green)),
        Span::raw("   r restart · q quit"),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(footer, rows[3]);

    deck_area
}

pub fn render_summary(frame: &mut Frame, screen: &SummaryScreen<'_>) {
    let summary = screen.summary;
    let mut lines = vec![
        Line::from(Span::styled(
            "Your Results!",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("You decided on {} items", summary.total)),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("Buy {} ({}%)", summary.buy, summary.buy_percent),
                Style::default().fg(Color::Green),
            ),
            Span::raw("    "),
            Span::styled(
                format!("Rent {} ({}%)", summary.rent, summary.rent_percent),
                Style::default().fg(Color::Red),
            ),
        ]),
        Line::from(""),
    ];
    if let Some(style) = summary.style() {
        lines.push(Line::from(vec![
            Span::raw("Your shopping style: "),
            Span::styled(style.label(), Style::default().add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(""));
    }
    lines.extend(screen.decisions.iter().map(|decision| {
        Line::from(vec![
            Span::raw(format!("{:<24}", decision.item_label)),
            Span::styled(decision.choice.label(), choice_style(decision.choice)),
        ])
    }));
    lines.push(Line::from(""));
    lines.push(Line::from("r start again · q quit"));

    let block = Block::bordered().title("Summary");
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center),
        frame.area(),
    );
}

/// Screen rectangle of a card, clipped to `area`. `None` once it has left the area entirely.
pub fn card_rect(area: Rect, style: &CardStyle) -> Option<Rect> {
    let width = ((CARD_WIDTH.min(area.width) as f64) * style.scale).round() as i32;
    let height = CARD_HEIGHT.min(area.height) as i32;
    if width <= 0 || height <= 0 {
        return None;
    }

    let base_x = area.x as i32 + (area.width as i32 - width) / 2;
    let base_y = area.y as i32;
    let x = base_x + (style.translate_x / UNITS_PER_COL).round() as i32;
    let y = base_y + (style.translate_y / UNITS_PER_ROW).round() as i32;

    let left = x.max(area.x as i32);
    let top = y.max(area.y as i32);
    let right = (x + width).min(area.x as i32 + area.width as i32);
    let bottom = (y + height).min(area.y as i32 + area.height as i32);
    if right <= left || bottom <= top {
        return None;
    }

    Some(Rect::new(
        left as u16,
        top as u16,
        (right - left) as u16,
        (bottom - top) as u16,
    ))
}

/// Depth of the frontmost card under the cell, if any.
pub fn hit_test(area: Rect, cards: &[CardView<'_>], col: u16, row: u16) -> Option<usize> {
    cards.iter().find_map(|view| {
        let rect = card_rect(area, &view.style)?;
        let inside = col >= rect.x
            && col < rect.x + rect.width
            && row >= rect.y
            && row < rect.y + rect.height;
        inside.then_some(view.card.depth())
    })
}

fn card_widget<'a>(view: &CardView<'a>) -> Paragraph<'a> {
    let border = match view.style.highlight {
        Some(choice) => choice_style(choice),
        None if view.style.opacity < 1.0 => Style::default().fg(Color::DarkGray),
        None => Style::default(),
    };

    let mut block = Block::bordered().border_style(border);
    if let Some(choice) = view.style.highlight {
        block = block.title(Line::from(Span::styled(choice.label(), choice_style(choice))).centered());
    }

    let text_style = if view.style.opacity < 1.0 {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    Paragraph::new(vec![
        Line::from(""),
        Line::from(view.item.illustration.as_str()),
        Line::from(""),
        Line::from(Span::styled(
            view.item.label.as_str(),
            text_style.add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(view.item.description.as_str(), text_style)),
    ])
    .block(block)
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
}

fn choice_style(choice: Choice) -> Style {
    match choice {
        Choice::Buy => Style::default().fg(Color::Green),
        Choice::Rent => Style::default().fg(Color::Red),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/view.rs"]
mod tests;
