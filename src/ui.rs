//! Screens - pure rendering of [`RenderState`]
//!
//! Nothing in here performs I/O or mutates state; the only output besides the
//! frame is the retry hint, which the key map turns into [`UiEvent::Retry`].
//!
//! [`UiEvent::Retry`]: crate::messages::UiEvent::Retry

use ratatui::{prelude::*, widgets::*};
use unicode_width::UnicodeWidthStr;

use crate::app::UiState;
use crate::constants::{
    APP_NAME, APP_VERSION, LOADING_FAILED_MESSAGE, LOADING_MESSAGE, NO_AMPHIBIANS_MESSAGE,
    RETRY_LABEL,
};
use crate::messages::RenderState;
use crate::models::Amphibian;

const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];
const HIGHLIGHT_SYMBOL: &str = "▌ ";
const CARD_INDENT: &str = "  ";

/// Draw the whole application. `tick` only drives the spinner animation.
pub fn draw_app(f: &mut Frame, state: &RenderState, tick: usize) {
    let area = f.area();

    let [title_area, content_area, status_area] = Layout::vertical([
        Constraint::Length(1), // Title bar
        Constraint::Min(0),    // Content
        Constraint::Length(1), // Status bar
    ])
    .areas(area);

    draw_title_bar(f, title_area);

    match &state.ui_state {
        UiState::Loading => loading_screen(f, content_area, tick),
        UiState::Success(amphibians) => {
            amphibian_list_screen(f, content_area, amphibians, state.selected)
        }
        UiState::Error => error_screen(f, content_area),
    }

    draw_status_bar(f, state, status_area);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_title_bar(f: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(format!(" {} ", APP_NAME), Style::default().fg(Color::Black).bg(Color::Green).bold()),
        Span::styled(format!(" v{}", APP_VERSION), Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(title), area);
}

/// Spinner plus label, centered
pub fn loading_screen(f: &mut Frame, area: Rect, tick: usize) {
    let spinner = SPINNER_FRAMES[tick % SPINNER_FRAMES.len()];
    let lines = vec![
        Line::from(Span::styled(spinner, Style::default().fg(Color::Green).bold())),
        Line::default(),
        Line::from(LOADING_MESSAGE),
    ];
    draw_centered_message(f, area, lines);
}

/// One card per record, or the empty-state message with a retry control
pub fn amphibian_list_screen(f: &mut Frame, area: Rect, amphibians: &[Amphibian], selected: usize) {
    if amphibians.is_empty() {
        draw_centered_message(
            f,
            area,
            vec![
                Line::from(NO_AMPHIBIANS_MESSAGE),
                Line::default(),
                retry_button(),
            ],
        );
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .title(format!(" {} {} ", amphibians.len(), APP_NAME));

    // Borders, highlight symbol and indent all eat into the wrap width
    let text_width = area
        .width
        .saturating_sub(2)
        .saturating_sub(HIGHLIGHT_SYMBOL.width() as u16)
        .saturating_sub(CARD_INDENT.width() as u16) as usize;

    let items: Vec<ListItem> = amphibians
        .iter()
        .map(|amphibian| amphibian_card(amphibian, text_width))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_symbol(HIGHLIGHT_SYMBOL)
        .highlight_spacing(HighlightSpacing::Always)
        .highlight_style(Style::default().fg(Color::Yellow));

    let mut list_state = ListState::default();
    list_state.select(Some(selected.min(amphibians.len() - 1)));

    f.render_stateful_widget(list, area, &mut list_state);
}

/// Card for a single record: heading, image source and wrapped description
pub fn amphibian_card(amphibian: &Amphibian, width: usize) -> ListItem<'static> {
    let mut lines = vec![Line::from(Span::styled(
        amphibian.title(),
        Style::default().bold(),
    ))];

    let image = if amphibian.has_image() {
        Line::from(vec![
            Span::raw(CARD_INDENT),
            Span::styled("[image] ", Style::default().fg(Color::DarkGray)),
            Span::styled(amphibian.img_src.clone(), Style::default().fg(Color::Cyan).underlined()),
        ])
    } else {
        Line::from(vec![
            Span::raw(CARD_INDENT),
            Span::styled(
                format!("[no image] {}", amphibian.image_description()),
                Style::default().fg(Color::DarkGray),
            ),
        ])
    };
    lines.push(image);

    for row in wrap_text(&amphibian.description, width) {
        lines.push(Line::from(format!("{}{}", CARD_INDENT, row)));
    }
    lines.push(Line::default());

    ListItem::new(Text::from(lines))
}

/// Failure message plus retry control
pub fn error_screen(f: &mut Frame, area: Rect) {
    draw_centered_message(
        f,
        area,
        vec![
            Line::from(Span::styled(LOADING_FAILED_MESSAGE, Style::default().fg(Color::Red).bold())),
            Line::default(),
            retry_button(),
        ],
    );
}

fn retry_button() -> Line<'static> {
    Line::from(Span::styled(
        format!(" {} ", RETRY_LABEL),
        Style::default().fg(Color::Black).bg(Color::Yellow).bold(),
    ))
}

fn draw_centered_message(f: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
    let height = lines.len() as u16;
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, middle);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let hints = match &state.ui_state {
        UiState::Loading => " ?:help | q:quit ".to_string(),
        UiState::Success(amphibians) if !amphibians.is_empty() => format!(
            " {}/{} | ↑/↓:move | r:refresh | ?:help | q:quit ",
            state.selected + 1,
            amphibians.len()
        ),
        _ => " r:retry | ?:help | q:quit ".to_string(),
    };

    let updated = state
        .last_updated
        .map(|t| format!("Updated {} ", t.format("%H:%M:%S")))
        .unwrap_or_default();

    let [hints_area, updated_area] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(updated.width() as u16),
    ])
    .areas(area);

    let style = Style::default().fg(Color::DarkGray);
    f.render_widget(Paragraph::new(hints).style(style), hints_area);
    f.render_widget(Paragraph::new(updated).style(style), updated_area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = r#"
 AMPHIBIANS - Keyboard Shortcuts

 NAVIGATION
   ↑ / k              Previous card
   ↓ / j              Next card
   PgUp / PgDn        Jump five cards
   g / G              First / last card

 DATA
   r / Enter          Retry / refresh

 GENERAL
   ?                  Toggle this help
   q / Esc / Ctrl+C   Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

/// Rectangle of the given percentage size, centered in `r`
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Word-wrap a plain description to `width` columns. Overlong words are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    textwrap::wrap(text, width.max(1))
        .into_iter()
        .map(|row| row.into_owned())
        .collect()
}
