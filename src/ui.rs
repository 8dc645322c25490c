use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::catalog::ChordCategory;
use crate::inversion::InversionKind;
use crate::session::SessionState;
use crate::{App, Screen};

const HORIZONTAL_MARGIN: u16 = 5;

pub fn draw(app: &App, f: &mut Frame) {
    let area = f.area();
    match app.screen {
        Screen::Practice => render_practice(app, f, area),
        Screen::Settings => render_settings(app, f, area),
    }
    if let Some(toast) = &app.toast {
        render_toast(&toast.message, f, area);
    }
}

fn render_practice(app: &App, f: &mut Frame, area: Rect) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let dim_bold = bold.add_modifier(Modifier::DIM);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .constraints(
            [
                Constraint::Min(1),
                Constraint::Length(1), // chord name
                Constraint::Length(1), // inversion
                Constraint::Length(1), // notation
                Constraint::Length(1),
                Constraint::Length(1), // countdown
                Constraint::Min(1),
                Constraint::Length(1), // footer
            ]
            .as_ref(),
        )
        .split(area);

    match (app.session.state(), app.session.current()) {
        (SessionState::Practicing, Some(chord)) => {
            let name = Paragraph::new(Span::styled(
                chord.name.clone(),
                bold.fg(Color::Magenta),
            ))
            .alignment(Alignment::Center);
            f.render_widget(name, chunks[1]);

            let inversion = Paragraph::new(Span::styled(
                format!("{} · {}", chord.quality, chord.inversion),
                Style::default().add_modifier(Modifier::ITALIC),
            ))
            .alignment(Alignment::Center);
            f.render_widget(inversion, chunks[2]);

            let notation = Paragraph::new(Span::styled(chord.notation.clone(), dim_bold))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            f.render_widget(notation, chunks[3]);

            if let Some(secs) = app.session.secs_until_advance() {
                let timer = Paragraph::new(Span::styled(format!("{secs:.1}"), dim_bold))
                    .alignment(Alignment::Center);
                f.render_widget(timer, chunks[5]);
            }
        }
        _ => {
            let paused = Paragraph::new(Span::styled(
                "Paused",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::ITALIC),
            ))
            .alignment(Alignment::Center);
            f.render_widget(paused, chunks[1]);

            let hint = Paragraph::new(Span::styled(
                "Press Space to Continue",
                Style::default().add_modifier(Modifier::ITALIC),
            ))
            .alignment(Alignment::Center);
            f.render_widget(hint, chunks[2]);
        }
    }

    let footer = Paragraph::new(Span::styled(
        format!(
            "space start/pause · s settings · esc quit · {}s per chord",
            app.session.config().duration_secs
        ),
        Style::default().add_modifier(Modifier::DIM),
    ))
    .alignment(Alignment::Center);
    f.render_widget(footer, chunks[7]);
}

fn render_settings(app: &App, f: &mut Frame, area: Rect) {
    let config = app.session.config();
    let on = Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD);
    let off = Style::default().add_modifier(Modifier::DIM);
    let header = Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled("Settings", header)),
        Line::default(),
        Line::from(Span::styled("Chord Types", header)),
    ];

    for (idx, category) in ChordCategory::ALL.iter().enumerate() {
        let enabled = config.categories.contains(category);
        lines.push(Line::from(Span::styled(
            format!(
                "[{}] {} {}",
                idx + 1,
                category,
                if enabled { "on" } else { "off" }
            ),
            if enabled { on } else { off },
        )));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Inversions", header)));
    for (key, kind) in INVERSION_KEYS {
        let enabled = config.inversions.contains(&kind);
        lines.push(Line::from(Span::styled(
            format!("[{key}] {kind} {}", if enabled { "on" } else { "off" }),
            if enabled { on } else { off },
        )));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Duration", header)));
    lines.push(Line::from(format!(
        "{}s per chord (Up/Down to adjust)",
        config.duration_secs
    )));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "esc back · changes are saved automatically",
        Style::default().add_modifier(Modifier::DIM),
    )));

    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    let inner = centered_vertically(area, 18);
    f.render_widget(body, inner);
}

pub const INVERSION_KEYS: [(char, InversionKind); 3] = [
    ('r', InversionKind::Root),
    ('f', InversionKind::First),
    ('x', InversionKind::Second),
];

fn render_toast(message: &str, f: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let line = Rect {
        x: area.x,
        y: area.y + area.height - 1,
        width: area.width,
        height: 1,
    };
    let toast = Paragraph::new(Span::styled(
        message.to_string(),
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    f.render_widget(toast, line);
}

fn centered_vertically(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    let top = (area.height - height) / 2;
    Rect {
        x: area.x,
        y: area.y + top,
        width: area.width,
        height,
    }
}
