//! Frame composition and drawing for the console front end.

use std::io::{self, Write};

use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::{cursor, queue, terminal};

use vault_session::{FocusMode, HistoryEntry, HistoryKind, Session, dispatch};

use crate::views::TextViews;

/// How a frame line is coloured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Command,
    Output,
    Error,
    System,
    Panel,
    Chrome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameLine {
    pub style: LineStyle,
    pub text: String,
}

impl FrameLine {
    fn new(style: LineStyle, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }
}

/// Rows kept for the log when the panel has focus.
const VISUAL_LOG_ROWS: usize = 4;

fn log_line(entry: &HistoryEntry, prompt: &str) -> FrameLine {
    match entry.kind {
        HistoryKind::Command => FrameLine::new(LineStyle::Command, format!("{prompt}{}", entry.text)),
        HistoryKind::Output => FrameLine::new(LineStyle::Output, entry.text.as_str()),
        HistoryKind::Error => FrameLine::new(LineStyle::Error, entry.text.as_str()),
        HistoryKind::System => FrameLine::new(LineStyle::System, entry.text.as_str()),
    }
}

fn panel_lines(session: &Session, views: &TextViews) -> Option<Vec<FrameLine>> {
    let panel = session.active_panel()?;
    let mut lines: Vec<FrameLine> = dispatch(views, panel)
        .into_iter()
        .map(|l| FrameLine::new(LineStyle::Panel, l))
        .collect();
    let highlights = &panel.data.snapshot.stream_highlights;
    if session.settings().stream_mode_enabled && !highlights.is_empty() {
        lines.push(FrameLine::new(LineStyle::Chrome, ""));
        lines.push(FrameLine::new(LineStyle::Chrome, "*** STREAM HIGHLIGHTS ***"));
        lines.extend(
            highlights
                .iter()
                .map(|h| FrameLine::new(LineStyle::Chrome, format!("  > {h}"))),
        );
    }
    Some(lines)
}

fn tail(lines: Vec<FrameLine>, rows: usize) -> Vec<FrameLine> {
    let skip = lines.len().saturating_sub(rows);
    lines.into_iter().skip(skip).collect()
}

fn separator(width: usize) -> FrameLine {
    FrameLine::new(LineStyle::Chrome, "─".repeat(width))
}

/// One-line status bar shown above the prompt.
pub fn status_line(session: &Session) -> String {
    let s = session.settings();
    format!(
        "FOCUS: {}  |  STREAM {}  |  F1 terminal  F2 balanced  F3 visual  F5 reload  Esc quit",
        session.focus_mode().label(),
        vault_types::settings::on_off(s.stream_mode_enabled),
    )
}

/// Lay out the log and panel for a body of `rows` x `width`.
///
/// Terminal focus hides the panel. Visual focus puts the panel first and
/// keeps only the last few log rows. Balanced splits the rows evenly.
pub fn compose(
    session: &Session,
    views: &TextViews,
    prompt: &str,
    rows: usize,
    width: usize,
) -> Vec<FrameLine> {
    let log: Vec<FrameLine> = session
        .visible_log()
        .iter()
        .map(|e| log_line(e, prompt))
        .collect();

    let panel = if session.split_view_active() {
        panel_lines(session, views)
    } else {
        None
    };
    let Some(panel) = panel else {
        return tail(log, rows);
    };

    match session.focus_mode() {
        FocusMode::Terminal => tail(log, rows),
        FocusMode::Balanced => {
            let panel_rows = panel.len().min(rows / 2);
            let log_rows = rows.saturating_sub(panel_rows + 1);
            let mut out = tail(log, log_rows);
            out.push(separator(width));
            out.extend(panel.into_iter().take(panel_rows));
            out
        },
        FocusMode::Visual => {
            let log_rows = VISUAL_LOG_ROWS.min(rows / 2);
            let panel_rows = rows.saturating_sub(log_rows + 1);
            let mut out: Vec<FrameLine> = panel.into_iter().take(panel_rows).collect();
            out.push(separator(width));
            out.extend(tail(log, log_rows));
            out
        },
    }
}

fn color(style: LineStyle) -> Color {
    match style {
        LineStyle::Command => Color::Green,
        LineStyle::Output => Color::DarkGreen,
        LineStyle::Error => Color::Red,
        LineStyle::System => Color::Yellow,
        LineStyle::Panel => Color::Green,
        LineStyle::Chrome => Color::DarkYellow,
    }
}

/// Write `text` clipped to `width` columns, then a raw-mode newline.
fn put_line(out: &mut impl Write, text: &str, width: usize) -> io::Result<()> {
    let clipped: String = text.chars().take(width).collect();
    queue!(out, Print(clipped), Print("\r\n"))
}

/// Redraw the whole screen.
pub fn draw(
    out: &mut impl Write,
    session: &Session,
    views: &TextViews,
    prompt: &str,
    input: &str,
    cursor_column: usize,
) -> io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let (width, height) = (cols as usize, rows as usize);
    let body_rows = height.saturating_sub(2);

    queue!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;
    if session.settings().stream_mode_enabled {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }

    let frame = compose(session, views, prompt, body_rows, width);
    for _ in frame.len()..body_rows {
        put_line(out, "", width)?;
    }
    for line in &frame {
        queue!(out, SetForegroundColor(color(line.style)))?;
        put_line(out, &line.text, width)?;
    }

    queue!(out, SetForegroundColor(Color::DarkYellow))?;
    put_line(out, &status_line(session), width)?;
    queue!(
        out,
        SetForegroundColor(Color::Green),
        Print(prompt),
        Print(input),
        ResetColor,
        SetAttribute(Attribute::Reset),
    )?;
    let column = (prompt.chars().count() + cursor_column).min(u16::MAX as usize) as u16;
    queue!(out, cursor::MoveTo(column, rows.saturating_sub(1)))?;
    out.flush()
}

/// Print boot lines as they are revealed.
pub fn draw_boot_lines(out: &mut impl Write, lines: &[&str]) -> io::Result<()> {
    for line in lines {
        let color = if vault_session::boot::is_progress_line(line) {
            Color::Green
        } else {
            Color::DarkGreen
        };
        queue!(out, SetForegroundColor(color), Print(line), Print("\r\n"))?;
    }
    queue!(out, ResetColor)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use vault_data::Snapshot;
    use vault_terminal::{CommandRegistry, Interpreter, register_builtins};
    use vault_types::Settings;

    use super::*;

    fn setup() -> (Session, Interpreter, Arc<Snapshot>) {
        let mut reg = CommandRegistry::new();
        register_builtins(&mut reg);
        (
            Session::new(Settings::default()),
            Interpreter::new(reg),
            Arc::new(Snapshot::sample().unwrap()),
        )
    }

    fn has_panel(frame: &[FrameLine]) -> bool {
        frame.iter().any(|l| l.style == LineStyle::Panel)
    }

    #[test]
    fn command_echo_gets_prompt_prefix() {
        let (mut s, i, snap) = setup();
        s.submit("help", &i, &snap);
        let frame = compose(&s, &TextViews::default(), "VAULT-TEC> ", 200, 80);
        assert_eq!(frame[0].style, LineStyle::Command);
        assert_eq!(frame[0].text, "VAULT-TEC> help");
    }

    #[test]
    fn terminal_focus_hides_panel() {
        let (mut s, i, snap) = setup();
        s.submit("MAP", &i, &snap);
        s.set_focus_mode(FocusMode::Terminal);
        let frame = compose(&s, &TextViews::default(), "> ", 40, 80);
        assert!(!has_panel(&frame));
    }

    #[test]
    fn visual_focus_puts_panel_first() {
        let (mut s, i, snap) = setup();
        s.submit("MAP", &i, &snap);
        s.set_focus_mode(FocusMode::Visual);
        let frame = compose(&s, &TextViews::default(), "> ", 40, 80);
        assert_eq!(frame[0].style, LineStyle::Panel);
        assert!(frame.len() <= 40);
    }

    #[test]
    fn balanced_fits_rows() {
        let (mut s, i, snap) = setup();
        s.submit("SHEET", &i, &snap);
        let frame = compose(&s, &TextViews::default(), "> ", 20, 80);
        assert!(frame.len() <= 20);
        assert!(has_panel(&frame));
    }

    #[test]
    fn stream_mode_adds_highlights() {
        let (mut s, i, snap) = setup();
        s.submit("SETTINGS STREAM ON", &i, &snap);
        s.submit("DOSSIER", &i, &snap);
        s.set_focus_mode(FocusMode::Visual);
        let frame = compose(&s, &TextViews::default(), "> ", 200, 80);
        assert!(frame.iter().any(|l| l.text == "*** STREAM HIGHLIGHTS ***"));
    }

    #[test]
    fn clear_empties_frame() {
        let (mut s, i, snap) = setup();
        s.submit("MAP", &i, &snap);
        s.submit("CLEAR", &i, &snap);
        assert!(compose(&s, &TextViews::default(), "> ", 40, 80).is_empty());
    }

    #[test]
    fn status_shows_focus() {
        let (mut s, _, _) = setup();
        s.set_focus_mode(FocusMode::Visual);
        assert!(status_line(&s).starts_with("FOCUS: VISUAL"));
    }
}
