//! Modal parameter form with a live cut-length preview.
//!
//! Blocking event loop: the caller hands over the terminal until the
//! user accepts or cancels. The preview is recomputed from the raw
//! field text on every edit, via the pure `preview` function; there is
//! no dialog state beyond the three field strings.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::{DefaultTerminal, Frame};
use stitchcut_core::{preview, CutParameters, Preview, SolvedCuts, StitchError};

/// How the dialog ended.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogOutcome {
    /// User accepted a feasible parameter set.
    Accepted(CutParameters, SolvedCuts),
    /// User dismissed the dialog; nothing must be mutated.
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Field {
    Offset,
    Gap,
    Count,
}

impl Field {
    fn next(self) -> Self {
        match self {
            Field::Offset => Field::Gap,
            Field::Gap => Field::Count,
            Field::Count => Field::Offset,
        }
    }

    fn prev(self) -> Self {
        match self {
            Field::Offset => Field::Count,
            Field::Gap => Field::Offset,
            Field::Count => Field::Gap,
        }
    }
}

/// The stitch-cut parameter form.
pub struct CutDialog {
    line_length: f64,
    offset_text: String,
    gap_text: String,
    count_text: String,
    active: Field,
    preview: Preview,
    message: Option<String>,
}

impl CutDialog {
    /// Create the form for a line of the given length, pre-filled with
    /// the usual defaults (offset 3, gap 3, 5 cuts).
    pub fn new(line_length: f64) -> Self {
        let defaults = CutParameters::default();
        let mut dialog = Self {
            line_length,
            offset_text: format_scalar(defaults.edge_offset),
            gap_text: format_scalar(defaults.gap),
            count_text: defaults.count.to_string(),
            active: Field::Offset,
            preview: Preview::Invalid,
            message: None,
        };
        dialog.refresh();
        dialog
    }

    /// Current preview value.
    pub fn preview(&self) -> Preview {
        self.preview
    }

    /// Take over the terminal until the user accepts or cancels.
    pub fn run(mut self) -> Result<DialogOutcome> {
        let mut terminal = ratatui::init();
        let outcome = self.event_loop(&mut terminal);
        ratatui::restore();
        outcome
    }

    fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<DialogOutcome> {
        loop {
            terminal.draw(|frame| self.render(frame))?;
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(outcome) = self.handle_key(key) {
                    return Ok(outcome);
                }
            }
        }
    }

    /// Apply one key press; `Some` when the dialog is finished.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<DialogOutcome> {
        match key.code {
            KeyCode::Esc => Some(DialogOutcome::Cancelled),
            KeyCode::Enter => self.try_accept(),
            KeyCode::Tab | KeyCode::Down => {
                self.active = self.active.next();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.active = self.active.prev();
                None
            }
            KeyCode::Backspace => {
                self.active_field_mut().pop();
                self.refresh();
                None
            }
            KeyCode::Char(c) => {
                self.active_field_mut().push(c);
                self.refresh();
                None
            }
            _ => None,
        }
    }

    fn try_accept(&mut self) -> Option<DialogOutcome> {
        let solved = CutParameters::parse(&self.offset_text, &self.gap_text, &self.count_text)
            .and_then(|params| {
                stitchcut_core::solve(self.line_length, &params).map(|solved| (params, solved))
            });
        match solved {
            Ok((params, solved)) => Some(DialogOutcome::Accepted(params, solved)),
            Err(StitchError::Infeasible { .. }) => {
                self.message = Some("Invalid parameters, cuts won't fit.".into());
                None
            }
            Err(err) => {
                self.message = Some(err.to_string());
                None
            }
        }
    }

    fn active_field_mut(&mut self) -> &mut String {
        match self.active {
            Field::Offset => &mut self.offset_text,
            Field::Gap => &mut self.gap_text,
            Field::Count => &mut self.count_text,
        }
    }

    fn refresh(&mut self) {
        self.preview = preview(
            self.line_length,
            &self.offset_text,
            &self.gap_text,
            &self.count_text,
        );
        self.message = None;
    }

    fn render(&self, frame: &mut Frame) {
        let area = centered_rect(46, 16, frame.area());
        frame.render_widget(Clear, area);

        let outer = Block::bordered().title(" Stitch Cut Parameters ");
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let [offset_area, gap_area, count_area, preview_area, message_area, hint_area] =
            Layout::vertical([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .areas(inner);

        self.render_field(frame, offset_area, "Start & End Offset", &self.offset_text, Field::Offset);
        self.render_field(frame, gap_area, "Gap between cuts", &self.gap_text, Field::Gap);
        self.render_field(frame, count_area, "Number of Cuts", &self.count_text, Field::Count);

        let preview_style = if self.preview.is_feasible() {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Red)
        };
        frame.render_widget(
            Paragraph::new(format!(
                "Calculated Cut Length: {}  (line {:.3} mm)",
                self.preview, self.line_length
            ))
            .style(preview_style),
            preview_area,
        );

        if let Some(message) = &self.message {
            frame.render_widget(
                Paragraph::new(message.as_str()).style(Style::default().fg(Color::Red)),
                message_area,
            );
        }

        frame.render_widget(
            Paragraph::new("Tab: next field   Enter: apply   Esc: cancel")
                .style(Style::default().fg(Color::DarkGray)),
            hint_area,
        );
    }

    fn render_field(&self, frame: &mut Frame, area: Rect, title: &str, text: &str, field: Field) {
        let style = if self.active == field {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        frame.render_widget(
            Paragraph::new(text)
                .style(style)
                .block(Block::bordered().title(title).border_style(style)),
            area,
        );
    }
}

fn format_scalar(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}
