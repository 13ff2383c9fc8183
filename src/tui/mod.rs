// SPDX-FileCopyrightText: 2026 Fastflow Authors
// SPDX-License-Identifier: LicenseRef-Fastflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fastflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! The interactive shell (ratatui + crossterm): a guide screen, the editor
//! screen with its graph pane and label input bar, and the keyboard loop
//! feeding the interaction state machine.

use std::error::Error;
use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::editor::{Command, EditorError, FlowEditor, GraphView, InputWidget, Mode};
use crate::place;
use crate::render::{render_graph, GraphRender};

const FOCUS_COLOR: Color = Color::LightGreen;
const LABELING_COLOR: Color = Color::LightBlue;
const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const FOOTER_BRAND_COLOR: Color = Color::White;
const FOOTER_BRAND: &str = "🅵 🅰 🆂 🆃 🅵 🅻 🅾 🆆 ";
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Runs the interactive terminal UI, starting on the guide screen.
pub fn run() -> Result<(), Box<dyn Error>> {
    run_app(App::new(false))
}

/// Runs the interactive terminal UI, starting directly on the editor.
pub fn run_skip_guide() -> Result<(), Box<dyn Error>> {
    run_app(App::new(true))
}

fn run_app(mut app: App) -> Result<(), Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key)?,
                _ => {}
            }
        }
    }

    Ok(())
}

/// The two routed screens: the landing guide and the editor itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Guide,
    Editor,
}

/// View-side state the editor core commands through the `GraphView` seam.
///
/// `fit_pending` is consumed by the next draw, which recomputes the offset
/// that centers the rendered graph in the pane.
#[derive(Debug, Default)]
struct ViewState {
    fit_pending: bool,
    surface_focused: bool,
    offset_x: u16,
    offset_y: u16,
}

impl GraphView for ViewState {
    fn fit_view(&mut self) {
        self.fit_pending = true;
    }

    fn focus_surface(&mut self) {
        self.surface_focused = true;
    }
}

/// The label input bar. The editor core drives visibility and value through
/// the `InputWidget` seam; the shell feeds keystrokes into it.
#[derive(Debug, Default)]
struct InputBar {
    visible: bool,
    focused: bool,
    value: String,
}

impl InputBar {
    fn push_char(&mut self, ch: char) {
        self.value.push(ch);
    }

    fn pop_char(&mut self) {
        self.value.pop();
    }
}

impl InputWidget for InputBar {
    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
        self.focused = false;
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn set_value(&mut self, text: &str) {
        self.value.clear();
        self.value.push_str(text);
    }

    fn value(&self) -> &str {
        &self.value
    }
}

struct App {
    screen: Screen,
    editor: Option<FlowEditor<ViewState, InputBar>>,
    should_quit: bool,
}

impl App {
    fn new(skip_guide: bool) -> Self {
        let mut app = Self { screen: Screen::Guide, editor: None, should_quit: false };
        if skip_guide {
            app.enter_editor();
        }
        app
    }

    /// Route change: the editor session starts when the view is entered,
    /// already labeling the root node.
    fn enter_editor(&mut self) {
        self.screen = Screen::Editor;
        if self.editor.is_none() {
            self.editor = Some(FlowEditor::new(ViewState::default(), InputBar::default()));
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<(), EditorError> {
        match self.screen {
            Screen::Guide => {
                self.handle_guide_key(key.code);
                Ok(())
            }
            Screen::Editor => self.handle_editor_key(key.code),
        }
    }

    fn handle_guide_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => self.enter_editor(),
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_editor_key(&mut self, code: KeyCode) -> Result<(), EditorError> {
        let Some(editor) = self.editor.as_mut() else {
            return Ok(());
        };

        if editor.state().is_labeling() {
            match code {
                KeyCode::Enter => editor.apply(Command::Confirm)?,
                KeyCode::Backspace => {
                    editor.input_mut().pop_char();
                    let value = editor.input().value().to_owned();
                    editor.apply(Command::BufferChanged(value))?;
                }
                KeyCode::Char(ch) => {
                    editor.input_mut().push_char(ch);
                    let value = editor.input().value().to_owned();
                    editor.apply(Command::BufferChanged(value))?;
                }
                _ => {}
            }
            return Ok(());
        }

        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('o') => editor.view_mut().fit_view(),
            KeyCode::Char(ch) => {
                if let Some(direction) = place::Direction::from_key(ch) {
                    editor.apply(Command::Spawn(direction))?;
                }
            }
            KeyCode::Enter => editor.apply(Command::Confirm)?,
            KeyCode::Esc => editor.apply(Command::ToggleMode)?,
            KeyCode::Tab => editor.apply(Command::CycleSelection)?,
            _ => {}
        }
        Ok(())
    }
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    match app.screen {
        Screen::Guide => draw_guide(frame),
        Screen::Editor => draw_editor(frame, app),
    }
}

fn draw_guide(frame: &mut Frame<'_>) {
    let area = frame.size();
    let text = guide_text();
    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" fastflow "));
    frame.render_widget(paragraph, area);
}

fn guide_text() -> Text<'static> {
    let key = Style::default().fg(FOOTER_KEY_COLOR);
    let mut lines = vec![
        Line::from(""),
        Line::from("  Build flow charts with nothing but your keyboard."),
        Line::from(""),
        Line::from("  Two modes: Create (the default) and Edit. Esc toggles between them."),
        Line::from(""),
        Line::from("  Create mode grows the chart from the newest box:"),
    ];
    for (key_name, meaning) in [
        ("s", "add a box below"),
        ("w", "add a box above"),
        ("a", "add a box to the left"),
        ("d", "add a box to the right"),
    ] {
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(key_name, key),
            Span::raw("  "),
            Span::raw(meaning),
        ]));
    }
    lines.extend([
        Line::from("  Every new box opens its label: type the text, press Enter when done."),
        Line::from(""),
        Line::from("  Edit mode revisits what you built:"),
        Line::from(vec![
            Span::raw("    "),
            Span::styled("Tab", key),
            Span::raw("    cycle through the boxes"),
        ]),
        Line::from(vec![
            Span::raw("    "),
            Span::styled("Enter", key),
            Span::raw("  edit the highlighted label"),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled("o", key),
            Span::raw(" re-fits the view, "),
            Span::styled("q", key),
            Span::raw(" quits."),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("  Press "),
            Span::styled("Enter", key),
            Span::raw(" to begin."),
        ]),
    ]);
    Text::from(lines)
}

fn draw_editor(frame: &mut Frame<'_>, app: &mut App) {
    let Some(editor) = app.editor.as_mut() else {
        return;
    };

    let area = frame.size();
    let input_height = if editor.input().visible { 3 } else { 0 };
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(input_height),
            Constraint::Length(1),
        ])
        .split(area);
    let graph_area = layout[0];
    let input_area = layout[1];
    let footer_area = layout[2];

    let render = render_graph(editor.graph());
    let labeling = editor.state().is_labeling();
    let label_target = editor.label_target().cloned();

    let view = editor.view_mut();
    if view.fit_pending || (view.offset_x == 0 && view.offset_y == 0) {
        let inner_width = graph_area.width.saturating_sub(2);
        let inner_height = graph_area.height.saturating_sub(2);
        view.offset_x = (inner_width.saturating_sub(render.width() as u16)) / 2;
        view.offset_y = (inner_height.saturating_sub(render.height() as u16)) / 2;
        view.fit_pending = false;
    }
    let offset = (view.offset_x, view.offset_y);
    let surface_focused = view.surface_focused;

    let surface_style = if labeling {
        Style::default().fg(LABELING_COLOR)
    } else if surface_focused {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default().fg(FOOTER_LABEL_COLOR)
    };
    let graph_lines = styled_graph_lines(
        &render,
        label_target.as_ref().filter(|_| labeling).map(|id| id.as_str()),
        offset,
    );
    let graph = Paragraph::new(graph_lines)
        .block(Block::default().borders(Borders::ALL).border_style(surface_style));
    frame.render_widget(graph, graph_area);

    if editor.input().visible {
        let title = match label_target.as_ref() {
            Some(id) => format!(" label box {id} "),
            None => " label ".to_owned(),
        };
        let input = Paragraph::new(editor.input().value().to_owned()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(LABELING_COLOR))
                .title(title),
        );
        frame.render_widget(input, input_area);
        if editor.input().focused {
            let cursor_x = input_area.x + 1 + editor.input().value().chars().count() as u16;
            frame.set_cursor(cursor_x.min(input_area.right().saturating_sub(2)), input_area.y + 1);
        }
    }

    frame.render_widget(Paragraph::new(footer_line(editor.mode(), labeling)), footer_area);
}

/// Converts rendered lines into styled text: the highlighted node in the
/// focus color, the node being labeled in the labeling color, offset for
/// fit-view centering.
fn styled_graph_lines(
    render: &GraphRender,
    labeling_target: Option<&str>,
    (offset_x, offset_y): (u16, u16),
) -> Vec<Line<'static>> {
    let mut colors: Vec<Vec<Option<Color>>> = Vec::with_capacity(render.height());
    for _ in 0..render.height() {
        colors.push(vec![None; render.width()]);
    }
    for region in render.regions() {
        let color = if Some(region.id.as_str()) == labeling_target {
            Some(LABELING_COLOR)
        } else if region.highlighted {
            Some(FOCUS_COLOR)
        } else {
            None
        };
        let Some(color) = color else {
            continue;
        };
        for y in region.y..region.y + region.height {
            for x in region.x..region.x + region.width {
                if let Some(cell) = colors.get_mut(y).and_then(|row| row.get_mut(x)) {
                    *cell = Some(color);
                }
            }
        }
    }

    let blank = " ".repeat(offset_x as usize);
    let mut lines = Vec::with_capacity(offset_y as usize + render.height());
    for _ in 0..offset_y {
        lines.push(Line::from(""));
    }
    for (y, raw) in render.lines().iter().enumerate() {
        let mut spans = vec![Span::raw(blank.clone())];
        let mut run = String::new();
        let mut run_color: Option<Color> = None;
        for (x, ch) in raw.chars().enumerate() {
            let color = colors[y].get(x).copied().flatten();
            if color != run_color && !run.is_empty() {
                spans.push(span_for(std::mem::take(&mut run), run_color));
            }
            run_color = color;
            run.push(ch);
        }
        if !run.is_empty() {
            spans.push(span_for(run, run_color));
        }
        lines.push(Line::from(spans));
    }
    lines
}

fn span_for(text: String, color: Option<Color>) -> Span<'static> {
    match color {
        Some(color) => Span::styled(text, Style::default().fg(color)),
        None => Span::raw(text),
    }
}

fn footer_line(mode: Mode, labeling: bool) -> Line<'static> {
    let label = Style::default().fg(FOOTER_LABEL_COLOR);
    let key = Style::default().fg(FOOTER_KEY_COLOR);

    let hints: &[(&str, &str)] = if labeling {
        &[("type", "label"), ("Enter", "done")]
    } else if mode == Mode::Create {
        &[
            ("w/a/s/d", "new box"),
            ("Esc", "edit mode"),
            ("o", "fit"),
            ("q", "quit"),
        ]
    } else {
        &[
            ("Tab", "next box"),
            ("Enter", "edit label"),
            ("Esc", "create mode"),
            ("q", "quit"),
        ]
    };

    let mut spans = vec![
        Span::styled(FOOTER_BRAND, Style::default().fg(FOOTER_BRAND_COLOR)),
        Span::styled(format!("{} ", mode.as_str()), label),
    ];
    for (key_name, meaning) in hints {
        spans.push(Span::raw(" "));
        spans.push(Span::styled((*key_name).to_owned(), key));
        spans.push(Span::raw(" "));
        spans.push(Span::styled((*meaning).to_owned(), label));
        spans.push(Span::raw(" ·"));
    }
    if let Some(last) = spans.last() {
        if last.content == " ·" {
            spans.pop();
        }
    }
    Line::from(spans)
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}
