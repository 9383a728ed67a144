//! Interactive TUI wizard for the know and discover flows
//!
//! This module renders one question per screen and turns key presses into
//! engine transitions. It holds no answer data of its own: the
//! `SubmissionDriver` owns the `WizardState`, and every frame is drawn from
//! the latest state.
//!
//! # Architecture
//!
//! - `WizardApp`: UI-only state (chip input buffer, list cursor, notices)
//!   plus the driver
//! - `StepAction`: what the event loop should do after a key press or tick
//! - `WizardResult`: final output, either the completed state or a quit
//!
//! # Keys
//!
//! - Enter: next question, add a typed chip, or submit on the last question
//! - Shift+Tab, or Backspace on an empty input: previous question
//! - Space: pick/toggle an option, remove the highlighted chip
//! - Tab: move between chip input and chip list
//! - Esc / Ctrl+C: quit confirmation

use std::io::{stdout, Stdout};
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Terminal,
};
use tokio::runtime::Handle;

use crate::engine::{Question, QuestionKind, SubmissionDriver, WizardError, WizardState};
use crate::flows::{Flow, ResultPayload};
use crate::remote::Evaluator;

// ============================================================================
// Core Types
// ============================================================================

/// Result of wizard execution
#[derive(Debug)]
pub enum WizardResult {
    /// The evaluator answered; the state holds the result
    Completed(Box<WizardState<ResultPayload>>),
    /// User quit the wizard
    Quit,
}

/// Action to take after handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction {
    /// Keep running
    Stay,
    /// User confirmed quitting
    Quit,
    /// Result is in, leave the TUI
    Complete,
}

/// Which part of a chip question has the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipFocus {
    Input,
    Chips,
}

/// Inline message under the current question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Error(String),
    Info(String),
}

// ============================================================================
// Wizard App
// ============================================================================

pub struct WizardApp<E: Evaluator<Output = ResultPayload>> {
    pub flow: Flow,
    pub driver: SubmissionDriver<E>,
    /// Text typed into a chip question, not yet added
    pub chip_input: String,
    /// Highlighted option or chip
    pub cursor: usize,
    pub chip_focus: ChipFocus,
    pub notice: Option<Notice>,
    pub show_quit_confirm: bool,
}

impl<E> WizardApp<E>
where
    E: Evaluator<Output = ResultPayload> + 'static,
{
    pub fn new(
        flow: Flow,
        state: WizardState<ResultPayload>,
        evaluator: Arc<E>,
        runtime: Handle,
    ) -> Self {
        let mut app = Self {
            flow,
            driver: SubmissionDriver::new(state, evaluator, runtime),
            chip_input: String::new(),
            cursor: 0,
            chip_focus: ChipFocus::Input,
            notice: None,
            show_quit_confirm: false,
        };
        app.reset_step_ui();
        app
    }

    pub fn state(&self) -> &WizardState<ResultPayload> {
        self.driver.state()
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: KeyEvent) -> StepAction {
        // Quit confirmation overlay first
        if self.show_quit_confirm {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => return StepAction::Quit,
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.show_quit_confirm = false;
                }
                _ => {}
            }
            return StepAction::Stay;
        }

        let ctrl_c =
            key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c');
        if key.code == KeyCode::Esc || ctrl_c {
            self.show_quit_confirm = true;
            return StepAction::Stay;
        }

        if self.state().is_complete() {
            return StepAction::Complete;
        }

        // Answers are frozen while evaluating; Enter resubmits
        if self.driver.is_busy() && key.code != KeyCode::Enter {
            return StepAction::Stay;
        }

        if key.code == KeyCode::BackTab {
            self.back();
            return StepAction::Stay;
        }

        let Some(question) = self.state().current_question().cloned() else {
            return StepAction::Stay;
        };

        match question.kind {
            QuestionKind::Text | QuestionKind::Number => self.handle_text(&question, key),
            QuestionKind::Chips => self.handle_chips(&question, key),
            QuestionKind::Single | QuestionKind::Multi => self.handle_choice(&question, key),
        }
        StepAction::Stay
    }

    /// Collect a finished submission, if any
    pub fn tick(&mut self) -> StepAction {
        match self.driver.poll() {
            Some(Ok(())) if self.state().is_complete() => StepAction::Complete,
            Some(Err(err)) => {
                self.notice = Some(Notice::Error(format!(
                    "{} Press Enter to try again.",
                    err
                )));
                StepAction::Stay
            }
            _ => StepAction::Stay,
        }
    }

    fn handle_text(&mut self, question: &Question, key: KeyEvent) {
        let current = self
            .state()
            .answers()
            .text(&question.id)
            .unwrap_or("")
            .to_string();

        match key.code {
            KeyCode::Char(c) => {
                if question.kind == QuestionKind::Number
                    && !(c.is_ascii_digit() || c == '.' || c == '-')
                {
                    return;
                }
                let mut value = current;
                value.push(c);
                self.set_answer(&question.id, &value);
            }
            KeyCode::Backspace => {
                if current.is_empty() {
                    self.back();
                } else {
                    let mut value = current;
                    value.pop();
                    self.set_answer(&question.id, &value);
                }
            }
            KeyCode::Enter => self.advance(),
            _ => {}
        }
    }

    fn handle_chips(&mut self, question: &Question, key: KeyEvent) {
        let chips: Vec<String> = self
            .state()
            .answers()
            .choices(&question.id)
            .map(|set| set.iter().map(str::to_string).collect())
            .unwrap_or_default();

        if key.code == KeyCode::Tab {
            self.chip_focus = match self.chip_focus {
                ChipFocus::Input if !chips.is_empty() => ChipFocus::Chips,
                _ => ChipFocus::Input,
            };
            self.cursor = 0;
            return;
        }

        match (self.chip_focus, key.code) {
            (ChipFocus::Input, KeyCode::Char(c)) => self.chip_input.push(c),
            (ChipFocus::Input, KeyCode::Backspace) => {
                if self.chip_input.pop().is_none() {
                    self.back();
                }
            }
            (ChipFocus::Input, KeyCode::Enter) => {
                if self.chip_input.trim().is_empty() {
                    self.advance();
                } else {
                    let raw = std::mem::take(&mut self.chip_input);
                    let result = self.driver.apply(|s| s.add_chip(&question.id, &raw));
                    self.report(result);
                }
            }
            (ChipFocus::Chips, KeyCode::Up) => self.cursor = self.cursor.saturating_sub(1),
            (ChipFocus::Chips, KeyCode::Down) => {
                if self.cursor + 1 < chips.len() {
                    self.cursor += 1;
                }
            }
            (ChipFocus::Chips, KeyCode::Char(' '))
            | (ChipFocus::Chips, KeyCode::Delete)
            | (ChipFocus::Chips, KeyCode::Backspace) => {
                if let Some(chip) = chips.get(self.cursor) {
                    let result = self.driver.apply(|s| s.remove_chip(&question.id, chip));
                    self.report(result);
                }
                let remaining = chips.len().saturating_sub(1);
                if remaining == 0 {
                    self.chip_focus = ChipFocus::Input;
                    self.cursor = 0;
                } else {
                    self.cursor = self.cursor.min(remaining - 1);
                }
            }
            (ChipFocus::Chips, KeyCode::Enter) => self.advance(),
            (ChipFocus::Chips, KeyCode::Char(c)) => {
                self.chip_focus = ChipFocus::Input;
                self.chip_input.push(c);
            }
            _ => {}
        }
    }

    fn handle_choice(&mut self, question: &Question, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down => {
                if self.cursor + 1 < question.options.len() {
                    self.cursor += 1;
                }
            }
            KeyCode::Char(' ') => {
                if let Some(option) = question.options.get(self.cursor) {
                    self.set_answer(&question.id, option);
                }
            }
            KeyCode::Enter => {
                // Enter on a single-choice question picks the highlighted option
                if question.kind == QuestionKind::Single {
                    if let Some(option) = question.options.get(self.cursor) {
                        self.set_answer(&question.id, option);
                    }
                }
                self.advance();
            }
            KeyCode::Backspace => self.back(),
            _ => {}
        }
    }

    fn set_answer(&mut self, id: &str, value: &str) {
        let result = self.driver.apply(|s| s.set_answer(id, value));
        self.report(result);
    }

    /// Next question, or submit from the last one
    fn advance(&mut self) {
        if self.state().is_last_question() {
            self.submit();
        } else {
            self.next();
        }
    }

    fn next(&mut self) {
        let result = self.driver.apply(WizardState::go_next);
        if result.is_ok() {
            self.notice = None;
            self.reset_step_ui();
        }
        self.report(result);
    }

    fn back(&mut self) {
        let before = self.state().current_index();
        let result = self.driver.apply(|s| Ok(s.go_back()));
        if self.state().current_index() != before {
            self.notice = None;
            self.reset_step_ui();
        }
        self.report(result);
    }

    fn submit(&mut self) {
        match self.driver.start_submit() {
            Ok(()) => {
                self.notice = Some(Notice::Info(self.flow.busy_label().to_string()));
            }
            Err(err) => self.notice = Some(Notice::Error(err.to_string())),
        }
    }

    fn report(&mut self, result: std::result::Result<(), WizardError>) {
        if let Err(err) = result {
            self.notice = Some(Notice::Error(err.to_string()));
        }
    }

    /// Reset per-question UI on arrival; single choice starts on the picked option
    fn reset_step_ui(&mut self) {
        self.chip_input.clear();
        self.chip_focus = ChipFocus::Input;
        self.cursor = self
            .state()
            .current_question()
            .filter(|q| q.kind == QuestionKind::Single)
            .and_then(|q| {
                let picked = self.state().answers().text(&q.id)?;
                q.options.iter().position(|o| o == picked)
            })
            .unwrap_or(0);
    }
}

// ============================================================================
// Terminal Setup/Teardown
// ============================================================================

/// Setup terminal for TUI rendering with panic-safe cleanup
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;

    // Install panic hook for clean terminal restoration
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        teardown_terminal();
        original_hook(panic_info);
    }));

    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn teardown_terminal() {
    let _ = disable_raw_mode();
    let _ = stdout().execute(LeaveAlternateScreen);
}

// ============================================================================
// Entry Point
// ============================================================================

/// Run the wizard interface until the result arrives or the user quits
pub fn run_wizard<E>(
    flow: Flow,
    state: WizardState<ResultPayload>,
    evaluator: Arc<E>,
    runtime: Handle,
) -> Result<WizardResult>
where
    E: Evaluator<Output = ResultPayload> + 'static,
{
    let mut app = WizardApp::new(flow, state, evaluator, runtime);

    let mut terminal = setup_terminal()?;
    let result = run_wizard_loop(&mut terminal, &mut app);
    teardown_terminal();

    result
}

/// Main wizard event loop
fn run_wizard_loop<E>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut WizardApp<E>,
) -> Result<WizardResult>
where
    E: Evaluator<Output = ResultPayload> + 'static,
{
    loop {
        if app.tick() == StepAction::Complete {
            return Ok(WizardResult::Completed(Box::new(app.state().clone())));
        }

        terminal.draw(|f| render_wizard(f, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events, not release
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match app.handle_key(key) {
                    StepAction::Quit => {
                        app.driver.cancel();
                        return Ok(WizardResult::Quit);
                    }
                    StepAction::Complete => {
                        return Ok(WizardResult::Completed(Box::new(app.state().clone())));
                    }
                    StepAction::Stay => {}
                }
            }
        }
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Create a centered rectangle with fixed dimensions
fn centered_fixed_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.width.saturating_sub(width) / 2;
    let y = area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Semantic color for a question kind
fn kind_color(kind: QuestionKind) -> Color {
    match kind {
        QuestionKind::Text => Color::Cyan,
        QuestionKind::Number => Color::Yellow,
        QuestionKind::Chips => Color::Magenta,
        QuestionKind::Single | QuestionKind::Multi => Color::Green,
    }
}

/// Box header, e.g. " Step 2/5 · Number " or " Test 1/3 · Energy check "
pub fn step_title<R: Clone>(state: &WizardState<R>) -> String {
    let progress = state.progress();
    match progress.section {
        Some(section) => format!(
            " Test {}/{} \u{00b7} {} ",
            section.index, section.total, section.title
        ),
        None => format!(" Step {}/{} ", progress.step, progress.total),
    }
}

/// Render the complete wizard UI
fn render_wizard<E>(f: &mut Frame, app: &WizardApp<E>)
where
    E: Evaluator<Output = ResultPayload> + 'static,
{
    let area = f.area();

    let header_height = 2u16;
    let hint_height = 1u16;
    let box_width = 72u16;
    let ideal_box_height = 20u16;
    let box_height =
        ideal_box_height.min(area.height.saturating_sub(header_height + hint_height + 2));

    let total_height = header_height + box_height + hint_height;
    let x = area.width.saturating_sub(box_width) / 2;
    let y = area.height.saturating_sub(total_height) / 2;

    // 1. Flow title
    let header_area = Rect::new(x, y, box_width.min(area.width), header_height);
    let header = Paragraph::new(Line::from(vec![
        Span::styled(app.flow.title(), Style::default().fg(Color::Cyan).bold()),
        Span::styled(
            format!("  ({} questions)", app.state().question_count()),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(header, header_area);

    // 2. Question box
    let box_area = Rect::new(
        x,
        y + header_height,
        box_width.min(area.width),
        box_height.max(10),
    );
    f.render_widget(Clear, box_area);

    let color = app
        .state()
        .current_question()
        .map(|q| kind_color(q.kind))
        .unwrap_or(Color::Cyan);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(step_title(app.state()))
        .title_style(Style::default().fg(color).bold())
        .title_alignment(Alignment::Center);

    let inner = block.inner(box_area);
    f.render_widget(block, box_area);
    render_question(f, inner, app);

    // 3. Help bar
    let hint_area = Rect::new(
        x,
        box_area.y + box_area.height,
        box_width.min(area.width),
        1,
    );
    render_help_bar(f, hint_area, app);

    // 4. Quit overlay
    if app.show_quit_confirm {
        render_quit_confirm_overlay(f);
    }
}

fn render_question<E>(f: &mut Frame, area: Rect, app: &WizardApp<E>)
where
    E: Evaluator<Output = ResultPayload> + 'static,
{
    let Some(question) = app.state().current_question() else {
        let text = Paragraph::new(app.flow.busy_label()).alignment(Alignment::Center);
        f.render_widget(text, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Prompt and caption
            Constraint::Min(3),    // Input area
            Constraint::Length(2), // Notice
        ])
        .split(area);

    let mut prompt = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", question.prompt),
            Style::default().fg(Color::White).bold(),
        )),
    ];
    if let Some(caption) = question.section.as_ref().and_then(|s| s.caption.as_ref()) {
        prompt.push(Line::from(Span::styled(
            format!("  {}", caption),
            Style::default().fg(Color::DarkGray),
        )));
    }
    f.render_widget(Paragraph::new(prompt).wrap(Wrap { trim: false }), chunks[0]);

    match question.kind {
        QuestionKind::Text | QuestionKind::Number => {
            render_text_input(f, chunks[1], app, question)
        }
        QuestionKind::Chips => render_chips(f, chunks[1], app, question),
        QuestionKind::Single | QuestionKind::Multi => render_options(f, chunks[1], app, question),
    }

    render_notice(f, chunks[2], app);
}

fn render_text_input<E>(f: &mut Frame, area: Rect, app: &WizardApp<E>, question: &Question)
where
    E: Evaluator<Output = ResultPayload> + 'static,
{
    let color = kind_color(question.kind);
    let value = app.state().answers().text(&question.id).unwrap_or("");

    let line = if value.is_empty() {
        Line::from(vec![
            Span::styled("  > ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                question.placeholder.clone().unwrap_or_default(),
                Style::default().fg(Color::DarkGray).italic(),
            ),
            Span::styled("\u{258c}", Style::default().fg(color)),
        ])
    } else {
        Line::from(vec![
            Span::styled("  > ", Style::default().fg(Color::DarkGray)),
            Span::styled(value.to_string(), Style::default().fg(Color::White).bold()),
            Span::styled("\u{258c}", Style::default().fg(color)),
        ])
    };

    let mut content = vec![line];
    if question.required {
        content.push(Line::from(""));
        content.push(Line::from(Span::styled(
            "  * required",
            Style::default().fg(Color::DarkGray),
        )));
    }
    f.render_widget(Paragraph::new(content), area);
}

fn render_chips<E>(f: &mut Frame, area: Rect, app: &WizardApp<E>, question: &Question)
where
    E: Evaluator<Output = ResultPayload> + 'static,
{
    let color = kind_color(question.kind);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let input_border = if app.chip_focus == ChipFocus::Input {
        color
    } else {
        Color::DarkGray
    };
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(input_border))
        .title(" Add ")
        .title_style(Style::default().fg(Color::DarkGray));

    let input_line = if app.chip_input.is_empty() {
        Line::from(vec![
            Span::styled(
                question.placeholder.clone().unwrap_or_default(),
                Style::default().fg(Color::DarkGray).italic(),
            ),
            Span::styled("\u{258c}", Style::default().fg(color)),
        ])
    } else {
        Line::from(vec![
            Span::styled(app.chip_input.clone(), Style::default().fg(Color::White)),
            Span::styled("\u{258c}", Style::default().fg(color)),
        ])
    };
    f.render_widget(Paragraph::new(input_line).block(input_block), chunks[0]);

    let chips: Vec<&str> = app
        .state()
        .answers()
        .choices(&question.id)
        .map(|set| set.iter().collect())
        .unwrap_or_default();

    let items: Vec<ListItem> = chips
        .iter()
        .enumerate()
        .map(|(i, chip)| {
            let style = if app.chip_focus == ChipFocus::Chips && i == app.cursor {
                Style::default().fg(Color::Black).bg(color).bold()
            } else {
                Style::default().fg(color)
            };
            ListItem::new(format!("  {} \u{00d7}", chip)).style(style)
        })
        .collect();

    let mut list_state = ListState::default();
    if app.chip_focus == ChipFocus::Chips {
        list_state.select(Some(app.cursor));
    }
    f.render_stateful_widget(List::new(items), chunks[1], &mut list_state);
}

fn render_options<E>(f: &mut Frame, area: Rect, app: &WizardApp<E>, question: &Question)
where
    E: Evaluator<Output = ResultPayload> + 'static,
{
    let color = kind_color(question.kind);
    let answers = app.state().answers();

    let items: Vec<ListItem> = question
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let picked = match question.kind {
                QuestionKind::Multi => answers
                    .choices(&question.id)
                    .is_some_and(|set| set.contains(option)),
                _ => answers.text(&question.id) == Some(option.as_str()),
            };
            let marker = match (question.kind, picked) {
                (QuestionKind::Multi, true) => "[x]",
                (QuestionKind::Multi, false) => "[ ]",
                (_, true) => "(\u{2022})",
                (_, false) => "( )",
            };
            let style = if i == app.cursor {
                Style::default().fg(Color::Black).bg(color).bold()
            } else if picked {
                Style::default().fg(color).bold()
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!("  {} {}", marker, option)).style(style)
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(app.cursor));
    f.render_stateful_widget(List::new(items), area, &mut list_state);
}

fn render_notice<E>(f: &mut Frame, area: Rect, app: &WizardApp<E>)
where
    E: Evaluator<Output = ResultPayload> + 'static,
{
    let line = match &app.notice {
        Some(Notice::Error(message)) => Line::from(Span::styled(
            format!("  {}", message),
            Style::default().fg(Color::Red),
        )),
        Some(Notice::Info(message)) if app.state().is_submitting() => Line::from(Span::styled(
            format!("  {}", message),
            Style::default().fg(Color::Yellow),
        )),
        _ => Line::from(""),
    };
    f.render_widget(Paragraph::new(line).wrap(Wrap { trim: true }), area);
}

/// Render help bar with context-appropriate shortcuts
fn render_help_bar<E>(f: &mut Frame, area: Rect, app: &WizardApp<E>)
where
    E: Evaluator<Output = ResultPayload> + 'static,
{
    let kind = app.state().current_question().map(|q| q.kind);
    let mut spans = vec![];

    spans.push(Span::styled("  Enter", Style::default().fg(Color::Cyan)));
    let enter = if app.state().is_last_question() {
        format!(" {}  ", app.flow.submit_label().to_lowercase())
    } else {
        " next  ".to_string()
    };
    spans.push(Span::styled(enter, Style::default().fg(Color::DarkGray)));

    match kind {
        Some(QuestionKind::Single) | Some(QuestionKind::Multi) => {
            spans.push(Span::styled("Space", Style::default().fg(Color::Cyan)));
            spans.push(Span::styled(
                " pick  ",
                Style::default().fg(Color::DarkGray),
            ));
        }
        Some(QuestionKind::Chips) => {
            spans.push(Span::styled("Tab", Style::default().fg(Color::Cyan)));
            spans.push(Span::styled(
                " chips  ",
                Style::default().fg(Color::DarkGray),
            ));
        }
        _ => {}
    }

    if app.state().current_index() > 0 {
        spans.push(Span::styled("Shift+Tab", Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(
            " back  ",
            Style::default().fg(Color::DarkGray),
        ));
    }

    spans.push(Span::styled("Esc", Style::default().fg(Color::Cyan)));
    spans.push(Span::styled(" quit", Style::default().fg(Color::DarkGray)));

    let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

/// Render quit confirmation overlay
fn render_quit_confirm_overlay(f: &mut Frame) {
    let popup = centered_fixed_rect(40, 8, f.area());
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Quit Wizard? ")
        .title_style(Style::default().fg(Color::Red).bold())
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Your answers will be lost. Quit?",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("      ", Style::default()),
            Span::styled("Y", Style::default().fg(Color::Cyan)),
            Span::styled(" yes  ", Style::default().fg(Color::DarkGray)),
            Span::styled("N", Style::default().fg(Color::Cyan)),
            Span::styled(" no", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    f.render_widget(Paragraph::new(content), inner);
}
