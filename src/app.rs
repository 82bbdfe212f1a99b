//! Terminal host for the site widgets
//!
//! Mounts one `FormController` and one `SliderController`, forwards key and
//! mouse events to them and runs demo requests on background tasks.

use crate::api::{ApiClient, DemoRequestTransport};
use crate::config::SiteConfig;
use crate::error::SubmissionError;
use crate::state::{
    ContactFormFocus, FieldKey, Form, FormController, FormStatus, PageLayout, SliderController,
    SliderTrack, SubmissionReceipt,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

type SubmissionOutcome = Result<Option<SubmissionReceipt>, SubmissionError>;

/// Slider step for arrow keys, in percentage points
const NUDGE_STEP: f64 = 1.0;
/// Slider step for Shift + arrow keys
const NUDGE_STEP_LARGE: f64 = 10.0;

/// Which widget receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    ContactForm,
    ComparisonSlider,
}

/// Main application struct
pub struct App {
    /// Demo request form
    pub form: FormController,
    /// Focus inside the contact form
    pub form_focus: ContactFormFocus,
    /// RGB / thermal comparison slider
    pub slider: SliderController,
    /// Widget under keyboard focus
    pub focus: Focus,
    /// Terminal size for layout calculations (height, width)
    pub terminal_size: Option<(u16, u16)>,
    /// Where demo requests are sent
    pub endpoint: String,
    transport: Arc<dyn DemoRequestTransport>,
    outcome_tx: UnboundedSender<SubmissionOutcome>,
    outcome_rx: UnboundedReceiver<SubmissionOutcome>,
    needs_redraw: Arc<AtomicBool>,
    quit: bool,
}

impl App {
    /// Create a new App posting to the configured backend
    pub fn new(config: &SiteConfig) -> Result<Self> {
        let client = ApiClient::new(config)?;
        let endpoint = client.endpoint().to_string();
        Ok(Self::with_transport(Arc::new(client), endpoint))
    }

    /// Create an App around any transport
    pub fn with_transport(transport: Arc<dyn DemoRequestTransport>, endpoint: String) -> Self {
        let (outcome_tx, outcome_rx) = unbounded_channel();
        let needs_redraw = Arc::new(AtomicBool::new(true));

        let mut form = FormController::new();
        let flag = Arc::clone(&needs_redraw);
        form.on_state_change(move |_| flag.store(true, Ordering::Relaxed));

        let mut slider = SliderController::new();
        let flag = Arc::clone(&needs_redraw);
        slider.on_position_change(move |_| flag.store(true, Ordering::Relaxed));

        Self {
            form,
            form_focus: ContactFormFocus::default(),
            slider,
            focus: Focus::default(),
            terminal_size: None,
            endpoint,
            transport,
            outcome_tx,
            outcome_rx,
            needs_redraw,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether a widget changed since the last call
    pub fn take_redraw(&self) -> bool {
        self.needs_redraw.swap(false, Ordering::Relaxed)
    }

    /// Ask for a redraw (resize, focus change)
    pub fn request_redraw(&self) {
        self.needs_redraw.store(true, Ordering::Relaxed);
    }

    /// Page layout for the current terminal size
    pub fn layout(&self) -> PageLayout {
        let (height, width) = self.terminal_size.unwrap_or((24, 80));
        PageLayout::compute(Rect::new(0, 0, width, height))
    }

    /// Hint shown in the status bar
    pub fn status_hint(&self) -> &'static str {
        match (self.focus, self.form.status()) {
            (Focus::ComparisonSlider, _) => "←/→ move  Shift+←/→ jump  r center  Tab form  Esc quit",
            (Focus::ContactForm, FormStatus::Sent) => "Enter send another request  Tab slider  Esc quit",
            (Focus::ContactForm, FormStatus::Sending) => "Sending demo request...",
            (Focus::ContactForm, _) => "Tab next field  Ctrl+S submit  Esc quit",
        }
    }

    /// Start a submission; the request runs on a background task
    pub fn submit_form(&mut self) {
        let Some(fields) = self.form.submit() else {
            return;
        };
        let transport = Arc::clone(&self.transport);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = transport.send_demo_request(&fields).await;
            let _ = tx.send(outcome);
        });
    }

    /// Apply outcomes of finished submissions
    pub fn poll_submissions(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.form.complete_submission(outcome);
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.quit = true;
            return;
        }

        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.submit_form();
            return;
        }

        match key.code {
            KeyCode::Tab => {
                self.focus_next();
                return;
            }
            KeyCode::BackTab => {
                self.focus_prev();
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::ContactForm => self.handle_form_key(key),
            Focus::ComparisonSlider => self.handle_slider_key(key),
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        if self.form.status() == FormStatus::Sent {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char('n')) {
                self.form.reset();
                self.form_focus = ContactFormFocus::default();
            }
            return;
        }

        let Some(field) = self.form_focus.active_key() else {
            // Submit button row
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                self.submit_form();
            }
            return;
        };

        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let mut value = self.form.state().fields.get(field).to_string();
                value.push(c);
                self.form.update_field(field, value);
            }
            KeyCode::Backspace => {
                let mut value = self.form.state().fields.get(field).to_string();
                if value.pop().is_some() {
                    self.form.update_field(field, value);
                }
            }
            KeyCode::Enter if field.is_multiline() => {
                let mut value = self.form.state().fields.get(field).to_string();
                value.push('\n');
                self.form.update_field(field, value);
            }
            KeyCode::Enter | KeyCode::Down => self.form_focus.next_field(),
            KeyCode::Up => self.form_focus.prev_field(),
            _ => return,
        }
        self.request_redraw();
    }

    fn handle_slider_key(&mut self, key: KeyEvent) {
        let step = if key.modifiers.contains(KeyModifiers::SHIFT) {
            NUDGE_STEP_LARGE
        } else {
            NUDGE_STEP
        };
        match key.code {
            KeyCode::Left => self.slider.nudge(-step),
            KeyCode::Right => self.slider.nudge(step),
            KeyCode::Home => self.slider.nudge(-100.0),
            KeyCode::End => self.slider.nudge(100.0),
            KeyCode::Char('r') => self.slider.reset(),
            _ => {}
        }
    }

    fn focus_next(&mut self) {
        match self.focus {
            Focus::ContactForm if self.form_focus.is_submit_active() || self.form_is_locked() => {
                self.focus = Focus::ComparisonSlider;
            }
            Focus::ContactForm => self.form_focus.next_field(),
            Focus::ComparisonSlider => {
                self.focus = Focus::ContactForm;
                self.form_focus.set_active_field(0);
            }
        }
        self.request_redraw();
    }

    fn focus_prev(&mut self) {
        match self.focus {
            Focus::ContactForm if self.form_focus.active_field() == 0 || self.form_is_locked() => {
                self.focus = Focus::ComparisonSlider;
            }
            Focus::ContactForm => self.form_focus.prev_field(),
            Focus::ComparisonSlider => {
                self.focus = Focus::ContactForm;
                self.form_focus.set_active_field(ContactFormFocus::SUBMIT_INDEX);
            }
        }
        self.request_redraw();
    }

    /// The success panel replaces the fields
    fn form_is_locked(&self) -> bool {
        self.form.status() == FormStatus::Sent
    }

    /// Handle a mouse event
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let layout = self.layout();
        let track = layout.slider_track;
        let pointer_x = SliderTrack::pointer_x(mouse.column);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if track.contains(mouse.column, mouse.row) {
                    self.focus = Focus::ComparisonSlider;
                    self.slider.pointer_down(pointer_x, track.bounds());
                } else if layout
                    .contact_form
                    .contains(Position::new(mouse.column, mouse.row))
                {
                    self.focus = Focus::ContactForm;
                    self.request_redraw();
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.slider.pointer_move(pointer_x, track.bounds());
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.slider.pointer_up();
            }
            _ => {}
        }
    }

    /// Focus a specific form field
    pub fn focus_field(&mut self, key: FieldKey) {
        self.focus = Focus::ContactForm;
        self.form_focus.focus_key(key);
    }
}
