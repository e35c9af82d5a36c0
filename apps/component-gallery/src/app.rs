//! Gallery state and input handling.

use crate::config::GalleryConfig;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::layout::Rect;
use serde_json::{json, Value};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tui_components::table::{Column, ColumnWidth, Table, TableEvent, TableState};
use tui_components::toast::{StackEvent, ToastHandle, ToastId, ToastPosition, ToastProvider, ToastSpec};
use tui_components::{
    AlertState, Clock, DialogOutcome, DialogState, InputEvent, InputState, SystemClock,
    TooltipState,
};
use tui_style::{ButtonVariant, InputVariant, StyleKey, TableVariant, ToastVariant};

/// Entries kept in the activity log.
const ACTIVITY_LIMIT: usize = 200;

/// Delay used when the tooltip page is in delayed mode.
const TOOLTIP_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Toasts,
    Table,
    Buttons,
    Alerts,
    Feedback,
    Dialog,
    Tooltip,
    Inputs,
}

impl Page {
    pub const ALL: [Page; 8] = [
        Page::Toasts,
        Page::Table,
        Page::Buttons,
        Page::Inputs,
        Page::Alerts,
        Page::Feedback,
        Page::Dialog,
        Page::Tooltip,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Page::Toasts => "Toasts",
            Page::Table => "Table",
            Page::Buttons => "Buttons",
            Page::Alerts => "Alerts",
            Page::Feedback => "Badges & Loading",
            Page::Dialog => "Dialog",
            Page::Tooltip => "Tooltip",
            Page::Inputs => "Inputs",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Shared, append-only activity log.
pub type Activity = Rc<RefCell<VecDeque<String>>>;

fn push_activity(activity: &Activity, line: impl Into<String>) {
    let stamp = chrono::Local::now().format("%H:%M:%S");
    let mut log = activity.borrow_mut();
    log.push_front(format!("{stamp} {}", line.into()));
    log.truncate(ACTIVITY_LIMIT);
}

pub struct App {
    pub config: GalleryConfig,
    pub page: Page,
    pub should_quit: bool,
    pub tick: u64,
    pub activity: Activity,

    // Toasts
    pub toasts: ToastProvider,
    toast_handle: ToastHandle,
    last_toast: Option<ToastId>,

    // Table
    pub table: Table<Value>,
    pub table_state: TableState,
    table_empty: bool,

    // Catalog pages
    pub button_variant: ButtonVariant,
    pub button_loading: bool,
    pub button_disabled: bool,
    pub alerts: Vec<AlertState>,
    pub dialog: DialogState,
    pub tooltip: TooltipState,
    pub tooltip_anchor: Rect,
    pub tooltip_delayed: bool,
    /// Name, email and password fields.
    pub inputs: [InputState; 3],
    pub input_variant: InputVariant,
}

impl App {
    pub fn new(config: GalleryConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    pub fn with_clock(config: GalleryConfig, clock: impl Clock + 'static) -> Self {
        let activity: Activity = Rc::new(RefCell::new(VecDeque::new()));
        let toasts = ToastProvider::with_clock(config.toasts.clone(), clock);
        let toast_handle = toasts.handle();

        let log = Rc::clone(&activity);
        toasts.region_mut().subscribe(move |event| {
            let line = match event {
                StackEvent::Created(id) => format!("{id} created"),
                StackEvent::Dismissed(id) => format!("{id} dismissed"),
                StackEvent::Cleared(ids) => format!("cleared {} toasts", ids.len()),
            };
            push_activity(&log, line);
        });

        let table = Self::build_table(config.table.variant, &activity, &toast_handle);
        let button_variant = config.theme.button;

        Self {
            config,
            page: Page::Toasts,
            should_quit: false,
            tick: 0,
            activity,
            toasts,
            toast_handle,
            last_toast: None,
            table,
            table_state: TableState::new(),
            table_empty: false,
            button_variant,
            button_loading: false,
            button_disabled: false,
            alerts: vec![AlertState::new(); 6],
            dialog: DialogState::new(),
            tooltip: TooltipState::default(),
            tooltip_anchor: Rect::default(),
            tooltip_delayed: false,
            inputs: Default::default(),
            input_variant: InputVariant::default(),
        }
    }

    fn build_table(variant: TableVariant, activity: &Activity, toasts: &ToastHandle) -> Table<Value> {
        let order_log = Rc::clone(activity);
        let click_log = Rc::clone(activity);
        let click_toasts = toasts.clone();

        Table::new(vec![
            Column::new("name", "Name").orderable(true),
            Column::new("role", "Role").orderable(true),
            Column::new("age", "Age")
                .orderable(true)
                .width(ColumnWidth::Fixed(8)),
            Column::new("email", "Email"),
        ])
        .data(sample_rows())
        .variant(variant)
        .on_order_change(move |key, direction| {
            push_activity(&order_log, format!("order by {key} {}", direction.short_name()));
        })
        .on_row_click(move |row: &Value| {
            let name = row["name"].as_str().unwrap_or("row").to_string();
            push_activity(&click_log, format!("clicked {name}"));
            if let Err(err) = click_toasts.try_show(ToastSpec::info(format!("Opened {name}"))) {
                tracing::warn!(%err, "row click toast dropped");
            }
        })
    }

    /// Current instant on the gallery clock.
    pub fn now(&self) -> Instant {
        self.toasts.region().now()
    }

    /// How long the event loop may wait before something needs a tick.
    pub fn poll_timeout(&self) -> Duration {
        let mut timeout = Duration::from_millis(self.config.tick_rate_ms.max(1));
        if let Some(next) = self.toasts.region().time_until_next() {
            timeout = timeout.min(next);
        }
        if let Some(at) = self.tooltip.deadline() {
            timeout = timeout.min(at.saturating_duration_since(self.now()));
        }
        timeout
    }

    /// Advance animations and fire due timers.
    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        self.table.set_tick(self.tick);
        for transition in self.toasts.tick() {
            tracing::trace!(id = %transition.id, to = %transition.to, "toast transition");
        }
        let now = self.now();
        if self.tooltip.tick(now) {
            push_activity(&self.activity, "tooltip shown");
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.dialog.is_open() {
            if let Some(outcome) = self.dialog.handle_key(key) {
                self.dialog_closed(outcome);
            }
            return;
        }

        if self.page == Page::Inputs && self.inputs_key(key) {
            return;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::NONE)
            | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            (KeyCode::Tab, _) => {
                self.page = self.page.next();
                return;
            }
            (KeyCode::BackTab, _) => {
                self.page = self.page.prev();
                return;
            }
            _ => {}
        }

        match self.page {
            Page::Toasts => self.toasts_key(key),
            Page::Table => self.table_key(key),
            Page::Buttons => self.buttons_key(key),
            Page::Alerts => {
                if key.code == KeyCode::Char('r') {
                    self.alerts.iter_mut().for_each(AlertState::reopen);
                }
            }
            Page::Dialog => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char('o')) {
                    self.dialog.open();
                }
            }
            Page::Tooltip => {
                if key.code == KeyCode::Char('t') {
                    self.tooltip_delayed = !self.tooltip_delayed;
                    self.tooltip.hover_leave();
                }
            }
            Page::Feedback | Page::Inputs => {}
        }
    }

    /// Keys for the inputs page. Returns whether the key was consumed, which
    /// is always the case while a field has focus.
    fn inputs_key(&mut self, key: KeyEvent) -> bool {
        let Some(focused) = self.inputs.iter().position(InputState::is_focused) else {
            match key.code {
                KeyCode::Enter | KeyCode::Char('i') => self.inputs[0].focus(),
                KeyCode::Char('v') => self.input_variant = self.input_variant.next(),
                _ => return false,
            }
            return true;
        };

        match key.code {
            KeyCode::Esc => self.inputs[focused].blur(),
            KeyCode::Tab | KeyCode::BackTab => {
                let step = if key.code == KeyCode::Tab { 1 } else { self.inputs.len() - 1 };
                self.inputs[focused].blur();
                self.inputs[(focused + step) % self.inputs.len()].focus();
            }
            _ => {
                if self.inputs[focused].handle_key(key) == Some(InputEvent::Submitted) {
                    self.submit_inputs();
                }
            }
        }
        true
    }

    fn submit_inputs(&mut self) {
        let [name, email, _] = &self.inputs;
        let spec = if name.value().trim().is_empty() {
            ToastSpec::warning("Name is required")
        } else if let Some(error) = email_error(email.value()) {
            ToastSpec::error(error)
        } else {
            ToastSpec::success(format!("Signed up {}", name.value().trim()))
        };
        push_activity(&self.activity, "form submitted");
        self.last_toast = Some(self.toast_handle.show(spec));
    }

    fn toasts_key(&mut self, key: KeyEvent) {
        let spec = match key.code {
            KeyCode::Char('1') => Some(ToastSpec::new().message("Something happened")),
            KeyCode::Char('2') => Some(ToastSpec::success("Changes saved").title("Saved")),
            KeyCode::Char('3') => Some(ToastSpec::warning("Disk is 90% full").title("Storage")),
            KeyCode::Char('4') => Some(ToastSpec::error("Could not reach server").title("Offline")),
            KeyCode::Char('5') => Some(ToastSpec::info("A new version is available")),
            KeyCode::Char('s') => Some(
                ToastSpec::with_message(ToastVariant::Info, "Stays until closed")
                    .title("Sticky")
                    .sticky(),
            ),
            _ => None,
        };
        if let Some(spec) = spec {
            self.last_toast = Some(self.toast_handle.show(spec));
            return;
        }

        match key.code {
            KeyCode::Char('d') => {
                if let Some(id) = self.last_toast.take() {
                    self.toast_handle.close(id);
                }
            }
            KeyCode::Char('x') => {
                self.toast_handle.close_all();
            }
            KeyCode::Char('p') => {
                let mut config = self.toasts.region().config().clone();
                let index = ToastPosition::ALL
                    .iter()
                    .position(|p| *p == config.position)
                    .unwrap_or(0);
                config.position = ToastPosition::ALL[(index + 1) % ToastPosition::ALL.len()];
                push_activity(&self.activity, format!("toasts at {}", config.position.name()));
                self.toasts.region_mut().set_config(config);
            }
            _ => {}
        }
    }

    fn table_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('L') => {
                let loading = !self.table.is_loading();
                self.table.set_loading(loading);
            }
            KeyCode::Char('E') => {
                self.table_empty = !self.table_empty;
                let data = if self.table_empty { Vec::new() } else { sample_rows() };
                self.table.set_data(Some(data));
                self.table.sort_rows(&self.table_state.order);
            }
            KeyCode::Char('v') => {
                self.config.table.variant = self.config.table.variant.next();
                self.table.set_variant(self.config.table.variant);
            }
            _ => {
                let event = self.table.handle_key(key, &mut self.table_state);
                self.table_event(event);
            }
        }
    }

    fn table_event(&mut self, event: Option<TableEvent>) {
        if let Some(TableEvent::OrderChanged { .. }) = event {
            self.table.sort_rows(&self.table_state.order);
        }
    }

    fn buttons_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Right | KeyCode::Char('l') => self.button_variant = self.button_variant.next(),
            KeyCode::Left | KeyCode::Char('h') => self.button_variant = self.button_variant.prev(),
            KeyCode::Char('L') => self.button_loading = !self.button_loading,
            KeyCode::Char('d') => self.button_disabled = !self.button_disabled,
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.dialog.is_open() {
            if let Some(outcome) = self.dialog.handle_mouse(mouse) {
                self.dialog_closed(outcome);
            }
            return;
        }
        if self.toasts.region_mut().handle_mouse(mouse) {
            return;
        }

        match self.page {
            Page::Table => {
                let event = self.table.handle_mouse(mouse, &mut self.table_state);
                self.table_event(event);
            }
            Page::Alerts => {
                for state in &mut self.alerts {
                    if state.handle_mouse(mouse) {
                        push_activity(&self.activity, "alert closed");
                        break;
                    }
                }
            }
            Page::Inputs => {
                for state in &mut self.inputs {
                    state.handle_mouse(mouse);
                }
            }
            Page::Tooltip => {
                let delay = if self.tooltip_delayed {
                    TOOLTIP_DELAY
                } else {
                    Duration::ZERO
                };
                let now = self.now();
                self.tooltip
                    .handle_mouse(mouse, self.tooltip_anchor, now, delay);
            }
            _ => {}
        }
    }

    fn dialog_closed(&mut self, outcome: DialogOutcome) {
        let spec = match outcome {
            DialogOutcome::Confirmed => ToastSpec::success("Item deleted"),
            DialogOutcome::Cancelled => ToastSpec::new().message("Deletion cancelled"),
        };
        push_activity(&self.activity, format!("dialog {outcome:?}"));
        self.last_toast = Some(self.toast_handle.show(spec));
    }
}

/// Validation message for the email field, if the value is not acceptable.
pub fn email_error(value: &str) -> Option<&'static str> {
    match value.split_once('@') {
        _ if value.is_empty() => None,
        Some((user, domain)) if !user.is_empty() && domain.contains('.') => None,
        _ => Some("Enter an address like name@example.com"),
    }
}

fn sample_rows() -> Vec<Value> {
    vec![
        json!({ "name": "Ada Lovelace", "role": "Admin", "age": 36, "email": "ada@example.com" }),
        json!({ "name": "Alan Turing", "role": "Editor", "age": 41, "email": "alan@example.com" }),
        json!({ "name": "Grace Hopper", "role": "Admin", "age": 85, "email": "grace@example.com" }),
        json!({ "name": "Linus Torvalds", "role": "Viewer", "age": 54, "email": "linus@example.com" }),
        json!({ "name": "Margaret Hamilton", "role": "Editor", "age": 87, "email": "margaret@example.com" }),
        json!({ "name": "Ken Thompson", "role": "Viewer", "age": 81, "email": "ken@example.com" }),
        json!({ "name": "Barbara Liskov", "role": "Admin", "age": 84, "email": "barbara@example.com" }),
        json!({ "name": "Dennis Ritchie", "role": "Editor", "age": 70, "email": "dennis@example.com" }),
    ]
}
