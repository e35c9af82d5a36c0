use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph, Tabs, Wrap},
};
use tui_components::{
    describe, Alert, Badge, Button, ConfirmDialog, IconName, Input, Loading, Tooltip,
};
use tui_style::{AlertVariant, ButtonVariant, LoadingVariant, Size, StyleKey};

use crate::app::{email_error, App, Page};

pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Page tabs
            Constraint::Min(1),    // Page + activity
            Constraint::Length(1), // Help line
        ])
        .split(frame.area());

    render_tabs(frame, app, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(34)])
        .split(chunks[1]);

    match app.page {
        Page::Toasts => render_toasts_page(frame, app, body[0]),
        Page::Table => {
            frame.render_stateful_widget(&app.table, body[0], &mut app.table_state);
        }
        Page::Buttons => render_buttons_page(frame, app, body[0]),
        Page::Alerts => render_alerts_page(frame, app, body[0]),
        Page::Feedback => render_feedback_page(frame, app, body[0]),
        Page::Dialog => render_dialog_page(frame, body[0]),
        Page::Tooltip => render_tooltip_page(frame, app, body[0]),
        Page::Inputs => render_inputs_page(frame, app, body[0]),
    }

    render_activity(frame, app, body[1]);
    render_help(frame, app, chunks[2]);

    // Overlays
    if app.dialog.is_open() {
        let dialog = ConfirmDialog::new(
            "Delete item?",
            "The item and its history will be removed. This cannot be undone.",
        );
        frame.render_stateful_widget(dialog, frame.area(), &mut app.dialog);
    }
    let area = frame.area();
    app.toasts.render(area, frame.buffer_mut());
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<&str> = Page::ALL.iter().map(|p| p.title()).collect();
    let selected = Page::ALL.iter().position(|p| *p == app.page).unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, area);
}

fn render_toasts_page(frame: &mut Frame, app: &App, area: Rect) {
    let region = app.toasts.region();
    let config = region.config();
    let mut lines = vec![
        Line::from("1-5  raise default / success / warning / error / info"),
        Line::from("s    raise a sticky toast"),
        Line::from("d    close the newest toast"),
        Line::from("x    close all toasts"),
        Line::from("p    move the stack"),
        Line::from(""),
        Line::from(format!(
            "position {}   max visible {}   queued {}",
            config.position.name(),
            config.max_visible,
            region.queued()
        )),
        Line::from(""),
    ];
    for (id, phase) in region.visible() {
        let label = region
            .get(id)
            .and_then(|t| t.title().or(t.message()))
            .unwrap_or_default()
            .to_string();
        lines.push(Line::from(format!("{id:<10} {phase:<9} {label}")));
    }

    let block = Block::default().borders(Borders::ALL).title(" Toasts ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_buttons_page(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Buttons: {} ", app.button_variant));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let featured = Button::new("Continue")
        .variant(app.button_variant)
        .size(Size::Large)
        .left_icon(IconName::Check)
        .right_icon(IconName::ArrowRight)
        .loading(app.button_loading)
        .disabled(app.button_disabled)
        .tick(app.tick);
    let featured_area = Rect::new(
        inner.x,
        inner.y,
        featured.width().min(inner.width),
        featured.height().min(inner.height),
    );
    frame.render_widget(featured, featured_area);

    // Every variant, flowed left to right
    let mut x = inner.x;
    let mut y = featured_area.bottom() + 1;
    for variant in ButtonVariant::ALL {
        let button = Button::new(variant.name())
            .variant(*variant)
            .size(Size::Small)
            .focused(*variant == app.button_variant);
        let (w, h) = (button.width(), button.height());
        if x + w > inner.right() {
            x = inner.x;
            y += 3;
        }
        if y + h > inner.bottom() {
            break;
        }
        frame.render_widget(button, Rect::new(x, y, w, h));
        x += w + 1;
    }
}

fn render_alerts_page(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut y = area.y;
    for (variant, state) in AlertVariant::ALL.iter().zip(app.alerts.iter_mut()) {
        let alert = Alert::new(*variant)
            .title(variant.name())
            .body("Alerts take a variant, size and rounding, and may be closed.")
            .closable(true);
        if !state.is_open() {
            continue;
        }
        let height = alert.height(area.width);
        if y + height > area.bottom() {
            break;
        }
        frame.render_stateful_widget(alert, Rect::new(area.x, y, area.width, height), state);
        y += height;
    }
}

fn render_feedback_page(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Badges & Loading ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut x = inner.x;
    for (count, blink) in [(0, false), (7, false), (42, false), (100, true)] {
        let badge = Badge::new(count).blink(blink);
        let w = badge.width();
        frame.render_widget(badge, Rect::new(x, inner.y, w, 1));
        x += w + 2;
    }

    let mut y = inner.y + 2;
    for variant in LoadingVariant::ALL {
        for size in Size::ALL {
            if y >= inner.bottom() {
                return;
            }
            let label = format!("{} / {}", variant.name(), size.name());
            let loading = Loading::new()
                .variant(*variant)
                .size(*size)
                .message(Some(label.as_str()))
                .tick(app.tick);
            frame.buffer_mut().set_line(inner.x, y, &loading.line(), inner.width);
            y += 1;
        }
    }

    y += 1;
    let mut x = inner.x;
    for icon in IconName::ALL {
        let text = format!("{} {}", icon.glyph(), icon.name());
        let w = u16::try_from(text.chars().count()).unwrap_or(0) + 2;
        if x + w > inner.right() {
            x = inner.x;
            y += 1;
        }
        if y >= inner.bottom() {
            break;
        }
        frame.buffer_mut().set_string(x, y, &text, Style::default());
        x += w;
    }
}

fn render_dialog_page(frame: &mut Frame, area: Rect) {
    let text = "Press o or Enter to open the confirm dialog.\n\n\
                Tab or arrows move focus, Enter activates, Esc or a click \
                outside the dialog cancels.";
    let block = Block::default().borders(Borders::ALL).title(" Dialog ");
    frame.render_widget(
        Paragraph::new(text).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn render_tooltip_page(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Tooltip ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mode = if app.tooltip_delayed { "500 ms delay" } else { "no delay" };
    frame.render_widget(
        Paragraph::new(format!("Hover the button ({mode}, t toggles)")),
        inner,
    );

    let button = Button::new("Hover me").left_icon(IconName::Info);
    let (w, h) = (button.width(), button.height());
    let anchor = Rect::new(
        inner.x + inner.width.saturating_sub(w) / 2,
        inner.y + inner.height.saturating_sub(h) / 2,
        w.min(inner.width),
        h.min(inner.height),
    );
    app.tooltip_anchor = anchor;
    frame.render_widget(button, anchor);

    let tooltip = Tooltip::new("Tooltips follow the pointer's hover state", anchor);
    frame.render_stateful_widget(tooltip, inner, &mut app.tooltip);
}

fn render_inputs_page(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Inputs: {} ", app.input_variant));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let email = app.inputs[1].value().to_string();
    let fields = [
        Input::new()
            .label("Name")
            .placeholder("Ada Lovelace")
            .left_icon(IconName::User)
            .required(true),
        Input::new()
            .label("Email")
            .placeholder("name@example.com")
            .left_icon(IconName::Mail)
            .helper("Used for sign-in only")
            .error(email_error(&email)),
        Input::new()
            .label("Password")
            .right_icon(IconName::Settings)
            .helper("At least 8 characters")
            .masked(true),
    ];

    let mut y = inner.y;
    for (input, state) in fields.into_iter().zip(app.inputs.iter_mut()) {
        let input = input.variant(app.input_variant);
        let height = input.height();
        if y + height > inner.bottom() {
            break;
        }
        frame.render_stateful_widget(input, Rect::new(inner.x, y, inner.width.min(48), height), state);
        y += height + 1;
    }
}

fn render_activity(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .activity
        .borrow()
        .iter()
        .take(usize::from(area.height))
        .map(|line| ListItem::new(line.clone()))
        .collect();
    let block = Block::default().borders(Borders::ALL).title(" Activity ");
    frame.render_widget(List::new(items).block(block), area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let keys = match app.page {
        Page::Toasts => "1-5 raise  s sticky  d close  x close all  p position",
        Page::Table => "↑↓ select  ←→ column  s sort  Enter open  L loading  E empty  v variant",
        Page::Buttons => "←→ variant  L loading  d disabled",
        Page::Alerts => "click ✕ to close  r reopen",
        Page::Feedback => "",
        Page::Dialog => "o open",
        Page::Tooltip => "t toggle delay",
        Page::Inputs if app.inputs.iter().any(|i| i.is_focused()) => {
            "type to edit  Tab next field  Enter submit  Esc leave"
        }
        Page::Inputs => "i or click to edit  v variant",
    };
    let focus = match app.page {
        Page::Table => describe(&app.table),
        Page::Buttons => describe(
            &Button::new(app.button_variant.name())
                .loading(app.button_loading)
                .disabled(app.button_disabled),
        ),
        _ => String::new(),
    };
    let line = format!(" Tab page  q quit  {keys}  {focus}");
    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(Color::Blue).fg(Color::White)),
        area,
    );
}
