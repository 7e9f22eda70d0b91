//! App: component-based event loop around one `Session`.
//!
//! Architecture:
//! - `App` owns the components and `AppState` (which owns the `Session`).
//! - Session work reports back on the `SessionEvent` channel; terminal input
//!   arrives on a second channel fed by a blocking reader task.
//! - The loop draws a frame when something changed, then awaits the next
//!   event, the count-up interval or the UI tick.
//! - Components return `Vec<Action>`; App dispatches each Action.

use std::io;
use std::time::Duration;

use ratatui::crossterm::{
    event::{
        self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste,
        EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
    Terminal,
};
use tokio::sync::mpsc;
use tracing::{debug, info, trace};

use factlens_core::render::COUNT_UP_TICK;
use factlens_core::session::ScrollRequest;
use factlens_core::validate::MAX_TEXT_CHARS;
use factlens_core::SessionEvent;

use crate::{
    action::{Action, ComponentId},
    app_state::AppState,
    component::Component,
    components::{
        banner::draw_banner, header::Header, input_panel::InputPanel, result_pane::ResultPane,
    },
    focus::FocusRing,
    widgets::{status_bar, toast::draw_toast},
};

const INPUT_PANE_HEIGHT: u16 = 5;

/// Screen areas from the last draw, for mouse hit-testing and paging.
#[derive(Default)]
struct PaneAreas {
    input: Rect,
    results: Rect,
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.x + area.width && row >= area.y && row < area.y + area.height
}

pub struct App {
    state: AppState,
    focus: FocusRing,
    header: Header,
    input_panel: InputPanel,
    result_pane: ResultPane,
    pane_areas: PaneAreas,
    should_quit: bool,
}

impl App {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            focus: FocusRing::default(),
            header: Header,
            input_panel: InputPanel::new(),
            result_pane: ResultPane::new(),
            pane_areas: PaneAreas::default(),
            should_quit: false,
        }
    }

    // ── Main run loop ─────────────────────────────────────────────────────────

    pub async fn run(mut self, session_rx: mpsc::Receiver<SessionEvent>) -> anyhow::Result<()> {
        debug!("run(): enabling raw mode");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableBracketedPaste)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        debug!("run(): terminal created, size={:?}", terminal.size());

        let result = self.event_loop(&mut terminal, session_rx).await;

        // ── Teardown ──────────────────────────────────────────────────────────
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableBracketedPaste
        )?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        mut session_rx: mpsc::Receiver<SessionEvent>,
    ) -> anyhow::Result<()> {
        // ── Background task: keyboard/mouse/paste events ──────────────────────
        let (input_tx, mut input_rx) = mpsc::channel::<Event>(256);
        tokio::task::spawn_blocking(move || {
            // Poll with a timeout so the task notices the loop has gone away.
            while !input_tx.is_closed() {
                match event::poll(Duration::from_millis(100)) {
                    Ok(true) => match event::read() {
                        Ok(ev) => {
                            if input_tx.blocking_send(ev).is_err() {
                                break;
                            }
                        }
                        Err(_) => break,
                    },
                    Ok(false) => {}
                    Err(_) => break,
                }
            }
        });

        self.state.session.fetch_model_status();
        info!("factlens ui started against {}", self.state.server);

        // ── Periodic timers ───────────────────────────────────────────────────
        let mut count_up = tokio::time::interval(COUNT_UP_TICK);
        count_up.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        // Spinner animation and the staggered reasoning reveal.
        let mut ui_tick = tokio::time::interval(Duration::from_millis(100));
        ui_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        // ── Main loop ─────────────────────────────────────────────────────────
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal.draw(|f| self.draw(f))?;
            }
            needs_redraw = false;

            if self.should_quit {
                break;
            }

            tokio::select! {
                Some(event) = session_rx.recv() => {
                    const MAX_DRAIN: usize = 256;
                    self.state.session.handle(event);
                    let mut drained = 0usize;
                    while drained < MAX_DRAIN {
                        match session_rx.try_recv() {
                            Ok(next) => self.state.session.handle(next),
                            Err(_) => break,
                        }
                        drained += 1;
                    }
                    self.apply_scroll_request();
                    needs_redraw = true;
                }

                Some(ev) = input_rx.recv() => {
                    needs_redraw = self.handle_event(ev);
                }

                _ = count_up.tick() => {
                    let running = self
                        .state
                        .session
                        .displayed()
                        .is_some_and(|d| !d.confidence.is_done());
                    if running {
                        self.state.session.tick_count_up();
                        needs_redraw = true;
                    }
                }

                _ = ui_tick.tick() => {
                    let tick_actions = {
                        let s = &self.state;
                        let mut all = Vec::new();
                        all.extend(self.input_panel.tick(s));
                        all.extend(self.result_pane.tick(s));
                        all
                    };
                    for action in tick_actions {
                        self.dispatch(action);
                    }
                    needs_redraw = true;
                }
            }
        }

        Ok(())
    }

    // ── Input ─────────────────────────────────────────────────────────────────

    /// Returns whether the frame needs redrawing.
    fn handle_event(&mut self, ev: Event) -> bool {
        let actions = match ev {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Paste(pasted) => self.input_panel.paste(&pasted, &self.state),
            Event::Resize(w, h) => {
                trace!("resize {}x{}", w, h);
                return true;
            }
            _ => return false,
        };
        for action in actions {
            self.dispatch(action);
        }
        true
    }

    fn page_size(&self) -> usize {
        self.pane_areas.results.height.saturating_sub(3).max(1) as usize
    }

    fn handle_key(&mut self, key: KeyEvent) -> Vec<Action> {
        if key.kind == KeyEventKind::Release {
            return vec![];
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Global keys, whatever has focus.
        match key.code {
            KeyCode::Char('c') if ctrl => return vec![Action::Quit],
            KeyCode::Esc => return vec![Action::Quit],
            KeyCode::Char('t') if ctrl => return vec![Action::ToggleMode],
            KeyCode::Char('l') if ctrl => return vec![Action::Clear],
            KeyCode::Char('n') if ctrl => return vec![Action::AnalyzeAnother],
            KeyCode::F(2) => return vec![Action::ToggleTheme],
            KeyCode::F(3) => return vec![Action::CycleThemeStyle],
            KeyCode::Tab => return vec![Action::FocusNext],
            KeyCode::BackTab => return vec![Action::FocusPrev],
            KeyCode::Enter => return vec![Action::Submit],
            KeyCode::PageUp => return vec![Action::ScrollUp(self.page_size())],
            KeyCode::PageDown => return vec![Action::ScrollDown(self.page_size())],
            _ => {}
        }

        match self.focus.current() {
            Some(ComponentId::InputPanel) => self.input_panel.handle_key(key, &self.state),
            Some(ComponentId::ResultPane) => self.result_pane.handle_key(key, &self.state),
            None => vec![],
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Vec<Action> {
        let (col, row) = (mouse.column, mouse.row);
        if contains(self.pane_areas.results, col, row) {
            if let MouseEventKind::Down(_) = mouse.kind {
                return vec![Action::FocusPane(ComponentId::ResultPane)];
            }
            let area = self.pane_areas.results;
            return self.result_pane.handle_mouse(mouse, area, &self.state);
        }
        if contains(self.pane_areas.input, col, row) {
            let area = self.pane_areas.input;
            if let MouseEventKind::Down(_) = mouse.kind {
                return vec![Action::FocusPane(ComponentId::InputPanel)];
            }
            return self.input_panel.handle_mouse(mouse, area, &self.state);
        }
        vec![]
    }

    // ── Action dispatch ───────────────────────────────────────────────────────

    fn dispatch(&mut self, action: Action) {
        // Broadcast to components first so they can react (scrolling).
        let secondary: Vec<Action> = {
            let s = &self.state;
            let mut out = Vec::new();
            out.extend(self.input_panel.on_action(&action, s));
            out.extend(self.result_pane.on_action(&action, s));
            out
        };

        self.apply_action(action);

        // Depth-limited to one level.
        for a in secondary {
            self.apply_action(a);
        }

        self.apply_scroll_request();
    }

    fn apply_action(&mut self, action: Action) {
        match &action {
            Action::ScrollUp(_) | Action::ScrollDown(_) => {}
            Action::EditText(_) | Action::EditUrl(_) => trace!("apply_action: {:?}", action),
            _ => debug!("apply_action: {:?}", action),
        }
        let session = &mut self.state.session;
        match action {
            // ── Input ─────────────────────────────────────────────────────────
            Action::EditText(value) => {
                if session.set_text(value) {
                    debug!("text capped at {} characters", MAX_TEXT_CHARS);
                }
            }
            Action::EditUrl(value) => session.set_url(value),
            Action::ToggleMode => {
                session.toggle_mode();
                self.focus.set(ComponentId::InputPanel);
            }
            Action::Submit => {
                if session.submit() {
                    info!("submitted {:?} input", session.mode());
                }
            }
            Action::Clear => session.clear(),
            Action::AnalyzeAnother => session.analyze_another(),

            // ── Navigation ────────────────────────────────────────────────────
            Action::FocusNext => {
                self.focus.next();
            }
            Action::FocusPrev => {
                self.focus.prev();
            }
            Action::FocusPane(id) => self.focus.set(id),
            // Owned by the result pane.
            Action::ScrollUp(_)
            | Action::ScrollDown(_)
            | Action::ScrollTop
            | Action::ScrollBottom => {}

            // ── Appearance ────────────────────────────────────────────────────
            Action::ToggleTheme => {
                let mut prefs = self.state.prefs;
                prefs.theme = prefs.theme.toggled();
                self.state.set_prefs(prefs);
            }
            Action::CycleThemeStyle => {
                let mut prefs = self.state.prefs;
                prefs.theme_style = prefs.theme_style.next();
                self.state.set_prefs(prefs);
            }

            Action::Quit => self.should_quit = true,
        }
    }

    /// Move focus and viewport when the session asks for it.
    fn apply_scroll_request(&mut self) {
        let Some(request) = self.state.session.take_scroll_request() else {
            return;
        };
        let target = match request {
            ScrollRequest::Results => ComponentId::ResultPane,
            ScrollRequest::Top => ComponentId::InputPanel,
        };
        debug!("scroll request {:?}", request);
        self.focus.set(target);
        let _ = self.result_pane.on_action(&Action::ScrollTop, &self.state);
    }

    // ── Drawing ───────────────────────────────────────────────────────────────

    fn draw(&mut self, frame: &mut ratatui::Frame) {
        let area = frame.area();
        let palette = self.state.palette;

        frame.render_widget(Block::default().style(Style::default().bg(palette.bg)), area);

        // header | input | banner | results | keys
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(INPUT_PANE_HEIGHT),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        self.header.draw(frame, outer[0], &self.state);

        let input_focused = self.focus.is_focused(self.input_panel.id());
        self.input_panel.draw(frame, outer[1], input_focused, &self.state);
        self.pane_areas.input = outer[1];

        draw_banner(frame, outer[2], self.state.session.banner(), &palette);

        let results_focused = self.focus.is_focused(self.result_pane.id());
        self.result_pane.draw(frame, outer[3], results_focused, &self.state);
        self.pane_areas.results = outer[3];

        status_bar::draw_keys_bar(
            frame,
            outer[4],
            self.state.session.mode(),
            self.focus.current().unwrap_or(ComponentId::InputPanel),
            &palette,
        );

        // Topmost layer.
        draw_toast(frame, area, self.state.session.toast(), &palette);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::test_state;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn global_keys_map_to_actions() {
        let mut app = App::new(test_state());
        assert_eq!(app.handle_key(ctrl('t')), vec![Action::ToggleMode]);
        assert_eq!(app.handle_key(ctrl('n')), vec![Action::AnalyzeAnother]);
        assert_eq!(app.handle_key(key(KeyCode::F(3))), vec![Action::CycleThemeStyle]);
        assert_eq!(app.handle_key(key(KeyCode::Esc)), vec![Action::Quit]);
    }

    #[test]
    fn typing_reaches_the_session() {
        let mut app = App::new(test_state());
        for c in "short".chars() {
            let actions = app.handle_key(key(KeyCode::Char(c)));
            for a in actions {
                app.dispatch(a);
            }
        }
        assert_eq!(app.state.session.text(), "short");
        assert!(!app.state.session.primary_control().enabled);
    }

    #[test]
    fn focused_results_scroll_instead_of_typing() {
        let mut app = App::new(test_state());
        app.dispatch(Action::FocusNext);
        assert_eq!(app.handle_key(key(KeyCode::Char('j'))), vec![Action::ScrollDown(1)]);
        assert_eq!(app.state.session.text(), "");
    }

    #[test]
    fn mode_toggle_returns_focus_to_input() {
        let mut app = App::new(test_state());
        app.dispatch(Action::FocusPane(ComponentId::ResultPane));
        app.dispatch(Action::ToggleMode);
        assert_eq!(app.state.session.mode(), factlens_core::InputMode::Url);
        assert!(app.focus.is_focused(ComponentId::InputPanel));
    }

    #[tokio::test]
    async fn short_submit_raises_toast_without_loading() {
        let mut app = App::new(test_state());
        app.dispatch(Action::EditText("tiny".to_string()));
        app.dispatch(Action::Submit);
        assert!(!app.state.session.is_loading());
        assert_eq!(
            app.state.session.toast().map(|t| t.message.as_str()),
            Some("Please enter at least 10 characters")
        );
    }

    #[test]
    fn full_frame_draws() {
        use ratatui::backend::TestBackend;

        let mut app = App::new(test_state());
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();
        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(screen.contains("factlens"));
        assert!(screen.contains("Detect Fake News"));
        assert_eq!(app.pane_areas.input.height, INPUT_PANE_HEIGHT);
    }
}
