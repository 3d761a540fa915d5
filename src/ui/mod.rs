// 🖥️ Dashboard UI - Six tabs over one financial context
//
// Tab state and key handling live here; the tab renderers are in `tabs`.
// The event loop polls for keys with a short timeout so the chat's pending
// reply can be delivered between key presses.

mod tabs;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use fiinora::{
    travel::{self, TRIP_LENGTHS},
    BudgetTier, ChatSession, CommunityFeed, DashboardConfig, Destination, FinancialContext,
    NearbyPlace, QUICK_QUESTIONS,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, TableState},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

const TICK_RATE: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Wallet,
    Manage,
    Invest,
    Assistant,
    Explorer,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Home,
        Tab::Wallet,
        Tab::Manage,
        Tab::Invest,
        Tab::Assistant,
        Tab::Explorer,
    ];

    pub fn next(&self) -> Self {
        match self {
            Tab::Home => Tab::Wallet,
            Tab::Wallet => Tab::Manage,
            Tab::Manage => Tab::Invest,
            Tab::Invest => Tab::Assistant,
            Tab::Assistant => Tab::Explorer,
            Tab::Explorer => Tab::Home,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Tab::Home => Tab::Explorer,
            Tab::Wallet => Tab::Home,
            Tab::Manage => Tab::Wallet,
            Tab::Invest => Tab::Manage,
            Tab::Assistant => Tab::Invest,
            Tab::Explorer => Tab::Assistant,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Tab::Home => "Home",
            Tab::Wallet => "Wallet",
            Tab::Manage => "Manage",
            Tab::Invest => "Invest",
            Tab::Assistant => "Assistant",
            Tab::Explorer => "Explorer",
        }
    }

    /// '1' → Home ... '6' → Explorer
    pub fn from_digit(c: char) -> Option<Tab> {
        let n = c.to_digit(10)? as usize;
        Self::ALL.get(n.checked_sub(1)?).copied()
    }

    /// Tabs with a text field
    pub fn accepts_input(&self) -> bool {
        matches!(self, Tab::Home | Tab::Assistant | Tab::Explorer)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

pub struct App {
    pub ctx: FinancialContext,
    pub current_tab: Tab,
    pub input_mode: InputMode,

    // Assistant
    pub chat: ChatSession,
    pub chat_input: String,
    pub quick_selected: usize,

    // Home
    pub feed: CommunityFeed,
    pub post_input: String,

    // Explorer
    pub destinations: Vec<Destination>,
    pub destination_index: usize,
    pub tier: BudgetTier,
    pub trip_days: u32,
    pub places: Vec<NearbyPlace>,
    pub place_query: String,
    pub conversion_rate: f64,

    pub accounts_state: TableState,
    pub holdings_state: TableState,
}

impl App {
    pub fn new(ctx: FinancialContext, config: &DashboardConfig) -> Self {
        let mut accounts_state = TableState::default();
        if !ctx.snapshot().accounts.is_empty() {
            accounts_state.select(Some(0));
        }

        let mut holdings_state = TableState::default();
        if !ctx.snapshot().portfolio_holdings.is_empty() {
            holdings_state.select(Some(0));
        }

        Self {
            ctx,
            current_tab: Tab::Home,
            input_mode: InputMode::Normal,
            chat: ChatSession::new(config.reply_delay()),
            chat_input: String::new(),
            quick_selected: 0,
            feed: CommunityFeed::new(),
            post_input: String::new(),
            destinations: travel::destinations(),
            destination_index: 0,
            tier: BudgetTier::MidRange,
            trip_days: config.default_trip_days,
            places: travel::nearby_places(),
            place_query: String::new(),
            conversion_rate: config.conversion_rate,
            accounts_state,
            holdings_state,
        }
    }

    pub fn next_tab(&mut self) {
        self.current_tab = self.current_tab.next();
        self.input_mode = InputMode::Normal;
    }

    pub fn previous_tab(&mut self) {
        self.current_tab = self.current_tab.previous();
        self.input_mode = InputMode::Normal;
    }

    pub fn selected_destination(&self) -> Option<&Destination> {
        self.destinations.get(self.destination_index)
    }

    pub fn filtered_places(&self) -> Vec<&NearbyPlace> {
        travel::filter_places(&self.places, &self.place_query)
    }

    /// Advance to the next offered trip length, wrapping to the shortest
    pub fn next_trip_length(&mut self) {
        self.trip_days = TRIP_LENGTHS
            .iter()
            .copied()
            .find(|&d| d > self.trip_days)
            .unwrap_or(TRIP_LENGTHS[0]);
    }

    /// Submit one of the quick questions from any tab
    pub fn ask_quick(&mut self, index: usize, now: Instant) {
        let Some(question) = QUICK_QUESTIONS.get(index) else {
            return;
        };
        self.current_tab = Tab::Assistant;
        self.quick_selected = index;
        self.chat.submit(question, now);
    }

    /// Deliver a due chat reply; called once per loop iteration
    pub fn on_tick(&mut self, now: Instant) {
        self.chat.poll(now, &self.ctx);
    }

    /// Returns false when the app should quit
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        if let KeyCode::F(n @ 1..=5) = key.code {
            self.ask_quick(n as usize - 1, now);
            return true;
        }

        match key.code {
            KeyCode::BackTab => {
                self.previous_tab();
                return true;
            }
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    self.previous_tab();
                } else {
                    self.next_tab();
                }
                return true;
            }
            _ => {}
        }

        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key, now),
            InputMode::Editing => {
                self.handle_editing_key(key, now);
                true
            }
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        let explorer = self.current_tab == Tab::Explorer;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Char(c @ '1'..='6') => {
                if let Some(tab) = Tab::from_digit(c) {
                    self.current_tab = tab;
                }
            }
            KeyCode::Char('i') | KeyCode::Char('/') if self.current_tab.accepts_input() => {
                self.input_mode = InputMode::Editing;
            }
            KeyCode::Enter if self.current_tab == Tab::Assistant => {
                self.ask_quick(self.quick_selected, now);
            }
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Right | KeyCode::Char('l') if explorer => {
                self.destination_index = (self.destination_index + 1) % self.destinations.len().max(1);
            }
            KeyCode::Left | KeyCode::Char('h') if explorer => {
                let len = self.destinations.len().max(1);
                self.destination_index = (self.destination_index + len - 1) % len;
            }
            KeyCode::Char('b') if explorer => self.tier = self.tier.next(),
            KeyCode::Char('d') if explorer => self.next_trip_length(),
            _ => {}
        }

        true
    }

    fn handle_editing_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Esc => self.input_mode = InputMode::Normal,
            KeyCode::Enter => self.submit_input(now),
            KeyCode::Backspace => {
                if let Some(buffer) = self.input_buffer() {
                    buffer.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(buffer) = self.input_buffer() {
                    buffer.push(c);
                }
            }
            _ => {}
        }
    }

    fn input_buffer(&mut self) -> Option<&mut String> {
        match self.current_tab {
            Tab::Home => Some(&mut self.post_input),
            Tab::Assistant => Some(&mut self.chat_input),
            Tab::Explorer => Some(&mut self.place_query),
            _ => None,
        }
    }

    fn submit_input(&mut self, now: Instant) {
        match self.current_tab {
            // Chat stays in editing mode for the next question
            Tab::Assistant => {
                if self.chat.submit(&self.chat_input, now) {
                    self.chat_input.clear();
                }
            }
            Tab::Home => {
                let user = self.ctx.user();
                if self.feed.publish(&user.name, &user.initials, &self.post_input) {
                    self.post_input.clear();
                }
                self.input_mode = InputMode::Normal;
            }
            _ => self.input_mode = InputMode::Normal,
        }
    }

    fn select_next(&mut self) {
        match self.current_tab {
            Tab::Wallet => step(&mut self.accounts_state, self.ctx.snapshot().accounts.len(), true),
            Tab::Invest => step(&mut self.holdings_state, self.ctx.snapshot().portfolio_holdings.len(), true),
            Tab::Assistant => self.quick_selected = (self.quick_selected + 1) % QUICK_QUESTIONS.len(),
            _ => {}
        }
    }

    fn select_previous(&mut self) {
        match self.current_tab {
            Tab::Wallet => step(&mut self.accounts_state, self.ctx.snapshot().accounts.len(), false),
            Tab::Invest => step(&mut self.holdings_state, self.ctx.snapshot().portfolio_holdings.len(), false),
            Tab::Assistant => {
                self.quick_selected = (self.quick_selected + QUICK_QUESTIONS.len() - 1) % QUICK_QUESTIONS.len();
            }
            _ => {}
        }
    }
}

/// Move a table selection one row, wrapping at both ends
fn step(state: &mut TableState, len: usize, forward: bool) {
    if len == 0 {
        return;
    }
    let i = match state.selected() {
        Some(i) if forward => {
            if i >= len - 1 {
                0
            } else {
                i + 1
            }
        }
        Some(i) => {
            if i == 0 {
                len - 1
            } else {
                i - 1
            }
        }
        None => 0,
    };
    state.select(Some(i));
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && !app.handle_key(key, Instant::now()) {
                    debug!("Quit requested");
                    return Ok(());
                }
            }
        }

        app.on_tick(Instant::now());
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with tabs
            Constraint::Min(0),    // Content area
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    match app.current_tab {
        Tab::Home => tabs::render_home(f, chunks[1], app),
        Tab::Wallet => tabs::render_wallet(f, chunks[1], app),
        Tab::Manage => tabs::render_manage(f, chunks[1], app),
        Tab::Invest => tabs::render_invest(f, chunks[1], app),
        Tab::Assistant => tabs::render_assistant(f, chunks[1], app),
        Tab::Explorer => tabs::render_explorer(f, chunks[1], app),
    }

    render_status_bar(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let mut tab_spans = vec![Span::styled(
        "💰 Fiinora  ",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )];

    for (i, tab) in Tab::ALL.iter().enumerate() {
        if i > 0 {
            tab_spans.push(Span::raw(" │ "));
        }

        let style = if *tab == app.current_tab {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        tab_spans.push(Span::styled(format!("{} {}", i + 1, tab.title()), style));
    }

    let user = app.ctx.user();
    tab_spans.push(Span::raw("  |  "));
    tab_spans.push(Span::styled(
        format!("{} ({})", user.name, user.initials),
        Style::default().fg(Color::White),
    ));

    let header = Paragraph::new(vec![Line::from(tab_spans)])
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Cyan)));

    f.render_widget(header, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));

    let mut status_spans = vec![];

    if app.input_mode == InputMode::Editing {
        status_spans.push(Span::styled(" TYPING ", Style::default().fg(Color::Black).bg(Color::Yellow)));
        status_spans.push(Span::raw(" "));
        status_spans.push(key("Enter"));
        status_spans.push(Span::raw(" Submit | "));
        status_spans.push(key("Esc"));
        status_spans.push(Span::raw(" Stop typing"));
    } else {
        status_spans.push(key(" Tab"));
        status_spans.push(Span::raw(" Next | "));
        status_spans.push(key("1-6"));
        status_spans.push(Span::raw(" Jump | "));
        status_spans.push(key("F1-F5"));
        status_spans.push(Span::raw(" Quick ask"));

        match app.current_tab {
            Tab::Wallet | Tab::Invest => {
                status_spans.push(Span::raw(" | "));
                status_spans.push(key("↑/↓"));
                status_spans.push(Span::raw(" Nav"));
            }
            Tab::Explorer => {
                status_spans.push(Span::raw(" | "));
                status_spans.push(key("←/→"));
                status_spans.push(Span::raw(" City | "));
                status_spans.push(key("b"));
                status_spans.push(Span::raw(" Tier | "));
                status_spans.push(key("d"));
                status_spans.push(Span::raw(" Days"));
            }
            _ => {}
        }

        if app.current_tab.accepts_input() {
            status_spans.push(Span::raw(" | "));
            status_spans.push(key("i"));
            status_spans.push(Span::raw(" Type"));
        }

        status_spans.push(Span::raw(" | "));
        status_spans.push(Span::styled("q", Style::default().fg(Color::Red)));
        status_spans.push(Span::raw(" Quit"));
    }

    if app.chat.is_pending() {
        status_spans.push(Span::raw(" | "));
        status_spans.push(Span::styled("AI thinking...", Style::default().fg(Color::Magenta)));
    }

    let status_bar = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn app() -> App {
        App::new(FinancialContext::demo(), &DashboardConfig::default())
    }

    fn press(app: &mut App, code: KeyCode, now: Instant) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), now)
    }

    fn type_text(app: &mut App, text: &str, now: Instant) {
        for c in text.chars() {
            press(app, KeyCode::Char(c), now);
        }
    }

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(160, 50)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_tab_cycle() {
        let mut tab = Tab::Home;
        for _ in 0..Tab::ALL.len() {
            tab = tab.next();
        }
        assert_eq!(tab, Tab::Home);
        assert_eq!(Tab::Home.previous(), Tab::Explorer);
        assert_eq!(Tab::from_digit('5'), Some(Tab::Assistant));
        assert_eq!(Tab::from_digit('0'), None);
        assert_eq!(Tab::from_digit('7'), None);
    }

    #[test]
    fn test_tab_keys() {
        let mut app = app();
        let now = Instant::now();

        press(&mut app, KeyCode::Tab, now);
        assert_eq!(app.current_tab, Tab::Wallet);
        press(&mut app, KeyCode::BackTab, now);
        assert_eq!(app.current_tab, Tab::Home);
        app.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT), now);
        assert_eq!(app.current_tab, Tab::Explorer);

        press(&mut app, KeyCode::Char('3'), now);
        assert_eq!(app.current_tab, Tab::Manage);
    }

    #[test]
    fn test_digits_are_text_while_typing() {
        let mut app = app();
        let now = Instant::now();

        press(&mut app, KeyCode::Char('5'), now);
        press(&mut app, KeyCode::Char('i'), now);
        assert_eq!(app.input_mode, InputMode::Editing);

        type_text(&mut app, "q1", now);
        assert_eq!(app.chat_input, "q1");
        assert_eq!(app.current_tab, Tab::Assistant);

        press(&mut app, KeyCode::Backspace, now);
        assert_eq!(app.chat_input, "q");

        // Esc leaves typing, a second Esc quits
        assert!(press(&mut app, KeyCode::Esc, now));
        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(!press(&mut app, KeyCode::Esc, now));
    }

    #[test]
    fn test_quit_key() {
        let mut app = app();
        assert!(!press(&mut app, KeyCode::Char('q'), Instant::now()));
    }

    #[test]
    fn test_chat_round_trip() {
        let mut app = app();
        let start = Instant::now();

        press(&mut app, KeyCode::Char('5'), start);
        press(&mut app, KeyCode::Char('i'), start);
        type_text(&mut app, "How is my budget?", start);
        press(&mut app, KeyCode::Enter, start);

        assert!(app.chat_input.is_empty());
        assert!(app.chat.is_pending());
        assert_eq!(app.chat.messages().len(), 2);

        app.on_tick(start + Duration::from_millis(100));
        assert_eq!(app.chat.messages().len(), 2);

        app.on_tick(start + app.chat.reply_delay());
        assert_eq!(app.chat.messages().len(), 3);
        assert!(!app.chat.is_pending());
    }

    #[test]
    fn test_function_key_asks_quick_question() {
        let mut app = app();
        let now = Instant::now();

        press(&mut app, KeyCode::F(3), now);
        assert_eq!(app.current_tab, Tab::Assistant);
        assert_eq!(app.quick_selected, 2);
        assert_eq!(app.chat.messages()[1].content, QUICK_QUESTIONS[2]);

        // Guard holds while the reply is pending
        press(&mut app, KeyCode::F(1), now);
        assert_eq!(app.chat.messages().len(), 2);
    }

    #[test]
    fn test_quick_question_selection() {
        let mut app = app();
        let now = Instant::now();

        press(&mut app, KeyCode::Char('5'), now);
        press(&mut app, KeyCode::Up, now);
        assert_eq!(app.quick_selected, QUICK_QUESTIONS.len() - 1);
        press(&mut app, KeyCode::Enter, now);
        assert_eq!(app.chat.messages()[1].content, QUICK_QUESTIONS[QUICK_QUESTIONS.len() - 1]);
    }

    #[test]
    fn test_publish_post_from_home() {
        let mut app = app();
        let now = Instant::now();

        press(&mut app, KeyCode::Char('i'), now);
        type_text(&mut app, "Hit my savings goal", now);
        press(&mut app, KeyCode::Enter, now);

        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(app.post_input.is_empty());
        assert_eq!(app.feed.posts()[0].content, "Hit my savings goal");
        assert_eq!(app.feed.posts()[0].author, "Aamir");
    }

    #[test]
    fn test_explorer_controls() {
        let mut app = app();
        let now = Instant::now();

        press(&mut app, KeyCode::Char('6'), now);
        assert_eq!(app.trip_days, 7);
        press(&mut app, KeyCode::Char('d'), now);
        assert_eq!(app.trip_days, 14);
        press(&mut app, KeyCode::Char('d'), now);
        press(&mut app, KeyCode::Char('d'), now);
        assert_eq!(app.trip_days, 3);

        press(&mut app, KeyCode::Char('b'), now);
        assert_eq!(app.tier, BudgetTier::Luxury);

        press(&mut app, KeyCode::Left, now);
        assert_eq!(app.selected_destination().map(|d| d.name), Some("New York, USA"));

        press(&mut app, KeyCode::Char('/'), now);
        type_text(&mut app, "hotel", now);
        assert_eq!(app.filtered_places().len(), 2);
    }

    #[test]
    fn test_table_navigation_wraps() {
        let mut app = app();
        let now = Instant::now();

        press(&mut app, KeyCode::Char('2'), now);
        press(&mut app, KeyCode::Up, now);
        assert_eq!(app.accounts_state.selected(), Some(app.ctx.snapshot().accounts.len() - 1));
        press(&mut app, KeyCode::Down, now);
        assert_eq!(app.accounts_state.selected(), Some(0));
    }

    #[test]
    fn test_render_every_tab() {
        let mut app = app();

        let expectations = [
            (Tab::Home, "Community"),
            (Tab::Wallet, "HDFC Bank Savings"),
            (Tab::Manage, "Entertainment"),
            (Tab::Invest, "NIFTYBEES"),
            (Tab::Assistant, "financial intelligence"),
            (Tab::Explorer, "Paris, France"),
        ];

        for (tab, needle) in expectations {
            app.current_tab = tab;
            let text = screen(&mut app);
            assert!(text.contains("Fiinora"), "{:?} header missing", tab);
            assert!(text.contains(needle), "{:?} is missing {:?}", tab, needle);
        }
    }

    #[test]
    fn test_render_tiny_terminal_does_not_panic() {
        let mut app = app();
        for tab in Tab::ALL {
            app.current_tab = tab;
            let mut terminal = Terminal::new(TestBackend::new(20, 8)).unwrap();
            terminal.draw(|f| ui(f, &mut app)).unwrap();
        }
    }
}
