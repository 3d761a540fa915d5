// Tab renderers. Every figure is computed from the context on each draw.

use super::{App, InputMode, Tab};
use fiinora::{
    convert, feed, format_grouped, format_inr, format_localized, market, metrics, to_fixed,
    Account, Sender, QUICK_QUESTIONS,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Cell, LineGauge, Paragraph, Row, Sparkline, Table, Wrap},
    Frame,
};

// ============================================================================
// HOME
// ============================================================================

pub fn render_home(f: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Greeting
            Constraint::Length(3), // Quick cards
            Constraint::Min(0),
        ])
        .split(area);

    let user = app.ctx.user();
    let sentiment = &feed::MARKET_SENTIMENT;
    let greeting = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("  {}, {}!", feed::greeting_now(), user.name),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            format!("Market sentiment: {} ({}/100)", sentiment.label, sentiment.fear_greed_index),
            Style::default().fg(Color::Green),
        ),
    ]))
    .block(panel("Home"));
    f.render_widget(greeting, chunks[0]);

    render_quick_cards(f, chunks[1], app);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(0)])
        .split(columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(columns[1]);

    render_markets(f, left[0]);
    render_news(f, left[1]);
    render_community(f, right[0], app);

    let editing = app.input_mode == InputMode::Editing;
    render_input(f, right[1], "Share an update", &app.post_input, editing);
}

fn render_quick_cards(f: &mut Frame, area: Rect, app: &App) {
    let summary = app.ctx.summary();

    let budget_color = if summary.budget_utilization > 100.0 {
        Color::Red
    } else if summary.budget_utilization > 90.0 {
        Color::Yellow
    } else {
        Color::Green
    };

    let cards = [
        ("Budget Used", format!("{}%", to_fixed(summary.budget_utilization, 1)), budget_color),
        ("Savings Rate", format!("{}%", to_fixed(summary.savings_rate, 1)), Color::Green),
        ("Portfolio", format_inr(summary.portfolio_value), Color::Cyan),
        ("Net Worth", format_inr(summary.net_worth), amount_color(summary.net_worth)),
    ];

    let areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(area);

    for ((title, value, color), card_area) in cards.into_iter().zip(areas.iter()) {
        let card = Paragraph::new(Span::styled(
            format!(" {}", value),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .block(panel(title));
        f.render_widget(card, *card_area);
    }
}

fn render_markets(f: &mut Frame, area: Rect) {
    let lines: Vec<Line> = feed::market_tickers()
        .iter()
        .map(|t| {
            Line::from(vec![
                Span::styled(format!("  {:<10}", t.name), Style::default().fg(Color::White)),
                Span::raw(format!("{:>16}  ", format_localized(t.price, 2))),
                Span::styled(
                    format!("{}{}%", if t.change_percent >= 0.0 { "+" } else { "" }, to_fixed(t.change_percent, 1)),
                    Style::default().fg(amount_color(t.change_percent)),
                ),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(panel("Markets")), area);
}

fn render_news(f: &mut Frame, area: Rect) {
    let mut lines = Vec::new();

    for item in feed::news_items() {
        let marker = if item.trending { "🔥 " } else { "   " };
        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(item.title, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {}", item.summary),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(Span::styled(
            format!("   {} · {} · {} · ♥ {}  💬 {}", item.source, item.category, item.time, item.likes, item.comments),
            Style::default().fg(Color::Blue),
        )));
        lines.push(Line::from(""));
    }

    let news = Paragraph::new(lines)
        .block(panel("Financial News"))
        .wrap(Wrap { trim: false });
    f.render_widget(news, area);
}

fn render_community(f: &mut Frame, area: Rect, app: &App) {
    let mut lines = Vec::new();

    for post in app.feed.posts() {
        let mut header = vec![
            Span::styled(
                format!("  [{}] {}", post.avatar, post.author),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", post.badge), Style::default().fg(Color::Magenta)),
        ];
        if post.verified {
            header.push(Span::styled(" ✓", Style::default().fg(Color::Green)));
        }
        header.push(Span::styled(format!("  {}", post.time), Style::default().fg(Color::DarkGray)));

        lines.push(Line::from(header));
        lines.push(Line::from(format!("  {}", post.content)));

        let mut footer = format!("  ♥ {}  💬 {}", post.likes, post.replies);
        if !post.tags.is_empty() {
            footer.push_str(&format!("  #{}", post.tags.join(" #")));
        }
        lines.push(Line::from(Span::styled(footer, Style::default().fg(Color::Blue))));
        lines.push(Line::from(""));
    }

    let community = Paragraph::new(lines)
        .block(panel("Community"))
        .wrap(Wrap { trim: false });
    f.render_widget(community, area);
}

// ============================================================================
// WALLET
// ============================================================================

pub fn render_wallet(f: &mut Frame, area: Rect, app: &mut App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(7)])
        .split(columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Length(9), Constraint::Min(0)])
        .split(columns[1]);

    render_accounts(f, left[0], app);
    render_wallet_totals(f, left[1], app);
    render_balance_trend(f, right[0]);
    render_cashflow(f, right[1]);
    render_expense_breakdown(f, right[2]);
}

fn render_accounts(f: &mut Frame, area: Rect, app: &mut App) {
    let header = header_row(&["Account", "Type", "Balance", "Change", "Bank", "Number", "Detail"]);

    let rows: Vec<Row> = app
        .ctx
        .snapshot()
        .accounts
        .iter()
        .map(|account| {
            Row::new(vec![
                Cell::from(truncate(&account.name, 20)),
                Cell::from(account.account_type.as_str()),
                Cell::from(format_localized(account.balance, 2))
                    .style(Style::default().fg(amount_color(account.balance))),
                Cell::from(format_localized(account.change, 2))
                    .style(Style::default().fg(amount_color(account.change))),
                Cell::from(account.bank.clone()),
                Cell::from(account.account_number.clone()),
                Cell::from(account_detail(account)),
            ])
            .height(1)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(20),
            Constraint::Length(10),
            Constraint::Length(13),
            Constraint::Length(11),
            Constraint::Length(9),
            Constraint::Length(8),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .block(panel("Accounts"))
    .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.accounts_state);
}

/// Rate, limit or YTD return, whichever the account carries
fn account_detail(account: &Account) -> String {
    if let Some(rate) = account.interest {
        format!("{}% p.a.", to_fixed(rate, 1))
    } else if let Some(limit) = account.limit {
        format!("Limit {}", format_inr(limit))
    } else if let Some(ytd) = account.ytd_return {
        format!("YTD +{}%", to_fixed(ytd, 1))
    } else {
        String::new()
    }
}

fn render_wallet_totals(f: &mut Frame, area: Rect, app: &App) {
    let snapshot = app.ctx.snapshot();

    let mut lines = vec![
        label_value("Net worth", format_inr(metrics::net_worth(snapshot)), amount_color(metrics::net_worth(snapshot))),
        label_value("Assets", format_inr(metrics::total_assets(snapshot)), Color::Green),
        label_value("Liabilities", format_inr(metrics::total_liabilities(snapshot)), Color::Red),
        label_value(
            "Savings rate",
            format!("{}%", to_fixed(metrics::savings_rate(snapshot), 1)),
            Color::Green,
        ),
    ];

    if let Some(utilization) = metrics::credit_utilization(snapshot) {
        let color = if utilization > 30.0 { Color::Yellow } else { Color::Green };
        lines.push(label_value("Credit used", format!("{}%", to_fixed(utilization, 1)), color));
    }

    f.render_widget(Paragraph::new(lines).block(panel("Totals")), area);
}

fn render_balance_trend(f: &mut Frame, area: Rect) {
    let history = market::balance_history();
    let data: Vec<u64> = history.iter().map(|m| m.balance.max(0.0) as u64).collect();

    let title = match (history.first(), history.last()) {
        (Some(first), Some(last)) => format!(
            "Balance {}-{}: {}",
            first.month,
            last.month,
            format_inr(last.balance)
        ),
        _ => "Balance".to_string(),
    };

    let sparkline = Sparkline::default()
        .block(panel(&title))
        .data(&data)
        .style(Style::default().fg(Color::Green));
    f.render_widget(sparkline, area);
}

fn render_cashflow(f: &mut Frame, area: Rect) {
    let data: Vec<(&str, u64)> = market::cashflow_history()
        .iter()
        .map(|m| (m.month, (m.net().max(0.0) / 1000.0).round() as u64))
        .collect();

    let chart = BarChart::default()
        .block(panel("Monthly net cash flow (₹ thousands)"))
        .data(data.as_slice())
        .bar_width(5)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));
    f.render_widget(chart, area);
}

fn render_expense_breakdown(f: &mut Frame, area: Rect) {
    let lines: Vec<Line> = market::expense_breakdown()
        .iter()
        .map(|e| {
            Line::from(vec![
                Span::raw(format!("  {:<20}", e.category)),
                Span::styled(format!("{:>10}", format_inr(e.amount)), Style::default().fg(Color::White)),
                Span::styled(format!("{:>7}%", to_fixed(e.percentage, 1)), Style::default().fg(Color::Yellow)),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(panel("Expense breakdown")), area);
}

// ============================================================================
// MANAGE
// ============================================================================

pub fn render_manage(f: &mut Frame, area: Rect, app: &mut App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let goals_height = app.ctx.snapshot().savings_goals.len() as u16 * 2 + 3;
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(goals_height), Constraint::Length(6), Constraint::Min(0)])
        .split(columns[1]);

    render_budgets(f, columns[0], app);
    render_goals(f, right[0], app);
    render_savings_progress(f, right[1]);
    render_debts(f, right[2], app);
}

fn render_budgets(f: &mut Frame, area: Rect, app: &App) {
    let snapshot = app.ctx.snapshot();
    let block = panel("Budgets");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let categories = &snapshot.budget_categories;
    let over = metrics::over_budget_categories(snapshot);

    let mut constraints = vec![Constraint::Length(2)];
    constraints.extend(categories.iter().map(|_| Constraint::Length(1)));
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let headline = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {}% used", to_fixed(metrics::budget_utilization(snapshot), 1)),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            "  {} of {}",
            format_inr(metrics::total_spent(snapshot)),
            format_inr(metrics::total_budgeted(snapshot))
        )),
    ]));
    f.render_widget(headline, rows[0]);

    for (category, row) in categories.iter().zip(rows.iter().skip(1)) {
        let usage = category.usage_percent();
        let color = if category.is_over_budget() {
            Color::Red
        } else if usage > 85.0 {
            Color::Yellow
        } else {
            Color::Green
        };

        let gauge = LineGauge::default()
            .ratio(metrics::clamp_for_display(usage) / 100.0)
            .label(format!(" {:<18}{:>6}% ", truncate(&category.category, 18), to_fixed(usage, 0)))
            .gauge_style(Style::default().fg(color));
        f.render_widget(gauge, *row);
    }

    let warnings: Vec<Line> = over
        .iter()
        .map(|c| {
            Line::from(Span::styled(
                format!(" ⚠ {} over by {}", c.category, format_inr(c.overspend())),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ))
        })
        .collect();
    if let Some(last) = rows.last() {
        f.render_widget(Paragraph::new(warnings), *last);
    }
}

fn render_goals(f: &mut Frame, area: Rect, app: &App) {
    let snapshot = app.ctx.snapshot();
    let block = panel(&format!(
        "Savings goals: {} of {}",
        format_inr(metrics::total_savings(snapshot)),
        format_inr(metrics::total_savings_target(snapshot))
    ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let goals = &snapshot.savings_goals;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(goals.iter().map(|_| Constraint::Length(2)).collect::<Vec<_>>())
        .split(inner);

    for (goal, row) in goals.iter().zip(rows.iter()) {
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(*row);

        let eta = match metrics::months_to_goal(goal, snapshot) {
            Some(0) => "reached".to_string(),
            Some(months) => format!("~{} mo", months),
            None => "n/a".to_string(),
        };

        let title = Line::from(vec![
            Span::styled(format!(" {}", goal.name), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(format!("  [{}]", goal.priority.as_str()), Style::default().fg(Color::Magenta)),
            Span::styled(
                format!("  by {}  {}", goal.deadline.format("%d %b %Y"), eta),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        f.render_widget(Paragraph::new(title), parts[0]);

        let progress = goal.progress_percent();
        let gauge = LineGauge::default()
            .ratio(metrics::clamp_for_display(progress) / 100.0)
            .label(format!(" {}% {} left ", to_fixed(progress, 1), format_inr(goal.remaining())))
            .gauge_style(Style::default().fg(Color::Cyan));
        f.render_widget(gauge, parts[1]);
    }
}

fn render_savings_progress(f: &mut Frame, area: Rect) {
    let data: Vec<u64> = market::savings_progress()
        .iter()
        .map(|m| m.value.max(0.0) as u64)
        .collect();

    let sparkline = Sparkline::default()
        .block(panel("Emergency fund, last 6 months"))
        .data(&data)
        .style(Style::default().fg(Color::Cyan));
    f.render_widget(sparkline, area);
}

fn render_debts(f: &mut Frame, area: Rect, app: &App) {
    let snapshot = app.ctx.snapshot();

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(4)])
        .split(area);

    let rows: Vec<Row> = snapshot
        .debt_accounts
        .iter()
        .map(|d| {
            Row::new(vec![
                Cell::from(truncate(&d.name, 20)),
                Cell::from(format_inr(d.balance)).style(Style::default().fg(Color::Red)),
                Cell::from(format_inr(d.min_payment)),
                Cell::from(format!("{}%", to_fixed(d.interest_rate, 2))),
                Cell::from(d.payoff_date.format("%b %Y").to_string()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(21),
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Min(8),
        ],
    )
    .header(header_row(&["Debt", "Balance", "Min/mo", "APR", "Payoff"]))
    .block(panel("Debts"));
    f.render_widget(table, parts[0]);

    let mut lines = vec![Line::from(vec![
        Span::raw(" Total "),
        Span::styled(format_inr(metrics::total_debt(snapshot)), Style::default().fg(Color::Red)),
        Span::raw("   Minimums "),
        Span::styled(
            format!("{}/mo", format_inr(metrics::total_min_payments(snapshot))),
            Style::default().fg(Color::Yellow),
        ),
    ])];
    if let Some(target) = metrics::highest_interest_debt(snapshot) {
        lines.push(Line::from(Span::styled(
            format!(" Avalanche: pay extra on {} ({}% APR) first", target.name, to_fixed(target.interest_rate, 2)),
            Style::default().fg(Color::Green),
        )));
    }

    f.render_widget(Paragraph::new(lines).block(panel("Payoff")), parts[1]);
}

// ============================================================================
// INVEST
// ============================================================================

pub fn render_invest(f: &mut Frame, area: Rect, app: &mut App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(0), Constraint::Length(6)])
        .split(columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(11), Constraint::Length(8), Constraint::Min(0)])
        .split(columns[1]);

    render_portfolio_stats(f, left[0], app);
    render_holdings(f, left[1], app);
    render_portfolio_history(f, left[2]);
    render_recommendations(f, right[0]);
    render_sectors(f, right[1]);
    render_investment_goals(f, right[2]);
}

fn render_portfolio_stats(f: &mut Frame, area: Rect, app: &App) {
    let snapshot = app.ctx.snapshot();
    let gain = metrics::portfolio_gain_loss(snapshot);
    let holdings = snapshot.portfolio_holdings.len();

    let mut lines = vec![
        label_value("Portfolio value", format_inr(metrics::portfolio_value(snapshot)), Color::Cyan),
        label_value("Day gain/loss", format_localized(gain, 2), amount_color(gain)),
        label_value(
            "Return",
            format!("{}%", to_fixed(metrics::portfolio_return(snapshot), 2)),
            amount_color(gain),
        ),
        label_value(
            "Gainers",
            format!("{} of {}", metrics::positive_holdings(snapshot), holdings),
            Color::White,
        ),
    ];
    if let Some(top) = metrics::top_holding(snapshot) {
        lines.push(label_value(
            "Largest holding",
            format!("{} {} ({}%)", top.symbol, format_inr(top.total_value), to_fixed(top.allocation, 1)),
            Color::Yellow,
        ));
    }

    f.render_widget(Paragraph::new(lines).block(panel("Portfolio")), area);
}

fn render_holdings(f: &mut Frame, area: Rect, app: &mut App) {
    let rows: Vec<Row> = app
        .ctx
        .snapshot()
        .portfolio_holdings
        .iter()
        .map(|h| {
            Row::new(vec![
                Cell::from(h.symbol.clone()).style(Style::default().add_modifier(Modifier::BOLD)),
                Cell::from(truncate(&h.name, 24)),
                Cell::from(format_grouped(h.shares, 0)),
                Cell::from(format_localized(h.current_price, 2)),
                Cell::from(format_inr(h.total_value)),
                Cell::from(format!("{}%", to_fixed(h.change, 1))).style(Style::default().fg(amount_color(h.change))),
                Cell::from(format!("{}%", to_fixed(h.allocation, 1))),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(25),
            Constraint::Length(7),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(7),
            Constraint::Min(6),
        ],
    )
    .header(header_row(&["Symbol", "Name", "Shares", "Price", "Value", "Chg", "Alloc"]))
    .block(panel("Holdings"))
    .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.holdings_state);
}

fn render_portfolio_history(f: &mut Frame, area: Rect) {
    let data: Vec<u64> = market::portfolio_history()
        .iter()
        .map(|m| m.value.max(0.0) as u64)
        .collect();

    let sparkline = Sparkline::default()
        .block(panel("Portfolio, last 6 months"))
        .data(&data)
        .style(Style::default().fg(Color::Cyan));
    f.render_widget(sparkline, area);
}

fn render_recommendations(f: &mut Frame, area: Rect) {
    let mut lines = Vec::new();

    for idea in market::stock_ideas() {
        let color = match idea.recommendation {
            market::Recommendation::Buy => Color::Green,
            market::Recommendation::Hold => Color::Yellow,
            market::Recommendation::Sell => Color::Red,
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {:<7}", idea.symbol), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(format!("{:<5}", idea.recommendation.as_str()), Style::default().fg(color)),
            Span::raw(format!(
                "{} → {} (+{}%)",
                format_inr(idea.price),
                format_inr(idea.target_price),
                to_fixed(idea.upside_percent(), 1)
            )),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {}% confidence, {} risk. {}", idea.confidence, idea.risk_level, idea.reason),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let ideas = Paragraph::new(lines)
        .block(panel("AI recommendations"))
        .wrap(Wrap { trim: false });
    f.render_widget(ideas, area);
}

fn render_sectors(f: &mut Frame, area: Rect) {
    let sectors = market::sector_allocation();
    let data: Vec<(&str, u64)> = sectors.iter().map(|s| (s.name, s.value as u64)).collect();

    let chart = BarChart::default()
        .block(panel("Sector allocation (%)"))
        .data(data.as_slice())
        .bar_width(9)
        .bar_gap(2)
        .bar_style(Style::default().fg(Color::Blue))
        .value_style(Style::default().fg(Color::Black).bg(Color::Blue));
    f.render_widget(chart, area);
}

fn render_investment_goals(f: &mut Frame, area: Rect) {
    let block = panel("Long-term goals");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let goals = market::investment_goals();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(goals.iter().map(|_| Constraint::Length(1)).collect::<Vec<_>>())
        .split(inner);

    for (goal, row) in goals.iter().zip(rows.iter()) {
        let progress = goal.progress_percent();
        let gauge = LineGauge::default()
            .ratio(metrics::clamp_for_display(progress) / 100.0)
            .label(format!(" {:<18} {:>3}% {:>9} ", goal.name, to_fixed(progress, 0), goal.timeframe))
            .gauge_style(Style::default().fg(Color::Magenta));
        f.render_widget(gauge, *row);
    }
}

// ============================================================================
// ASSISTANT
// ============================================================================

pub fn render_assistant(f: &mut Frame, area: Rect, app: &mut App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(columns[0]);

    render_messages(f, left[0], app);

    let editing = app.input_mode == InputMode::Editing && app.current_tab == Tab::Assistant;
    render_input(f, left[1], "Ask about your finances", &app.chat_input, editing);

    render_quick_questions(f, columns[1], app);
}

fn render_messages(f: &mut Frame, area: Rect, app: &App) {
    let width = area.width.saturating_sub(4).max(10) as usize;
    let mut lines = Vec::new();

    for message in app.chat.messages() {
        let (who, color) = match message.sender {
            Sender::User => (app.ctx.user().name.as_str(), Color::Cyan),
            Sender::Assistant => ("Fiinora AI", Color::Green),
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {}", who), Style::default().fg(color).add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("  {}", message.timestamp.format("%H:%M")),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        for line in wrap_text(&message.content, width) {
            lines.push(Line::from(format!("  {}", line)));
        }
        lines.push(Line::from(""));
    }

    if app.chat.is_pending() {
        lines.push(Line::from(Span::styled(
            " Fiinora AI is analyzing your finances...",
            Style::default().fg(Color::Magenta).add_modifier(Modifier::ITALIC),
        )));
    }

    // Keep the newest message in view
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(visible) as u16;

    let messages = Paragraph::new(lines).block(panel("Fiinora AI")).scroll((scroll, 0));
    f.render_widget(messages, area);
}

fn render_quick_questions(f: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![Line::from("")];

    for (i, question) in QUICK_QUESTIONS.iter().enumerate() {
        let marker = if i == app.quick_selected {
            Span::styled("→", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        } else {
            Span::raw(" ")
        };
        lines.push(Line::from(vec![
            Span::raw(" "),
            marker,
            Span::styled(format!(" F{} ", i + 1), Style::default().fg(Color::Yellow)),
            Span::raw(*question),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " ↑/↓ select, Enter ask",
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
    )));

    let quick = Paragraph::new(lines)
        .block(panel("Quick questions"))
        .wrap(Wrap { trim: false });
    f.render_widget(quick, area);
}

// ============================================================================
// EXPLORER
// ============================================================================

pub fn render_explorer(f: &mut Frame, area: Rect, app: &mut App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(app.destinations.len() as u16 + 2),
            Constraint::Min(0),
        ])
        .split(columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(columns[1]);

    render_destinations(f, left[0], app);
    render_trip(f, left[1], app);

    let editing = app.input_mode == InputMode::Editing && app.current_tab == Tab::Explorer;
    render_input(f, right[0], "Search nearby (name or type)", &app.place_query, editing);
    render_places(f, right[1], app);
}

fn render_destinations(f: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = app
        .destinations
        .iter()
        .enumerate()
        .map(|(i, d)| {
            if i == app.destination_index {
                Line::from(Span::styled(
                    format!(" → {}", d.name),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(format!("   {}", d.name))
            }
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(panel("Destinations")), area);
}

fn render_trip(f: &mut Frame, area: Rect, app: &App) {
    let Some(destination) = app.selected_destination() else {
        f.render_widget(Paragraph::new(" No destinations").block(panel("Trip")), area);
        return;
    };

    let total = destination.trip_cost(app.tier, app.trip_days);
    let savings = destination.savings_vs_budget_tier(app.tier, app.trip_days);
    let costs = &destination.costs;

    let mut lines = vec![
        label_value("Budget tier", app.tier.label().to_string(), Color::Magenta),
        label_value("Trip length", format!("{} days", app.trip_days), Color::White),
        label_value(
            "Daily budget",
            usd(destination.daily_budget.for_tier(app.tier)),
            Color::White,
        ),
        Line::from(vec![
            Span::styled(format!(" {:<16}", "Total trip cost"), Style::default().fg(Color::Cyan)),
            Span::styled(usd(total), Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("  (≈ {})", format_inr(convert(total, app.conversion_rate))),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];
    if savings > 0.0 {
        lines.push(label_value("Budget tier saves", usd(savings), Color::Yellow));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Typical costs",
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    )));
    for (label, range) in [
        ("Coffee", costs.coffee),
        ("Meal", costs.meal),
        ("Hotel / night", costs.hotel),
        ("Transport", costs.transport),
    ] {
        lines.push(label_value(label, format!("${}-{}", range.min, range.max), Color::White));
    }

    f.render_widget(Paragraph::new(lines).block(panel(destination.name)), area);
}

fn render_places(f: &mut Frame, area: Rect, app: &App) {
    let places = app.filtered_places();

    let rows: Vec<Row> = places
        .iter()
        .map(|p| {
            Row::new(vec![
                Cell::from(p.name),
                Cell::from(p.place_type),
                Cell::from(p.distance),
                Cell::from(p.price_range),
                Cell::from(format!("★ {:.1}", p.rating)).style(Style::default().fg(Color::Yellow)),
            ])
        })
        .collect();

    let title = format!("Nearby places ({})", places.len());
    let table = Table::new(
        rows,
        [
            Constraint::Length(18),
            Constraint::Length(12),
            Constraint::Length(11),
            Constraint::Length(10),
            Constraint::Min(6),
        ],
    )
    .header(header_row(&["Name", "Type", "Distance", "Price", "Rating"]))
    .block(panel(&title));
    f.render_widget(table, area);
}

// ============================================================================
// SHARED WIDGETS
// ============================================================================

fn panel(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(format!(" {} ", title))
}

fn header_row(titles: &[&'static str]) -> Row<'static> {
    let cells = titles.iter().map(|h| {
        Cell::from(*h).style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    });
    Row::new(cells).style(Style::default().bg(Color::DarkGray)).height(1)
}

fn label_value(label: &str, value: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {:<16}", label), Style::default().fg(Color::Cyan)),
        Span::styled(value, Style::default().fg(color)),
    ])
}

fn render_input(f: &mut Frame, area: Rect, title: &str, text: &str, active: bool) {
    let border = if active { Color::Yellow } else { Color::White };
    let input = Paragraph::new(format!(" {}", text)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(format!(" {} ", title)),
    );
    f.render_widget(input, area);

    if active {
        let x = area.x + 2 + text.chars().count() as u16;
        let max_x = (area.x + area.width).saturating_sub(2);
        f.set_cursor(x.min(max_x), area.y + 1);
    }
}

fn amount_color(value: f64) -> Color {
    if value < 0.0 {
        Color::Red
    } else {
        Color::Green
    }
}

fn usd(amount: f64) -> String {
    format!("${}", format_grouped(amount, 0))
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Greedy word wrap at `width` characters
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        let needed = current_line.chars().count() + word.chars().count() + 1;
        if current_line.is_empty() || needed <= width {
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current_line));
            current_line.push_str(word);
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text() {
        assert_eq!(wrap_text("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap_text("", 10), Vec::<String>::new());
        assert_eq!(wrap_text("supercalifragilistic", 5), vec!["supercalifragilistic"]);
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("₹₹₹₹₹₹", 6), "₹₹₹₹₹₹");
        assert_eq!(truncate("Fixed Deposit Account", 10), "Fixed D...");
    }

    #[test]
    fn test_account_detail() {
        let snapshot = fiinora::FinancialSnapshot::demo();
        assert_eq!(account_detail(&snapshot.accounts[0]), "3.5% p.a.");
        assert_eq!(account_detail(&snapshot.accounts[2]), "Limit ₹12,45,000");
        assert_eq!(account_detail(&snapshot.accounts[3]), "YTD +8.7%");
    }
}
