// 🤖 Assistant - Keyword topics and templated answers over the snapshot
//
// This is not a model. A question is lower-cased, matched against a fixed
// list of topics in priority order, and the first hit picks a template that
// is filled with figures computed from the snapshot. No hit → fallback.
//
// Same question + same snapshot + same name → same answer, always.

use crate::currency::{format_inr, to_fixed};
use crate::metrics;
use crate::snapshot::FinancialSnapshot;
use tracing::debug;

/// Suggested questions shown under the chat input
pub const QUICK_QUESTIONS: [&str; 5] = [
    "How can I improve my credit score?",
    "What's the best way to save for retirement?",
    "Should I invest in stocks or bonds?",
    "How much should I have in my emergency fund?",
    "What are some good budgeting strategies?",
];

/// First message of every chat session
pub const GREETING: &str = "Hello! I'm your AI financial intelligence system. I can analyze your portfolio, optimize your budget, provide investment insights, and answer any financial questions. How can I assist with your wealth management today?";

// ============================================================================
// TOPIC
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Budget,
    Savings,
    Investment,
    Debt,
    CreditScore,
    Retirement,
}

impl Topic {
    /// Detection order; earlier topics win when several match
    pub const PRIORITY: [Topic; 6] = [
        Topic::Budget,
        Topic::Savings,
        Topic::Investment,
        Topic::Debt,
        Topic::CreditScore,
        Topic::Retirement,
    ];

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Topic::Budget => &["budget", "spending"],
            Topic::Savings => &["save", "savings", "emergency fund"],
            Topic::Investment => &["invest", "portfolio", "stock"],
            Topic::Debt => &["debt", "loan", "credit card"],
            Topic::CreditScore => &["credit score", "cibil"],
            Topic::Retirement => &["retire", "pension"],
        }
    }

    /// First topic whose keywords appear in the question
    pub fn detect(question: &str) -> Option<Topic> {
        let question_lower = question.to_lowercase();
        Topic::PRIORITY
            .iter()
            .copied()
            .find(|topic| topic.keywords().iter().any(|kw| question_lower.contains(kw)))
    }
}

// ============================================================================
// RESPONSE GENERATION
// ============================================================================

/// Answer a free-text question with figures from the snapshot
pub fn generate_response(question: &str, snapshot: &FinancialSnapshot, user_name: &str) -> String {
    let topic = Topic::detect(question);
    debug!(?topic, "Generating assistant response");

    match topic {
        Some(Topic::Budget) => budget_response(snapshot, user_name),
        Some(Topic::Savings) => savings_response(snapshot, user_name),
        Some(Topic::Investment) => investment_response(snapshot, user_name),
        Some(Topic::Debt) => debt_response(snapshot, user_name),
        Some(Topic::CreditScore) => credit_score_response(snapshot, user_name),
        Some(Topic::Retirement) => retirement_response(snapshot, user_name),
        None => fallback_response(snapshot, user_name),
    }
}

fn budget_response(snapshot: &FinancialSnapshot, user_name: &str) -> String {
    let utilization = to_fixed(metrics::budget_utilization(snapshot), 1);
    let savings_rate = metrics::savings_rate(snapshot);

    let mut response = format!(
        "Hi {}! Looking at your budget, you're currently using {}% of your monthly budget ({} out of {}). ",
        user_name,
        utilization,
        format_inr(metrics::total_spent(snapshot)),
        format_inr(metrics::total_budgeted(snapshot)),
    );

    match metrics::over_budget_categories(snapshot).first() {
        Some(category) => {
            response.push_str(&format!(
                "I notice you're over budget in {} by {}. ",
                category.category,
                format_inr(category.overspend()),
            ));
            response.push_str("Consider reducing discretionary spending in this category next month. ");
        }
        None => response.push_str("Great job staying within budget across all categories! "),
    }

    response.push_str(&format!(
        "Your savings rate of {}% is {}. Keep up the disciplined approach!",
        to_fixed(savings_rate, 1),
        if rounded(savings_rate) > 20.0 { "excellent" } else { "good" },
    ));
    response
}

fn savings_response(snapshot: &FinancialSnapshot, user_name: &str) -> String {
    let mut response = format!(
        "{}, your total savings currently stand at {}. ",
        user_name,
        format_inr(metrics::total_savings(snapshot)),
    );

    if let Some(fund) = metrics::emergency_fund(snapshot) {
        let percentage = fund.progress_percent();
        response.push_str(&format!(
            "Your emergency fund is {}% complete with {} saved towards your {} goal. ",
            to_fixed(percentage, 1),
            format_inr(fund.current),
            format_inr(fund.target),
        ));

        if rounded(percentage) < 100.0 {
            // No ETA sentence when there is no monthly surplus to save from
            if let Some(months) = metrics::months_to_goal(fund, snapshot) {
                response.push_str(&format!(
                    "At your current savings rate, you'll reach your goal in approximately {} months. ",
                    months
                ));
            }
        }
    }

    response.push_str(&format!(
        "I recommend maintaining 3-6 months of expenses ({} to {}) in your emergency fund before increasing other investments.",
        format_inr(snapshot.monthly_expenses * 3.0),
        format_inr(snapshot.monthly_expenses * 6.0),
    ));
    response
}

fn investment_response(snapshot: &FinancialSnapshot, user_name: &str) -> String {
    let mut response = format!(
        "{}, your investment portfolio is currently valued at {}. ",
        user_name,
        format_inr(metrics::portfolio_value(snapshot)),
    );

    if let Some(top) = metrics::top_holding(snapshot) {
        response.push_str(&format!(
            "Your largest holding is {} at {} ({}% of portfolio). ",
            top.symbol,
            format_inr(top.total_value),
            top.allocation,
        ));
    }

    response.push_str(&format!(
        "Currently, {} out of {} holdings are showing positive returns. ",
        metrics::positive_holdings(snapshot),
        snapshot.portfolio_holdings.len(),
    ));
    response.push_str("For Indian markets, consider diversifying across sectors and including some debt funds for stability. Your current allocation looks good, but review it quarterly to rebalance.");
    response
}

fn debt_response(snapshot: &FinancialSnapshot, user_name: &str) -> String {
    let mut response = format!(
        "{}, your total debt stands at {} with minimum monthly payments of {}. ",
        user_name,
        format_inr(metrics::total_debt(snapshot)),
        format_inr(metrics::total_min_payments(snapshot)),
    );

    if let Some(debt) = metrics::highest_interest_debt(snapshot) {
        response.push_str(&format!(
            "Your highest interest debt is {} at {}% APR with a balance of {}. ",
            debt.name,
            debt.interest_rate,
            format_inr(debt.balance),
        ));
        response.push_str("I recommend using the avalanche method: focus on paying off this high-interest debt first while making minimum payments on others. ");
    }

    let extra_payment = metrics::monthly_surplus(snapshot) * 0.3;
    response.push_str(&format!(
        "Consider allocating {} extra per month to accelerate debt payoff.",
        format_inr(extra_payment)
    ));
    response
}

fn credit_score_response(snapshot: &FinancialSnapshot, user_name: &str) -> String {
    let card_balance = snapshot
        .credit_account()
        .map(|a| a.balance.abs())
        .unwrap_or(0.0);

    let mut response = format!(
        "{}, to improve your credit score: 1) Pay all bills on time - this is the most important factor, 2) Keep credit utilization below 30% (you currently have {} on credit cards), 3) Don't close old credit accounts, 4) Monitor your CIBIL report regularly, and 5) Avoid multiple credit inquiries. Based on your current debt of {}",
        user_name,
        format_inr(card_balance),
        format_inr(metrics::total_debt(snapshot)),
    );

    match snapshot.debt_accounts.first() {
        Some(debt) => response.push_str(&format!(", focus on paying down your {} first.", debt.name)),
        None => response.push('.'),
    }
    response
}

fn retirement_response(snapshot: &FinancialSnapshot, user_name: &str) -> String {
    let savings_rate = metrics::savings_rate(snapshot);
    format!(
        "{}, for retirement planning in India: 1) Maximize your EPF contributions, 2) Consider NPS for additional tax benefits under 80CCD, 3) Invest in PPF for guaranteed returns, 4) Build a diversified portfolio with equity mutual funds for long-term growth, and 5) Aim to save at least 15-20% of income. Your current savings rate of {}% is {}. With your monthly income of {}, consider increasing retirement contributions.",
        user_name,
        to_fixed(savings_rate, 1),
        if rounded(savings_rate) >= 15.0 { "excellent" } else { "good, but could be improved" },
        format_inr(snapshot.monthly_income),
    )
}

fn fallback_response(snapshot: &FinancialSnapshot, user_name: &str) -> String {
    format!(
        "That's a great question, {}! Based on your financial profile: You have {} in investments, {} in savings goals, and {} in debt. Your monthly income is {} with expenses of {}, giving you a healthy {}% savings rate. I'd recommend reviewing your budget allocation and considering diversification strategies. Your current financial health is strong - keep up the disciplined approach!",
        user_name,
        format_inr(metrics::portfolio_value(snapshot)),
        format_inr(metrics::total_savings(snapshot)),
        format_inr(metrics::total_debt(snapshot)),
        format_inr(snapshot.monthly_income),
        format_inr(snapshot.monthly_expenses),
        to_fixed(metrics::savings_rate(snapshot), 1),
    )
}

/// Thresholds compare the displayed one-decimal figure, not the raw ratio
fn rounded(percent: f64) -> f64 {
    to_fixed(percent, 1).parse().unwrap_or(f64::NAN)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::FinancialSnapshot;

    #[test]
    fn test_topic_priority() {
        assert_eq!(Topic::detect("What are some good budgeting strategies?"), Some(Topic::Budget));
        assert_eq!(Topic::detect("Should I save my SPENDING money?"), Some(Topic::Budget));
        assert_eq!(Topic::detect("How much should I have in my emergency fund?"), Some(Topic::Savings));
        assert_eq!(Topic::detect("Should I invest in stocks or bonds?"), Some(Topic::Investment));
        assert_eq!(Topic::detect("Pay off my car loan?"), Some(Topic::Debt));
        assert_eq!(Topic::detect("How can I improve my credit score?"), Some(Topic::CreditScore));
        assert_eq!(Topic::detect("Is my CIBIL ok"), Some(Topic::CreditScore));
        assert_eq!(Topic::detect("When can I retire?"), Some(Topic::Retirement));
        assert_eq!(Topic::detect("What's the weather like?"), None);
    }

    #[test]
    fn test_save_beats_retire() {
        // "save" is checked before "retire"
        assert_eq!(
            Topic::detect("What's the best way to save for retirement?"),
            Some(Topic::Savings)
        );
    }

    #[test]
    fn test_budget_mentions_overspent_category() {
        let snapshot = FinancialSnapshot::demo();
        let response = generate_response("How is my budget?", &snapshot, "Aamir");

        assert!(response.starts_with("Hi Aamir! Looking at your budget, you're currently using 94.1% of your monthly budget (₹1,52,305 out of ₹1,61,850). "));
        assert!(response.contains("over budget in Entertainment by ₹3,735."));
        assert!(response.contains("Your savings rate of 35.4% is excellent."));
    }

    #[test]
    fn test_budget_within_limits() {
        let mut snapshot = FinancialSnapshot::demo();
        for category in &mut snapshot.budget_categories {
            category.spent = category.budgeted / 2.0;
        }
        let response = generate_response("spending check", &snapshot, "Aamir");
        assert!(response.contains("Great job staying within budget across all categories!"));
        assert!(!response.contains("over budget in"));
    }

    #[test]
    fn test_savings_response() {
        let snapshot = FinancialSnapshot::demo();
        let response = generate_response("How much should I have in my emergency fund?", &snapshot, "Aamir");

        assert!(response.starts_with("Aamir, your total savings currently stand at ₹8,38,300. "));
        assert!(response.contains("Your emergency fund is 65.0% complete with ₹5,39,500 saved towards your ₹8,30,000 goal."));
        assert!(response.contains("approximately 2 months."));
        assert!(response.contains("(₹10,93,110 to ₹21,86,220)"));
    }

    #[test]
    fn test_investment_response() {
        let snapshot = FinancialSnapshot::demo();
        let response = generate_response("portfolio?", &snapshot, "Aamir");
        assert!(response.contains("Your largest holding is NIFTYBEES at ₹12,15,743 (24.3% of portfolio)."));
        assert!(response.contains("Currently, 4 out of 5 holdings are showing positive returns."));
    }

    #[test]
    fn test_debt_response_names_avalanche_target() {
        let snapshot = FinancialSnapshot::demo();
        let response = generate_response("help with my debt", &snapshot, "Aamir");
        assert!(response.contains("your total debt stands at ₹22,45,150 with minimum monthly payments of ₹47,725."));
        assert!(response.contains("Credit Card - ICICI at 18.24% APR with a balance of ₹2,03,350."));
        assert!(response.contains("Consider allocating ₹60,009 extra per month"));
    }

    #[test]
    fn test_credit_score_response() {
        let snapshot = FinancialSnapshot::demo();
        let response = generate_response("How can I improve my credit score?", &snapshot, "Aamir");
        assert!(response.contains("you currently have ₹1,53,191 on credit cards"));
        assert!(response.ends_with("focus on paying down your Credit Card - ICICI first."));
    }

    #[test]
    fn test_retirement_response() {
        let snapshot = FinancialSnapshot::demo();
        let response = generate_response("pension plans", &snapshot, "Aamir");
        assert!(response.contains("Your current savings rate of 35.4% is excellent."));
        assert!(response.contains("monthly income of ₹5,64,400"));
    }

    #[test]
    fn test_fallback_contains_headline_figures() {
        let snapshot = FinancialSnapshot::demo();
        let response = generate_response("Tell me something", &snapshot, "Aamir");

        assert!(response.starts_with("That's a great question, Aamir!"));
        assert!(response.contains(&format!("You have {} in investments", format_inr(metrics::portfolio_value(&snapshot)))));
        assert!(response.contains("₹8,38,300 in savings goals"));
        assert!(response.contains("₹22,45,150 in debt"));
        assert!(response.contains("healthy 35.4% savings rate"));
    }

    #[test]
    fn test_deterministic() {
        let snapshot = FinancialSnapshot::demo();
        for question in QUICK_QUESTIONS {
            assert_eq!(
                generate_response(question, &snapshot, "Aamir"),
                generate_response(question, &snapshot, "Aamir")
            );
        }
    }

    #[test]
    fn test_empty_snapshot_does_not_panic() {
        let snapshot = FinancialSnapshot {
            accounts: vec![],
            budget_categories: vec![],
            portfolio_holdings: vec![],
            savings_goals: vec![],
            debt_accounts: vec![],
            monthly_income: 0.0,
            monthly_expenses: 0.0,
        };

        for question in ["budget", "save", "stock", "debt", "cibil", "retire", "hello"] {
            let response = generate_response(question, &snapshot, "Aamir");
            assert!(!response.is_empty());
        }

        let response = generate_response("budget", &snapshot, "Aamir");
        assert!(response.contains("using NaN%"));
        let response = generate_response("credit score", &snapshot, "Aamir");
        assert!(response.ends_with("Based on your current debt of ₹0."));
    }
}
