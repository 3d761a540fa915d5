// 📊 Metrics - Derived figures computed on read from a snapshot
//
// Nothing here is cached. Every view asks again and gets the same answer
// because the snapshot never changes.

use crate::snapshot::{
    AccountType, BudgetCategory, DebtAccount, FinancialSnapshot, PortfolioHolding, SavingsGoal,
};
use serde::Serialize;

// ============================================================================
// BUDGET
// ============================================================================

pub fn total_budgeted(snapshot: &FinancialSnapshot) -> f64 {
    snapshot.budget_categories.iter().map(|c| c.budgeted).sum()
}

pub fn total_spent(snapshot: &FinancialSnapshot) -> f64 {
    snapshot.budget_categories.iter().map(|c| c.spent).sum()
}

/// Spent / budgeted in percent; over 100 signals overspend
pub fn budget_utilization(snapshot: &FinancialSnapshot) -> f64 {
    total_spent(snapshot) / total_budgeted(snapshot) * 100.0
}

/// Percentage for a progress bar, pinned to 0..=100
pub fn clamp_for_display(percent: f64) -> f64 {
    if percent.is_nan() {
        return 0.0;
    }
    percent.clamp(0.0, 100.0)
}

/// Categories whose spend exceeds the budget, in snapshot order
pub fn over_budget_categories(snapshot: &FinancialSnapshot) -> Vec<&BudgetCategory> {
    snapshot
        .budget_categories
        .iter()
        .filter(|c| c.is_over_budget())
        .collect()
}

// ============================================================================
// ACCOUNTS
// ============================================================================

/// Sum of all balances; liabilities subtract
pub fn net_worth(snapshot: &FinancialSnapshot) -> f64 {
    snapshot.accounts.iter().map(|a| a.balance).sum()
}

pub fn total_assets(snapshot: &FinancialSnapshot) -> f64 {
    snapshot
        .accounts
        .iter()
        .filter(|a| a.balance > 0.0)
        .map(|a| a.balance)
        .sum()
}

pub fn total_liabilities(snapshot: &FinancialSnapshot) -> f64 {
    snapshot
        .accounts
        .iter()
        .filter(|a| a.balance < 0.0)
        .map(|a| a.balance)
        .sum::<f64>()
        .abs()
}

/// Outstanding credit-card balance over total credit limit, in percent
///
/// None when there is no credit account with a limit.
pub fn credit_utilization(snapshot: &FinancialSnapshot) -> Option<f64> {
    let (used, limit) = snapshot
        .accounts
        .iter()
        .filter(|a| a.account_type == AccountType::Credit)
        .filter_map(|a| a.limit.map(|limit| (a.balance.abs(), limit)))
        .fold((0.0, 0.0), |(used, total), (balance, limit)| (used + balance, total + limit));

    if limit > 0.0 {
        Some(used / limit * 100.0)
    } else {
        None
    }
}

// ============================================================================
// CASH FLOW
// ============================================================================

pub fn monthly_surplus(snapshot: &FinancialSnapshot) -> f64 {
    snapshot.monthly_income - snapshot.monthly_expenses
}

/// (income - expenses) / income in percent
pub fn savings_rate(snapshot: &FinancialSnapshot) -> f64 {
    monthly_surplus(snapshot) / snapshot.monthly_income * 100.0
}

// ============================================================================
// PORTFOLIO
// ============================================================================

pub fn portfolio_value(snapshot: &FinancialSnapshot) -> f64 {
    snapshot.portfolio_holdings.iter().map(|h| h.total_value).sum()
}

/// Today's gain/loss: each holding's value scaled by its percentage change
pub fn portfolio_gain_loss(snapshot: &FinancialSnapshot) -> f64 {
    snapshot
        .portfolio_holdings
        .iter()
        .map(|h| h.total_value * h.change / 100.0)
        .sum()
}

pub fn portfolio_return(snapshot: &FinancialSnapshot) -> f64 {
    portfolio_gain_loss(snapshot) / portfolio_value(snapshot) * 100.0
}

/// Holding with the largest value; the first one wins ties
pub fn top_holding(snapshot: &FinancialSnapshot) -> Option<&PortfolioHolding> {
    snapshot.portfolio_holdings.iter().fold(None, |best, h| match best {
        Some(b) if h.total_value <= b.total_value => Some(b),
        _ => Some(h),
    })
}

pub fn positive_holdings(snapshot: &FinancialSnapshot) -> usize {
    snapshot
        .portfolio_holdings
        .iter()
        .filter(|h| h.change > 0.0)
        .count()
}

// ============================================================================
// DEBT
// ============================================================================

pub fn total_debt(snapshot: &FinancialSnapshot) -> f64 {
    snapshot.debt_accounts.iter().map(|d| d.balance).sum()
}

pub fn total_min_payments(snapshot: &FinancialSnapshot) -> f64 {
    snapshot.debt_accounts.iter().map(|d| d.min_payment).sum()
}

/// Avalanche target: highest APR first; the first one wins ties
pub fn highest_interest_debt(snapshot: &FinancialSnapshot) -> Option<&DebtAccount> {
    snapshot.debt_accounts.iter().fold(None, |best, d| match best {
        Some(b) if d.interest_rate <= b.interest_rate => Some(b),
        _ => Some(d),
    })
}

// ============================================================================
// SAVINGS GOALS
// ============================================================================

pub fn total_savings(snapshot: &FinancialSnapshot) -> f64 {
    snapshot.savings_goals.iter().map(|g| g.current).sum()
}

pub fn total_savings_target(snapshot: &FinancialSnapshot) -> f64 {
    snapshot.savings_goals.iter().map(|g| g.target).sum()
}

/// First goal whose name mentions "emergency" (case-insensitive)
pub fn emergency_fund(snapshot: &FinancialSnapshot) -> Option<&SavingsGoal> {
    snapshot
        .savings_goals
        .iter()
        .find(|g| g.name.to_lowercase().contains("emergency"))
}

/// Whole months until a goal is met at the current surplus
///
/// None when the surplus is not positive.
pub fn months_to_goal(goal: &SavingsGoal, snapshot: &FinancialSnapshot) -> Option<u32> {
    let surplus = monthly_surplus(snapshot);
    if surplus <= 0.0 || !surplus.is_finite() {
        return None;
    }
    let months = (goal.remaining() / surplus).ceil();
    if months.is_finite() {
        Some(months.max(0.0) as u32)
    } else {
        None
    }
}

// ============================================================================
// SUMMARY
// ============================================================================

/// Headline figures shown across tabs and by `fiinora summary`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialSummary {
    pub net_worth: f64,
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub total_budgeted: f64,
    pub total_spent: f64,
    pub budget_utilization: f64,
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub savings_rate: f64,
    pub portfolio_value: f64,
    pub portfolio_gain_loss: f64,
    pub total_savings: f64,
    pub total_savings_target: f64,
    pub total_debt: f64,
    pub total_min_payments: f64,
    pub avalanche_target: Option<String>,
}

impl FinancialSummary {
    pub fn from_snapshot(snapshot: &FinancialSnapshot) -> Self {
        FinancialSummary {
            net_worth: net_worth(snapshot),
            total_assets: total_assets(snapshot),
            total_liabilities: total_liabilities(snapshot),
            total_budgeted: total_budgeted(snapshot),
            total_spent: total_spent(snapshot),
            budget_utilization: budget_utilization(snapshot),
            monthly_income: snapshot.monthly_income,
            monthly_expenses: snapshot.monthly_expenses,
            savings_rate: savings_rate(snapshot),
            portfolio_value: portfolio_value(snapshot),
            portfolio_gain_loss: portfolio_gain_loss(snapshot),
            total_savings: total_savings(snapshot),
            total_savings_target: total_savings_target(snapshot),
            total_debt: total_debt(snapshot),
            total_min_payments: total_min_payments(snapshot),
            avalanche_target: highest_interest_debt(snapshot).map(|d| d.name.clone()),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::Account;

    fn account(balance: f64, account_type: AccountType) -> Account {
        Account {
            name: format!("{} account", account_type.as_str()),
            balance,
            account_type,
            change: 0.0,
            bank: "Test Bank".to_string(),
            account_number: "****0000".to_string(),
            interest: None,
            ytd_return: None,
            limit: None,
        }
    }

    fn empty_snapshot() -> FinancialSnapshot {
        FinancialSnapshot {
            accounts: vec![],
            budget_categories: vec![],
            portfolio_holdings: vec![],
            savings_goals: vec![],
            debt_accounts: vec![],
            monthly_income: 0.0,
            monthly_expenses: 0.0,
        }
    }

    #[test]
    fn test_net_worth_is_assets_minus_liabilities() {
        let mut snapshot = empty_snapshot();
        snapshot.accounts = vec![
            account(1000.0, AccountType::Checking),
            account(2500.0, AccountType::Savings),
            account(-400.0, AccountType::Credit),
            account(-100.0, AccountType::Credit),
        ];

        assert_eq!(total_assets(&snapshot), 3500.0);
        assert_eq!(total_liabilities(&snapshot), 500.0);
        assert_eq!(net_worth(&snapshot), 3000.0);
    }

    #[test]
    fn test_demo_budget_figures() {
        let snapshot = FinancialSnapshot::demo();
        assert_eq!(total_budgeted(&snapshot), 161850.0);
        assert_eq!(total_spent(&snapshot), 152305.0);
        assert_eq!(format!("{:.1}", budget_utilization(&snapshot)), "94.1");

        let over = over_budget_categories(&snapshot);
        assert_eq!(over.len(), 1);
        assert_eq!(over[0].category, "Entertainment");
    }

    #[test]
    fn test_clamp_for_display() {
        assert_eq!(clamp_for_display(130.0), 100.0);
        assert_eq!(clamp_for_display(42.5), 42.5);
        assert_eq!(clamp_for_display(-5.0), 0.0);
        assert_eq!(clamp_for_display(f64::NAN), 0.0);
    }

    #[test]
    fn test_savings_rate() {
        let snapshot = FinancialSnapshot::demo();
        assert_eq!(monthly_surplus(&snapshot), 200030.0);
        assert_eq!(format!("{:.1}", savings_rate(&snapshot)), "35.4");
    }

    #[test]
    fn test_portfolio() {
        let snapshot = FinancialSnapshot::demo();
        let value = portfolio_value(&snapshot);
        assert!((value - 31525.95 * 83.0).abs() < 1e-6);
        assert_eq!(top_holding(&snapshot).unwrap().symbol, "NIFTYBEES");
        assert_eq!(positive_holdings(&snapshot), 4);
        assert!(portfolio_gain_loss(&snapshot) > 0.0);
    }

    #[test]
    fn test_debt() {
        let snapshot = FinancialSnapshot::demo();
        assert_eq!(total_debt(&snapshot), 2245150.0);
        assert_eq!(total_min_payments(&snapshot), 47725.0);
        assert_eq!(highest_interest_debt(&snapshot).unwrap().name, "Credit Card - ICICI");
    }

    #[test]
    fn test_ties_keep_first() {
        let mut snapshot = FinancialSnapshot::demo();
        for debt in &mut snapshot.debt_accounts {
            debt.interest_rate = 10.0;
        }
        assert_eq!(highest_interest_debt(&snapshot).unwrap().name, "Credit Card - ICICI");
    }

    #[test]
    fn test_empty_lists() {
        let snapshot = empty_snapshot();
        assert!(top_holding(&snapshot).is_none());
        assert!(highest_interest_debt(&snapshot).is_none());
        assert!(emergency_fund(&snapshot).is_none());
        assert!(credit_utilization(&snapshot).is_none());
        assert!(budget_utilization(&snapshot).is_nan());
    }

    #[test]
    fn test_emergency_fund_and_months_to_goal() {
        let snapshot = FinancialSnapshot::demo();
        let fund = emergency_fund(&snapshot).unwrap();
        assert_eq!(fund.name, "Emergency Fund");
        // 290500 remaining at 200030 / month
        assert_eq!(months_to_goal(fund, &snapshot), Some(2));
    }

    #[test]
    fn test_credit_utilization() {
        let snapshot = FinancialSnapshot::demo();
        let utilization = credit_utilization(&snapshot).unwrap();
        assert!((utilization - 1845.67 / 15000.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_summary_matches_functions() {
        let snapshot = FinancialSnapshot::demo();
        let summary = FinancialSummary::from_snapshot(&snapshot);
        assert_eq!(summary.net_worth, net_worth(&snapshot));
        assert_eq!(summary.total_debt, total_debt(&snapshot));
        assert_eq!(summary.avalanche_target.as_deref(), Some("Credit Card - ICICI"));
    }
}
