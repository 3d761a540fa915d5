// 📸 Financial Snapshot - Accounts, budget, holdings, goals and debts
//
// One snapshot is built at startup and shared read-only by every view.
// Invariants here are conventions only and are never validated:
// - holding.total_value == shares * current_price
// - goal.current <= goal.target
// - credit accounts carry negative balances

use crate::currency::convert_usd;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// ACCOUNT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Everyday spending account
    Checking,

    /// Interest-bearing deposits
    Savings,

    /// Credit line (balance is negative)
    Credit,

    /// Brokerage / demat
    Investment,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Checking => "Checking",
            AccountType::Savings => "Savings",
            AccountType::Credit => "Credit",
            AccountType::Investment => "Investment",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub name: String,

    /// Signed balance, negative means liability
    pub balance: f64,

    pub account_type: AccountType,

    /// Change since the previous period
    pub change: f64,

    /// Issuing institution
    pub bank: String,

    /// Masked number, e.g. "****7842"
    pub account_number: String,

    /// Annual interest rate in percent (deposit accounts)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest: Option<f64>,

    /// Year-to-date return in percent (investment accounts)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ytd_return: Option<f64>,

    /// Credit limit (credit accounts)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<f64>,
}

impl Account {
    pub fn is_liability(&self) -> bool {
        self.balance < 0.0
    }
}

// ============================================================================
// BUDGET CATEGORY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetCategory {
    pub category: String,
    pub budgeted: f64,
    pub spent: f64,

    /// Display color as a hex string ("#8884d8")
    pub color: String,
}

impl BudgetCategory {
    /// Spent as a percentage of budgeted (can exceed 100)
    pub fn usage_percent(&self) -> f64 {
        self.spent / self.budgeted * 100.0
    }

    pub fn is_over_budget(&self) -> bool {
        self.spent / self.budgeted > 1.0
    }

    /// Amount spent beyond the budget (negative when under)
    pub fn overspend(&self) -> f64 {
        self.spent - self.budgeted
    }
}

// ============================================================================
// PORTFOLIO HOLDING
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioHolding {
    pub symbol: String,
    pub name: String,
    pub shares: f64,
    pub current_price: f64,
    pub total_value: f64,

    /// Percentage change for the day
    pub change: f64,

    /// Share of the portfolio in percent
    pub allocation: f64,
}

// ============================================================================
// SAVINGS GOAL
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub name: String,
    pub target: f64,
    pub current: f64,
    pub deadline: NaiveDate,
    pub priority: Priority,
}

impl SavingsGoal {
    pub fn progress_percent(&self) -> f64 {
        self.current / self.target * 100.0
    }

    pub fn remaining(&self) -> f64 {
        self.target - self.current
    }
}

// ============================================================================
// DEBT ACCOUNT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtAccount {
    pub name: String,
    pub balance: f64,
    pub min_payment: f64,

    /// APR in percent
    pub interest_rate: f64,
    pub payoff_date: NaiveDate,
}

// ============================================================================
// FINANCIAL SNAPSHOT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialSnapshot {
    pub accounts: Vec<Account>,
    pub budget_categories: Vec<BudgetCategory>,
    pub portfolio_holdings: Vec<PortfolioHolding>,
    pub savings_goals: Vec<SavingsGoal>,
    pub debt_accounts: Vec<DebtAccount>,
    pub monthly_income: f64,
    pub monthly_expenses: f64,
}

impl FinancialSnapshot {
    /// Load a snapshot from a JSON file (same shape as `export`)
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let snapshot = serde_json::from_str(&content)?;
        Ok(snapshot)
    }

    /// Pretty JSON of the whole snapshot
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// First credit-type account, if any
    pub fn credit_account(&self) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|a| a.account_type == AccountType::Credit)
    }

    /// The demo profile: USD figures converted to rupees at the default rate
    pub fn demo() -> Self {
        FinancialSnapshot {
            accounts: vec![
                account("HDFC Bank Savings", 4850.42, AccountType::Checking, 325.30, "HDFC", "****7842")
                    .with_interest(3.5),
                account("Fixed Deposit Account", 15850.89, AccountType::Savings, 420.15, "SBI", "****2156")
                    .with_interest(7.0),
                account("ICICI Credit Card", -1845.67, AccountType::Credit, -127.45, "ICICI", "****8923")
                    .with_limit(convert_usd(15000.0)),
                account("Zerodha Portfolio", 12350.23, AccountType::Investment, 678.18, "Zerodha", "****3401")
                    .with_ytd_return(8.7),
                account("Emergency Fund", 8200.00, AccountType::Savings, 150.00, "Axis Bank", "****9876")
                    .with_interest(6.5),
            ],
            budget_categories: vec![
                budget("Food & Dining", 500.0, 425.0, "#8884d8"),
                budget("Transportation", 200.0, 180.0, "#82ca9d"),
                budget("Entertainment", 150.0, 195.0, "#ffc658"),
                budget("Shopping", 300.0, 250.0, "#ff7300"),
                budget("Bills & Utilities", 800.0, 785.0, "#0088fe"),
            ],
            portfolio_holdings: vec![
                holding("RELIANCE", "Reliance Industries", 25.0, 185.43, 4635.75, 2.4, 20.8),
                holding("TCS", "Tata Consultancy Services", 15.0, 248.50, 3727.50, -1.2, 16.7),
                holding("INFY", "Infosys Limited", 12.0, 412.80, 4953.60, 1.8, 22.2),
                holding("HDFCBANK", "HDFC Bank", 8.0, 445.20, 3561.60, 4.5, 16.0),
                holding("NIFTYBEES", "Nifty 50 ETF", 35.0, 418.50, 14647.50, 0.9, 24.3),
            ],
            savings_goals: vec![
                goal("Emergency Fund", 10000.0, 6500.0, (2025, 12, 31), Priority::High),
                goal("Vacation to Europe", 3500.0, 1200.0, (2025, 7, 15), Priority::Medium),
                goal("New Car Down Payment", 8000.0, 2400.0, (2026, 3, 1), Priority::Low),
            ],
            debt_accounts: vec![
                debt("Credit Card - ICICI", 2450.0, 75.0, 18.24, (2026, 2, 15)),
                debt("Education Loan", 15680.0, 180.0, 9.5, (2032, 8, 20)),
                debt("Car Loan", 8920.0, 320.0, 8.5, (2027, 11, 10)),
            ],
            monthly_income: convert_usd(6800.0),
            monthly_expenses: convert_usd(4390.0),
        }
    }
}

impl Default for FinancialSnapshot {
    fn default() -> Self {
        Self::demo()
    }
}

// ============================================================================
// DEMO BUILDERS (USD literals → rupees)
// ============================================================================

fn account(
    name: &str,
    balance_usd: f64,
    account_type: AccountType,
    change_usd: f64,
    bank: &str,
    account_number: &str,
) -> Account {
    Account {
        name: name.to_string(),
        balance: convert_usd(balance_usd),
        account_type,
        change: convert_usd(change_usd),
        bank: bank.to_string(),
        account_number: account_number.to_string(),
        interest: None,
        ytd_return: None,
        limit: None,
    }
}

impl Account {
    fn with_interest(mut self, rate: f64) -> Self {
        self.interest = Some(rate);
        self
    }

    fn with_ytd_return(mut self, ytd: f64) -> Self {
        self.ytd_return = Some(ytd);
        self
    }

    fn with_limit(mut self, limit: f64) -> Self {
        self.limit = Some(limit);
        self
    }
}

fn budget(category: &str, budgeted_usd: f64, spent_usd: f64, color: &str) -> BudgetCategory {
    BudgetCategory {
        category: category.to_string(),
        budgeted: convert_usd(budgeted_usd),
        spent: convert_usd(spent_usd),
        color: color.to_string(),
    }
}

fn holding(
    symbol: &str,
    name: &str,
    shares: f64,
    price_usd: f64,
    value_usd: f64,
    change: f64,
    allocation: f64,
) -> PortfolioHolding {
    PortfolioHolding {
        symbol: symbol.to_string(),
        name: name.to_string(),
        shares,
        current_price: convert_usd(price_usd),
        total_value: convert_usd(value_usd),
        change,
        allocation,
    }
}

fn goal(name: &str, target_usd: f64, current_usd: f64, deadline: (i32, u32, u32), priority: Priority) -> SavingsGoal {
    SavingsGoal {
        name: name.to_string(),
        target: convert_usd(target_usd),
        current: convert_usd(current_usd),
        deadline: date(deadline),
        priority,
    }
}

fn debt(name: &str, balance_usd: f64, min_payment_usd: f64, interest_rate: f64, payoff: (i32, u32, u32)) -> DebtAccount {
    DebtAccount {
        name: name.to_string(),
        balance: convert_usd(balance_usd),
        min_payment: convert_usd(min_payment_usd),
        interest_rate,
        payoff_date: date(payoff),
    }
}

/// Literal calendar dates; an invalid literal falls back to the epoch
fn date((year, month, day): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_shape() {
        let snapshot = FinancialSnapshot::demo();
        assert_eq!(snapshot.accounts.len(), 5);
        assert_eq!(snapshot.budget_categories.len(), 5);
        assert_eq!(snapshot.portfolio_holdings.len(), 5);
        assert_eq!(snapshot.savings_goals.len(), 3);
        assert_eq!(snapshot.debt_accounts.len(), 3);
        assert_eq!(snapshot.monthly_income, 564400.0);
        assert_eq!(snapshot.monthly_expenses, 364370.0);
    }

    #[test]
    fn test_demo_credit_account_is_negative() {
        let snapshot = FinancialSnapshot::demo();
        let credit = snapshot.credit_account().unwrap();
        assert_eq!(credit.name, "ICICI Credit Card");
        assert!(credit.is_liability());
        assert_eq!(credit.limit, Some(1_245_000.0));
    }

    #[test]
    fn test_budget_category_usage() {
        let snapshot = FinancialSnapshot::demo();
        let entertainment = &snapshot.budget_categories[2];
        assert!(entertainment.is_over_budget());
        assert!((entertainment.usage_percent() - 130.0).abs() < 1e-9);
        assert_eq!(entertainment.overspend(), 3735.0);

        let food = &snapshot.budget_categories[0];
        assert!(!food.is_over_budget());
    }

    #[test]
    fn test_goal_dates_and_priority() {
        let snapshot = FinancialSnapshot::demo();
        let emergency = &snapshot.savings_goals[0];
        assert_eq!(emergency.deadline, NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
        assert_eq!(emergency.priority, Priority::High);
        assert!((emergency.progress_percent() - 65.0).abs() < 1e-9);
    }

    #[test]
    fn test_json_export_roundtrip_keeps_optional_fields() {
        let snapshot = FinancialSnapshot::demo();
        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"account_type\": \"credit\""));
        assert!(json.contains("\"priority\": \"high\""));

        let parsed: FinancialSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }

    #[test]
    fn test_export_file_reloads_exact_balances() {
        let snapshot = FinancialSnapshot::demo();
        let path = std::env::temp_dir().join(format!("fiinora-export-{}.json", std::process::id()));
        fs::write(&path, snapshot.to_json().unwrap()).unwrap();

        let loaded = FinancialSnapshot::from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        // Converted amounts such as 15850.89 * 83 carry long binary tails
        assert_eq!(loaded.accounts[1].balance.to_bits(), snapshot.accounts[1].balance.to_bits());
        assert_eq!(
            loaded.portfolio_holdings[2].total_value.to_bits(),
            snapshot.portfolio_holdings[2].total_value.to_bits()
        );
        assert_eq!(loaded, snapshot);
    }
}
