// 📈 Market & Trends - Monthly series, expense mix and investment ideas
//
// Static series for the wallet, manage and invest tabs. Figures are USD
// literals converted to rupees at the default rate, like the snapshot.

use crate::currency::convert_usd;
use serde::Serialize;

// ============================================================================
// MONTHLY SERIES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyBalance {
    pub month: &'static str,
    pub balance: f64,
    pub savings: f64,
    pub investments: f64,
}

pub fn balance_history() -> Vec<MonthlyBalance> {
    [
        ("Jan", 18250.0, 12400.0, 8940.0),
        ("Feb", 19820.0, 13100.0, 9650.0),
        ("Mar", 21400.0, 13850.0, 10200.0),
        ("Apr", 20950.0, 14200.0, 9890.0),
        ("May", 22780.0, 15100.0, 11240.0),
        ("Jun", 24150.0, 15850.0, 12350.0),
        ("Jul", 25890.0, 16420.0, 13180.0),
    ]
    .into_iter()
    .map(|(month, balance, savings, investments)| MonthlyBalance {
        month,
        balance: convert_usd(balance),
        savings: convert_usd(savings),
        investments: convert_usd(investments),
    })
    .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyCashflow {
    pub month: &'static str,
    pub income: f64,
    pub expenses: f64,
}

impl MonthlyCashflow {
    pub fn net(&self) -> f64 {
        self.income - self.expenses
    }
}

pub fn cashflow_history() -> Vec<MonthlyCashflow> {
    [
        ("Jan", 4000.0, 2800.0),
        ("Feb", 4200.0, 3100.0),
        ("Mar", 4000.0, 2900.0),
        ("Apr", 4300.0, 3200.0),
        ("May", 4100.0, 2750.0),
        ("Jun", 4500.0, 3000.0),
    ]
    .into_iter()
    .map(|(month, income, expenses)| MonthlyCashflow {
        month,
        income: convert_usd(income),
        expenses: convert_usd(expenses),
    })
    .collect()
}

/// A single (month, amount) point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyValue {
    pub month: &'static str,
    pub value: f64,
}

fn series(points: &[(&'static str, f64)]) -> Vec<MonthlyValue> {
    points
        .iter()
        .map(|&(month, usd)| MonthlyValue { month, value: convert_usd(usd) })
        .collect()
}

/// Emergency-fund balance over the last six months
pub fn savings_progress() -> Vec<MonthlyValue> {
    series(&[
        ("Jan", 4200.0),
        ("Feb", 4650.0),
        ("Mar", 5100.0),
        ("Apr", 5380.0),
        ("May", 5820.0),
        ("Jun", 6500.0),
    ])
}

/// Portfolio value over the last six months
pub fn portfolio_history() -> Vec<MonthlyValue> {
    series(&[
        ("Jan", 8500.0),
        ("Feb", 8720.0),
        ("Mar", 8450.0),
        ("Apr", 8890.0),
        ("May", 8650.0),
        ("Jun", 8945.0),
    ])
}

// ============================================================================
// EXPENSE MIX
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseShare {
    pub category: &'static str,
    pub amount: f64,
    pub color: &'static str,
    pub percentage: f64,
}

pub fn expense_breakdown() -> Vec<ExpenseShare> {
    [
        ("Housing & Utilities", 1850.0, "#0070f3", 42.1),
        ("Food & Dining", 680.0, "#06b6d4", 15.5),
        ("Transportation", 420.0, "#f59e0b", 9.6),
        ("Healthcare", 280.0, "#ef4444", 6.4),
        ("Entertainment", 320.0, "#8b5cf6", 7.3),
        ("Shopping", 450.0, "#10b981", 10.2),
        ("Miscellaneous", 390.0, "#f97316", 8.9),
    ]
    .into_iter()
    .map(|(category, amount, color, percentage)| ExpenseShare {
        category,
        amount: convert_usd(amount),
        color,
        percentage,
    })
    .collect()
}

// ============================================================================
// INVESTMENT IDEAS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Recommendation {
    Buy,
    Hold,
    Sell,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Buy => "BUY",
            Recommendation::Hold => "HOLD",
            Recommendation::Sell => "SELL",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockIdea {
    pub symbol: &'static str,
    pub name: &'static str,
    pub price: f64,
    pub recommendation: Recommendation,
    /// Confidence in percent
    pub confidence: u8,
    pub reason: &'static str,
    pub target_price: f64,
    pub risk_level: &'static str,
}

impl StockIdea {
    /// Upside to the target price in percent
    pub fn upside_percent(&self) -> f64 {
        (self.target_price - self.price) / self.price * 100.0
    }
}

pub fn stock_ideas() -> Vec<StockIdea> {
    vec![
        StockIdea {
            symbol: "WIPRO",
            name: "Wipro Limited",
            price: convert_usd(152.30),
            recommendation: Recommendation::Buy,
            confidence: 85,
            reason: "Strong growth in IT services and digital transformation demand",
            target_price: convert_usd(180.00),
            risk_level: "Medium",
        },
        StockIdea {
            symbol: "ITC",
            name: "ITC Limited",
            price: convert_usd(142.65),
            recommendation: Recommendation::Hold,
            confidence: 72,
            reason: "Diversified portfolio offset by regulatory concerns in tobacco",
            target_price: convert_usd(155.00),
            risk_level: "Low",
        },
        StockIdea {
            symbol: "ZOMATO",
            name: "Zomato Limited",
            price: convert_usd(68.45),
            recommendation: Recommendation::Buy,
            confidence: 78,
            reason: "Food delivery market recovery and quick commerce expansion",
            target_price: convert_usd(85.00),
            risk_level: "High",
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorAllocation {
    pub name: &'static str,
    /// Share in percent
    pub value: u8,
    pub color: &'static str,
}

pub fn sector_allocation() -> Vec<SectorAllocation> {
    vec![
        SectorAllocation { name: "Technology", value: 65, color: "#0070f3" },
        SectorAllocation { name: "ETFs", value: 24, color: "#06b6d4" },
        SectorAllocation { name: "Healthcare", value: 7, color: "#f59e0b" },
        SectorAllocation { name: "Finance", value: 4, color: "#10b981" },
    ]
}

/// Long-horizon goals shown on the invest tab
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvestmentGoal {
    pub name: &'static str,
    pub target: f64,
    pub current: f64,
    pub timeframe: &'static str,
}

impl InvestmentGoal {
    pub fn progress_percent(&self) -> f64 {
        self.current / self.target * 100.0
    }
}

pub fn investment_goals() -> Vec<InvestmentGoal> {
    vec![
        InvestmentGoal {
            name: "Retirement Fund",
            target: convert_usd(500000.0),
            current: convert_usd(125000.0),
            timeframe: "25 years",
        },
        InvestmentGoal {
            name: "House Down Payment",
            target: convert_usd(80000.0),
            current: convert_usd(15000.0),
            timeframe: "5 years",
        },
        InvestmentGoal {
            name: "Kids Education",
            target: convert_usd(200000.0),
            current: convert_usd(32000.0),
            timeframe: "15 years",
        },
    ]
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_lengths() {
        assert_eq!(balance_history().len(), 7);
        assert_eq!(cashflow_history().len(), 6);
        assert_eq!(savings_progress().len(), 6);
        assert_eq!(portfolio_history().len(), 6);
    }

    #[test]
    fn test_cashflow_net() {
        let may = &cashflow_history()[4];
        assert_eq!(may.month, "May");
        assert_eq!(may.net(), convert_usd(1350.0));
    }

    #[test]
    fn test_expense_shares_sum_to_about_100() {
        let total: f64 = expense_breakdown().iter().map(|e| e.percentage).sum();
        assert!((total - 100.0).abs() < 0.5);
    }

    #[test]
    fn test_sector_allocation_sums_to_100() {
        let total: u32 = sector_allocation().iter().map(|s| s.value as u32).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_investment_goal_progress() {
        let goals = investment_goals();
        assert!((goals[0].progress_percent() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_stock_idea_upside() {
        let ideas = stock_ideas();
        assert!(ideas.iter().all(|i| i.upside_percent() > 0.0));
        assert_eq!(ideas[1].recommendation.as_str(), "HOLD");
    }
}
