// Fiinora - Personal Finance Dashboard Core Library
// Exposes all modules for use in the TUI, the one-shot CLI modes, and tests

pub mod error;
pub mod currency;
pub mod snapshot;
pub mod config;
pub mod metrics;
pub mod context;
pub mod assistant;  // Keyword topics + templated answers
pub mod chat;       // Message list with simulated reply delay
pub mod feed;       // Home tab: greeting, markets, news, community
pub mod market;     // Wallet/invest trend series and recommendations
pub mod travel;     // Travel cost explorer

// Re-export commonly used types
pub use error::{DashboardError, Result};
pub use currency::{
    convert, convert_usd, format_grouped, format_inr, format_localized, to_fixed,
    CURRENCY_SYMBOL, DEFAULT_RATE,
};
pub use snapshot::{
    Account, AccountType, BudgetCategory, DebtAccount, FinancialSnapshot,
    PortfolioHolding, Priority, SavingsGoal,
};
pub use config::{DashboardConfig, UserProfile};
pub use metrics::FinancialSummary;
pub use context::{ContextSlot, FinancialContext};
pub use assistant::{generate_response, Topic, GREETING, QUICK_QUESTIONS};
pub use chat::{ChatMessage, ChatSession, Sender};
pub use feed::CommunityFeed;
pub use travel::{BudgetTier, Destination, NearbyPlace};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
