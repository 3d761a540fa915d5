// 🏠 Home Feed - Greeting, market tickers, news and community posts
//
// All content is canned. The only mutable part is the local post list:
// posts written from the home tab are prepended for the session and
// never leave the process.

use crate::currency::convert_usd;
use chrono::Timelike;
use serde::Serialize;
use tracing::info;

/// "Good morning" before noon, "Good afternoon" before 18:00, else evening
pub fn greeting(hour: u32) -> &'static str {
    if hour < 12 {
        "Good morning"
    } else if hour < 18 {
        "Good afternoon"
    } else {
        "Good evening"
    }
}

/// Greeting for the local wall-clock hour
pub fn greeting_now() -> &'static str {
    greeting(chrono::Local::now().hour())
}

// ============================================================================
// MARKETS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketTicker {
    pub name: &'static str,
    /// Last price in rupees
    pub price: f64,
    /// Day change in rupees
    pub change: f64,
    pub change_percent: f64,
}

pub fn market_tickers() -> Vec<MarketTicker> {
    vec![
        ticker("S&P 500", 4267.89, 115.32, 2.7),
        ticker("Bitcoin", 47125.0, 2580.0, 5.8),
        ticker("NASDAQ", 13542.78, 252.15, 1.9),
        ticker("Gold", 2034.0, -16.50, -0.8),
    ]
}

fn ticker(name: &'static str, price_usd: f64, change_usd: f64, change_percent: f64) -> MarketTicker {
    MarketTicker {
        name,
        price: convert_usd(price_usd),
        change: convert_usd(change_usd),
        change_percent,
    }
}

/// Overall market mood shown next to the tickers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketSentiment {
    pub label: &'static str,
    pub fear_greed_index: u8,
}

pub const MARKET_SENTIMENT: MarketSentiment = MarketSentiment {
    label: "Bullish",
    fear_greed_index: 72,
};

// ============================================================================
// NEWS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Positive,
    Neutral,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsItem {
    pub id: u32,
    pub title: &'static str,
    pub summary: &'static str,
    pub category: &'static str,
    pub time: &'static str,
    pub likes: u32,
    pub comments: u32,
    pub source: &'static str,
    pub trending: bool,
    pub impact: Impact,
}

pub fn news_items() -> Vec<NewsItem> {
    vec![
        NewsItem {
            id: 1,
            title: "Federal Reserve Hints at March Rate Cut as Inflation Cools",
            summary: "Fed officials signal potential 0.25% reduction following six consecutive months of declining inflation metrics",
            category: "Markets",
            time: "47m ago",
            likes: 1247,
            comments: 89,
            source: "Reuters",
            trending: true,
            impact: Impact::Positive,
        },
        NewsItem {
            id: 2,
            title: "Bitcoin Surges Past $47K as Institutional Adoption Accelerates",
            summary: "Major banks report 300% increase in crypto service requests, Ethereum follows with 8% gains",
            category: "Crypto",
            time: "1h 23m ago",
            likes: 892,
            comments: 124,
            source: "CoinDesk",
            trending: true,
            impact: Impact::Positive,
        },
        NewsItem {
            id: 3,
            title: "AI-Powered Investment Platforms Show 23% Better Returns",
            summary: "Study reveals algorithmic trading strategies outperform traditional portfolio management",
            category: "Technology",
            time: "2h 15m ago",
            likes: 567,
            comments: 76,
            source: "TechCrunch",
            trending: false,
            impact: Impact::Neutral,
        },
        NewsItem {
            id: 4,
            title: "European Markets Rally on Trade Deal Optimism",
            summary: "FTSE 100 gains 2.1% as Brexit trade negotiations show promising progress",
            category: "Global",
            time: "3h 42m ago",
            likes: 334,
            comments: 41,
            source: "Financial Times",
            trending: false,
            impact: Impact::Positive,
        },
    ]
}

// ============================================================================
// COMMUNITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommunityPost {
    pub author: String,
    pub avatar: String,
    pub badge: String,
    pub content: String,
    pub time: String,
    pub likes: u32,
    pub replies: u32,
    pub tags: Vec<String>,
    pub verified: bool,
    pub achievements: Vec<String>,
}

#[allow(clippy::too_many_arguments)]
fn post(
    author: &str,
    avatar: &str,
    badge: &str,
    content: &str,
    time: &str,
    (likes, replies): (u32, u32),
    tags: &[&str],
    verified: bool,
    achievements: &[&str],
) -> CommunityPost {
    CommunityPost {
        author: author.to_string(),
        avatar: avatar.to_string(),
        badge: badge.to_string(),
        content: content.to_string(),
        time: time.to_string(),
        likes,
        replies,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        verified,
        achievements: achievements.iter().map(|a| a.to_string()).collect(),
    }
}

pub fn community_posts() -> Vec<CommunityPost> {
    vec![
        post(
            "Sarah Chen", "SC", "Premium",
            "Just crossed $50K in my emergency fund using Fiinora's auto-save feature! The 1% optimization suggestions added an extra $200/month. This app literally pays for itself.",
            "32m ago", (127, 18), &["Emergency Fund", "Auto-Save"], true, &["6-Month Streak", "Goal Crusher"],
        ),
        post(
            "Marcus Rodriguez", "MR", "Investor Pro",
            "AI portfolio rebalancing just saved me from a 4% loss during yesterday's market dip. The risk adjustment algorithm is incredibly sophisticated - moved 15% to bonds automatically.",
            "1h 15m ago", (89, 23), &["AI Trading", "Risk Management"], true, &["Risk Master", "AI Adopter"],
        ),
        post(
            "Dr. Emily Watson", "EW", "Financial Advisor",
            "I recommend Fiinora to all my clients now. The debt avalanche calculator helped one client save $12K in interest payments. Professional-grade analytics in a consumer app.",
            "2h 45m ago", (156, 31), &["Debt Strategy", "Professional"], true, &["Trusted Advisor", "Community Leader"],
        ),
        post(
            "Alex Thompson", "AT", "Explorer",
            "Map cost predictions were 97% accurate for my Tokyo trip! Budgeted $3,200, spent $3,156. Even predicted the exact subway costs. Mind = blown 🤯",
            "4h 12m ago", (73, 12), &["Travel Budget", "Map Feature"], false, &["Travel Pro"],
        ),
    ]
}

/// Community posts for the session, newest first
#[derive(Debug, Clone)]
pub struct CommunityFeed {
    posts: Vec<CommunityPost>,
}

impl CommunityFeed {
    pub fn new() -> Self {
        CommunityFeed { posts: community_posts() }
    }

    pub fn posts(&self) -> &[CommunityPost] {
        &self.posts
    }

    /// Add a post by the given author; blank content is rejected
    pub fn publish(&mut self, author: &str, initials: &str, content: &str) -> bool {
        let content = content.trim();
        if content.is_empty() {
            return false;
        }

        self.posts.insert(
            0,
            CommunityPost {
                author: author.to_string(),
                avatar: initials.to_string(),
                badge: "Member".to_string(),
                content: content.to_string(),
                time: "just now".to_string(),
                likes: 0,
                replies: 0,
                tags: Vec::new(),
                verified: false,
                achievements: Vec::new(),
            },
        );
        info!(author, "Community post published");
        true
    }
}

impl Default for CommunityFeed {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_boundaries() {
        assert_eq!(greeting(0), "Good morning");
        assert_eq!(greeting(11), "Good morning");
        assert_eq!(greeting(12), "Good afternoon");
        assert_eq!(greeting(17), "Good afternoon");
        assert_eq!(greeting(18), "Good evening");
        assert_eq!(greeting(23), "Good evening");
    }

    #[test]
    fn test_tickers_are_in_rupees() {
        let tickers = market_tickers();
        assert_eq!(tickers[1].name, "Bitcoin");
        assert_eq!(tickers[1].price, 3_911_375.0);
        assert!(tickers[3].change < 0.0);
    }

    #[test]
    fn test_publish_prepends() {
        let mut feed = CommunityFeed::new();
        assert_eq!(feed.posts().len(), 4);

        assert!(feed.publish("Aamir", "AA", "  Paid off my card!  "));
        assert_eq!(feed.posts().len(), 5);
        assert_eq!(feed.posts()[0].author, "Aamir");
        assert_eq!(feed.posts()[0].content, "Paid off my card!");

        assert!(!feed.publish("Aamir", "AA", "   "));
        assert_eq!(feed.posts().len(), 5);
    }

    #[test]
    fn test_news_fixture() {
        let news = news_items();
        assert_eq!(news.len(), 4);
        assert_eq!(news.iter().filter(|n| n.trending).count(), 2);
    }
}
