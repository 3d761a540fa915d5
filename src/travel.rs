// ✈️ Travel Cost Explorer - Destinations, trip cost and nearby places
//
// Prices are USD as quoted for each destination. Trip cost is simply the
// daily budget of the chosen tier times the number of days.

use serde::Serialize;

/// Trip lengths offered by the explorer
pub const TRIP_LENGTHS: [u32; 4] = [3, 7, 14, 30];

// ============================================================================
// BUDGET TIER
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BudgetTier {
    Budget,
    MidRange,
    Luxury,
}

impl BudgetTier {
    pub const ALL: [BudgetTier; 3] = [BudgetTier::Budget, BudgetTier::MidRange, BudgetTier::Luxury];

    pub fn label(&self) -> &'static str {
        match self {
            BudgetTier::Budget => "Budget",
            BudgetTier::MidRange => "Mid-range",
            BudgetTier::Luxury => "Luxury",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            BudgetTier::Budget => BudgetTier::MidRange,
            BudgetTier::MidRange => BudgetTier::Luxury,
            BudgetTier::Luxury => BudgetTier::Budget,
        }
    }
}

// ============================================================================
// DESTINATION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyBudget {
    pub budget: f64,
    pub mid_range: f64,
    pub luxury: f64,
}

impl DailyBudget {
    pub fn for_tier(&self, tier: BudgetTier) -> f64 {
        match tier {
            BudgetTier::Budget => self.budget,
            BudgetTier::MidRange => self.mid_range,
            BudgetTier::Luxury => self.luxury,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TypicalCosts {
    pub coffee: CostRange,
    pub meal: CostRange,
    pub hotel: CostRange,
    pub transport: CostRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Destination {
    pub id: u32,
    pub name: &'static str,
    pub daily_budget: DailyBudget,
    pub costs: TypicalCosts,
}

impl Destination {
    /// Daily budget for the tier times the trip length
    pub fn trip_cost(&self, tier: BudgetTier, days: u32) -> f64 {
        self.daily_budget.for_tier(tier) * days as f64
    }

    /// How much cheaper the same trip is on the budget tier
    pub fn savings_vs_budget_tier(&self, tier: BudgetTier, days: u32) -> f64 {
        self.trip_cost(tier, days) - self.trip_cost(BudgetTier::Budget, days)
    }
}

const fn range(min: f64, max: f64) -> CostRange {
    CostRange { min, max }
}

pub fn destinations() -> Vec<Destination> {
    vec![
        Destination {
            id: 1,
            name: "Paris, France",
            daily_budget: DailyBudget { budget: 120.0, mid_range: 180.0, luxury: 350.0 },
            costs: TypicalCosts {
                coffee: range(3.0, 6.0),
                meal: range(15.0, 45.0),
                hotel: range(80.0, 400.0),
                transport: range(1.90, 15.0),
            },
        },
        Destination {
            id: 2,
            name: "Tokyo, Japan",
            daily_budget: DailyBudget { budget: 90.0, mid_range: 150.0, luxury: 300.0 },
            costs: TypicalCosts {
                coffee: range(2.0, 5.0),
                meal: range(8.0, 40.0),
                hotel: range(60.0, 350.0),
                transport: range(1.50, 12.0),
            },
        },
        Destination {
            id: 3,
            name: "New York, USA",
            daily_budget: DailyBudget { budget: 140.0, mid_range: 220.0, luxury: 450.0 },
            costs: TypicalCosts {
                coffee: range(3.0, 7.0),
                meal: range(12.0, 60.0),
                hotel: range(100.0, 500.0),
                transport: range(2.90, 25.0),
            },
        },
    ]
}

// ============================================================================
// NEARBY PLACES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearbyPlace {
    pub name: &'static str,
    pub place_type: &'static str,
    pub distance: &'static str,
    pub price_range: &'static str,
    pub rating: f32,
}

pub fn nearby_places() -> Vec<NearbyPlace> {
    vec![
        NearbyPlace { name: "Starbucks Coffee", place_type: "cafe", distance: "0.2 miles", price_range: "$3-6", rating: 4.2 },
        NearbyPlace { name: "The Local Bistro", place_type: "restaurant", distance: "0.3 miles", price_range: "$15-35", rating: 4.5 },
        NearbyPlace { name: "Budget Inn", place_type: "hotel", distance: "0.5 miles", price_range: "$80-120", rating: 3.8 },
        NearbyPlace { name: "Luxury Resort", place_type: "hotel", distance: "1.2 miles", price_range: "$250-400", rating: 4.8 },
        NearbyPlace { name: "City Mall", place_type: "shopping", distance: "0.7 miles", price_range: "$10-200", rating: 4.1 },
    ]
}

/// Places whose name or type contains the query (case-insensitive)
///
/// An empty query keeps every place.
pub fn filter_places<'a>(places: &'a [NearbyPlace], query: &str) -> Vec<&'a NearbyPlace> {
    let query = query.to_lowercase();
    places
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&query) || p.place_type.to_lowercase().contains(&query))
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trip_cost() {
        let paris = &destinations()[0];
        assert_eq!(paris.trip_cost(BudgetTier::MidRange, 7), 1260.0);
        assert_eq!(paris.trip_cost(BudgetTier::Budget, 3), 360.0);
        assert_eq!(paris.trip_cost(BudgetTier::Luxury, 30), 10500.0);
        assert_eq!(paris.savings_vs_budget_tier(BudgetTier::MidRange, 7), 420.0);
        assert_eq!(paris.savings_vs_budget_tier(BudgetTier::Budget, 7), 0.0);
    }

    #[test]
    fn test_tier_cycle() {
        let mut tier = BudgetTier::Budget;
        for _ in 0..3 {
            tier = tier.next();
        }
        assert_eq!(tier, BudgetTier::Budget);
        assert_eq!(BudgetTier::MidRange.label(), "Mid-range");
    }

    #[test]
    fn test_filter_places() {
        let places = nearby_places();
        assert_eq!(filter_places(&places, "").len(), 5);

        let hotels = filter_places(&places, "HOTEL");
        assert_eq!(hotels.len(), 2);
        assert_eq!(hotels[0].name, "Budget Inn");

        let by_name = filter_places(&places, "bistro");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].place_type, "restaurant");

        assert!(filter_places(&places, "museum").is_empty());
    }
}
