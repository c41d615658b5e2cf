//! Charity impact of money spent on interest, property tax and insurance
//!
//! Counts are floor divisions by fixed unit costs so they never overstate
//! what the money could have done.

use serde::{Deserialize, Serialize};

/// Cost of one unit of each charitable outcome
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CharityUnitCosts {
    pub meal: f64,
    /// School supplies for one child for a year
    pub school_supplies: f64,
    pub water_well: f64,
    pub microloan: f64,
    /// One full vaccination set
    pub vaccination: f64,
}

impl Default for CharityUnitCosts {
    fn default() -> Self {
        Self {
            meal: 3.0,
            school_supplies: 50.0,
            water_well: 10_000.0,
            microloan: 200.0,
            vaccination: 20.0,
        }
    }
}

/// Meals equivalent of each cost category on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealsBreakdown {
    pub interest_meals: u64,
    pub tax_meals: u64,
    pub insurance_meals: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactSummary {
    pub total_interest: f64,
    pub total_taxes: f64,
    pub total_insurance: f64,
    pub total_wasted: f64,
    pub meals_provided: u64,
    pub school_supplies: u64,
    pub water_wells: u64,
    pub microloans: u64,
    pub vaccinations: u64,
    pub breakdown: MealsBreakdown,
}

/// Impact summary at the default unit costs
pub fn compute_charity_impact(total_interest: f64, total_taxes: f64, total_insurance: f64) -> ImpactSummary {
    compute_charity_impact_with(&CharityUnitCosts::default(), total_interest, total_taxes, total_insurance)
}

pub fn compute_charity_impact_with(
    costs: &CharityUnitCosts,
    total_interest: f64,
    total_taxes: f64,
    total_insurance: f64,
) -> ImpactSummary {
    let total_wasted = total_interest + total_taxes + total_insurance;

    ImpactSummary {
        total_interest,
        total_taxes,
        total_insurance,
        total_wasted,
        meals_provided: units(total_wasted, costs.meal),
        school_supplies: units(total_wasted, costs.school_supplies),
        water_wells: units(total_wasted, costs.water_well),
        microloans: units(total_wasted, costs.microloan),
        vaccinations: units(total_wasted, costs.vaccination),
        breakdown: MealsBreakdown {
            interest_meals: units(total_interest, costs.meal),
            tax_meals: units(total_taxes, costs.meal),
            insurance_meals: units(total_insurance, costs.meal),
        },
    }
}

/// Whole units affordable; zero for negative, non-finite or free items
fn units(amount: f64, unit_cost: f64) -> u64 {
    if !amount.is_finite() || amount <= 0.0 || !unit_cost.is_finite() || unit_cost <= 0.0 {
        return 0;
    }
    (amount / unit_cost).floor() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_division_at_boundary() {
        let impact = compute_charity_impact(300.0, 0.0, 0.0);
        assert_eq!(impact.meals_provided, 100);
        assert_eq!(impact.microloans, 1);
        assert_eq!(impact.water_wells, 0);
        assert_eq!(impact.school_supplies, 6);
        assert_eq!(impact.vaccinations, 15);
        assert_eq!(impact.breakdown.interest_meals, 100);
        assert_eq!(impact.breakdown.tax_meals, 0);
    }

    #[test]
    fn test_counts_never_round_up() {
        let impact = compute_charity_impact(299.99, 0.0, 0.0);
        assert_eq!(impact.meals_provided, 99);
        assert_eq!(impact.microloans, 1);

        let impact = compute_charity_impact(9_999.0, 0.0, 0.0);
        assert_eq!(impact.water_wells, 0);
    }

    #[test]
    fn test_breakdown_by_category() {
        let impact = compute_charity_impact(408_142.36, 300_000.0, 45_000.0);

        assert_eq!(impact.total_wasted, 408_142.36 + 300_000.0 + 45_000.0);
        assert_eq!(impact.water_wells, 75);
        assert_eq!(impact.breakdown.interest_meals, 136_047);
        assert_eq!(impact.breakdown.tax_meals, 100_000);
        assert_eq!(impact.breakdown.insurance_meals, 15_000);
    }

    #[test]
    fn test_zero_and_negative_amounts() {
        let impact = compute_charity_impact(0.0, 0.0, 0.0);
        assert_eq!(impact.meals_provided, 0);
        assert_eq!(impact.total_wasted, 0.0);

        let impact = compute_charity_impact(-50.0, 0.0, 0.0);
        assert_eq!(impact.meals_provided, 0);
        assert_eq!(impact.breakdown.interest_meals, 0);
    }

    #[test]
    fn test_custom_unit_costs() {
        let costs = CharityUnitCosts {
            meal: 2.5,
            ..CharityUnitCosts::default()
        };
        let impact = compute_charity_impact_with(&costs, 10.0, 0.0, 0.0);
        assert_eq!(impact.meals_provided, 4);
    }
}
