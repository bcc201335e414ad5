//! Overview page datasets: KPI cards, company-wide chart series, and
//! the operation metrics shared with the operations page

use opsdeck_core::types::{
    ChangeDirection, CustomerSegment, DepartmentPerformance, FiscalMonth, Kpi, MetricStanding,
    MonthlyUsers, OperationMetric, RegionSales,
};

/// KPI cards at the top of the overview page
#[must_use]
pub fn kpis() -> Vec<Kpi> {
    vec![
        Kpi {
            id: "1".to_string(),
            title: "Total Revenue".to_string(),
            value: "$2.4M".to_string(),
            change: 12.5,
            change_direction: ChangeDirection::Increase,
            description: "Monthly recurring revenue".to_string(),
        },
        Kpi {
            id: "2".to_string(),
            title: "Active Customers".to_string(),
            value: "1,248".to_string(),
            change: -3.2,
            change_direction: ChangeDirection::Decrease,
            description: "Currently active customers".to_string(),
        },
        Kpi {
            id: "3".to_string(),
            title: "Operational Efficiency".to_string(),
            value: "94.2%".to_string(),
            change: 5.1,
            change_direction: ChangeDirection::Increase,
            description: "Overall efficiency rating".to_string(),
        },
        Kpi {
            id: "4".to_string(),
            title: "Cost Savings".to_string(),
            value: "$340K".to_string(),
            change: 8.7,
            change_direction: ChangeDirection::Increase,
            description: "Annual cost savings".to_string(),
        },
    ]
}

/// Twelve months of revenue, expenses, and profit
#[must_use]
pub fn revenue_by_month() -> Vec<FiscalMonth> {
    let rows = [
        ("Jan", 180_000, 120_000, 60_000),
        ("Feb", 220_000, 140_000, 80_000),
        ("Mar", 190_000, 130_000, 60_000),
        ("Apr", 250_000, 160_000, 90_000),
        ("May", 280_000, 170_000, 110_000),
        ("Jun", 320_000, 180_000, 140_000),
        ("Jul", 300_000, 175_000, 125_000),
        ("Aug", 350_000, 190_000, 160_000),
        ("Sep", 330_000, 185_000, 145_000),
        ("Oct", 380_000, 200_000, 180_000),
        ("Nov", 400_000, 210_000, 190_000),
        ("Dec", 420_000, 220_000, 200_000),
    ];

    rows.into_iter()
        .map(|(month, revenue, expenses, profit)| FiscalMonth {
            month: month.to_string(),
            revenue,
            expenses,
            profit,
        })
        .collect()
}

/// Efficiency, satisfaction, and productivity scores per department
#[must_use]
pub fn department_performance() -> Vec<DepartmentPerformance> {
    let rows = [
        ("Engineering", 92.0, 88.0, 95.0),
        ("Sales", 87.0, 91.0, 89.0),
        ("Marketing", 83.0, 85.0, 87.0),
        ("HR", 90.0, 93.0, 88.0),
        ("Operations", 94.0, 89.0, 92.0),
        ("Finance", 91.0, 87.0, 90.0),
    ];

    rows.into_iter()
        .map(
            |(department, efficiency, satisfaction, productivity)| DepartmentPerformance {
                department: department.to_string(),
                efficiency,
                satisfaction,
                productivity,
            },
        )
        .collect()
}

/// Revenue distribution across sales regions
#[must_use]
pub fn sales_by_region() -> Vec<RegionSales> {
    let rows = [
        ("North America", 145_000, 35.0),
        ("Europe", 128_000, 31.0),
        ("Asia Pacific", 89_000, 22.0),
        ("Latin America", 35_000, 8.0),
        ("Middle East & Africa", 16_000, 4.0),
    ];

    rows.into_iter()
        .map(|(region, revenue, share)| RegionSales {
            region: region.to_string(),
            revenue,
            share,
        })
        .collect()
}

/// Customer segments with revenue share and headcount
#[must_use]
pub fn customer_segments() -> Vec<CustomerSegment> {
    let rows = [
        ("Enterprise", 45.0, 156),
        ("Mid-Market", 30.0, 342),
        ("Small Business", 20.0, 567),
        ("Startup", 5.0, 183),
    ];

    rows.into_iter()
        .map(|(segment, share, customers)| CustomerSegment {
            segment: segment.to_string(),
            share,
            customers,
        })
        .collect()
}

/// Monthly active users series
#[must_use]
pub fn monthly_active_users() -> Vec<MonthlyUsers> {
    let rows = [
        ("Jan", 12_400),
        ("Feb", 13_200),
        ("Mar", 12_800),
        ("Apr", 14_100),
        ("May", 15_300),
        ("Jun", 16_200),
        ("Jul", 15_800),
        ("Aug", 17_400),
        ("Sep", 16_900),
        ("Oct", 18_200),
        ("Nov", 19_100),
        ("Dec", 20_300),
    ];

    rows.into_iter()
        .map(|(month, users)| MonthlyUsers {
            month: month.to_string(),
            users,
        })
        .collect()
}

/// Operation metrics with targets, shown on the overview and
/// operations pages
#[must_use]
pub fn operation_metrics() -> Vec<OperationMetric> {
    vec![
        OperationMetric {
            id: "1".to_string(),
            name: "Production Efficiency".to_string(),
            target: 95.0,
            actual: 94.2,
            unit: "%".to_string(),
            status: MetricStanding::OnTrack,
        },
        OperationMetric {
            id: "2".to_string(),
            name: "Customer Satisfaction".to_string(),
            target: 90.0,
            actual: 92.5,
            unit: "%".to_string(),
            status: MetricStanding::Exceeded,
        },
        OperationMetric {
            id: "3".to_string(),
            name: "Order Fulfillment Time".to_string(),
            target: 24.0,
            actual: 28.0,
            unit: "hours".to_string(),
            status: MetricStanding::Behind,
        },
        OperationMetric {
            id: "4".to_string(),
            name: "Quality Score".to_string(),
            target: 98.0,
            actual: 97.8,
            unit: "%".to_string(),
            status: MetricStanding::OnTrack,
        },
    ]
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_kpis_have_four_cards() {
        let cards = kpis();
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].title, "Total Revenue");
        assert_eq!(cards[1].change_direction, ChangeDirection::Decrease);
    }

    #[test]
    fn test_revenue_series_covers_the_year() {
        let months = revenue_by_month();
        assert_eq!(months.len(), 12);
        assert_eq!(months[0].month, "Jan");
        assert_eq!(months[11].revenue, 420_000);
    }

    #[test]
    fn test_fiscal_months_are_consistent() {
        for month in revenue_by_month() {
            assert_eq!(
                month.profit,
                month.revenue - month.expenses,
                "profit should equal revenue minus expenses for {}",
                month.month
            );
        }
    }

    #[test]
    fn test_region_shares_sum_to_whole() {
        let total: f64 = sales_by_region().iter().map(|r| r.share).sum();
        assert!((total - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_operation_metrics_match_page_values() {
        let metrics = operation_metrics();
        assert_eq!(metrics.len(), 4);
        assert_eq!(metrics[2].name, "Order Fulfillment Time");
        assert!(metrics[2].actual > metrics[2].target);
        assert_eq!(metrics[2].status, MetricStanding::Behind);
    }
}
