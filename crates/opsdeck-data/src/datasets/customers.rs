//! Customers page datasets: the account list plus the analytics
//! panels around it

use super::date;
use opsdeck_core::types::{Customer, CustomerStatus};
use serde::{Deserialize, Serialize};

/// Roll-up metrics shown on the customer page cards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerMetrics {
    /// Total customer count
    pub total_customers: i64,
    /// Customers with an active relationship
    pub active_customers: i64,
    /// Customers added this period
    pub new_customers: i64,
    /// Churn rate, percent
    pub churn_rate: f64,
    /// Average lifetime value in dollars
    pub avg_lifetime_value: i64,
    /// Satisfaction score out of five
    pub satisfaction_score: f64,
}

/// One month of the acquisition trend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcquisitionMonth {
    /// Month label
    pub month: String,
    /// Accounts won
    #[serde(rename = "new")]
    pub new_accounts: i64,
    /// Accounts lost
    pub churned: i64,
    /// Net change
    pub net: i64,
}

/// Revenue attributed to a customer segment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentRevenue {
    /// Segment name
    pub segment: String,
    /// Revenue in dollars
    pub revenue: i64,
    /// Customer count in the segment
    pub customers: i64,
}

/// A top account by annual value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopCustomer {
    /// Account name
    pub name: String,
    /// Annual value in dollars
    pub value: i64,
    /// Year-over-year growth, percent
    pub growth: f64,
    /// Segment tier
    pub tier: String,
}

/// The customer account list
#[must_use]
pub fn customers() -> Vec<Customer> {
    vec![
        Customer {
            id: "1".to_string(),
            name: "Tech Solutions Inc.".to_string(),
            email: "contact@techsolutions.com".to_string(),
            company: "Tech Solutions Inc.".to_string(),
            status: CustomerStatus::Active,
            value: 125_000,
            last_contact: date(2024, 1, 15),
        },
        Customer {
            id: "2".to_string(),
            name: "Global Manufacturing".to_string(),
            email: "procurement@globalmanuf.com".to_string(),
            company: "Global Manufacturing".to_string(),
            status: CustomerStatus::Active,
            value: 89_000,
            last_contact: date(2024, 1, 10),
        },
        Customer {
            id: "3".to_string(),
            name: "Retail Chain Co.".to_string(),
            email: "vendor@retailchain.com".to_string(),
            company: "Retail Chain Co.".to_string(),
            status: CustomerStatus::Prospect,
            value: 45_000,
            last_contact: date(2024, 1, 8),
        },
        Customer {
            id: "4".to_string(),
            name: "Healthcare Systems".to_string(),
            email: "purchasing@healthsys.com".to_string(),
            company: "Healthcare Systems".to_string(),
            status: CustomerStatus::Active,
            value: 200_000,
            last_contact: date(2024, 1, 12),
        },
    ]
}

/// Card metrics for the customer page
#[must_use]
pub const fn customer_metrics() -> CustomerMetrics {
    CustomerMetrics {
        total_customers: 1248,
        active_customers: 1156,
        new_customers: 47,
        churn_rate: 3.2,
        avg_lifetime_value: 12_450,
        satisfaction_score: 4.3,
    }
}

/// Six months of won/lost accounts
#[must_use]
pub fn acquisition_trend() -> Vec<AcquisitionMonth> {
    let rows = [
        ("Jan", 42, 18, 24),
        ("Feb", 51, 22, 29),
        ("Mar", 38, 15, 23),
        ("Apr", 47, 19, 28),
        ("May", 55, 21, 34),
        ("Jun", 62, 25, 37),
    ];

    rows.into_iter()
        .map(|(month, new_accounts, churned, net)| AcquisitionMonth {
            month: month.to_string(),
            new_accounts,
            churned,
            net,
        })
        .collect()
}

/// Revenue split across the customer segments
#[must_use]
pub fn revenue_by_segment() -> Vec<SegmentRevenue> {
    let rows = [
        ("Enterprise", 890_000, 156),
        ("Mid-Market", 540_000, 342),
        ("Small Business", 320_000, 567),
        ("Startup", 85_000, 183),
    ];

    rows.into_iter()
        .map(|(segment, revenue, customers)| SegmentRevenue {
            segment: segment.to_string(),
            revenue,
            customers,
        })
        .collect()
}

/// Largest accounts by annual value
#[must_use]
pub fn top_customers() -> Vec<TopCustomer> {
    let rows = [
        ("TechCorp Inc.", 125_000, 15.2, "Enterprise"),
        ("Global Solutions", 89_000, 8.7, "Enterprise"),
        ("Innovate Co.", 67_000, -2.1, "Mid-Market"),
        ("Future Systems", 54_000, 22.3, "Mid-Market"),
        ("Dynamic Corp", 43_000, 5.8, "Small Business"),
    ];

    rows.into_iter()
        .map(|(name, value, growth, tier)| TopCustomer {
            name: name.to_string(),
            value,
            growth,
            tier: tier.to_string(),
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_customer_list_shape() {
        let accounts = customers();
        assert_eq!(accounts.len(), 4);
        assert_eq!(accounts[0].name, "Tech Solutions Inc.");
        assert_eq!(accounts[2].status, CustomerStatus::Prospect);
        assert_eq!(accounts[3].value, 200_000);
    }

    #[test]
    fn test_acquisition_trend_net_is_consistent() {
        for month in acquisition_trend() {
            assert_eq!(month.net, month.new_accounts - month.churned);
        }
    }

    #[test]
    fn test_acquisition_month_wire_name() {
        let month = &acquisition_trend()[0];
        let json = serde_json::to_value(month).expect("serializes");
        assert_eq!(json["new"], 42);
        assert!(json.get("new_accounts").is_none());
    }

    #[test]
    fn test_top_customers_ordered_by_value() {
        let top = top_customers();
        assert!(top.windows(2).all(|pair| pair[0].value >= pair[1].value));
    }
}
