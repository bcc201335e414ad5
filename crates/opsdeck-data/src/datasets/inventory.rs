//! Inventory page datasets: the stocked items plus supply-chain
//! panels

use super::date;
use opsdeck_core::types::InventoryItem;
use serde::{Deserialize, Serialize};

/// Roll-up metrics for the inventory page cards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryMetrics {
    /// Distinct items tracked
    pub total_items: i64,
    /// Items below their reorder threshold
    pub low_stock_items: i64,
    /// Items with nothing on hand
    pub out_of_stock_items: i64,
    /// Total valuation in dollars
    pub total_value: i64,
    /// Average yearly stock turnover
    pub avg_turnover: f64,
    /// On-time delivery rate, percent
    pub on_time_delivery: f64,
}

/// A supplier scorecard row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    /// Supplier name
    pub name: String,
    /// Supplied category
    pub category: String,
    /// Rating out of five
    pub rating: f64,
    /// On-time delivery rate, percent
    pub on_time: f64,
    /// Orders placed this year
    pub orders: i64,
}

/// One month of stock movement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockMovement {
    /// Month label
    pub month: String,
    /// Units received
    pub inbound: i64,
    /// Units shipped
    pub outbound: i64,
    /// Net change
    pub net: i64,
}

/// Inventory share per category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    /// Category name
    pub category: String,
    /// Share of inventory value, percent
    pub share: f64,
    /// Item count in the category
    pub items: i64,
}

/// Urgency of a reorder alert
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ReorderUrgency {
    /// Stock exhausted or nearly so
    Critical,
    /// Well below threshold
    High,
    /// Below threshold
    Medium,
}

/// A reorder alert row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReorderAlert {
    /// Item name
    pub item: String,
    /// Units currently on hand
    pub current_stock: i64,
    /// Reorder threshold
    pub min_stock: i64,
    /// How urgently a reorder is needed
    pub urgency: ReorderUrgency,
}

/// The stocked item list
#[must_use]
pub fn inventory_items() -> Vec<InventoryItem> {
    vec![
        InventoryItem {
            id: "1".to_string(),
            name: "Wireless Headphones".to_string(),
            category: "Electronics".to_string(),
            stock: 150,
            min_stock: 50,
            price: 99.99,
            supplier: "AudioTech Corp".to_string(),
            last_updated: date(2024, 1, 15),
        },
        InventoryItem {
            id: "2".to_string(),
            name: "Office Chairs".to_string(),
            category: "Furniture".to_string(),
            stock: 25,
            min_stock: 30,
            price: 299.99,
            supplier: "Comfort Furniture".to_string(),
            last_updated: date(2024, 1, 14),
        },
        InventoryItem {
            id: "3".to_string(),
            name: "Laptop Stands".to_string(),
            category: "Accessories".to_string(),
            stock: 0,
            min_stock: 20,
            price: 49.99,
            supplier: "ErgoSupplies".to_string(),
            last_updated: date(2024, 1, 13),
        },
        InventoryItem {
            id: "4".to_string(),
            name: "Bluetooth Mice".to_string(),
            category: "Electronics".to_string(),
            stock: 75,
            min_stock: 25,
            price: 29.99,
            supplier: "TechGear Ltd".to_string(),
            last_updated: date(2024, 1, 15),
        },
    ]
}

/// Card metrics for the inventory page
#[must_use]
pub const fn inventory_metrics() -> InventoryMetrics {
    InventoryMetrics {
        total_items: 1247,
        low_stock_items: 23,
        out_of_stock_items: 8,
        total_value: 2_340_000,
        avg_turnover: 8.5,
        on_time_delivery: 94.2,
    }
}

/// Supplier scorecards
#[must_use]
pub fn suppliers() -> Vec<Supplier> {
    let rows = [
        ("TechCorp Supplies", "Electronics", 4.8, 96.0, 127),
        ("Global Manufacturing", "Hardware", 4.6, 92.0, 89),
        ("Efficient Logistics", "Components", 4.9, 98.0, 156),
        ("Quality Parts Inc.", "Accessories", 4.5, 89.0, 73),
    ];

    rows.into_iter()
        .map(|(name, category, rating, on_time, orders)| Supplier {
            name: name.to_string(),
            category: category.to_string(),
            rating,
            on_time,
            orders,
        })
        .collect()
}

/// Six months of inbound and outbound stock
#[must_use]
pub fn stock_movement() -> Vec<StockMovement> {
    let rows = [
        ("Jan", 450, 380, 70),
        ("Feb", 520, 420, 100),
        ("Mar", 480, 390, 90),
        ("Apr", 580, 460, 120),
        ("May", 620, 510, 110),
        ("Jun", 680, 540, 140),
    ];

    rows.into_iter()
        .map(|(month, inbound, outbound, net)| StockMovement {
            month: month.to_string(),
            inbound,
            outbound,
            net,
        })
        .collect()
}

/// Inventory split across categories
#[must_use]
pub fn category_breakdown() -> Vec<CategoryBreakdown> {
    let rows = [
        ("Electronics", 45.0, 456),
        ("Furniture", 25.0, 234),
        ("Accessories", 18.0, 345),
        ("Hardware", 12.0, 212),
    ];

    rows.into_iter()
        .map(|(category, share, items)| CategoryBreakdown {
            category: category.to_string(),
            share,
            items,
        })
        .collect()
}

/// Items flagged for reorder
#[must_use]
pub fn reorder_alerts() -> Vec<ReorderAlert> {
    vec![
        ReorderAlert {
            item: "Wireless Headphones".to_string(),
            current_stock: 15,
            min_stock: 50,
            urgency: ReorderUrgency::High,
        },
        ReorderAlert {
            item: "Office Chairs".to_string(),
            current_stock: 5,
            min_stock: 30,
            urgency: ReorderUrgency::Critical,
        },
        ReorderAlert {
            item: "USB Cables".to_string(),
            current_stock: 25,
            min_stock: 100,
            urgency: ReorderUrgency::Medium,
        },
        ReorderAlert {
            item: "Laptop Stands".to_string(),
            current_stock: 0,
            min_stock: 20,
            urgency: ReorderUrgency::Critical,
        },
    ]
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use opsdeck_core::types::StockStatus;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_item_list_shape() {
        let items = inventory_items();
        assert_eq!(items.len(), 4);
        assert_eq!(items[0].name, "Wireless Headphones");
        assert_eq!(items[1].supplier, "Comfort Furniture");
    }

    #[test]
    fn test_seeded_items_compute_expected_statuses() {
        let items = inventory_items();
        let statuses: Vec<StockStatus> = items.iter().map(InventoryItem::stock_status).collect();
        assert_eq!(
            statuses,
            vec![
                StockStatus::InStock,
                StockStatus::LowStock,
                StockStatus::OutOfStock,
                StockStatus::InStock,
            ]
        );
    }

    #[test]
    fn test_stock_movement_net_is_consistent() {
        for month in stock_movement() {
            assert_eq!(month.net, month.inbound - month.outbound);
        }
    }

    #[test]
    fn test_reorder_alerts_are_below_threshold() {
        for alert in reorder_alerts() {
            assert!(alert.current_stock < alert.min_stock);
        }
    }

    #[test]
    fn test_urgency_wire_names() {
        let json = serde_json::to_string(&ReorderUrgency::Critical).expect("serializes");
        assert_eq!(json, "\"critical\"");
    }
}
