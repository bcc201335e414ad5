//! Filter/search layer over the dashboard collections
//!
//! Every filter follows the same contract: a case-insensitive
//! substring match against the collection's designated text fields,
//! combined conjunctively with exact-equality categorical predicates.
//! Absent predicates match everything, results preserve dataset
//! order, and nothing here has side effects.

use opsdeck_core::types::{
    Customer, CustomerStatus, Employee, InventoryItem, StockStatus,
};
use opsdeck_core::utils::matches_any;

use crate::datasets::reports::ReportTemplate;

/// Predicates for the customer list
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomerFilter<'a> {
    /// Free-text query matched against name and company
    pub search: Option<&'a str>,
    /// Exact status match; `None` matches every status
    pub status: Option<CustomerStatus>,
}

impl CustomerFilter<'_> {
    /// Whether the customer passes every active predicate
    #[must_use]
    pub fn matches(&self, customer: &Customer) -> bool {
        let matches_search = self
            .search
            .is_none_or(|query| matches_any(&[&customer.name, &customer.company], query));
        let matches_status = self.status.is_none_or(|status| customer.status == status);
        matches_search && matches_status
    }
}

/// Predicates for the employee roster
#[derive(Debug, Clone, Copy, Default)]
pub struct EmployeeFilter<'a> {
    /// Free-text query matched against name, department, and position
    pub search: Option<&'a str>,
    /// Exact department match; `None` matches every department
    pub department: Option<&'a str>,
}

impl EmployeeFilter<'_> {
    /// Whether the employee passes every active predicate
    #[must_use]
    pub fn matches(&self, employee: &Employee) -> bool {
        let matches_search = self.search.is_none_or(|query| {
            matches_any(
                &[&employee.name, &employee.department, &employee.position],
                query,
            )
        });
        let matches_department = self
            .department
            .is_none_or(|department| employee.department == department);
        matches_search && matches_department
    }
}

/// Predicates for the inventory list
#[derive(Debug, Clone, Copy, Default)]
pub struct InventoryFilter<'a> {
    /// Free-text query matched against name and category
    pub search: Option<&'a str>,
    /// Exact category match; `None` matches every category
    pub category: Option<&'a str>,
    /// Stock-status match against the computed status
    pub status: Option<StockStatus>,
}

impl InventoryFilter<'_> {
    /// Whether the item passes every active predicate
    #[must_use]
    pub fn matches(&self, item: &InventoryItem) -> bool {
        let matches_search = self
            .search
            .is_none_or(|query| matches_any(&[&item.name, &item.category], query));
        let matches_category = self
            .category
            .is_none_or(|category| item.category == category);
        let matches_status = self.status.is_none_or(|status| item.stock_status() == status);
        matches_search && matches_category && matches_status
    }
}

/// Predicates for the report template list
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportFilter<'a> {
    /// Exact category match; `None` matches every category
    pub category: Option<&'a str>,
}

impl ReportFilter<'_> {
    /// Whether the template passes the category predicate
    #[must_use]
    pub fn matches(&self, template: &ReportTemplate) -> bool {
        self.category
            .is_none_or(|category| template.category == category)
    }
}

/// Filtered view of the customer list, preserving order
#[must_use]
pub fn filter_customers(customers: &[Customer], filter: &CustomerFilter<'_>) -> Vec<Customer> {
    customers
        .iter()
        .filter(|customer| filter.matches(customer))
        .cloned()
        .collect()
}

/// Filtered view of the employee roster, preserving order
#[must_use]
pub fn filter_employees(employees: &[Employee], filter: &EmployeeFilter<'_>) -> Vec<Employee> {
    employees
        .iter()
        .filter(|employee| filter.matches(employee))
        .cloned()
        .collect()
}

/// Filtered view of the inventory list, preserving order
#[must_use]
pub fn filter_inventory(items: &[InventoryItem], filter: &InventoryFilter<'_>) -> Vec<InventoryItem> {
    items
        .iter()
        .filter(|item| filter.matches(item))
        .cloned()
        .collect()
}

/// Filtered view of the report templates, preserving order
#[must_use]
pub fn filter_reports(templates: &[ReportTemplate], filter: &ReportFilter<'_>) -> Vec<ReportTemplate> {
    templates
        .iter()
        .filter(|template| filter.matches(template))
        .cloned()
        .collect()
}

/// One page of an already-filtered collection
#[must_use]
pub fn page<T: Clone>(items: &[T], limit: i64, offset: i64) -> Vec<T> {
    let offset = usize::try_from(offset.max(0)).unwrap_or(0);
    let limit = usize::try_from(limit.max(0)).unwrap_or(0);
    items.iter().skip(offset).take(limit).cloned().collect()
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use crate::datasets::{customers, hr, inventory, reports};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_empty_filter_is_identity() {
        let accounts = customers::customers();
        let filtered = filter_customers(&accounts, &CustomerFilter::default());

        assert_eq!(filtered.len(), accounts.len());
        let names: Vec<&str> = filtered.iter().map(|c| c.name.as_str()).collect();
        let original: Vec<&str> = accounts.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, original);
    }

    #[test]
    fn test_empty_search_string_is_identity() {
        let accounts = customers::customers();
        let filter = CustomerFilter {
            search: Some(""),
            status: None,
        };
        assert_eq!(filter_customers(&accounts, &filter).len(), accounts.len());
    }

    #[test]
    fn test_search_tech_matches_name_or_company_case_insensitively() {
        let accounts = customers::customers();
        let filter = CustomerFilter {
            search: Some("tech"),
            status: None,
        };

        let filtered = filter_customers(&accounts, &filter);
        let names: Vec<&str> = filtered.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Tech Solutions Inc."]);
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let accounts = customers::customers();

        // "c" appears in every account name, so only the status narrows
        let filter = CustomerFilter {
            search: Some("c"),
            status: Some(CustomerStatus::Prospect),
        };

        let filtered = filter_customers(&accounts, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Retail Chain Co.");
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let accounts = customers::customers();
        let filter = CustomerFilter {
            search: Some("inc"),
            status: Some(CustomerStatus::Active),
        };

        let once = filter_customers(&accounts, &filter);
        let twice = filter_customers(&once, &filter);

        assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(twice.iter()) {
            assert_eq!(a.id, b.id);
        }
    }

    #[test]
    fn test_employee_search_covers_position() {
        let roster = hr::employees();
        let filter = EmployeeFilter {
            search: Some("lead"),
            department: None,
        };

        let filtered = filter_employees(&roster, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "David Kim");
    }

    #[test]
    fn test_employee_department_is_exact_match() {
        let roster = hr::employees();
        let filter = EmployeeFilter {
            search: None,
            department: Some("Engineering"),
        };

        let filtered = filter_employees(&roster, &filter);
        assert_eq!(filtered.len(), 2);

        // Substring of a department is not a department
        let filter = EmployeeFilter {
            search: None,
            department: Some("Engineer"),
        };
        assert!(filter_employees(&roster, &filter).is_empty());
    }

    #[test]
    fn test_inventory_status_filter_uses_computed_status() {
        let items = inventory::inventory_items();
        let filter = InventoryFilter {
            search: None,
            category: None,
            status: Some(StockStatus::LowStock),
        };

        let filtered = filter_inventory(&items, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Office Chairs");
    }

    #[test]
    fn test_report_category_filter() {
        let templates = reports::templates();
        let filter = ReportFilter {
            category: Some("Financial"),
        };

        let filtered = filter_reports(&templates, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Monthly Financial Report");
    }

    #[test]
    fn test_page_slices_after_filtering() {
        let accounts = customers::customers();
        assert_eq!(page(&accounts, 2, 0).len(), 2);
        assert_eq!(page(&accounts, 2, 2).len(), 2);
        assert_eq!(page(&accounts, 2, 4).len(), 0);
        assert_eq!(page(&accounts, 2, 2)[0].id, accounts[2].id);
    }

    #[test]
    fn test_page_tolerates_negative_inputs() {
        let accounts = customers::customers();
        assert!(page(&accounts, -1, 0).is_empty());
        assert_eq!(page(&accounts, 10, -5).len(), accounts.len());
    }

    proptest! {
        #[test]
        fn test_membership_matches_predicates(query in "[a-zA-Z .]{0,12}") {
            let accounts = customers::customers();
            let filter = CustomerFilter {
                search: Some(&query),
                status: None,
            };

            let filtered = filter_customers(&accounts, &filter);
            for account in &accounts {
                let expected = matches_any(&[&account.name, &account.company], &query);
                let present = filtered.iter().any(|c| c.id == account.id);
                prop_assert_eq!(expected, present);
            }
        }

        #[test]
        fn test_filtering_never_reorders(query in "[a-z]{0,6}") {
            let roster = hr::employees();
            let filter = EmployeeFilter {
                search: Some(&query),
                department: None,
            };

            let filtered = filter_employees(&roster, &filter);
            let ids: Vec<&str> = filtered.iter().map(|e| e.id.as_str()).collect();
            let mut expected: Vec<&str> = Vec::new();
            for employee in &roster {
                if filter.matches(employee) {
                    expected.push(employee.id.as_str());
                }
            }
            prop_assert_eq!(ids, expected);
        }
    }
}
