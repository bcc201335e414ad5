//! HR page datasets: the employee roster plus workforce panels

use super::date;
use chrono::NaiveDate;
use opsdeck_core::types::{Employee, EmployeeStatus};
use serde::{Deserialize, Serialize};

/// Roll-up metrics for the HR page cards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HrMetrics {
    /// Total headcount
    pub total_employees: i64,
    /// Hires this period
    pub new_hires: i64,
    /// Annualized turnover rate, percent
    pub turnover_rate: f64,
    /// Average salary in dollars
    pub avg_salary: i64,
    /// Satisfaction score out of five
    pub satisfaction_score: f64,
    /// Open requisitions
    pub open_positions: i64,
}

/// Headcount per department
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentHeadcount {
    /// Department name
    pub department: String,
    /// Employee count
    pub count: i64,
    /// Share of total headcount, percent
    pub share: f64,
}

/// One month of the hiring trend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HiringMonth {
    /// Month label
    pub month: String,
    /// Employees hired
    pub hires: i64,
    /// Employees departed
    pub departures: i64,
    /// Net change
    pub net: i64,
}

/// One band of the performance-rating distribution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceBand {
    /// Rating label
    pub rating: String,
    /// Employees in the band
    pub count: i64,
    /// Share of the workforce, percent
    pub share: f64,
}

/// State of a scheduled performance review
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ReviewStatus {
    /// Not yet scheduled
    Pending,
    /// On the calendar
    Scheduled,
    /// Past its due date
    Overdue,
}

/// A performance review coming due
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpcomingReview {
    /// Employee name
    pub employee: String,
    /// Department name
    pub department: String,
    /// Review due date
    pub due_date: NaiveDate,
    /// Scheduling state
    pub status: ReviewStatus,
}

/// A training program with enrollment counts.
///
/// The completion percentage is derived from the counts rather than
/// stored alongside them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingProgram {
    /// Program name
    pub program: String,
    /// Employees enrolled
    pub enrolled: i64,
    /// Employees who completed
    pub completed: i64,
}

/// The employee roster
#[must_use]
pub fn employees() -> Vec<Employee> {
    vec![
        Employee {
            id: "1".to_string(),
            name: "Sarah Johnson".to_string(),
            email: "sarah.johnson@company.com".to_string(),
            department: "Engineering".to_string(),
            position: "Senior Developer".to_string(),
            status: EmployeeStatus::Active,
            join_date: date(2022, 3, 15),
            salary: 95_000,
        },
        Employee {
            id: "2".to_string(),
            name: "Michael Chen".to_string(),
            email: "michael.chen@company.com".to_string(),
            department: "Marketing".to_string(),
            position: "Marketing Manager".to_string(),
            status: EmployeeStatus::Active,
            join_date: date(2021, 11, 8),
            salary: 78_000,
        },
        Employee {
            id: "3".to_string(),
            name: "Emily Rodriguez".to_string(),
            email: "emily.rodriguez@company.com".to_string(),
            department: "Sales".to_string(),
            position: "Account Executive".to_string(),
            status: EmployeeStatus::OnLeave,
            join_date: date(2020, 7, 22),
            salary: 65_000,
        },
        Employee {
            id: "4".to_string(),
            name: "David Kim".to_string(),
            email: "david.kim@company.com".to_string(),
            department: "Engineering".to_string(),
            position: "Lead Engineer".to_string(),
            status: EmployeeStatus::Active,
            join_date: date(2019, 2, 14),
            salary: 120_000,
        },
        Employee {
            id: "5".to_string(),
            name: "Lisa Thompson".to_string(),
            email: "lisa.thompson@company.com".to_string(),
            department: "HR".to_string(),
            position: "HR Business Partner".to_string(),
            status: EmployeeStatus::Active,
            join_date: date(2023, 1, 10),
            salary: 72_000,
        },
    ]
}

/// Card metrics for the HR page
#[must_use]
pub const fn hr_metrics() -> HrMetrics {
    HrMetrics {
        total_employees: 247,
        new_hires: 12,
        turnover_rate: 8.3,
        avg_salary: 78_500,
        satisfaction_score: 4.2,
        open_positions: 15,
    }
}

/// Headcount distribution across departments
#[must_use]
pub fn department_breakdown() -> Vec<DepartmentHeadcount> {
    let rows = [
        ("Engineering", 89, 36.0),
        ("Sales", 52, 21.0),
        ("Marketing", 34, 14.0),
        ("Operations", 28, 11.0),
        ("HR", 18, 7.0),
        ("Finance", 16, 6.0),
        ("Legal", 10, 4.0),
    ];

    rows.into_iter()
        .map(|(department, count, share)| DepartmentHeadcount {
            department: department.to_string(),
            count,
            share,
        })
        .collect()
}

/// Six months of hires and departures
#[must_use]
pub fn hiring_trend() -> Vec<HiringMonth> {
    let rows = [
        ("Jan", 8, 5, 3),
        ("Feb", 12, 7, 5),
        ("Mar", 15, 9, 6),
        ("Apr", 10, 6, 4),
        ("May", 18, 8, 10),
        ("Jun", 22, 12, 10),
    ];

    rows.into_iter()
        .map(|(month, hires, departures, net)| HiringMonth {
            month: month.to_string(),
            hires,
            departures,
            net,
        })
        .collect()
}

/// Performance-rating distribution
#[must_use]
pub fn performance_distribution() -> Vec<PerformanceBand> {
    let rows = [
        ("Exceptional", 37, 15.0),
        ("Exceeds", 74, 30.0),
        ("Meets", 111, 45.0),
        ("Below", 20, 8.0),
        ("Unsatisfactory", 5, 2.0),
    ];

    rows.into_iter()
        .map(|(rating, count, share)| PerformanceBand {
            rating: rating.to_string(),
            count,
            share,
        })
        .collect()
}

/// Reviews coming due
#[must_use]
pub fn upcoming_reviews() -> Vec<UpcomingReview> {
    vec![
        UpcomingReview {
            employee: "Sarah Johnson".to_string(),
            department: "Engineering".to_string(),
            due_date: date(2024, 2, 15),
            status: ReviewStatus::Pending,
        },
        UpcomingReview {
            employee: "Michael Chen".to_string(),
            department: "Marketing".to_string(),
            due_date: date(2024, 2, 18),
            status: ReviewStatus::Scheduled,
        },
        UpcomingReview {
            employee: "Emily Rodriguez".to_string(),
            department: "Sales".to_string(),
            due_date: date(2024, 2, 20),
            status: ReviewStatus::Overdue,
        },
        UpcomingReview {
            employee: "David Kim".to_string(),
            department: "Engineering".to_string(),
            due_date: date(2024, 2, 22),
            status: ReviewStatus::Pending,
        },
    ]
}

/// Training programs with enrollment and completion counts
#[must_use]
pub fn training_programs() -> Vec<TrainingProgram> {
    let rows = [
        ("Leadership Development", 45, 32),
        ("Technical Skills", 67, 58),
        ("Safety Training", 247, 241),
        ("Compliance", 247, 234),
    ];

    rows.into_iter()
        .map(|(program, enrolled, completed)| TrainingProgram {
            program: program.to_string(),
            enrolled,
            completed,
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_roster_shape() {
        let roster = employees();
        assert_eq!(roster.len(), 5);
        assert_eq!(roster[0].department, "Engineering");
        assert_eq!(roster[2].status, EmployeeStatus::OnLeave);
        assert_eq!(roster[3].salary, 120_000);
    }

    #[test]
    fn test_hiring_trend_net_is_consistent() {
        for month in hiring_trend() {
            assert_eq!(month.net, month.hires - month.departures);
        }
    }

    #[test]
    fn test_performance_bands_cover_workforce() {
        let total: i64 = performance_distribution().iter().map(|b| b.count).sum();
        assert_eq!(total, hr_metrics().total_employees);
    }

    #[test]
    fn test_training_completion_never_exceeds_enrollment() {
        for program in training_programs() {
            assert!(program.completed <= program.enrolled);
        }
    }

    #[test]
    fn test_review_status_wire_names() {
        let json = serde_json::to_string(&ReviewStatus::Overdue).expect("serializes");
        assert_eq!(json, "\"overdue\"");
    }
}
