use serde::Serialize;

use crate::model::budget::{BudgetRecord, ExpenseCategory, MonthsToSurvive};
use crate::model::checklist::{Group, Period};

/// Everything the budget screen shows, computed once.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetSummary {
    pub monthly_savings_goal: f64,
    pub total_expenses: f64,
    pub net_income: f64,
    pub savings_ratio: f64,
    pub projected_yearly_savings: f64,
    pub months_to_survive: MonthsToSurvive,
    pub expense_categories: [ExpenseCategory; 3],
}

impl BudgetSummary {
    pub fn from_record(budget: &BudgetRecord) -> Self {
        Self {
            monthly_savings_goal: budget.monthly_savings_goal,
            total_expenses: budget.total_expenses(),
            net_income: budget.net_income(),
            savings_ratio: budget.savings_ratio(),
            projected_yearly_savings: budget.projected_yearly_savings(),
            months_to_survive: budget.months_to_survive(),
            expense_categories: budget.expense_categories(),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DayProgress {
    pub label: String,
    pub completed: usize,
    pub total: usize,
    pub is_complete: bool,
}

impl DayProgress {
    pub fn from_group(group: &Group) -> Self {
        Self {
            label: group.label.clone(),
            completed: group.completed_count(),
            total: group.len(),
            is_complete: group.is_complete(),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct WeekProgress {
    pub days: Vec<DayProgress>,
    pub completed: usize,
    pub total: usize,
}

impl WeekProgress {
    pub fn from_period(period: &Period) -> Self {
        Self {
            days: period.groups().iter().map(DayProgress::from_group).collect(),
            completed: period.completed_count(),
            total: period.item_count(),
        }
    }

    /// Share of items done, 0.0 to 1.0.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::nutrition;

    #[test]
    fn test_week_progress() {
        let mut week = nutrition::default_week();
        week.toggle(0, 0).unwrap();
        week.toggle(0, 1).unwrap();
        week.toggle(0, 2).unwrap();
        week.toggle(4, 1).unwrap();

        let progress = WeekProgress::from_period(&week);
        assert_eq!(progress.total, 21);
        assert_eq!(progress.completed, 4);
        assert!(progress.days[0].is_complete);
        assert_eq!(progress.days[4].completed, 1);
        assert!((progress.ratio() - 4.0 / 21.0).abs() < 1e-12);
    }
}
