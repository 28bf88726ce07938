use std::fmt;

use serde::{Deserialize, Serialize};

/// Monthly money inputs. Every field defaults to zero.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct BudgetRecord {
    pub monthly_income: f64,
    pub grocery_spending: f64,
    pub utilities_spending: f64,
    pub activities_spending: f64,
    pub monthly_savings_goal: f64,
    pub savings_amount: f64,
    pub debit_account_amount: f64,
    pub credit_amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BudgetField {
    MonthlyIncome,
    GrocerySpending,
    UtilitiesSpending,
    ActivitiesSpending,
    MonthlySavingsGoal,
    SavingsAmount,
    DebitAccountAmount,
    CreditAmount,
}

impl BudgetField {
    pub const ALL: [BudgetField; 8] = [
        BudgetField::MonthlyIncome,
        BudgetField::GrocerySpending,
        BudgetField::UtilitiesSpending,
        BudgetField::ActivitiesSpending,
        BudgetField::MonthlySavingsGoal,
        BudgetField::SavingsAmount,
        BudgetField::DebitAccountAmount,
        BudgetField::CreditAmount,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BudgetField::MonthlyIncome => "Monthly income",
            BudgetField::GrocerySpending => "Grocery spending",
            BudgetField::UtilitiesSpending => "Utilities spending",
            BudgetField::ActivitiesSpending => "Activities spending",
            BudgetField::MonthlySavingsGoal => "Monthly savings goal",
            BudgetField::SavingsAmount => "Savings",
            BudgetField::DebitAccountAmount => "Debit account",
            BudgetField::CreditAmount => "Credit owed",
        }
    }
}

impl BudgetRecord {
    pub fn get(&self, field: BudgetField) -> f64 {
        match field {
            BudgetField::MonthlyIncome => self.monthly_income,
            BudgetField::GrocerySpending => self.grocery_spending,
            BudgetField::UtilitiesSpending => self.utilities_spending,
            BudgetField::ActivitiesSpending => self.activities_spending,
            BudgetField::MonthlySavingsGoal => self.monthly_savings_goal,
            BudgetField::SavingsAmount => self.savings_amount,
            BudgetField::DebitAccountAmount => self.debit_account_amount,
            BudgetField::CreditAmount => self.credit_amount,
        }
    }

    pub fn set(&mut self, field: BudgetField, value: f64) {
        let slot = match field {
            BudgetField::MonthlyIncome => &mut self.monthly_income,
            BudgetField::GrocerySpending => &mut self.grocery_spending,
            BudgetField::UtilitiesSpending => &mut self.utilities_spending,
            BudgetField::ActivitiesSpending => &mut self.activities_spending,
            BudgetField::MonthlySavingsGoal => &mut self.monthly_savings_goal,
            BudgetField::SavingsAmount => &mut self.savings_amount,
            BudgetField::DebitAccountAmount => &mut self.debit_account_amount,
            BudgetField::CreditAmount => &mut self.credit_amount,
        };
        *slot = value;
    }

    pub fn total_expenses(&self) -> f64 {
        self.grocery_spending + self.utilities_spending + self.activities_spending
    }

    pub fn net_income(&self) -> f64 {
        self.monthly_income - self.total_expenses()
    }

    /// Savings as a percentage of income; zero when there is no income.
    pub fn savings_ratio(&self) -> f64 {
        if self.monthly_income > 0.0 {
            (self.savings_amount / self.monthly_income) * 100.0
        } else {
            0.0
        }
    }

    pub fn projected_yearly_savings(&self) -> f64 {
        self.savings_amount * 12.0
    }

    /// How long current funds last without income.
    pub fn months_to_survive(&self) -> MonthsToSurvive {
        if self.monthly_income > 0.0 {
            return MonthsToSurvive::NotApplicable;
        }

        let total_funds = self.savings_amount + self.debit_account_amount - self.credit_amount;
        let expenses = self.total_expenses();
        if expenses > 0.0 {
            let months = round_to_tenth(total_funds / expenses);
            if months > 0.0 {
                MonthsToSurvive::Months(months)
            } else {
                MonthsToSurvive::InsufficientFunds
            }
        } else {
            MonthsToSurvive::Indefinite
        }
    }

    pub fn expense_categories(&self) -> [ExpenseCategory; 3] {
        [
            ExpenseCategory { category: "Groceries", amount: self.grocery_spending },
            ExpenseCategory { category: "Utilities", amount: self.utilities_spending },
            ExpenseCategory { category: "Activities", amount: self.activities_spending },
        ]
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MonthsToSurvive {
    /// There is an income, so the metric isn't computed.
    NotApplicable,
    Months(f64),
    InsufficientFunds,
    /// No expenses to deplete the funds.
    Indefinite,
}

impl fmt::Display for MonthsToSurvive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthsToSurvive::NotApplicable => write!(f, "N/A"),
            MonthsToSurvive::Months(months) => write!(f, "{:.1} months", months),
            MonthsToSurvive::InsufficientFunds => write!(f, "0 months (Insufficient funds)"),
            MonthsToSurvive::Indefinite => write!(f, "Indefinite (No expenses)"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpenseCategory {
    pub category: &'static str,
    pub amount: f64,
}
