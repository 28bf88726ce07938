use crate::model::checklist::{Group, Item, Period};

const BREAKFAST_A: &str = "Peanut Butter Toast and Pineapple";
const BREAKFAST_B: &str = "Scrambled Eggs and Fruit";
const LUNCH_A: &str = "Buffalo Chicken Wraps";
const LUNCH_B: &str = "Chicken Salad";
const DINNER: &str = "Chicken and Rice Bowl";

fn day(label: &str, breakfast: &str, lunch: &str) -> Group {
    Group::new(
        label,
        vec![Item::new(breakfast), Item::new(lunch), Item::new(DINNER)],
    )
}

/// The built-in meal plan: two alternating menus, Sunday lets you pick.
pub fn default_week() -> Period {
    Period::from_days([
        day("Monday", BREAKFAST_A, LUNCH_A),
        day("Tuesday", BREAKFAST_B, LUNCH_B),
        day("Wednesday", BREAKFAST_A, LUNCH_A),
        day("Thursday", BREAKFAST_B, LUNCH_B),
        day("Friday", BREAKFAST_A, LUNCH_A),
        day("Saturday", BREAKFAST_B, LUNCH_B),
        day(
            "Sunday",
            &format!("{BREAKFAST_A} or {BREAKFAST_B}"),
            &format!("{LUNCH_A} or {LUNCH_B}"),
        ),
    ])
}
