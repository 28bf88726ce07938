use crate::model::checklist::{Group, Item, Period};

fn day(label: &str, workouts: [(&str, &str); 6]) -> Group {
    Group::new(
        label,
        workouts
            .into_iter()
            .map(|(name, sets)| Item::workout(name, sets))
            .collect(),
    )
}

/// The built-in six-exercise split for each day of the week.
pub fn default_week() -> Period {
    Period::from_days([
        day("Monday", [
            ("Dumbbell Bench Press", "4 sets of 10-12 reps"),
            ("One-Arm Dumbbell Row", "4 sets of 10-12 reps each side"),
            ("Russian Twists", "3 sets of 15 reps each side"),
            ("Cable Flyes", "3 sets of 12 reps"),
            ("Wide-Grip Lat Pulldown", "3 sets of 10-12 reps"),
            ("Hanging Leg Raises", "3 sets of 10-12 reps"),
        ]),
        day("Tuesday", [
            ("Goblet Squats", "4 sets of 10-12 reps"),
            ("Stability Ball Hamstring Curls", "4 sets of 10-12 reps"),
            ("Cable Kickbacks", "4 sets of 12 reps per leg"),
            ("Standing Calf Raises", "4 sets of 15 reps"),
            ("Walking Lunges", "3 sets of 10 reps per leg"),
            ("Box Jumps", "3 sets of 10 reps"),
        ]),
        day("Wednesday", [
            ("Seated Dumbbell Press", "4 sets of 10-12 reps"),
            ("EZ Bar Curl", "4 sets of 10-12 reps"),
            ("Tricep Rope Pushdown", "4 sets of 10-12 reps"),
            ("Front Raises", "3 sets of 12 reps"),
            ("Preacher Curls", "3 sets of 10 reps"),
            ("Bench Dips", "3 sets of 12-15 reps"),
        ]),
        day("Thursday", [
            ("Leg Press", "4 sets of 10-12 reps"),
            ("Deadlifts", "4 sets of 10 reps"),
            ("Glute Bridges", "4 sets of 12 reps"),
            ("Seated Calf Raises", "4 sets of 15 reps"),
            ("Sumo Squats", "3 sets of 10-12 reps"),
            ("Single Leg Deadlifts", "3 sets of 10 reps per leg"),
        ]),
        day("Friday", [
            ("Incline Dumbbell Press", "4 sets of 10-12 reps"),
            ("T-Bar Row", "4 sets of 10-12 reps"),
            ("Decline Bench Sit-Ups", "3 sets of 15 reps"),
            ("Pec Deck Machine", "3 sets of 12 reps"),
            ("Pull-Ups (assisted if necessary)", "3 sets of 8-10 reps"),
            ("Ab Wheel Rollouts", "3 sets of 10 reps"),
        ]),
        day("Saturday", [
            ("Front Squats", "4 sets of 10 reps"),
            ("Lying Leg Curls", "4 sets of 12 reps"),
            ("Weighted Step-Ups", "4 sets of 10 reps per leg"),
            ("Calf Press on the Leg Machine", "4 sets of 15 reps"),
            ("Bulgarian Split Squats", "3 sets of 10 reps per leg"),
            ("Kettlebell Swings", "3 sets of 15 reps"),
        ]),
        day("Sunday", [
            ("Arnold Press", "4 sets of 10-12 reps"),
            ("Incline Dumbbell Curl", "4 sets of 10 reps per arm"),
            ("Skull Crushers", "4 sets of 10-12 reps"),
            ("Bent-Over Reverse Flyes", "3 sets of 12 reps"),
            ("Concentration Curls", "3 sets of 10 reps per arm"),
            ("Overhead Cable Extension", "3 sets of 12 reps"),
        ]),
    ])
}
