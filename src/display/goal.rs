//! Savings goal display formatting

use crate::config::Settings;
use crate::models::Goal;

const BAR_WIDTH: usize = 20;

fn progress_bar(percent: u8) -> String {
    let filled = usize::from(percent) * BAR_WIDTH / 100;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

/// Format goals with progress and status
pub fn format_goal_list(goals: &[Goal], settings: &Settings) -> String {
    if goals.is_empty() {
        return "No savings goals yet.".to_string();
    }

    let mut output = String::new();
    for goal in goals {
        output.push_str(&format!(
            "{} {} ({})\n",
            goal.id.short(),
            goal.name,
            goal.status()
        ));
        output.push_str(&format!(
            "  {} {:>3}%  {} of {}",
            progress_bar(goal.progress_percent()),
            goal.progress_percent(),
            settings.format_money(goal.current_amount),
            settings.format_money(goal.target_amount),
        ));
        if !goal.is_achieved() {
            output.push_str(&format!(
                ", {} to go",
                settings.format_money(goal.remaining())
            ));
        }
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0), format!("[{}]", ".".repeat(20)));
        assert_eq!(progress_bar(50), format!("[{}{}]", "#".repeat(10), ".".repeat(10)));
        assert_eq!(progress_bar(100), format!("[{}]", "#".repeat(20)));
    }

    #[test]
    fn test_format_goal_list() {
        let mut laptop = Goal::new("Laptop", Money::new(10_000_000));
        laptop.current_amount = Money::new(2_500_000);
        let mut trip = Goal::new("Trip", Money::new(100));
        trip.current_amount = Money::new(150);

        let output = format_goal_list(&[laptop, trip], &Settings::default());
        assert!(output.contains("Laptop (Active)"));
        assert!(output.contains(" 25%"));
        assert!(output.contains("Rp 7.500.000 to go"));
        assert!(output.contains("Trip (Achieved)"));
        assert!(output.contains("100%"));
    }
}
