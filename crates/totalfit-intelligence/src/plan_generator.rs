// ABOUTME: Fixed weekly training template keyed by weekday
// ABOUTME: Selects the first N days of the week and assigns session types by day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TotalFit

use totalfit_core::constants::plan::PLAN_WEEKS;
use totalfit_core::models::{GeneratePlanRequest, PlanDay, SessionType, TrainingPlan, Weekday};
use tracing::debug;

/// Session scheduled on a given weekday
#[must_use]
pub const fn session_for(day: Weekday) -> SessionType {
    match day {
        Weekday::Tue | Weekday::Thu => SessionType::Intervals,
        Weekday::Mon | Weekday::Fri => SessionType::Strength,
        Weekday::Wed | Weekday::Sat | Weekday::Sun => SessionType::Endurance,
    }
}

/// Builds four-week plans from the weekly template
#[derive(Debug, Default, Clone, Copy)]
pub struct PlanGenerator;

impl PlanGenerator {
    /// Create a generator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Plan for a validated request; `availability_days` is already within [1, 7]
    #[must_use]
    pub fn generate(&self, request: &GeneratePlanRequest) -> TrainingPlan {
        if let Some(preferences) = &request.preferences {
            debug!(count = preferences.len(), "Preferences do not influence the template");
        }

        let details = format!("Goal: {}. RPE 6-7. (mocked)", request.goal);
        let plan = Weekday::WEEK
            .iter()
            .take(usize::from(request.availability_days))
            .map(|&day| PlanDay {
                day,
                session: session_for(day),
                details: details.clone(),
            })
            .collect();

        TrainingPlan {
            athlete_id: request.athlete_id.clone(),
            goal: request.goal.clone(),
            weeks: PLAN_WEEKS,
            plan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(days: u8) -> GeneratePlanRequest {
        GeneratePlanRequest {
            athlete_id: "a".to_owned(),
            goal: "sub-20 5k".to_owned(),
            availability_days: days,
            preferences: None,
        }
    }

    #[test]
    fn test_three_days() {
        let plan = PlanGenerator::new().generate(&request(3));
        let days: Vec<_> = plan.plan.iter().map(|d| d.day).collect();
        let sessions: Vec<_> = plan.plan.iter().map(|d| d.session).collect();
        assert_eq!(days, vec![Weekday::Mon, Weekday::Tue, Weekday::Wed]);
        assert_eq!(
            sessions,
            vec![
                SessionType::Strength,
                SessionType::Intervals,
                SessionType::Endurance
            ]
        );
        assert_eq!(plan.weeks, 4);
    }

    #[test]
    fn test_full_week() {
        let plan = PlanGenerator::new().generate(&request(7));
        let sessions: Vec<_> = plan.plan.iter().map(|d| d.session).collect();
        assert_eq!(
            sessions,
            vec![
                SessionType::Strength,
                SessionType::Intervals,
                SessionType::Endurance,
                SessionType::Intervals,
                SessionType::Strength,
                SessionType::Endurance,
                SessionType::Endurance,
            ]
        );
    }

    #[test]
    fn test_details_embed_goal() {
        let plan = PlanGenerator::new().generate(&request(1));
        assert_eq!(plan.plan.len(), 1);
        assert_eq!(plan.plan[0].details, "Goal: sub-20 5k. RPE 6-7. (mocked)");
        assert_eq!(plan.goal, "sub-20 5k");
    }

    #[test]
    fn test_preferences_ignored() {
        let mut with_prefs = request(4);
        with_prefs.preferences = Some(vec!["no running".to_owned()]);
        assert_eq!(
            PlanGenerator::new().generate(&with_prefs).plan,
            PlanGenerator::new().generate(&request(4)).plan
        );
    }
}
