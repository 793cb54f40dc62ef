//! Consecutive-day entry streak and the pet progression derived from it.
//!
//! The streak counts calendar days, walking backwards from the most recent
//! activity day. It does not partially credit: if the latest entry is older
//! than yesterday relative to `today`, the streak is 0.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::Expense;

pub fn streak(expenses: &[Expense], today: NaiveDate) -> u32 {
    // Distinct activity days, resolved entries only. Input order is
    // irrelevant; the set sorts for us.
    let days: BTreeSet<NaiveDate> = expenses.iter().filter_map(|e| e.created_date()).collect();

    let mut dates: Vec<NaiveDate> = days.into_iter().collect();
    dates.reverse();

    let Some(&latest) = dates.first() else {
        return 0;
    };

    let yesterday = today - chrono::Duration::days(1);
    if latest < yesterday {
        return 0;
    }

    let mut streak = 1;
    for pair in dates.windows(2) {
        if (pair[0] - pair[1]).num_days() == 1 {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}

pub fn has_entry_today(expenses: &[Expense], today: NaiveDate) -> bool {
    expenses.iter().any(|e| e.created_date() == Some(today))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PetStage {
    Egg,
    Chick,
    Master,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PetState {
    pub stage: PetStage,
    pub name: &'static str,
    pub level: u8,
    pub message: &'static str,
    pub description: &'static str,
}

/// Tier boundaries are part of the engine contract: 0–2 Egg, 3–9 Chick,
/// 10 and up Master.
pub fn pet_state(streak: u32, has_entry_today: bool) -> PetState {
    if streak < 3 {
        return PetState {
            stage: PetStage::Egg,
            name: "Budget Egg",
            level: 1,
            message: if has_entry_today {
                "Warm & happy!"
            } else {
                "I'm cold! Add expense!"
            },
            description: "Keep the streak to hatch it.",
        };
    }

    if streak < 10 {
        return PetState {
            stage: PetStage::Chick,
            name: "Coin Chick",
            level: 2,
            message: if has_entry_today {
                "Yum! Thanks!"
            } else {
                "Feed me data!"
            },
            description: "Growing stronger everyday.",
        };
    }

    PetState {
        stage: PetStage::Master,
        name: "Wealth Eagle",
        level: 3,
        message: if has_entry_today {
            "Excellent work."
        } else {
            "Maintain discipline."
        },
        description: "You mastered the rhythm.",
    }
}
