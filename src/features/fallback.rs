use crate::data::models::{ScheduleEntry, ScheduleResponse};

const STUDY_BLUE: &str = "#3b82f6";
const PRACTICE_GREEN: &str = "#10b981";
const MOCK_ORANGE: &str = "#f59e0b";

const SUNDAY: i32 = 0;
const SATURDAY: i32 = 6;
const WEEKDAYS: std::ops::RangeInclusive<i32> = 1..=5;

#[derive(Debug, Default, PartialEq, Eq)]
struct Keywords {
    exam_prep: bool,
    practice_platform: bool,
    college: bool,
}

impl Keywords {
    fn detect(prompt: &str) -> Self {
        let lowered = prompt.to_lowercase();
        Keywords {
            exam_prep: lowered.contains("gate"),
            practice_platform: lowered.contains("leet"),
            college: lowered.contains("college"),
        }
    }
}

/// Builds a weekly schedule from keywords in the prompt, without any network
/// access. Never fails; with no keywords it yields only the weekday blocks.
pub fn generate_schedule(prompt: &str) -> ScheduleResponse {
    let keywords = Keywords::detect(prompt);
    log::info!("Generating fallback schedule ({:?})", keywords);

    // TODO: college is detected but does not move any slot yet; confirm with the
    // planner owners whether weekday blocks should avoid college hours.
    if keywords.college {
        log::debug!("College keyword present; slot placement unchanged");
    }

    let mut schedule = Vec::new();

    let morning = if keywords.exam_prep { "GATE Preparation" } else { "Morning Study" };
    for day in WEEKDAYS {
        schedule.push(ScheduleEntry::new(morning, day, "06:00", "08:30", STUDY_BLUE));
    }

    let evening = if keywords.exam_prep { "GATE Study" } else { "Evening Study" };
    for day in WEEKDAYS {
        schedule.push(ScheduleEntry::new(evening, day, "20:00", "22:30", STUDY_BLUE));
    }

    if keywords.practice_platform {
        for day in [SATURDAY, SUNDAY] {
            schedule.push(ScheduleEntry::new(
                "LeetCode Practice",
                day,
                "10:00",
                "13:00",
                PRACTICE_GREEN,
            ));
        }
    }

    if keywords.exam_prep {
        schedule.push(ScheduleEntry::new(
            "GATE Mock Test",
            SATURDAY,
            "14:00",
            "17:00",
            MOCK_ORANGE,
        ));
        schedule.push(ScheduleEntry::new("GATE Revision", SUNDAY, "14:00", "17:00", MOCK_ORANGE));
    }

    ScheduleResponse { schedule }
}
