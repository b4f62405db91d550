//! Instruction templates sent to the generative API.
//!
//! Every builder here is a pure function of its arguments. The optional
//! request identifier only raises the sampling temperature and asks the model
//! for variation; the template itself never changes.

use crate::data::models::ScheduleScope;

const STUDY_SYSTEM_PROMPT: &str = r#"You are an expert educational tutor who creates comprehensive study materials. Given a topic, you MUST return a valid JSON object with exactly this structure (no markdown, no code fences, just pure JSON):

{
  "explanation": "A clear, simple explanation of the topic as if explaining to a 10-year-old. Use analogies and everyday examples. 3-5 paragraphs.",
  "flashcards": [
    {"question": "...", "answer": "..."},
    {"question": "...", "answer": "..."}
  ],
  "quiz": [
    {
      "question": "...",
      "options": ["A) ...", "B) ...", "C) ...", "D) ..."],
      "correctIndex": 0,
      "explanation": "Brief explanation of why this is correct"
    }
  ],
  "studyTips": [
    "Tip 1...",
    "Tip 2..."
  ]
}

Rules:
1. Generate exactly 8 flashcards
2. Generate exactly 5 quiz questions with 4 options each
3. correctIndex is 0-based (0 for A, 1 for B, 2 for C, 3 for D)
4. Generate 4-5 study tips
5. Keep language simple and accessible
6. Make quiz options plausible but with one clearly correct answer
7. Create DIFFERENT questions each time, focusing on various aspects of the topic
8. Return ONLY the JSON object, no other text"#;

const WEEKLY_SCHEDULE_SYSTEM_PROMPT: &str = r##"You are an AI study planner assistant. Based on the user's requirements, create a weekly study schedule. Return ONLY a valid JSON object (no markdown, no code fences) with this structure:

{
  "schedule": [
    {
      "topic": "Subject name",
      "day_of_week": 0-6 (0=Sunday, 6=Saturday),
      "start_time": "HH:MM" (24-hour format),
      "end_time": "HH:MM" (24-hour format),
      "color": "#hexcolor"
    }
  ]
}

Rules:
1. Create 5-10 study sessions based on user requirements
2. ONLY include subjects and activities the user explicitly mentioned; do not invent others
3. Distribute sessions across different days
4. Use realistic time slots (avoid late night unless requested)
5. Assign different colors to different subjects
6. Ensure no time conflicts on the same day
7. Keep sessions between 1-3 hours typically"##;

const DAILY_SCHEDULE_TEMPLATE: &str = r##"You are a daily schedule planner. Create a single day schedule based ONLY on what the user explicitly mentions.

User Request: "{request}"

Instructions:
1. Create schedule for ONE day (use day_of_week: 1)
2. ONLY include activities/tasks the user explicitly mentioned
3. DO NOT add sleep, meals, breaks unless user mentions them
4. Keep study sessions as continuous blocks (don't split)
5. Respect time constraints mentioned

Return ONLY valid JSON:
{
  "schedule": [
    {
      "topic": "Activity Name",
      "day_of_week": 1,
      "start_time": "06:00",
      "end_time": "08:30",
      "color": "#3b82f6"
    }
  ]
}

Colors: #3b82f6 (blue), #10b981 (green), #f59e0b (orange), #ef4444 (red), #8b5cf6 (purple)
Format: 24-hour time (HH:MM), day_of_week: 1"##;

const STUDY_TEMPERATURE: f32 = 0.7;
const VARIED_STUDY_TEMPERATURE: f32 = 1.0;
const WEEKLY_SCHEDULE_TEMPERATURE: f32 = 0.8;
const DAILY_SCHEDULE_TEMPERATURE: f32 = 0.7;

/// A rendered prompt ready to send
#[derive(Debug, Clone, PartialEq)]
pub struct ChatPrompt {
    pub system: Option<String>,
    pub user: String,
    pub temperature: f32,
}

/// `topic` must already be validated and sanitized.
pub fn study_prompt(topic: &str, request_id: Option<&str>) -> ChatPrompt {
    let request_id = request_id.filter(|id| !id.trim().is_empty());

    let mut user = format!("Create comprehensive study materials for the topic: \"{}\"", topic);
    if let Some(id) = request_id {
        user.push_str(&format!(" (Request ID: {} - generate unique variations)", id));
    }

    ChatPrompt {
        system: Some(STUDY_SYSTEM_PROMPT.to_string()),
        user,
        temperature: if request_id.is_some() {
            VARIED_STUDY_TEMPERATURE
        } else {
            STUDY_TEMPERATURE
        },
    }
}

pub fn schedule_prompt(prompt: &str, scope: ScheduleScope) -> ChatPrompt {
    match scope {
        ScheduleScope::Weekly => ChatPrompt {
            system: Some(WEEKLY_SCHEDULE_SYSTEM_PROMPT.to_string()),
            user: prompt.to_string(),
            temperature: WEEKLY_SCHEDULE_TEMPERATURE,
        },
        ScheduleScope::Daily => ChatPrompt {
            system: None,
            user: DAILY_SCHEDULE_TEMPLATE.replace("{request}", prompt.trim()),
            temperature: DAILY_SCHEDULE_TEMPERATURE,
        },
    }
}
