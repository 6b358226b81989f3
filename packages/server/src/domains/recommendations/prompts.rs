// Prompt templates for LLM-backed taste providers.
//
// Both prompts ask for the same JSON object so one parser serves every
// provider.

use super::models::PreferenceSet;

pub const SYSTEM_PROMPT: &str = "You are Vibora, a taste-aware recommendation assistant. \
You suggest music, films, food, places and fashion that fit a person's taste profile. \
Always respond with valid JSON only, no prose and no markdown.";

const OUTPUT_CONTRACT: &str = r#"Respond with a JSON object in exactly this shape:
{
  "recommendations": [
    {
      "title": "Example",
      "category": "music",
      "description": "Because you like XYZ",
      "confidence": 0.91
    }
  ]
}
Use one of these categories when it fits: music, movies, food, travel, fashion.
The confidence score is a number between 0.5 and 1.0."#;

/// `category: a, b, c` lines, one per category present.
pub fn format_preferences(preferences: &PreferenceSet) -> String {
    preferences
        .iter()
        .map(|(category, values)| format!("{}: {}", category, values.join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prompt for the post-onboarding welcome batch.
pub fn onboarding_prompt(preferences: &PreferenceSet) -> String {
    let profile = if preferences.is_empty() {
        "(the user skipped every question)".to_string()
    } else {
        format_preferences(preferences)
    };

    format!(
        "Based on the following user preferences, generate 5 personalized recommendations. \
Include title, category, description, and a confidence score.\n\n{}\n\n{}",
        profile, OUTPUT_CONTRACT
    )
}

/// Prompt for a chat turn, grounded on the user's message.
pub fn chat_prompt(message: &str, preferences: &PreferenceSet) -> String {
    let mut prompt = format!(
        "The user asked: \"{}\"\n\nSuggest up to 5 recommendations that answer the question.",
        message.trim()
    );

    if !preferences.is_empty() {
        prompt.push_str(" Tailor them to this taste profile:\n\n");
        prompt.push_str(&format_preferences(preferences));
    }

    prompt.push_str("\n\n");
    prompt.push_str(OUTPUT_CONTRACT);
    prompt
}
