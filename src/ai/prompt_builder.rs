//! Prompt text sent to the completion service.

use super::categories::Category;

/// Build the instruction for a single icebreaker question in `category`.
///
/// The output depends only on `category`.
#[must_use]
pub fn build_prompt(category: Category) -> String {
    format!(
        "Generate a single fun, inclusive icebreaker question for a team meeting.

The question MUST be in the category of: {category}

Requirements:
- Should be appropriate for a professional workplace
- Easy for everyone to answer (no specialized knowledge needed)
- Encourages sharing without being too personal
- Takes about 30 seconds to answer
- Be creative and surprising, avoid generic or overused questions
- Do NOT ask about \"becoming an expert\" or \"learning a skill\"

Respond with ONLY the question, no explanation or preamble."
    )
}
