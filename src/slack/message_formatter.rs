//! Presentation of the generated question as a Slack message.

/// Meeting time referenced in the message framing.
pub const MEETING_TIME: &str = "12:30";

/// Wrap `question` in the announcement template, set off as a quote.
///
/// Uses Slack mrkdwn: `*bold*` for the header and `> ` for the quote.
#[must_use]
pub fn format_icebreaker_message(question: &str) -> String {
    format!(
        "🧊 *Icebreaker Time!*\n\nBefore our {MEETING_TIME} meeting, here's today's question:\n\n> {question}"
    )
}
