// Prompt fragments shared by every provider.
// The system prompt is built once at startup and reused for every call.

use crate::models::resume::ResumeRecord;

/// Behavioural guidance appended after the identity line.
pub const PERSONA_GUIDANCE: &str = "\
    Answer questions about their skills, experience, and projects based on the context provided. \
    Be professional, concise, and helpful. If you don't have information, say so honestly.";

/// Closing reminder placed after the resume context.
pub const CLOSING_INSTRUCTION: &str = "\
    Remember to be friendly and encourage people to visit the portfolio or contact directly \
    for more detailed discussions.";

/// Concatenates the persona block with the formatted resume context.
pub fn build_system_prompt(record: &ResumeRecord, resume_context: &str) -> String {
    format!(
        "You are an intelligent AI assistant representing {name}, {bio}.\n\
         You have access to {name}'s resume and project information. {guidance}\n\n\
         RESUME CONTEXT:\n{resume_context}\n\n{closing}",
        name = record.name,
        bio = record.bio,
        guidance = PERSONA_GUIDANCE,
        closing = CLOSING_INSTRUCTION,
    )
}
