//! Fallback responder — keyword-matched canned answers used when no provider answers.
//!
//! Categories are checked in a fixed order and the first match wins:
//! skills → experience → projects → contact → greeting → default.

/// How a category's keywords are compared against the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchMode {
    /// Keyword appears anywhere in the lower-cased message ("skill" matches "skills").
    Substring,
    /// Keyword equals a whole word ("hi" does not match "this").
    Word,
}

struct Category {
    keywords: &'static [&'static str],
    mode: MatchMode,
    response: &'static str,
}

const CATEGORIES: &[Category] = &[
    Category {
        keywords: &["skill", "technology", "tech", "know"],
        mode: MatchMode::Substring,
        response: SKILLS_RESPONSE,
    },
    Category {
        keywords: &["experience", "work", "job", "company"],
        mode: MatchMode::Substring,
        response: EXPERIENCE_RESPONSE,
    },
    Category {
        keywords: &["project", "build", "create", "portfolio"],
        mode: MatchMode::Substring,
        response: PROJECTS_RESPONSE,
    },
    Category {
        keywords: &["contact", "email", "reach", "connect"],
        mode: MatchMode::Substring,
        response: CONTACT_RESPONSE,
    },
    Category {
        keywords: &["hi", "hello", "hey", "greetings"],
        mode: MatchMode::Word,
        response: GREETING_RESPONSE,
    },
];

pub const SKILLS_RESPONSE: &str = "I have expertise in React, Node.js, MongoDB, Python, and modern \
    web development. I'm also experienced in cybersecurity and machine learning. Ask me about any \
    specific technology!";

pub const EXPERIENCE_RESPONSE: &str = "I've worked as a Full Stack Developer at Snack Delivery, as a \
    Cybersecurity Research Intern at IIT Ropar, and as a Freelance Developer for Tarang. I'm \
    currently working on a Skill-Based Dating App. Would you like details about any of these?";

pub const PROJECTS_RESPONSE: &str = "My main projects include Tarang (event management platform) and \
    Snack Delivery (food ordering platform). Both showcase my full-stack development skills. Which \
    one interests you?";

pub const CONTACT_RESPONSE: &str = "You can contact me at satyamgoswami2705@gmail.com. I'm always open \
    to discussing interesting projects and opportunities!";

pub const GREETING_RESPONSE: &str = "Hello! I'm Satyam, a Full Stack Developer and Cybersecurity \
    Enthusiast. Feel free to ask me anything about my skills, experience, or projects!";

pub const DEFAULT_RESPONSE: &str = "That's an interesting question! Feel free to ask me about my \
    skills, experience, projects, or how to contact me. I'm here to help!";

/// Every string the fallback responder can return.
#[cfg(test)]
pub const ALL_RESPONSES: &[&str] = &[
    SKILLS_RESPONSE,
    EXPERIENCE_RESPONSE,
    PROJECTS_RESPONSE,
    CONTACT_RESPONSE,
    GREETING_RESPONSE,
    DEFAULT_RESPONSE,
];

impl Category {
    fn matches(&self, lowered: &str) -> bool {
        match self.mode {
            MatchMode::Substring => self.keywords.iter().any(|k| lowered.contains(k)),
            MatchMode::Word => lowered
                .split(|c: char| !c.is_alphanumeric())
                .any(|word| self.keywords.contains(&word)),
        }
    }
}

/// Maps a message to a canned answer. Total: always returns a non-empty string.
pub fn resolve_fallback(message: &str) -> &'static str {
    let lowered = message.to_lowercase();
    CATEGORIES
        .iter()
        .find(|category| category.matches(&lowered))
        .map(|category| category.response)
        .unwrap_or(DEFAULT_RESPONSE)
}
