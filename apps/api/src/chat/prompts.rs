// Canned greeting handling. Bare greetings never reach a provider.

/// Normalized messages that trigger the fixed self-introduction.
pub const GREETING_TOKENS: &[&str] = &["hi", "hello", "hey", "hola", "hloo"];

pub const SELF_INTRODUCTION: &str = "Hi! I'm Satyam Goswami, an undergrad at NIT Jalandhar, a \
    full-stack developer and Ex-AI/ML researcher at IIT Ropar. I build production web apps with \
    React, Node.js and MongoDB (Tarang and Snack Delivery are live), and I've worked on AI-based \
    intrusion detection for UAV networks. Ask me about my projects, internships, or technical skills!";

/// True iff the trimmed, lower-cased message is exactly a greeting token.
pub fn is_greeting(message: &str) -> bool {
    let normalized = message.trim().to_lowercase();
    GREETING_TOKENS.contains(&normalized.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_tokens_case_insensitive_and_trimmed() {
        for token in ["hi", "  HELLO ", "Hey", "hola\n", "HLOO"] {
            assert!(is_greeting(token), "{token:?} should be a greeting");
        }
    }

    #[test]
    fn test_greeting_requires_exact_match() {
        assert!(!is_greeting("hi there"));
        assert!(!is_greeting("hello?"));
        assert!(!is_greeting(""));
    }
}
