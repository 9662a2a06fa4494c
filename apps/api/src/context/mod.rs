//! Resume context — renders the static resume record into the text block injected
//! into every provider prompt.
//!
//! The output is deterministic: the same record always renders the same string.

pub mod data;

use std::fmt::Write;

use crate::models::resume::ResumeRecord;

/// Renders a resume record as plain prompt-context text.
///
/// Sections, in order: summary, skills, experience, projects, education,
/// interests, achievements, contact, suggested intros (omitted when empty).
pub fn format_resume_context(record: &ResumeRecord) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}", record.summary);
    out.push_str(
        "\nYou should respond confidently and specifically using the information below. \
         Avoid generic replies like \"Feel free to ask.\"\n",
    );

    out.push_str("\nSKILLS:\n");
    for group in record.skills {
        let _ = writeln!(out, "- {}: {}", group.label, group.items.join(", "));
    }

    out.push_str("\nPROFESSIONAL EXPERIENCE:\n");
    for exp in record.experience {
        let _ = writeln!(
            out,
            "\n{} at {} ({})",
            exp.title, exp.company, exp.date_range
        );
        let _ = writeln!(out, "Description: {}", exp.description);
        out.push_str("Key Achievements:\n");
        for highlight in exp.highlights {
            let _ = writeln!(out, "- {highlight}");
        }
        if !exp.technologies.is_empty() {
            let _ = writeln!(out, "Technologies: {}", exp.technologies.join(", "));
        }
    }

    out.push_str("\nPROJECTS:\n");
    for proj in record.projects {
        let _ = writeln!(out, "\n{}: {}", proj.name, proj.description);
        let _ = writeln!(out, "Technologies: {}", proj.technologies.join(", "));
        if !proj.highlights.is_empty() {
            let _ = writeln!(out, "Highlights: {}", proj.highlights.join("; "));
        }
        let _ = writeln!(out, "Link: {}", proj.link);
    }

    out.push_str("\nEDUCATION:\n");
    for edu in record.education {
        let _ = writeln!(out, "\n{} at {}", edu.degree, edu.institution);
        let _ = writeln!(out, "Details: {}", edu.details);
    }

    if !record.interests.is_empty() {
        let _ = writeln!(out, "\nINTERESTS: {}", record.interests.join(", "));
    }

    out.push_str("\nACHIEVEMENTS:\n");
    for achievement in record.achievements {
        let _ = writeln!(out, "- {achievement}");
    }

    let _ = writeln!(out, "\nCONTACT: {}", record.contact.email);
    if !record.contact.github.is_empty() {
        let _ = writeln!(out, "GitHub: {}", record.contact.github);
    }
    if !record.contact.portfolio.is_empty() {
        let _ = writeln!(out, "Portfolio: {}", record.contact.portfolio);
    }

    if !record.suggested_intros.is_empty() {
        out.push_str("\nSUGGESTED INTRO RESPONSES:\n");
        for intro in record.suggested_intros {
            let _ = writeln!(out, "- \"{intro}\"");
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::data::RESUME;
    use super::*;
    use crate::models::resume::{Contact, ResumeRecord};

    fn minimal_record() -> ResumeRecord {
        ResumeRecord {
            name: "Test Person",
            bio: "",
            summary: "I am Test Person.",
            contact: Contact {
                email: "test@example.com",
                github: "",
                portfolio: "",
            },
            skills: &[],
            experience: &[],
            projects: &[],
            education: &[],
            interests: &[],
            achievements: &[],
            suggested_intros: &[],
        }
    }

    #[test]
    fn test_context_is_deterministic() {
        assert_eq!(format_resume_context(&RESUME), format_resume_context(&RESUME));
    }

    #[test]
    fn test_context_sections_in_order() {
        let ctx = format_resume_context(&RESUME);
        let order = [
            "SKILLS:",
            "PROFESSIONAL EXPERIENCE:",
            "PROJECTS:",
            "EDUCATION:",
            "ACHIEVEMENTS:",
            "CONTACT:",
            "SUGGESTED INTRO RESPONSES:",
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|h| ctx.find(h).unwrap_or_else(|| panic!("missing section {h}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_context_includes_experience_details() {
        let ctx = format_resume_context(&RESUME);
        assert!(ctx.contains("Cybersecurity Research Intern at IIT Ropar (June 2025 - July 2025)"));
        assert!(ctx.contains("- Researched cybersecurity aspects: DoS, DDoS, Spoofing"));
    }

    #[test]
    fn test_context_includes_project_tech_and_link() {
        let ctx = format_resume_context(&RESUME);
        assert!(ctx.contains("Technologies: React, REST API, Resend (Email)"));
        assert!(ctx.contains("Link: https://www.tarangclub.online"));
    }

    #[test]
    fn test_context_skills_joined_per_group() {
        let ctx = format_resume_context(&RESUME);
        assert!(ctx.contains("- Databases: MongoDB, SQL\n"));
    }

    #[test]
    fn test_context_contact_email() {
        let ctx = format_resume_context(&RESUME);
        assert!(ctx.contains("CONTACT: satyamgoswami2705@gmail.com"));
    }

    #[test]
    fn test_optional_sections_omitted_when_empty() {
        let ctx = format_resume_context(&minimal_record());
        assert!(ctx.starts_with("I am Test Person.\n"));
        assert!(!ctx.contains("SUGGESTED INTRO RESPONSES:"));
        assert!(!ctx.contains("INTERESTS:"));
        assert!(!ctx.contains("GitHub:"));
        assert!(ctx.contains("CONTACT: test@example.com"));
    }
}
