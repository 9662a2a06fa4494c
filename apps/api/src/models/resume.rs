//! Structured resume record. Instances are compile-time constants (see `context::data`),
//! so every field borrows `'static` data.

#[derive(Debug, Clone, Copy)]
pub struct ResumeRecord {
    pub name: &'static str,
    pub bio: &'static str,
    /// Opening line of the prompt context, written in first person.
    pub summary: &'static str,
    pub contact: Contact,
    pub skills: &'static [SkillGroup],
    pub experience: &'static [Experience],
    pub projects: &'static [Project],
    pub education: &'static [Education],
    pub interests: &'static [&'static str],
    pub achievements: &'static [&'static str],
    pub suggested_intros: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct Contact {
    pub email: &'static str,
    pub github: &'static str,
    pub portfolio: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct SkillGroup {
    pub label: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub date_range: &'static str,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    pub technologies: &'static [&'static str],
    pub highlights: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub details: &'static str,
}
