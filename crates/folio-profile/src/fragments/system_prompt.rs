//! The **system prompt** fragment: the portfolio profile rendered into one
//! instructional text block.
//!
//! # What it renders
//!
//! ```markdown
//! You are Ada's AI companion who knows everything about her. ...
//!
//! Here's everything you know about Ada:
//!
//! **Basic Info:**
//! - Name: Ada Lovelace
//! ...
//!
//! **Experience:**
//!
//! **Analytical Engines Ltd** (https://engines.test)
//!    - Programmer (1842 - 1843, London)
//!      * Wrote the first program
//!      * Tech: Punch cards
//!
//! **Research:**
//!
//! ...
//! ```
//!
//! Section order and headings are fixed. A section with no entries keeps its
//! heading. Projects and awards are filtered to featured entries.
//!
//! Rendering is a pure function of [`ProfileData`]: no clock, no I/O, so the
//! same profile always yields byte-identical output.

use std::fmt;

use folio_core::{generic::ConversationMessage, template::IntoPrompt};
use folio_prompt::builder::PromptBuilder;

use crate::data::{
    Award, Education, Employer, ProfileData, Project, Research, SkillCategory, plain_email, present,
};

/// The assembled system prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemPrompt(String);

impl SystemPrompt {
    pub fn assemble(profile: &ProfileData) -> Self {
        let identity = &profile.identity;
        let first = identity.first_name();

        let prompt = PromptBuilder::new()
            .add_paragraph(persona(profile))
            .add_paragraph(format!("Here's everything you know about {first}:"))
            .append(basic_info(profile))
            .add_line_bold("Personal Info:")
            .add_paragraph(profile.about.personal.as_deref().unwrap_or_default())
            .add_line_bold("About:")
            .add_paragraph(&profile.about.intro)
            .add_paragraph(&profile.about.expertise)
            .append(section("Experience:", profile.experience.iter().map(employer)))
            .append(section("Education:", profile.education.iter().map(education)))
            .append(section("Research:", profile.research.iter().map(research)))
            .append(section(
                "Featured Projects:",
                profile.featured_projects().map(project),
            ))
            .append(section(
                "Featured Awards & Certifications:",
                profile.featured_awards().map(award),
            ))
            .append(skills(&profile.skills))
            .add_line(closing(profile))
            .finalize();

        Self(prompt)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SystemPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl IntoPrompt for SystemPrompt {
    type Message = ConversationMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![ConversationMessage::system(self.0)]
    }
}

impl IntoPrompt for &SystemPrompt {
    type Message = ConversationMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![ConversationMessage::system(self.0.clone())]
    }
}

fn persona(profile: &ProfileData) -> String {
    let first = profile.identity.first_name();
    let (subject, object) = profile.identity.pronouns();

    format!(
        "You are {first}'s AI companion who knows everything about {object}. \
         Speak in a warm, friendly, and conversational tone as if you're a close companion \
         introducing {first} to someone new. Use \"{subject}\" or \"{first}\" when referring \
         to {object}, and feel free to share insights about {first}'s work, personality, and \
         achievements with enthusiasm. You're here to help visitors get to know your \
         companion better!"
    )
}

fn closing(profile: &ProfileData) -> String {
    let first = profile.identity.first_name();

    format!(
        "Keep responses concise and direct - only answer what's specifically asked. \
         Maintain a semi-casual, friendly tone without being overly playful or enthusiastic. \
         Be straightforward and factual about {first}'s work and achievements. Don't volunteer \
         extra information unless directly relevant to the question. If you don't know \
         something, simply say so without elaboration. Elaborate only when asked for more \
         details. Don't respond to any topic other than {first}."
    )
}

fn basic_info(profile: &ProfileData) -> PromptBuilder {
    let identity = &profile.identity;

    PromptBuilder::new()
        .add_line_bold("Basic Info:")
        .add_bullet_key_value("Name", &identity.name)
        .add_bullet_key_value("Age", identity.age)
        .add_bullet_key_value("Pronouns", &identity.pronoun)
        .add_bullet_key_value("Email", plain_email(&identity.email))
        .maybe(present(&identity.work_email), |b, email| {
            b.add_bullet_key_value("Work Email", plain_email(email))
        })
        .add_bullet_key_value("GitHub", &identity.github)
        .add_bullet_key_value("LinkedIn", &identity.linkedin)
        .maybe(present(&identity.location), |b, location| {
            b.add_bullet_key_value("Location", location)
        })
        .add_blank_line()
}

/// Heading, blank line, entries separated by blank lines, trailing blank line.
fn section(heading: &str, entries: impl Iterator<Item = PromptBuilder>) -> PromptBuilder {
    PromptBuilder::new()
        .add_line_bold(heading)
        .add_blank_line()
        .for_each(entries.enumerate(), |b, (idx, entry)| {
            let b = if idx > 0 { b.add_blank_line() } else { b };
            b.append(entry)
        })
        .add_blank_line()
}

fn employer(employer: &Employer) -> PromptBuilder {
    PromptBuilder::new()
        .add_line_bold_annotated(&employer.name, &employer.website)
        .for_each(employer.roles.iter().enumerate(), |b, (idx, role)| {
            let b = if idx > 0 { b.add_blank_line() } else { b };
            b.add_entry_bullet(format!(
                "{} ({}, {})",
                role.position, role.duration, role.location
            ))
            .for_each(&role.description, |b, line| b.add_nested_bullet(line))
            .add_nested_bullet(format!("Tech: {}", role.tech_stack.join(", ")))
        })
}

fn education(entry: &Education) -> PromptBuilder {
    let heading = PromptBuilder::new();
    let heading = if entry.location.is_empty() {
        heading.add_line_bold(&entry.institution)
    } else {
        heading.add_line_bold_annotated(&entry.institution, &entry.location)
    };

    heading
        .add_entry_bullet(&entry.degree)
        .add_entry_key_value("Duration", &entry.duration)
        .add_entry_key_value("Grade", &entry.grade)
        .add_entry_key_value("Achievements", entry.achievements.join(", "))
}

fn research(entry: &Research) -> PromptBuilder {
    PromptBuilder::new()
        .add_line_bold(&entry.title)
        .add_entry_key_value("Status", &entry.status)
        .add_entry_key_value("Collaborators", entry.collaborators.join(", "))
        .add_entry_bullet(&entry.description)
        .maybe(present(&entry.link), |b, link| {
            b.add_entry_key_value("Link", link)
        })
}

fn project(project: &Project) -> PromptBuilder {
    PromptBuilder::new()
        .add_line_bold(&project.title)
        .add_entry_bullet(&project.description)
        .add_entry_key_value("Tech", project.technologies.join(", "))
        .maybe(present(&project.github), |b, link| {
            b.add_entry_key_value("GitHub", link)
        })
        .maybe(present(&project.demo), |b, link| {
            b.add_entry_key_value("Demo", link)
        })
}

fn award(award: &Award) -> PromptBuilder {
    PromptBuilder::new()
        .add_line_bold(&award.title)
        .add_entry_key_value("Type", award.kind)
        .add_entry_key_value("Date", &award.date)
        .add_entry_bullet(&award.description)
        .maybe(present(&award.link), |b, link| {
            b.add_entry_key_value("Link", link)
        })
}

fn skills(categories: &[SkillCategory]) -> PromptBuilder {
    PromptBuilder::new()
        .add_line_bold("Skills:")
        .for_each(categories, |b, category| {
            b.add_bullet_key_value(&category.category, category.skills.join(", "))
        })
        .add_blank_line()
}
