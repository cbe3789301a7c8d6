//! Plain-text rendering of a resume, as pasted into ATS text boxes.

use crate::models::resume::{ResumeRecord, SkillSet};

pub fn resume_to_plain_text(record: &ResumeRecord) -> String {
    let mut lines: Vec<String> = Vec::new();

    if !record.name.is_empty() {
        lines.push(record.name.clone());
        lines.push(String::new());
    }

    let contact = [&record.email, &record.phone, &record.location]
        .into_iter()
        .filter(|s| !s.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" | ");
    if !contact.is_empty() {
        lines.push(contact);
        lines.push(String::new());
    }

    if !record.summary.is_empty() {
        lines.push("SUMMARY".to_string());
        lines.push(record.summary.clone());
        lines.push(String::new());
    }

    if !record.education.is_empty() {
        lines.push("EDUCATION".to_string());
        for edu in &record.education {
            lines.push(format!(
                "{} in {} — {} ({} – {})",
                edu.degree, edu.field, edu.institution, edu.start_date, edu.end_date
            ));
        }
        lines.push(String::new());
    }

    if !record.experience.is_empty() {
        lines.push("EXPERIENCE".to_string());
        for exp in &record.experience {
            lines.push(format!(
                "{} — {} ({} – {})",
                exp.role, exp.company, exp.start_date, exp.end_date
            ));
            if !exp.description.is_empty() {
                lines.push(format!("  {}", exp.description));
            }
        }
        lines.push(String::new());
    }

    if !record.projects.is_empty() {
        lines.push("PROJECTS".to_string());
        for project in &record.projects {
            lines.push(project.name.clone());
            let tech = if project.tech_stack_tags.is_empty() {
                project.tech_stack.clone()
            } else {
                project.tech_stack_tags.join(", ")
            };
            if !tech.is_empty() {
                lines.push(format!("  Tech: {tech}"));
            }
            if !project.description.is_empty() {
                lines.push(format!("  {}", project.description));
            }
            if !project.link.is_empty() {
                lines.push(format!("  {}", project.link));
            }
            if !project.github_url.is_empty() && project.github_url != project.link {
                lines.push(format!("  {}", project.github_url));
            }
        }
        lines.push(String::new());
    }

    match record.skill_set() {
        SkillSet::Categorized(categories) => {
            lines.push("SKILLS".to_string());
            for (heading, items) in [
                ("Technical", &categories.technical),
                ("Soft Skills", &categories.soft),
                ("Tools", &categories.tools),
            ] {
                if !items.is_empty() {
                    lines.push(format!("{heading}: {}", items.join(", ")));
                }
            }
            lines.push(String::new());
        }
        SkillSet::Flat(raw) if !raw.is_empty() => {
            lines.push("SKILLS".to_string());
            lines.push(raw.to_string());
            lines.push(String::new());
        }
        SkillSet::Flat(_) => {}
    }

    let links: Vec<String> = [&record.github, &record.linkedin]
        .into_iter()
        .filter(|s| !s.is_empty())
        .cloned()
        .collect();
    if !links.is_empty() {
        lines.push("LINKS".to_string());
        lines.extend(links);
        lines.push(String::new());
    }

    lines.join("\n").trim().to_string()
}
