use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub name: String,
    pub description: String,
    /// Free-text stack from older records; `tech_stack_tags` wins when non-empty.
    pub tech_stack: String,
    pub tech_stack_tags: Vec<String>,
    pub link: String,
    pub github_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillCategories {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub tools: Vec<String>,
}

impl SkillCategories {
    pub fn is_empty(&self) -> bool {
        self.technical.is_empty() && self.soft.is_empty() && self.tools.is_empty()
    }

    pub fn len(&self) -> usize {
        self.technical.len() + self.soft.len() + self.tools.len()
    }
}

/// The skill schema a record actually carries.
///
/// Records started out with a single comma-separated string and later grew
/// categorized buckets. Both still arrive on the wire, so callers match on
/// this view instead of the raw fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SkillSet<'a> {
    Flat(&'a str),
    Categorized(&'a SkillCategories),
}

impl SkillSet<'_> {
    pub fn count(&self) -> usize {
        match self {
            SkillSet::Categorized(categories) => categories.len(),
            SkillSet::Flat(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .count(),
        }
    }
}

/// Resume data as captured by the builder form.
/// Every field defaults to empty so partially filled drafts deserialize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub skills: String,
    pub skill_categories: Option<SkillCategories>,
    pub github: String,
    pub linkedin: String,
}

impl ResumeRecord {
    /// Categorized skills take precedence as soon as any bucket has an entry.
    pub fn skill_set(&self) -> SkillSet<'_> {
        match &self.skill_categories {
            Some(categories) if !categories.is_empty() => SkillSet::Categorized(categories),
            _ => SkillSet::Flat(&self.skills),
        }
    }

    pub fn skill_count(&self) -> usize {
        self.skill_set().count()
    }

    /// Built-in demonstration resume behind the form's "load sample" action.
    pub fn sample() -> Self {
        ResumeRecord {
            name: "Alex Johnson".to_string(),
            email: "alex.johnson@email.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            location: "San Francisco, CA".to_string(),
            summary: "Full-stack software engineer with 4+ years of experience building scalable \
                      web applications. Passionate about clean architecture, developer tooling, \
                      and shipping products that users love."
                .to_string(),
            education: vec![Education {
                institution: "University of California, Berkeley".to_string(),
                degree: "B.S.".to_string(),
                field: "Computer Science".to_string(),
                start_date: "2016".to_string(),
                end_date: "2020".to_string(),
            }],
            experience: vec![
                Experience {
                    company: "TechCorp Inc.".to_string(),
                    role: "Senior Software Engineer".to_string(),
                    start_date: "2022".to_string(),
                    end_date: "Present".to_string(),
                    description: "Led development of a microservices platform serving 2M+ users. \
                                  Reduced API latency by 40% through caching and query optimization."
                        .to_string(),
                },
                Experience {
                    company: "StartupXYZ".to_string(),
                    role: "Software Engineer".to_string(),
                    start_date: "2020".to_string(),
                    end_date: "2022".to_string(),
                    description: "Built the core product from 0 to 1 using React, Node.js, and \
                                  PostgreSQL. Shipped 15+ features across 6 sprints."
                        .to_string(),
                },
            ],
            projects: vec![Project {
                name: "DevDash".to_string(),
                description: "Open-source developer dashboard aggregating GitHub, Jira, and \
                              Slack metrics into a single view."
                    .to_string(),
                tech_stack: "React, TypeScript, GraphQL".to_string(),
                tech_stack_tags: vec![
                    "React".to_string(),
                    "TypeScript".to_string(),
                    "GraphQL".to_string(),
                ],
                link: "https://github.com/alexj/devdash".to_string(),
                github_url: "https://github.com/alexj/devdash".to_string(),
            }],
            skills: "TypeScript, React, Node.js, PostgreSQL, AWS, Docker, GraphQL, Python, Git, CI/CD"
                .to_string(),
            skill_categories: Some(SkillCategories {
                technical: ["TypeScript", "React", "Node.js", "PostgreSQL", "GraphQL"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                soft: vec!["Team Leadership".to_string(), "Problem Solving".to_string()],
                tools: vec!["Git".to_string(), "Docker".to_string(), "AWS".to_string()],
            }),
            github: "https://github.com/alexjohnson".to_string(),
            linkedin: "https://linkedin.com/in/alexjohnson".to_string(),
        }
    }
}
