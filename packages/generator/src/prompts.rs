// ABOUTME: AI prompts for planning-document generation
// ABOUTME: Shared system prompt plus one instruction prompt per document type

use blueprint_core::{DocumentType, Project};

const DEFAULT_INDUSTRY: &str = "general";
const DEFAULT_DESCRIPTION: &str = "No description provided";

/// Brand palette the model is asked to use in generated HTML
pub const PALETTE: [(&str, &str); 4] = [
    ("#e5e3d4", "cream/beige"),
    ("#9abf80", "mint green"),
    ("#6a669d", "lavender"),
    ("#1c325b", "navy blue"),
];

pub const SYSTEM_PROMPT: &str = "You are an expert product manager and technical architect with extensive experience in software development. Your task is to create detailed, well-structured product documentation in HTML format using the color palette of #e5e3d4 (cream/beige), #9abf80 (mint green), #6a669d (lavender), and #1c325b (navy blue) when possible. Add CSS classes to make the content visually appealing.";

fn palette_list() -> String {
    let colors: Vec<String> = PALETTE
        .iter()
        .map(|(hex, name)| format!("{} ({})", hex, name))
        .collect();
    match colors.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{}, and {}", rest.join(", "), last),
        Some((last, _)) => last.clone(),
        None => String::new(),
    }
}

/// Heading and numbered sections the model must cover for each document type
fn outline(document_type: DocumentType) -> (&'static str, &'static str, &'static [&'static str]) {
    match document_type {
        DocumentType::Roadmap => (
            "Generate a detailed product roadmap for a",
            "The roadmap should include:",
            &[
                "A high-level product vision",
                "Phased development timeline (MVP, v1, v2, future)",
                "Key milestones for each phase",
                "Features and capabilities for each phase",
                "Market and user value for each phase",
                "Success metrics for each phase",
            ],
        ),
        DocumentType::Mvp => (
            "Generate a detailed MVP blueprint for a",
            "The MVP blueprint should include:",
            &[
                "Core problem and solution definition",
                "Target user personas (with detailed descriptions)",
                "Essential features for the MVP (with clear justification)",
                "Features excluded from MVP (with rationale)",
                "User journey through the MVP",
                "Success criteria and KPIs",
                "Timeline estimation",
            ],
        ),
        DocumentType::Architecture => (
            "Generate a detailed technical architecture design for a",
            "The architecture design should include:",
            &[
                "High-level architecture overview (with recommended patterns)",
                "Frontend architecture (technologies, frameworks, state management)",
                "Backend architecture (API design, business logic, services)",
                "Data model and database recommendations",
                "Security considerations",
                "Scalability and performance considerations",
                "Third-party integrations",
                "Deployment and infrastructure recommendations",
            ],
        ),
        DocumentType::Plan => (
            "Generate a detailed project plan for developing a",
            "The project plan should include:",
            &[
                "Project scope and objectives",
                "Team composition and roles",
                "Detailed project phases (discovery, design, development, testing, deployment)",
                "Timeline with milestones",
                "Risk assessment and mitigation strategies",
                "Resource planning",
                "Quality assurance approach",
                "Communication and reporting plan",
            ],
        ),
    }
}

/// Build the user prompt for one document
pub fn document_prompt(project: &Project, document_type: DocumentType) -> String {
    let (opening, lead, sections) = outline(document_type);
    let industry = project
        .industry
        .as_deref()
        .filter(|i| !i.trim().is_empty())
        .unwrap_or(DEFAULT_INDUSTRY);
    let description = project
        .description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or(DEFAULT_DESCRIPTION);

    let numbered = sections
        .iter()
        .enumerate()
        .map(|(i, section)| format!("{}. {}", i + 1, section))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{opening} {project_type} in the {industry} industry.\n\
         The product name is \"{name}\" and it is described as: \"{description}\".\n\n\
         {lead}\n\
         {numbered}\n\n\
         Format the response as HTML that can be directly inserted into a web page. \
         Use h1, h2, h3 tags for titles, p tags for paragraphs, ul and li for lists, \
         and other appropriate HTML elements. Use the color palette: {palette} \
         throughout the document with CSS classes or inline styles.\n\
         Make it visually structured and professional.",
        opening = opening,
        project_type = project.project_type,
        industry = industry,
        name = project.name,
        description = description,
        lead = lead,
        numbered = numbered,
        palette = palette_list(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_core::ProjectNeeds;
    use chrono::Utc;

    fn project(industry: Option<&str>, description: Option<&str>) -> Project {
        let now = Utc::now();
        Project {
            id: 3,
            name: "Acme Tracker".into(),
            description: description.map(str::to_string),
            project_type: "saas".into(),
            industry: industry.map(str::to_string),
            status: "Planning".into(),
            needs: ProjectNeeds::default(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_prompt_defaults_for_missing_fields() {
        let prompt = document_prompt(&project(None, None), DocumentType::Roadmap);
        assert!(prompt.contains("for a saas in the general industry."));
        assert!(prompt.contains("described as: \"No description provided\""));
        assert!(prompt.contains("\"Acme Tracker\""));
    }

    #[test]
    fn test_prompt_section_counts() {
        let p = project(Some("finance"), Some("Budgets"));
        for (document_type, count) in [
            (DocumentType::Roadmap, 6),
            (DocumentType::Mvp, 7),
            (DocumentType::Architecture, 8),
            (DocumentType::Plan, 8),
        ] {
            let prompt = document_prompt(&p, document_type);
            assert!(prompt.contains(&format!("{}. ", count)));
            assert!(!prompt.contains(&format!("\n{}. ", count + 1)));
        }
    }

    #[test]
    fn test_prompt_mentions_palette() {
        let prompt = document_prompt(&project(Some("finance"), None), DocumentType::Plan);
        assert!(prompt.contains(
            "#e5e3d4 (cream/beige), #9abf80 (mint green), #6a669d (lavender), and #1c325b (navy blue)"
        ));
        assert!(prompt.starts_with("Generate a detailed project plan for developing a saas"));
        for (hex, _) in PALETTE {
            assert!(SYSTEM_PROMPT.contains(hex));
        }
    }
}
