//! Text rendering for inspection results

use console::style;

use super::Output;
use crate::constants::headings;
use crate::inspect::RepoReport;
use crate::probe::ProbedLink;
use crate::readme::{DeploymentDetails, HeaderChecklist};

/// Checklist flags paired with their section names, in display order
pub fn checklist_rows(checklist: &HeaderChecklist) -> [(&'static str, bool); 6] {
    [
        (headings::PROJECT_TYPE, checklist.project_type_exists),
        (headings::DEPLOYED_APP, checklist.deployed_app_exists),
        (headings::VIDEO_WALKTHROUGH, checklist.video_walkthrough_exists),
        (headings::TECHNOLOGY_STACK, checklist.technology_stack_exists),
        (headings::GETTING_STARTED, checklist.getting_started_exists),
        (headings::FEATURES, checklist.features_exists),
    ]
}

/// One-line summary of a probed link
pub fn render_link(link: &ProbedLink) -> String {
    let state = if link.check.working {
        style("up").green().to_string()
    } else {
        style("down").red().to_string()
    };
    let tries = if link.check.tries == 1 { "try" } else { "tries" };
    format!(
        "{} [{}, {}, {} {}]",
        link.url, state, link.check.response_time_ms, link.check.tries, tries
    )
}

pub fn print_deployment(out: &Output, details: &DeploymentDetails) {
    out.section("Deployment");
    if details.frontend.is_none() && details.backend.is_none() {
        out.info("No frontend/backend links found");
    }
    if let Some(link) = &details.frontend {
        out.field("frontend", render_link(link));
    }
    if let Some(link) = &details.backend {
        out.field("backend", render_link(link));
    }
}

pub fn print_checklist(out: &Output, checklist: &HeaderChecklist) {
    out.section("Sections");
    for (name, present) in checklist_rows(checklist) {
        out.check(name, present);
    }
}

pub fn render_report(out: &Output, report: &RepoReport) {
    out.header(&format!("{}/{}", report.owner, report.name));
    out.field("stars", report.stars);
    out.field("forks", report.forks);
    out.field("open issues", report.open_issues);
    out.field("language", report.language.as_deref().unwrap_or("-"));

    if !report.readme_exists {
        out.warning("No README found");
        return;
    }

    if let Some(project_type) = report.project_type {
        out.field("project type", style(project_type).bold());
    }
    if let Some(details) = &report.deployment_details {
        print_deployment(out, details);
    }
    if let Some(checklist) = &report.heading_details {
        print_checklist(out, checklist);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::{LinkCheckResult, ResponseTime};

    #[test]
    fn test_checklist_rows_order() {
        let checklist = HeaderChecklist {
            features_exists: true,
            ..Default::default()
        };
        let rows = checklist_rows(&checklist);
        assert_eq!(rows[0], ("Project Type", false));
        assert_eq!(rows[5], ("Features", true));
    }

    #[test]
    fn test_render_link() {
        let link = ProbedLink::new(
            "https://api.example.com",
            LinkCheckResult {
                working: false,
                response_time_ms: ResponseTime::Unavailable,
                tries: 4,
            },
        );
        let line = render_link(&link);
        assert!(line.starts_with("https://api.example.com ["));
        assert!(line.contains("unavailable, 4 tries]"));

        let link = ProbedLink::new(
            "https://app.example.com",
            LinkCheckResult {
                working: true,
                response_time_ms: ResponseTime::Measured(12),
                tries: 1,
            },
        );
        assert!(render_link(&link).contains("12ms, 1 try]"));
    }
}
