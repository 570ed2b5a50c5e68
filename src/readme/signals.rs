//! Signal Aggregator
//!
//! Combines the key-value and heading parsers into the three README signals:
//! project type, deployment details (with liveness), and the header checklist.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use super::{heading, key_value};
use crate::constants::headings;
use crate::probe::{LinkProber, ProbeTransport, ProbedLink};

/// `Project Type` heading directly followed by a single-word list item
static PROJECT_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?im)^#{1,5}[ \t]*project type[ \t\r]*\n\s*[-*+][ \t]*(frontend|backend|fullstack)[ \t\r]*$",
    )
    .expect("project type pattern is valid")
});

/// Declared project type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProjectType {
    Frontend,
    Backend,
    Fullstack,
    Unknown,
}

impl ProjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Fullstack => "Fullstack",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deployment links found in the README, each probed for liveness
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeploymentDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frontend: Option<ProbedLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend: Option<ProbedLink>,
}

/// Presence of the conventional README sections plus project-type matches
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeaderChecklist {
    pub project_type_exists: bool,
    pub deployed_app_exists: bool,
    pub video_walkthrough_exists: bool,
    pub technology_stack_exists: bool,
    pub getting_started_exists: bool,
    pub features_exists: bool,
    pub is_frontend: Vec<heading::HeadingSegment>,
    pub is_backend: Vec<heading::HeadingSegment>,
    pub is_fullstack: Vec<heading::HeadingSegment>,
}

/// All three signals for one README
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadmeSignals {
    pub project_type: ProjectType,
    pub deployment_details: DeploymentDetails,
    pub heading_details: HeaderChecklist,
}

pub fn classify_project_type(readme: &str) -> ProjectType {
    let Some(declared) = PROJECT_TYPE.captures(readme).and_then(|caps| caps.get(1)) else {
        return ProjectType::Unknown;
    };

    match declared.as_str().to_lowercase().as_str() {
        "frontend" => ProjectType::Frontend,
        "backend" => ProjectType::Backend,
        "fullstack" => ProjectType::Fullstack,
        _ => ProjectType::Unknown,
    }
}

/// Probe the first `frontend` and `backend` links concurrently
pub async fn extract_deployment_details<T: ProbeTransport>(
    readme: &str,
    prober: &LinkProber<T>,
) -> DeploymentDetails {
    let store = key_value::parse(readme);
    debug!(entries = store.len(), "Parsed key-value lines");

    let (frontend, backend) = futures::join!(
        key_value::get_link_with_info(&store, "frontend", prober),
        key_value::get_link_with_info(&store, "backend", prober),
    );

    DeploymentDetails { frontend, backend }
}

pub fn build_header_checklist(readme: &str) -> HeaderChecklist {
    let store = heading::parse(readme);
    debug!(segments = store.len(), "Parsed heading segments");

    let present = |name: &str| heading::exists(&store, name).exists;
    let declared = |kind: ProjectType| -> Vec<heading::HeadingSegment> {
        heading::contains(&store, headings::PROJECT_TYPE, kind.as_str())
            .into_iter()
            .cloned()
            .collect()
    };

    HeaderChecklist {
        project_type_exists: present(headings::PROJECT_TYPE),
        deployed_app_exists: present(headings::DEPLOYED_APP),
        video_walkthrough_exists: present(headings::VIDEO_WALKTHROUGH),
        technology_stack_exists: present(headings::TECHNOLOGY_STACK),
        getting_started_exists: present(headings::GETTING_STARTED),
        features_exists: present(headings::FEATURES),
        is_frontend: declared(ProjectType::Frontend),
        is_backend: declared(ProjectType::Backend),
        is_fullstack: declared(ProjectType::Fullstack),
    }
}

pub async fn analyze<T: ProbeTransport>(readme: &str, prober: &LinkProber<T>) -> ReadmeSignals {
    ReadmeSignals {
        project_type: classify_project_type(readme),
        deployment_details: extract_deployment_details(readme, prober).await,
        heading_details: build_header_checklist(readme),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::{ProbeConfig, ProbeFailure, ResponseTime};
    use async_trait::async_trait;
    use proptest::prelude::*;
    use std::sync::Mutex;
    use std::time::Duration;

    const BACKEND_README: &str = "## Project Type\n- Backend\n\nBackend: https://api.example.com\n";

    /// Records requested URLs; hosts containing "down" answer 503
    #[derive(Default)]
    struct RecordingTransport {
        requested: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ProbeTransport for RecordingTransport {
        async fn get(&self, url: &str) -> std::result::Result<u16, ProbeFailure> {
            self.requested.lock().unwrap().push(url.to_string());
            if url.contains("down") { Ok(503) } else { Ok(200) }
        }
    }

    fn prober() -> LinkProber<RecordingTransport> {
        LinkProber::new(
            RecordingTransport::default(),
            ProbeConfig {
                min_delay: Duration::from_millis(1),
                max_delay: Duration::from_millis(2),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_classify_each_type() {
        assert_eq!(
            classify_project_type("## Project Type\n- Frontend"),
            ProjectType::Frontend
        );
        assert_eq!(
            classify_project_type("## project type\n\n* fullstack\n"),
            ProjectType::Fullstack
        );
        assert_eq!(classify_project_type(BACKEND_README), ProjectType::Backend);
    }

    #[test]
    fn test_classify_crlf() {
        assert_eq!(
            classify_project_type("## Project Type\r\n- Backend\r\n"),
            ProjectType::Backend
        );
    }

    #[test]
    fn test_classify_unknown_cases() {
        assert_eq!(classify_project_type(""), ProjectType::Unknown);
        assert_eq!(
            classify_project_type("## Project Type\n- Mobile"),
            ProjectType::Unknown
        );
        assert_eq!(
            classify_project_type("## Project Type\nSome prose\n- Backend"),
            ProjectType::Unknown
        );
        assert_eq!(
            classify_project_type("###### Project Type\n- Backend"),
            ProjectType::Unknown
        );
        assert_eq!(
            classify_project_type("## Project Type\n- Backend and more"),
            ProjectType::Unknown
        );
    }

    #[tokio::test]
    async fn test_backend_deployment_scenario() {
        let prober = prober();
        let details = extract_deployment_details(BACKEND_README, &prober).await;

        assert!(details.frontend.is_none());
        let backend = details.backend.expect("backend link");
        assert_eq!(backend.url, "https://api.example.com");
        assert!(backend.check.working);
        assert_eq!(backend.check.tries, 1);
        assert!(matches!(backend.check.response_time_ms, ResponseTime::Measured(_)));
    }

    #[tokio::test]
    async fn test_both_links_probed() {
        let readme = "Frontend URL: https://app.example.com\nBackend: https://down.example.com/api";
        let prober = prober();
        let details = extract_deployment_details(readme, &prober).await;

        assert!(details.frontend.as_ref().is_some_and(|f| f.check.working));
        let backend = details.backend.expect("backend link");
        assert!(!backend.check.working);
        assert_eq!(backend.check.tries, 4);

        let requested = prober_requests(&prober);
        assert_eq!(requested.iter().filter(|u| u.contains("app")).count(), 1);
        assert_eq!(requested.iter().filter(|u| u.contains("down")).count(), 4);
    }

    fn prober_requests(prober: &LinkProber<RecordingTransport>) -> Vec<String> {
        prober.transport().requested.lock().unwrap().clone()
    }

    #[tokio::test]
    async fn test_key_without_link_is_omitted() {
        let prober = prober();
        let details = extract_deployment_details("Frontend: coming soon", &prober).await;
        assert_eq!(details, DeploymentDetails::default());
        assert!(prober_requests(&prober).is_empty());
    }

    #[test]
    fn test_checklist_features_only() {
        let checklist = build_header_checklist("## Features\n- Search\n- Export");
        assert!(checklist.features_exists);
        assert!(!checklist.project_type_exists);
        assert!(!checklist.deployed_app_exists);
        assert!(!checklist.video_walkthrough_exists);
        assert!(!checklist.technology_stack_exists);
        assert!(!checklist.getting_started_exists);
        assert!(checklist.is_frontend.is_empty());
        assert!(checklist.is_backend.is_empty());
        assert!(checklist.is_fullstack.is_empty());
    }

    #[test]
    fn test_checklist_full_readme() {
        let readme = "# Shop\n## Project Type\n- Fullstack\n## Deployed App\nFrontend: https://shop.example.com\n## Video Walkthrough of the project\nlink\n## Technology Stack\nRust\n## Getting Started\ncargo run\n## Features\n- cart";
        let checklist = build_header_checklist(readme);

        assert!(checklist.project_type_exists);
        assert!(checklist.deployed_app_exists);
        assert!(checklist.video_walkthrough_exists);
        assert!(checklist.technology_stack_exists);
        assert!(checklist.getting_started_exists);
        assert!(checklist.features_exists);
        assert!(checklist.is_frontend.is_empty());
        assert!(checklist.is_backend.is_empty());
        assert_eq!(checklist.is_fullstack.len(), 1);
        assert_eq!(checklist.is_fullstack[0].text, "Project Type");
    }

    #[test]
    fn test_checklist_serialized_shape() {
        let value = serde_json::to_value(build_header_checklist("## Project Type\n- Backend")).unwrap();
        assert_eq!(value["project_type_exists"], true);
        assert_eq!(value["is_backend"][0]["text"], "Project Type");
        assert_eq!(value["is_backend"][0]["content"], "- Backend");
        assert_eq!(value["is_frontend"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_analyze_combines_signals() {
        let signals = analyze(BACKEND_README, &prober()).await;
        assert_eq!(signals.project_type, ProjectType::Backend);
        assert!(signals.deployment_details.backend.is_some());
        assert!(signals.heading_details.project_type_exists);
        assert_eq!(signals.heading_details.is_backend.len(), 1);
    }

    #[test]
    fn test_project_type_serializes_as_name() {
        assert_eq!(
            serde_json::to_value(ProjectType::Fullstack).unwrap(),
            serde_json::json!("Fullstack")
        );
    }

    proptest! {
        #[test]
        fn prop_classify_is_total(text in "\\PC{0,300}") {
            let _ = classify_project_type(&text);
            let first = build_header_checklist(&text);
            prop_assert_eq!(first, build_header_checklist(&text));
        }
    }
}
