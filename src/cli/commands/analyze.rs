//! Analyze Command
//!
//! Extract README signals from a local file, without the hosting provider.
//! Deployment links are probed unless `--no-probe` is given.
//!
//! Usage:
//!   repolens analyze README.md [--no-probe] [-f json]

use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::cli::ui::{Output, print_checklist, print_deployment};
use crate::cli::{CommandContext, runtime};
use crate::probe::{LinkProber, ProbeConfig, ProbeTransport};
use crate::readme::{
    self, DeploymentDetails, HeaderChecklist, KeyValueStore, ProjectType, key_value,
};
use crate::timeout::with_timeout_map;
use crate::types::Result;

/// Deployment links as written, before probing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeploymentLinks {
    pub frontend: Option<String>,
    pub backend: Option<String>,
}

/// Signals extracted from a local README
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalAnalysis {
    pub project_type: ProjectType,
    pub key_values: KeyValueStore,
    pub links: DeploymentLinks,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_details: Option<DeploymentDetails>,
    pub heading_details: HeaderChecklist,
}

impl LocalAnalysis {
    /// Parse only; no network access
    pub fn offline(text: &str) -> Self {
        let key_values = key_value::parse(text);
        let links = DeploymentLinks {
            frontend: key_value::get_link(&key_values, "frontend"),
            backend: key_value::get_link(&key_values, "backend"),
        };

        Self {
            project_type: readme::classify_project_type(text),
            key_values,
            links,
            deployment_details: None,
            heading_details: readme::build_header_checklist(text),
        }
    }

    /// Parse and probe the deployment links
    pub async fn probed<T: ProbeTransport>(text: &str, prober: &LinkProber<T>) -> Self {
        let mut analysis = Self::offline(text);
        analysis.deployment_details = Some(readme::extract_deployment_details(text, prober).await);
        analysis
    }
}

pub fn run(ctx: &CommandContext, path: &Path, no_probe: bool, format: &str) -> Result<()> {
    let text = fs::read_to_string(path)?;

    let analysis = if no_probe {
        LocalAnalysis::offline(&text)
    } else {
        let config = &ctx.config;
        let prober = LinkProber::with_reqwest(
            ProbeConfig::from_settings(&config.probe)?,
            config.probe.attempt_timeout(),
            &config.github.user_agent,
        )?;
        runtime()?.block_on(with_timeout_map(
            config.request.timeout(),
            LocalAnalysis::probed(&text, &prober),
            "README analysis",
        ))?
    };

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print_analysis(&Output::new(), path, &analysis);
    }
    Ok(())
}

fn print_analysis(out: &Output, path: &Path, analysis: &LocalAnalysis) {
    out.header(&path.display().to_string());
    out.field("project type", analysis.project_type);
    out.field("key-value lines", analysis.key_values.len());

    match &analysis.deployment_details {
        Some(details) => print_deployment(out, details),
        None => {
            out.section("Deployment links");
            let links = [
                ("frontend", &analysis.links.frontend),
                ("backend", &analysis.links.backend),
            ];
            for (name, link) in links {
                out.field(name, link.as_deref().unwrap_or("-"));
            }
        }
    }

    print_checklist(out, &analysis.heading_details);
}
