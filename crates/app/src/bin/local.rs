// Tableau - local project loader
//
// Usage: local <project-id> [state.json] [timeline-path]

use std::path::PathBuf;

use tracing::{error, info};

use tableau_common::{init_tracing, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing(config.log_format, &config.rust_log)?;

    let mut args = std::env::args().skip(1);
    let id = args
        .next()
        .ok_or_else(|| anyhow::anyhow!("usage: local <project-id> [state.json] [timeline-path]"))?;
    let state_path = args.next().map(PathBuf::from);
    let timeline_path = args.next();

    info!(mode = %config.validation_mode, "Starting Tableau local loader");

    let registry = tableau_app::build_registry(&config)?;

    let project = tableau_app::open_project(&registry, &id, state_path.as_deref())
        .await
        .map_err(|e| {
            error!(code = e.error_code(), "Failed to open project: {}", e);
            e
        })?;

    info!(
        project_id = %project.id(),
        created_at = %project.created_at(),
        "Project ready"
    );

    if let Some(path) = timeline_path {
        let timeline = project.get_timeline(&path)?;
        info!(
            path = timeline.path(),
            instance_id = timeline.instance_id(),
            has_template = timeline.template_state().is_some(),
            "Timeline resolved"
        );
    }

    Ok(())
}
