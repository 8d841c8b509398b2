use std::path::PathBuf;

use crate::adapters::scaffold_assets::render_scaffold;
use crate::app::AppContext;
use crate::app::config::DEFAULT_CONFIG_PATH;
use crate::domain::{AppError, FunctionKey};
use crate::ports::ConfigStore;

#[derive(Debug, Clone)]
pub struct InitOptions {
    pub function: String,
    /// Overwrite existing files.
    pub force: bool,
}

#[derive(Debug, Clone)]
pub struct InitOutcome {
    pub function: FunctionKey,
    pub written: Vec<PathBuf>,
}

/// Write the starter configuration. The scaffold's trigger file lands at the
/// context's configuration path; other scaffold files keep their own paths.
pub fn execute<S: ConfigStore>(
    ctx: &AppContext<S>,
    options: InitOptions,
) -> Result<InitOutcome, AppError> {
    let function = FunctionKey::new(&options.function)?;
    let files = render_scaffold(&function)?;

    let targets: Vec<(PathBuf, String)> = files
        .into_iter()
        .map(|file| {
            let target = if file.path == DEFAULT_CONFIG_PATH {
                ctx.config_path().to_path_buf()
            } else {
                PathBuf::from(&file.path)
            };
            (target, file.content)
        })
        .collect();

    if !options.force
        && let Some((existing, _)) = targets.iter().find(|(path, _)| ctx.store().file_exists(path))
    {
        return Err(AppError::ConfigExists(existing.clone()));
    }

    let mut written = Vec::new();
    for (path, content) in targets {
        ctx.store().write_artifact(&path, &content)?;
        tracing::info!(path = %path.display(), "wrote scaffold file");
        written.push(path);
    }

    Ok(InitOutcome { function, written })
}
