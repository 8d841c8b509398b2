use include_dir::{Dir, DirEntry, include_dir};
use minijinja::{AutoEscape, Environment, UndefinedBehavior, context};

use crate::domain::{AppError, FunctionKey};
use crate::ports::ScaffoldFile;

static SCAFFOLD_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/scaffold");

const TEMPLATE_SUFFIX: &str = ".j2";

/// Render the starter configuration files for `function_key`.
pub fn render_scaffold(function_key: &FunctionKey) -> Result<Vec<ScaffoldFile>, AppError> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.set_keep_trailing_newline(true);

    let context = context! {
        function_key => function_key.as_str(),
        deployable_name => function_key.deployable_name(),
    };

    let mut files = Vec::new();
    collect_templates(&SCAFFOLD_DIR, &env, &context, &mut files)?;
    files.sort_by(|a, b| a.path.cmp(&b.path));

    if files.is_empty() {
        return Err(AppError::config_error("Scaffold assets are empty"));
    }
    Ok(files)
}

fn collect_templates(
    dir: &Dir,
    env: &Environment,
    context: &minijinja::Value,
    files: &mut Vec<ScaffoldFile>,
) -> Result<(), AppError> {
    for entry in dir.entries() {
        match entry {
            DirEntry::File(file) => {
                let path = file.path().to_string_lossy().to_string();
                let source = file.contents_utf8().ok_or_else(|| {
                    AppError::config_error(format!("Scaffold file is not UTF-8: {path}"))
                })?;
                let (path, content) = match path.strip_suffix(TEMPLATE_SUFFIX) {
                    Some(stripped) => (stripped.to_string(), env.render_str(source, context)?),
                    None => (path.clone(), source.to_string()),
                };
                files.push(ScaffoldFile { path, content });
            }
            DirEntry::Dir(subdir) => collect_templates(subdir, env, context, files)?,
        }
    }
    Ok(())
}
