use include_dir::{Dir, include_dir};
use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::AppError;

static TEMPLATES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

const UTILS_TEMPLATE: &str = "utils.j2";
const TAILWIND_CONFIG_TEMPLATE: &str = "tailwind.config.js.j2";

/// Content globs written into a freshly generated tailwind config.
pub const TAILWIND_CONTENT_GLOBS: [&str; 4] = [
    "./pages/**/*.{js,ts,jsx,tsx,mdx}",
    "./components/**/*.{js,ts,jsx,tsx,mdx}",
    "./app/**/*.{js,ts,jsx,tsx,mdx}",
    "./src/**/*.{js,ts,jsx,tsx,mdx}",
];

/// Render the `cn` helper module, typed when `typescript` is set.
pub fn render_utils(typescript: bool) -> Result<String, AppError> {
    render(UTILS_TEMPLATE, context! { typescript => typescript })
}

pub fn render_tailwind_config() -> Result<String, AppError> {
    render(TAILWIND_CONFIG_TEMPLATE, context! { content => TAILWIND_CONTENT_GLOBS })
}

fn render(name: &str, ctx: minijinja::Value) -> Result<String, AppError> {
    let source = TEMPLATES_DIR
        .get_file(name)
        .and_then(|file| file.contents_utf8())
        .ok_or_else(|| AppError::Template(format!("Embedded template '{}' is missing", name)))?;

    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_keep_trailing_newline(true);
    env.add_template(name, source)
        .map_err(|e| AppError::Template(format!("Failed to load template '{}': {}", name, e)))?;

    env.get_template(name)
        .map_err(|e| AppError::Template(format!("Failed to access template '{}': {}", name, e)))?
        .render(ctx)
        .map_err(|e| AppError::Template(format!("Failed to render template '{}': {}", name, e)))
}
