//! List command implementation.

use colored::Colorize;

use crate::domain::AppError;

pub fn run_list() -> Result<(), AppError> {
    let components = crate::app::api::list()?;

    println!("{}", "Available components:".bold());
    println!();

    if components.is_empty() {
        println!("No components available.");
        return Ok(());
    }

    let last = components.len() - 1;
    for (i, component) in components.iter().enumerate() {
        let (branch, indent) = if i == last { ("└─", "   ") } else { ("├─", "│  ") };
        println!("{} {}", branch, component.name.cyan().bold());
        println!("{} {}", indent, component.description);
        if !component.dependencies.is_empty() {
            println!(
                "{} {}",
                indent,
                format!("Dependencies: {}", component.dependencies.join(", ")).dimmed()
            );
        }
        if i != last {
            println!("│");
        }
    }

    println!();
    println!("Usage: virtual-ui add <component>");
    println!("Example: virtual-ui add {}", components[0].name);
    Ok(())
}
