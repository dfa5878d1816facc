//! Pattern 3: Abstract Factory
//! Rendering a platform-correct widget family picked from configuration.
//!
//! Run with: cargo run --bin pattern_03_abstract_factory

use colored::Colorize;
use design_patterns::abstract_factory::{factory_for, OsType};

const GUI_CONFIG: &str = r#"
[gui]
os = "mac"
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The platform choice lives in a config file, not in code.
    let config_path = std::env::temp_dir().join("gui-demo.toml");
    std::fs::write(&config_path, GUI_CONFIG)?;

    let os = OsType::from_config_file(&config_path)?;
    println!(
        "configured platform (from {}): {}",
        config_path.display(),
        format!("{os:?}").cyan()
    );

    println!("\n{}", "=== Configured family ===".bold());
    let factory = factory_for(os);
    let mut button = factory.create_button();
    let checkbox = factory.create_checkbox();

    println!("{}", button.render().green());
    println!("{}", checkbox.render().green());

    button.set_active(true);
    println!("button active: {}", button.is_active());

    println!("\n{}", "=== Other family, same call sites ===".bold());
    let other = factory_for(OsType::Windows);
    println!("{}", other.create_button().render().green());
    println!("{}", other.create_checkbox().render().green());

    Ok(())
}
