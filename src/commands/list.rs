//! List command implementation

use console::Style;

use crate::catalog;
use crate::error::Result;

/// Run list command
pub fn run() -> Result<()> {
    println!("Known packages ({}):", catalog::all().len());
    println!();
    for descriptor in catalog::all() {
        println!(
            "  {} {}",
            Style::new().bold().cyan().apply_to(format!("{:<13}", descriptor.key)),
            descriptor.display_name
        );
        println!("    Store ID:    {}", descriptor.install_id);
        println!("    Package:     {}", descriptor.package_name);
        println!("    Executables: {}", descriptor.expected_executables.join(", "));
    }
    Ok(())
}
