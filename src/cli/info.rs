//! Info command implementations (list)

use std::process::ExitCode;

use crate::character::{self, palettes, Source};

use super::EXIT_SUCCESS;

/// Execute the list command
pub fn run_list(source: Source) -> ExitCode {
    println!("Source: {}", source);
    println!();

    println!("Variants:");
    for variant in character::variants(source) {
        if variant.is_master() {
            println!("  {} ({})", variant.name(), variant.palette().name());
        } else {
            println!("  {} (derived from {})", variant.name(), variant.palette().name());
        }
    }
    println!();

    println!("Animations:");
    for animation in character::animations(source) {
        println!("  {:<8} {} frame(s)", animation.name, animation.frame_count());
    }
    println!();

    println!("Built-in palettes:");
    for name in palettes::list_builtins() {
        let size = palettes::get_builtin(name).map(|p| p.len()).unwrap_or(0);
        println!("  {:<8} {} colors", name, size);
    }
    ExitCode::from(EXIT_SUCCESS)
}
