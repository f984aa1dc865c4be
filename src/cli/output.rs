use crate::resource::RepositoryConfig;
use console::style;
use std::fmt::Display;

/// Centralized output formatting utilities for consistent CLI presentation
pub struct Output;

impl Output {
    /// Print a success message with checkmark
    pub fn success<T: Display>(message: T) {
        println!("{} {}", style("✓").green(), message);
    }

    /// Print a warning message
    pub fn warning<T: Display>(message: T) {
        println!("{} {}", style("⚠").yellow(), message);
    }

    /// Print a sub-item with arrow prefix
    pub fn sub_item<T: Display>(message: T) {
        println!("  {} {}", style("→").dim(), message);
    }

    /// Print a tip/suggestion
    pub fn tip<T: Display>(message: T) {
        println!("{} {}", style("TIP:").cyan(), style(message).dim());
    }

    /// Print the fields of a repository record
    pub fn repository(config: &RepositoryConfig) {
        let id = config.id.as_deref().unwrap_or("(not created)");
        Self::sub_item(format!("ID: {}", style(id).cyan()));
        Self::sub_item(format!("Name: {}", config.name));
        Self::sub_item(format!("Slug: {}", or_unset(config.effective_slug())));
        Self::sub_item(format!("Project: {}", config.project_key));
        Self::sub_item(format!("SCM: {}", config.scm_id));
        Self::sub_item(format!("Public: {}", config.public));
        Self::sub_item(format!("Forkable: {}", config.forkable));
        Self::sub_item(format!("Description: {}", or_unset(&config.description)));
        Self::sub_item(format!("Clone (https): {}", or_unset(&config.clone_https)));
        Self::sub_item(format!("Clone (ssh): {}", or_unset(&config.clone_ssh)));
    }
}

fn or_unset(value: &str) -> String {
    if value.is_empty() {
        style("(not set)").dim().to_string()
    } else {
        value.to_string()
    }
}
