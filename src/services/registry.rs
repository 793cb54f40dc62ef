//! Category registry: the effective category list is the fixed built-in
//! set merged with the user's custom set, names unique case-sensitively
//! across both.

use crate::models::Category;

/// Built-in categories: always present, never deletable.
pub const BUILTIN_CATEGORIES: [&str; 4] = ["Food", "Travel", "Study", "Fun"];

pub fn is_builtin(name: &str) -> bool {
    BUILTIN_CATEGORIES.contains(&name)
}

/// Built-ins first (fixed order), then customs in store order.
pub fn merged_names(customs: &[Category]) -> Vec<String> {
    BUILTIN_CATEGORIES
        .iter()
        .map(|s| s.to_string())
        .chain(customs.iter().map(|c| c.name.clone()))
        .collect()
}

pub fn contains(customs: &[Category], name: &str) -> bool {
    is_builtin(name) || customs.iter().any(|c| c.name == name)
}

/// Validate a new custom category name against the merged set.
/// Empty names and duplicates of either set are rejected.
pub fn validate_new_name(customs: &[Category], name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Category name must not be empty".into());
    }
    if contains(customs, name) {
        return Err(format!("Category '{}' already exists", name));
    }
    Ok(())
}

/// Validate a rename target. Renames obey the same uniqueness rule as
/// creation; renaming a category to its current name is a no-op and allowed.
pub fn validate_rename(customs: &[Category], id: i64, name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Category name must not be empty".into());
    }
    if is_builtin(name) {
        return Err(format!("Category '{}' already exists", name));
    }
    if customs.iter().any(|c| c.id != id && c.name == name) {
        return Err(format!("Category '{}' already exists", name));
    }
    Ok(())
}
