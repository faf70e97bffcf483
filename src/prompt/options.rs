//! Fixed option lists offered by the form selectors

/// Diagram types offered by the diagram type selector
pub const DIAGRAM_TYPES: &[&str] = &[
    "flowchart",
    "sequence diagram",
    "class",
    "state",
    "entity-relationship",
    "gantt",
    "pie",
    "user journey",
    "git graph",
    "mindmap",
];

/// Detail levels offered by the level of detail selector
pub const DETAIL_LEVELS: &[&str] = &["basic", "intermediate", "detailed"];

pub const DEFAULT_DIAGRAM_TYPE: &str = "sequence diagram";
pub const DEFAULT_DETAIL_LEVEL: &str = "intermediate";

/// Option after `current`, wrapping around.
///
/// A value that is not in `options` moves to the first option.
pub fn next_option(options: &'static [&'static str], current: &str) -> &'static str {
    match options.iter().position(|o| *o == current) {
        Some(idx) => options[(idx + 1) % options.len()],
        None => options[0],
    }
}

/// Option before `current`, wrapping around.
///
/// A value that is not in `options` moves to the last option.
pub fn prev_option(options: &'static [&'static str], current: &str) -> &'static str {
    match options.iter().position(|o| *o == current) {
        Some(0) | None => options[options.len() - 1],
        Some(idx) => options[idx - 1],
    }
}
