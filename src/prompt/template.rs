//! Prompt text assembly

use crate::state::FormState;

/// Build the prompt text for the current form values.
///
/// The diagram type is substituted verbatim in the heading, the
/// "Diagram Type" line and the first output instruction. The last line is
/// `Notes: <notes>` when notes are present and empty otherwise, with no
/// trailing newline.
pub fn render_prompt(form: &FormState) -> String {
    let diagram = form.diagram_type.as_str();

    [
        format!(
            "You are a software engineer. Write a **Mermaid {diagram}** to illustrate the following:"
        ),
        format!("**Scenario:** \"\"\"{}\"\"\"", form.selection),
        String::new(),
        format!("**Diagram Type:** {diagram}"),
        String::new(),
        format!("**Level of Detail:** {}", form.detail_level),
        String::new(),
        "**Output:**".to_string(),
        format!("  1. Provide the Mermaid {diagram} code."),
        "  2. Include a brief explanation of the diagram.".to_string(),
        String::new(),
        notes_line(&form.notes),
    ]
    .join("\n")
}

fn notes_line(notes: &str) -> String {
    if notes.is_empty() {
        String::new()
    } else {
        format!("Notes: {notes}")
    }
}
