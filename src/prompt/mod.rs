//! Prompt generation: option lists and the prompt template

mod options;
mod template;

pub use options::{
    next_option, prev_option, DEFAULT_DETAIL_LEVEL, DEFAULT_DIAGRAM_TYPE, DETAIL_LEVELS,
    DIAGRAM_TYPES,
};
pub use template::render_prompt;
