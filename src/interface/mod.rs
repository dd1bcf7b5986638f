pub mod prompts;
pub mod render;

pub use prompts::{
    collect_formula, parse_percentage, prompt_formula, prompt_select_versions,
    prompt_version_name, prompt_yes_no, DEFAULT_VERSION_NAME,
};
pub use render::{
    comparison_lines, display_catalog, display_comparison, display_formula, display_nutrition,
    display_simulation, display_versions, formula_lines,
};
