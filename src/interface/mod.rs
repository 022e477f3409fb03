pub mod export;
pub mod prompts;
pub mod render;

pub use export::write_shopping_list_csv;
pub use prompts::{day_candidates, prompt_checklist, prompt_day_choice};
pub use render::{display_day_plans, display_pinned, display_shopping_list, display_week_plan};
