mod format;
mod input;
mod render;
mod text;
mod theme;

pub(crate) use format::format_analysis_time;
pub(crate) use input::handle_key_event;
pub(crate) use render::draw_ui;
