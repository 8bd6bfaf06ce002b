use console::Style;
use once_cell::sync::Lazy;
use outstanding::{rgb_to_ansi256, Theme};

/// Style names shared between Rust code and templates.
pub mod names {
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

pub static NOTEMARK_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add("category", Style::new().bold().cyan())
        .add("name", Style::new().bold())
        .add(
            "slug",
            Style::new().color256(rgb_to_ansi256((154, 154, 154))),
        )
        .add("heading", Style::new().bold().underlined())
        .add("step_no", Style::new().yellow())
        .add("code", Style::new().green())
        .add("state", Style::new().yellow())
        .add("count", Style::new().dim())
        .add(names::INFO, Style::new().dim())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
        .add(names::ERROR, Style::new().red())
});
