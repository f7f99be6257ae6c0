use console::Style;
use once_cell::sync::Lazy;

pub struct Theme {
    pub banner: Style,
    pub question: Style,
    pub answer: Style,
    pub cursor: Style,
    pub header: Style,
    pub invalid: Style,
}

pub static TRACKER_THEME: Lazy<Theme> = Lazy::new(|| Theme {
    banner: Style::new().green().bold(),
    question: Style::new().bold(),
    answer: Style::new().cyan(),
    cursor: Style::new().cyan().bold(),
    header: Style::new().bold().underlined(),
    invalid: Style::new().yellow(),
});
