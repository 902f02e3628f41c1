mod locale;
mod translator;

pub use locale::Locale;
pub use translator::Translator;
