use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Viewport observer defaults, callers may override either key
pub const DEFAULT_THRESHOLD: f64 = 0.1;
pub const DEFAULT_ROOT_MARGIN: &str = "50px";

pub const SITE_TITLE: &str = "Jennifer Hahm, Ph.D. - Psychological Services";
pub const SITE_DESCRIPTION: &str = "Professional psychological care for change, insight, and well-being. Offering individual psychotherapy for adults via telehealth across most U.S. states.";
pub const SITE_KEYWORDS: &str = "psychology, therapy, mental health, telehealth, counseling, Jennifer Hahm, PSYPACT";
pub const SITE_AUTHOR: &str = "Jennifer Hahm, Ph.D.";
pub const SITE_VIEWPORT: &str = "width=device-width, initial-scale=1";
pub const SITE_ROBOTS: &str = "index, follow";

pub const OG_TITLE: &str = SITE_TITLE;
pub const OG_DESCRIPTION: &str = "Professional psychological care for change, insight, and well-being.";
pub const OG_TYPE: &str = "website";
pub const OG_LOCALE: &str = "en_US";

pub const CONTACT_PAGE_TITLE: &str = "Contact - Jennifer Hahm, Ph.D.";
