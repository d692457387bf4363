pub const THEME_STORAGE_KEY: &str = "theme";

pub const SCROLL_SPY_THRESHOLD: f64 = 0.3;
pub const SCROLL_SPY_ROOT_MARGIN: &str = "-80px 0px -80px 0px";
pub const REVEAL_THRESHOLD: f64 = 0.1;

pub const SIMULATED_SUBMIT_DELAY_MS: u32 = 2_000;
pub const SUBMIT_STATUS_DISMISS_MS: u32 = 3_000;

pub const NAME_REQUIRED_ERROR: &str = "Please tell me your name";
pub const INVALID_EMAIL_ERROR: &str = "Please enter a valid email address";
pub const MESSAGE_REQUIRED_ERROR: &str = "Please describe your project";
pub const SUBMIT_SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully. I'll get back to you soon!";
pub const SUBMIT_ERROR_MESSAGE: &str = "Sorry, there was an error sending your message. Please try again.";
