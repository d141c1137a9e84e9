pub const DEFAULT_SCREEN_WIDTH: usize = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Total console width in characters, shared out evenly between entities.
    pub screen_width: usize,
}

impl Config {
    pub fn with_screen_width(screen_width: usize) -> Self {
        Self { screen_width }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
        }
    }
}
