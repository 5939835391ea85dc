use std::time::Duration;

use ratatui::style::Color;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Board used by the binary: a 600×400 canvas at 20-unit cells.
pub const DEFAULT_GRID: GridSize = GridSize {
    width: 30,
    height: 20,
};

/// Fixed tick interval in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 120;

/// Fixed tick interval.
pub const TICK_INTERVAL: Duration = Duration::from_millis(TICK_INTERVAL_MS);

/// Points awarded per food eaten.
pub const FOOD_REWARD: u32 = 10;

/// Number of segments in a freshly seeded snake.
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Upper bound on how long the main loop blocks waiting for input.
pub const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(16);

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub food_shine: Color,
    pub play_bg: Color,
    pub grid_line: Color,
    pub border_fg: Color,
    pub hud_score: Color,
    pub hud_muted: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Dark navy board with green snake and red food.
pub const THEME_CANVAS: Theme = Theme {
    snake_head: Color::Rgb(0x4c, 0xaf, 0x50),
    snake_body: Color::Rgb(0x8b, 0xc3, 0x4a),
    food: Color::Rgb(0xff, 0x52, 0x52),
    food_shine: Color::Rgb(0xff, 0x8a, 0x80),
    play_bg: Color::Rgb(0x0a, 0x19, 0x29),
    grid_line: Color::Rgb(0x0d, 0x2b, 0x45),
    border_fg: Color::Rgb(0x8b, 0xc3, 0x4a),
    hud_score: Color::White,
    hud_muted: Color::DarkGray,
    menu_title: Color::Rgb(0x4c, 0xaf, 0x50),
    menu_footer: Color::DarkGray,
};

/// Each logical cell is drawn two terminal columns wide to stay square.
pub const CELL_WIDTH: u16 = 2;

pub const GLYPH_SNAKE_HEAD: &str = "██";
pub const GLYPH_SNAKE_BODY: &str = "▓▓";
pub const GLYPH_FOOD: &str = "◆ ";
pub const GLYPH_EMPTY: &str = "· ";
