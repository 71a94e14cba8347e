/// Layout constants for the invaderers board
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Canvas fallback when the element reports no size
    pub const DEFAULT_CANVAS_WIDTH: u32 = 600;
    pub const DEFAULT_CANVAS_HEIGHT: u32 = 400;

    // Formation spawn caps, applied to counts only; settings keep raw values
    pub const MAX_FORMATION_ROWS: usize = 64;
    pub const MAX_FORMATION_COLUMNS: usize = 64;

    // Defender
    pub const DEFENDER_WIDTH: f32 = 30.0;
    pub const DEFENDER_HEIGHT: f32 = 12.0;

    // Defender bullet
    pub const BULLET_WIDTH: f32 = 2.0;
}
