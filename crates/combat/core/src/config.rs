/// Combat configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Horizontal distance at which a walking fighter is stopped in front of
    /// its opponent and flagged as close.
    pub close_margin: i32,
    /// Fighter ticks per physics/animation step.
    pub step_interval: u32,
    /// Pixels the main sprite is lifted while the fighter is airborne.
    pub air_sprite_lift: i32,
    /// Horizontal velocity issued by walk actions.
    pub walk_speed: f32,
    /// Vertical velocity issued by jump actions (negative is up).
    pub jump_velocity: f32,
    pub health_max: u32,
    pub endurance_max: u32,
    /// Endurance regained per step while playing an idle-family animation.
    pub endurance_regen: u32,
}

impl CombatConfig {
    // ===== compile-time constants used as type parameters =====
    /// Symbols remembered by a fighter's input history.
    pub const INPUT_HISTORY_LEN: usize = 10;
    /// Move slots available to a fighter archetype.
    pub const MAX_MOVES: usize = 70;
    /// Mask values in the open range (0, SOLID_MASK_LIMIT) are fighter pixels.
    pub const SOLID_MASK_LIMIT: u8 = 48;
    /// Offset applied to everything drawn into the collision debug image.
    pub const DEBUG_MARGIN: i32 = 50;
    pub const DEBUG_IMAGE_WIDTH: u32 = 420;
    pub const DEBUG_IMAGE_HEIGHT: u32 = 350;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_CLOSE_MARGIN: i32 = 35;
    pub const DEFAULT_STEP_INTERVAL: u32 = 4;
    pub const DEFAULT_AIR_SPRITE_LIFT: i32 = 20;
    pub const DEFAULT_WALK_SPEED: f32 = 3.0;
    pub const DEFAULT_JUMP_VELOCITY: f32 = -15.0;
    pub const DEFAULT_HEALTH_MAX: u32 = 500;
    pub const DEFAULT_ENDURANCE_MAX: u32 = 500;
    pub const DEFAULT_ENDURANCE_REGEN: u32 = 1;

    pub fn new() -> Self {
        Self {
            close_margin: Self::DEFAULT_CLOSE_MARGIN,
            step_interval: Self::DEFAULT_STEP_INTERVAL,
            air_sprite_lift: Self::DEFAULT_AIR_SPRITE_LIFT,
            walk_speed: Self::DEFAULT_WALK_SPEED,
            jump_velocity: Self::DEFAULT_JUMP_VELOCITY,
            health_max: Self::DEFAULT_HEALTH_MAX,
            endurance_max: Self::DEFAULT_ENDURANCE_MAX,
            endurance_regen: Self::DEFAULT_ENDURANCE_REGEN,
        }
    }

    pub fn with_close_margin(mut self, close_margin: i32) -> Self {
        self.close_margin = close_margin;
        self
    }

    pub fn with_vitals(mut self, health_max: u32, endurance_max: u32) -> Self {
        self.health_max = health_max;
        self.endurance_max = endurance_max;
        self
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}
