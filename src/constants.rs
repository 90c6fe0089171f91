// Particle field, camera and interaction tuning constants.

// Particle field
pub const PARTICLE_COUNT: usize = 2000;
pub const MAX_PARTICLE_COUNT: usize = 200_000; // upper bound for overrides
pub const POSITION_HALF_EXTENT: f32 = 2.5; // positions sampled in [-2.5, 2.5)
pub const COLOR_RED_RANGE: (f32, f32) = (0.2, 0.4);
pub const COLOR_GREEN_RANGE: (f32, f32) = (0.7, 1.0);
pub const COLOR_BLUE_RANGE: (f32, f32) = (0.8, 1.0);

// Point material
pub const POINT_SIZE: f32 = 0.03; // world units, perspective attenuated
pub const POINT_OPACITY: f32 = 0.8;

// Camera
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 2.0;

// Idle motion
pub const SPIN_PER_FRAME: f32 = 0.0003; // radians, applied to X and Y
pub const BOB_AMPLITUDE: f32 = 0.1;
pub const BOB_FREQUENCY_PER_MS: f64 = 0.0005; // against wall-clock ms (Date.now)

// Pointer influence
pub const POINTER_ROTATION_GAIN: f32 = 0.5;
pub const ROTATION_EASE: f32 = 0.05; // fraction of remaining delta per tick
pub const POINTER_DEADZONE: f32 = 0.1;
pub const POINTER_POSITION_GAIN: f32 = 0.1;
pub const POSITION_EASE: f32 = 0.02;

// Scroll tracking
pub const SCROLL_TOP_THRESHOLD_PX: f64 = 300.0;
pub const SECTION_PROBE_PX: f64 = 100.0; // distance from viewport top

// Renderer
pub const MSAA_SAMPLES: u32 = 4;

// Frames further apart than this are logged as stalls (tab throttled, etc.)
pub const FRAME_STALL_MS: u128 = 250;
