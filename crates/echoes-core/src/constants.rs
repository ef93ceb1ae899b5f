use std::time::Duration;

// Tuning constants shared by the carousel, the modal and the page effects.

// Preview modal timings
pub const THUMBNAIL_FADE_DELAY: Duration = Duration::from_millis(800); // thumbnail shown before video plays
pub const OPEN_SETTLE_DELAY: Duration = Duration::from_millis(600); // media already ready at open
pub const READY_GRACE_DELAY: Duration = Duration::from_millis(300); // after a late readiness event
pub const READY_FALLBACK_DELAY: Duration = Duration::from_millis(3000); // media never became ready
pub const CLOSE_TRANSITION: Duration = Duration::from_millis(300); // matches the CSS exit transition

// HTMLMediaElement.HAVE_FUTURE_DATA
pub const VIDEO_READY_STATE_PLAYABLE: u16 = 3;

// Slide content
pub const VIDEO_SUFFIX: &str = ".mp4";
pub const PLACEHOLDER_CAPTION: &str = "Preview coming soon";
pub const PLACEHOLDER_BACKGROUND: &str =
    "linear-gradient(135deg, rgba(56, 189, 248, 0.06), rgba(2, 2, 4, 0.85))";
pub const DEFAULT_PROJECT_TITLE: &str = "Project";
pub const DEFAULT_PROJECT_DESCRIPTION: &str = "Details coming soon.";
pub const PLACEHOLDER_HREF: &str = "#";

// Media preloading
pub const PRELOAD_DELAY: Duration = Duration::from_millis(500);
pub const PRELOAD_PROJECT_LIMIT: usize = 3;

// Particle field
pub const PARTICLE_COUNT: usize = 80;
pub const PARTICLE_EDGE_MARGIN: f32 = 10.0; // respawn once this far outside the canvas
pub const PARTICLE_OPACITY_FLOOR: f32 = 0.1;
pub const PARTICLE_OPACITY_CEIL: f32 = 0.7;
pub const PARTICLE_SHADOW_BLUR: f64 = 10.0;
pub const PARTICLE_SHADOW_COLOR: &str = "rgba(56, 189, 248, 0.5)";

// Cursor follower
pub const CURSOR_SMOOTHING: f32 = 0.3; // fraction of the remaining distance per frame

// Navigation
pub const NAV_SECTION_OFFSET: f64 = 150.0;
pub const NAV_COLLAPSE_WIDTH: f64 = 768.0;
pub const PARALLAX_FACTOR: f64 = 0.3;

// Project filter
pub const FILTER_ALL: &str = "all";
pub const FILTER_STAGGER_MS: u32 = 50;

// Hero subtitle rotation
pub const SUBTITLE_TEXTS: [&str; 3] = [
    "Architect of Code & Worlds",
    "Game Programmer / Developer",
    "Technical Artist",
];
pub const SUBTITLE_INITIAL_DELAY_MS: u32 = 2000;
pub const SUBTITLE_INTERVAL_MS: u32 = 3000;
pub const SUBTITLE_FADE_MS: u32 = 600;

// Essence burst (contact form)
pub const BURST_SPRITES: usize = 20;
pub const BURST_SPEED_MIN: f32 = 50.0;
pub const BURST_SPEED_SPAN: f32 = 100.0;
pub const BURST_FRAME_STEP: f32 = 0.016; // seconds of travel per frame
pub const BURST_FADE_PER_FRAME: f32 = 0.02;
pub const FORM_ACK_DELAY_MS: u32 = 1000;

// Dream motes
pub const DREAM_SPAWN_INTERVAL_MS: u32 = 2000;
pub const DREAM_RISE_PX: f32 = 800.0;
pub const DREAM_DRIFT_SPAN_PX: f32 = 100.0;

// Button ripple
pub const RIPPLE_DURATION_MS: f64 = 600.0;
pub const RIPPLE_MAX_SIZE_PX: f32 = 300.0;

// Page fade-in
pub const PAGE_FADE_DELAY_MS: u32 = 100;
