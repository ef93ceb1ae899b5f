// Page structure the front end binds to.

// Background
pub const PARTICLE_CANVAS_ID: &str = "particles";

// Preview modal
pub const MODAL: &str = ".project-modal";
pub const MODAL_TITLE: &str = ".modal-title";
pub const MODAL_DESC: &str = ".modal-desc";
pub const MODAL_TAGS: &str = ".modal-tags";
pub const MODAL_LINK: &str = ".modal-link";
pub const MODAL_CLOSE: &str = ".modal-close-btn";
pub const MODAL_OVERLAY: &str = ".modal-overlay";
pub const MODAL_FRAME: &str = ".modal-frame";
pub const MODAL_LOADING: &str = ".modal-loading";
pub const PREVIEW_DOTS: &str = ".preview-dots";
pub const PREVIEW_PREV: &str = ".preview-nav.prev";
pub const PREVIEW_NEXT: &str = ".preview-nav.next";
pub const PROJECT_TRIGGER: &str = ".view-project";

// Classes toggled on modal parts
pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_SHOW: &str = "show";
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_SLIDE: &str = "modal-image";
pub const CLASS_PLACEHOLDER: &str = "placeholder";
pub const CLASS_THUMB: &str = "video-thumb";
pub const CLASS_DOT: &str = "preview-dot";
pub const CLASS_BADGE: &str = "badge";

// Navigation and sections
pub const NAV_LINKS: &str = ".nav-links a";
pub const NAV_TOGGLE: &str = ".nav-toggle";
pub const NAV_CONTAINER: &str = ".nav-container";
pub const NAV_OPEN_CLASS: &str = "nav-open";
pub const SECTIONS: &str = "section[id]";
pub const ANCHORS: &str = "a[href^=\"#\"]";

// Scroll reveal
pub const REVEAL_TARGETS: &str = ".journal-entry, .project-card, .timeline-item";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";
pub const CLASS_VISIBLE: &str = "visible";

// Filter tabs
pub const FILTER_TABS: &str = ".tab";
pub const PROJECT_CARDS: &str = ".project-card";

// Cosmetics
pub const HERO_SUBTITLE: &str = ".hero-subtitle";
pub const FADE_OUT_CLASS: &str = "fade-out";
pub const ESSENCE_CONTAINER: &str = ".essence-particles";
pub const DREAM_FORM: &str = ".dream-form";
pub const RIPPLE_BUTTONS: &str = ".charm-button, .dream-button";
pub const ABYSS_SILHOUETTE: &str = ".abyss-silhouette";
pub const ESSENCE_GRADIENT: &str = "radial-gradient(circle, #38bdf8 0%, transparent 70%)";
pub const RIPPLE_COLOR: &str = "rgba(56, 189, 248, 0.5)";
