use smallvec::SmallVec;

use crate::effects::TimerId;

/// Split a comma-separated attribute into trimmed, non-empty items.
pub fn split_list(raw: &str) -> SmallVec<[String; 4]> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SlideKind {
    Video {
        src: String,
        thumbnail: Option<String>,
    },
    Image {
        src: String,
    },
    Placeholder,
}

#[derive(Clone, Debug)]
pub struct Slide {
    pub kind: SlideKind,
    pub active: bool,
    /// Thumbnail fade timer scheduled by the last activation, if still pending.
    pub pending_timer: Option<TimerId>,
}

impl Slide {
    pub fn new(kind: SlideKind) -> Self {
        Self {
            kind,
            active: false,
            pending_timer: None,
        }
    }

    pub fn is_video(&self) -> bool {
        matches!(self.kind, SlideKind::Video { .. })
    }

    pub fn has_thumbnail(&self) -> bool {
        matches!(
            self.kind,
            SlideKind::Video {
                thumbnail: Some(_),
                ..
            }
        )
    }
}

/// Position indicator paired with the slide at `target`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dot {
    pub target: usize,
    pub active: bool,
}
