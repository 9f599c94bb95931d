//! Scene identifiers and viewport density tiers.

/// Viewport width (logical pixels) above which decoration uses the
/// denser "wide" batch counts.
pub const WIDE_VIEWPORT_PX: u32 = 768;

/// The six scenes of the experience, in playback order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneId {
    /// Intro: tap the balloon to begin.
    Balloon,
    /// Birthday celebration with fireworks and the yes/no question.
    Birthday,
    /// Memories gallery.
    Memories,
    /// Interactive heart tap.
    Heart,
    /// The letter.
    Letter,
    /// Closing message.
    Final,
}

impl SceneId {
    /// All scenes in playback order.
    pub const ALL: [SceneId; 6] = [
        SceneId::Balloon,
        SceneId::Birthday,
        SceneId::Memories,
        SceneId::Heart,
        SceneId::Letter,
        SceneId::Final,
    ];

    /// Number of scenes in the sequence.
    pub const COUNT: usize = Self::ALL.len();

    /// Ordinal position of this scene in the sequence.
    pub fn index(self) -> usize {
        match self {
            SceneId::Balloon => 0,
            SceneId::Birthday => 1,
            SceneId::Memories => 2,
            SceneId::Heart => 3,
            SceneId::Letter => 4,
            SceneId::Final => 5,
        }
    }

    /// Scene at the given ordinal, if in range.
    pub fn from_index(index: usize) -> Option<SceneId> {
        Self::ALL.get(index).copied()
    }

    /// Stable name used for labels and diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            SceneId::Balloon => "balloon",
            SceneId::Birthday => "birthday",
            SceneId::Memories => "memories",
            SceneId::Heart => "heart",
            SceneId::Letter => "letter",
            SceneId::Final => "final",
        }
    }
}

/// Decoration density tier selected from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportTier {
    Narrow,
    Wide,
}

impl ViewportTier {
    /// Classify a viewport by its width in logical pixels.
    pub fn from_width_px(width_px: u32) -> Self {
        if width_px > WIDE_VIEWPORT_PX {
            ViewportTier::Wide
        } else {
            ViewportTier::Narrow
        }
    }

    /// Pick a batch count for this tier.
    pub fn pick(self, wide: usize, narrow: usize) -> usize {
        match self {
            ViewportTier::Wide => wide,
            ViewportTier::Narrow => narrow,
        }
    }
}
