//! Channel layouts
//!
//! A layout fixes how many channels each pixel has, the order they are
//! stored in, and whether the last channel is alpha.

/// Channel layout of a [`Grid`](crate::Grid)
///
/// Alpha, when present, is always the last channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChannelLayout {
    /// Single luminance channel
    #[default]
    Gray,
    /// Luminance followed by alpha
    GrayAlpha,
    /// Red, green, blue
    Rgb,
    /// Red, green, blue, alpha
    Rgba,
    /// Blue, green, red
    Bgr,
    /// Blue, green, red, alpha
    Bgra,
}

impl ChannelLayout {
    /// Number of channels per pixel.
    pub fn channels(self) -> usize {
        match self {
            ChannelLayout::Gray => 1,
            ChannelLayout::GrayAlpha => 2,
            ChannelLayout::Rgb | ChannelLayout::Bgr => 3,
            ChannelLayout::Rgba | ChannelLayout::Bgra => 4,
        }
    }

    /// Check if the layout carries an alpha channel.
    pub fn has_alpha(self) -> bool {
        matches!(
            self,
            ChannelLayout::GrayAlpha | ChannelLayout::Rgba | ChannelLayout::Bgra
        )
    }

    /// Index of the alpha channel within a pixel, if any.
    pub fn alpha_index(self) -> Option<usize> {
        self.has_alpha().then(|| self.channels() - 1)
    }

    /// Check whether channel `ch` is the alpha channel.
    #[inline]
    pub fn is_alpha(self, ch: usize) -> bool {
        self.alpha_index() == Some(ch)
    }

    /// The same layout with an alpha channel appended.
    ///
    /// Layouts that already carry alpha are returned unchanged.
    pub fn with_alpha(self) -> Self {
        match self {
            ChannelLayout::Gray => ChannelLayout::GrayAlpha,
            ChannelLayout::Rgb => ChannelLayout::Rgba,
            ChannelLayout::Bgr => ChannelLayout::Bgra,
            other => other,
        }
    }

    /// The same layout with red and blue exchanged.
    ///
    /// Gray layouts have no red/blue and are returned unchanged.
    pub fn swapped_red_blue(self) -> Self {
        match self {
            ChannelLayout::Rgb => ChannelLayout::Bgr,
            ChannelLayout::Bgr => ChannelLayout::Rgb,
            ChannelLayout::Rgba => ChannelLayout::Bgra,
            ChannelLayout::Bgra => ChannelLayout::Rgba,
            other => other,
        }
    }
}
