//! Staggered section reveal.
//!
//! Top-level sections fade up into view one after another. The timing is a
//! pure function of the section's index, so it can be checked without a
//! browser and handed to any animation host as plain data.

use std::time::Duration;

use folio_core::config::{MAX_BASE_DELAY_MS, RevealSettings};
use serde::Serialize;

use crate::error::RenderError;

/// Longest base delay accepted by [`RevealPolicy::new`].
pub const MAX_BASE_DELAY: Duration = Duration::from_millis(MAX_BASE_DELAY_MS);

/// One end of an entrance animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Frame {
    /// Vertical offset below the resting position, in pixels
    pub offset_px: u32,
    /// Opacity, 0 to 100
    pub opacity_pct: u8,
}

impl Frame {
    /// Resting position, fully visible.
    pub const VISIBLE: Self = Self {
        offset_px: 0,
        opacity_pct: 100,
    };

    /// Hidden, `offset_px` below the resting position.
    #[must_use]
    pub const fn hidden(offset_px: u32) -> Self {
        Self {
            offset_px,
            opacity_pct: 0,
        }
    }
}

/// Declarative entrance animation for one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnimationSpec {
    /// Starting frame
    pub initial: Frame,
    /// Final frame
    pub target: Frame,
    /// Time from start to target
    #[serde(serialize_with = "serialize_millis")]
    pub duration: Duration,
    /// Time before the animation starts
    #[serde(serialize_with = "serialize_millis")]
    pub delay: Duration,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}

impl AnimationSpec {
    /// Inline style carrying the timing as CSS custom properties.
    ///
    /// The stylesheet's `reveal` rule reads these.
    #[must_use]
    pub fn css_vars(&self) -> String {
        format!(
            "--reveal-delay: {}ms; --reveal-duration: {}ms; --reveal-offset: {}px;",
            self.delay.as_millis(),
            self.duration.as_millis(),
            self.initial.offset_px,
        )
    }
}

/// Timing policy shared by every section on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealPolicy {
    base_delay: Duration,
    duration: Duration,
    offset_px: u32,
}

impl Default for RevealPolicy {
    fn default() -> Self {
        Self {
            base_delay: Duration::from_millis(100),
            duration: Duration::from_millis(500),
            offset_px: 20,
        }
    }
}

impl RevealPolicy {
    /// Creates a policy.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::InvalidRevealPolicy` if `base_delay` is zero
    /// (sections would all start together) or longer than
    /// [`MAX_BASE_DELAY`].
    pub fn new(
        base_delay: Duration,
        duration: Duration,
        offset_px: u32,
    ) -> Result<Self, RenderError> {
        if base_delay.is_zero() {
            return Err(RenderError::InvalidRevealPolicy(
                "base delay must be positive".to_string(),
            ));
        }
        if base_delay > MAX_BASE_DELAY {
            return Err(RenderError::InvalidRevealPolicy(format!(
                "base delay {}ms exceeds {}ms",
                base_delay.as_millis(),
                MAX_BASE_DELAY.as_millis()
            )));
        }
        Ok(Self {
            base_delay,
            duration,
            offset_px,
        })
    }

    /// Builds a policy from the site's `reveal:` block.
    ///
    /// # Errors
    ///
    /// See [`RevealPolicy::new`].
    pub fn from_settings(settings: &RevealSettings) -> Result<Self, RenderError> {
        Self::new(
            Duration::from_millis(settings.base_delay_ms),
            Duration::from_millis(settings.duration_ms),
            settings.offset_px,
        )
    }

    /// Delay added per section.
    #[must_use]
    pub const fn base_delay(&self) -> Duration {
        self.base_delay
    }

    /// Animation for the section at `index`.
    ///
    /// `delay = base_delay * index`, saturating at `Duration::MAX`.
    #[must_use]
    pub fn reveal(&self, index: u32) -> AnimationSpec {
        AnimationSpec {
            initial: Frame::hidden(self.offset_px),
            target: Frame::VISIBLE,
            duration: self.duration,
            delay: self.base_delay.saturating_mul(index),
        }
    }

    /// Animation for the page header, which starts immediately.
    #[must_use]
    pub const fn fade_in_up(&self) -> AnimationSpec {
        AnimationSpec {
            initial: Frame::hidden(self.offset_px),
            target: Frame::VISIBLE,
            duration: self.duration,
            delay: Duration::ZERO,
        }
    }
}

/// Animation for the section at `index` under the default policy.
#[must_use]
pub fn reveal(index: u32) -> AnimationSpec {
    RevealPolicy::default().reveal(index)
}
