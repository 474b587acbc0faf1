//! Scroll controller: a single clamped scroll offset shared by every
//! positionable entity.
//!
//! Key-hold and wheel input both reduce to a [`ScrollIntent`] and go
//! through the same clamp, so the two paths cannot drift apart.

/// Viewport geometry and scroll state, passed explicitly to whoever
/// needs it. Positive scroll moves the camera toward the finish;
/// entities move the opposite way on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    /// Viewport width in pixels
    pub width: f32,
    /// Viewport height in pixels
    pub height: f32,
    /// Fraction of the viewport height where the ground line sits
    pub ground_frac: f32,
    /// Scroll offset of the viewport's left edge from the content's
    /// left edge, in pixels
    pub current_pixel_position: f32,
    /// Full content width including both mount buffers
    pub total_pixel_width: f32,
    /// Side buffer width, kept for HUD computations
    pub mount_buffer: f32,
}

impl ViewportState {
    pub fn new(
        width: f32,
        height: f32,
        ground_frac: f32,
        total_pixel_width: f32,
        mount_buffer: f32,
    ) -> Self {
        Self {
            width,
            height,
            ground_frac,
            current_pixel_position: 0.0,
            total_pixel_width,
            mount_buffer,
        }
    }

    /// Screen y of the ground line.
    pub fn ground_y(&self) -> f32 {
        self.height * self.ground_frac
    }

    /// Largest valid scroll offset. Zero when the content fits inside
    /// the viewport.
    pub fn max_scroll(&self) -> f32 {
        (self.total_pixel_width - self.width).max(0.0)
    }

    /// Clamp a requested scroll delta so the offset stays within
    /// `[0, max_scroll]`. A request pushing further past an edge
    /// already reached yields exactly 0.0.
    pub fn clamp_delta(&self, requested: f32) -> f32 {
        let target = (self.current_pixel_position + requested).clamp(0.0, self.max_scroll());
        target - self.current_pixel_position
    }

    /// Apply a scroll request. Returns the screen-space shift every
    /// positionable entity must add to its x (the negated clamped
    /// delta), or 0.0 if the request was fully clamped.
    pub fn scroll_by(&mut self, requested: f32) -> f32 {
        let delta = self.clamp_delta(requested);
        if delta == 0.0 {
            return 0.0;
        }
        self.current_pixel_position += delta;
        -delta
    }

    /// Recompute viewport-relative geometry after a window resize.
    /// Returns the entity shift needed to keep screen positions
    /// consistent with the re-clamped offset.
    pub fn resize(&mut self, width: f32, height: f32) -> f32 {
        self.width = width;
        self.height = height;

        let clamped = self.current_pixel_position.clamp(0.0, self.max_scroll());
        let shift = self.current_pixel_position - clamped;
        self.current_pixel_position = clamped;
        shift
    }
}

/// Per-frame scroll request folded from all input sources.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollIntent {
    /// Signed pixels; positive advances toward the finish
    pub delta: f32,
}

impl ScrollIntent {
    /// Fold in held directional keys at a fixed per-frame speed.
    pub fn with_keys(mut self, left_held: bool, right_held: bool, speed: f32) -> Self {
        if right_held {
            self.delta += speed;
        }
        if left_held {
            self.delta -= speed;
        }
        self
    }

    /// Fold in a wheel event, clamping its magnitude to the configured
    /// per-event maximum so one large tick cannot overshoot.
    pub fn with_wheel(mut self, wheel_delta: f32, max_step: f32) -> Self {
        self.delta += wheel_delta.clamp(-max_step, max_step);
        self
    }

    pub fn is_none(&self) -> bool {
        self.delta == 0.0
    }
}
