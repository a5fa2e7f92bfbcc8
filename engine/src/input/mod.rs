//! Input module
//!
//! Platform-agnostic input for the platformer controller, decoupled from
//! any windowing system. The locomotion layer consumes one [`InputFrame`]
//! per tick; [`InputState`] turns held-key booleans into frames and handles
//! jump edge detection.

/// One tick's worth of player input.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputFrame {
    /// Horizontal axis: -1.0 (left), 0.0, or +1.0 (right).
    pub horizontal: f32,
    /// True only on the tick the jump button went down.
    pub jump_pressed: bool,
}

impl InputFrame {
    pub fn new(horizontal: f32, jump_pressed: bool) -> Self {
        Self {
            horizontal,
            jump_pressed,
        }
    }
}

/// Held-key state with jump press-edge tracking.
///
/// The embedding application forwards key transitions; `sample` produces
/// the frame for the current tick. Left and right held together cancel out.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    left: bool,
    right: bool,
    jump: bool,
    jump_consumed: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_left(&mut self, held: bool) {
        self.left = held;
    }

    pub fn set_right(&mut self, held: bool) {
        self.right = held;
    }

    pub fn set_jump(&mut self, held: bool) {
        if !held {
            self.jump_consumed = false;
        }
        self.jump = held;
    }

    /// Current horizontal axis value in {-1, 0, +1}.
    pub fn horizontal_axis(&self) -> f32 {
        (self.right as i8 - self.left as i8) as f32
    }

    /// Produce the input frame for this tick.
    ///
    /// The jump edge fires once per press; holding the button does not
    /// re-trigger it.
    pub fn sample(&mut self) -> InputFrame {
        let jump_pressed = self.jump && !self.jump_consumed;
        if jump_pressed {
            self.jump_consumed = true;
        }
        InputFrame::new(self.horizontal_axis(), jump_pressed)
    }
}
