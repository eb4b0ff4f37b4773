//! Partial repaint controller
//!
//! egui redraws everything every frame; on an e-ink panel each refresh is
//! visible. `RepaintController` only asks egui for another frame when the app
//! says its state changed during the current one. Input frames are scheduled
//! by egui itself, so an idle app does not repaint at all.

/// Call [`RepaintController::begin_frame`] at the top of `update()` and
/// [`RepaintController::end_frame`] at the bottom.
#[derive(Default)]
pub struct RepaintController {
    needs_repaint: bool,
}

impl RepaintController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a single repaint after this frame.
    pub fn mark_needs_repaint(&mut self) {
        self.needs_repaint = true;
    }

    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    pub fn begin_frame(&mut self) {
        self.needs_repaint = false;
    }

    /// Schedules one more frame if something was marked dirty during this one.
    pub fn end_frame(&mut self, ctx: &egui::Context) {
        if self.needs_repaint {
            ctx.request_repaint();
        }
    }
}
