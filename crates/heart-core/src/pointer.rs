use glam::DVec2;

/// Last known pointer position in surface pixels, or absent when the
/// pointer left the surface or the last touch ended.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    position: Option<DVec2>,
}

impl PointerState {
    #[inline]
    pub fn move_to(&mut self, x: f64, y: f64) {
        // Non-finite coordinates from the platform count as no pointer.
        self.position = (x.is_finite() && y.is_finite()).then(|| DVec2::new(x, y));
    }

    #[inline]
    pub fn clear(&mut self) {
        self.position = None;
    }

    #[inline]
    pub fn position(&self) -> Option<DVec2> {
        self.position
    }

    #[inline]
    pub fn is_present(&self) -> bool {
        self.position.is_some()
    }
}

/// Platform input, already mapped into surface pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerMove { x: f64, y: f64 },
    PointerLeave,
    /// Primary click.
    Press { x: f64, y: f64 },
    TouchStart { x: f64, y: f64 },
    TouchMove { x: f64, y: f64 },
    TouchEnd,
}

impl InputEvent {
    pub fn is_touch(&self) -> bool {
        matches!(
            self,
            InputEvent::TouchStart { .. } | InputEvent::TouchMove { .. } | InputEvent::TouchEnd
        )
    }
}
