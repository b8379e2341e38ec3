use glam::DVec2;
use heart_core::InputEvent;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, TouchPhase};

/// Window physical pixels to the logical pixels the simulation runs in.
#[inline]
pub fn to_logical(position: PhysicalPosition<f64>, scale_factor: f64) -> DVec2 {
    let logical = position.to_logical::<f64>(scale_factor);
    DVec2::new(logical.x, logical.y)
}

/// Primary button presses become ripple triggers at the last cursor position.
#[inline]
pub fn mouse_press(
    state: ElementState,
    button: MouseButton,
    cursor: Option<DVec2>,
) -> Option<InputEvent> {
    match (state, button, cursor) {
        (ElementState::Pressed, MouseButton::Left, Some(p)) => {
            Some(InputEvent::Press { x: p.x, y: p.y })
        }
        _ => None,
    }
}

#[inline]
pub fn touch(phase: TouchPhase, at: DVec2) -> InputEvent {
    match phase {
        TouchPhase::Started => InputEvent::TouchStart { x: at.x, y: at.y },
        TouchPhase::Moved => InputEvent::TouchMove { x: at.x, y: at.y },
        TouchPhase::Ended | TouchPhase::Cancelled => InputEvent::TouchEnd,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidpi_positions_are_scaled_down() {
        let p = to_logical(PhysicalPosition::new(200.0, 100.0), 2.0);
        assert_eq!(p, DVec2::new(100.0, 50.0));
    }

    #[test]
    fn only_left_press_with_known_cursor_triggers() {
        let at = Some(DVec2::new(3.0, 4.0));
        assert_eq!(
            mouse_press(ElementState::Pressed, MouseButton::Left, at),
            Some(InputEvent::Press { x: 3.0, y: 4.0 })
        );
        assert_eq!(mouse_press(ElementState::Released, MouseButton::Left, at), None);
        assert_eq!(mouse_press(ElementState::Pressed, MouseButton::Right, at), None);
        assert_eq!(mouse_press(ElementState::Pressed, MouseButton::Left, None), None);
    }

    #[test]
    fn touch_phases_map_to_touch_events() {
        let at = DVec2::new(1.0, 2.0);
        assert_eq!(touch(TouchPhase::Started, at), InputEvent::TouchStart { x: 1.0, y: 2.0 });
        assert_eq!(touch(TouchPhase::Moved, at), InputEvent::TouchMove { x: 1.0, y: 2.0 });
        assert_eq!(touch(TouchPhase::Cancelled, at), InputEvent::TouchEnd);
    }
}
