//! Input handling for the backdrop window.
//!
//! Tracks the pointer position normalized to [-1, 1] on both axes
//! (last-write-wins; the handler just records the latest value) and turns
//! the theme hotkeys (1/2/3) into per-frame theme requests.

use crate::theme::ThemeId;
use glam::Vec2;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Input state fed by raw window events.
#[derive(Debug)]
pub struct Input {
    pointer_ndc: Vec2,
    window_size: (u32, u32),
    theme_request: Option<ThemeId>,
}

impl Input {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pointer_ndc: Vec2::ZERO,
            window_size: (width, height),
            theme_request: None,
        }
    }

    /// Pointer position in normalized device coordinates (-1 to 1).
    ///
    /// Origin at window center, x right, y up. Starts at the center until
    /// the first pointer event arrives.
    pub fn pointer_ndc(&self) -> Vec2 {
        self.pointer_ndc
    }

    /// Theme requested by a hotkey since the last [`Input::begin_frame`].
    pub fn theme_request(&self) -> Option<ThemeId> {
        self.theme_request
    }

    /// Clear per-frame state. Call once at the top of each frame.
    pub fn begin_frame(&mut self) {
        self.theme_request = None;
    }

    /// Update window size for pointer normalization.
    pub fn set_window_size(&mut self, width: u32, height: u32) {
        self.window_size = (width, height);
    }

    /// Record a raw pointer position in window pixels, overwriting any
    /// earlier position from the same frame.
    pub fn record_pointer(&mut self, x: f32, y: f32) {
        let (w, h) = self.window_size;
        if w > 0 && h > 0 {
            self.pointer_ndc = Vec2::new(
                (x / w as f32) * 2.0 - 1.0,
                1.0 - (y / h as f32) * 2.0, // y flipped
            );
        }
    }

    /// Process a winit window event.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.record_pointer(position.x as f32, position.y as f32);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    if let PhysicalKey::Code(code) = event.physical_key {
                        if let Some(id) = theme_for_key(code) {
                            self.theme_request = Some(id);
                        }
                    }
                }
            }
            _ => {}
        }
    }
}

fn theme_for_key(code: KeyCode) -> Option<ThemeId> {
    match code {
        KeyCode::Digit1 => Some(ThemeId::Cyber),
        KeyCode::Digit2 => Some(ThemeId::Galaxy),
        KeyCode::Digit3 => Some(ThemeId::Matrix),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_center_is_origin() {
        let mut input = Input::new(800, 600);
        input.record_pointer(400.0, 300.0);
        assert!(input.pointer_ndc().x.abs() < 0.01);
        assert!(input.pointer_ndc().y.abs() < 0.01);
    }

    #[test]
    fn test_pointer_corners() {
        let mut input = Input::new(800, 600);

        input.record_pointer(800.0, 0.0);
        assert!((input.pointer_ndc().x - 1.0).abs() < 0.01);
        assert!((input.pointer_ndc().y - 1.0).abs() < 0.01);

        input.record_pointer(0.0, 600.0);
        assert!((input.pointer_ndc().x + 1.0).abs() < 0.01);
        assert!((input.pointer_ndc().y + 1.0).abs() < 0.01);
    }

    #[test]
    fn test_last_write_wins() {
        let mut input = Input::new(800, 600);
        input.record_pointer(0.0, 0.0);
        input.record_pointer(800.0, 600.0);
        assert!((input.pointer_ndc().x - 1.0).abs() < 0.01);
        assert!((input.pointer_ndc().y + 1.0).abs() < 0.01);
    }

    #[test]
    fn test_zero_size_window_ignored() {
        let mut input = Input::new(0, 0);
        input.record_pointer(100.0, 100.0);
        assert_eq!(input.pointer_ndc(), Vec2::ZERO);
    }

    #[test]
    fn test_theme_for_key_mapping() {
        assert_eq!(theme_for_key(KeyCode::Digit1), Some(ThemeId::Cyber));
        assert_eq!(theme_for_key(KeyCode::Digit2), Some(ThemeId::Galaxy));
        assert_eq!(theme_for_key(KeyCode::Digit3), Some(ThemeId::Matrix));
        assert_eq!(theme_for_key(KeyCode::Digit4), None);
        assert_eq!(theme_for_key(KeyCode::KeyA), None);
    }

    #[test]
    fn test_begin_frame_clears_request() {
        let mut input = Input::new(800, 600);
        input.theme_request = Some(ThemeId::Galaxy);
        input.begin_frame();
        assert_eq!(input.theme_request(), None);
    }
}
