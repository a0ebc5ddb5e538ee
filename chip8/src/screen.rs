use std::time::Duration;

use anyhow::Result;
use minifb::{Key, Window, WindowOptions};

use libchip8::screen::{Framebuffer, Mode, Screen};

use crate::keymap;

const WINDOW_TITLE: &str = "chip8";

const PIXEL_ON: u32 = 0x00FA_FAFA;
const PIXEL_OFF: u32 = 0;

/// A minifb window presenting the core's pixel grid, scaled up by an
/// integer factor.
pub struct WindowScreen {
    fb: Framebuffer,
    window: Window,
    buffer: Vec<u32>,
    scale: usize,
}

impl WindowScreen {
    pub fn new(scale: usize) -> Result<Self> {
        let fb = Framebuffer::new(Mode::Normal);
        let window = Self::open_window(&fb, scale)?;
        let buffer = vec![PIXEL_OFF; fb.width() * scale * fb.height() * scale];

        Ok(Self {
            fb,
            window,
            buffer,
            scale,
        })
    }

    fn open_window(fb: &Framebuffer, scale: usize) -> Result<Window> {
        let mut window = Window::new(
            WINDOW_TITLE,
            fb.width() * scale,
            fb.height() * scale,
            WindowOptions::default(),
        )?;
        window.limit_update_rate(Some(Duration::from_micros(16_600)));

        Ok(window)
    }

    /// Pushes the current grid to the window, polling input on the way.
    pub fn refresh(&mut self) {
        let width = self.fb.width() * self.scale;
        let height = self.fb.height() * self.scale;

        for y in 0..self.fb.height() {
            for x in 0..self.fb.width() {
                let color = if self.fb.pixel(x, y) == 1 {
                    PIXEL_ON
                } else {
                    PIXEL_OFF
                };
                for dy in 0..self.scale {
                    let start = (y * self.scale + dy) * width + x * self.scale;
                    self.buffer[start..start + self.scale].fill(color);
                }
            }
        }

        if let Err(e) = self.window.update_with_buffer(&self.buffer, width, height) {
            log::warn!("window update failed: {}", e);
        }
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn quit_requested(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Current key state as the core's virtual key array.
    pub fn pressed_keys(&self) -> [bool; 16] {
        let mut keys = [false; 16];
        for key in self.window.get_keys() {
            if let Some(index) = keymap::key_index(key) {
                keys[index as usize] = true;
            }
        }
        keys
    }
}

impl Screen for WindowScreen {
    fn width(&self) -> usize {
        self.fb.width()
    }

    fn height(&self) -> usize {
        self.fb.height()
    }

    fn pixel(&self, x: usize, y: usize) -> u8 {
        self.fb.pixel(x, y)
    }

    fn set_pixel(&mut self, x: usize, y: usize, value: u8) {
        self.fb.set_pixel(x, y, value);
    }

    fn clear(&mut self) {
        self.fb.clear();
    }

    fn commit(&mut self) {
        self.refresh();
    }

    fn set_mode(&mut self, mode: Mode) {
        // minifb windows are fixed-size; a geometry change tears the
        // window down and reopens it at the new size.
        self.fb.set_mode(mode);
        self.buffer = vec![PIXEL_OFF; self.fb.width() * self.scale * self.fb.height() * self.scale];

        match Self::open_window(&self.fb, self.scale) {
            Ok(window) => self.window = window,
            Err(e) => log::error!("failed to rebuild window after mode switch: {}", e),
        }
        self.refresh();
    }

    fn scroll_down(&mut self, lines: usize) {
        self.fb.scroll_down(lines);
        self.refresh();
    }

    fn scroll_left(&mut self) {
        self.fb.scroll_left();
        self.refresh();
    }

    fn scroll_right(&mut self) {
        self.fb.scroll_right();
        self.refresh();
    }
}
