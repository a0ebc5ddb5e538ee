use libchip8isa::Register;

use crate::keypad::Keypad;
use crate::screen::{Mode, Screen};
use crate::Emulator;

use super::ExecuteErr;

impl<S, K> Emulator<S, K>
where
    S: Screen,
    K: Keypad,
{
    /// The draw instruction. Registers `x`/`y` hold the sprite origin; the
    /// sprite bytes come from memory at I. VF starts at 0 and latches 1 on
    /// the first collision; the screen is committed once at the end.
    pub(super) fn draw_sprite(
        &mut self,
        x: Register,
        y: Register,
        rows: u8,
    ) -> Result<(), ExecuteErr> {
        let x_pos = self.v[x] as usize;
        let y_pos = self.v[y] as usize;
        self.v[0xF] = 0;

        if self.mode == Mode::Extended && rows == 0 {
            self.draw_extended(x_pos, y_pos)?;
        } else {
            self.draw_normal(x_pos, y_pos, rows as usize)?;
        }

        self.screen.commit();
        Ok(())
    }

    /// An 8-pixel-wide sprite of `rows` bytes, one byte per row.
    fn draw_normal(&mut self, x_pos: usize, y_pos: usize, rows: usize) -> Result<(), ExecuteErr> {
        for row in 0..rows {
            let bits = self.mem_byte(self.index.wrapping_add(row as u16))?;

            for col in 0..8 {
                self.blit_pixel(x_pos + col, y_pos + row, (bits >> (7 - col)) & 0x1);
            }
        }

        Ok(())
    }

    /// A 16x16 sprite: 16 rows of two bytes, left half first.
    fn draw_extended(&mut self, x_pos: usize, y_pos: usize) -> Result<(), ExecuteErr> {
        for row in 0..16 {
            for half in 0..2 {
                let addr = self.index.wrapping_add((row * 2 + half) as u16);
                let bits = self.mem_byte(addr)?;

                for col in 0..8 {
                    self.blit_pixel(
                        x_pos + half * 8 + col,
                        y_pos + row,
                        (bits >> (7 - col)) & 0x1,
                    );
                }
            }
        }

        Ok(())
    }

    /// XORs one sprite bit onto the screen. Coordinates wrap toroidally
    /// per pixel; a set bit landing on a lit pixel turns it off and flags
    /// the collision in VF.
    fn blit_pixel(&mut self, x: usize, y: usize, bit: u8) {
        let x = x % self.screen.width();
        let y = y % self.screen.height();

        let current = self.screen.pixel(x, y);
        if bit == 1 && current == 1 {
            self.v[0xF] |= 1;
        }

        self.screen.set_pixel(x, y, bit ^ current);
    }
}
