use thiserror::Error;

use libchip8isa::bytes_to_word;
use libchip8isa::instruction::{DecodeError, Instruction};
use libchip8isa::operand::Operand;

use crate::keypad::Keypad;
use crate::screen::Screen;
use crate::{Emulator, RunState};

mod draw;
mod parsed;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteOk {
    /// The operand that was dispatched, observable for the driver's
    /// exit-sentinel convention.
    Executed(u16),
    /// Parked on the key-wait instruction; nothing was fetched.
    AwaitingKey,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteErr {
    #[error("Illegal instruction ({0})")]
    IllegalInstruction(DecodeError),

    #[error("Memory access out of bounds at {0:#06X}")]
    OutOfBounds(u16),
}

impl<S, K> Emulator<S, K>
where
    S: Screen,
    K: Keypad,
{
    /// Fetches the big-endian operand at PC, advances PC by 2, and
    /// dispatches. While the interpreter awaits a key this makes no
    /// progress and reports [`ExecuteOk::AwaitingKey`].
    pub fn execute_instruction(&mut self) -> Result<ExecuteOk, ExecuteErr> {
        if let RunState::AwaitingKey { .. } = self.run_state {
            return Ok(ExecuteOk::AwaitingKey);
        }

        let operand = self.fetch_operand()?;
        self.execute_operand(operand)
    }

    /// Dispatches an operand directly, bypassing the memory fetch. PC only
    /// moves if the operation itself assigns it.
    pub fn execute_operand(&mut self, operand: u16) -> Result<ExecuteOk, ExecuteErr> {
        self.operand = operand;

        let instruction =
            Instruction::decode(Operand(operand)).map_err(ExecuteErr::IllegalInstruction)?;
        log::trace!("{:04X}: {}", operand, instruction);

        self.execute_parsed_instruction(instruction)?;
        Ok(ExecuteOk::Executed(operand))
    }

    fn fetch_operand(&mut self) -> Result<u16, ExecuteErr> {
        let high = self.mem_byte(self.pc)?;
        let low = self.mem_byte(self.pc.wrapping_add(1))?;
        self.pc = self.pc.wrapping_add(2);

        Ok(bytes_to_word([high, low]))
    }

    fn mem_byte(&self, addr: u16) -> Result<u8, ExecuteErr> {
        self.memory.byte(addr).ok_or(ExecuteErr::OutOfBounds(addr))
    }

    fn mem_byte_mut(&mut self, addr: u16) -> Result<&mut u8, ExecuteErr> {
        self.memory
            .byte_mut(addr)
            .ok_or(ExecuteErr::OutOfBounds(addr))
    }
}
