use std::fmt;

use rand::RngCore;

use libchip8isa::Register;

use crate::keypad::Keypad;
use crate::memory::{LoadError, Memory};
use crate::screen::{Mode, Screen};

pub mod execute;
pub mod keypad;
pub mod memory;
pub mod screen;

pub const REGISTER_COUNT: usize = 16;

pub const STACK_POINTER_START: u16 = 0x52;
pub const PROGRAM_COUNTER_START: u16 = 0x200;

/// Whether the interpreter is free to run or parked on a key wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    /// Parked by the key-wait instruction; the pressed key's index goes
    /// into register `dest` when the host reports one.
    AwaitingKey { dest: Register },
}

/// The CHIP-8 interpreter: registers, memory, stack, timers and mode, plus
/// the screen and keypad collaborators it draws on and reads keys from.
///
/// The host drives it with [`execute_instruction`](Self::execute_instruction)
/// per operation and [`tick_timers`](Self::tick_timers) at a fixed rate
/// (conventionally 60 Hz), the two deliberately decoupled.
pub struct Emulator<S, K> {
    pub v: [u8; REGISTER_COUNT],
    pub rpl: [u8; REGISTER_COUNT],
    pub index: u16,
    pub sp: u16,
    pub pc: u16,
    pub delay_timer: u8,
    pub sound_timer: u8,
    /// The operand most recently dispatched, overwritten every cycle.
    pub operand: u16,
    pub mode: Mode,
    pub run_state: RunState,
    pub memory: Memory,
    pub screen: S,
    pub keypad: K,
    rng: Box<dyn RngCore>,
}

impl<S, K> Emulator<S, K>
where
    S: Screen,
    K: Keypad,
{
    /// Builds a zeroed machine with the font sprites at address 0.
    pub fn new(screen: S, keypad: K) -> Self {
        let mut memory = Memory::new();
        memory
            .load(&FONT_SPRITES, 0)
            .expect("font sprites fit below the program area");

        let mut emulator = Self {
            v: [0; REGISTER_COUNT],
            rpl: [0; REGISTER_COUNT],
            index: 0,
            sp: 0,
            pc: 0,
            delay_timer: 0,
            sound_timer: 0,
            operand: 0,
            mode: Mode::Normal,
            run_state: RunState::Running,
            memory,
            screen,
            keypad,
            rng: Box::new(rand::thread_rng()),
        };
        emulator.reset();
        emulator
    }

    pub fn with_rng(mut self, rng: Box<dyn RngCore>) -> Self {
        self.rng = rng;
        self
    }

    /// Blanks every register and restores the SP/PC start values.
    /// Memory contents and the current display mode are left alone.
    pub fn reset(&mut self) {
        self.v = [0; REGISTER_COUNT];
        self.rpl = [0; REGISTER_COUNT];
        self.index = 0;
        self.sp = STACK_POINTER_START;
        self.pc = PROGRAM_COUNTER_START;
        self.delay_timer = 0;
        self.sound_timer = 0;
        self.run_state = RunState::Running;
    }

    /// Copies a ROM blob into memory at `offset` (0x200 for programs by
    /// convention, 0 for font data). The blob has no framing; its length
    /// is the load length.
    pub fn load_rom(&mut self, data: &[u8], offset: u16) -> Result<(), LoadError> {
        self.memory.load(data, offset)
    }

    /// One external timer tick: each nonzero timer drops by one, clamped
    /// at zero. Held while the interpreter is awaiting a key, so a parked
    /// machine observes no timer progress.
    pub fn tick_timers(&mut self) {
        if let RunState::AwaitingKey { .. } = self.run_state {
            return;
        }

        if self.delay_timer != 0 {
            self.delay_timer -= 1;
        }
        if self.sound_timer != 0 {
            self.sound_timer -= 1;
        }
    }

    /// Reports a key-press event. Resumes a parked interpreter, storing
    /// the key index in the register the key-wait instruction named.
    pub fn key_press(&mut self, key: u8) {
        if let RunState::AwaitingKey { dest } = self.run_state {
            self.v[dest] = key;
            self.run_state = RunState::Running;
        }
    }

    /// Cancellation hook out of the key wait; the destination register is
    /// left untouched.
    pub fn cancel_key_wait(&mut self) {
        self.run_state = RunState::Running;
    }
}

impl<S, K> fmt::Display for Emulator<S, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PC: {:04X}  OP: {:04X}", self.pc, self.operand)?;
        for (index, value) in self.v.iter().enumerate() {
            writeln!(f, "V{:X}: {:02X}", index, value)?;
        }
        writeln!(f, "I: {:04X}", self.index)
    }
}

/// The 4x5 font glyphs for digits 0-F, loaded at address 0.
pub const FONT_SPRITES: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
