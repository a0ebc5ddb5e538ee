use std::path::PathBuf;
use std::time::{Duration, Instant};
use std::{fs, thread};

use anyhow::Context;
use clap::Parser;

use libchip8::execute::ExecuteOk;
use libchip8::{Emulator, PROGRAM_COUNTER_START};

use crate::screen::WindowScreen;

mod keymap;
mod screen;

/// Operand a program executes to ask the host to quit.
const EXIT_OPERAND: u16 = 0x00FD;

/// Delay/sound timer tick interval, roughly 60 Hz.
const TIMER_INTERVAL: Duration = Duration::from_millis(17);

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// ROM file to load on startup
    rom: PathBuf,

    /// Scale factor to apply to the display
    #[arg(short, long, default_value_t = 5)]
    scale: usize,

    /// Minimum milliseconds each CPU operation takes
    #[arg(short = 'd', long = "delay", default_value_t = 1)]
    op_delay: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let rom = fs::read(&args.rom)
        .with_context(|| format!("Failed to read ROM {}", args.rom.display()))?;

    let screen = WindowScreen::new(args.scale)?;
    let mut emulator = Emulator::new(screen, [false; 16]);
    emulator.load_rom(&rom, PROGRAM_COUNTER_START)?;
    log::info!("loaded {} byte ROM from {}", rom.len(), args.rom.display());

    run(&mut emulator, args.op_delay)
}

fn run(emulator: &mut Emulator<WindowScreen, [bool; 16]>, op_delay: u64) -> anyhow::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        thread::sleep(Duration::from_millis(op_delay));

        let executed = emulator.execute_instruction()?;

        // Timers run on their own clock, decoupled from instruction pacing.
        if last_tick.elapsed() >= TIMER_INTERVAL {
            emulator.tick_timers();
            emulator.screen.refresh();
            last_tick = Instant::now();
        }

        // Feed fresh key state to the core; a newly pressed key also
        // resumes a parked key wait.
        let keys = emulator.screen.pressed_keys();
        for key in 0..16 {
            if keys[key] && !emulator.keypad[key] {
                emulator.key_press(key as u8);
            }
        }
        emulator.keypad = keys;

        if !emulator.screen.is_open() || emulator.screen.quit_requested() {
            break;
        }
        if executed == ExecuteOk::Executed(EXIT_OPERAND) {
            log::info!("exit operand executed, shutting down");
            break;
        }
    }

    Ok(())
}
