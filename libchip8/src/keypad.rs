/// The keypad collaborator: 16 virtual keys indexed 0x0-0xF. The mapping
/// from physical input to key indices lives entirely in the implementation.
///
/// The key-wait instruction does not go through this trait; it parks the
/// interpreter until the host reports a press via
/// [`Emulator::key_press`](crate::Emulator::key_press).
pub trait Keypad {
    fn is_down(&self, key: u8) -> bool;
}

/// A bare key array works as a keypad; hosts that poll their own input can
/// just flip the entries.
impl Keypad for [bool; 16] {
    fn is_down(&self, key: u8) -> bool {
        self[key as usize]
    }
}
