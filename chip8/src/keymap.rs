use minifb::Key;

/// The fixed physical-to-virtual key table: numpad digits for keys 0-9,
/// the A-F letter keys for the rest.
pub fn key_index(key: Key) -> Option<u8> {
    match key {
        Key::NumPad0 => Some(0x0),
        Key::NumPad1 => Some(0x1),
        Key::NumPad2 => Some(0x2),
        Key::NumPad3 => Some(0x3),
        Key::NumPad4 => Some(0x4),
        Key::NumPad5 => Some(0x5),
        Key::NumPad6 => Some(0x6),
        Key::NumPad7 => Some(0x7),
        Key::NumPad8 => Some(0x8),
        Key::NumPad9 => Some(0x9),
        Key::A => Some(0xA),
        Key::B => Some(0xB),
        Key::C => Some(0xC),
        Key::D => Some(0xD),
        Key::E => Some(0xE),
        Key::F => Some(0xF),
        _ => None,
    }
}
