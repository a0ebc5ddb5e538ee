use super::*;

fn decode(word: u16) -> Instruction {
    Instruction::decode(Operand(word)).expect("operand should decode")
}

#[test]
fn screen_control_group() {
    assert_eq!(decode(0x00E0), Instruction::Clear);
    assert_eq!(decode(0x00EE), Instruction::Return);
    assert_eq!(decode(0x00C4), Instruction::ScrollDown(4));
    assert_eq!(decode(0x00FB), Instruction::ScrollRight);
    assert_eq!(decode(0x00FC), Instruction::ScrollLeft);
    assert_eq!(decode(0x00FE), Instruction::SetNormal);
    assert_eq!(decode(0x00FF), Instruction::SetExtended);
}

#[test]
fn unmatched_zero_group_is_the_legacy_noop() {
    assert_eq!(decode(0x0123), Instruction::Sys);
    assert_eq!(decode(0x00FD), Instruction::Sys);
    assert_eq!(decode(0x0000), Instruction::Sys);
}

#[test]
fn control_flow_group() {
    assert_eq!(decode(0x1ABC), Instruction::Jump(0xABC));
    assert_eq!(decode(0x2200), Instruction::Call(0x200));
    assert_eq!(decode(0x3A7F), Instruction::SkipEqImm(0xA, 0x7F));
    assert_eq!(decode(0x4A7F), Instruction::SkipNeImm(0xA, 0x7F));
    assert_eq!(decode(0x5120), Instruction::SkipEqReg(1, 2));
    assert_eq!(decode(0x9120), Instruction::SkipNeReg(1, 2));
    assert_eq!(decode(0xBABC), Instruction::JumpIndex(0xABC));
}

#[test]
fn register_skips_ignore_the_low_nibble() {
    assert_eq!(decode(0x5127), Instruction::SkipEqReg(1, 2));
    assert_eq!(decode(0x912F), Instruction::SkipNeReg(1, 2));
}

#[test]
fn arithmetic_group() {
    assert_eq!(decode(0x8120), Instruction::Move(1, 2));
    assert_eq!(decode(0x8121), Instruction::Or(1, 2));
    assert_eq!(decode(0x8122), Instruction::And(1, 2));
    assert_eq!(decode(0x8123), Instruction::Xor(1, 2));
    assert_eq!(decode(0x8124), Instruction::Add(1, 2));
    assert_eq!(decode(0x8125), Instruction::Sub(1, 2));
    assert_eq!(decode(0x8126), Instruction::ShiftRight(1));
    assert_eq!(decode(0x8127), Instruction::SubReverse(1, 2));
    assert_eq!(decode(0x812E), Instruction::ShiftLeft(1));
}

#[test]
fn misc_group() {
    assert_eq!(decode(0x6AFF), Instruction::LoadImm(0xA, 0xFF));
    assert_eq!(decode(0x7A01), Instruction::AddImm(0xA, 0x01));
    assert_eq!(decode(0xA123), Instruction::LoadIndex(0x123));
    assert_eq!(decode(0xC3AB), Instruction::Random(3, 0xAB));
    assert_eq!(decode(0xD125), Instruction::Draw(1, 2, 5));
    assert_eq!(decode(0xE39E), Instruction::SkipKeyDown(3));
    assert_eq!(decode(0xE3A1), Instruction::SkipKeyUp(3));
    assert_eq!(decode(0xF107), Instruction::ReadDelay(1));
    assert_eq!(decode(0xF10A), Instruction::WaitKey(1));
    assert_eq!(decode(0xF115), Instruction::SetDelay(1));
    assert_eq!(decode(0xF118), Instruction::SetSound(1));
    assert_eq!(decode(0xF11E), Instruction::AddIndex(1));
    assert_eq!(decode(0xF129), Instruction::LoadSprite(1));
    assert_eq!(decode(0xF130), Instruction::LoadExtSprite(1));
    assert_eq!(decode(0xF133), Instruction::StoreBcd(1));
    assert_eq!(decode(0xF455), Instruction::StoreRegs(4));
    assert_eq!(decode(0xF465), Instruction::LoadRegs(4));
    assert_eq!(decode(0xF475), Instruction::StoreRpl(4));
    assert_eq!(decode(0xF485), Instruction::LoadRpl(4));
}

#[test]
fn unknown_sub_keys_carry_the_full_operand() {
    for word in [0x8ABF, 0x8AB8, 0xE100, 0xE1FF, 0xF000, 0xF1FF] {
        assert_eq!(
            Instruction::decode(Operand(word)),
            Err(DecodeError::UnknownInstruction(word)),
            "{:04X}",
            word
        );
    }
}

#[test]
fn mnemonic_formatting() {
    assert_eq!(decode(0x1ABC).to_string(), "JUMP ABC");
    assert_eq!(decode(0x3A7F).to_string(), "SKE VA, 7F");
    assert_eq!(decode(0x8124).to_string(), "ADD V1, V2");
    assert_eq!(decode(0xD125).to_string(), "DRAW V1, V2, 5");
    assert_eq!(decode(0xF10A).to_string(), "KEYD V1");
    assert_eq!(decode(0xF465).to_string(), "LOAD V4, [I]");
}
