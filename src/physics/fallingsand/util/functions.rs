/// Clamps a widened color channel back into a byte
pub fn clamp_color_component(value: i32) -> u8 {
    value.clamp(0, u8::MAX as i32) as u8
}

/// Offsets a color channel, saturating at black and white
pub fn offset_color_component(base: u8, offset: i16) -> u8 {
    clamp_color_component(i32::from(base) + i32::from(offset))
}
