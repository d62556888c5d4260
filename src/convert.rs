/// Gets the largest positive integer sample value for a signed PCM bit depth.
pub fn max_value(bits_per_sample: u16) -> Option<i32> {
    match bits_per_sample {
        8 => Some(0x7f),
        16 => Some(0x7fff),
        24 => Some(0x7fffff),
        32 => Some(0x7fffffff),
        _ => None,
    }
}

/// Converts a normalized sample into a signed integer sample with full scale `max_value`.
/// Samples outside -1.0 to 1.0 are clipped.
pub fn quantize(sample: f32, max_value: i32) -> i32 {
    let scaled = f64::from(sample.clamp(-1.0, 1.0)) * f64::from(max_value);
    scaled.round() as i32
}

/// Converts a signed integer sample with full scale `max_value` into a normalized sample.
pub fn dequantize(sample: i32, max_value: i32) -> f32 {
    (f64::from(sample) / f64::from(max_value)) as f32
}
