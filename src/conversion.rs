//! Internal value conversions.
//!
//! Helpers for timestamp rescaling and for rendering raw numbers in the
//! human-readable `/String` forms that accompany numeric parameters.

use ffmpeg_next::Rational;

/// Rescale a PTS value from a time base to seconds.
pub fn pts_to_seconds(pts: i64, time_base: Rational) -> f64 {
    pts as f64 * time_base.numerator() as f64 / time_base.denominator() as f64
}

/// Convert a rational to `f64`, or `None` when it is zero or undefined.
pub fn rational_to_f64(value: Rational) -> Option<f64> {
    if value.numerator() == 0 || value.denominator() == 0 {
        return None;
    }
    Some(value.numerator() as f64 / value.denominator() as f64)
}

/// Whole milliseconds, as reported by `Duration`.
pub fn milliseconds(seconds: f64) -> String {
    format!("{}", (seconds * 1000.0).round() as u64)
}

/// Two most significant units, e.g. `"1 h 2 min"` or `"5 s 5 ms"`.
pub fn duration_string(seconds: f64) -> String {
    let total_ms = (seconds * 1000.0).round() as u64;
    let parts = [
        (total_ms / 3_600_000, "h"),
        (total_ms / 60_000 % 60, "min"),
        (total_ms / 1000 % 60, "s"),
        (total_ms % 1000, "ms"),
    ];

    let Some(first) = parts.iter().position(|(amount, _)| *amount > 0) else {
        return "0 ms".to_string();
    };

    let mut rendered = format!("{} {}", parts[first].0, parts[first].1);
    if let Some((amount, unit)) = parts.get(first + 1) {
        if *amount > 0 {
            rendered.push_str(&format!(" {amount} {unit}"));
        }
    }
    rendered
}

/// `HH:MM:SS.mmm`.
pub fn duration_string3(seconds: f64) -> String {
    let total_ms = (seconds * 1000.0).round() as u64;
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        total_ms / 3_600_000,
        total_ms / 60_000 % 60,
        total_ms / 1000 % 60,
        total_ms % 1000
    )
}

/// Bit rate with unit, e.g. `"128 kb/s"` or `"12.5 Mb/s"`.
pub fn bit_rate_string(bits_per_second: u64) -> String {
    if bits_per_second < 1_000_000 {
        let kilobits = (bits_per_second as f64 / 1000.0).round() as u64;
        format!("{} kb/s", group_thousands(kilobits))
    } else {
        format!("{:.1} Mb/s", bits_per_second as f64 / 1_000_000.0)
    }
}

/// Binary-prefixed size with three significant digits, e.g. `"1.50 KiB"`.
pub fn file_size_string(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KiB", "MiB", "GiB", "TiB"];

    if bytes < 1024 {
        return format!("{bytes} Bytes");
    }

    let mut value = bytes as f64;
    let mut unit = UNITS[0];
    for candidate in UNITS {
        value /= 1024.0;
        unit = candidate;
        if value < 1024.0 {
            break;
        }
    }

    if value < 10.0 {
        format!("{value:.2} {unit}")
    } else if value < 100.0 {
        format!("{value:.1} {unit}")
    } else {
        format!("{value:.0} {unit}")
    }
}

/// Sampling rate, in kHz when it is a round multiple of 100 Hz.
pub fn sampling_rate_string(hertz: u32) -> String {
    if hertz >= 1000 && hertz % 100 == 0 {
        format!("{:.1} kHz", hertz as f64 / 1000.0)
    } else {
        format!("{} Hz", group_thousands(u64::from(hertz)))
    }
}

/// Frame rate with three decimals.
pub fn frame_rate_string(frames_per_second: f64) -> String {
    format!("{frames_per_second:.3} FPS")
}

/// Pixel count with grouped thousands, e.g. `"1 920 pixels"`.
pub fn pixels_string(pixels: u32) -> String {
    format!("{} pixels", group_thousands(u64::from(pixels)))
}

/// `"1 channel"` or `"N channels"`.
pub fn channels_string(channels: u16) -> String {
    if channels == 1 {
        "1 channel".to_string()
    } else {
        format!("{channels} channels")
    }
}

/// Aspect ratio as `"W:H"` when it reduces to small terms, else `"X.XXX:1"`.
pub fn aspect_ratio_string(width: u32, height: u32) -> String {
    if width == 0 || height == 0 {
        return String::new();
    }
    let divisor = greatest_common_divisor(width, height);
    let (reduced_width, reduced_height) = (width / divisor, height / divisor);
    if reduced_width <= 21 && reduced_height <= 21 {
        format!("{reduced_width}:{reduced_height}")
    } else {
        format!("{:.3}:1", width as f64 / height as f64)
    }
}

/// Three-decimal ratio.
pub fn ratio(value: f64) -> String {
    format!("{value:.3}")
}

/// `"Yes"` / `"No"`.
pub fn yes_no(flag: bool) -> String {
    if flag { "Yes" } else { "No" }.to_string()
}

/// Decode a codec tag as a four-character code.
///
/// Printable tags are returned as text (`"avc1"`), other non-zero tags as
/// their decimal value.
pub fn codec_tag_string(tag: u32) -> String {
    if tag == 0 {
        return String::new();
    }
    let bytes = tag.to_le_bytes();
    if bytes.iter().all(|byte| byte.is_ascii_graphic() || *byte == b' ') {
        String::from_utf8_lossy(&bytes).trim().to_string()
    } else {
        tag.to_string()
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(digit);
    }
    grouped
}

fn greatest_common_divisor(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pts_rescaling() {
        assert_eq!(pts_to_seconds(90_000, Rational::new(1, 90_000)), 1.0);
        assert_eq!(rational_to_f64(Rational::new(30_000, 1001)).map(|v| v.round()), Some(30.0));
        assert_eq!(rational_to_f64(Rational::new(0, 1)), None);
        assert_eq!(rational_to_f64(Rational::new(1, 0)), None);
    }

    #[test]
    fn duration_formats() {
        assert_eq!(milliseconds(5.0054), "5005");
        assert_eq!(duration_string(0.0), "0 ms");
        assert_eq!(duration_string(5.005), "5 s 5 ms");
        assert_eq!(duration_string(62.0), "1 min 2 s");
        assert_eq!(duration_string(3720.5), "1 h 2 min");
        assert_eq!(duration_string(3600.0), "1 h");
        assert_eq!(duration_string3(3723.004), "01:02:03.004");
    }

    #[test]
    fn bit_rates() {
        assert_eq!(bit_rate_string(128_000), "128 kb/s");
        assert_eq!(bit_rate_string(12_500_000), "12.5 Mb/s");
    }

    #[test]
    fn file_sizes() {
        assert_eq!(file_size_string(512), "512 Bytes");
        assert_eq!(file_size_string(1536), "1.50 KiB");
        assert_eq!(file_size_string(50 * 1024 * 1024), "50.0 MiB");
        assert_eq!(file_size_string(300 * 1024 * 1024 * 1024), "300 GiB");
    }

    #[test]
    fn sampling_rates_and_pixels() {
        assert_eq!(sampling_rate_string(48_000), "48.0 kHz");
        assert_eq!(sampling_rate_string(44_100), "44.1 kHz");
        assert_eq!(sampling_rate_string(22_050), "22 050 Hz");
        assert_eq!(pixels_string(1920), "1 920 pixels");
        assert_eq!(pixels_string(720), "720 pixels");
        assert_eq!(channels_string(1), "1 channel");
        assert_eq!(channels_string(6), "6 channels");
    }

    #[test]
    fn aspect_ratios() {
        assert_eq!(aspect_ratio_string(1920, 1080), "16:9");
        assert_eq!(aspect_ratio_string(640, 480), "4:3");
        assert_eq!(aspect_ratio_string(1998, 1080), "1.850:1");
        assert_eq!(aspect_ratio_string(0, 1080), "");
    }

    #[test]
    fn codec_tags() {
        assert_eq!(codec_tag_string(u32::from_le_bytes(*b"avc1")), "avc1");
        assert_eq!(codec_tag_string(1), "1");
        assert_eq!(codec_tag_string(0), "");
    }
}
