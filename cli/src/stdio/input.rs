use std::io::Read;

use encoding_rs::Encoding;

/// Overrides detection with any WHATWG encoding label, e.g. `gbk` or `utf-16le`.
pub const ENCODING_ENV: &str = "OSPREY_STDIN_ENCODING";

/// Reads all of stdin as a command script.
pub fn read_stdin_text() -> Result<String, std::io::Error> {
    let mut buf = Vec::new();
    std::io::stdin().read_to_end(&mut buf)?;
    let label = std::env::var(ENCODING_ENV).ok();
    Ok(decode_script(&buf, label.as_deref()))
}

/// Decodes one interactive line the same way as a script, minus the line ending.
pub fn decode_line(bytes: &[u8], label: Option<&str>) -> String {
    let mut line = decode_script(bytes, label);
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    line
}

/// Decodes piped bytes: explicit label, then BOM, then UTF-16 sniffing, then UTF-8.
/// Invalid UTF-8 falls back to lossy replacement rather than failing the script.
fn decode_script(bytes: &[u8], label: Option<&str>) -> String {
    if bytes.is_empty() {
        return String::new();
    }

    if let Some(enc) = label.and_then(|l| Encoding::for_label(l.trim().as_bytes())) {
        tracing::debug!(target: "osprey.exec", encoding = enc.name(), bytes = bytes.len(), "decoding script with override");
        return enc.decode(bytes).0.into_owned();
    }

    if let Some((enc, bom_len)) = Encoding::for_bom(bytes) {
        tracing::debug!(target: "osprey.exec", encoding = enc.name(), "decoding script by BOM");
        return enc.decode_without_bom_handling(&bytes[bom_len..]).0.into_owned();
    }

    if let Some(enc) = sniff_utf16(bytes) {
        tracing::debug!(target: "osprey.exec", encoding = enc.name(), "decoding script as BOM-less UTF-16");
        return enc.decode_without_bom_handling(bytes).0.into_owned();
    }

    String::from_utf8_lossy(bytes).into_owned()
}

/// ASCII text in UTF-16 has a zero in every other byte.
fn sniff_utf16(bytes: &[u8]) -> Option<&'static Encoding> {
    let sample = &bytes[..bytes.len().min(64)];
    if sample.len() < 2 {
        return None;
    }

    let (mut even, mut odd) = (0usize, 0usize);
    for (i, _) in sample.iter().enumerate().filter(|(_, b)| **b == 0) {
        if i % 2 == 0 {
            even += 1;
        } else {
            odd += 1;
        }
    }

    let threshold = sample.len() / 4;
    if odd > threshold && odd > even * 2 {
        Some(encoding_rs::UTF_16LE)
    } else if even > threshold && even > odd * 2 {
        Some(encoding_rs::UTF_16BE)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_utf8_script() {
        let script = "theme mario\nmario:jump 🍄\n";
        assert_eq!(decode_script(script.as_bytes(), None), script);
    }

    #[test]
    fn test_utf8_bom_is_stripped() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"help");
        assert_eq!(decode_script(&bytes, None), "help");
    }

    #[test]
    fn test_bomless_utf16le_is_sniffed() {
        let bytes: Vec<u8> = "ls\ncat a".encode_utf16().flat_map(u16::to_le_bytes).collect();
        assert_eq!(decode_script(&bytes, None), "ls\ncat a");
    }

    #[test]
    fn test_label_overrides_detection() {
        // "测试" in GBK
        let gbk = [0xB2, 0xE2, 0xCA, 0xD4];
        assert_eq!(decode_script(&gbk, Some("gbk")), "测试");
    }

    #[test]
    fn test_unknown_label_falls_back_to_detection() {
        assert_eq!(decode_script(b"stats", Some("not-an-encoding")), "stats");
    }

    #[test]
    fn test_line_ending_is_dropped() {
        assert_eq!(decode_line(b"theme mario\r\n", None), "theme mario");
        assert_eq!(decode_line(b"\xffls\n", None), "\u{FFFD}ls");
    }

    #[test]
    fn test_invalid_utf8_is_lossy() {
        assert_eq!(decode_script(&[b'l', b's', 0xFF], None), "ls\u{FFFD}");
    }
}
