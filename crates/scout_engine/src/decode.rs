use chardetng::EncodingDetector;
use encoding_rs::Encoding;

/// Decode raw response bytes into UTF-8 using: BOM -> Content-Type charset
/// -> chardetng fallback.
///
/// The decode is lossy on purpose: a page with a few malformed byte
/// sequences degrades to replacement characters instead of failing the
/// whole fetch, and a garbled page simply screens as a non-match further
/// down the pipeline. Legacy windows-1251 content still decodes correctly
/// through the charset header or detection.
pub fn decode_markup(bytes: &[u8], content_type: Option<&str>) -> String {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return decode_with(bytes, encoding);
    }

    if let Some(label) = content_type.and_then(extract_charset) {
        if let Some(enc) = Encoding::for_label(label.as_bytes()) {
            return decode_with(bytes, enc);
        }
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let enc = detector.guess(None, true);
    decode_with(bytes, enc)
}

fn extract_charset(content_type: &str) -> Option<String> {
    content_type
        .split(';')
        .filter_map(|part| {
            let part = part.trim();
            part.strip_prefix("charset=")
                .or_else(|| part.strip_prefix("Charset="))
                .or_else(|| part.strip_prefix("CHARSET="))
                .map(|v| v.trim_matches([' ', '"', '\''].as_ref()))
        })
        .next()
        .map(|s| s.to_string())
}

fn decode_with(bytes: &[u8], enc: &'static Encoding) -> String {
    let (text, _, _) = enc.decode(bytes);
    text.into_owned()
}
