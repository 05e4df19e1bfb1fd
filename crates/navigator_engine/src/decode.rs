use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};

/// A fragment body converted to UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedFragment {
    pub text: String,
    pub encoding_label: String,
    /// Some byte sequences were invalid and became U+FFFD.
    pub replaced_malformed: bool,
}

/// Decodes a fragment body the way a browser would: it never fails, and malformed
/// sequences are replaced.
///
/// The encoding comes from a byte order mark, else the `charset` parameter of
/// `content_type`, else the body itself when it is valid UTF-8, else a
/// chardetng guess.
pub fn decode_fragment(bytes: &[u8], content_type: Option<&str>) -> DecodedFragment {
    let encoding = Encoding::for_bom(bytes)
        .map(|(encoding, _)| encoding)
        .or_else(|| content_type.and_then(declared_encoding))
        .unwrap_or_else(|| sniff(bytes));

    // `decode` strips a matching BOM and substitutes malformed input.
    let (text, used, replaced_malformed) = encoding.decode(bytes);
    DecodedFragment {
        text: text.into_owned(),
        encoding_label: used.name().to_string(),
        replaced_malformed,
    }
}

fn declared_encoding(content_type: &str) -> Option<&'static Encoding> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        if !name.trim().eq_ignore_ascii_case("charset") {
            return None;
        }
        let label = value.trim().trim_matches(|c| c == '"' || c == '\'');
        Encoding::for_label(label.as_bytes())
    })
}

fn sniff(bytes: &[u8]) -> &'static Encoding {
    if std::str::from_utf8(bytes).is_ok() {
        return UTF_8;
    }
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}
