use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped in link targets.
///
/// Matches JavaScript's `encodeURI`: ASCII alphanumerics and
/// `; , / ? : @ & = + $ - _ . ! ~ * ' ( ) #` pass through unchanged,
/// everything else is percent-encoded. Non-ASCII characters are always
/// encoded as their UTF-8 byte sequences.
const LINK_ESCAPE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Percent-encode a virtual path for use as a markdown link target.
pub fn encode_link(path: &str) -> String {
    utf8_percent_encode(path, LINK_ESCAPE).to_string()
}
