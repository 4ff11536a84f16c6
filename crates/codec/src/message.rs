//! Tag=value message decoding and rendering
//!
//! A message is a sequence of `tag=value` fields separated by SOH, or by `|`
//! in logs that were rewritten for readability. The first three fields are
//! always BeginString(8), BodyLength(9) and MsgType(35); the last one is
//! CheckSum(10).

use std::fmt::{Display, Formatter};

use crate::context::Context;
use crate::error::DecodeError;
use crate::field::{Field, tags};
use crate::registry;

pub const SOH: u8 = 0x01;
pub const PIPE: u8 = b'|';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    msg_type: String,
    name: &'static str,
    fields: Vec<Field>,
}

impl Message {
    pub fn decode(bytes: &[u8], ctx: &Context) -> Result<Self, DecodeError> {
        if bytes.is_empty() {
            return Err(DecodeError::Empty);
        }

        let separator = detect_separator(bytes);
        let raw = split_fields(bytes, separator)?;

        let begin_string = expect_field(&raw, 0, tags::BEGIN_STRING)?;
        let body_length = expect_field(&raw, 1, tags::BODY_LENGTH)?;
        let msg_type = expect_field(&raw, 2, tags::MSG_TYPE)?;

        let check_sum_index = raw
            .iter()
            .position(|field| field.tag == tags::CHECK_SUM)
            .ok_or(DecodeError::MissingField {
                tag: tags::CHECK_SUM,
            })?;
        if let Some(extra) = raw.get(check_sum_index + 1) {
            return Err(DecodeError::FieldAfterChecksum { tag: extra.tag });
        }
        let check_sum = &raw[check_sum_index];

        let begin_string_value = utf8(begin_string)?;
        if begin_string_value != ctx.begin_string {
            return Err(DecodeError::BeginStringMismatch {
                expected: ctx.begin_string.to_string(),
                found: begin_string_value.to_string(),
            });
        }

        if ctx.validate_body_length {
            let declared = parse_number::<usize>(body_length)?;
            let actual = check_sum.start - body_length.next;
            if declared != actual {
                return Err(DecodeError::BodyLengthMismatch { declared, actual });
            }
        }

        if ctx.validate_checksum {
            let declared = parse_check_sum(check_sum)?;
            let computed = compute_check_sum(&bytes[..check_sum.start], separator);
            if declared != computed {
                return Err(DecodeError::ChecksumMismatch { declared, computed });
            }
        }

        let msg_type = utf8(msg_type)?.to_string();
        let name = registry::display_name(&msg_type)
            .ok_or_else(|| DecodeError::UnknownMessageType(msg_type.clone()))?;

        let fields = raw
            .iter()
            .map(|field| -> Result<Field, DecodeError> {
                Ok(Field {
                    tag: field.tag,
                    value: utf8(field)?.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            msg_type,
            name,
            fields,
        })
    }

    pub fn builder(begin_string: &str, msg_type: &str) -> MessageBuilder {
        MessageBuilder {
            begin_string: begin_string.to_string(),
            msg_type: msg_type.to_string(),
            body: Vec::new(),
        }
    }

    pub fn msg_type(&self) -> &str {
        &self.msg_type
    }

    /// Registry name of the message type
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// First value for `tag`
    pub fn get(&self, tag: u32) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.tag == tag)
            .map(|field| field.value.as_str())
    }

    pub fn begin_string(&self) -> &str {
        self.get(tags::BEGIN_STRING).unwrap_or_default()
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(\"{}\")", self.name, self.msg_type)?;
        for field in &self.fields {
            write!(f, " {}", field)?;
        }
        Ok(())
    }
}

/// Encoder for well-formed messages; BodyLength and CheckSum are computed.
#[derive(Debug, Clone)]
pub struct MessageBuilder {
    begin_string: String,
    msg_type: String,
    body: Vec<(u32, String)>,
}

impl MessageBuilder {
    pub fn field(mut self, tag: u32, value: impl Into<String>) -> Self {
        self.body.push((tag, value.into()));
        self
    }

    pub fn encode(&self, separator: u8) -> Vec<u8> {
        let mut body = Vec::new();
        push_field(&mut body, tags::MSG_TYPE, &self.msg_type, separator);
        for (tag, value) in &self.body {
            push_field(&mut body, *tag, value, separator);
        }

        let mut buf = Vec::with_capacity(body.len() + 32);
        push_field(&mut buf, tags::BEGIN_STRING, &self.begin_string, separator);
        push_field(&mut buf, tags::BODY_LENGTH, &body.len().to_string(), separator);
        buf.extend_from_slice(&body);

        let check_sum = compute_check_sum(&buf, separator);
        push_field(&mut buf, tags::CHECK_SUM, &format!("{:03}", check_sum), separator);
        buf
    }
}

fn push_field(buf: &mut Vec<u8>, tag: u32, value: &str, separator: u8) {
    buf.extend_from_slice(tag.to_string().as_bytes());
    buf.push(b'=');
    buf.extend_from_slice(value.as_bytes());
    buf.push(separator);
}

/// Field as found in the buffer; `start` and `next` are byte offsets of the
/// field itself and of whatever follows its separator.
#[derive(Debug)]
struct RawField<'a> {
    tag: u32,
    value: &'a [u8],
    start: usize,
    next: usize,
}

fn detect_separator(bytes: &[u8]) -> u8 {
    bytes
        .iter()
        .copied()
        .find(|b| *b == SOH || *b == PIPE)
        .unwrap_or(SOH)
}

fn split_fields(bytes: &[u8], separator: u8) -> Result<Vec<RawField<'_>>, DecodeError> {
    let mut fields = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let end = bytes[pos..]
            .iter()
            .position(|b| *b == separator)
            .map_or(bytes.len(), |i| pos + i);
        let field = &bytes[pos..end];

        let eq = field
            .iter()
            .position(|b| *b == b'=')
            .ok_or(DecodeError::MalformedField { position: pos })?;
        let tag = parse_tag(&field[..eq])?;

        fields.push(RawField {
            tag,
            value: &field[eq + 1..],
            start: pos,
            next: (end + 1).min(bytes.len()),
        });
        pos = end + 1;
    }

    Ok(fields)
}

fn parse_tag(bytes: &[u8]) -> Result<u32, DecodeError> {
    let invalid = || DecodeError::InvalidTag {
        tag: String::from_utf8_lossy(bytes).into_owned(),
    };
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return Err(invalid());
    }
    std::str::from_utf8(bytes)
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .filter(|tag| *tag > 0)
        .ok_or_else(invalid)
}

fn expect_field<'a, 'b>(
    raw: &'a [RawField<'b>],
    index: usize,
    tag: u32,
) -> Result<&'a RawField<'b>, DecodeError> {
    match raw.get(index) {
        None => Err(DecodeError::MissingField { tag }),
        Some(field) if field.tag != tag => Err(DecodeError::UnexpectedField {
            expected: tag,
            found: field.tag,
        }),
        Some(field) => Ok(field),
    }
}

fn utf8<'a>(field: &RawField<'a>) -> Result<&'a str, DecodeError> {
    std::str::from_utf8(field.value).map_err(|_| DecodeError::NotUtf8 { tag: field.tag })
}

fn invalid_value(field: &RawField<'_>) -> DecodeError {
    DecodeError::InvalidValue {
        tag: field.tag,
        value: String::from_utf8_lossy(field.value).into_owned(),
    }
}

fn parse_number<T: std::str::FromStr>(field: &RawField<'_>) -> Result<T, DecodeError> {
    utf8(field)?.parse().map_err(|_| invalid_value(field))
}

fn parse_check_sum(field: &RawField<'_>) -> Result<u8, DecodeError> {
    if field.value.len() != 3 {
        return Err(invalid_value(field));
    }
    parse_number::<u8>(field)
}

/// Sum of all bytes modulo 256, counting the separator as SOH.
fn compute_check_sum(bytes: &[u8], separator: u8) -> u8 {
    bytes.iter().fold(0u8, |sum, b| {
        let b = if *b == separator { SOH } else { *b };
        sum.wrapping_add(b)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logon(separator: u8) -> Vec<u8> {
        Message::builder("FIX.4.4", "A")
            .field(tags::SENDER_COMP_ID, "CLIENT")
            .field(tags::TARGET_COMP_ID, "BROKER")
            .field(tags::MSG_SEQ_NUM, "1")
            .field(98, "0")
            .field(108, "30")
            .encode(separator)
    }

    #[test]
    fn test_decode_soh() {
        let msg = Message::decode(&logon(SOH), &Context::fix44()).unwrap();
        assert_eq!(msg.msg_type(), "A");
        assert_eq!(msg.name(), "Logon");
        assert_eq!(msg.begin_string(), "FIX.4.4");
        assert_eq!(msg.get(tags::SENDER_COMP_ID), Some("CLIENT"));
        assert_eq!(msg.get(108), Some("30"));
        assert_eq!(msg.fields().first().map(|f| f.tag), Some(tags::BEGIN_STRING));
        assert_eq!(msg.fields().last().map(|f| f.tag), Some(tags::CHECK_SUM));
    }

    #[test]
    fn test_decode_pipe_matches_soh() {
        let soh = Message::decode(&logon(SOH), &Context::fix44()).unwrap();
        let pipe = Message::decode(&logon(PIPE), &Context::fix44()).unwrap();
        assert_eq!(soh, pipe);
    }

    #[test]
    fn test_known_checksum() {
        // Reference heartbeat with a hand-verified checksum
        let raw = b"8=FIX.4.4|9=5|35=0|10=163|";
        let msg = Message::decode(raw, &Context::fix44()).unwrap();
        assert_eq!(msg.name(), "Heartbeat");
        assert_eq!(msg.get(tags::CHECK_SUM), Some("163"));
    }

    #[test]
    fn test_trailing_separator_is_optional() {
        let mut raw = logon(PIPE);
        raw.pop();
        assert!(Message::decode(&raw, &Context::fix44()).is_ok());
    }

    #[test]
    fn test_render() {
        let msg = Message::decode(b"8=FIX.4.4|9=5|35=0|10=163|", &Context::fix44()).unwrap();
        assert_eq!(
            msg.to_string(),
            "Heartbeat(\"0\") BeginString(8)=FIX.4.4 BodyLength(9)=5 MsgType(35)=0 CheckSum(10)=163"
        );
    }

    #[test]
    fn test_checksum_mismatch() {
        let err = Message::decode(b"8=FIX.4.4|9=5|35=0|10=000|", &Context::fix44()).unwrap_err();
        assert_eq!(
            err,
            DecodeError::ChecksumMismatch {
                declared: 0,
                computed: 163
            }
        );

        let lenient = Context::fix44().with_validation(false);
        assert!(Message::decode(b"8=FIX.4.4|9=5|35=0|10=000|", &lenient).is_ok());
    }

    #[test]
    fn test_body_length_mismatch() {
        let ctx = Context {
            validate_checksum: false,
            ..Context::fix44()
        };
        let err = Message::decode(b"8=FIX.4.4|9=7|35=0|10=000|", &ctx).unwrap_err();
        assert_eq!(
            err,
            DecodeError::BodyLengthMismatch {
                declared: 7,
                actual: 5
            }
        );
    }

    #[test]
    fn test_header_order() {
        let ctx = Context::fix44().with_validation(false);
        assert_eq!(
            Message::decode(b"9=5|8=FIX.4.4|35=0|10=000|", &ctx).unwrap_err(),
            DecodeError::UnexpectedField {
                expected: tags::BEGIN_STRING,
                found: tags::BODY_LENGTH
            }
        );
        assert_eq!(
            Message::decode(b"8=FIX.4.4|9=5|", &ctx).unwrap_err(),
            DecodeError::MissingField {
                tag: tags::MSG_TYPE
            }
        );
        assert_eq!(
            Message::decode(b"8=FIX.4.4|9=5|35=0|", &ctx).unwrap_err(),
            DecodeError::MissingField {
                tag: tags::CHECK_SUM
            }
        );
        assert_eq!(
            Message::decode(b"8=FIX.4.4|9=5|35=0|10=000|58=x|", &ctx).unwrap_err(),
            DecodeError::FieldAfterChecksum { tag: 58 }
        );
    }

    #[test]
    fn test_begin_string_mismatch() {
        let raw = Message::builder("FIX.4.2", "0").encode(SOH);
        let err = Message::decode(&raw, &Context::fix44()).unwrap_err();
        assert_eq!(
            err,
            DecodeError::BeginStringMismatch {
                expected: "FIX.4.4".to_string(),
                found: "FIX.4.2".to_string()
            }
        );
        assert!(Message::decode(&raw, &Context::fix42()).is_ok());
    }

    #[test]
    fn test_unknown_message_type() {
        let raw = Message::builder("FIX.4.4", "ZZ").encode(SOH);
        assert_eq!(
            Message::decode(&raw, &Context::fix44()).unwrap_err(),
            DecodeError::UnknownMessageType("ZZ".to_string())
        );
    }

    #[test]
    fn test_malformed_input() {
        let ctx = Context::fix44();
        assert_eq!(Message::decode(b"", &ctx).unwrap_err(), DecodeError::Empty);
        assert_eq!(
            Message::decode(b"garbage", &ctx).unwrap_err(),
            DecodeError::MalformedField { position: 0 }
        );
        assert_eq!(
            Message::decode(b"8=FIX.4.4||9=5", &ctx).unwrap_err(),
            DecodeError::MalformedField { position: 10 }
        );
        assert_eq!(
            Message::decode(b"x8=FIX.4.4|", &ctx).unwrap_err(),
            DecodeError::InvalidTag {
                tag: "x8".to_string()
            }
        );
        assert_eq!(
            Message::decode(b"8=FIX.4.4|9=abc|35=0|10=000|", &ctx).unwrap_err(),
            DecodeError::InvalidValue {
                tag: tags::BODY_LENGTH,
                value: "abc".to_string()
            }
        );
    }
}
