use crate::domain::response::{Amount, OrderResponse};
use crate::error::{GatewayError, Result};
use quick_xml::Reader;
use quick_xml::events::Event;
use std::collections::BTreeMap;

/// Root element of every gateway reply.
pub const ROOT_ELEMENT: &str = "SmilePay";

/// Children of the root, keyed by tag name, with their text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDocument {
    pub root: String,
    pub fields: BTreeMap<String, String>,
}

/// Decodes gateway XML replies into [`OrderResponse`].
///
/// Decoding runs in three separate passes: a well-formedness check, a generic
/// parse where every value stays text, and a typed conversion that coerces
/// `Amount` and nothing else.
#[derive(Debug, Default, Clone, Copy)]
pub struct ResponseParser;

impl ResponseParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, xml: &str) -> Result<OrderResponse> {
        if let Err(e) = validate(xml) {
            tracing::error!(error = %e, "invalid XML response format");
            return Err(e);
        }
        parse_document(xml)?.into_order_response()
    }
}

fn reader(xml: &str) -> Reader<&[u8]> {
    let mut reader = Reader::from_reader(xml.as_bytes());
    let config = reader.config_mut();
    config.trim_text(true);
    config.check_end_names = true;
    reader
}

fn malformed(reason: impl std::fmt::Display) -> GatewayError {
    GatewayError::MalformedResponse(reason.to_string())
}

/// Checks a tag name against the XML `Name` production.
fn is_xml_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_' || first == ':')
        && chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | ':' | '-' | '.'))
}

fn checked_name(raw: &[u8]) -> Result<String> {
    let name = std::str::from_utf8(raw).map_err(malformed)?;
    if is_xml_name(name) {
        Ok(name.to_string())
    } else {
        Err(malformed(format!("invalid tag name {name:?}")))
    }
}

/// Checks that `xml` is a well-formed document with exactly one root element.
pub fn validate(xml: &str) -> Result<()> {
    let mut reader = reader(xml);
    let mut buf = Vec::new();
    let mut open: Vec<String> = Vec::new();
    let mut roots = 0usize;
    let mut seen_markup = false;

    loop {
        let event = reader.read_event_into(&mut buf).map_err(malformed)?;
        let is_blank_text =
            matches!(&event, Event::Text(text) if text.iter().all(u8::is_ascii_whitespace));
        match event {
            Event::Decl(_) if seen_markup => {
                return Err(malformed("XML declaration allowed only at the start"));
            }
            Event::Start(start) => {
                if open.is_empty() {
                    roots += 1;
                }
                let name = checked_name(start.name().as_ref())?;
                for attr in start.attributes() {
                    attr.map_err(malformed)?;
                }
                open.push(name);
            }
            Event::Empty(start) => {
                if open.is_empty() {
                    roots += 1;
                }
                checked_name(start.name().as_ref())?;
                for attr in start.attributes() {
                    attr.map_err(malformed)?;
                }
            }
            Event::End(end) => {
                let name = checked_name(end.name().as_ref())?;
                match open.pop() {
                    Some(expected) if expected == name => {}
                    Some(expected) => {
                        return Err(malformed(format!(
                            "expected </{expected}>, found </{name}>"
                        )));
                    }
                    None => return Err(malformed(format!("unexpected </{name}>"))),
                }
            }
            Event::Text(text) => {
                let text = text.unescape().map_err(malformed)?;
                if open.is_empty() && !text.trim().is_empty() {
                    return Err(malformed("text outside the root element"));
                }
            }
            Event::CData(_) if open.is_empty() => {
                return Err(malformed("CDATA outside the root element"));
            }
            Event::Eof => break,
            _ => {}
        }
        seen_markup |= !is_blank_text;
        buf.clear();
    }

    if let Some(unclosed) = open.last() {
        return Err(malformed(format!("unclosed element <{unclosed}>")));
    }
    match roots {
        0 => Err(malformed("document has no root element")),
        1 => Ok(()),
        _ => Err(malformed("document has more than one root element")),
    }
}

/// Parses a validated document into its root name and child text values.
///
/// Only direct children of the root become fields; the first occurrence of a
/// repeated tag wins and deeper elements are ignored.
pub fn parse_document(xml: &str) -> Result<XmlDocument> {
    let mut reader = reader(xml);
    let mut buf = Vec::new();
    let mut root = None;
    let mut fields = BTreeMap::new();
    let mut depth = 0usize;
    let mut current: Option<(String, String)> = None;

    loop {
        match reader.read_event_into(&mut buf).map_err(malformed)? {
            Event::Start(start) => {
                let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
                match depth {
                    0 => root = Some(name),
                    1 => current = Some((name, String::new())),
                    _ => {}
                }
                depth += 1;
            }
            Event::Empty(start) => {
                let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
                match depth {
                    0 => root = Some(name),
                    1 => {
                        fields.entry(name).or_insert_with(String::new);
                    }
                    _ => {}
                }
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                if depth == 1
                    && let Some((name, text)) = current.take()
                {
                    fields.entry(name).or_insert(text);
                }
            }
            Event::Text(text) if depth == 2 => {
                if let Some((_, value)) = current.as_mut() {
                    value.push_str(&text.unescape().map_err(malformed)?);
                }
            }
            Event::CData(data) if depth == 2 => {
                if let Some((_, value)) = current.as_mut() {
                    value.push_str(&String::from_utf8_lossy(&data));
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    let root = root.ok_or_else(|| malformed("document has no root element"))?;
    Ok(XmlDocument { root, fields })
}

impl XmlDocument {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Unwraps the `SmilePay` root and applies the `Amount` coercion.
    pub fn into_order_response(mut self) -> Result<OrderResponse> {
        if self.root != ROOT_ELEMENT {
            return Err(malformed(format!(
                "expected <{ROOT_ELEMENT}> root, found <{}>",
                self.root
            )));
        }

        let status = self
            .fields
            .remove("Status")
            .ok_or_else(|| malformed("missing <Status> element"))?;
        let amount = self
            .fields
            .get("Amount")
            .map_or(Amount::NotANumber, |text| Amount::parse(text));

        let mut take = |name: &str| self.fields.remove(name);
        Ok(OrderResponse {
            status,
            description: take("Desc"),
            rvg2c: take("Rvg2c"),
            dcvc: take("Dcvc"),
            smilepay_no: take("SmilePayNO"),
            order_id: take("Data_id"),
            amount,
            atm_bank_no: take("AtmBankNo"),
            atm_no: take("AtmNo"),
        })
    }
}
