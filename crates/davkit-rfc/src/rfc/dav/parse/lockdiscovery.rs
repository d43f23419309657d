//! `DAV:lockdiscovery` property parsing.

use quick_xml::Reader;
use quick_xml::events::Event;

use super::error::{ParseError, ParseResult};
use crate::rfc::dav::core::{ActiveLock, Depth, LockScope};

/// Text collected for one `activelock` element before it is closed.
#[derive(Default)]
struct PendingLock {
    owner: String,
    lockroot: String,
    locktoken: String,
    depth: String,
    timeout: String,
    scope: Option<LockScope>,
}

impl PendingLock {
    fn push_text(&mut self, path: &[String], text: &str) {
        let names: Vec<&str> = path.iter().map(String::as_str).collect();
        match names.as_slice() {
            ["owner", ..] => self.owner.push_str(text),
            ["lockroot", "href"] => self.lockroot.push_str(text),
            ["locktoken", "href"] => self.locktoken.push_str(text),
            ["depth"] => self.depth.push_str(text),
            ["timeout"] => self.timeout.push_str(text),
            _ => {}
        }
    }

    fn mark_scope(&mut self, path: &[String], name: &str) {
        if path.last().map(String::as_str) != Some("lockscope") {
            return;
        }
        match name {
            "exclusive" => self.scope = Some(LockScope::Exclusive),
            "shared" => self.scope = Some(LockScope::Shared),
            _ => {}
        }
    }

    fn finish(self) -> ActiveLock {
        let timeout = self.timeout.trim();
        ActiveLock {
            owner: self.owner.trim().to_string(),
            lockroot: self.lockroot.trim().to_string(),
            locktoken: self.locktoken.trim().to_string(),
            scope: self.scope,
            depth: Depth::from_header(&self.depth),
            timeout: (!timeout.is_empty()).then(|| timeout.to_string()),
        }
    }
}

/// Parses every `activelock` found in a PROPFIND multistatus body.
///
/// ## Summary
/// Reads the `DAV:lockdiscovery` property of the response and returns the
/// active locks in document order. A body without locks (or an empty body)
/// yields an empty list.
///
/// ## Errors
/// Returns an error if the XML is malformed or contains an invalid entity.
#[tracing::instrument(skip(xml), fields(xml_len = xml.len()))]
pub fn parse_lock_discovery(xml: &[u8]) -> ParseResult<Vec<ActiveLock>> {
    if xml.iter().all(u8::is_ascii_whitespace) {
        tracing::debug!("Empty lockdiscovery body");
        return Ok(Vec::new());
    }

    let mut reader = Reader::from_reader(xml);

    let mut buf = Vec::new();
    let mut locks = Vec::new();
    let mut current: Option<PendingLock> = None;
    // Element names below the current `activelock`
    let mut path: Vec<String> = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let local_name = std::str::from_utf8(e.local_name().as_ref())?.to_owned();

                if local_name == "activelock" {
                    current = Some(PendingLock::default());
                    path.clear();
                } else if let Some(lock) = current.as_mut() {
                    lock.mark_scope(&path, &local_name);
                    path.push(local_name);
                } else {
                    // Outside of any lock
                }
            }
            Ok(Event::Empty(ref e)) => {
                if let Some(lock) = current.as_mut() {
                    let local_name = std::str::from_utf8(e.local_name().as_ref())?.to_owned();
                    lock.mark_scope(&path, &local_name);
                }
            }
            Ok(Event::Text(ref e)) => {
                if let Some(lock) = current.as_mut() {
                    let decoded = reader.decoder().decode(e.as_ref())?;
                    lock.push_text(&path, &decoded);
                }
            }
            Ok(Event::CData(ref e)) => {
                if let Some(lock) = current.as_mut() {
                    let decoded = reader.decoder().decode(e.as_ref())?;
                    lock.push_text(&path, &decoded);
                }
            }
            Ok(Event::GeneralRef(ref e)) => {
                if let Some(lock) = current.as_mut() {
                    let name = reader.decoder().decode(e.as_ref())?;
                    lock.push_text(&path, &resolve_entity(&name)?);
                }
            }
            Ok(Event::End(ref e)) => {
                let local_name_bytes = e.local_name();
                let local_name = std::str::from_utf8(local_name_bytes.as_ref())?;

                if local_name == "activelock" {
                    if let Some(lock) = current.take() {
                        locks.push(lock.finish());
                    }
                } else if current.is_some() {
                    path.pop();
                } else {
                    // Outside of any lock
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::xml(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    tracing::debug!(count = locks.len(), "Parsed active locks");
    Ok(locks)
}

/// Resolves a character or predefined entity reference (`&#35;`, `&amp;`).
fn resolve_entity(name: &str) -> ParseResult<String> {
    if let Some(code) = name.strip_prefix('#') {
        let value = if let Some(hex) = code.strip_prefix(['x', 'X']) {
            u32::from_str_radix(hex, 16)
        } else {
            code.parse::<u32>()
        }
        .map_err(|err| {
            tracing::warn!(error = ?err, reference = %name, "Invalid character reference");
            ParseError::invalid_value(format!("invalid character reference &{name};"))
        })?;

        return char::from_u32(value)
            .map(String::from)
            .ok_or_else(|| ParseError::invalid_value(format!("invalid character &{name};")));
    }

    quick_xml::escape::resolve_predefined_entity(name)
        .map(str::to_string)
        .ok_or_else(|| ParseError::invalid_value(format!("unknown entity &{name};")))
}
