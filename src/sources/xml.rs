//! XML file configuration source.

use super::ConfigSource;
use super::file::{check_extension, open_file};
use crate::error::{ConfigError, Result};
use crate::xml::{NodeTree, XmlEvent};
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use std::collections::HashMap;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// XML file configuration source.
///
/// The path must end in `.xml`. The document element is the root and does
/// not appear in keys; attributes become child keys of their element, and
/// repeated sibling elements are indexed:
///
/// ```xml
/// <config>
///   <servers>
///     <server name="a"><ip>10.0.0.1</ip></server>
///     <server name="b"><ip>10.0.0.2</ip></server>
///   </servers>
/// </config>
/// ```
///
/// flattens to `servers.server.0.name`, `servers.server.0.ip`,
/// `servers.server.1.name` and `servers.server.1.ip`.
#[derive(Debug, Clone)]
pub struct XmlSource {
    path: PathBuf,
}

impl XmlSource {
    /// Create an XML source for `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The configured file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigSource for XmlSource {
    fn load(&self) -> Result<HashMap<String, String>> {
        check_extension(&self.path, &["xml"], ".xml")?;
        let file = open_file(&self.path)?;

        let tokens = Tokens::new(BufReader::new(file), &self.path);
        let tree = NodeTree::try_from_events(tokens)?;
        Ok(tree.to_flat_map())
    }

    fn source_type(&self) -> &'static str {
        "xml"
    }

    fn name(&self) -> String {
        format!("xml:{}", self.path.display())
    }
}

/// Adapts the quick-xml pull reader into a stream of [`XmlEvent`]s.
///
/// Self-closing elements expand to a start and an end event. Declarations,
/// comments, processing instructions and doctypes are skipped. Reaching the
/// end of input with elements still open is a parse error.
struct Tokens<'a, R> {
    reader: Reader<R>,
    buf: Vec<u8>,
    path: &'a Path,
    /// Elements opened but not yet closed.
    depth: usize,
    pending_end: bool,
    done: bool,
}

impl<'a, R: BufRead> Tokens<'a, R> {
    fn new(input: R, path: &'a Path) -> Self {
        Self {
            reader: Reader::from_reader(input),
            buf: Vec::new(),
            path,
            depth: 0,
            pending_end: false,
            done: false,
        }
    }

    fn next_event(&mut self) -> Result<Option<XmlEvent>> {
        loop {
            self.buf.clear();
            let event = match self.reader.read_event_into(&mut self.buf) {
                Ok(event) => event,
                Err(quick_xml::Error::Io(err)) => {
                    return Err(ConfigError::FileRead {
                        path: self.path.to_path_buf(),
                        source: std::io::Error::new(err.kind(), err.to_string()),
                    });
                }
                Err(err) => return Err(parse_error(self.path, err)),
            };

            let converted = match event {
                Event::Start(start) => {
                    self.depth += 1;
                    start_event(&start, self.path)?
                }
                Event::Empty(start) => {
                    self.pending_end = true;
                    start_event(&start, self.path)?
                }
                Event::End(_) => {
                    self.depth = self.depth.saturating_sub(1);
                    XmlEvent::End
                }
                Event::Text(text) => {
                    let text = text.unescape().map_err(|e| parse_error(self.path, e))?;
                    XmlEvent::Text(text.into_owned())
                }
                Event::CData(data) => {
                    XmlEvent::Text(String::from_utf8_lossy(&data.into_inner()).into_owned())
                }
                Event::Eof if self.depth > 0 => {
                    return Err(parse_error(
                        self.path,
                        format!("{} element(s) left open at end of document", self.depth),
                    ));
                }
                Event::Eof => return Ok(None),
                _ => continue,
            };
            return Ok(Some(converted));
        }
    }
}

impl<R: BufRead> Iterator for Tokens<'_, R> {
    type Item = Result<XmlEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.pending_end {
            self.pending_end = false;
            return Some(Ok(XmlEvent::End));
        }

        match self.next_event() {
            Ok(Some(event)) => Some(Ok(event)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

fn start_event(start: &BytesStart<'_>, path: &Path) -> Result<XmlEvent> {
    let name = String::from_utf8_lossy(start.name().local_name().as_ref()).into_owned();

    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| parse_error(path, e))?;
        let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
        let value = attr.unescape_value().map_err(|e| parse_error(path, e))?;
        attributes.push((key, value.into_owned()));
    }

    Ok(XmlEvent::Start { name, attributes })
}

fn parse_error(path: &Path, err: impl std::fmt::Display) -> ConfigError {
    ConfigError::ParseError {
        format: "xml",
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}
