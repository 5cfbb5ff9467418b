use log::debug;

use crate::error::SinkError;

const INDEX_MARKER: &str = "index:";
const NAME_MARKER: &str = "name:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sink {
    pub index: u32,
    pub name: String,
    pub is_default: bool,
}

impl Sink {
    pub fn display_line(&self) -> String {
        let default_mark = if self.is_default { "*" } else { " " };
        format!("{default_mark} {}. {}", self.index, self.name)
    }

    /// Case-insensitive substring match of `token` against the sink name.
    pub fn matches(&self, token: &str) -> bool {
        self.name.to_lowercase().contains(&token.to_lowercase())
    }
}

/// Keeps only the `index:` and `name:` lines of a `pacmd list-sinks` dump.
pub fn filter_listing(raw: &str) -> String {
    raw.lines()
        .filter(|line| line.contains(INDEX_MARKER) || line.contains(NAME_MARKER))
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pairs every `index:` line with the `name:` line that directly follows it.
///
/// A `name:` line without a pending index is skipped. An `index:` line that is
/// not followed by a `name:` line is replaced by the next `index:` line.
pub fn parse_sinks(listing: &str) -> Result<Vec<Sink>, SinkError> {
    let mut sinks = Vec::new();
    let mut pending: Option<(u32, bool)> = None;

    for raw in listing.lines() {
        let line = raw.trim();
        let (is_default, body) = match line.strip_prefix('*') {
            Some(rest) => (true, rest.trim_start()),
            None => (false, line),
        };

        if let Some(rest) = body.strip_prefix(INDEX_MARKER) {
            let index = rest
                .trim()
                .parse::<u32>()
                .map_err(|_| SinkError::MalformedIndex {
                    line: raw.to_string(),
                })?;
            pending = Some((index, is_default));
            continue;
        }

        if let Some(rest) = body.strip_prefix(NAME_MARKER) {
            match pending.take() {
                Some((index, is_default)) => sinks.push(Sink {
                    index,
                    name: strip_angle_brackets(rest.trim()).to_string(),
                    is_default,
                }),
                None => debug!("skipping name line without a preceding index: {line}"),
            }
        }
    }

    Ok(sinks)
}

pub fn find_sink<'a>(sinks: &'a [Sink], token: &str) -> Option<&'a Sink> {
    sinks.iter().find(|sink| sink.matches(token))
}

fn strip_angle_brackets(name: &str) -> &str {
    name.strip_prefix('<')
        .and_then(|inner| inner.strip_suffix('>'))
        .unwrap_or(name)
}
