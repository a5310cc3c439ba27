//! Parse several sub-commands out of a single flat list of tokens
//!
//! A token stream such as `--cmd --one 1 --cmd --one 2` is split at every
//! recognized marker (`--cmd`), and each segment is handed to the sub-parser
//! registered for that marker. Results come back in the order the commands
//! appeared, each tagged with the marker that produced it.

use crate::errors::ActionError;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::marker::PhantomData;
use tracing::debug;

/// Something that can parse the argument list of one command segment
pub trait SubParser {
    type Output;

    /// Parse `args`; `marker` is used as the program name in usage errors
    ///
    /// # Errors
    /// Returns the underlying clap error if the arguments are rejected
    fn parse_args(&self, marker: &str, args: &[String]) -> Result<Self::Output, clap::Error>;
}

/// Sub-parser backed by a `#[derive(Parser)]` type
pub struct ClapParser<P>(PhantomData<fn() -> P>);

impl<P> ClapParser<P> {
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<P> Default for ClapParser<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: clap::Parser> SubParser for ClapParser<P> {
    type Output = P;

    fn parse_args(&self, marker: &str, args: &[String]) -> Result<P, clap::Error> {
        P::try_parse_from(std::iter::once(marker).chain(args.iter().map(String::as_str)))
    }
}

impl SubParser for clap::Command {
    type Output = clap::ArgMatches;

    fn parse_args(&self, marker: &str, args: &[String]) -> Result<clap::ArgMatches, clap::Error> {
        self.clone()
            .try_get_matches_from(std::iter::once(marker).chain(args.iter().map(String::as_str)))
    }
}

impl<S: SubParser + ?Sized> SubParser for Box<S> {
    type Output = S::Output;

    fn parse_args(&self, marker: &str, args: &[String]) -> Result<S::Output, clap::Error> {
        (**self).parse_args(marker, args)
    }
}

/// One command marker, its registered parser and the tokens that follow it
#[derive(Debug)]
pub struct Segment<'a, S> {
    pub marker: &'a str,
    pub parser: &'a S,
    pub args: Vec<String>,
}

/// Parsed arguments of one command, tagged with its marker
///
/// Serializes as a single flat mapping: the parsed fields plus `subcommand`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedCommand<T> {
    pub subcommand: String,
    #[serde(flatten)]
    pub args: T,
}

/// Dispatches marker-delimited segments of a token stream to sub-parsers
pub struct MultiCommand<S> {
    parsers: BTreeMap<String, S>,
    additional_args: HashMap<String, Vec<String>>,
}

impl<S> Default for MultiCommand<S> {
    fn default() -> Self {
        Self {
            parsers: BTreeMap::new(),
            additional_args: HashMap::new(),
        }
    }
}

impl<S: SubParser> MultiCommand<S> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `parser` for every segment started by `marker`
    #[must_use]
    pub fn command(mut self, marker: impl Into<String>, parser: S) -> Self {
        self.parsers.insert(marker.into(), parser);
        self
    }

    /// Append `args` to every invocation of `marker`
    #[must_use]
    pub fn additional_args<I, A>(mut self, marker: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        self.additional_args
            .entry(marker.into())
            .or_default()
            .extend(args.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn is_marker(&self, token: &str) -> bool {
        self.parsers.contains_key(token)
    }

    /// Registered markers, sorted
    pub fn markers(&self) -> impl Iterator<Item = &str> {
        self.parsers.keys().map(String::as_str)
    }

    /// Split `tokens` into one segment per marker
    ///
    /// Every marker opens a new segment, so adjacent markers (or a trailing
    /// marker) produce segments with no arguments.
    ///
    /// # Errors
    /// Returns `MissingCommand` if any token precedes the first marker
    pub fn segment<'a>(&'a self, tokens: &[String]) -> Result<Vec<Segment<'a, S>>, ActionError> {
        let mut segments = Vec::new();
        let mut current: Option<Segment<'a, S>> = None;

        for token in tokens {
            if let Some((marker, parser)) = self.parsers.get_key_value(token.as_str()) {
                if let Some(done) = current.take() {
                    segments.push(done);
                }
                current = Some(Segment {
                    marker: marker.as_str(),
                    parser,
                    args: Vec::new(),
                });
                continue;
            }

            match current.as_mut() {
                Some(segment) => segment.args.push(token.clone()),
                None => {
                    return Err(ActionError::MissingCommand {
                        token: token.clone(),
                        expected: self.markers().collect::<Vec<_>>().join(", "),
                    })
                }
            }
        }

        segments.extend(current);
        Ok(segments)
    }

    /// Parse every command segment in `tokens`, in input order
    ///
    /// # Errors
    /// Returns `MissingCommand` for leading arguments, or `SubParser` with the
    /// failing command and its 1-based position
    pub fn parse(&self, tokens: &[String]) -> Result<Vec<ParsedCommand<S::Output>>, ActionError> {
        let segments = self.segment(tokens)?;
        let mut parsed = Vec::with_capacity(segments.len());

        for (index, segment) in segments.into_iter().enumerate() {
            let Segment {
                marker,
                parser,
                mut args,
            } = segment;
            if let Some(extra) = self.additional_args.get(marker) {
                args.extend(extra.iter().cloned());
            }

            debug!(command = marker, position = index + 1, ?args, "parsing command segment");

            let output = parser
                .parse_args(marker, &args)
                .map_err(|cause| ActionError::SubParser {
                    command: marker.to_string(),
                    position: index + 1,
                    cause,
                })?;

            parsed.push(ParsedCommand {
                subcommand: marker.to_string(),
                args: output,
            });
        }

        Ok(parsed)
    }
}
