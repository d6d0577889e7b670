//! Judge text protocol.
//!
//! Input arrives line by line on stdin:
//!
//! ```text
//! numSites
//! siteId x y radius                                   (numSites times, once)
//! gold touchedSite                                    (every turn)
//! siteId gold maxMineSize structure owner p1 p2       (numSites times)
//! numUnits
//! x y owner unitType health                           (numUnits times)
//! ```
//!
//! `-1` stands for "none" in `touchedSite`, `structure` and `owner`, and for
//! the queen in `unitType`. Output is rendered through the `Display` impls of
//! [`royale_core::AgentAction`] and [`royale_core::ProductionOrder`].

use std::io::BufRead;
use std::str::SplitWhitespace;

use royale_core::{
    Owner, Point, SiteId, SiteInfo, SiteUpdate, StructureKind, TurnSnapshot, UnitKind,
    UnitObservation,
};

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("input ended while expecting {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("line {line}: missing field `{field}`")]
    MissingField { line: usize, field: &'static str },

    #[error("line {line}: `{field}` is not an integer: {value:?}")]
    InvalidInteger {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("line {line}: unknown unit type {code}")]
    UnknownUnitKind { line: usize, code: i32 },

    #[error("line {line}: unknown structure type {code}")]
    UnknownStructureKind { line: usize, code: i32 },

    #[error("line {line}: unknown owner {code}")]
    UnknownOwner { line: usize, code: i32 },

    #[error("failed to read judge input")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ParseError>;

/// Whitespace-separated fields of one input line.
struct Fields<'a> {
    tokens: SplitWhitespace<'a>,
    line: usize,
}

impl<'a> Fields<'a> {
    fn new(text: &'a str, line: usize) -> Self {
        Self {
            tokens: text.split_whitespace(),
            line,
        }
    }

    fn raw(&mut self, field: &'static str) -> Result<&'a str> {
        self.tokens.next().ok_or(ParseError::MissingField {
            line: self.line,
            field,
        })
    }

    fn parse<T: std::str::FromStr>(&mut self, field: &'static str) -> Result<T> {
        let raw = self.raw(field)?;
        raw.parse().map_err(|_| ParseError::InvalidInteger {
            line: self.line,
            field,
            value: raw.to_owned(),
        })
    }

    fn int(&mut self, field: &'static str) -> Result<i32> {
        self.parse(field)
    }

    fn count(&mut self, field: &'static str) -> Result<usize> {
        self.parse(field)
    }

    fn owner(&mut self) -> Result<Owner> {
        let code = self.int("owner")?;
        Owner::from_code(code).ok_or(ParseError::UnknownOwner {
            line: self.line,
            code,
        })
    }
}

/// Reads the initialisation block and per-turn snapshots from the judge.
pub struct JudgeReader<R> {
    input: R,
    buffer: String,
    line: usize,
}

impl<R: BufRead> JudgeReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            buffer: String::new(),
            line: 0,
        }
    }

    /// Reads the site list sent once before the first turn.
    pub fn read_init(&mut self) -> Result<Vec<SiteInfo>> {
        let count = self.expect_line("site count")?.count("site count")?;
        (0..count).map(|_| self.read_site_info()).collect()
    }

    /// Reads one turn, or `None` once the judge has closed the stream.
    pub fn read_turn(&mut self, site_count: usize) -> Result<Option<TurnSnapshot>> {
        if !self.advance()? {
            return Ok(None);
        }

        let mut header = Fields::new(&self.buffer, self.line);
        let gold = header.int("gold")?;
        let touched = header.int("touched site")?;

        let sites = (0..site_count)
            .map(|_| self.read_site_update())
            .collect::<Result<Vec<_>>>()?;

        let unit_count = self.expect_line("unit count")?.count("unit count")?;
        let units = (0..unit_count)
            .map(|_| self.read_unit())
            .collect::<Result<Vec<_>>>()?;

        Ok(Some(TurnSnapshot {
            gold,
            touched_site: (touched >= 0).then_some(SiteId(touched)),
            sites,
            units,
        }))
    }

    fn read_site_info(&mut self) -> Result<SiteInfo> {
        let mut fields = self.expect_line("site description")?;
        Ok(SiteInfo {
            id: SiteId(fields.int("site id")?),
            location: Point::new(fields.int("x")?, fields.int("y")?),
            radius: fields.int("radius")?,
        })
    }

    fn read_site_update(&mut self) -> Result<SiteUpdate> {
        let mut fields = self.expect_line("site update")?;
        let id = SiteId(fields.int("site id")?);
        let gold_remaining = fields.int("gold")?;
        let max_mine_size = fields.int("max mine size")?;

        let code = fields.int("structure type")?;
        let structure = StructureKind::from_code(code).ok_or(ParseError::UnknownStructureKind {
            line: fields.line,
            code,
        })?;

        Ok(SiteUpdate {
            id,
            gold_remaining,
            max_mine_size,
            structure,
            owner: fields.owner()?,
            param1: fields.int("param1")?,
            param2: fields.int("param2")?,
        })
    }

    fn read_unit(&mut self) -> Result<UnitObservation> {
        let mut fields = self.expect_line("unit")?;
        let location = Point::new(fields.int("x")?, fields.int("y")?);
        let owner = fields.owner()?;

        let code = fields.int("unit type")?;
        let kind = UnitKind::from_code(code).ok_or(ParseError::UnknownUnitKind {
            line: fields.line,
            code,
        })?;

        Ok(UnitObservation {
            location,
            owner,
            kind,
            health: fields.int("health")?,
        })
    }

    fn expect_line(&mut self, expected: &'static str) -> Result<Fields<'_>> {
        if !self.advance()? {
            return Err(ParseError::UnexpectedEof { expected });
        }
        Ok(Fields::new(&self.buffer, self.line))
    }

    /// Loads the next non-blank line into the buffer. Returns false at end of input.
    fn advance(&mut self) -> Result<bool> {
        loop {
            self.buffer.clear();
            if self.input.read_line(&mut self.buffer)? == 0 {
                return Ok(false);
            }
            self.line += 1;
            if !self.buffer.trim().is_empty() {
                return Ok(true);
            }
        }
    }
}
