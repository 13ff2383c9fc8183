// SPDX-FileCopyrightText: 2026 Fastflow Authors
// SPDX-License-Identifier: LicenseRef-Fastflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fastflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use smol_str::SmolStr;

/// Identifier of a node in the graph.
///
/// Node ids are the decimal text of a strictly increasing counter seeded at
/// 1, so a store with N nodes holds exactly the ids `"1".."N"`. The id keeps
/// both the counter value (for successor arithmetic) and its canonical text
/// (what the rest of the system compares and displays).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    seq: u64,
    text: SmolStr,
}

impl NodeId {
    pub fn from_seq(seq: u64) -> Result<Self, IdError> {
        if seq == 0 {
            return Err(IdError::Zero);
        }
        let mut buf = itoa::Buffer::new();
        Ok(Self { seq, text: SmolStr::new(buf.format(seq)) })
    }

    /// The id of the root node every graph starts with.
    pub fn root() -> Self {
        Self { seq: 1, text: SmolStr::new_static("1") }
    }

    /// The id the next created node receives when this node is the anchor.
    pub fn successor(&self) -> Self {
        let mut buf = itoa::Buffer::new();
        let seq = self.seq + 1;
        Self { seq, text: SmolStr::new(buf.format(seq)) }
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for NodeId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(IdError::Empty);
        }
        let seq: u64 = s.parse().map_err(|_| IdError::NotDecimal)?;
        let id = Self::from_seq(seq)?;
        if id.as_str() != s {
            return Err(IdError::NotCanonical);
        }
        Ok(id)
    }
}

/// Identifier of an edge, formatted `e{source}-{target}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId {
    text: SmolStr,
}

impl EdgeId {
    pub fn for_link(source: &NodeId, target: &NodeId) -> Self {
        let mut text = String::with_capacity(2 + source.as_str().len() + target.as_str().len());
        text.push('e');
        text.push_str(source.as_str());
        text.push('-');
        text.push_str(target.as_str());
        Self { text: SmolStr::new(text) }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for EdgeId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdError {
    Empty,
    NotDecimal,
    Zero,
    NotCanonical,
}

impl fmt::Display for IdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("node id must not be empty"),
            Self::NotDecimal => f.write_str("node id must be a decimal integer"),
            Self::Zero => f.write_str("node ids are seeded at 1"),
            Self::NotCanonical => f.write_str("node id must not carry leading zeros"),
        }
    }
}

impl std::error::Error for IdError {}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::{EdgeId, IdError, NodeId};

    #[test]
    fn root_is_one() {
        assert_eq!(NodeId::root().as_str(), "1");
        assert_eq!(NodeId::root().seq(), 1);
    }

    #[test]
    fn successor_increments_the_decimal_text() {
        let id = NodeId::root().successor();
        assert_eq!(id.as_str(), "2");

        let id = NodeId::from_seq(9).expect("node id").successor();
        assert_eq!(id.as_str(), "10");
    }

    #[test]
    fn from_seq_rejects_zero() {
        assert_eq!(NodeId::from_seq(0), Err(IdError::Zero));
    }

    #[test]
    fn parses_canonical_decimal_text() {
        let id = NodeId::from_str("42").expect("node id");
        assert_eq!(id.seq(), 42);
        assert_eq!(id, NodeId::from_seq(42).expect("node id"));
    }

    #[test]
    fn rejects_non_canonical_text() {
        assert_eq!(NodeId::from_str(""), Err(IdError::Empty));
        assert_eq!(NodeId::from_str("abc"), Err(IdError::NotDecimal));
        assert_eq!(NodeId::from_str("0"), Err(IdError::Zero));
        assert_eq!(NodeId::from_str("007"), Err(IdError::NotCanonical));
    }

    #[test]
    fn edge_id_joins_source_and_target() {
        let source = NodeId::root();
        let target = source.successor();
        assert_eq!(EdgeId::for_link(&source, &target).as_str(), "e1-2");
    }
}
