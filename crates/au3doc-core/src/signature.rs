//! Function signature records for AutoIt3 documentation
//! The source data every hover and completion entry is derived from

use serde::{Deserialize, Serialize};

/// Complete signature information for one documented name
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// Identifier as authored; lookups lower-case it later
    pub name: String,
    /// Free-text description, markdown-flavored, may be empty
    pub documentation: String,
    /// Canonical call syntax, e.g. `_FTP_Open ( $sAgent [, $iFlags = 0] )`
    pub label: String,
    /// Ordered parameter list; empty for parameterless names
    pub params: Vec<Parameter>,
}

/// One parameter within a signature's label
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub label: String,
    pub documentation: String,
}

/// An ordered collection of signatures from one documentation module.
///
/// A sequence rather than a map: when two entries lower-case to the same
/// key, the later one wins, so author order is significant.
pub type SignatureTable = Vec<Signature>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_preserves_author_order() {
        let table: SignatureTable = vec![
            Signature {
                name: "_First".to_string(),
                documentation: String::new(),
                label: "_First (  )".to_string(),
                params: vec![],
            },
            Signature {
                name: "_Second".to_string(),
                documentation: String::new(),
                label: "_Second (  )".to_string(),
                params: vec![],
            },
        ];
        let names: Vec<&str> = table.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["_First", "_Second"]);
    }
}
