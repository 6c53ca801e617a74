use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The four fixed stages of the demo board.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ColumnId {
    Pending,
    InProgress,
    Review,
    Completed,
}

impl ColumnId {
    pub const COUNT: usize = 4;

    pub fn all() -> [ColumnId; Self::COUNT] {
        [
            ColumnId::Pending,
            ColumnId::InProgress,
            ColumnId::Review,
            ColumnId::Completed,
        ]
    }

    /// Position of the column in the board array.
    pub fn index(self) -> usize {
        match self {
            ColumnId::Pending => 0,
            ColumnId::InProgress => 1,
            ColumnId::Review => 2,
            ColumnId::Completed => 3,
        }
    }

    /// Key used for `data-column` attributes and drag payloads.
    pub fn key(self) -> &'static str {
        match self {
            ColumnId::Pending => "pending",
            ColumnId::InProgress => "inProgress",
            ColumnId::Review => "review",
            ColumnId::Completed => "completed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ColumnId::Pending => "Por hacer",
            ColumnId::InProgress => "En progreso",
            ColumnId::Review => "Revisión",
            ColumnId::Completed => "Completado",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ColumnId::Pending => "#e74c3c",
            ColumnId::InProgress => "#f39c12",
            ColumnId::Review => "#3498db",
            ColumnId::Completed => "#27ae60",
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ColumnId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColumnId::all()
            .into_iter()
            .find(|column| column.key() == s)
            .ok_or_else(|| format!("unknown column key: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_declaration_order() {
        for (i, column) in ColumnId::all().into_iter().enumerate() {
            assert_eq!(column.index(), i);
        }
    }

    #[test]
    fn keys_parse_back() {
        for column in ColumnId::all() {
            assert_eq!(column.key().parse::<ColumnId>(), Ok(column));
        }
        assert!("done".parse::<ColumnId>().is_err());
        assert!("InProgress".parse::<ColumnId>().is_err());
    }

    #[test]
    fn serde_name_matches_key() {
        for column in ColumnId::all() {
            let json = serde_json::to_string(&column).unwrap();
            assert_eq!(json, format!("\"{}\"", column.key()));
        }
    }
}
