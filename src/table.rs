//! Truth table enumeration and rendering
//!
//! A table has one column per free identifier, in first-occurrence order, and one row
//! per assignment. Rows count down in binary with the first identifier as the most
//! significant bit, so the first row is all-true and the last row all-false.
//!
//! # Examples
//!
//! ```
//! use proposition::{parse_statement, TruthTable};
//!
//! let stmt = parse_statement("table a + b").unwrap();
//! let table = TruthTable::generate(stmt.expression());
//!
//! assert_eq!(table.variables(), ["a", "b"]);
//! assert_eq!(table.rows().len(), 4);
//! assert_eq!(table.rows()[0].values(), [true, true]);
//! assert!(!table.rows()[3].result());
//!
//! println!("{}", table);
//! ```

use crate::expression::Expression;
use std::collections::HashMap;
use std::fmt;

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// One assignment of the variables together with the expression's value under it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTableRow {
    values: Vec<bool>,
    result: bool,
}

impl TruthTableRow {
    /// Variable values, in the table's column order
    pub fn values(&self) -> &[bool] {
        &self.values
    }

    /// Value of the expression for this row
    pub fn result(&self) -> bool {
        self.result
    }
}

/// Complete truth table of an expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    expression: Expression,
    variables: Vec<String>,
    rows: Vec<TruthTableRow>,
}

impl TruthTable {
    /// Enumerate every assignment of the expression's free identifiers
    ///
    /// The work is exponential in the number of identifiers and nothing here limits
    /// it; callers taking untrusted input should check
    /// [`Expression::identifiers`] first, as [`Session`](crate::Session) does.
    pub fn generate(expression: &Expression) -> Self {
        let variables: Vec<String> = expression
            .identifiers()
            .into_iter()
            .map(str::to_string)
            .collect();
        let n = variables.len();
        debug_assert!(n < u64::BITS as usize, "truth table too wide");

        let mut assignment: HashMap<String, bool> = HashMap::with_capacity(n);
        let rows = (0..1u64 << n)
            .rev()
            .map(|index| {
                let values: Vec<bool> = (0..n)
                    .map(|bit| (index >> (n - 1 - bit)) & 1 == 1)
                    .collect();
                for (name, value) in variables.iter().zip(&values) {
                    assignment.insert(name.clone(), *value);
                }
                let result = expression.evaluate(&assignment);
                TruthTableRow { values, result }
            })
            .collect();

        log::debug!("generated {} rows over {} variables", 1u64 << n, n);

        TruthTable {
            expression: expression.clone(),
            variables,
            rows,
        }
    }

    /// The expression the table was built from
    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    /// Column names, in first-occurrence order
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// All rows, first row all-true
    pub fn rows(&self) -> &[TruthTableRow] {
        &self.rows
    }

    /// Render as a box-drawn grid, optionally with ANSI colours
    ///
    /// Colour only wraps the cell contents, column widths are the same either way.
    pub fn render(&self, colour: bool) -> String {
        let header = self.expression.literal();
        let mut widths: Vec<usize> = self
            .variables
            .iter()
            .map(|v| v.chars().count())
            .collect();
        widths.push(header.chars().count());

        let mut out = String::new();
        out.push_str(&border(&widths, '┌', '┬', '┐'));

        for (name, width) in self.variables.iter().zip(&widths) {
            out.push_str(&format!("│ {} ", centre(name, *width, None)));
        }
        let style = if colour { Some(BOLD) } else { None };
        out.push_str(&format!("│ {} │\n", centre(&header, header.chars().count(), style)));

        out.push_str(&border(&widths, '├', '┼', '┤'));

        for row in &self.rows {
            for (value, width) in row.values.iter().zip(&widths) {
                out.push_str(&format!("│ {} ", bit(*value, *width, colour)));
            }
            let result_width = widths[widths.len() - 1];
            out.push_str(&format!("│ {} │\n", bit(row.result, result_width, colour)));
        }

        out.push_str(&border(&widths, '└', '┴', '┘'));
        out
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}

fn border(widths: &[usize], left: char, join: char, right: char) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{}{}{}\n", left, segments.join(&join.to_string()), right)
}

/// Pad `text` to `width` columns, centred, with the padding outside any styling
fn centre(text: &str, width: usize, style: Option<&str>) -> String {
    let len = text.chars().count();
    let spare = width.saturating_sub(len);
    let leading = spare / 2;
    let trailing = spare - leading;
    let body = match style {
        Some(code) => format!("{}{}{}", code, text, RESET),
        None => text.to_string(),
    };
    format!("{}{}{}", " ".repeat(leading), body, " ".repeat(trailing))
}

fn bit(value: bool, width: usize, colour: bool) -> String {
    let (text, code) = if value { ("1", GREEN) } else { ("0", RED) };
    centre(text, width, if colour { Some(code) } else { None })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_statement;

    fn table(text: &str) -> TruthTable {
        let stmt = parse_statement(&format!("table {}", text)).unwrap();
        TruthTable::generate(stmt.expression())
    }

    #[test]
    fn test_or_table() {
        let table = table("a + b");
        assert_eq!(table.variables(), ["a", "b"]);
        assert_eq!(table.rows().len(), 4);

        let first = &table.rows()[0];
        assert_eq!(first.values(), [true, true]);
        assert!(first.result());

        let last = &table.rows()[3];
        assert_eq!(last.values(), [false, false]);
        assert!(!last.result());

        for row in table.rows() {
            assert_eq!(row.result(), row.values()[0] || row.values()[1]);
        }
    }

    #[test]
    fn test_rows_count_down_in_binary() {
        let table = table("a * b * c");
        let encoded: Vec<u8> = table
            .rows()
            .iter()
            .map(|row| row.values().iter().fold(0u8, |acc, v| (acc << 1) | *v as u8))
            .collect();
        assert_eq!(encoded, vec![7, 6, 5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_columns_follow_first_occurrence() {
        let table = table("(c -> a) + c * b");
        assert_eq!(table.variables(), ["c", "a", "b"]);
    }

    #[test]
    fn test_constant_expression_has_one_row() {
        let table = table("1 * !0");
        assert!(table.variables().is_empty());
        assert_eq!(table.rows().len(), 1);
        assert!(table.rows()[0].result());
    }

    #[test]
    fn test_render_plain() {
        let rendered = table("a + b").to_string();
        let expected = "\
┌───┬───┬─────────┐
│ a │ b │ (a + b) │
├───┼───┼─────────┤
│ 1 │ 1 │    1    │
│ 1 │ 0 │    1    │
│ 0 │ 1 │    1    │
│ 0 │ 0 │    0    │
└───┴───┴─────────┘
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_colour_keeps_values() {
        let rendered = table("!a").render(true);
        assert!(rendered.contains(&format!("{}!a{}", BOLD, RESET)));
        assert!(rendered.contains(&format!("{}0{}", RED, RESET)));
        assert!(rendered.contains(&format!("{}1{}", GREEN, RESET)));
        assert_eq!(rendered.lines().count(), 6);
    }

    #[test]
    fn test_wide_identifier_column() {
        let rendered = table("alpha").to_string();
        assert!(rendered.contains("│ alpha │ alpha │"));
        assert!(rendered.contains("│   1   │   1   │"));
    }
}
