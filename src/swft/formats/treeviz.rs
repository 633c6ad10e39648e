//! Treeviz formatter for programs
//!
//! Treeviz draws the tree one line per node, which makes it quick to scan. Nesting is shown
//! with box drawing connectors:
//!
//!     <prefix><connector> <icon> <label>      (label truncated to 30 characters)
//!
//! Example, for `var x = 1 + 2`:
//!
//!     ⧉ Program (1 units)
//!     └─ § statements
//!       └─ ≔ x
//!         └─ ± +
//!           ├─ # 1
//!           └─ # 2
//!
//! Icons
//!     Program: ⧉
//!     Unit: §
//!     Function: ƒ
//!     Parameter: ⋄
//!     StaticAssignment: ≡
//!     DynamicAssignment: ≔
//!     Call: ⊙
//!     BinaryOperation: ±
//!     Identifier: ◦
//!     Literal: #

use super::registry::{FormatError, Formatter};
use crate::swft::ast::{snapshot_from_program, AstSnapshot, Program};

const MAX_LABEL_CHARS: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Program" => "⧉",
        "Unit" => "§",
        "Function" => "ƒ",
        "Parameter" => "⋄",
        "StaticAssignment" => "≡",
        "DynamicAssignment" => "≔",
        "Call" => "⊙",
        "BinaryOperation" => "±",
        "Identifier" => "◦",
        "Literal" => "#",
        _ => "○",
    }
}

fn format_snapshot(
    snapshot: &AstSnapshot,
    prefix: &str,
    child_index: usize,
    child_count: usize,
) -> String {
    let is_last = child_index + 1 == child_count;
    let connector = if is_last { "└─" } else { "├─" };

    let mut output = format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        get_icon(&snapshot.node_type),
        truncate(&snapshot.label, MAX_LABEL_CHARS)
    );

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    let child_count = snapshot.children.len();
    for (i, child) in snapshot.children.iter().enumerate() {
        output.push_str(&format_snapshot(child, &child_prefix, i, child_count));
    }

    output
}

fn format_root_snapshot(snapshot: &AstSnapshot) -> String {
    let mut output = format!(
        "{} {}\n",
        get_icon(&snapshot.node_type),
        truncate(&snapshot.label, MAX_LABEL_CHARS)
    );

    let child_count = snapshot.children.len();
    for (i, child) in snapshot.children.iter().enumerate() {
        output.push_str(&format_snapshot(child, "", i, child_count));
    }

    output
}

pub fn to_treeviz_str(program: &Program) -> String {
    format_root_snapshot(&snapshot_from_program(program))
}

/// Formatter implementation for treeviz format
pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, program: &Program) -> Result<String, FormatError> {
        Ok(to_treeviz_str(program))
    }

    fn description(&self) -> &str {
        "Visual tree representation with box drawing connectors and Unicode icons"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swft::ast::{Assignment, Call, Node, Unit};

    #[test]
    fn test_treeviz_assignment() {
        let program = Program::new(vec![Unit::new(vec![Node::DynamicAssignment(
            Assignment::untyped("x", Node::binary(Node::literal("1"), "+", Node::literal("2"))),
        )])]);

        let expected = concat!(
            "⧉ Program (1 units)\n",
            "└─ § statements\n",
            "  └─ ≔ x\n",
            "    └─ ± +\n",
            "      ├─ # 1\n",
            "      └─ # 2\n",
        );
        assert_eq!(to_treeviz_str(&program), expected);
    }

    #[test]
    fn test_treeviz_sibling_prefix() {
        let program = Program::new(vec![
            Unit::new(vec![Node::Call(Call::new("f", vec![Node::identifier("a")]))]),
            Unit::new(vec![Node::literal("1")]),
        ]);

        let expected = concat!(
            "⧉ Program (2 units)\n",
            "├─ § statements\n",
            "│ └─ ⊙ f\n",
            "│   └─ ◦ a\n",
            "└─ § expressions\n",
            "  └─ # 1\n",
        );
        assert_eq!(to_treeviz_str(&program), expected);
    }

    #[test]
    fn test_long_labels_are_truncated() {
        let long = format!("\"{}\"", "a".repeat(40));
        let program = Program::new(vec![Unit::new(vec![Node::literal(&long)])]);
        let output = to_treeviz_str(&program);
        let line = output.lines().last().unwrap();
        let prefix = "  └─ # ";
        assert_eq!(line, format!("{prefix}\"{}...", "a".repeat(29)));
        assert_eq!(line.chars().count(), prefix.chars().count() + 30 + 3);
    }

    #[test]
    fn test_empty_program() {
        assert_eq!(to_treeviz_str(&Program::default()), "⧉ Program (0 units)\n");
    }
}
