use super::Instruction;

const COMMENT: char = ';';
const SEPARATOR: char = ',';

/// Tokenize one line of source.
///
/// Returns `None` for lines with nothing to execute: empty, whitespace,
/// or comment only.
pub fn lex(s: &str) -> Option<Instruction> {
    let code = strip_comment(s).trim();
    if code.is_empty() {
        return None;
    }
    let (opcode, rest) = match code.find(is_basm_whitespace) {
        Some(index) => code.split_at(index),
        None => (code, ""),
    };
    Some(Instruction::new(opcode, arguments(rest)))
}

fn is_basm_whitespace(c: char) -> bool {
    c.is_whitespace()
}

fn strip_comment(s: &str) -> &str {
    match s.find(COMMENT) {
        Some(index) => &s[..index],
        None => s,
    }
}

fn arguments(s: &str) -> Vec<String> {
    let s = s.trim();
    if s.is_empty() {
        return vec![];
    }
    s.split(SEPARATOR)
        .map(|arg| arg.trim().to_string())
        .collect()
}
