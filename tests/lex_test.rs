use basm::lang::{lex, Instruction};

fn instruction(opcode: &str, args: &[&str]) -> Option<Instruction> {
    Some(Instruction::new(
        opcode,
        args.iter().map(|s| s.to_string()).collect(),
    ))
}

#[test]
fn test_blank_lines() {
    assert_eq!(lex(""), None);
    assert_eq!(lex("        "), None);
    assert_eq!(lex("\t\t"), None);
}

#[test]
fn test_comment_lines() {
    assert_eq!(lex(";"), None);
    assert_eq!(lex("   ; MOV 0x00, 5"), None);
}

#[test]
fn test_case_insensitive_opcode() {
    assert_eq!(lex("Mov 0x00, 5"), instruction("MOV", &["0x00", "5"]));
    assert_eq!(lex("jG 4"), instruction("JG", &["4"]));
}

#[test]
fn test_opcode_not_an_argument() {
    let i = lex("OUT 0x00").unwrap();
    assert_eq!(i.opcode(), "OUT");
    assert_eq!(i.args().len(), 1);
}

#[test]
fn test_comment_after_code() {
    assert_eq!(lex("RET 1 ; done"), instruction("RET", &["1"]));
    assert_eq!(lex("RET;done"), instruction("RET", &[]));
}

#[test]
fn test_spacing_around_commas() {
    assert_eq!(lex("CMP 5 , 3"), instruction("CMP", &["5", "3"]));
    assert_eq!(lex("CMP   5,3   "), instruction("CMP", &["5", "3"]));
}

#[test]
fn test_display_round_trips_well_formed_lines() {
    let line = "ADD 0x1, 0x2";
    assert_eq!(lex(line).unwrap().to_string(), line);
}
