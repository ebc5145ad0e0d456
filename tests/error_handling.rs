use tomasulo_sim::errors::SimulatorError;
use tomasulo_sim::reorder_buffer::ReorderBuffer;
use tomasulo_sim::utils::parser::{parse_instruction, parse_program};

#[test]
fn reorder_buffer_reports_full_instead_of_panicking() {
    let mut rob = ReorderBuffer::new(1);
    rob.add(0).unwrap();
    let err = rob.add(1).unwrap_err();
    assert!(matches!(err, SimulatorError::ReorderBufferFull(1)));
    assert_eq!(err.to_string(), "reorder buffer is full (capacity 1)");
}

#[test]
fn parser_reports_malformed_lines_instead_of_panicking() {
    assert!(parse_instruction("").is_err());
    assert!(parse_instruction("ADD.D").is_err());
    assert!(parse_instruction("ADD.D F2 F0 F4").is_ok());
}

#[test]
fn parse_program_surfaces_the_first_bad_line() {
    let err = parse_program("ADD.D F2 F0 F4\nBROKEN\n").unwrap_err();
    assert!(matches!(err, SimulatorError::InputMalformed(_)));
}
