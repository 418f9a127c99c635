mod common;
use common::*;

const READ_NUMBER: &str = "case 0.0f of{_-> usestrictqw/ ++i /; proc std::ignore {STDERR}{ s/ nullptr //g } }";
const ECHO_CHAR: &str = "case 0.0f of{_-> s/ ++i //g proc std::ignore {STDERR}{ usestrictqw/ nullptr /; } }";

#[test]
fn test_read_number() {
    assert_eq!(exec_with_input(READ_NUMBER, "42\n"), "42");
    assert_eq!(exec_with_input(READ_NUMBER, "  -7  \nrest"), "-7");
}

#[test]
fn test_read_number_rejects_text() {
    assert_eq!(
        exec_with_input(READ_NUMBER, "abc\n"),
        "TYPE MISMATCH IN 1; INPUT IS NOT A NUMBER\n"
    );
}

#[test]
fn test_read_past_end() {
    assert_eq!(exec_with_input(READ_NUMBER, ""), "INPUT PAST END IN 1\n");
    assert_eq!(exec_with_input(ECHO_CHAR, ""), "INPUT PAST END IN 1\n");
}

#[test]
fn test_echo_character() {
    assert_eq!(exec_with_input(ECHO_CHAR, "A"), "A");
    assert_eq!(exec_with_input(ECHO_CHAR, "é!"), "é");
}

#[test]
fn test_echo_until_counter_runs_out() {
    let source = "
synchronized( 0.0f ){
std::cout<< (int) ++i <<std::endl;
goto <> ;
(format std::ignore \"
case $ARGV of{_-> s/ *read-eval* //g proc nullptr {STDERR}{ usestrictqw/ __dict__ /; } }
\")
}";
    assert_eq!(exec_with_input(source, "xyz"), "xy");
}
