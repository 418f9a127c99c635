mod common;
use common::*;

#[test]
fn test_zero() {
    assert_eq!(exec("proc 0.0f {--help}{ s/ ++i //g }"), "0");
}

#[test]
fn test_increment_counts_prior_occurrences() {
    let source = r#"synchronized( 0.0f ){
        std::cout<< "Hello,world!" <<std::endl;
        std::cout<< "Hello,world!" <<std::endl;
        proc std::ignore {STDERR}{ s/ nullptr //g }
    }"#;
    assert_eq!(exec(source), "1");
}

#[test]
fn test_label_value_is_line_number() {
    let source = "\n\n\nsynchronized( 0.0f ){ proc std::ignore {(int) ++i}{ s/ nullptr //g } }";
    assert_eq!(exec(source), "4");
}

#[test]
fn test_negation() {
    let source = "synchronized( 0.0f ){ proc std::ignore {@{[ (int) ++i ]}}{ s/ nullptr //g } }";
    assert_eq!(exec(source), "-1");
}

#[test]
fn test_register_key_rotation() {
    let source = "synchronized( 0.0f ){
        std::cout<< (int) ++i <<std::endl;
        proc std::ignore {STDERR}{ s/ nullptr //g }
        proc $ARGV {STDERR}{ OUTPUT= *read-eval* }
    }";
    assert_eq!(exec(source), "10");
}

#[test]
fn test_label_holding_trigger_is_not_a_number() {
    assert_eq!(
        exec("proc 0.0f {(int) ++i}{ s/ <> //g }"),
        "SEMANTIC ERROR IN 1; LABEL IS NOT A NUMERICAL VALUE\n"
    );
}

#[test]
fn test_unbound_label_is_not_a_number() {
    assert_eq!(
        exec("std::cout<< (int) 0.0f <<std::endl;"),
        "SEMANTIC ERROR IN 1; LABEL IS NOT A NUMERICAL VALUE\n"
    );
}

#[test]
fn test_anonymous_label_never_binds() {
    assert_eq!(
        exec("synchronized( t ){ std::cout<< (int) t <<std::endl; }"),
        "SEMANTIC ERROR IN 1; LABEL IS NOT A NUMERICAL VALUE\n"
    );
}

#[test]
fn test_crlf_counts_one_line() {
    let source = "\r\n\r\nsynchronized( 0.0f ){ proc std::ignore {(int) ++i}{ s/ nullptr //g } }";
    assert_eq!(exec(source), "3");
}
