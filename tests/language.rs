use calcscript::{evaluate_script, interpreter::env::Environment, process_line, value::Number};

fn assert_snapshot(source: &str, expected: &str) {
    match evaluate_script(source) {
        Ok(actual) => assert_eq!(actual, expected, "script: {source}"),
        Err(e) => panic!("Script failed: {e}\nscript: {source}"),
    }
}

fn assert_failure(source: &str, code: &str) {
    match evaluate_script(source) {
        Ok(out) => {
            panic!("Script succeeded with {out} but was expected to fail\nscript: {source}")
        }
        Err(e) => assert_eq!(e.error.code(), code, "wrong error for script: {source}\ngot: {e}"),
    }
}

#[test]
fn golden_example() {
    assert_snapshot(
        "i = 0\nj = ++i\nx = i++ + 5\ny = (5 + 3) * 10\ni += y",
        "(i=82,j=1,x=6,y=80)",
    );
}

#[test]
fn rerunning_a_batch_is_deterministic() {
    let script = "i = 0\nj = ++i\nx = i++ + 5\ny = (5 + 3) * 10\ni += y";
    let first = evaluate_script(script).expect("script should run");
    let second = evaluate_script(script).expect("script should run");
    assert_eq!(first, second);
}

#[test]
fn side_effects_interleave_left_to_right() {
    assert_snapshot("i = 0\nx = i++ + ++i", "(i=2,x=2)");
}

#[test]
fn pre_and_post_increment_decrement_semantics() {
    assert_snapshot("i = 0\nx = ++i", "(i=1,x=1)");
    assert_snapshot("i = 0\nx = i++", "(i=1,x=0)");
    assert_snapshot("i = 2\nx = --i", "(i=1,x=1)");
    assert_snapshot("i = 2\nx = i--", "(i=1,x=2)");
}

#[test]
fn postfix_in_a_larger_expression() {
    assert_snapshot("i = 5\nx = i-- - 2", "(i=4,x=3)");
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_snapshot("x = 2 + 3 * 4", "(x=14)");
    assert_snapshot("x = (2 + 3) * 4", "(x=20)");
    assert_snapshot("x = -2 * 3", "(x=-6)");
}

#[test]
fn power_is_right_associative_and_binds_tightest() {
    assert_snapshot("x = 2 ^ 3 ^ 2", "(x=512)");
    assert_snapshot("x = 2 ^ 3 * 4", "(x=32)");
    assert_snapshot("x = -2 ^ 2", "(x=-4)");
}

#[test]
fn compound_assignments_update_existing_bindings() {
    assert_snapshot("i = 2\ni += 3", "(i=5)");
    assert_snapshot("i = 7\ni -= 2", "(i=5)");
    assert_snapshot("i = 4\ni *= 2", "(i=8)");
    assert_snapshot("i = 9\ni /= 3", "(i=3)");
    assert_snapshot("i = 9\ni %= 4", "(i=1)");
}

#[test]
fn compound_assignment_requires_a_prior_binding() {
    assert_failure("x += 1", "ENV_001");
}

#[test]
fn undefined_variable_on_the_right_hand_side() {
    assert_failure("x = y + 1", "ENV_001");
}

#[test]
fn power_assign_parses_but_does_not_evaluate() {
    assert_failure("x = 1\nx ^= 2", "EVAL_005");
    // The target is read before the operator is dispatched, so an unbound
    // target reports the undefined variable instead.
    assert_failure("x ^= 2", "ENV_001");
}

#[test]
fn division_and_modulo_by_zero_are_rejected() {
    assert_failure("x = 1 / 0", "EVAL_004");
    assert_failure("x = 1 % 0", "EVAL_004");
    assert_failure("x = 1 / 0.0", "EVAL_004");
    assert_failure("x = 2.5 % 0.0", "EVAL_004");
    assert_failure("i = 8\ni /= 0", "EVAL_004");
}

#[test]
fn integer_arithmetic_stays_integer() {
    assert_snapshot("x = 8 / 3", "(x=2)");
    assert_snapshot("x = 7 % 3", "(x=1)");
}

#[test]
fn integer_division_truncates_toward_zero() {
    assert_snapshot("x = 0 - 7\ny = x / 2", "(x=-7,y=-3)");
}

#[test]
fn mixed_operands_promote_to_real() {
    assert_snapshot("x = 5.0 % 3", "(x=2.0)");
    assert_snapshot("x = 1 + 0.5", "(x=1.5)");
    assert_snapshot("x = 1.5\ny = ++x", "(x=2.5,y=2.5)");
}

#[test]
fn increment_operands_must_be_bare_variables() {
    assert_failure("x = ++(1)", "EVAL_003");
    assert_failure("i = 1\nx = (i + 1)++", "EVAL_003");
}

#[test]
fn malformed_lines_are_parse_errors() {
    assert_failure("x = (1 + 2", "PARSE_006");
    assert_failure("x = * 7", "PARSE_007");
    assert_failure("= 5", "PARSE_001");
    assert_failure("x 5", "PARSE_002");
    assert_failure("x = 1 2", "PARSE_003");
    assert_failure("x = 1 $", "LEXER_001");
    assert_failure("x = 1.", "LEXER_002");
    assert_failure("x = 99999999999999999999", "LEXER_003");
}

#[test]
fn blank_and_whitespace_lines_are_skipped() {
    assert_snapshot("\n i = 1 \n\n   \nj = 2", "(i=1,j=2)");
    assert_snapshot("", "()");
    assert_snapshot("   \n\t\n", "()");
}

#[test]
fn snapshot_preserves_first_assignment_order() {
    assert_snapshot("a = 1\nb = 2\na = 3", "(a=3,b=2)");
}

#[test]
fn errors_carry_the_line_number_and_source_text() {
    let err = evaluate_script("i = 0\nx = 1 / 0").expect_err("script should fail");
    assert_eq!(err.line_number, 2);
    assert_eq!(err.line, "x = 1 / 0");
    assert!(err.to_string().ends_with("(line 2: x = 1 / 0)"), "got: {err}");
}

#[test]
fn blank_lines_still_count_for_line_numbers() {
    let err = evaluate_script("i = 0\n\nx = 1 / 0").expect_err("script should fail");
    assert_eq!(err.line_number, 3);
}

#[test]
fn committed_side_effects_of_a_failing_line_stay_committed() {
    let mut env = Environment::new();
    process_line("i = 0", &mut env).expect("line should run");

    let err = process_line("x = ++i + 1 / 0", &mut env).expect_err("line should fail");
    assert_eq!(err.code(), "EVAL_004");

    // The pre-increment ran before the division was attempted.
    assert_eq!(env.get("i"), Ok(Number::Integer(1)));
    assert!(env.get("x").is_err());
}
