use meh::{
    Error,
    error::{CompileError, RuntimeError},
    interpreter::{
        environment::Environment,
        evaluator::compile,
        parser::parse,
        value::{
            core::Value,
            flow::{Flow, FlowKind},
        },
    },
    run,
};
use pretty_assertions::assert_eq;

fn raw(source: &str) -> Value {
    run("test", source.as_bytes()).unwrap_or_else(|e| panic!("{source:?} failed: {e}"))
}

fn eval(source: &str) -> Value {
    raw(source).program_output()
}

fn fail(source: &str) -> Error {
    match run("test", source.as_bytes()) {
        Ok(value) => panic!("{source:?} succeeded with {value}"),
        Err(e) => e,
    }
}

fn int(i: i64) -> Value {
    Value::Integer(i)
}

#[test]
fn program_result_is_a_success_tuple() {
    assert_eq!(raw("1 + 2"), Value::tuple(vec![Value::Bool(true), int(3)]));
    assert_eq!(raw(""), Value::tuple(vec![Value::Bool(true), Value::Nil]));
}

#[test]
fn integer_arithmetic() {
    assert_eq!(eval("1 + 2 * 3"), int(7));
    assert_eq!(eval("7 / 2"), int(3));
    assert_eq!(eval("-7 % 3"), int(-1));
    assert_eq!(eval("(1 + 2) * -3"), int(-9));
}

#[test]
fn mixed_arithmetic_promotes_to_float() {
    assert_eq!(eval("7 / 2.0"), Value::Real(3.5));
    assert_eq!(eval("1.5 + 1"), Value::Real(2.5));
    assert_eq!(eval("4."), Value::Real(4.0));
    assert_eq!(eval("1 == 1.0"), Value::Bool(true));
    assert_eq!(eval("1.0 / 0"), Value::Real(f64::INFINITY));
}

#[test]
fn integers_too_large_for_i64_become_floats() {
    assert_eq!(eval("9223372036854775808"), Value::Real(9_223_372_036_854_775_808.0));
}

#[test]
fn integer_failures() {
    assert!(matches!(fail("1 / 0"), Error::Runtime(RuntimeError::DivisionByZero { .. })));
    assert!(matches!(fail("1 % 0"), Error::Runtime(RuntimeError::DivisionByZero { .. })));
    assert!(matches!(fail("9223372036854775807 + 1"),
                     Error::Runtime(RuntimeError::Overflow { .. })));
    assert!(matches!(fail("x = 9223372036854775807\n-x - 2"),
                     Error::Runtime(RuntimeError::Overflow { .. })));
}

#[test]
fn modulo_is_integer_only() {
    assert!(matches!(fail("7.5 % 2"),
                     Error::Runtime(RuntimeError::TypeMismatch { left: "float", right: "int", .. })));
}

#[test]
fn comparisons() {
    assert_eq!(eval("1 < 2"), Value::Bool(true));
    assert_eq!(eval("2 <= 1"), Value::Bool(false));
    assert_eq!(eval("2.5 > 2"), Value::Bool(true));
    assert_eq!(eval("3 != 3"), Value::Bool(false));
    assert_eq!(eval(r#""abc" < "abd""#), Value::Bool(true));
    assert_eq!(eval(r#""a" == 'a'"#), Value::Bool(true));
}

#[test]
fn strings() {
    assert_eq!(eval(r#""ab" + 'cd'"#), Value::string("abcd"));
    assert_eq!(eval(r#""a\tbé""#), Value::string("a\tb\u{e9}"));
    assert_eq!(eval(r"`a\tb`"), Value::string(r"a\tb"));
    assert_eq!(eval("`two\nlines`"), Value::string("two\nlines"));
}

#[test]
fn operators_reject_incompatible_types() {
    let error = fail(r#"1 + "a""#);

    assert!(matches!(&error,
                     Error::Runtime(RuntimeError::TypeMismatch { operator, left: "int", right: "string", .. })
                     if operator == "+"));
    assert_eq!(error.to_string(),
               "test:1:3: type mismatch: cannot apply '+' to int and string");

    assert!(matches!(fail(r#""a" * 2"#), Error::Runtime(RuntimeError::TypeMismatch { .. })));
    assert!(matches!(fail("true == true"), Error::Runtime(RuntimeError::TypeMismatch { .. })));
    assert!(matches!(fail(r#"-"a""#),
                     Error::Runtime(RuntimeError::UnaryTypeMismatch { operand: "string", .. })));
}

#[test]
fn reserved_names_are_fixed_values() {
    assert_eq!(eval("true"), Value::Bool(true));
    assert_eq!(eval("false"), Value::Bool(false));
    assert_eq!(eval("nil"), Value::Nil);
}

#[test]
fn unbound_names_are_nil() {
    assert_eq!(eval("missing"), Value::Nil);
}

#[test]
fn assignment_yields_the_assigned_value() {
    assert_eq!(eval("x = 4"), int(4));
    assert_eq!(eval("a = b = 2\na + b"), int(4));
    assert_eq!(eval("x = 1\nx += 2\nx *= 5\nx"), int(15));
}

#[test]
fn blocks_share_the_enclosing_scope() {
    assert_eq!(eval("x = 1\n{ x = x + 1 }\nx"), int(2));
    assert_eq!(eval("x = 1 { x = x + 1 } x"), int(2));
    assert_eq!(eval("{ y = 5 }\ny"), int(5));
}

#[test]
fn block_value_is_a_success_tuple() {
    assert_eq!(eval("{ 1; 2 }"), Value::tuple(vec![Value::Bool(true), int(2)]));
}

#[test]
fn groups_and_commas() {
    assert_eq!(eval("()"), Value::tuple(Vec::new()));
    assert_eq!(eval("(1; 2)"), int(2));
    assert_eq!(eval("1, 2 + 3"), Value::tuple(vec![int(1), int(5)]));
}

#[test]
fn truthiness() {
    assert_eq!(eval("!0"), Value::Bool(false));
    assert_eq!(eval(r#"!"""#), Value::Bool(false));
    assert_eq!(eval("!nil"), Value::Bool(false));
    assert_eq!(eval("!false"), Value::Bool(true));
    assert_eq!(eval("!(false, 1)"), Value::Bool(true));
    assert_eq!(eval("!(true, 0)"), Value::Bool(false));
}

#[test]
fn logic_short_circuits() {
    assert_eq!(eval("true && false"), Value::Bool(false));
    assert_eq!(eval(r#"false && (1 + "a")"#), Value::Bool(false));
    assert_eq!(eval(r#"true || (1 + "a")"#), Value::Bool(true));
    assert!(matches!(fail(r#"false || (1 + "a")"#),
                     Error::Runtime(RuntimeError::TypeMismatch { .. })));
    assert!(matches!(fail(r#"true && (1 + "a")"#),
                     Error::Runtime(RuntimeError::TypeMismatch { .. })));
}

#[test]
fn logic_returns_the_deciding_operand() {
    assert_eq!(eval("0 && 5"), int(5));
    assert_eq!(eval("false || 7"), int(7));
    assert_eq!(eval("nil || 1"), Value::Nil);
}

#[test]
fn functions() {
    assert_eq!(eval("f = fn(a, b) { a + b }\nf(2,3)"), int(5));
    assert_eq!(eval("f = fn(a, b) { a + b } f(2,3)"), int(5));
    assert_eq!(eval("f = fn() { 42 }\nf()"), int(42));
    assert_eq!(eval("fn(x) { x * x }(9)"), int(81));
    assert_eq!(eval("f = fn(a) { a }\nf((1, 2))"), Value::tuple(vec![int(1), int(2)]));
    assert_eq!(eval("f = fn(a, b) { a }\nf((1, 2), 3)"), Value::tuple(vec![int(1), int(2)]));
}

#[test]
fn function_values_print_their_parameters() {
    assert_eq!(eval("fn(a, b) { a }").to_string(), "fn(a, b)");
}

#[test]
fn wrong_argument_count_is_a_runtime_error() {
    let error = fail("f = fn(a, b) { a + b }\nf(2)");

    assert!(matches!(error,
                     Error::Runtime(RuntimeError::ArgumentCountMismatch { expected: 2, found: 1, .. })));
}

#[test]
fn calling_a_non_function_is_a_runtime_error() {
    assert!(matches!(fail("x = 1\nx(2)"),
                     Error::Runtime(RuntimeError::NotCallable { found: "int", .. })));
    assert!(matches!(fail("undefined()"),
                     Error::Runtime(RuntimeError::NotCallable { found: "nil", .. })));
}

#[test]
fn closures_capture_their_defining_scope() {
    assert_eq!(eval("make = fn(n) { fn(x) { x + n } }\nadd2 = make(2)\nadd2(40)"), int(42));
}

#[test]
fn closures_see_later_writes_to_their_scope() {
    assert_eq!(eval("n = 1\nget = fn() { n }\nn = 5\nget()"), int(5));
}

#[test]
fn assignment_inside_a_function_stays_local() {
    assert_eq!(eval("x = 1\nf = fn() { x = 2\n x }\nf()\nx"), int(1));
    assert_eq!(eval("x = 1\nf = fn() { x = 2\n x }\nf()"), int(2));
}

#[test]
fn scope_is_lexical_not_dynamic() {
    let source = "n = 1\nget = fn() { n }\ncall = fn(n) { get() }\ncall(99)";

    assert_eq!(eval(source), int(1));
}

#[test]
fn recursion_through_the_root_scope() {
    let source = "fib = fn(n) { n < 2 && n || fib(n - 1) + fib(n - 2) }\nfib(15)";

    assert_eq!(eval(source), int(610));
}

#[test]
fn return_leaves_the_function_early() {
    assert_eq!(eval("f = fn(x) { return x * 2\n 99 }\nf(4)"), int(8));
    assert_eq!(eval("f = fn() { { return 1 }\n 2 }\nf()"), int(1));
}

#[test]
fn return_arity_shapes_the_payload() {
    assert_eq!(eval("f = fn() { return }\nf()"), Value::Nil);
    assert_eq!(eval("f = fn() { return 1 }\nf()"), int(1));
    assert_eq!(eval("f = fn() { return 1, 2 }\nf()"), Value::tuple(vec![int(1), int(2)]));
}

#[test]
fn signals_escaping_the_top_level_are_returned_raw() {
    assert_eq!(raw("return 3\n4"), Value::Flow(Flow::returning(int(3))));
    assert_eq!(raw("1\nbreak\n2"), Value::Flow(Flow::bare(FlowKind::Break)));
    assert_eq!(raw("f = fn() { continue }\nf()"),
               Value::Flow(Flow::bare(FlowKind::Continue)));
    assert_eq!(eval("return 3"), int(3));
}

#[test]
fn signals_pass_through_operators() {
    assert_eq!(raw("f = fn() { break }\nf() + 1"), Value::Flow(Flow::bare(FlowKind::Break)));
    assert_eq!(eval("f = fn() { 1 + (return 3)\n 0 }\nf()"), int(3));
    assert_eq!(eval("f = fn() { -(return 2)\n 0 }\nf()"), int(2));
    assert_eq!(eval("f = fn() { !(return 1)\n 0 }\nf()"), int(1));
}

#[test]
fn signals_are_not_truthy_operands() {
    assert_eq!(eval("f = fn() { x = (return 7) && 3\n 9 }\nf()"), int(7));
    assert_eq!(raw("f = fn() { continue || 1 }\nf()"),
               Value::Flow(Flow::bare(FlowKind::Continue)));
}

#[test]
fn signals_are_never_packed_into_tuples() {
    assert_eq!(eval("f = fn() { x = 1, (return 5), 3\n 0 }\nf()"), int(5));
}

#[test]
fn signals_in_arguments_abandon_the_call() {
    assert_eq!(eval("g = fn(a) { 1 }\nf = fn() { g(return 4)\n 2 }\nf()"), int(4));
    assert_eq!(eval("g = fn(a, b) { 1 }\nf = fn() { g(1, (return 8))\n 2 }\nf()"), int(8));
    assert_eq!(eval("f = fn() { (return 6) >> g\n 0 }\nf()"), int(6));
}

#[test]
fn pipe_applies_the_right_side() {
    assert_eq!(eval("double = fn(x) { x * 2 }\n21 >> double"), int(42));
    assert_eq!(eval("inc = fn(x) { x + 1 }\n1 >> inc >> inc"), int(3));
    assert!(matches!(fail("1 >> 2"), Error::Runtime(RuntimeError::NotCallable { .. })));
}

#[test]
fn compile_errors() {
    assert!(matches!(fail("true = 1"),
                     Error::Compile(CompileError::ReservedIdentifier { name, .. }) if name == "true"));
    assert!(matches!(fail("f = fn(nil) { 1 }"),
                     Error::Compile(CompileError::ReservedIdentifier { .. })));
    assert!(matches!(fail("1 = 2"),
                     Error::Compile(CompileError::InvalidAssignmentTarget { .. })));
    assert!(matches!(fail("f = fn(1) { 1 }"),
                     Error::Compile(CompileError::InvalidParameter { found, .. }) if found == "1"));
    assert!(matches!(fail("f = fn(a; b) { 1 }"),
                     Error::Compile(CompileError::MalformedFunction { .. })));
    assert!(matches!(fail("f(1; 2)"), Error::Compile(CompileError::MalformedArguments { .. })));
    assert!(matches!(fail(r#""\q""#), Error::Compile(CompileError::InvalidString { .. })));
}

#[test]
fn compile_errors_stop_the_whole_program() {
    // The first statement would fail at runtime; compilation fails before it runs.
    assert!(matches!(fail("1 / 0\n1 = 2"), Error::Compile(_)));
}

#[test]
fn compiled_programs_can_be_invoked_repeatedly() {
    let root = parse("test", "a = 2\nf = fn(x) { x * a }\nf(21), 1 < 2".as_bytes());
    let first = compile(&root).unwrap();
    let second = compile(&root).unwrap();

    let once = first.invoke(&Environment::new_root()).unwrap();
    let again = first.invoke(&Environment::new_root()).unwrap();
    let recompiled = second.invoke(&Environment::new_root()).unwrap();

    assert_eq!(once, again);
    assert_eq!(once, recompiled);
    assert_eq!(once.program_output(), Value::tuple(vec![int(42), Value::Bool(true)]));
}

#[test]
fn function_values_compare_by_identity() {
    let root = parse("test", "f = fn() { 1 }\ng = f\nh = fn() { 1 }".as_bytes());
    let env = Environment::new_root();
    compile(&root).unwrap().invoke(&env).unwrap();

    assert_eq!(env.get("f"), env.get("g"));
    assert_ne!(env.get("f"), env.get("h"));
}
