//! End-to-end runs of Figura programs: source text in, variables, output
//! and problems out.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use fig_eval::EvalErrorKind;
use fig_lexer::LexErrorKind;
use figc::{Canvas, Config, PrintHandler, Problem, Value};
use pretty_assertions::assert_eq;
use std::rc::Rc;

fn globals_with(config: &Config, source: &str, names: &[&str]) -> Vec<Value> {
    let program = figc::check(source, config).unwrap();
    let mut interpreter = figc::interpreter(config, PrintHandler::silent(), Canvas::silent());
    interpreter.interpret(&program).unwrap();
    names
        .iter()
        .map(|name| {
            interpreter
                .variable(name)
                .unwrap_or_else(|| panic!("{name} is not defined"))
        })
        .collect()
}

fn global(source: &str, name: &str) -> Value {
    globals_with(&Config::default(), source, &[name]).remove(0)
}

fn globals(source: &str, names: &[&str]) -> Vec<Value> {
    globals_with(&Config::default(), source, names)
}

fn problem_with(config: &Config, source: &str) -> Problem {
    figc::run(source, config, PrintHandler::silent(), Canvas::silent()).unwrap_err()
}

fn problem(source: &str) -> Problem {
    problem_with(&Config::default(), source)
}

fn eval_error(source: &str) -> EvalErrorKind {
    match problem(source) {
        Problem::Eval(err) => err.kind,
        other => panic!("expected a runtime error, got {other}"),
    }
}

fn ints(values: &[i64]) -> Value {
    Value::list(values.iter().copied().map(Value::Int))
}

#[test]
fn variables() {
    assert_eq!(global("var a = 1;", "a"), Value::Int(1));
    assert_eq!(global("var a = 1; a = a + 1;", "a"), Value::Int(2));
    assert_eq!(global("var a_list = [1, 2, 3];", "a_list"), ints(&[1, 2, 3]));
    assert_eq!(
        global("var a_list = [1, 2, 3]; a_list[0] = 4;", "a_list"),
        ints(&[4, 2, 3])
    );
    assert_eq!(
        global("var a_list = [1, 2, 3]; a_list[0 + 1] = 0;", "a_list"),
        ints(&[1, 0, 3])
    );
    assert_eq!(
        global(
            "var a = [0, 1, 2]; var b = [3, 4, 5]; var c = [a, b]; var d = c[1][1];",
            "d"
        ),
        Value::Int(4)
    );
}

#[test]
fn variable_errors() {
    assert_eq!(
        eval_error("a = 1;"),
        EvalErrorKind::NonExistingVariable { name: "a".into() }
    );
    assert_eq!(
        eval_error("var a_list = [1, 2, 3]; a_list[3] = 4;"),
        EvalErrorKind::IndexOutOfRange {
            list: "a_list".into()
        }
    );
    assert_eq!(
        eval_error("var a_list = [1, 2, 3]; a_list[3.0] = 4;"),
        EvalErrorKind::InvalidIndex {
            list: "a_list".into(),
            got: "float",
        }
    );
    assert_eq!(
        eval_error("var a = 0; var a = 1;"),
        EvalErrorKind::VariableRedeclaration { name: "a".into() }
    );
}

#[test]
fn function_calls() {
    assert_eq!(global("var i = 1; var s = str(i);", "s"), Value::string("1"));
    assert_eq!(global("var s = \"1\"; var i = int(s);", "i"), Value::Int(1));
    assert_eq!(global("def foo(){return 1;} var a = foo();", "a"), Value::Int(1));
    assert_eq!(
        globals(
            "def foo(a){a = a + 1; return a;} var c = 1; var b = foo(c);",
            &["c", "b"]
        ),
        vec![Value::Int(1), Value::Int(2)]
    );
    assert_eq!(
        global("def foo(){return 1;} var a = [foo(), 2, 3];", "a"),
        ints(&[1, 2, 3])
    );
    assert_eq!(
        global("def foo(a){return a; a = 0;} var result = foo(1);", "result"),
        Value::Int(1)
    );
    assert_eq!(
        global("def foo(a){a = a + 1; return a; a = 0;} var b = foo(0);", "b"),
        Value::Int(1)
    );
}

#[test]
fn function_call_errors() {
    assert_eq!(
        eval_error("var s = \"string\"; var i = int(s);"),
        EvalErrorKind::TypeCasting {
            target: "int",
            got: "str",
        }
    );
    assert_eq!(
        eval_error("var i = 3; var j = 2; float(i, j);"),
        EvalErrorKind::InvalidNumberOfArguments {
            function: "float".into(),
            expected: 1,
            got: 2,
        }
    );
    assert_eq!(
        eval_error("def foo(a){return a;} var result = foo();"),
        EvalErrorKind::InvalidNumberOfArguments {
            function: "foo".into(),
            expected: 1,
            got: 0,
        }
    );
    assert_eq!(
        eval_error("2 + 3; def foo(){return;} var a = foo();"),
        EvalErrorKind::InvalidVariableAssignment { name: "a".into() }
    );
    assert_eq!(
        eval_error("var a = foo();"),
        EvalErrorKind::NonExistingFunction { name: "foo".into() }
    );
    assert_eq!(
        eval_error("print(3);"),
        EvalErrorKind::InvalidFunCallArguments {
            function: "print".into()
        }
    );
    assert_eq!(
        eval_error("var a = 1; return;"),
        EvalErrorKind::ReturnOutsideFunction
    );
    assert_eq!(
        eval_error("def foo(){return;} def foo(a){return a;}"),
        EvalErrorKind::FunctionRedefinition { name: "foo".into() }
    );
}

#[test]
fn recursion_limit() {
    assert_eq!(
        eval_error("def foo(){foo();} var a = foo();"),
        EvalErrorKind::RecursionLimit {
            function: "foo".into()
        }
    );

    let config = Config::default().with_max_recursion_depth(5);
    let counting = "var calls = 0; def down(n) { calls = calls + 1; if (n > 0) { down(n - 1); } }";
    assert_eq!(
        globals_with(&config, &format!("{counting} down(5);"), &["calls"]),
        vec![Value::Int(6)]
    );
    assert!(matches!(
        problem_with(&config, &format!("{counting} down(6);")),
        Problem::Eval(err) if err.kind == EvalErrorKind::RecursionLimit { function: "down".into() }
    ));
}

#[test]
fn if_else_scoping() {
    assert_eq!(
        global(
            "def bar(){var a=5; if(a>0){var b=10; a=a+b;} return a;} var result=bar();",
            "result"
        ),
        Value::Int(15)
    );
    assert_eq!(
        globals(
            "var z=30; def baz(){var z=40; if(True){z=50;} return z;} var result=baz();",
            &["result", "z"]
        ),
        vec![Value::Int(50), Value::Int(30)]
    );
    assert_eq!(
        globals(
            "var z=30; def baz(){var z=40; if(True){var z=50;} return z;} var result=baz();",
            &["result", "z"]
        ),
        vec![Value::Int(40), Value::Int(30)]
    );
    assert_eq!(
        global("var a = 0; if( a > 0){ a = 1;} else{ a = 2;}", "a"),
        Value::Int(2)
    );
}

#[test]
fn while_loops() {
    assert_eq!(global("var a = 0; while(a < 5){ a = a + 1;}", "a"), Value::Int(5));
    assert_eq!(
        global("var a = 0; while(a < 5){ a = a + 1;} var b = a;", "b"),
        Value::Int(5)
    );
    assert_eq!(
        global("var a = 0; while(True){ a = a + 1; if(a == 5){ break;}}", "a"),
        Value::Int(5)
    );
    let nested_return = "def foo(){ var i = 0;
        while(i<3){var j=0; while(j<3){ if (i == 1 && j == 1){ return i;} j=j+1;} i=i+1;} }
        var a = foo();";
    assert_eq!(global(nested_return, "a"), Value::Int(1));
    assert_eq!(
        globals(
            "var a = 1; var b = 0; while(a < 3){ while(b < 5){ b = b + a;} a = a + 1;}",
            &["a", "b"]
        ),
        vec![Value::Int(3), Value::Int(5)]
    );
}

#[test]
fn break_outside_loop() {
    assert_eq!(eval_error("var a = 0; break;"), EvalErrorKind::BreakOutsideLoop);
    assert_eq!(
        eval_error("def foo(){var a = 0; while(a < 5){ a = a + 1;}} foo(); break;"),
        EvalErrorKind::BreakOutsideLoop
    );
}

#[test]
fn for_loops() {
    assert_eq!(
        global("var a = [0, 1, 2]; for(i in a){ a[i] = a[i] + 1;}", "a"),
        ints(&[1, 2, 3])
    );
    assert_eq!(
        global("var sum = 0; var a = [1, 2, 3]; for(i in a){ sum = sum + i;}", "sum"),
        Value::Int(6)
    );
    assert_eq!(
        global("var sum = 0; for (i in [1, 2, 3]){ sum = sum + i;}", "sum"),
        Value::Int(6)
    );
    assert_eq!(
        global("var a = [0, 1, 2]; for(i in a){ a[i] = 0;}", "a"),
        ints(&[0, 0, 0])
    );
    assert_eq!(
        eval_error("var a = [0, 1, 2]; for(i in a){ a = 0;} i = 0;"),
        EvalErrorKind::NonExistingVariable { name: "i".into() }
    );
    assert_eq!(
        eval_error("var i = 0; for(i in [1,2,3]){ i = i + 1;}"),
        EvalErrorKind::IterableName { name: "i".into() }
    );
}

#[test]
fn expressions() {
    let cases = [
        ("1 + 2", Value::Int(3)),
        ("1 - 2", Value::Int(-1)),
        ("1 * 2", Value::Int(2)),
        ("1 / 2", Value::Float(0.5)),
        ("1 + 2 * 3", Value::Int(7)),
        ("(1 + 2) * 3", Value::Int(9)),
        ("1 + 2 / 3", Value::Float(1.0 + 2.0 / 3.0)),
        ("1 - 2 * 3", Value::Int(-5)),
        ("1 - 2 / 3", Value::Float(1.0 - 2.0 / 3.0)),
        ("1 * 2 / 3", Value::Float(2.0 / 3.0)),
        ("(2 + 3) * (4 - 5) / 2", Value::Float(-2.5)),
        ("4 * 2 ** 3", Value::Int(32)),
        ("7 // 2", Value::Int(3)),
        ("-7 % 3", Value::Int(2)),
        ("True or (False and (not True))", Value::Bool(true)),
        ("(2 + 3) * 4 > 10 and not (4 / 2 == 2.0)", Value::Bool(false)),
        ("3 ** 2 == 9 or (5 - 3) * 2 < 5", Value::Bool(true)),
        (
            "not (((5 + (3 * 2)) < 10) and ((4 / 2) ** 2 != 4.0))",
            Value::Bool(true),
        ),
        ("\"string\" == \"string\"", Value::Bool(true)),
        ("\"string\" != \"string\"", Value::Bool(false)),
        ("[1, 2] == [1, 2]", Value::Bool(true)),
    ];
    for (expr, expected) in cases {
        assert_eq!(global(&format!("var a = {expr};"), "a"), expected, "{expr}");
    }
}

#[test]
fn expression_errors() {
    for source in ["if(1 or 2){var a = 1;}", "if(1 and True){var a = 1;}"] {
        assert!(
            matches!(eval_error(source), EvalErrorKind::InvalidType { .. }),
            "{source}"
        );
    }
    assert_eq!(
        eval_error("var a = 1 + \"string\";"),
        EvalErrorKind::InvalidType {
            expected: "number",
            got: "str",
        }
    );
    assert_eq!(eval_error("var a = 1 == \"1\";"), EvalErrorKind::MismatchedTypes);
    assert_eq!(eval_error("1 / 0;"), EvalErrorKind::DivisionByZero);
}

#[test]
fn print_output_is_captured() {
    let output = PrintHandler::buffer();
    let source = "print(\"Hello, World!\");
        def greet(name) { print(\"hi \", name); }
        for (n in [\"a\", \"b\"]) { greet(n); }
        print(str(1.5), \" \", str(True), \" \", str([1, 'x']));";
    figc::run(source, &Config::default(), Rc::clone(&output), Canvas::silent()).unwrap();
    assert_eq!(output.output(), "Hello, World!\nhi a\nhi b\n1.5 True [1, 'x']\n");
}

#[test]
fn output_before_a_failure_is_kept() {
    let output = PrintHandler::buffer();
    let result = figc::run(
        "print('before'); var x = 1 / 0; print('after');",
        &Config::default(),
        Rc::clone(&output),
        Canvas::silent(),
    );
    assert!(result.is_err());
    assert_eq!(output.output(), "before\n");
}

#[test]
fn same_ast_interprets_identically_twice() {
    let config = Config::default();
    let source = "var l = [1, 2, 3]; def double(x) { return x * 2; }
        for (x in l) { x = double(x); } var total = l[0] + l[1] + l[2];";
    let program = figc::check(source, &config).unwrap();
    let snapshot = program.clone();

    let mut totals = Vec::new();
    for _ in 0..2 {
        let mut interpreter = figc::interpreter(&config, PrintHandler::silent(), Canvas::silent());
        interpreter.interpret(&program).unwrap();
        totals.push(interpreter.variable("total"));
    }

    assert_eq!(totals, vec![Some(Value::Int(12)), Some(Value::Int(12))]);
    assert_eq!(program, snapshot);
}

// Diagnostics

#[test]
fn runtime_diagnostic_rendering() {
    let problem = problem("1 / 0;");
    assert_eq!(problem.to_string(), "Division by zero at 1:3");
    assert_eq!(
        problem.to_diagnostic().render(),
        "error[E6017]: Division by zero\n  --> 1:3"
    );
}

#[test]
fn runtime_diagnostics_carry_notes() {
    let rendered = problem("var a = 1 == 1.0;").to_diagnostic().render();
    assert!(rendered.starts_with("error[E6019]: Mismatched types of operands in operation"));
    assert!(rendered.contains("= note:"));

    let rendered = problem("def foo(){foo();} foo();").to_diagnostic().render();
    assert!(rendered.starts_with("error[E6020]: Recursion limit exceeded for function: foo"));
    assert!(rendered.contains("= note:"));
}

#[test]
fn lexical_problems() {
    let problem = problem("var s = \"abc");
    assert!(matches!(
        &problem,
        Problem::Lex(err) if err.kind == LexErrorKind::UnclosedString
    ));
    assert_eq!(problem.position().to_string(), "1:9");
    assert!(problem
        .to_diagnostic()
        .render()
        .starts_with("error[E0004]: Unclosed string"));

    let config = Config::default().with_max_identifier_length(3);
    assert!(matches!(
        problem_with(&config, "var abcd = 1;"),
        Problem::Lex(err) if err.kind == LexErrorKind::IdentifierTooLong { max: 3 }
    ));
}

#[test]
fn syntax_problems() {
    let problem = problem("var = 1;");
    assert!(matches!(problem, Problem::Parse(_)));
    assert_eq!(problem.position().to_string(), "1:5");
    let rendered = problem.to_diagnostic().render();
    assert!(rendered.starts_with("error[E1001]"), "{rendered}");
    assert!(rendered.contains("  --> 1:5"), "{rendered}");
}

#[test]
fn tracing_init_is_idempotent() {
    figc::init_tracing();
    figc::init_tracing();
    assert_eq!(global("var a = 1;", "a"), Value::Int(1));
}
