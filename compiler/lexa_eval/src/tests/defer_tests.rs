//! Deferred actions and named result slots.

use lexa_ir::{Kind, ProgramBuilder, Stmt};
use pretty_assertions::assert_eq;

use super::{lines, run};
use crate::{EvalError, Value};

/// `defer func(n) { print(n) }(n)`
fn defer_print(b: &ProgramBuilder<'_>, n: i64) -> Stmt {
    b.defer(
        b.func(&["n"], vec![b.print(vec![b.ident("n")])]),
        vec![b.int(n)],
    )
}

#[test]
fn deferred_mutation_of_named_result() {
    let run = run(|b| {
        vec![
            b.let_(
                "f6",
                b.func_named(
                    &[],
                    ("i", Kind::Int),
                    vec![
                        b.assign("i", b.int(10)),
                        b.defer(b.func(&[], vec![b.add_assign("i", b.int(1))]), vec![]),
                        b.ret(b.int(5)),
                    ],
                ),
            ),
            b.let_("closure", b.call_named("f6", vec![])),
        ]
    });
    assert_eq!(run.result, Ok(()));
    assert_eq!(run.global("closure"), Some(Value::Int(6)));
}

#[test]
fn deferred_actions_run_newest_first() {
    let run = run(|b| {
        vec![
            b.let_(
                "f",
                b.func(
                    &[],
                    vec![
                        defer_print(b, 1),
                        defer_print(b, 2),
                        defer_print(b, 3),
                        b.print(vec![b.str("body")]),
                    ],
                ),
            ),
            b.expr(b.call_named("f", vec![])),
            b.print(vec![b.str("after")]),
        ]
    });
    assert_eq!(run.result, Ok(()));
    assert_eq!(run.lines(), lines(&["body", "3", "2", "1", "after"]));
}

#[test]
fn deferred_arguments_are_evaluated_at_registration() {
    let run = run(|b| {
        vec![
            b.let_(
                "f",
                b.func(
                    &[],
                    vec![
                        b.let_("x", b.int(1)),
                        b.defer(
                            b.func(&["v"], vec![b.print(vec![b.ident("v")])]),
                            vec![b.ident("x")],
                        ),
                        b.defer(b.func(&[], vec![b.print(vec![b.ident("x")])]), vec![]),
                        b.assign("x", b.int(2)),
                    ],
                ),
            ),
            b.expr(b.call_named("f", vec![])),
        ]
    });
    assert_eq!(run.result, Ok(()));
    // The captured read sees the later write; the argument does not.
    assert_eq!(run.lines(), lines(&["2", "1"]));
}

#[test]
fn deferred_write_cannot_change_unnamed_result() {
    let run = run(|b| {
        vec![
            b.let_(
                "f",
                b.func(
                    &[],
                    vec![
                        b.let_("x", b.int(5)),
                        b.defer(b.func(&[], vec![b.incr("x")]), vec![]),
                        b.ret(b.ident("x")),
                    ],
                ),
            ),
            b.let_("r", b.call_named("f", vec![])),
        ]
    });
    assert_eq!(run.result, Ok(()));
    assert_eq!(run.global("r"), Some(Value::Int(5)));
}

#[test]
fn bare_return_yields_slot() {
    let run = run(|b| {
        vec![
            b.let_(
                "f",
                b.func_named(
                    &[],
                    ("r", Kind::Int),
                    vec![
                        b.assign("r", b.int(7)),
                        b.defer(b.func(&[], vec![b.add_assign("r", b.int(3))]), vec![]),
                        b.ret_bare(),
                        b.assign("r", b.int(100)),
                    ],
                ),
            ),
            b.let_("r", b.call_named("f", vec![])),
        ]
    });
    assert_eq!(run.result, Ok(()));
    assert_eq!(run.global("r"), Some(Value::Int(10)));
}

#[test]
fn falling_off_the_end_yields_slot_or_unit() {
    let run = run(|b| {
        vec![
            b.let_(
                "named",
                b.func_named(&[], ("s", Kind::Str), vec![b.assign("s", b.str("set"))]),
            ),
            b.let_("zero", b.func_named(&[], ("n", Kind::Int), vec![])),
            b.let_("plain", b.func(&[], vec![])),
            b.let_("a", b.call_named("named", vec![])),
            b.let_("z", b.call_named("zero", vec![])),
            b.let_("u", b.call_named("plain", vec![])),
        ]
    });
    assert_eq!(run.result, Ok(()));
    assert_eq!(run.global("a"), Some(Value::from("set")));
    assert_eq!(run.global("z"), Some(Value::Int(0)));
    assert_eq!(run.global("u"), Some(Value::Unit));
}

#[test]
fn deferred_actions_run_when_body_fails() {
    let run = run(|b| {
        vec![
            b.let_(
                "f",
                b.func(
                    &[],
                    vec![
                        b.defer(b.func(&[], vec![b.print(vec![b.str("cleanup")])]), vec![]),
                        b.ret(b.ident("missing")),
                    ],
                ),
            ),
            b.expr(b.call_named("f", vec![])),
            b.print(vec![b.str("unreachable")]),
        ]
    });
    assert_eq!(
        run.result,
        Err(EvalError::UnboundName {
            name: "missing".to_owned()
        })
    );
    assert_eq!(run.lines(), lines(&["cleanup"]));
}

#[test]
fn failing_deferred_action_does_not_skip_the_rest() {
    let run = run(|b| {
        vec![
            b.let_(
                "f",
                b.func(
                    &[],
                    vec![
                        defer_print(b, 1),
                        b.defer(b.func(&[], vec![b.expr(b.ident("missing"))]), vec![]),
                        defer_print(b, 3),
                    ],
                ),
            ),
            b.expr(b.call_named("f", vec![])),
        ]
    });
    assert_eq!(
        run.result,
        Err(EvalError::UnboundName {
            name: "missing".to_owned()
        })
    );
    assert_eq!(run.lines(), lines(&["3", "1"]));
}

#[test]
fn latest_deferred_failure_wins() {
    let run = run(|b| {
        vec![
            b.let_(
                "f",
                b.func(
                    &[],
                    vec![
                        b.defer(b.func(&[], vec![b.expr(b.ident("second"))]), vec![]),
                        b.defer(b.func(&[], vec![b.expr(b.ident("first"))]), vec![]),
                        b.expr(b.ident("body")),
                    ],
                ),
            ),
            b.expr(b.call_named("f", vec![])),
        ]
    });
    assert_eq!(
        run.result,
        Err(EvalError::UnboundName {
            name: "second".to_owned()
        })
    );
}

#[test]
fn deferred_actions_belong_to_their_own_call() {
    let run = run(|b| {
        vec![
            b.let_("inner", b.func(&[], vec![defer_print(b, 2)])),
            b.let_(
                "outer",
                b.func(
                    &[],
                    vec![
                        defer_print(b, 1),
                        b.expr(b.call_named("inner", vec![])),
                        b.print(vec![b.str("outer body")]),
                    ],
                ),
            ),
            b.expr(b.call_named("outer", vec![])),
        ]
    });
    assert_eq!(run.result, Ok(()));
    assert_eq!(run.lines(), lines(&["2", "outer body", "1"]));
}

#[test]
fn defer_of_non_function_is_rejected() {
    let run = run(|b| {
        vec![
            b.let_("f", b.func(&[], vec![b.defer(b.int(1), vec![])])),
            b.expr(b.call_named("f", vec![])),
        ]
    });
    assert_eq!(
        run.result,
        Err(EvalError::TypeMismatch {
            expected: "func",
            got: "int"
        })
    );
}

#[test]
fn top_level_defer_runs_when_program_ends() {
    let run = run(|b| {
        vec![
            b.defer(b.func(&[], vec![b.print(vec![b.str("done")])]), vec![]),
            b.print(vec![b.str("body")]),
        ]
    });
    assert_eq!(run.result, Ok(()));
    assert_eq!(run.lines(), lines(&["body", "done"]));
}

#[test]
fn top_level_return_ends_program() {
    let run = run(|b| {
        vec![
            b.print(vec![b.int(1)]),
            b.ret_bare(),
            b.print(vec![b.int(2)]),
        ]
    });
    assert_eq!(run.result, Ok(()));
    assert_eq!(run.lines(), lines(&["1"]));
}

#[test]
fn defer_in_nested_scopes_runs_at_function_exit() {
    let run = run(|b| {
        vec![
            b.let_(
                "f",
                b.func(
                    &[],
                    vec![
                        b.counted(
                            "i",
                            b.int(0),
                            b.int(2),
                            vec![b.block(vec![b.defer(
                                b.func(&["n"], vec![b.print(vec![b.ident("n")])]),
                                vec![b.ident("i")],
                            )])],
                        )
                        .into(),
                        b.print(vec![b.str("body")]),
                    ],
                ),
            ),
            b.expr(b.call_named("f", vec![])),
        ]
    });
    assert_eq!(run.result, Ok(()));
    assert_eq!(run.lines(), lines(&["body", "1", "0"]));
}
