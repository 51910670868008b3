//! Scenario tests: whole programs built with `ProgramBuilder`, run to
//! completion, checked through printed output and global values.

mod defer_tests;

use lexa_ir::{ProgramBuilder, SharedInterner, Stmt};

use crate::{buffer_handler, EvalConfig, EvalResult, Evaluator, SharedPrintHandler, Value};

/// A finished program run.
pub(crate) struct Run {
    pub evaluator: Evaluator,
    pub result: EvalResult<()>,
    pub output: SharedPrintHandler,
}

impl Run {
    pub fn lines(&self) -> Vec<String> {
        self.output.lines()
    }

    pub fn global(&self, name: &str) -> Option<Value> {
        self.evaluator.global(name)
    }
}

/// Build a program with `body` and run it under `config`, capturing output.
pub(crate) fn run_with(
    config: EvalConfig,
    body: impl FnOnce(&ProgramBuilder<'_>) -> Vec<Stmt>,
) -> Run {
    crate::init_tracing();
    let interner = SharedInterner::new();
    let program = {
        let b = ProgramBuilder::new(&interner);
        b.program(body(&b))
    };
    let output = buffer_handler();
    let mut evaluator = Evaluator::builder(interner)
        .config(config)
        .print_handler(output.clone())
        .build();
    let result = evaluator.run(&program);
    Run {
        evaluator,
        result,
        output,
    }
}

/// [`run_with`] under the default configuration.
pub(crate) fn run(body: impl FnOnce(&ProgramBuilder<'_>) -> Vec<Stmt>) -> Run {
    run_with(EvalConfig::default(), body)
}

/// Strings as owned lines, for comparing against [`Run::lines`].
pub(crate) fn lines(expected: &[&str]) -> Vec<String> {
    expected.iter().map(|s| (*s).to_owned()).collect()
}
