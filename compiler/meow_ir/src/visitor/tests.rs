use super::*;
use crate::SourceLocation;
use pretty_assertions::assert_eq;
use std::sync::Arc;

/// Stand-in for a generator: records one "operation" per expression.
#[derive(Default)]
struct RecordOps {
    ops: Vec<(String, u32, u32, String)>,
}

impl<'ast> Visitor<'ast> for RecordOps {
    fn visit_expr(&mut self, expr: &'ast Expr) {
        let loc = expr.location();
        self.ops.push((
            loc.file().to_owned(),
            loc.line(),
            loc.column(),
            expr.text().to_owned(),
        ));
    }
}

struct ModulesSeen(usize);

impl<'ast> Visitor<'ast> for ModulesSeen {
    fn visit_module(&mut self, module: &'ast Module) {
        self.0 += 1;
        walk_module(self, module);
    }
}

fn sample() -> Module {
    let file: Arc<str> = Arc::from("meow.meow");
    Module::new(
        SourceLocation::start_of(Arc::clone(&file)),
        vec![
            Expr::keyword(SourceLocation::new(Arc::clone(&file), 1, 1)),
            Expr::keyword(SourceLocation::new(file, 2, 4)),
        ],
    )
}

#[test]
fn walk_visits_exprs_in_order() {
    let module = sample();
    let mut recorder = RecordOps::default();
    recorder.visit_module(&module);
    assert_eq!(
        recorder.ops,
        vec![
            ("meow.meow".to_owned(), 1, 1, "meow".to_owned()),
            ("meow.meow".to_owned(), 2, 4, "meow".to_owned()),
        ]
    );
}

#[test]
fn overriding_visit_module_can_still_walk() {
    let module = sample();
    let mut seen = ModulesSeen(0);
    seen.visit_module(&module);
    assert_eq!(seen.0, 1);
}

#[test]
fn empty_module_visits_nothing() {
    let module = Module::new(SourceLocation::start_of(Arc::from("x")), Vec::new());
    let mut recorder = RecordOps::default();
    recorder.visit_module(&module);
    assert!(recorder.ops.is_empty());
}
