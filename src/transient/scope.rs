/*!
Guards for temporary assumptions and assertions.

Each guard makes some temporary extension on creation and undoes the extension when dropped.
So, the extension is undone on every path out of the scope of the guard, including an early return on an unknown check or an error propagated with `?`.

- A [ScopedAssumption] appends an assumption to a sequence of assumptions, and removes the assumption when dropped.
- A [ScopedPush] pushes a scope to a backend, and pops the scope when dropped.
  Any assertion made through the guard is removed together with the scope.

```rust
# use conmux::backend::Backend;
# use conmux::context::Context;
# use conmux::reports::Report;
# use conmux::transient::scope::ScopedPush;
let mut context = Context::default();
let p = context.term_db.fresh_bool("p").unwrap();
let not_p = context.term_db.mk_not(p).unwrap();

assert!(context.assert_expr(p).is_ok());
{
    let mut scope = ScopedPush::new(&mut context);
    assert!(scope.assert_expr(not_p).is_ok());
    assert_eq!(scope.check_sat(&[]), Ok(Report::Unsatisfiable));
}
assert_eq!(context.scope_depth(), 0);
assert_eq!(context.check_sat(&[]), Ok(Report::Satisfiable));
```
*/

use std::ops::{Deref, DerefMut};

use crate::{
    backend::Backend,
    misc::log::targets::{self},
    structures::term::TermId,
};

/// An assumption appended to a sequence of assumptions for the lifetime of the guard.
pub struct ScopedAssumption<'a> {
    assumptions: &'a mut Vec<TermId>,
}

impl<'a> ScopedAssumption<'a> {
    pub fn push(assumptions: &'a mut Vec<TermId>, assumption: TermId) -> Self {
        assumptions.push(assumption);
        ScopedAssumption { assumptions }
    }
}

impl Deref for ScopedAssumption<'_> {
    type Target = [TermId];

    fn deref(&self) -> &Self::Target {
        self.assumptions
    }
}

impl Drop for ScopedAssumption<'_> {
    fn drop(&mut self) {
        self.assumptions.pop();
    }
}

/// A scope pushed to a backend for the lifetime of the guard.
///
/// The backend is accessed through the guard while the guard lives.
pub struct ScopedPush<'a, B: Backend> {
    backend: &'a mut B,
}

impl<'a, B: Backend> ScopedPush<'a, B> {
    pub fn new(backend: &'a mut B) -> Self {
        backend.push();
        log::trace!(target: targets::SCOPE, "Scope guard at depth {}", backend.scope_depth());
        ScopedPush { backend }
    }
}

impl<B: Backend> Deref for ScopedPush<'_, B> {
    type Target = B;

    fn deref(&self) -> &Self::Target {
        self.backend
    }
}

impl<B: Backend> DerefMut for ScopedPush<'_, B> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.backend
    }
}

impl<B: Backend> Drop for ScopedPush<'_, B> {
    fn drop(&mut self) {
        // A pop may only fail if the scope of the guard was popped through the guard.
        if let Err(e) = self.backend.pop() {
            log::error!(target: targets::SCOPE, "! Scope guard failed to pop: {e:?}");
        }
    }
}
