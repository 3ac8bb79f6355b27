use conmux::{
    backend::Backend,
    context::Context,
    procedures::consequences::consequences,
    reports::Report,
    structures::{consequence::Consequence, term::TermId},
};

fn fresh_context() -> Context {
    #[cfg(feature = "log")]
    let _ = env_logger::builder().is_test(true).try_init();

    Context::default()
}

/// Checks the premises of each consequence, together with the negation of the literal, are unsatisfiable.
fn assert_entailed(context: &mut Context, found: &[Consequence]) {
    for consequence in found {
        let negation = context.term_db.mk_not(consequence.literal()).unwrap();
        let mut assumptions = consequence.premises().to_vec();
        assumptions.push(negation);
        assert_eq!(context.check_sat(&assumptions), Ok(Report::Unsatisfiable));
    }
}

fn not_both(context: &mut Context, p: TermId, q: TermId) -> TermId {
    let not_p = context.term_db.mk_not(p).unwrap();
    let not_q = context.term_db.mk_not(q).unwrap();
    context.term_db.mk_or(&[not_p, not_q]).unwrap()
}

mod worked_examples {

    use super::*;

    #[test]
    fn fixed_integer() {
        let mut ctx = fresh_context();

        let x = ctx.term_db.fresh_int("x").unwrap();
        let five = ctx.term_db.mk_int(5).unwrap();
        let x_five = ctx.term_db.mk_eq(x, five).unwrap();

        assert!(ctx.assert_expr(x_five).is_ok());

        let Ok((report, found)) = consequences(&mut ctx, &[], &[x]) else {
            panic!("Consequences failed");
        };

        assert_eq!(report, Report::Satisfiable);
        assert_eq!(found, vec![Consequence::new(vec![], x_five)]);

        let implication = found[0].as_implication(&mut ctx.term_db).unwrap();
        let the_true = ctx.term_db.mk_true();
        assert_eq!(implication, ctx.term_db.mk_implies(the_true, x_five).unwrap());
    }

    #[test]
    fn unconstrained() {
        let mut ctx = fresh_context();

        let p = ctx.term_db.fresh_bool("p").unwrap();
        let y = ctx.term_db.fresh_bool("y").unwrap();
        assert!(ctx.assert_expr(p).is_ok());

        let Ok((report, found)) = consequences(&mut ctx, &[], &[y]) else {
            panic!("Consequences failed");
        };

        assert_eq!(report, Report::Satisfiable);
        assert!(found.is_empty());
    }

    #[test]
    fn unconstrained_but_mentioned() {
        let mut ctx = fresh_context();

        let y = ctx.term_db.fresh_bool("y").unwrap();
        let not_y = ctx.term_db.mk_not(y).unwrap();
        let excluded_middle = ctx.term_db.mk_or(&[y, not_y]).unwrap();
        assert!(ctx.assert_expr(excluded_middle).is_ok());

        let Ok((report, found)) = consequences(&mut ctx, &[], &[y]) else {
            panic!("Consequences failed");
        };

        assert_eq!(report, Report::Satisfiable);
        assert!(found.is_empty());
        assert_eq!(ctx.counters.checks, 2);
    }

    #[test]
    fn unsatisfiable_assumptions() {
        let mut ctx = fresh_context();

        let [p, q] = ["p", "q"].map(|name| ctx.term_db.fresh_bool(name).unwrap());
        let not_p = ctx.term_db.mk_not(p).unwrap();
        assert!(ctx.assert_expr(p).is_ok());

        let Ok((report, found)) = consequences(&mut ctx, &[not_p], &[p, q]) else {
            panic!("Consequences failed");
        };

        assert_eq!(report, Report::Unsatisfiable);
        assert!(found.is_empty());
        assert_eq!(ctx.counters.checks, 1);
    }
}

mod booleans {

    use super::*;

    #[test]
    fn direct() {
        let mut ctx = fresh_context();

        let [p, q] = ["p", "q"].map(|name| ctx.term_db.fresh_bool(name).unwrap());
        let p_q = ctx.term_db.mk_implies(p, q).unwrap();
        assert!(ctx.assert_expr(p_q).is_ok());

        let Ok((report, found)) = consequences(&mut ctx, &[p], &[q]) else {
            panic!("Consequences failed");
        };

        assert_eq!(report, Report::Satisfiable);
        assert_eq!(found, vec![Consequence::new(vec![p], q)]);
    }

    #[test]
    fn negative() {
        let mut ctx = fresh_context();

        let [p, q] = ["p", "q"].map(|name| ctx.term_db.fresh_bool(name).unwrap());
        let not_both = not_both(&mut ctx, p, q);
        assert!(ctx.assert_expr(not_both).is_ok());

        let Ok((report, found)) = consequences(&mut ctx, &[p], &[q]) else {
            panic!("Consequences failed");
        };

        let not_q = ctx.term_db.mk_not(q).unwrap();

        assert_eq!(report, Report::Satisfiable);
        assert_eq!(found, vec![Consequence::new(vec![p], not_q)]);
    }

    #[test]
    fn irrelevant_assumptions_dropped() {
        let mut ctx = fresh_context();

        let [p, q, r, s] = ["p", "q", "r", "s"].map(|name| ctx.term_db.fresh_bool(name).unwrap());
        let p_q = ctx.term_db.mk_implies(p, q).unwrap();
        let q_r = ctx.term_db.mk_implies(q, r).unwrap();
        assert!(ctx.assert_expr(p_q).is_ok());
        assert!(ctx.assert_expr(q_r).is_ok());

        let Ok((report, found)) = consequences(&mut ctx, &[s, p], &[r]) else {
            panic!("Consequences failed");
        };

        assert_eq!(report, Report::Satisfiable);
        assert_eq!(found, vec![Consequence::new(vec![p], r)]);
        assert_entailed(&mut ctx, &found);
    }

    #[test]
    fn fixed_without_premises() {
        let mut ctx = fresh_context();

        let [p, q] = ["p", "q"].map(|name| ctx.term_db.fresh_bool(name).unwrap());
        let not_q = ctx.term_db.mk_not(q).unwrap();
        let p_or_q = ctx.term_db.mk_or(&[p, q]).unwrap();
        assert!(ctx.assert_expr(not_q).is_ok());
        assert!(ctx.assert_expr(p_or_q).is_ok());

        let Ok((report, found)) = consequences(&mut ctx, &[], &[q, p]) else {
            panic!("Consequences failed");
        };

        assert_eq!(report, Report::Satisfiable);
        assert_eq!(
            found,
            vec![Consequence::new(vec![], not_q), Consequence::new(vec![], p)]
        );
    }

    #[test]
    fn order_follows_variables() {
        let mut ctx = fresh_context();

        let [p, q, r, s] = ["p", "q", "r", "s"].map(|name| ctx.term_db.fresh_bool(name).unwrap());
        let p_q = ctx.term_db.mk_implies(p, q).unwrap();
        let p_r = ctx.term_db.mk_implies(p, r).unwrap();
        let s_or_q = ctx.term_db.mk_or(&[s, q]).unwrap();
        for assertion in [p_q, p_r, s_or_q] {
            assert!(ctx.assert_expr(assertion).is_ok());
        }

        let Ok((report, found)) = consequences(&mut ctx, &[p], &[s, r, q, r]) else {
            panic!("Consequences failed");
        };

        assert_eq!(report, Report::Satisfiable);
        let literals = found.iter().map(|c| c.literal()).collect::<Vec<_>>();
        assert_eq!(literals, vec![r, q, r]);
    }

    #[test]
    fn compound_boolean() {
        let mut ctx = fresh_context();

        let [p, q] = ["p", "q"].map(|name| ctx.term_db.fresh_bool(name).unwrap());
        let p_and_q = ctx.term_db.mk_and(&[p, q]).unwrap();

        let Ok((report, found)) = consequences(&mut ctx, &[p, q], &[p_and_q]) else {
            panic!("Consequences failed");
        };

        let the_true = ctx.term_db.mk_true();
        let fixed = ctx.term_db.mk_eq(p_and_q, the_true).unwrap();

        assert_eq!(report, Report::Satisfiable);
        assert_eq!(found, vec![Consequence::new(vec![p, q], fixed)]);
        assert_entailed(&mut ctx, &found);
    }
}

mod integers {

    use super::*;

    #[test]
    fn fixed_by_assumption() {
        let mut ctx = fresh_context();

        let [p, q] = ["p", "q"].map(|name| ctx.term_db.fresh_bool(name).unwrap());
        let x = ctx.term_db.fresh_int("x").unwrap();
        let three = ctx.term_db.mk_int(3).unwrap();
        let x_three = ctx.term_db.mk_eq(x, three).unwrap();
        let p_x_three = ctx.term_db.mk_implies(p, x_three).unwrap();
        assert!(ctx.assert_expr(p_x_three).is_ok());

        let Ok((report, found)) = consequences(&mut ctx, &[q, p], &[x]) else {
            panic!("Consequences failed");
        };

        assert_eq!(report, Report::Satisfiable);
        assert_eq!(found, vec![Consequence::new(vec![p], x_three)]);
        assert_entailed(&mut ctx, &found);
    }

    #[test]
    fn fixed_by_bounds() {
        let mut ctx = fresh_context();

        let x = ctx.term_db.fresh_int("x").unwrap();
        let zero = ctx.term_db.mk_int(0).unwrap();
        let x_le_zero = ctx.term_db.mk_le(x, zero).unwrap();
        let zero_le_x = ctx.term_db.mk_le(zero, x).unwrap();
        assert!(ctx.assert_expr(x_le_zero).is_ok());
        assert!(ctx.assert_expr(zero_le_x).is_ok());

        let Ok((report, found)) = consequences(&mut ctx, &[], &[x]) else {
            panic!("Consequences failed");
        };

        let x_zero = ctx.term_db.mk_eq(x, zero).unwrap();

        assert_eq!(report, Report::Satisfiable);
        assert_eq!(found, vec![Consequence::new(vec![], x_zero)]);
    }

    #[test]
    fn unfixed() {
        let mut ctx = fresh_context();

        let x = ctx.term_db.fresh_int("x").unwrap();
        let zero = ctx.term_db.mk_int(0).unwrap();
        let x_le_zero = ctx.term_db.mk_le(x, zero).unwrap();
        assert!(ctx.assert_expr(x_le_zero).is_ok());

        let Ok((report, found)) = consequences(&mut ctx, &[], &[x]) else {
            panic!("Consequences failed");
        };

        assert_eq!(report, Report::Satisfiable);
        assert!(found.is_empty());
    }

    #[test]
    fn assertions_restored() {
        let mut ctx = fresh_context();

        let x = ctx.term_db.fresh_int("x").unwrap();
        let y = ctx.term_db.fresh_int("y").unwrap();
        let x_eq_y = ctx.term_db.mk_eq(x, y).unwrap();
        let two = ctx.term_db.mk_int(2).unwrap();
        let y_two = ctx.term_db.mk_eq(y, two).unwrap();
        assert!(ctx.assert_expr(x_eq_y).is_ok());

        let Ok((report, found)) = consequences(&mut ctx, &[y_two], &[x, y]) else {
            panic!("Consequences failed");
        };

        assert_eq!(report, Report::Satisfiable);
        assert_eq!(found.len(), 2);
        assert_entailed(&mut ctx, &found);

        assert_eq!(ctx.scope_depth(), 0);
        assert_eq!(ctx.assertions(), Ok(vec![x_eq_y]));
    }
}

mod completeness {

    use super::*;

    /// Of p, q, r, s: at most one of p, q, at least one of q, r, and s is free.
    fn small_formula(ctx: &mut Context) -> [TermId; 4] {
        let vars = ["p", "q", "r", "s"].map(|name| ctx.term_db.fresh_bool(name).unwrap());
        let [p, q, r, _] = vars;

        let amo = not_both(ctx, p, q);
        let alo = ctx.term_db.mk_or(&[q, r]).unwrap();
        assert!(ctx.assert_expr(amo).is_ok());
        assert!(ctx.assert_expr(alo).is_ok());

        vars
    }

    #[test]
    fn each_fixed_variable() {
        let mut ctx = fresh_context();
        let vars = small_formula(&mut ctx);
        let [p, q, r, s] = vars;

        let Ok((report, found)) = consequences(&mut ctx, &[p], &vars) else {
            panic!("Consequences failed");
        };

        let not_q = ctx.term_db.mk_not(q).unwrap();

        assert_eq!(report, Report::Satisfiable);
        assert_eq!(
            found,
            vec![
                Consequence::new(vec![p], p),
                Consequence::new(vec![p], not_q),
                Consequence::new(vec![p], r),
            ]
        );
        assert!(!found.iter().any(|c| c.literal() == s));
        assert_entailed(&mut ctx, &found);
    }

    #[test]
    fn unfixed_variables_take_both_values() {
        let mut ctx = fresh_context();
        let vars = small_formula(&mut ctx);

        let Ok((report, found)) = consequences(&mut ctx, &[], &vars) else {
            panic!("Consequences failed");
        };

        assert_eq!(report, Report::Satisfiable);
        assert!(found.is_empty());

        for var in vars {
            let not_var = ctx.term_db.mk_not(var).unwrap();
            assert_eq!(ctx.check_sat(&[var]), Ok(Report::Satisfiable));
            assert_eq!(ctx.check_sat(&[not_var]), Ok(Report::Satisfiable));
        }
    }
}
