//! Grammar setup: the left recursion rewrite against the full swft grammar

use std::collections::BTreeSet;
use swft::swft::grammar::{swft_grammar_builder, Alternative, GrammarBuilder, Reducer};

fn declared_rules(builder: &GrammarBuilder) -> BTreeSet<String> {
    builder
        .declarations()
        .iter()
        .map(|d| d.pattern.rule.clone())
        .collect()
}

fn declared_rhs(builder: &GrammarBuilder, rule: &str) -> Vec<String> {
    builder
        .alternatives_for(rule)
        .iter()
        .map(|d| d.pattern.rhs())
        .collect()
}

fn built_rhs(alternatives: &[Alternative]) -> Vec<String> {
    alternatives.iter().map(Alternative::rhs).collect()
}

#[test]
fn test_rewrite_is_a_noop_for_non_recursive_rules() {
    let builder = swft_grammar_builder();
    let grammar = builder.build().unwrap();

    let mut checked = 0;
    for rule in declared_rules(&builder) {
        let recursive = builder
            .alternatives_for(&rule)
            .iter()
            .any(|d| d.pattern.is_left_recursive());
        if recursive {
            continue;
        }
        assert_eq!(
            built_rhs(grammar.alternatives_for(&rule)),
            declared_rhs(&builder, &rule),
            "rule '{rule}' changed"
        );
        assert!(grammar
            .alternatives_for(&rule)
            .iter()
            .all(|a| matches!(a.reducer, Reducer::Build(_))));
        checked += 1;
    }
    assert!(checked > 10);
}

#[test]
fn test_rewrite_disabled_keeps_every_rule() {
    let mut builder = swft_grammar_builder();
    builder.rewrite_left_recursion(false);
    let grammar = builder.build().unwrap();

    for rule in declared_rules(&builder) {
        assert_eq!(
            built_rhs(grammar.alternatives_for(&rule)),
            declared_rhs(&builder, &rule)
        );
    }
    assert!(!grammar.is_known_rule("expr_autoedit"));
    assert_eq!(grammar.alternative_count(), builder.declarations().len());
}

#[test]
fn test_recursive_rules_are_rewritten() {
    let grammar = swft_grammar_builder().build().unwrap();

    assert_eq!(built_rhs(grammar.alternatives_for("term")), vec!["autoedit", "factor"]);
    assert_eq!(
        built_rhs(grammar.alternatives_for("term_autoedit")),
        vec!["factor term'"]
    );
    assert_eq!(
        built_rhs(grammar.alternatives_for("term'")),
        vec!["* factor term'", "/ factor term'", "* factor", "/ factor"]
    );
    assert_eq!(
        built_rhs(grammar.alternatives_for("statements_autoedit")),
        vec!["statement statements'"]
    );

    // No rule of the built grammar still starts with itself
    for rule in grammar.rules() {
        for alternative in &rule.alternatives {
            assert!(
                !alternative.pattern.is_left_recursive(),
                "{alternative} is still left recursive"
            );
        }
    }
}
