//! Direct left recursion removal
//!
//!     A rule
//!
//!         A : A α1 | ... | A αm | β1 | ... | βn
//!
//!     never terminates under recursive descent. It is rewritten into
//!
//!         A : autoedit                        folds the chain back into A's values
//!         A : β1 | ... | βn                   kept, tried after the continuation
//!         A_autoedit : β1 A' | ... | βn A'
//!         A' : α1 A' | α1 | ... | αm A' | αm
//!
//!     before any parsing happens. The rewrite is pure data: the synthesized alternatives
//!     carry [Reducer::Seed], [Reducer::Link] and [Reducer::Fold] built from the original
//!     actions, so reducing a rewritten parse gives exactly what the left recursive
//!     derivation would have given.
//!
//!     Only direct left recursion is handled. A rule reaching itself through another rule
//!     is left alone and will not terminate.

use super::error::GrammarError;
use super::pattern::{autoedit_name, prime_name, Item, Pattern};
use super::reducer::{Action, Reducer};
use super::registry::{Declaration, Production};

/// Rewrite every directly left recursive rule, pass the others through unchanged.
pub fn rewrite(declarations: &[Declaration]) -> Result<Vec<Production>, GrammarError> {
    let mut rule_names: Vec<&str> = Vec::new();
    for declaration in declarations {
        let name = declaration.pattern.rule.as_str();
        if !rule_names.contains(&name) {
            rule_names.push(name);
        }
    }

    let mut productions = Vec::with_capacity(declarations.len());
    for name in rule_names {
        let alternatives: Vec<&Declaration> = declarations
            .iter()
            .filter(|d| d.pattern.rule == name)
            .collect();

        if alternatives.iter().any(|d| d.pattern.is_left_recursive()) {
            productions.extend(rewrite_rule(name, &alternatives)?);
        } else {
            productions.extend(alternatives.into_iter().map(Production::build));
        }
    }
    Ok(productions)
}

/// Rewrite one left recursive rule.
pub fn rewrite_rule(
    rule: &str,
    alternatives: &[&Declaration],
) -> Result<Vec<Production>, GrammarError> {
    log::warn!("autofixing left recursion for rule '{rule}'");

    let (recursive, rest): (Vec<&Declaration>, Vec<&Declaration>) = alternatives
        .iter()
        .copied()
        .partition(|d| d.pattern.is_left_recursive());

    // α: the recursive alternatives without their leading self reference
    let alphas: Vec<(Vec<Item>, &Action)> = recursive
        .iter()
        .map(|d| (d.pattern.items[1..].to_vec(), &d.action))
        .collect();
    let betas = rest;

    if betas.is_empty() || alphas.iter().any(|(items, _)| items.is_empty()) {
        return Err(GrammarError::LeftRecursion {
            rule: rule.to_string(),
        });
    }

    let continuation = autoedit_name(rule);
    let closure = prime_name(rule);
    let closure_item = Item::Word(closure.clone());

    let mut productions = Vec::new();

    productions.push(Production {
        pattern: Pattern::new(rule, vec![Item::Autoedit(continuation.clone())]),
        reducer: Reducer::Fold(alphas.iter().map(|(_, action)| (*action).clone()).collect()),
    });

    for beta in &betas {
        productions.push(Production::build(beta));
    }

    for beta in &betas {
        // `.` stops matching, so the closure has to come before it
        let mut items: Vec<Item> = beta
            .pattern
            .items
            .iter()
            .take_while(|item| **item != Item::Epsilon)
            .cloned()
            .collect();
        items.push(closure_item.clone());
        productions.push(Production {
            pattern: Pattern::new(continuation.clone(), items),
            reducer: Reducer::Seed(beta.action.clone()),
        });
    }

    for (index, (items, _)) in alphas.iter().enumerate() {
        let mut continued = items.clone();
        continued.push(closure_item.clone());
        productions.push(Production {
            pattern: Pattern::new(closure.clone(), continued),
            reducer: Reducer::Link {
                alternative: index,
                recursive: true,
            },
        });
        productions.push(Production {
            pattern: Pattern::new(closure.clone(), items.clone()),
            reducer: Reducer::Link {
                alternative: index,
                recursive: false,
            },
        });
    }

    log::debug!(
        "rule '{rule}' rewritten: {} recursive and {} base alternatives",
        alphas.len(),
        betas.len()
    );
    Ok(productions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swft::grammar::value::Value;

    fn declaration(pattern: &str, params: &[&str]) -> Declaration {
        Declaration {
            pattern: Pattern::parse(pattern).unwrap(),
            action: Action::new(params, |_| Ok(Value::None)),
        }
    }

    fn patterns(productions: &[Production]) -> Vec<String> {
        productions.iter().map(|p| p.pattern.to_string()).collect()
    }

    #[test]
    fn test_rewrite_expr() {
        let declarations = vec![
            declaration("expr : expr + term", &["left", "op", "right"]),
            declaration("expr : expr - term", &["left", "op", "right"]),
            declaration("expr : term", &["term"]),
        ];
        let productions = rewrite(&declarations).unwrap();
        assert_eq!(
            patterns(&productions),
            vec![
                "expr : autoedit",
                "expr : term",
                "expr_autoedit : term expr'",
                "expr' : + term expr'",
                "expr' : + term",
                "expr' : - term expr'",
                "expr' : - term",
            ]
        );
        assert!(matches!(&productions[0].reducer, Reducer::Fold(actions) if actions.len() == 2));
        assert!(matches!(productions[2].reducer, Reducer::Seed(_)));
        assert!(matches!(
            productions[5].reducer,
            Reducer::Link {
                alternative: 1,
                recursive: true
            }
        ));
    }

    #[test]
    fn test_non_recursive_rules_untouched() {
        let declarations = vec![
            declaration("factor : ( expr )", &["expr"]),
            declaration("factor : identifier", &["value"]),
        ];
        let productions = rewrite(&declarations).unwrap();
        assert_eq!(
            patterns(&productions),
            vec!["factor : ( expr )", "factor : identifier"]
        );
        assert!(productions
            .iter()
            .all(|p| matches!(p.reducer, Reducer::Build(_))));
    }

    #[test]
    fn test_endpoint_keeps_its_kind_when_moved() {
        let declarations = vec![
            declaration("identifier : identifier , _", &["list", "value"]),
            declaration("identifier : _", &["value"]),
        ];
        let productions = rewrite(&declarations).unwrap();
        let seed = productions
            .iter()
            .find(|p| p.pattern.rule == "identifier_autoedit")
            .unwrap();
        assert_eq!(seed.pattern.items[0], Item::Endpoint("identifier".to_string()));
    }

    #[test]
    fn test_epsilon_base_seeds_the_closure_directly() {
        let declarations = vec![
            declaration("list : list identifier", &["list", "item"]),
            declaration("list : .", &[]),
        ];
        let productions = rewrite(&declarations).unwrap();
        let seed = productions
            .iter()
            .find(|p| p.pattern.rule == "list_autoedit")
            .unwrap();
        assert_eq!(seed.pattern.to_string(), "list_autoedit : list'");
        assert!(matches!(seed.reducer, Reducer::Seed(_)));
    }

    #[test]
    fn test_all_recursive_is_an_error() {
        let declarations = vec![declaration("list : list item", &["list", "item"])];
        assert_eq!(
            rewrite(&declarations).unwrap_err(),
            GrammarError::LeftRecursion {
                rule: "list".to_string()
            }
        );
    }

    #[test]
    fn test_bare_self_reference_is_an_error() {
        let declarations = vec![
            declaration("list : list", &["list"]),
            declaration("list : item", &["item"]),
        ];
        assert!(rewrite(&declarations).is_err());
    }
}
