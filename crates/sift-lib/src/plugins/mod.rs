//! Built-in syntax plugins.
//!
//! Filter priorities, lowest first:
//!
//! | priority | filter                 | needs                          |
//! |---------:|------------------------|--------------------------------|
//! | 0        | group, clean boost     | raw token sequence             |
//! | 90       | alias field markers    | field markers not yet consumed |
//! | 99       | comparison             | field markers not yet consumed |
//! | 100      | fields                 | whitespace still present       |
//! | 105      | alias assigned fields  | fields assigned                |
//! | 109      | copy field             | fields assigned                |
//! | 110      | multifield             | fields assigned                |
//! | 500      | remove whitespace      |                                |
//! | 510      | plus/minus (opt-in)    | no whitespace                  |
//! | 600      | operators              | no whitespace                  |
//! | 700      | apply boost            | operators resolved             |

mod alias;
mod boost;
mod comparison;
mod copy_field;
mod fields;
mod group;
mod leaves;
mod multifield;
mod operators;
mod plus_minus;
mod whitespace;

#[cfg(test)]
mod alias_tests;
#[cfg(test)]
mod boost_tests;
#[cfg(test)]
mod comparison_tests;
#[cfg(test)]
mod fields_tests;
#[cfg(test)]
mod group_tests;
#[cfg(test)]
mod leaves_tests;
#[cfg(test)]
mod test_utils;

use sift_core::{Group, SyntaxNode};

pub use alias::FieldAliasPlugin;
pub use boost::BoostPlugin;
pub use comparison::ComparisonPlugin;
pub use copy_field::CopyFieldPlugin;
pub use fields::FieldsPlugin;
pub use group::GroupPlugin;
pub use leaves::{PhrasePlugin, PrefixPlugin, RangePlugin, SingleQuotePlugin, WildcardPlugin};
pub use multifield::MultifieldPlugin;
pub use operators::{OperatorSpec, OperatorsPlugin};
pub use plus_minus::PlusMinusPlugin;
pub use whitespace::WhitespacePlugin;

use crate::pipeline::Plugin;

/// The default plugin set, in registration order.
///
/// [`PlusMinusPlugin`] is not part of it: `+`/`-` markers are read against a
/// flat level and would leave operator keywords on that level unresolved.
pub fn defaults() -> Vec<Box<dyn Plugin>> {
    vec![
        Box::new(WhitespacePlugin::new()),
        Box::new(SingleQuotePlugin::new()),
        Box::new(FieldsPlugin::new()),
        Box::new(PrefixPlugin::new()),
        Box::new(WildcardPlugin::new()),
        Box::new(PhrasePlugin::new()),
        Box::new(RangePlugin::new()),
        Box::new(GroupPlugin::new()),
        Box::new(OperatorsPlugin::new()),
        Box::new(ComparisonPlugin::new()),
        Box::new(BoostPlugin::new()),
    ]
}

/// Flat queries: `+`/`-` markers in place of operator keywords.
pub fn simple() -> Vec<Box<dyn Plugin>> {
    let mut plugins = defaults();
    plugins.retain(|p| p.name() != OperatorsPlugin::NAME);
    plugins.push(Box::new(PlusMinusPlugin::new()));
    plugins
}

/// Rebuilds `group` with `f` applied to each nested group, depth first.
///
/// Non-group children are kept as they are.
pub(crate) fn map_nested(group: Group, f: &mut impl FnMut(Group) -> Group) -> Group {
    group.map_children(|child| match child {
        SyntaxNode::Group(g) => SyntaxNode::Group(f(g)),
        other => other,
    })
}
