//! Step text and argument generation for a renamed occurrence.

use crate::order::ArgOrder;
use rephrase_core::{ArgKind, Fragment, Marker, StepArg, StepTemplate};

/// The rewritten payload of one occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRewrite {
    pub text: String,
    pub args: Vec<StepArg>,
}

/// Write the new template out with concrete values.
///
/// Slot `j` becomes `<values[order[j]]>` when it has a source; otherwise the
/// template's own placeholder is left as written, for the author to fill.
pub fn generate_step_name(template: &StepTemplate, values: &[String], order: &ArgOrder) -> String {
    let mut out = String::new();
    let mut slot = 0usize;
    for fragment in template.fragments() {
        if !fragment.is_placeholder() {
            out.push_str(&fragment.render());
            continue;
        }
        match order.source(slot).and_then(|i| values.get(i)) {
            Some(value) => {
                out.push('<');
                out.push_str(value);
                out.push('>');
            }
            None => out.push_str(&fragment.render()),
        }
        slot += 1;
    }
    out
}

/// Arrange `old_args` into the new template's slots.
///
/// Sourced slots carry the old argument (value, kind and payload kept)
/// under the new placeholder name. Unsourced slots bind the template's own
/// placeholder: `<name>` as a dynamic reference, `"literal"` as that literal.
pub fn reorder_args(template: &StepTemplate, old_args: &[StepArg], order: &ArgOrder) -> Vec<StepArg> {
    template
        .placeholders()
        .enumerate()
        .map(|(slot, fragment)| {
            let name = fragment.name().unwrap_or_default();
            match order.source(slot).and_then(|i| old_args.get(i)) {
                Some(arg) => arg.renamed(name),
                None => unsourced_arg(fragment),
            }
        })
        .collect()
}

fn unsourced_arg(fragment: &Fragment) -> StepArg {
    match fragment {
        Fragment::Static(literal) => StepArg::new_static(literal.as_str()),
        Fragment::Marker(marker) => {
            let kind = match marker {
                Marker::Static => ArgKind::Static,
                Marker::Dynamic => ArgKind::Dynamic,
                Marker::Special => ArgKind::SpecialString,
            };
            StepArg {
                name: marker.keyword().to_owned(),
                value: String::new(),
                kind,
                table: None,
            }
        }
        Fragment::Dynamic(name) | Fragment::Text(name) => StepArg::dynamic(name.as_str()),
    }
}

/// Generated text and rearranged arguments for one occurrence.
pub fn rewrite(template: &StepTemplate, old_args: &[StepArg], order: &ArgOrder) -> StepRewrite {
    let values: Vec<String> = old_args.iter().map(|a| a.value.clone()).collect();
    StepRewrite {
        text: generate_step_name(template, &values, order),
        args: reorder_args(template, old_args, order),
    }
}
