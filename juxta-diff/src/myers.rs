//! Codepoint diffing using Myers' algorithm, followed by a semantic cleanup.

use juxta_diff_core::{Delta, EOS_MARKER, EditScript};
use similar::{Algorithm, DiffTag, capture_diff_slices};

use crate::Codepoints;

/// Equal runs at most this long may be folded into the edits around them.
const MAX_ABSORBED_EQUALITY: usize = 2;

/// Computes the edit script that turns `actual` into `expected`.
///
/// Both texts are extended with [`EOS_MARKER`] first, so the script always
/// ends with an equal delta holding the marker.
pub fn diff_codepoints(actual: &str, expected: &str) -> EditScript {
    let source = Codepoints::with_suffix(actual, EOS_MARKER);
    let target = Codepoints::with_suffix(expected, EOS_MARKER);

    let ops = capture_diff_slices(Algorithm::Myers, source.as_slice(), target.as_slice());
    let mut script = EditScript::new();
    for op in &ops {
        let (tag, old, new) = op.as_tag_tuple();
        let delta = match tag {
            DiffTag::Equal => Some(Delta::Equal(source.slice(old))),
            DiffTag::Delete => Some(Delta::Delete(source.slice(old))),
            DiffTag::Insert => Some(Delta::Insert(target.slice(new))),
            DiffTag::Replace => Delta::from_spans(source.slice(old), target.slice(new)),
        };
        if let Some(delta) = delta {
            script.push(delta);
        }
    }
    trace!(%script, "myers");

    let script = cleanup(script);
    trace!(%script, "cleanup");
    script
}

/// Folds neighbouring edits together until the script stops changing.
///
/// - adjacent unequal deltas become one [`Delta::Change`]
/// - an equal run of at most two codepoints that is shorter than the edits
///   on both sides of it is swallowed by them
pub fn cleanup(script: EditScript) -> EditScript {
    let mut current = merge_edits(script);
    loop {
        let next = merge_edits(absorb_short_equalities(current.clone()));
        if next == current {
            return current;
        }
        current = next;
    }
}

fn merge_edits(script: EditScript) -> EditScript {
    let mut merged = EditScript::new();
    let mut source = String::new();
    let mut target = String::new();
    for delta in script {
        if let Delta::Equal(text) = delta {
            if let Some(edit) =
                Delta::from_spans(core::mem::take(&mut source), core::mem::take(&mut target))
            {
                merged.push(edit);
            }
            merged.push(Delta::Equal(text));
        } else {
            source.push_str(delta.source());
            target.push_str(delta.target());
        }
    }
    if let Some(edit) = Delta::from_spans(source, target) {
        merged.push(edit);
    }
    merged
}

fn absorb_short_equalities(script: EditScript) -> EditScript {
    let deltas = script.into_deltas();
    let mut absorbed = EditScript::new();
    let mut i = 0;
    while i < deltas.len() {
        let delta = &deltas[i];
        let surrounded = i > 0 && i + 1 < deltas.len();
        if surrounded && delta.is_equal() {
            let len = delta.source_len();
            let before = &deltas[i - 1];
            let after = &deltas[i + 1];
            if !before.is_equal()
                && !after.is_equal()
                && len <= MAX_ABSORBED_EQUALITY
                && len < edit_size(before)
                && len < edit_size(after)
            {
                // Turn the equality into a change; merge_edits joins it with its neighbours.
                absorbed.push(Delta::Change {
                    source: delta.source().to_owned(),
                    target: delta.target().to_owned(),
                });
                i += 1;
                continue;
            }
        }
        absorbed.push(delta.clone());
        i += 1;
    }
    absorbed
}

fn edit_size(delta: &Delta) -> usize {
    delta.source_len().max(delta.target_len())
}
