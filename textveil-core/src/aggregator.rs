//! Span aggregator: merges raw matcher output into a single non-overlapping
//! entity list.

use log::debug;

use crate::entity::EntitySpan;

/// Resolves overlaps in the concatenated matcher output.
///
/// Spans are stable-sorted by start offset, then swept left to right; a span
/// is kept only when it starts at or after the end of the last kept span.
/// For equal start offsets the stable sort preserves matcher invocation
/// order, which makes that order the de facto priority: structured patterns
/// outrank the person/location heuristics. This is a greedy leftmost-first
/// sweep, not a global-optimal non-overlapping-set solver.
pub fn resolve_overlaps(mut spans: Vec<EntitySpan>) -> Vec<EntitySpan> {
    spans.sort_by_key(|s| s.start);

    let mut resolved: Vec<EntitySpan> = Vec::with_capacity(spans.len());
    let mut last_end = 0usize;

    for span in spans {
        if span.start >= last_end {
            last_end = span.end;
            resolved.push(span);
        } else {
            debug!("Dropping overlapping {} span at {}..{}", span.entity_type, span.start, span.end);
        }
    }
    resolved
}
