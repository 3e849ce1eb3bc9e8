//! Bounded-degree relation selection.
//!
//! Greedy and order dependent: records are accepted in input order while both endpoints are below
//! the degree cap. Reordering the input can change which relations survive.
//!
//! A self pair `(a, a)` is accepted like any other record and counts twice against `a`. It is
//! kept in the selection so later records see the same degrees; routing skips it.

use crate::model::Relation;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::trace;

pub fn select_relations(relations: &[Relation], degree_cap: usize) -> Vec<Relation> {
    let mut degree: FxHashMap<&str, usize> = FxHashMap::default();
    let mut accepted: FxHashSet<(&str, &str)> = FxHashSet::default();
    let mut out = Vec::new();

    for rel in relations {
        let (a, b) = (rel.id_a.as_str(), rel.id_b.as_str());
        if accepted.contains(&(b, a)) {
            trace!(a, b, "reverse of an accepted relation skipped");
            continue;
        }
        let da = degree.get(a).copied().unwrap_or(0);
        let db = degree.get(b).copied().unwrap_or(0);
        if da >= degree_cap || db >= degree_cap {
            trace!(a, b, da, db, degree_cap, "relation skipped at degree cap");
            continue;
        }

        accepted.insert((a, b));
        *degree.entry(a).or_insert(0) += 1;
        *degree.entry(b).or_insert(0) += 1;
        out.push(rel.clone());
    }

    out
}
