//! JSON report shapes.

use crate::domain::Vertex;
use crate::graph::LevelMap;
use serde::Serialize;

#[derive(Serialize)]
pub(super) struct ValidationReport {
    pub(super) acyclic: bool,
    pub(super) items: usize,
}

#[derive(Serialize)]
pub(super) struct LevelEntry<'a> {
    level: usize,
    items: &'a [Vertex],
}

/// `order` and `levels` serialize as `null` for cyclic graphs.
#[derive(Serialize)]
pub(super) struct PlanReport<'a> {
    acyclic: bool,
    order: Option<&'a [Vertex]>,
    levels: Option<Vec<LevelEntry<'a>>>,
}

impl<'a> PlanReport<'a> {
    pub(super) fn new(order: Option<&'a [Vertex]>, levels: Option<&'a LevelMap>) -> Self {
        Self {
            acyclic: order.is_some(),
            order,
            levels: levels.map(|levels| {
                levels
                    .iter()
                    .map(|(level, items)| LevelEntry {
                        level: *level,
                        items,
                    })
                    .collect()
            }),
        }
    }
}

#[derive(Serialize)]
pub(super) struct TraceReport<'a> {
    pub(super) visits: &'a [Vertex],
}
