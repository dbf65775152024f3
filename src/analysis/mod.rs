//! Per-airport aggregations over the flattened transit table.
//!
//! Groups are keyed by `(airport_name, city)` and kept in the order they are
//! first seen. Results are sorted with a stable sort, so airports that tie on
//! the ranked value stay in that first-seen order.

use std::{collections::HashMap, sync::Arc};

mod fare_spread;
mod taxi_price;
pub use fare_spread::*;
pub use taxi_price::*;

use crate::repository::FlatRow;

type GroupKey = (Arc<str>, Arc<str>);

fn group_by_airport<'a, A, I, F>(rows: I, mut fold: F) -> Vec<(GroupKey, A)>
where
    A: Default,
    I: IntoIterator<Item = &'a FlatRow>,
    F: FnMut(&mut A, &FlatRow),
{
    let mut lookup: HashMap<GroupKey, usize> = HashMap::new();
    let mut groups: Vec<(GroupKey, A)> = Vec::new();
    for row in rows {
        let key: GroupKey = (row.airport_name.clone(), row.city.clone());
        let index = *lookup.entry(key.clone()).or_insert_with(|| {
            groups.push((key, A::default()));
            groups.len() - 1
        });
        fold(&mut groups[index].1, row);
    }
    groups
}
