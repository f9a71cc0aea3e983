//! Compares the allocator against exhaustive enumeration on small inventories.
//!
//! Every combination of table counts is scored by `(tables used, waste,
//! fragmentation penalty)` and the allocator's answer must match the best score.

use testresult::TestResult;

use tablefit::{
    allocation::Allocation,
    allocator::allocate,
    config::AllocatorConfig,
    tables::{TableType, TableTypeError},
};

type Score = (u32, u64, u64);

const SHAPES: [(&str, u32, u32, bool); 4] = [
    ("Bistro", 1, 2, true),
    ("Square", 2, 4, true),
    ("Round", 3, 6, false),
    ("Long", 5, 8, true),
];

/// Every inventory with 0..=2 tables of each shape.
fn inventories() -> Result<Vec<Vec<TableType>>, TableTypeError> {
    let mut inventories = Vec::new();

    for code in 0..3u32.pow(4) {
        let mut tables = Vec::new();
        let mut rest = code;

        for (name, min, max, junction) in SHAPES {
            tables.push(TableType::new(name, min, max, rest % 3, junction)?);
            rest /= 3;
        }

        inventories.push(tables);
    }

    Ok(inventories)
}

fn penalty(counts: &[(&TableType, u32)], pool: &[&TableType], config: &AllocatorConfig) -> u64 {
    if !config.preserve_small_tables {
        return 0;
    }

    let largest = pool
        .iter()
        .map(|table| u64::from(table.max_capacity()))
        .max()
        .unwrap_or(0);

    counts
        .iter()
        .map(|(table, count)| (largest - u64::from(table.max_capacity()) + 1) * u64::from(*count))
        .sum()
}

/// Best score over every count vector, or `None` if nothing seats the party.
fn brute_force(party_size: u32, tables: &[TableType], config: &AllocatorConfig) -> Option<Score> {
    let available: Vec<&TableType> = tables.iter().filter(|t| t.is_available()).collect();

    let single = available
        .iter()
        .filter(|table| table.fits(party_size))
        .map(|table| (1, u64::from(table.max_capacity() - party_size), 0))
        .min();

    if single.is_some() {
        return single;
    }

    let pool: Vec<&TableType> = available
        .into_iter()
        .filter(|table| !config.allow_mix_only_if_junction || table.accepts_junction())
        .collect();

    let mut best: Option<Score> = None;
    let mut counts: Vec<(&TableType, u32)> = Vec::new();

    enumerate(&pool, 0, &mut counts, &mut |counts| {
        let party = u64::from(party_size);
        let mut tables_used = 0u32;
        let mut min_total = 0u64;
        let mut max_total = 0u64;

        for (table, count) in counts {
            tables_used += count;
            min_total += u64::from(table.min_capacity()) * u64::from(*count);
            max_total += u64::from(table.max_capacity()) * u64::from(*count);
        }

        if tables_used == 0 || min_total > party || max_total < party {
            return;
        }

        let candidate = (tables_used, max_total - party, penalty(counts, &pool, config));

        if best.is_none_or(|best| candidate < best) {
            best = Some(candidate);
        }
    });

    best
}

fn enumerate<'t>(
    pool: &[&'t TableType],
    depth: usize,
    counts: &mut Vec<(&'t TableType, u32)>,
    visit: &mut dyn FnMut(&[(&'t TableType, u32)]),
) {
    let Some(table) = pool.get(depth) else {
        visit(counts);
        return;
    };

    for count in 0..=table.available_quantity() {
        counts.push((table, count));
        enumerate(pool, depth + 1, counts, visit);
        counts.pop();
    }
}

fn allocation_score(
    allocation: &Allocation,
    tables: &[TableType],
    config: &AllocatorConfig,
) -> Result<Score, String> {
    let mut counts = Vec::new();

    for (name, count) in allocation.sorted_counts() {
        let table = tables
            .iter()
            .find(|table| table.name() == name)
            .ok_or_else(|| format!("unknown table type {name}"))?;

        counts.push((table, count));
    }

    if allocation.tables_used() == 1 {
        return Ok((1, allocation.waste(), 0));
    }

    let pool: Vec<&TableType> = tables
        .iter()
        .filter(|table| table.is_available())
        .filter(|table| !config.allow_mix_only_if_junction || table.accepts_junction())
        .collect();

    Ok((
        allocation.tables_used(),
        allocation.waste(),
        penalty(&counts, &pool, config),
    ))
}

#[test]
fn matches_exhaustive_enumeration() -> TestResult {
    let configs = [
        AllocatorConfig::default(),
        AllocatorConfig::default().with_junction_only(false),
        AllocatorConfig::default().with_preserve_small_tables(false),
    ];

    for tables in inventories()? {
        for config in &configs {
            for party_size in 1..=24 {
                let expected = brute_force(party_size, &tables, config);
                let actual = allocate(party_size, &tables, config)?;

                match (expected, actual) {
                    (None, None) => {}
                    (Some(expected), Some(allocation)) => {
                        assert!(allocation.seats_party(), "party of {party_size}");

                        for (name, count) in allocation.sorted_counts() {
                            let available = tables
                                .iter()
                                .find(|table| table.name() == name)
                                .map_or(0, TableType::available_quantity);

                            assert!(count <= available, "{name} over-allocated");
                        }

                        assert_eq!(
                            allocation_score(&allocation, &tables, config)?,
                            expected,
                            "party of {party_size} with {tables:?}"
                        );
                    }
                    (expected, actual) => {
                        return Err(format!(
                            "party of {party_size}: expected {expected:?}, got {actual:?}"
                        )
                        .into());
                    }
                }
            }
        }
    }

    Ok(())
}

#[test]
fn more_tables_never_lose_a_party() -> TestResult {
    let config = AllocatorConfig::default();

    for tables in inventories()? {
        for party_size in 1..=24 {
            if allocate(party_size, &tables, &config)?.is_none() {
                continue;
            }

            for idx in 0..tables.len() {
                let grown: Vec<TableType> = tables
                    .iter()
                    .enumerate()
                    .map(|(i, table)| {
                        if i == idx {
                            table
                                .clone()
                                .with_available_quantity(table.available_quantity() + 1)
                        } else {
                            table.clone()
                        }
                    })
                    .collect();

                assert!(
                    allocate(party_size, &grown, &config)?.is_some(),
                    "adding a table to {grown:?} lost party of {party_size}"
                );
            }
        }
    }

    Ok(())
}
