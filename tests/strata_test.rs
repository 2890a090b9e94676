//! Tests for stratum assignment and table construction

mod common;

use common::{flags, record_observed_in, test_config, ymd};
use mse_strata::{
    PersonPeriodExpander, PersonPeriodRecord, RaceCategory, Sex, StrataError, StratumAssigner,
    StratumTableBuilder,
};

fn row(person_id: &str, year: i32, sex: Sex, race: RaceCategory) -> PersonPeriodRecord {
    PersonPeriodRecord {
        person_id: person_id.to_string(),
        year,
        sex,
        race,
        age: 10,
        age_band: 0,
        flags: flags(true, false, false),
    }
}

#[test]
fn test_empty_cohort_rejected() {
    let result = StratumAssigner::assign(Vec::new());
    assert!(matches!(result, Err(StrataError::EmptyCohort)));
}

#[test]
fn test_strata_partition_rows_exactly() {
    let config = test_config();
    let records = vec![
        record_observed_in("p1", ymd(2002, 1, 1), 0, flags(true, false, false)),
        record_observed_in("p2", ymd(2002, 5, 5), 0, flags(false, true, false)),
        record_observed_in("p3", ymd(2007, 1, 1), 1, flags(true, true, false)),
        record_observed_in("p4", ymd(2012, 1, 1), 2, flags(false, false, true)),
    ];
    let rows = PersonPeriodExpander::expand(&records, &config);
    let total = rows.len();

    let strata = StratumAssigner::assign(rows).unwrap();

    // Total coverage, no overlap
    assert_eq!(strata.iter().map(|s| s.row_count()).sum::<usize>(), total);
    for stratum in &strata {
        for row in &stratum.rows {
            assert_eq!(row.stratum_key(), stratum.key);
        }
    }
}

#[test]
fn test_dense_ids_in_sorted_key_order() {
    let rows = vec![
        row("p1", 2019, Sex::Female, RaceCategory::Black),
        row("p2", 2017, Sex::Male, RaceCategory::White),
        row("p3", 2018, Sex::Male, RaceCategory::White),
    ];
    let strata = StratumAssigner::assign(rows).unwrap();

    assert_eq!(strata.len(), 3);
    let ids: Vec<u32> = strata.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let keys: Vec<_> = strata.iter().map(|s| s.key).collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}

#[test]
fn test_n_kids_counts_distinct_persons() {
    let rows = vec![
        row("p1", 2017, Sex::Male, RaceCategory::White),
        row("p1", 2017, Sex::Male, RaceCategory::White),
        row("p2", 2017, Sex::Male, RaceCategory::White),
    ];
    let strata = StratumAssigner::assign(rows).unwrap();

    assert_eq!(strata.len(), 1);
    assert_eq!(strata[0].row_count(), 3);
    assert_eq!(strata[0].n_kids, 2);
}

#[test]
fn test_assignment_is_deterministic() {
    let build = || {
        StratumAssigner::assign(vec![
            row("p1", 2018, Sex::Female, RaceCategory::Hispanic),
            row("p2", 2017, Sex::Male, RaceCategory::White),
            row("p3", 2017, Sex::Female, RaceCategory::White),
        ])
        .unwrap()
    };
    let first = build();
    let second = build();
    let first_keys: Vec<_> = first.iter().map(|s| (s.id, s.key)).collect();
    let second_keys: Vec<_> = second.iter().map(|s| (s.id, s.key)).collect();
    assert_eq!(first_keys, second_keys);
}

#[test]
fn test_table_has_one_row_per_person_period() {
    let config = test_config();
    let rows = vec![
        row("p1", 2017, Sex::Male, RaceCategory::White),
        row("p2", 2017, Sex::Male, RaceCategory::White),
    ];
    let strata = StratumAssigner::assign(rows).unwrap();
    let table = StratumTableBuilder::build(&strata[0], &config);

    assert_eq!(table.stratum_id, strata[0].id);
    assert_eq!(table.sources, vec!["A", "B", "C"]);
    assert_eq!(table.rows.len(), 2);
    for table_row in &table.rows {
        assert_eq!(table_row.flags.len(), config.source_count());
        assert_eq!(table_row.flags.as_slice(), &[true, false, false]);
    }
}
