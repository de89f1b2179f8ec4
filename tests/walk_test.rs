//! Tests for hierarchy traversal

use rstest::{fixture, rstest};

use rsorg::domain::{all_reports, direct_reports, link_managers, PersonRecord, Roster};

fn record(name: &str, title: &str, joined: &str, reports_to: Option<&str>) -> PersonRecord {
    PersonRecord {
        name: name.to_string(),
        title: title.to_string(),
        join_date: joined.to_string(),
        reports_to: reports_to.map(|s| s.to_string()),
    }
}

/// Two branches under one root, uneven depths:
/// Root -> A -> {A1, A2}, Root -> B -> B1
#[fixture]
fn branching() -> Roster {
    let mut roster = Roster::from_records(vec![
        record("Root", "CEO", "2010-01-01", None),
        record("A", "VP", "2012-03-15", Some("Root")),
        record("B", "VP", "2013-06-20", Some("Root")),
        record("A1", "Engineer", "2015-09-01", Some("A")),
        record("A2", "Engineer", "2016-01-11", Some("A")),
        record("B1", "Analyst", "2017-04-28", Some("B")),
    ]);
    let mut sink = Vec::new();
    link_managers(&mut roster, &mut sink).expect("linking succeeds");
    roster
}

#[rstest]
fn given_branching_tree_when_walking_then_yields_preorder_with_depths(branching: Roster) {
    // Arrange
    let root = branching.lookup("Root").expect("Root is indexed");

    // Act
    let visited: Vec<(String, usize)> = all_reports(&branching, root)
        .map(|(_, person, depth)| (person.name.clone(), depth))
        .collect();

    // Assert: parent before descendants, sibling order kept, depths exact
    let expected = [
        ("A".to_string(), 1),
        ("A1".to_string(), 2),
        ("A2".to_string(), 2),
        ("B".to_string(), 1),
        ("B1".to_string(), 2),
    ];
    assert_eq!(visited, expected);
}

#[rstest]
fn given_branching_tree_when_walking_then_excludes_the_start_node(branching: Roster) {
    // Arrange
    let root = branching.lookup("Root").expect("Root is indexed");

    // Act
    let names: Vec<String> = all_reports(&branching, root)
        .map(|(_, person, _)| person.name.clone())
        .collect();

    // Assert
    assert!(!names.contains(&"Root".to_string()));
    assert_eq!(names.len(), 5);
}

#[rstest]
fn given_same_roster_when_walking_twice_then_sequences_match(branching: Roster) {
    // Arrange
    let root = branching.lookup("Root").expect("Root is indexed");

    // Act
    let first: Vec<(String, usize)> = all_reports(&branching, root)
        .map(|(_, person, depth)| (person.name.clone(), depth))
        .collect();
    let second: Vec<(String, usize)> = all_reports(&branching, root)
        .map(|(_, person, depth)| (person.name.clone(), depth))
        .collect();

    // Assert
    assert_eq!(first, second);
}

#[rstest]
fn given_leaf_when_walking_then_yields_nothing(branching: Roster) {
    // Arrange
    let leaf = branching.lookup("A1").expect("A1 is indexed");

    // Act
    let count = all_reports(&branching, leaf).count();

    // Assert
    assert_eq!(count, 0);
}

#[rstest]
fn given_inner_node_when_walking_then_depths_restart_from_it(branching: Roster) {
    // Arrange
    let a = branching.lookup("A").expect("A is indexed");

    // Act
    let visited: Vec<(String, usize)> = all_reports(&branching, a)
        .map(|(_, person, depth)| (person.name.clone(), depth))
        .collect();

    // Assert: depth is edge distance from the call root, not the tree root
    let expected = [("A1".to_string(), 1), ("A2".to_string(), 1)];
    assert_eq!(visited, expected);
}

#[rstest]
#[case("Root", 2)]
#[case("A", 2)]
#[case("B", 1)]
#[case("B1", 0)]
fn given_person_when_listing_direct_reports_then_counts_match(
    branching: Roster,
    #[case] name: &str,
    #[case] expected: usize,
) {
    // Arrange
    let idx = branching.lookup(name).expect("person is indexed");

    // Act
    let reports = direct_reports(&branching, idx);

    // Assert
    assert_eq!(reports.len(), expected);
}

#[rstest]
fn given_direct_reports_when_listed_then_returned_verbatim(branching: Roster) {
    // Arrange
    let a = branching.lookup("A").expect("A is indexed");

    // Act
    let names: Vec<&str> = direct_reports(&branching, a)
        .iter()
        .map(|&idx| branching.get(idx).expect("report exists").name.as_str())
        .collect();

    // Assert
    assert_eq!(names, ["A1", "A2"]);
}
