use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

fn table(pairs: &[(&str, &str)]) -> MappingTable {
	let mut table = MappingTable::new();
	for (key, value) in pairs {
		table.insert(
			PhoneNumber::new(*key).unwrap(),
			PhoneNumber::new(*value).unwrap(),
		);
	}
	table
}

#[test]
fn test_unmapped_source_is_unchanged() {
	let t = table(&[("1", "2")]);
	let resolver = Resolver::new(&t);

	assert!(!resolver.is_cyclic("9"));
	assert_eq!(resolver.resolve("9"), Resolution::Unchanged);
	assert_eq!(resolver.transform("9"), "9");
}

#[test]
fn test_empty_table() {
	let t = MappingTable::new();
	let resolver = Resolver::new(&t);
	assert_eq!(resolver.transform("112"), "112");
}

#[test]
fn test_single_hop() {
	let t = table(&[("1", "2")]);
	let resolver = Resolver::new(&t);

	assert!(!resolver.is_cyclic("1"));
	assert_eq!(resolver.transform("1"), "2");
}

#[test]
fn test_acyclic_chain() {
	let t = table(&[("1", "2"), ("2", "3")]);
	let resolver = Resolver::new(&t);

	match resolver.resolve("1") {
		Resolution::Resolved { target, hops } => {
			assert_eq!(target.as_str(), "3");
			assert_eq!(hops, 2);
		}
		other => panic!("expected resolution, got {other:?}"),
	}
	assert_eq!(resolver.transform("2"), "3");
	assert_eq!(resolver.transform("3"), "3");
}

#[test]
fn test_self_loop() {
	let t = table(&[("1", "1")]);
	let resolver = Resolver::new(&t);

	assert!(resolver.is_cyclic("1"));
	assert_eq!(resolver.resolve("1"), Resolution::Cycle);
	assert_eq!(resolver.transform("1"), "1");
}

#[test]
fn test_two_cycle_returns_source() {
	let t = table(&[("1", "2"), ("2", "1")]);
	let resolver = Resolver::new(&t);

	assert_eq!(resolver.transform("1"), "1");
	assert_eq!(resolver.transform("2"), "2");
}

#[test]
fn test_tail_into_cycle() {
	// 1 -> 2 -> 3 -> 4 -> 5 -> 3
	let t = table(&[("1", "2"), ("2", "3"), ("3", "4"), ("4", "5"), ("5", "3")]);
	let resolver = Resolver::new(&t);

	for source in ["1", "2", "3", "4", "5"] {
		assert!(resolver.is_cyclic(source), "{source} should be cyclic");
		assert_eq!(resolver.transform(source), source);
	}
}

#[test]
fn test_tail_into_self_loop() {
	let t = table(&[("1", "2"), ("2", "3"), ("3", "3")]);
	let resolver = Resolver::new(&t);

	assert_eq!(resolver.resolve("1"), Resolution::Cycle);
	assert_eq!(resolver.transform("1"), "1");
}

#[test]
fn test_chain_ending_next_to_cycle_is_acyclic() {
	// The cycle 7 <-> 8 is unreachable from 1.
	let t = table(&[("1", "2"), ("2", "3"), ("7", "8"), ("8", "7")]);
	let resolver = Resolver::new(&t);

	assert!(!resolver.is_cyclic("1"));
	assert_eq!(resolver.transform("1"), "3");
	assert_eq!(resolver.transform("7"), "7");
}

#[test]
fn test_long_chain() {
	let mut t = MappingTable::new();
	for i in 0..10_000u32 {
		t.insert(
			PhoneNumber::new(i.to_string()).unwrap(),
			PhoneNumber::new((i + 1).to_string()).unwrap(),
		);
	}
	let resolver = Resolver::new(&t);
	assert_eq!(resolver.transform("0"), "10000");

	// Close the loop and confirm the walk still terminates.
	t.insert(
		PhoneNumber::new("10000").unwrap(),
		PhoneNumber::new("0").unwrap(),
	);
	let resolver = Resolver::new(&t);
	assert_eq!(resolver.transform("0"), "0");
	assert_eq!(resolver.transform("5000"), "5000");
}

/// Follows `source` with an explicit visited list; reference for the property test.
fn naive_transform(pairs: &[(u8, u8)], source: u8) -> u8 {
	let lookup = |k: u8| pairs.iter().rev().find(|(key, _)| *key == k).map(|(_, v)| *v);
	let mut seen = vec![source];
	let mut current = source;
	while let Some(next) = lookup(current) {
		if seen.contains(&next) {
			return source;
		}
		seen.push(next);
		current = next;
	}
	current
}

proptest! {
	#[test]
	fn prop_matches_visited_set_walk(
		pairs in prop::collection::vec((0u8..16, 0u8..16), 0..24),
		source in 0u8..16,
	) {
		let mut t = MappingTable::new();
		for (key, value) in &pairs {
			t.insert(
				PhoneNumber::new(key.to_string()).unwrap(),
				PhoneNumber::new(value.to_string()).unwrap(),
			);
		}
		let expected = naive_transform(&pairs, source).to_string();
		let source = source.to_string();
		prop_assert_eq!(Resolver::new(&t).transform(&source), expected.as_str());
	}
}
