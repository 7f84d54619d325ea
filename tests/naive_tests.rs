use num_bigint::BigUint;
use pathgraph::{count_simple_paths, parse_graph};

fn naive(text: &str, start: &str, end: &str) -> BigUint {
    let graph = parse_graph(text).expect("parse");
    count_simple_paths(&graph, start, end)
}

#[test]
fn test_naive_two_branches() {
    assert_eq!(naive("a: b c\nb: out\nc: out\n", "a", "out"), BigUint::from(2u32));
}

#[test]
fn test_naive_start_equals_end() {
    assert_eq!(naive("a: b\n", "a", "a"), BigUint::from(1u32));
}

#[test]
fn test_naive_skips_revisits() {
    // a -> b -> a is cut off; only a -> b -> out and a -> out survive.
    assert_eq!(naive("a: b out\nb: a out\n", "a", "out"), BigUint::from(2u32));
}

#[test]
fn test_naive_cycle_without_end() {
    assert_eq!(naive("a: b\nb: c\nc: a\n", "a", "out"), BigUint::from(0u32));
}

#[test]
fn test_naive_counts_parallel_edges() {
    assert_eq!(naive("a: b b\nb: out\n", "a", "out"), BigUint::from(2u32));
}

#[test]
fn test_naive_deep_chain_does_not_overflow_stack() {
    let mut text = String::new();
    for idx in 0..50_000 {
        text.push_str(&format!("n{idx}: n{}\n", idx + 1));
    }
    assert_eq!(naive(&text, "n0", "n50000"), BigUint::from(1u32));
}

#[test]
fn test_naive_path_stops_at_end() {
    assert_eq!(naive("a: out\nout: a\n", "a", "out"), BigUint::from(1u32));
}
