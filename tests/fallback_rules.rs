use dsa_log::metadata::fallback::classify;

#[test]
fn stock_titles_hit_the_greedy_rule() {
    let meta = classify("Best Time to Buy and Sell Stock");
    assert_eq!(meta.topic, "Greedy");
    assert_eq!(meta.time_complexity, "O(n)");
    assert_eq!(meta.space_complexity, "O(1)");
    assert_eq!(meta.company_tags, "Amazon, Google");
}

#[test]
fn buy_alone_is_enough_for_the_greedy_rule() {
    let meta = classify("buy two get one free");
    assert_eq!(meta.topic, "Greedy");
}

#[test]
fn tree_titles_hit_the_tree_rule() {
    let meta = classify("Invert Binary Tree");
    assert_eq!(meta.topic, "Binary Tree");
    assert_eq!(meta.space_complexity, "O(h)");
}

#[test]
fn matrix_titles_hit_the_matrix_rule() {
    let meta = classify("Rotate Matrix");
    assert_eq!(meta.topic, "Matrix Traversal");
    assert_eq!(meta.time_complexity, "O(m*n)");
}

#[test]
fn tree_rule_outranks_matrix_rule() {
    // Both keywords present; "tree" is checked first.
    let meta = classify("matrix of trees");
    assert_eq!(meta.topic, "Binary Tree");
}

#[test]
fn matching_is_case_insensitive() {
    let meta = classify("BEST TIME TO BUY STOCK");
    assert_eq!(meta.topic, "Greedy");
}

#[test]
fn unmatched_titles_get_the_generic_template() {
    let meta = classify("Two Sum");
    assert_eq!(meta.topic, "General DSA");
    assert_eq!(meta.logic, "Based on problem statement");
    assert_eq!(meta.time_complexity, "Varies");
    assert_eq!(meta.space_complexity, "Varies");
    assert_eq!(meta.company_tags, "Various");
}

#[test]
fn classification_is_deterministic() {
    let first = classify("Spiral Matrix");
    let second = classify("Spiral Matrix");
    assert_eq!(first, second);
}
