//! Examples of using the compact trie
use compact_trie::Trie;

fn main() {
    let mut trie = Trie::from(["corn", "corner", "contain", "mat", "math"]);

    // Membership and prefix counts
    assert!(trie.contains("corn"));
    assert!(!trie.contains("cor"));
    assert_eq!(trie.len_prefix("co"), 3);

    // Keys come back in lexicographic order
    let keys: Vec<String> = trie.iter().collect();
    assert_eq!(keys, ["contain", "corn", "corner", "mat", "math"]);

    // Iterate only the keys under a prefix, from either end
    let under_cor: Vec<String> = trie.iter_prefix("cor").rev().collect();
    assert_eq!(under_cor, ["corner", "corn"]);

    // Insert returns a cursor at the new key
    let cursor = trie.insert("material");
    assert_eq!(cursor.key().as_deref(), Some("material"));

    // Erase single keys or whole prefixes
    trie.erase("corn");
    trie.erase_prefix("mat");
    assert_eq!(trie.to_string(), "contain\ncorner\n");

    // Set algebra
    let other = Trie::from(["corner", "zebra"]);
    let union = &trie + &other;
    assert_eq!(union.len(), 3);
    assert!(trie < union);

    // Node layout
    println!("{}", union.to_json(false).unwrap_or_default());
}

#[test]
fn test_cursor_walk() {
    let trie = Trie::from(["b", "a", "c"]);
    let mut cursor = trie.end();

    cursor.move_prev();
    assert_eq!(cursor.key().as_deref(), Some("c"));
    cursor.move_prev();
    assert_eq!(cursor.key().as_deref(), Some("b"));
}
