use std::collections::HashMap;

/// Group words sharing the same character multiset. Canonical key is the
/// sorted character sequence. Groups appear in order of their first
/// member; members keep input order.
pub fn group_anagrams(words: &[&str]) -> Vec<Vec<String>> {
    let mut index: HashMap<Vec<char>, usize> = HashMap::new();
    let mut groups: Vec<Vec<String>> = Vec::new();
    for &word in words {
        let mut key: Vec<char> = word.chars().collect();
        key.sort_unstable();
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(word.to_string());
    }
    groups
}
