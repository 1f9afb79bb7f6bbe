use once_cell::sync::Lazy;
use std::collections::HashMap;

/// The glide consonant used by the doubled-letter rule: a middle ו marks a
/// hollow root whose geminate counterpart doubles the final radical.
pub const GLIDE_LETTER: char = 'ו';

/// Atbash pairing: first letter of the alphabet with the last, second with
/// the second-to-last, and so on. Stored one way; the lookup table mirrors it.
const ATBASH_PAIRS: [(char, char); 11] = [
    ('א', 'ת'),
    ('ב', 'ש'),
    ('ג', 'ר'),
    ('ד', 'ק'),
    ('ה', 'צ'),
    ('ו', 'פ'),
    ('ז', 'ע'),
    ('ח', 'ס'),
    ('ט', 'נ'),
    ('י', 'מ'),
    ('כ', 'ל'),
];

static ATBASH: Lazy<HashMap<char, char>> = Lazy::new(|| {
    let mut table = HashMap::with_capacity(ATBASH_PAIRS.len() * 2);
    for &(a, b) in &ATBASH_PAIRS {
        table.insert(a, b);
        table.insert(b, a);
    }
    table
});

/// Normalize the two interchanging glides before a cipher lookup: ו and י
/// swap freely in weak roots, so both are folded to י.
pub fn fold_glide(letter: char) -> char {
    if letter == 'ו' {
        'י'
    } else {
        letter
    }
}

/// The cipher partner of a letter under the atbash bijection, after glide
/// folding. `None` for characters outside the alphabet.
pub fn cipher_partner(letter: char) -> Option<char> {
    ATBASH.get(&fold_glide(letter)).copied()
}
