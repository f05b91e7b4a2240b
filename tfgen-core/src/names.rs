//! Identifier mangling shared by the resolver and the emitters.

use crate::utils::{to_camel_case, to_pascal_case};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SplitState {
    First,
    Upper,
    Acronym,
    LowerOrNumber,
}

/// Split a camelCase or PascalCase identifier into lowercase words.
///
/// Runs of capitals are kept together as an acronym, and digits that follow
/// an acronym stay with it. When an acronym runs into a lowercase letter
/// its last capital starts the next word, so `ABCd` splits as `ab` + `cd`.
///
/// ```
/// use tfgen_core::split_words;
///
/// assert_eq!(split_words("SHA256Hash"), vec!["sha256", "hash"]);
/// assert_eq!(split_words("instanceType"), vec!["instance", "type"]);
/// ```
pub fn split_words(name: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current: Vec<char> = Vec::new();
    let mut state = SplitState::First;

    for c in name.chars() {
        state = match state {
            SplitState::First if c.is_uppercase() => {
                current.extend(c.to_lowercase());
                SplitState::Upper
            }
            SplitState::First => {
                current.push(c);
                SplitState::LowerOrNumber
            }
            SplitState::Upper if c.is_uppercase() => {
                current.extend(c.to_lowercase());
                SplitState::Acronym
            }
            SplitState::Upper => {
                current.push(c);
                SplitState::LowerOrNumber
            }
            SplitState::Acronym if c.is_uppercase() => {
                current.extend(c.to_lowercase());
                SplitState::Acronym
            }
            SplitState::Acronym if c.is_ascii_digit() => {
                current.push(c);
                SplitState::LowerOrNumber
            }
            SplitState::Acronym => {
                let last = current.pop();
                words.push(current.drain(..).collect());
                current.extend(last);
                current.push(c);
                SplitState::LowerOrNumber
            }
            SplitState::LowerOrNumber if c.is_uppercase() => {
                words.push(current.drain(..).collect());
                current.extend(c.to_lowercase());
                SplitState::Upper
            }
            SplitState::LowerOrNumber => {
                current.push(c);
                SplitState::LowerOrNumber
            }
        };
    }

    words.push(current.into_iter().collect());
    words
}

/// Join the words of [`split_words`] with underscores.
pub fn to_snake_words(name: &str) -> String {
    split_words(name).join("_")
}

/// Canonical property name for a schema key: strip one trailing `:` and
/// convert `snake_case` to `camelCase`.
pub fn terraform_to_pulumi_name(name: &str) -> String {
    let name = name.strip_suffix(':').unwrap_or(name);
    to_camel_case(name)
}

/// Canonical type name for a schema key (PascalCase).
pub fn terraform_to_pulumi_type_name(name: &str) -> String {
    let name = name.strip_suffix(':').unwrap_or(name);
    to_pascal_case(name)
}

/// Reverse of [`terraform_to_pulumi_name`] for names without acronyms.
pub fn pulumi_to_terraform_name(name: &str) -> String {
    let mut result = String::new();
    for c in name.chars() {
        if c.is_uppercase() {
            result.push('_');
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Singularize an English plural, the way nested type names need it.
pub fn singularize(word: &str) -> String {
    let lower = word.to_lowercase();
    match word.strip_suffix("ies") {
        Some(stem) if !stem.is_empty() => return format!("{}y", stem),
        _ => {}
    }
    if lower.ends_with("sses") {
        return word[..word.len() - 2].to_string();
    }
    for suffix in ["xes", "ches", "shes"] {
        if lower.ends_with(suffix) {
            return word[..word.len() - 2].to_string();
        }
    }
    if lower.ends_with('s') && !["ss", "us", "is"].iter().any(|s| lower.ends_with(s)) {
        return word[..word.len() - 1].to_string();
    }
    word.to_string()
}
