use regex::{NoExpand, Regex};

/// Builds the wrapper's BINARY declaration for the given bytecode.
///
/// The `0x` prefix is always prepended here because solc does not emit one
/// in the .bin file.
pub fn binary_declaration(bytecode: &str) -> String {
    format!(r#"public static final String BINARY = "0x{}";"#, bytecode)
}

/// Replaces every `public static final String BINARY = "...";` declaration
/// in `content` with a fresh declaration for `bytecode`.
///
/// The match is purely textual: the literal declaration prefix, a run of
/// non-quote characters, then `";`. Content without a match is returned
/// unchanged; when the declaration appears more than once, every occurrence
/// is rewritten to the same value.
pub fn update_binary_constant(content: &str, bytecode: &str) -> String {
    let pattern = Regex::new(r#"public static final String BINARY = "[^"]*";"#).unwrap();
    let declaration = binary_declaration(bytecode);
    pattern
        .replace_all(content, NoExpand(&declaration))
        .into_owned()
}
