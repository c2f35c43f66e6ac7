//! Tokenizer for the free-text senescence category field.
//!
//! The GenAge `why` column is a comma-separated list of category tokens
//! with no fixed vocabulary. Tokens are discovered at runtime; comparison
//! is by exact string match after trimming.

/// Split a raw `why` value into its category tokens.
///
/// Splits on `,`, trims whitespace from each piece, discards empty pieces,
/// and drops duplicates keeping the first occurrence. The returned vector
/// is an ordered set: membership is set-like, but the left-to-right split
/// order is preserved so that vocabulary discovery downstream is
/// deterministic.
///
/// Applying the function to its own joined output yields the same tokens
/// (idempotent).
pub fn tokenize(why: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for piece in why.split(',') {
        let trimmed = piece.trim();
        if trimmed.is_empty() {
            continue;
        }
        if tokens.iter().any(|t| t == trimmed) {
            continue;
        }
        tokens.push(trimmed.to_string());
    }
    tokens
}
