/// ASCII punctuation and digits removed by the normalizer.
pub const STRIPPED_CHARS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~0123456789";

const STRIP_TABLE: [bool; 128] = build_strip_table(STRIPPED_CHARS.as_bytes());

const fn build_strip_table(chars: &[u8]) -> [bool; 128] {
    let mut table = [false; 128];
    let mut i = 0;
    while i < chars.len() {
        table[chars[i] as usize] = true;
        i += 1;
    }
    table
}

#[inline(always)]
fn is_stripped(ch: char) -> bool {
    ch.is_ascii() && STRIP_TABLE[ch as usize]
}

/// Text normalizer for word counting.
///
/// Performs the following operations, in order:
/// - Removes every character in [`STRIPPED_CHARS`] (no replacement, so
///   `"can't"` becomes `"cant"`)
/// - Converts all characters to lowercase (Unicode-aware, locale-independent)
///
/// Whitespace and every other character pass through unchanged apart from
/// case folding. The output is a fixed point: normalizing it again yields the
/// same string.
///
/// # Examples
///
/// ```
/// use zipf_core::analyzer::normalizer::TextNormalizer;
///
/// let normalizer = TextNormalizer::new();
/// assert_eq!(normalizer.normalize("The cat's mat, 2024!"), "the cats mat ");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TextNormalizer;

impl TextNormalizer {
    /// Creates a new normalizer.
    pub const fn new() -> Self {
        Self
    }

    /// Normalizes text into an existing String buffer.
    ///
    /// Clears the buffer before writing and reuses its capacity.
    #[inline]
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len());

        let mut ascii = true;
        for ch in input.chars() {
            if is_stripped(ch) {
                continue;
            }
            ascii &= ch.is_ascii();
            out.push(ch);
        }

        if ascii {
            out.make_ascii_lowercase();
        } else {
            // Whole-string lowering applies the final-sigma rule.
            *out = out.to_lowercase();
        }
    }

    /// Normalizes text and returns a new String.
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }
}

/// Normalizes `text` with a default [`TextNormalizer`].
#[inline]
pub fn normalize(text: &str) -> String {
    TextNormalizer::new().normalize(text)
}
