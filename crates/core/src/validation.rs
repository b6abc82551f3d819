//! Lightweight input validation predicates.
//!
//! These are shape checks for form input, not full RFC validation. Every
//! function is total and only answers yes or no.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("Invalid regex"));

/// Whether `email` looks like `local@domain.tld`.
///
/// ```
/// use storekit_core::validation::is_valid_email;
///
/// assert!(is_valid_email("a@b.com"));
/// assert!(!is_valid_email("a@b"));
/// ```
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Whether `phone` is up to 16 digits with an optional leading `+`.
///
/// Whitespace anywhere in the input is ignored. The first digit may not be 0.
#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    PHONE_RE.is_match(&compact)
}

/// Whether `url` parses as an absolute URL.
#[must_use]
pub fn is_valid_url(url: &str) -> bool {
    url::Url::parse(url).is_ok()
}

/// A value that can be checked for presence.
pub trait Required {
    /// Whether the value counts as provided.
    fn is_present(&self) -> bool;
}

impl Required for str {
    fn is_present(&self) -> bool {
        !self.trim().is_empty()
    }
}

impl Required for String {
    fn is_present(&self) -> bool {
        self.as_str().is_present()
    }
}

impl<T> Required for [T] {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Required for Vec<T> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Required> Required for Option<T> {
    fn is_present(&self) -> bool {
        self.as_ref().is_some_and(Required::is_present)
    }
}

impl<T: Required + ?Sized> Required for &T {
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

macro_rules! always_present {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Required for $ty {
                fn is_present(&self) -> bool {
                    true
                }
            }
        )+
    };
}

always_present!(
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    rust_decimal::Decimal,
);

/// Whether a required form value was provided.
///
/// Strings must be non-blank, sequences non-empty, and optional values
/// present (with their content passing the same check). Scalars always pass.
#[must_use]
pub fn validate_required<T: Required + ?Sized>(value: &T) -> bool {
    value.is_present()
}
