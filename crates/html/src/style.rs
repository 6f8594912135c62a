//! Deduplicated CSS rules keyed by structural cache keys.

use std::collections::HashMap;
use std::fmt;

/// One component of a [`StyleKey`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeyPart {
    Str(String),
    Int(i64),
    UInt(u64),
    Bool(bool),
    Char(char),
    /// Separates positional arguments from keyword arguments, so `f(a, b)`
    /// and `f(a, b=...)` never collide.
    Kwargs,
}

impl fmt::Display for KeyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyPart::Str(s) => f.write_str(s),
            KeyPart::Int(v) => write!(f, "{v}"),
            KeyPart::UInt(v) => write!(f, "{v}"),
            KeyPart::Bool(v) => write!(f, "{v}"),
            KeyPart::Char(c) => write!(f, "{c}"),
            KeyPart::Kwargs => f.write_str("*"),
        }
    }
}

impl From<&str> for KeyPart {
    fn from(value: &str) -> Self {
        KeyPart::Str(value.to_string())
    }
}

impl From<String> for KeyPart {
    fn from(value: String) -> Self {
        KeyPart::Str(value)
    }
}

impl From<&String> for KeyPart {
    fn from(value: &String) -> Self {
        KeyPart::Str(value.clone())
    }
}

impl From<bool> for KeyPart {
    fn from(value: bool) -> Self {
        KeyPart::Bool(value)
    }
}

impl From<char> for KeyPart {
    fn from(value: char) -> Self {
        KeyPart::Char(value)
    }
}

macro_rules! key_part_from_int {
    ($variant:ident($wide:ty): $($ty:ty),+) => {
        $(
            impl From<$ty> for KeyPart {
                fn from(value: $ty) -> Self {
                    KeyPart::$variant(value as $wide)
                }
            }
        )+
    };
}

key_part_from_int!(Int(i64): i8, i16, i32, i64, isize);
key_part_from_int!(UInt(u64): u8, u16, u32, u64, usize);

/// Identity of a style rule request: the producing function's module and
/// name followed by its arguments.
///
/// Equality and hashing are structural, so two keys built separately from
/// equal parts name the same rule.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StyleKey {
    parts: Vec<KeyPart>,
}

impl StyleKey {
    pub fn new(module: impl Into<KeyPart>, name: impl Into<KeyPart>) -> Self {
        Self {
            parts: vec![module.into(), name.into()],
        }
    }

    /// Append a positional argument.
    pub fn arg(mut self, value: impl Into<KeyPart>) -> Self {
        self.parts.push(value.into());
        self
    }

    /// Append a keyword argument. Keyword order is significant.
    pub fn kwarg(mut self, name: &str, value: impl Into<KeyPart>) -> Self {
        if !self.parts.contains(&KeyPart::Kwargs) {
            self.parts.push(KeyPart::Kwargs);
        }
        self.parts.push(KeyPart::from(name));
        self.parts.push(value.into());
        self
    }

    pub fn parts(&self) -> &[KeyPart] {
        &self.parts
    }

    /// `cls-{module}-{name}-{serial}` with every character that is not an
    /// ASCII letter, digit, `_` or `-` replaced by `-`.
    pub(crate) fn class_name(&self, serial: u64) -> String {
        let raw = format!("cls-{}-{}-{serial}", self.parts[0], self.parts[1]);
        raw.chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '-'
                }
            })
            .collect()
    }
}

/// Build a [`StyleKey`] whose module is the calling module.
///
/// ```
/// let key = html::style_key!("card", 12, "red");
/// assert_eq!(key.parts().len(), 4);
/// ```
#[macro_export]
macro_rules! style_key {
    ($name:expr $(, $arg:expr)* $(,)?) => {
        $crate::StyleKey::new(::core::module_path!(), $name)$(.arg($arg))*
    };
}

type RuleFn<'a> = Box<dyn FnOnce(&str) -> String + 'a>;

/// A style rule request: its cache key and a generator that, given the
/// class name to target, returns the CSS rule text.
pub struct StyleTemplate<'a> {
    key: StyleKey,
    rule: RuleFn<'a>,
}

impl<'a> StyleTemplate<'a> {
    pub fn new(key: StyleKey, rule: impl FnOnce(&str) -> String + 'a) -> Self {
        Self {
            key,
            rule: Box::new(rule),
        }
    }

    pub fn key(&self) -> &StyleKey {
        &self.key
    }

    pub(crate) fn into_parts(self) -> (StyleKey, RuleFn<'a>) {
        (self.key, self.rule)
    }
}

impl fmt::Debug for StyleTemplate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleTemplate")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

/// Class names handed out so far, and the serial for the next one.
#[derive(Debug, Default)]
pub(crate) struct StyleCache {
    classes: HashMap<StyleKey, String>,
    next_serial: u64,
}

impl StyleCache {
    pub(crate) fn get(&self, key: &StyleKey) -> Option<&str> {
        self.classes.get(key).map(String::as_str)
    }

    /// Mint and remember a class name for a key not seen before.
    pub(crate) fn assign(&mut self, key: StyleKey) -> String {
        let class_name = key.class_name(self.next_serial);
        self.next_serial += 1;
        log::debug!(target: "html.style", "new style class {class_name} for {key:?}");
        self.classes.insert(key, class_name.clone());
        class_name
    }

    pub(crate) fn len(&self) -> usize {
        self.classes.len()
    }
}
