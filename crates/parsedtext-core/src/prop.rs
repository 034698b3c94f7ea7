//! Typed token metadata.
//!
//! A pattern carries a map of named props. Each entry is decided by the
//! caller to be either a plain [`Value`] or a [`Callback`]. When a token is
//! created, values are copied verbatim and callbacks are bound to the token's
//! final text and pattern index, so invoking them later needs no arguments.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize, Serializer};

/// Callback attached to a pattern.
///
/// Invoked as `callback(token_text, pattern_index)`.
pub type Callback = Arc<dyn Fn(&str, usize) + Send + Sync>;

/// Props configured on a pattern descriptor, keyed by name.
pub type Props = BTreeMap<String, Prop>;

/// Props attached to a produced token, keyed by name.
pub type TokenProps = BTreeMap<String, TokenProp>;

/// A plain metadata value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Boolean flag (e.g. `bold = true`)
    Bool(bool),
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// String value (e.g. `color = "blue"`)
    String(String),
}

impl Value {
    /// Borrow the string payload, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the boolean payload, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::String(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

/// One entry of a pattern's props.
#[derive(Clone)]
pub enum Prop {
    /// Copied to every token verbatim
    Value(Value),
    /// Bound to each token's final text and pattern index
    Callback(Callback),
}

impl Prop {
    /// Wrap a closure as a callback prop.
    pub fn callback<F>(f: F) -> Self
    where
        F: Fn(&str, usize) + Send + Sync + 'static,
    {
        Prop::Callback(Arc::new(f))
    }

    /// Produce the token-side prop for a token with the given text.
    pub fn bind(&self, text: &str, pattern_index: usize) -> TokenProp {
        match self {
            Prop::Value(v) => TokenProp::Value(v.clone()),
            Prop::Callback(cb) => TokenProp::Callback(BoundCallback {
                callback: Arc::clone(cb),
                text: text.to_string(),
                pattern_index,
            }),
        }
    }
}

impl fmt::Debug for Prop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prop::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Prop::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

macro_rules! prop_from_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Prop {
                fn from(v: $ty) -> Self {
                    Prop::Value(v.into())
                }
            }
        )*
    };
}

prop_from_value!(Value, &str, String, bool, i64, f64);

/// A callback already bound to the token it belongs to.
#[derive(Clone)]
pub struct BoundCallback {
    callback: Callback,
    text: String,
    pattern_index: usize,
}

impl BoundCallback {
    /// Invoke the pattern's callback with this token's text and pattern index.
    pub fn call(&self) {
        (self.callback)(&self.text, self.pattern_index);
    }

    /// Text the callback will receive.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Pattern index the callback will receive.
    pub fn pattern_index(&self) -> usize {
        self.pattern_index
    }
}

impl fmt::Debug for BoundCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundCallback")
            .field("text", &self.text)
            .field("pattern_index", &self.pattern_index)
            .finish_non_exhaustive()
    }
}

impl PartialEq for BoundCallback {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.callback, &other.callback)
            && self.text == other.text
            && self.pattern_index == other.pattern_index
    }
}

/// One entry of a token's props.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenProp {
    /// Value copied from the pattern
    Value(Value),
    /// Callback bound to this token
    Callback(BoundCallback),
}

impl TokenProp {
    /// Borrow the plain value, if this is not a callback.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            TokenProp::Value(v) => Some(v),
            TokenProp::Callback(_) => None,
        }
    }

    /// Borrow the bound callback, if this is one.
    pub fn as_callback(&self) -> Option<&BoundCallback> {
        match self {
            TokenProp::Callback(cb) => Some(cb),
            TokenProp::Value(_) => None,
        }
    }
}

impl Serialize for TokenProp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TokenProp::Value(v) => v.serialize(serializer),
            TokenProp::Callback(_) => serializer.serialize_str("<callback>"),
        }
    }
}
