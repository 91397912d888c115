//! Tree nodes

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Dictionary payload of an object node
pub type Map = hashbrown::HashMap<String, Node>;

/// Shape of a node, without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl NodeKind {
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Null => "null",
            NodeKind::Bool => "bool",
            NodeKind::Number => "number",
            NodeKind::String => "string",
            NodeKind::Array => "array",
            NodeKind::Object => "object",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A JSON number.
///
/// Integers that fit in an `i64` are always stored as [`Number::Int`];
/// [`Number::UInt`] only holds values above `i64::MAX`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Number {
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl Number {
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Number::Int(n) => Some(n),
            Number::UInt(n) => i64::try_from(n).ok(),
            Number::Float(_) => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Number::Int(n) => u64::try_from(n).ok(),
            Number::UInt(n) => Some(n),
            Number::Float(_) => None,
        }
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Int(n) => n as f64,
            Number::UInt(n) => n as f64,
            Number::Float(n) => n,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{}", n),
            Number::UInt(n) => write!(f, "{}", n),
            Number::Float(n) => write!(f, "{}", n),
        }
    }
}

/// A node in a dictionary-shaped tree
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Node {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Node>),
    Object(Map),
}

impl Node {
    /// Build an object node from key/value pairs
    pub fn object<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Node>,
        I: IntoIterator<Item = (K, V)>,
    {
        entries.into_iter().collect()
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Null => NodeKind::Null,
            Node::Bool(_) => NodeKind::Bool,
            Node::Number(_) => NodeKind::Number,
            Node::String(_) => NodeKind::String,
            Node::Array(_) => NodeKind::Array,
            Node::Object(_) => NodeKind::Object,
        }
    }

    /// Look up `key` in an object node. Returns `None` for a missing key and
    /// for nodes that are not objects.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_object().and_then(|map| map.get(key))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Node::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Node]> {
        match self {
            Node::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<Number> {
        match self {
            Node::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.as_number().and_then(|n| n.as_i64())
    }

    pub fn as_u64(&self) -> Option<u64> {
        self.as_number().and_then(|n| n.as_u64())
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().map(|n| n.as_f64())
    }
}

/// Compact JSON-like rendering. Object keys are sorted so the output is
/// stable regardless of map iteration order.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Null => f.write_str("null"),
            Node::Bool(b) => write!(f, "{}", b),
            Node::Number(n) => write!(f, "{}", n),
            Node::String(s) => write!(f, "{:?}", s),
            Node::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Node::Object(map) => {
                let mut entries: Vec<(&String, &Node)> = map.iter().collect();
                entries.sort_by(|a, b| a.0.cmp(b.0));
                f.write_str("{")?;
                for (i, (key, value)) in entries.into_iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{:?}:{}", key, value)?;
                }
                f.write_str("}")
            }
        }
    }
}

// ============================================================================
// From implementations
// ============================================================================

impl From<bool> for Node {
    fn from(v: bool) -> Self { Node::Bool(v) }
}

macro_rules! from_signed {
    ($($ty:ty),*) => {$(
        impl From<$ty> for Node {
            fn from(v: $ty) -> Self { Node::Number(Number::Int(v as i64)) }
        }
    )*};
}

from_signed!(i8, i16, i32, i64);

macro_rules! from_unsigned {
    ($($ty:ty),*) => {$(
        impl From<$ty> for Node {
            fn from(v: $ty) -> Self { Node::Number(Number::Int(v as i64)) }
        }
    )*};
}

from_unsigned!(u8, u16, u32);

impl From<u64> for Node {
    fn from(v: u64) -> Self {
        match i64::try_from(v) {
            Ok(n) => Node::Number(Number::Int(n)),
            Err(_) => Node::Number(Number::UInt(v)),
        }
    }
}

impl From<f32> for Node {
    fn from(v: f32) -> Self { Node::Number(Number::Float(v as f64)) }
}

impl From<f64> for Node {
    fn from(v: f64) -> Self { Node::Number(Number::Float(v)) }
}

impl From<Number> for Node {
    fn from(v: Number) -> Self { Node::Number(v) }
}

impl From<String> for Node {
    fn from(v: String) -> Self { Node::String(v) }
}

impl From<&str> for Node {
    fn from(v: &str) -> Self { Node::String(String::from(v)) }
}

impl From<Map> for Node {
    fn from(v: Map) -> Self { Node::Object(v) }
}

impl<T: Into<Node>> From<Vec<T>> for Node {
    fn from(v: Vec<T>) -> Self {
        Node::Array(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Node::Null)
    }
}

impl<K: Into<String>, V: Into<Node>> FromIterator<(K, V)> for Node {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Node::Object(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
