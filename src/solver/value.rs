use std::fmt;

use serde::{Deserialize, Serialize};

/// A cage operator, including the `?` tag used when a puzzle does not reveal
/// which operation a cage uses.
///
/// `Unknown` exists only so that it can appear in the domain of an auxiliary
/// operator variable; it is never applied to operands. When a cage's operator
/// is unknown, the cage compiler expands the relation as the union over the
/// four concrete operators instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "*")]
    Mul,
    #[serde(rename = "/")]
    Div,
    #[serde(rename = "?")]
    Unknown,
}

impl Operator {
    /// The four operators that can actually be applied to operands.
    pub const CONCRETE: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    pub fn is_concrete(self) -> bool {
        !matches!(self, Operator::Unknown)
    }

    /// Applies the operator to a pair of operands.
    ///
    /// Division uses real-number semantics, so `16 / 2 / 2` folds to `4.0`
    /// and `7 / 2` to `3.5`. Returns `None` for division by zero and for
    /// `Unknown`; the caller treats `None` as "this candidate does not
    /// satisfy the cage", never as a fatal error.
    pub fn apply(self, a: f64, b: f64) -> Option<f64> {
        match self {
            Operator::Add => Some(a + b),
            Operator::Sub => Some(a - b),
            Operator::Mul => Some(a * b),
            Operator::Div => (b != 0.0).then(|| a / b),
            Operator::Unknown => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Unknown => "?",
        };
        f.write_str(symbol)
    }
}

/// A value in a variable's domain.
///
/// Grid cells hold `Int` values; the auxiliary operator variable created for
/// each cage holds `Op` values. Keeping the operator a proper variant (rather
/// than a raw character) means an operator domain can never contain an
/// invalid symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Value {
    Int(i64),
    Op(Operator),
}

impl Value {
    pub fn as_int(self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(i),
            Value::Op(_) => None,
        }
    }

    pub fn as_op(self) -> Option<Operator> {
        match self {
            Value::Int(_) => None,
            Value::Op(op) => Some(op),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i}"),
            Value::Op(op) => write!(f, "{op}"),
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<Operator> for Value {
    fn from(op: Operator) -> Self {
        Value::Op(op)
    }
}
