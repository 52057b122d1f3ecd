//! Variable-value assignments with undo in reverse binding order.

use crate::label::{fmt_list, HostAtom, HostList};
use crate::Stack;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec;
use core::fmt::{self, Display};

/// Value bound to a rule variable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Integer(i32),
    String(String),
    List(HostList),
}

/// Type of a value, as declared for the variable in the rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    Integer,
    String,
    List,
}

/// Result of trying to bind a variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// the variable is bound to a different value
    Rejected,
    /// the variable is already bound to an equal value
    Consistent,
    /// the variable was unbound and is now bound to the value
    Bound,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// a variable was read with an accessor for another type
    TypeMismatch {
        id: usize,
        expected: Kind,
        found: Option<Kind>,
    },
    /// more assignments were to be undone than exist
    Underflow { requested: usize, live: usize },
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Self::Integer(_) => Kind::Integer,
            Self::String(_) => Kind::String,
            Self::List(_) => Kind::List,
        }
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Integer(i)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<HostList> for Value {
    fn from(l: HostList) -> Self {
        Self::List(l)
    }
}

/// Store of variable-value assignments.
///
/// Every variable of a rule has a slot, which is either unbound or
/// holds the value the variable is bound to.
/// Bindings are recorded on a stack,
/// so that the most recent bindings can be undone by number only.
///
/// ~~~
/// # use gpmatch::assignment::{Assignments, Outcome};
/// let mut asg = Assignments::new(2);
/// assert_eq!(asg.try_assign_integer(0, 3), Outcome::Bound);
/// assert_eq!(asg.try_assign_integer(0, 3), Outcome::Consistent);
/// assert_eq!(asg.try_assign_integer(0, 4), Outcome::Rejected);
/// assert_eq!(asg.try_assign_string(1, "ab"), Outcome::Bound);
/// assert_eq!(asg.len(), 2);
///
/// asg.undo(1)?;
/// assert!(asg.get(1).is_none());
/// assert_eq!(asg.integer(0)?, 3);
/// # Ok::<_, gpmatch::assignment::Error>(())
/// ~~~
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignments {
    slots: Box<[Option<Value>]>,
    /// ids of bound variables, in the order of binding
    order: Stack<usize>,
}

impl Assignments {
    /// Create a store for the given number of variables, all unbound.
    pub fn new(variables: usize) -> Self {
        Self {
            slots: vec![None; variables].into_boxed_slice(),
            order: Stack::with_capacity(variables),
        }
    }

    /// Number of variables in the store, bound or not.
    pub fn variables(&self) -> usize {
        self.slots.len()
    }

    /// Number of bound variables.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Bind a variable unless it is already bound.
    ///
    /// `matches` decides whether an existing binding equals the new value, and
    /// `value` is only called if the variable is unbound.
    fn assign_with<M, V>(&mut self, id: usize, matches: M, value: V) -> Outcome
    where
        M: Fn(&Value) -> bool,
        V: FnOnce() -> Value,
    {
        match &self.slots[id] {
            Some(old) if matches(old) => Outcome::Consistent,
            Some(old) => {
                trace!("reject assignment of variable {}, bound to {}", id, old);
                Outcome::Rejected
            }
            None => {
                let value = value();
                trace!("assign {} to variable {}", value, id);
                self.slots[id] = Some(value);
                self.order.push(id);
                Outcome::Bound
            }
        }
    }

    /// Bind a variable to a value, or check that it is bound to an equal value.
    pub fn try_assign(&mut self, id: usize, value: Value) -> Outcome {
        match value {
            Value::Integer(i) => self.try_assign_integer(id, i),
            Value::String(s) => self.try_assign_string(id, &s),
            Value::List(l) => self.try_assign_list(id, &l),
        }
    }

    pub fn try_assign_integer(&mut self, id: usize, i: i32) -> Outcome {
        let matches = |old: &Value| matches!(old, Value::Integer(j) if *j == i);
        self.assign_with(id, matches, || Value::Integer(i))
    }

    pub fn try_assign_string(&mut self, id: usize, s: &str) -> Outcome {
        let matches = |old: &Value| matches!(old, Value::String(t) if t == s);
        self.assign_with(id, matches, || Value::String(s.into()))
    }

    pub fn try_assign_list(&mut self, id: usize, l: &[HostAtom]) -> Outcome {
        let matches = |old: &Value| matches!(old, Value::List(m) if m[..] == *l);
        self.assign_with(id, matches, || Value::List(l.to_vec()))
    }

    /// Return the value bound to a variable, if any.
    pub fn get(&self, id: usize) -> Option<&Value> {
        self.slots[id].as_ref()
    }

    /// Return the type of the value bound to a variable, if any.
    pub fn kind(&self, id: usize) -> Option<Kind> {
        self.get(id).map(Value::kind)
    }

    fn mismatch(&self, id: usize, expected: Kind) -> Error {
        let found = self.kind(id);
        Error::TypeMismatch {
            id,
            expected,
            found,
        }
    }

    /// Return the integer bound to a variable.
    pub fn integer(&self, id: usize) -> Result<i32, Error> {
        match self.get(id) {
            Some(Value::Integer(i)) => Ok(*i),
            _ => Err(self.mismatch(id, Kind::Integer)),
        }
    }

    /// Return the string bound to a variable.
    pub fn string(&self, id: usize) -> Result<&str, Error> {
        match self.get(id) {
            Some(Value::String(s)) => Ok(s.as_str()),
            _ => Err(self.mismatch(id, Kind::String)),
        }
    }

    /// Return the list bound to a variable.
    pub fn list(&self, id: usize) -> Result<&[HostAtom], Error> {
        match self.get(id) {
            Some(Value::List(l)) => Ok(l.as_slice()),
            _ => Err(self.mismatch(id, Kind::List)),
        }
    }

    /// Unbind the most recently bound variable and return its id.
    pub fn pop(&mut self) -> Option<usize> {
        let id = self.order.pop()?;
        self.slots[id] = None;
        Some(id)
    }

    /// Unbind the `n` most recently bound variables.
    ///
    /// Fails without changing anything if fewer than `n` variables are bound.
    pub fn undo(&mut self, n: usize) -> Result<(), Error> {
        let live = self.order.len();
        let ids = self.order.pop_many(n).ok_or(Error::Underflow { requested: n, live })?;
        for id in ids {
            self.slots[id] = None;
        }
        if n > 0 {
            debug!("undo {} of {} assignments", n, live);
        }
        Ok(())
    }

    /// Unbind all variables.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.order.clear()
    }

    /// Ids of bound variables, most recently bound first.
    pub fn order(&self) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().copied()
    }

    /// Bound variables and their values, ordered by variable id.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Value)> {
        let slots = self.slots.iter().enumerate();
        slots.filter_map(|(id, slot)| Some((id, slot.as_ref()?)))
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::String => write!(f, "string"),
            Self::List => write!(f, "list"),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{}", i),
            Self::String(s) => write!(f, "\"{}\"", s),
            Self::List(l) => fmt_list(l, f),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::TypeMismatch {
                id,
                expected,
                found: Some(found),
            } => write!(f, "variable {} is a {}, not a {}", id, found, expected),
            Self::TypeMismatch {
                id,
                expected,
                found: None,
            } => write!(f, "variable {} is unbound, expected a {}", id, expected),
            Self::Underflow { requested, live } => write!(
                f,
                "cannot undo {} assignments, only {} are bound",
                requested, live
            ),
        }
    }
}
