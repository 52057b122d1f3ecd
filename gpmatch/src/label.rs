//! Values occurring in host graph labels.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Display};

/// Atomic value of a host label.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum HostAtom {
    Int(i32),
    Str(String),
}

/// Host label: a possibly empty list of atoms.
pub type HostList = Vec<HostAtom>;

impl From<i32> for HostAtom {
    fn from(i: i32) -> Self {
        Self::Int(i)
    }
}

impl From<&str> for HostAtom {
    fn from(s: &str) -> Self {
        Self::Str(s.into())
    }
}

impl From<String> for HostAtom {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl Display for HostAtom {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{}", i),
            Self::Str(s) => write!(f, "\"{}\"", s),
        }
    }
}

/// Display a host list with atoms separated by colons.
///
/// ~~~
/// # use gpmatch::label::{fmt_list, HostAtom};
/// struct L(Vec<HostAtom>);
/// impl core::fmt::Display for L {
///     fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
///         fmt_list(&self.0, f)
///     }
/// }
/// assert_eq!(L(vec![1.into(), "a".into()]).to_string(), r#"1 : "a""#);
/// assert_eq!(L(vec![]).to_string(), "empty");
/// ~~~
pub fn fmt_list(list: &[HostAtom], f: &mut fmt::Formatter) -> fmt::Result {
    let mut iter = list.iter();
    match iter.next() {
        None => write!(f, "empty"),
        Some(head) => {
            write!(f, "{}", head)?;
            iter.try_for_each(|atom| write!(f, " : {}", atom))
        }
    }
}
